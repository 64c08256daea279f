//! Color scales and elastic color mapping for charts.
//!
//! A chart embeds a [`ColorMapper`] and implements [`Colorable`] to get
//! a fluent coloring API without writing any color logic itself:
//!
//! - [`Colorable::set_colors`] picks the [`ColorScale`]: a [`Preset`],
//!   a palette given as a list of colors, or any custom scale;
//! - [`Colorable::set_color_accessor`] chooses what value of a record
//!   is colored (its index by default);
//! - [`Colorable::set_elastic_color`] makes the scale domain follow the
//!   data the chart currently displays;
//! - [`Colorable::set_color_calculator`] replaces the whole pipeline.
//!
//! Continuous scales interpolate in the CIE L\*C\*h\* color space, see
//! [`RGBColor::gradient`].  Categorical [`Palette`]s of d3 are provided:
//! [`RGBColor::category10`], [`RGBColor::category20`],
//! [`RGBColor::category20b`] and [`RGBColor::category20c`].
//!
//! # Example
//!
//! ```
//! use chart_color::{ColorMapper, GroupSource, Preset, Value};
//!
//! struct Sales { amounts: Vec<f64>, amount: fn(&f64) -> f64 }
//!
//! impl GroupSource for Sales {
//!     type Entry = f64;
//!     fn group(&self) -> &[f64] { &self.amounts }
//!     fn value_accessor(&self) -> &dyn Fn(&f64) -> f64 { &self.amount }
//! }
//!
//! let sales = Sales { amounts: vec![120., 80., 300.], amount: |x| *x };
//! let mut mapper = ColorMapper::<f64>::new();
//! mapper.set_colors(["red", "green", "blue"]);
//! assert_eq!(mapper.get_color(&sales, &120., 0).unwrap(), "red");
//! assert_eq!(mapper.get_color(&sales, &80., 1).unwrap(), "green");
//!
//! // Light yellow for the smallest amount, dark blue for the largest.
//! mapper.set_colors(Preset::Linear)
//!     .set_elastic_color(true)
//!     .set_color_accessor(|x, _| Value::from(*x));
//! assert_eq!(mapper.get_color(&sales, &80., 1).unwrap(), "#fdffcc");
//! assert_eq!(mapper.get_color(&sales, &300., 2).unwrap(), "#242a42");
//! ```

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::PaletteType;

pub mod config;
pub mod css;
mod error;
pub mod mapper;
pub mod scale;
mod value;

pub use config::{ColorConfig, ScaleChoice};
pub use error::{Error, Result};
pub use mapper::{Calculator, ColorMapper, Colorable, GroupSource};
pub use scale::{ColorScale, LinearScale, OrdinalScale, Preset, ScaleSpec};
pub use value::Value;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`, interpolating
    /// lightness, chroma and hue (taking the shortest way around the
    /// hue circle).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chart_color::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.), red);
    /// assert_eq!(grad.rgb(1.), blue);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// d3 "category10" qualitative scheme.
    #[inline]
    fn category10() -> Palette<Self> { Palette::new(&palettes::CATEGORY10) }

    /// d3 "category20" qualitative scheme: [`RGBColor::category10`]
    /// with a lighter companion for each hue.
    #[inline]
    fn category20() -> Palette<Self> { Palette::new(&palettes::CATEGORY20) }

    /// d3 "category20b" qualitative scheme: five hues, four shades each.
    #[inline]
    fn category20b() -> Palette<Self> { Palette::new(&palettes::CATEGORY20B) }

    /// d3 "category20c" qualitative scheme: five hues, four shades each.
    /// This is the default palette of a [`ColorMapper`].
    #[inline]
    fn category20c() -> Palette<Self> { Palette::new(&palettes::CATEGORY20C) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

// Float to integer casts saturate, so extrapolated colors stay valid.
impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

/// sRGB channel in \[0, 255\] to linear intensity in \[0, 1\].
fn srgb_to_linear(x: f64) -> f64 {
    let x = x / 255.;
    if x <= 0.04045 { x / 12.92 } else { ((x + 0.055) / 1.055).powf(2.4) }
}

fn linear_to_srgb(x: f64) -> f64 {
    let x = if x <= 0.0031308 { 12.92 * x }
            else { 1.055 * x.powf(1. / 2.4) - 0.055 };
    255. * x
}

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (srgb_to_linear(c.r), srgb_to_linear(c.g),
                         srgb_to_linear(c.b));
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r: linear_to_srgb(r), g: linear_to_srgb(g),
               b: linear_to_srgb(b), a: self.a }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Debug)]
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t`, extrapolating beyond
    /// the two colors when `t` is outside \[0., 1.\].
    #[inline]
    pub fn rgb_unclamped(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unclamped(t.clamp(0., 1.)) }
}


/// A fixed list of colors, see the constructors of [`RGBColor`].
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }
}

impl<Color> Palette<Color>
where Color: RGBColor {
    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns the colors of the palette as CSS strings `#rrggbb`.
    pub fn css_colors(&self) -> Vec<String> {
        self.palette.rgb.iter()
            .map(|&c| css::css_string(RGB8::from_rgba(c)))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        let c0 = RGB8::new(94, 0, 99);
        let c1 = RGB8::new(255, 235, 170);
        let g = c0.gradient(&c1);
        assert_eq!(g.rgb(0.), c0);
        assert_eq!(g.rgb(1.), c1);
        assert_eq!(g.rgb(-3.), c0);
        assert_eq!(g.rgb(7.), c1);
    }

    #[test]
    fn gradient_lightness_is_monotone() {
        let black = RGB8::new(0, 0, 0);
        let white = RGB8::new(255, 255, 255);
        let g = black.gradient(&white);
        let grays: Vec<RGB8> = (0 ..= 10).map(|i| g.rgb(0.1 * i as f64))
            .collect();
        for w in grays.windows(2) {
            assert!(w[0].g <= w[1].g, "{:?} > {:?}", w[0], w[1]);
        }
        // Perceptual midpoint is lighter than the sRGB midpoint.
        assert!(g.rgb(0.5).g > 100, "{:?}", g.rgb(0.5));
    }

    #[test]
    fn lch_round_trip() {
        for c in RGB8::category20c().colors() {
            assert_eq!(RGB8::from_rgba(Lch::from_rgb(c.to_rgba()).to_rgb()), c);
        }
    }

    #[test]
    fn categorical_palettes() {
        assert_eq!(RGB8::category10().len(), 10);
        assert_eq!(RGB8::category20().len(), 20);
        assert_eq!(RGB8::category20b().len(), 20);
        let p = RGB8::category20c();
        assert_eq!(p.len(), 20);
        assert_eq!(p.typ(), PaletteType::Qual);
        assert_eq!(p.css_colors()[0], "#3182bd");
        assert_eq!(p.colors()[19], RGB8::new(0xd9, 0xd9, 0xd9));
    }
}
