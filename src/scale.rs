//! Color scales: map a domain [`Value`] to a CSS color string.
//!
//! Two scales are built in: [`OrdinalScale`], handing out the colors
//! of a palette to successive distinct values, and [`LinearScale`],
//! interpolating between two colors over a numeric domain.  Any other
//! type implementing [`ColorScale`] can be plugged into a
//! [`ColorMapper`](crate::ColorMapper).

use std::{collections::HashMap, fmt, str::FromStr};
use rgb::{RGBA, RGB8};
use serde::{Deserialize, Serialize};

use crate::{css, Error, Gradient, RGBColor, Result, Value};

/// A mapping from domain values to colors, with a mutable domain.
pub trait ColorScale {
    /// Return the color of `value`.  Takes `&mut self` because some
    /// scales (e.g. [`OrdinalScale`]) learn their domain on the fly.
    fn map(&mut self, value: &Value) -> Result<String>;

    /// The current domain (the input range).
    fn domain(&self) -> Vec<Value>;

    /// Replace the domain.  No check is performed: an unusable domain
    /// is reported by [`ColorScale::map`].
    fn set_domain(&mut self, domain: Vec<Value>);

    /// The colors the scale maps to.
    fn range(&self) -> Vec<String>;
}

/// Discrete scale assigning the colors of its range, in order, to
/// each new value it sees.  Once the range is exhausted, colors are
/// reused cyclically.
#[derive(Clone, Debug, Default)]
pub struct OrdinalScale {
    domain: Vec<Value>,
    index: HashMap<String, usize>, // key → position in `domain`
    range: Vec<String>,
}

impl OrdinalScale {
    /// Return an ordinal scale with the given colors and an empty
    /// domain.  Colors are returned verbatim by [`ColorScale::map`].
    pub fn new<S: Into<String>>(range: impl IntoIterator<Item = S>) -> Self {
        Self { domain: vec![], index: HashMap::new(),
               range: range.into_iter().map(Into::into).collect() }
    }

    /// Return an ordinal scale over the colors of `palette`.
    pub fn from_palette<C: RGBColor>(palette: crate::Palette<C>) -> Self {
        Self::new(palette.css_colors())
    }

    /// Replace the colors, keeping the domain.
    pub fn set_range<S: Into<String>>(
        &mut self, range: impl IntoIterator<Item = S>) -> &mut Self {
        self.range = range.into_iter().map(Into::into).collect();
        self
    }

    fn position(&mut self, value: &Value) -> usize {
        let key = value.key();
        if let Some(&i) = self.index.get(&key) {
            return i
        }
        self.domain.push(value.clone());
        self.index.insert(key, self.domain.len() - 1);
        self.domain.len() - 1
    }
}

impl ColorScale for OrdinalScale {
    fn map(&mut self, value: &Value) -> Result<String> {
        let i = self.position(value);
        if self.range.is_empty() {
            return Err(Error::EmptyRange)
        }
        Ok(self.range[i % self.range.len()].clone())
    }

    fn domain(&self) -> Vec<Value> { self.domain.clone() }

    fn set_domain(&mut self, domain: Vec<Value>) {
        self.domain.clear();
        self.index.clear();
        for v in &domain {
            self.position(v);
        }
    }

    fn range(&self) -> Vec<String> { self.range.clone() }
}


/// Continuous scale mapping a numeric domain `[d0, d1]` to a gradient
/// between two colors.  Output colors are `#rrggbb` strings.
///
/// Values outside of the domain extrapolate the gradient unless the
/// scale is [clamped](LinearScale::clamp).  A domain with `d0 == d1`
/// maps everything to the first color.
///
/// # Example
///
/// ```
/// use chart_color::{ColorScale, LinearScale, Value};
/// let mut s = LinearScale::new("black", "white").unwrap()
///     .with_domain(0., 10.);
/// assert_eq!(s.map(&Value::from(10)).unwrap(), "#ffffff");
/// ```
#[derive(Clone, Debug)]
pub struct LinearScale {
    domain: Vec<f64>, // NaN for non-numeric bounds
    range: [String; 2],
    gradient: Gradient<RGBA<f64>>,
    clamp: bool,
}

impl LinearScale {
    /// Return a scale over the domain `[0, 1]` from color `c0` to
    /// color `c1` (CSS strings, see [`css::parse_color`]).
    pub fn new(c0: &str, c1: &str) -> Result<Self> {
        let rgb0 = css::parse_color(c0)?;
        let rgb1 = css::parse_color(c1)?;
        Ok(Self::from_rgba([c0.to_string(), c1.to_string()], rgb0, rgb1))
    }

    fn from_rgba(range: [String; 2], c0: RGBA<f64>, c1: RGBA<f64>) -> Self {
        LinearScale { domain: vec![0., 1.], range,
                      gradient: c0.gradient(&c1), clamp: false }
    }

    /// Set the domain to `[d0, d1]`.
    pub fn with_domain(mut self, d0: f64, d1: f64) -> Self {
        self.domain = vec![d0, d1];
        self
    }

    /// Whether values outside of the domain map to the nearest color
    /// of the range instead of extrapolating.
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn is_clamped(&self) -> bool { self.clamp }
}

impl Default for LinearScale {
    /// Light yellow to dark blue, the [`Preset::Linear`] scale.
    fn default() -> Self {
        Self::from_rgba(["hsl(62,100%,90%)".to_string(),
                         "hsl(228,30%,20%)".to_string()],
                        css::hsl(62., 1., 0.9), css::hsl(228., 0.3, 0.2))
    }
}

impl ColorScale for LinearScale {
    fn map(&mut self, value: &Value) -> Result<String> {
        let x = match value.as_number() {
            Some(x) if !x.is_nan() => x,
            _ => return Err(Error::NotNumeric(value.clone())),
        };
        let (d0, d1) = match *self.domain.as_slice() {
            [d0, .., d1] => (d0, d1),
            _ => return Err(Error::InvalidDomain {
                message: format!("{} bound(s), at least 2 required",
                                 self.domain.len()) }),
        };
        if !(d0.is_finite() && d1.is_finite()) {
            return Err(Error::InvalidDomain {
                message: format!("[{d0}, {d1}] is not finite") })
        }
        let mut t = if d1 != d0 { (x - d0) / (d1 - d0) } else { 0. };
        if self.clamp { t = t.clamp(0., 1.) }
        let rgba = self.gradient.rgb_unclamped(t);
        Ok(css::css_string(RGB8::from_rgba(rgba)))
    }

    fn domain(&self) -> Vec<Value> {
        self.domain.iter().map(|&x| Value::Number(x)).collect()
    }

    fn set_domain(&mut self, domain: Vec<Value>) {
        self.domain = domain.iter()
            .map(|v| v.as_number().unwrap_or(f64::NAN))
            .collect();
    }

    fn range(&self) -> Vec<String> { self.range.to_vec() }
}


/// Built-in scales selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// The default scale: an [`OrdinalScale`] over
    /// [`RGBColor::category20c`].
    #[default]
    Ordinal,
    /// [`LinearScale::default`].
    Linear,
    Category10,
    Category20,
    Category20b,
    Category20c,
}

impl Preset {
    pub const ALL: &'static [Preset] = &[
        Preset::Ordinal, Preset::Linear, Preset::Category10,
        Preset::Category20, Preset::Category20b, Preset::Category20c];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Ordinal => "ordinal",
            Preset::Linear => "linear",
            Preset::Category10 => "category10",
            Preset::Category20 => "category20",
            Preset::Category20b => "category20b",
            Preset::Category20c => "category20c",
        }
    }

    /// Return a fresh scale for this preset.
    pub fn scale(self) -> Box<dyn ColorScale> {
        match self {
            Preset::Ordinal | Preset::Category20c =>
                Box::new(OrdinalScale::from_palette(RGB8::category20c())),
            Preset::Linear => Box::new(LinearScale::default()),
            Preset::Category10 =>
                Box::new(OrdinalScale::from_palette(RGB8::category10())),
            Preset::Category20 =>
                Box::new(OrdinalScale::from_palette(RGB8::category20())),
            Preset::Category20b =>
                Box::new(OrdinalScale::from_palette(RGB8::category20b())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL.iter().copied().find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}


/// What can be given to [`ColorMapper::set_colors`](crate::ColorMapper::set_colors).
pub enum ScaleSpec {
    Preset(Preset),
    /// An [`OrdinalScale`] over exactly these colors, in this order.
    Palette(Vec<String>),
    Custom(Box<dyn ColorScale>),
}

impl ScaleSpec {
    /// Wrap any scale.
    pub fn custom(scale: impl ColorScale + 'static) -> Self {
        ScaleSpec::Custom(Box::new(scale))
    }

    /// Build the scale described by `self`.
    pub fn resolve(self) -> Box<dyn ColorScale> {
        match self {
            ScaleSpec::Preset(p) => p.scale(),
            ScaleSpec::Palette(colors) => Box::new(OrdinalScale::new(colors)),
            ScaleSpec::Custom(scale) => scale,
        }
    }
}

impl fmt::Debug for ScaleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleSpec::Preset(p) => f.debug_tuple("Preset").field(p).finish(),
            ScaleSpec::Palette(c) => f.debug_tuple("Palette").field(c).finish(),
            ScaleSpec::Custom(s) => f.debug_struct("Custom")
                .field("domain", &s.domain()).field("range", &s.range())
                .finish(),
        }
    }
}

impl From<Preset> for ScaleSpec {
    fn from(p: Preset) -> Self { ScaleSpec::Preset(p) }
}

impl From<Vec<String>> for ScaleSpec {
    fn from(colors: Vec<String>) -> Self { ScaleSpec::Palette(colors) }
}

impl From<Vec<&str>> for ScaleSpec {
    fn from(colors: Vec<&str>) -> Self {
        ScaleSpec::Palette(colors.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ScaleSpec {
    fn from(colors: &[&str]) -> Self { colors.to_vec().into() }
}

impl<const N: usize> From<[&str; N]> for ScaleSpec {
    fn from(colors: [&str; N]) -> Self { colors.to_vec().into() }
}

impl From<OrdinalScale> for ScaleSpec {
    fn from(s: OrdinalScale) -> Self { ScaleSpec::custom(s) }
}

impl From<LinearScale> for ScaleSpec {
    fn from(s: LinearScale) -> Self { ScaleSpec::custom(s) }
}

impl From<Box<dyn ColorScale>> for ScaleSpec {
    fn from(s: Box<dyn ColorScale>) -> Self { ScaleSpec::Custom(s) }
}
