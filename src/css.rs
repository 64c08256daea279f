//! CSS color strings.

use rgb::{RGBA, RGB8};
use crate::error::{Error, Result};

/// Format a color as `#rrggbb`.
pub fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Color with hue `h` in degrees, saturation `s` and lightness `l` in
/// \[0, 1\].  Channels of the result are in \[0, 255\] and not rounded.
pub fn hsl(h: f64, s: f64, l: f64) -> RGBA<f64> {
    let h = h.rem_euclid(360.);
    let s = s.clamp(0., 1.);
    let l = l.clamp(0., 1.);
    let m2 = if l <= 0.5 { l * (1. + s) } else { l + s - l * s };
    let m1 = 2. * l - m2;
    let v = |h: f64| {
        let h = h.rem_euclid(360.);
        if h < 60. { m1 + (m2 - m1) * h / 60. }
        else if h < 180. { m2 }
        else if h < 240. { m1 + (m2 - m1) * (240. - h) / 60. }
        else { m1 }
    };
    RGBA { r: 255. * v(h + 120.), g: 255. * v(h), b: 255. * v(h - 120.),
           a: 255. }
}

const NAMED: [(&str, u32); 16] = [
    ("black", 0x000000), ("silver", 0xc0c0c0), ("gray", 0x808080),
    ("white", 0xffffff), ("maroon", 0x800000), ("red", 0xff0000),
    ("purple", 0x800080), ("fuchsia", 0xff00ff), ("green", 0x008000),
    ("lime", 0x00ff00), ("olive", 0x808000), ("yellow", 0xffff00),
    ("navy", 0x000080), ("blue", 0x0000ff), ("teal", 0x008080),
    ("aqua", 0x00ffff)];

fn rgb24(c: u32) -> RGBA<f64> {
    RGBA { r: ((c >> 16) & 0xff) as f64, g: ((c >> 8) & 0xff) as f64,
           b: (c & 0xff) as f64, a: 255. }
}

fn parse_hex(s: &str, hex: &str) -> Result<RGBA<f64>> {
    let invalid = || Error::InvalidColor(s.to_string());
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid())
    }
    let n = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        3 => {
            let (r, g, b) = ((n >> 8) & 0xf, (n >> 4) & 0xf, n & 0xf);
            Ok(rgb24((r * 17) << 16 | (g * 17) << 8 | b * 17))
        }
        6 => Ok(rgb24(n)),
        _ => Err(invalid()),
    }
}

/// Return the arguments of `name(a, b, c)` if `s` has that shape.
fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let args = s.strip_prefix(name)?.trim_start()
        .strip_prefix('(')?.strip_suffix(')')?;
    let args: Vec<_> = args.split(',').map(str::trim).collect();
    if args.len() == 3 { Some(args) } else { None }
}

fn percent(s: &str) -> Option<f64> {
    s.strip_suffix('%')?.trim().parse::<f64>().ok().map(|p| p / 100.)
}

/// Parse a CSS color: `#rgb`, `#rrggbb`, `rgb(r, g, b)`,
/// `hsl(h, s%, l%)` or one of the 16 basic color names.
///
/// # Example
///
/// ```
/// use chart_color::css::parse_color;
/// let c = parse_color("hsl(120, 100%, 25%)").unwrap();
/// assert_eq!((c.r, c.g.round(), c.b), (0., 128., 0.));
/// ```
pub fn parse_color(s: &str) -> Result<RGBA<f64>> {
    let invalid = || Error::InvalidColor(s.to_string());
    let c = s.trim().to_ascii_lowercase();
    if let Some(hex) = c.strip_prefix('#') {
        return parse_hex(s, hex)
    }
    if let Some(args) = function_args(&c, "rgb") {
        let mut ch = [0.; 3];
        for (x, a) in ch.iter_mut().zip(&args) {
            *x = match percent(a) {
                Some(p) => 255. * p,
                None => a.parse().map_err(|_| invalid())?,
            }.clamp(0., 255.);
        }
        return Ok(RGBA { r: ch[0], g: ch[1], b: ch[2], a: 255. })
    }
    if let Some(args) = function_args(&c, "hsl") {
        let h: f64 = args[0].parse().map_err(|_| invalid())?;
        let s = percent(args[1]).ok_or_else(invalid)?;
        let l = percent(args[2]).ok_or_else(invalid)?;
        return Ok(hsl(h, s, l))
    }
    NAMED.iter().find(|(name, _)| *name == c)
        .map(|&(_, rgb)| rgb24(rgb))
        .ok_or_else(invalid)
}
