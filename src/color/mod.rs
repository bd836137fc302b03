//! color space conversion stuff
//!
//! hex strings are the editing format, hsl is what the palette generator works in, and
//! [`Rgb`] triples are what ends up in the manifest
pub mod palette;

use {
    regex::Regex,
    serde::Serialize,
    std::{fmt, str::FromStr, sync::LazyLock},
    thiserror::Error,
};

/// a 6 digit hex rgb code, optional leading `#`, any case
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex color pattern is a valid regex")
});

/// a color parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// the value is not a 6 digit hex code
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// an 8-bit rgb color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[u8; 3]")]
pub struct Rgb {
    /// red channel
    pub r: u8,
    /// green channel
    pub g: u8,
    /// blue channel
    pub b: u8,
}

impl Rgb {
    /// pure black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// make a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// format as a lowercase `#rrggbb` code
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// linearly interpolate towards `other`, `t` is clamped into `[0, 1]`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// a color in hsl space
///
/// hue is in degrees, saturation and lightness are percentages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// hue, `[0, 360)` for anything produced by [`hex_to_hsl`]
    pub h: f64,
    /// saturation, `[0, 100]`
    pub s: f64,
    /// lightness, `[0, 100]`
    pub l: f64,
}

impl Hsl {
    /// make a new hsl color
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// parse a hex code into an rgb triple
///
/// accepts exactly six hex digits with an optional leading `#`, in any case
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let caps = HEX_PATTERN
        .captures(hex)
        .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// convert a hex code to hsl
///
/// this does not validate its input: the leading `#` is optional, and any channel that is
/// missing or not valid hex reads as `0`. use [`parse_hex`] first when the input is untrusted
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map_or(0.0, |v| f64::from(v) / 255.0)
    };

    let (r, g, b) = (channel(0), channel(2), channel(4));
    rgb_fractions_to_hsl(r, g, b)
}

/// convert an rgb triple to hsl
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb_fractions_to_hsl(
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

/// shared hsl math over channels in `[0, 1]`
fn rgb_fractions_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// convert hsl back to a lowercase `#rrggbb` code
///
/// no clamping is done. hue outside `[0, 360)` matches no sector and comes out gray, and
/// saturation or lightness outside `[0, 100]` can push a channel past two hex digits
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h * 6.0 {
        sector if (0.0..1.0).contains(&sector) => (c, x, 0.0),
        sector if (1.0..2.0).contains(&sector) => (x, c, 0.0),
        sector if (2.0..3.0).contains(&sector) => (0.0, c, x),
        sector if (3.0..4.0).contains(&sector) => (0.0, x, c),
        sector if (4.0..5.0).contains(&sector) => (x, 0.0, c),
        sector if (5.0..6.0).contains(&sector) => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let channel = |v: f64| hex_channel(((v + m) * 255.0).round() as i64);
    format!("#{}{}{}", channel(r), channel(g), channel(b))
}

/// format one channel as (at least) two hex digits, keeping out of range values visible
fn hex_channel(value: i64) -> String {
    let digits = format!("{:x}", value.unsigned_abs());
    let digits = if value < 0 {
        format!("-{digits}")
    } else {
        digits
    };

    format!("{digits:0>2}")
}
