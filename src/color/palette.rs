//! harmonious palette generation
//!
//! every role is a fixed function of the base color's hue, saturation and lightness, so the
//! same base always produces the same palette
use {
    super::{Hsl, hex_to_hsl, hsl_to_hex, parse_hex},
    crate::theme::colors::{ColorRole, ColorTable},
};

/// an optional bound on the derived lightness
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    /// leave the lightness alone
    Free,
    /// cap the lightness (backgrounds drift towards white but never reach it)
    Ceil(f64),
    /// keep the lightness above a floor (text stays readable on dark bases)
    Floor(f64),
}

/// how one role is derived from the base color
#[derive(Debug, Clone, Copy, PartialEq)]
struct Derivation {
    /// degrees added to the base hue
    hue_shift: f64,
    /// factor applied to the base saturation
    saturation: f64,
    /// factor applied to the base lightness
    lightness: f64,
    /// bound applied after scaling the lightness
    bound: Bound,
}

impl Derivation {
    /// scale saturation and lightness with no hue shift or bound
    const fn scale(saturation: f64, lightness: f64) -> Self {
        Self {
            hue_shift: 0.0,
            saturation,
            lightness,
            bound: Bound::Free,
        }
    }

    /// shift the hue as well
    const fn shifted(mut self, degrees: f64) -> Self {
        self.hue_shift = degrees;
        self
    }

    /// cap the lightness
    const fn ceil(mut self, max: f64) -> Self {
        self.bound = Bound::Ceil(max);
        self
    }

    /// floor the lightness
    const fn floor(mut self, min: f64) -> Self {
        self.bound = Bound::Floor(min);
        self
    }

    /// apply this derivation to a base color
    fn apply(self, base: Hsl) -> Hsl {
        let l = base.l * self.lightness;
        let l = match self.bound {
            Bound::Free => l,
            Bound::Ceil(max) => l.min(max),
            Bound::Floor(min) => l.max(min),
        };

        Hsl::new(
            (base.h + self.hue_shift) % 360.0,
            base.s * self.saturation,
            l,
        )
    }
}

/// the derivation for a role, `None` means the role takes the base color as is
const fn derivation(role: ColorRole) -> Option<Derivation> {
    use ColorRole::*;

    let d = match role {
        Frame => return None,
        FrameInactive => Derivation::scale(0.7, 0.8),
        FrameIncognito => Derivation::scale(0.9, 0.3),
        FrameIncognitoInactive => Derivation::scale(0.5, 0.2),
        Toolbar => Derivation::scale(0.3, 1.8).ceil(95.0),
        NtpBackground => Derivation::scale(0.1, 2.0).ceil(98.0),
        NtpText | TabText => Derivation::scale(0.8, 0.3).floor(15.0),
        NtpLink | NtpLinkUnderline => Derivation::scale(0.9, 0.7).shifted(30.0),
        TabBackgroundText => Derivation::scale(0.6, 0.6),
        ButtonBackground => Derivation::scale(0.2, 1.6).ceil(90.0),
        ControlBackground => Derivation::scale(0.1, 1.9).ceil(98.0),
        BookmarkText => Derivation::scale(0.7, 0.5),
        NtpHeader => Derivation::scale(0.2, 1.7).ceil(93.0),
        NtpSection => Derivation::scale(0.15, 1.75).ceil(95.0),
        NtpSectionLink | NtpSectionLinkUnderline => Derivation::scale(0.8, 0.6).shifted(20.0),
        NtpSectionText => Derivation::scale(0.6, 0.4).floor(20.0),
    };

    Some(d)
}

/// derive a full color table from one base color
///
/// `frame` keeps the base color itself (normalized to lowercase `#rrggbb` when it parses)
pub fn generate_harmonious_palette(base_hex: &str) -> ColorTable {
    let base = hex_to_hsl(base_hex);
    let frame = parse_hex(base_hex).map_or_else(|_| hsl_to_hex(base), |rgb| rgb.to_hex());

    ColorTable::from_fn(|role| match derivation(role) {
        Some(d) => hsl_to_hex(d.apply(base)),
        None => frame.clone(),
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::color::parse_hex};

    #[test]
    fn test_palette_is_deterministic() {
        for base in ["#4285f4", "#000000", "#ffffff", "#a855f7", "#1f2937"] {
            assert_eq!(
                generate_harmonious_palette(base),
                generate_harmonious_palette(base)
            );
        }
    }

    #[test]
    fn test_palette_produces_valid_hex_for_every_role() {
        let mut seed: u32 = 7;

        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let base = format!("#{:06x}", seed >> 8);
            let palette = generate_harmonious_palette(&base);

            for (role, hex) in palette.iter() {
                assert!(parse_hex(hex).is_ok(), "{base}: {role} = {hex}");
            }
        }
    }

    #[test]
    fn test_frame_keeps_base() {
        let palette = generate_harmonious_palette("#4285F4");
        assert_eq!(palette.get(ColorRole::Frame), "#4285f4");
    }

    #[test]
    fn test_links_share_shifted_hue() {
        let palette = generate_harmonious_palette("#4285f4");
        assert_eq!(
            palette.get(ColorRole::NtpLink),
            palette.get(ColorRole::NtpLinkUnderline)
        );

        let base = hex_to_hsl("#4285f4");
        let link = hex_to_hsl(palette.get(ColorRole::NtpLink));
        assert!(((link.h - base.h) - 30.0).abs() < 2.0);
    }

    #[test]
    fn test_backgrounds_lighten_towards_ceiling() {
        let palette = generate_harmonious_palette("#808080");
        let ntp = hex_to_hsl(palette.get(ColorRole::NtpBackground));
        assert!(ntp.l <= 98.5);
        assert!(ntp.l > hex_to_hsl("#808080").l);
    }
}
