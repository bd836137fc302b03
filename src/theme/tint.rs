//! tint roles and hsl shifts
use {crate::error::ThemeError, serde::Serialize, std::str::FromStr};

theme_roles! {
    /// a slot that accepts an hsl tint
    pub enum TintRole {
        /// toolbar buttons
        Buttons => "buttons",
        /// the window frame
        Frame => "frame",
        /// the window frame while unfocused
        FrameInactive => "frame_inactive",
        /// the incognito window frame
        FrameIncognito => "frame_incognito",
        /// the incognito window frame while unfocused
        FrameIncognitoInactive => "frame_incognito_inactive",
        /// background tabs
        BackgroundTab => "background_tab",
    }
}

/// an hsl adjustment, every component in `[-1, 1]`
///
/// the host treats `-1` in a single component as "leave this component alone", and `-1` in all
/// three as no tint at all
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct HslShift {
    /// hue shift
    hue: f64,
    /// saturation shift
    saturation: f64,
    /// lightness shift
    lightness: f64,
}

impl HslShift {
    /// the triple the host reads as "no tint"
    pub const UNSET: [f64; 3] = [-1.0; 3];

    /// make a new shift, clamping every component into `[-1, 1]`
    ///
    /// # Errors
    ///
    /// returns an error if any component is nan or infinite
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ThemeError> {
        if ![hue, saturation, lightness].iter().all(|c| c.is_finite()) {
            return Err(
                format!("tint components must be finite: {hue}, {saturation}, {lightness}").into(),
            );
        }

        Ok(Self {
            hue: hue.clamp(-1.0, 1.0),
            saturation: saturation.clamp(-1.0, 1.0),
            lightness: lightness.clamp(-1.0, 1.0),
        })
    }

    /// the shift as `[hue, saturation, lightness]`
    pub const fn to_array(self) -> [f64; 3] {
        [self.hue, self.saturation, self.lightness]
    }

    /// whether this is the all `-1` triple
    pub fn is_unset(self) -> bool {
        self.to_array() == Self::UNSET
    }
}

impl From<HslShift> for [f64; 3] {
    fn from(value: HslShift) -> Self {
        value.to_array()
    }
}

/// whether a tint role is tinted at all
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tint {
    /// no tint, the role is left out of the manifest
    #[default]
    None,
    /// an actual shift
    ///
    /// a shift equal to [`HslShift::UNSET`] still counts as no tint
    Shift(HslShift),
}

impl Tint {
    /// build a tint from a raw triple
    ///
    /// components are clamped first, so anything that clamps to the all `-1` triple is
    /// [`Tint::None`]
    ///
    /// # Errors
    ///
    /// returns an error if any component is nan or infinite
    pub fn from_triple([hue, saturation, lightness]: [f64; 3]) -> Result<Self, ThemeError> {
        HslShift::new(hue, saturation, lightness).map(Self::from)
    }

    /// the shift, if any
    pub fn shift(self) -> Option<HslShift> {
        match self {
            Self::Shift(shift) if !shift.is_unset() => Some(shift),
            _ => None,
        }
    }

    /// whether this tint is applied
    pub fn is_applied(self) -> bool {
        self.shift().is_some()
    }
}

impl From<HslShift> for Tint {
    fn from(shift: HslShift) -> Self {
        if shift.is_unset() {
            Self::None
        } else {
            Self::Shift(shift)
        }
    }
}

impl FromStr for Tint {
    type Err = ThemeError;

    /// parse `h,s,l` (or `none`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid tint {s:?}: {e}"))?;

        match parts.as_slice() {
            [h, sat, l] => Self::from_triple([*h, *sat, *l]),
            _ => Err(format!("invalid tint {s:?}: expected three comma separated numbers").into()),
        }
    }
}

/// a [`Tint`] for every [`TintRole`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TintTable {
    /// values indexed by [`TintRole::index`]
    values: [Tint; TintRole::COUNT],
}

impl TintTable {
    /// the tint of a role
    pub fn get(&self, role: TintRole) -> Tint {
        self.values[role.index()]
    }

    /// set the tint of a role
    pub fn set(&mut self, role: TintRole, tint: Tint) {
        self.values[role.index()] = tint.shift().map_or(Tint::None, Tint::Shift);
    }

    /// iterate over every role and its tint
    pub fn iter(&self) -> impl Iterator<Item = (TintRole, Tint)> + '_ {
        TintRole::ALL
            .iter()
            .map(|role| (*role, self.values[role.index()]))
    }

    /// iterate over the roles that actually carry a shift
    pub fn applied(&self) -> impl Iterator<Item = (TintRole, HslShift)> + '_ {
        self.iter()
            .filter_map(|(role, tint)| tint.shift().map(|shift| (role, shift)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_becomes_none() {
        assert_eq!(Tint::from_triple([-1.0, -1.0, -1.0]).unwrap(), Tint::None);
        assert!(Tint::from_triple([-1.0, -1.0, 0.5]).unwrap().is_applied());
        assert!(Tint::from_triple([0.0, 0.0, 0.0]).unwrap().is_applied());
    }

    #[test]
    fn test_clamped_sentinel_becomes_none() {
        assert_eq!(Tint::from_triple([-2.0, -1.0, -1.0]).unwrap(), Tint::None);
        assert_eq!("-5,-1,-3".parse::<Tint>().unwrap(), Tint::None);
    }

    #[test]
    fn test_unset_shift_is_not_applied() {
        let unset = Tint::Shift(HslShift::new(-1.0, -1.0, -1.0).unwrap());
        assert!(!unset.is_applied());
        assert_eq!(unset.shift(), None);

        let mut table = TintTable::default();
        table.set(TintRole::Frame, unset);
        assert_eq!(table.get(TintRole::Frame), Tint::None);
    }

    #[test]
    fn test_shift_is_clamped() {
        let shift = HslShift::new(3.0, -4.0, 0.25).unwrap();
        assert_eq!(shift.to_array(), [1.0, -1.0, 0.25]);
    }

    #[test]
    fn test_non_finite_components_are_rejected() {
        assert!(HslShift::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Tint::from_triple([0.0, f64::INFINITY, 0.0]).is_err());
        assert!("nan,0,0".parse::<Tint>().is_err());
        assert!("0,inf,0".parse::<Tint>().is_err());
    }

    #[test]
    fn test_parse_tint() {
        assert_eq!("none".parse::<Tint>().unwrap(), Tint::None);
        assert_eq!("-1,-1,-1".parse::<Tint>().unwrap(), Tint::None);
        assert_eq!(
            "0.5, -1, 0.1".parse::<Tint>().unwrap().shift().unwrap().to_array(),
            [0.5, -1.0, 0.1]
        );
        assert!("0.5,0.1".parse::<Tint>().is_err());
        assert!("a,b,c".parse::<Tint>().is_err());
    }

    #[test]
    fn test_applied_skips_none() {
        let mut table = TintTable::default();
        table.set(TintRole::Buttons, Tint::from_triple([0.1, 0.2, 0.3]).unwrap());
        table.set(TintRole::Frame, Tint::Shift(HslShift::new(-1.0, -1.0, -1.0).unwrap()));

        let applied: Vec<_> = table.applied().collect();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, TintRole::Buttons);
    }
}
