//! color roles and the color table

theme_roles! {
    /// a named color slot in the theme
    ///
    /// declared in the order the manifest lists them
    pub enum ColorRole {
        /// bookmark bar text
        BookmarkText => "bookmark_text",
        /// toolbar button background
        ButtonBackground => "button_background",
        /// window control background
        ControlBackground => "control_background",
        /// the window frame
        Frame => "frame",
        /// the window frame while unfocused
        FrameInactive => "frame_inactive",
        /// the incognito window frame
        FrameIncognito => "frame_incognito",
        /// the incognito window frame while unfocused
        FrameIncognitoInactive => "frame_incognito_inactive",
        /// new tab page background
        NtpBackground => "ntp_background",
        /// new tab page header
        NtpHeader => "ntp_header",
        /// new tab page links
        NtpLink => "ntp_link",
        /// new tab page link underline
        NtpLinkUnderline => "ntp_link_underline",
        /// new tab page section background
        NtpSection => "ntp_section",
        /// new tab page section links
        NtpSectionLink => "ntp_section_link",
        /// new tab page section link underline
        NtpSectionLinkUnderline => "ntp_section_link_underline",
        /// new tab page section text
        NtpSectionText => "ntp_section_text",
        /// new tab page text
        NtpText => "ntp_text",
        /// text on background tabs
        TabBackgroundText => "tab_background_text",
        /// text on the active tab
        TabText => "tab_text",
        /// the toolbar
        Toolbar => "toolbar",
    }
}

impl ColorRole {
    /// the color a fresh session starts with
    pub const fn default_hex(self) -> &'static str {
        match self {
            Self::BookmarkText => "#5f6368",
            Self::ButtonBackground => "#f8f9fa",
            Self::ControlBackground => "#f1f3f4",
            Self::Frame => "#4285f4",
            Self::FrameInactive => "#5f6368",
            Self::FrameIncognito => "#3c4043",
            Self::FrameIncognitoInactive => "#202124",
            Self::NtpBackground => "#ffffff",
            Self::NtpHeader => "#f1f3f4",
            Self::NtpLink => "#1a73e8",
            Self::NtpLinkUnderline => "#1a73e8",
            Self::NtpSection => "#f8f9fa",
            Self::NtpSectionLink => "#1a73e8",
            Self::NtpSectionLinkUnderline => "#1a73e8",
            Self::NtpSectionText => "#202124",
            Self::NtpText => "#202124",
            Self::TabBackgroundText => "#5f6368",
            Self::TabText => "#202124",
            Self::Toolbar => "#ffffff",
        }
    }
}

/// a hex color for every [`ColorRole`]
///
/// the table is total: there is no way to remove a role, only to overwrite it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    /// values indexed by [`ColorRole::index`]
    values: [String; ColorRole::COUNT],
}

impl ColorTable {
    /// build a table by asking for each role in turn
    pub fn from_fn(mut f: impl FnMut(ColorRole) -> String) -> Self {
        Self {
            values: std::array::from_fn(|i| f(ColorRole::ALL[i])),
        }
    }

    /// the hex value of a role
    pub fn get(&self, role: ColorRole) -> &str {
        &self.values[role.index()]
    }

    /// overwrite the hex value of a role
    pub fn set(&mut self, role: ColorRole, hex: impl Into<String>) {
        self.values[role.index()] = hex.into();
    }

    /// iterate over every role and its value, in manifest order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL
            .iter()
            .map(|role| (*role, self.values[role.index()].as_str()))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::from_fn(|role| role.default_hex().to_string())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::color::parse_hex};

    #[test]
    fn test_defaults_are_valid() {
        let table = ColorTable::default();
        assert_eq!(table.iter().count(), ColorRole::COUNT);

        for (role, hex) in table.iter() {
            assert!(parse_hex(hex).is_ok(), "{role}");
        }
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.as_str().parse::<ColorRole>().unwrap(), *role);
        }

        assert!("not_a_role".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_set_overwrites() {
        let mut table = ColorTable::default();
        table.set(ColorRole::Toolbar, "#000000");
        assert_eq!(table.get(ColorRole::Toolbar), "#000000");
        assert_eq!(table.get(ColorRole::Frame), "#4285f4");
    }
}
