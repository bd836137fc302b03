//! macros used by themesmith

/// declare a closed set of theme roles along with the key each one uses in the manifest
///
/// generates the enum, an `ALL` table in declaration order, a `COUNT`, `as_str`, `Display`,
/// `FromStr` and a `Serialize` impl that writes the manifest key (so roles work as json map
/// keys)
///
/// # Examples
///
/// ```
/// themesmith::theme_roles! {
///     /// demo roles
///     pub enum Demo {
///         /// the first one
///         First => "first",
///         /// the second one
///         Second => "second",
///     }
/// }
///
/// assert_eq!(Demo::COUNT, 2);
/// assert_eq!("second".parse::<Demo>().unwrap(), Demo::Second);
/// assert_eq!(Demo::First.to_string(), "first");
/// ```
#[macro_export]
macro_rules! theme_roles {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// every role, in declaration order
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// how many roles there are
            pub const COUNT: usize = Self::ALL.len();

            /// the key this role uses in the manifest
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )*
                }
            }

            /// the position of this role in [`Self::ALL`]
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ThemeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim() {
                    $( $key => Ok(Self::$variant), )*
                    other => Err($crate::error::ThemeError::UnknownRole {
                        kind: stringify!($name),
                        name: other.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// implement [`Validate`](crate::config::validate::Validate) for a settings section
///
/// every listed field is optional, unset fields are skipped, and failures are reported as
/// `section.field: message`
#[macro_export]
macro_rules! validator {
    ($section:literal => $struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl $crate::config::validate::Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field
                        && !($requirement)(value)
                    {
                        errors.push(format!("{}.{}: {}", $section, stringify!($field), $err_msg));
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// get the current value of a setting, falling back to the built-in default
///
/// # Examples
///
/// ```
/// use themesmith::{config::options::Settings, getopt};
///
/// let settings = Settings::default();
/// assert_eq!(getopt!(settings, history.max_length), 50);
/// ```
#[macro_export]
macro_rules! getopt {
    ($settings:expr, $lvl1:ident . $field:ident) => {{
        $settings
            .$lvl1
            .as_ref()
            .and_then(|sub| sub.$field.clone())
            .or_else(|| {
                $crate::config::options::Settings::default()
                    .$lvl1
                    .and_then(|sub| sub.$field)
            })
            .unwrap_or_default()
    }};
}
