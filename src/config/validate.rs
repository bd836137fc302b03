//! configuration validation stuff
use crate::{config::options::*, validator};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// the largest history anyone should need
const MAX_HISTORY_LENGTH: usize = 10_000;

validator! { "history" => HistoryCfg,
    max_length => |v: &usize| *v >= 1 && *v <= MAX_HISTORY_LENGTH,
        "must be between 1 and 10000";
}

validator! { "export" => ExportCfg,
    output_dir => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { "logging" => LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field
                        && let Err(nested_errors) = nested.validate()
                    {
                        errors.extend(nested_errors);
                    }
                )*
            };
        }

        validate_nested!(history, export, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}
