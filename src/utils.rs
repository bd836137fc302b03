//! utilities used across themesmith
use {
    regex::Regex,
    std::sync::LazyLock,
    tracing::Level,
};

/// a run of whitespace
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// anything that can't be part of a single file name on some platform
static UNSAFE_FILE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("unsafe file char pattern is a valid regex")
});

/// turn a theme name into something usable in a file name
///
/// lower-cases the name and replaces every run of whitespace with a single `-`. nothing else is
/// touched, so leading or trailing whitespace still becomes a dash
pub fn slugify(name: &str) -> String {
    WHITESPACE.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// [`slugify`] `name`, then replace path separators and other characters that can't appear in a
/// file name with `-`
///
/// the result is always a single path component, never `.` or `..`
pub fn file_name_slug(name: &str) -> String {
    let slug = UNSAFE_FILE_CHARS
        .replace_all(&slugify(name), "-")
        .into_owned();

    if slug.chars().all(|c| c == '.') {
        slug.replace('.', "-")
    } else {
        slug
    }
}

/// convert a string to a log level
///
/// takes a given string and converts it into a [`tracing::Level`] for later use when setting up
/// tracing in the app module (see [`crate::app::logging`]). anything unrecognized is
/// [`Level::ERROR`]
pub fn string_to_log_level(lvl: &str) -> Level {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Level::DEBUG,
        "t" | "trace" | "trc" => Level::TRACE,
        "e" | "error" | "err" => Level::ERROR,
        "i" | "info" | "inf" => Level::INFO,
        "w" | "warn" | "wrn" => Level::WARN,
        _ => Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Chrome Theme"), "my-chrome-theme");
        assert_eq!(slugify("Night\t\n  Owl"), "night-owl");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify(" padded "), "-padded-");
    }

    #[test]
    fn test_file_name_slug_stays_one_component() {
        assert_eq!(file_name_slug("Night Owl"), "night-owl");
        assert_eq!(file_name_slug("../Escaped"), "..-escaped");
        assert_eq!(file_name_slug("a/b\\c:d"), "a-b-c-d");
        assert_eq!(file_name_slug(".."), "--");
        assert_eq!(file_name_slug(""), "");
    }

    #[test]
    fn test_string_to_log_level() {
        assert_eq!(string_to_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(string_to_log_level("wrn"), Level::WARN);
        assert_eq!(string_to_log_level("nonsense"), Level::ERROR);
    }
}
