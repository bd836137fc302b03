//! export preflight checks
//!
//! everything that would make the host reject a package is caught here, before any packaging
//! work starts
use {
    super::{NATIVE_ICON_SIZE, SchemaVersion},
    crate::theme::ThemeState,
    hashbrown::HashMap,
    tracing::{debug, warn},
};

/// the most components a version string may have
const MAX_VERSION_PARTS: usize = 4;

/// check that `state` can be exported under `schema`
///
/// every problem is reported, not just the first one. name and version problems only block the
/// export when `strict_metadata` is set, otherwise they are logged and the export goes ahead
pub async fn preflight(
    state: &ThemeState,
    schema: SchemaVersion,
    strict_metadata: bool,
) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    for problem in metadata_problems(state) {
        if strict_metadata {
            errors.push(problem);
        } else {
            warn!(%problem, "exporting anyway");
        }
    }

    if schema.requires_icon() {
        match &state.icon {
            None => errors.push(format!(
                "icon: a {NATIVE_ICON_SIZE}x{NATIVE_ICON_SIZE} icon is required for {schema} themes"
            )),
            Some(icon) => match icon.dimensions().await {
                Ok((w, h)) if w == NATIVE_ICON_SIZE && h == NATIVE_ICON_SIZE => {}
                Ok((w, h)) => errors.push(format!(
                    "icon: {} is {w}x{h}, must be {NATIVE_ICON_SIZE}x{NATIVE_ICON_SIZE}",
                    icon.file_name()
                )),
                Err(e) => errors.push(format!("icon: {e}")),
            },
        }
    }

    let mut owners = HashMap::new();
    for (role, asset) in state.supplied_images() {
        if let Some(first) = owners.insert(asset.file_name(), role) {
            errors.push(format!(
                "images: {first} and {role} both use the file name {}",
                asset.file_name()
            ));
        }
    }

    debug!(%schema, problems = errors.len(), "preflight finished");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// problems with the name and version that the host would complain about
fn metadata_problems(state: &ThemeState) -> Vec<String> {
    let mut problems = Vec::new();

    if state.name.trim().is_empty() {
        problems.push("name: must not be empty".to_string());
    }

    if !is_valid_version(&state.version) {
        problems.push(format!(
            "version: {:?} must be 1 to 4 dot separated integers between 0 and 65535",
            state.version
        ));
    }

    problems
}

/// whether `version` is what the host accepts as an extension version
pub fn is_valid_version(version: &str) -> bool {
    let parts = version.split('.').collect::<Vec<_>>();

    parts.len() <= MAX_VERSION_PARTS
        && parts.iter().all(|part| {
            !part.is_empty()
                && part.bytes().all(|b| b.is_ascii_digit())
                && (part.len() == 1 || !part.starts_with('0'))
                && part.parse::<u16>().is_ok()
        })
}
