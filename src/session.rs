//! editing session stuff
//!
//! an [`EditSession`] is what a front end drives: every edit becomes a new snapshot in the
//! history, and exports always run on the snapshot under the cursor
use {
    crate::{
        color::palette::generate_harmonious_palette,
        config::options::Settings,
        error::Result,
        export::Exporter,
        history::History,
        manifest::SchemaVersion,
        package::ThemeArchive,
        theme::{ColorRole, ImageAsset, ImageRole, ThemeProperties, ThemeState, Tint, TintRole},
    },
    std::sync::Arc,
    tracing::debug,
};

/// a theme being edited
#[derive(Debug)]
pub struct EditSession {
    /// every snapshot so far
    history: History<ThemeState>,
    /// runs exports
    exporter: Exporter,
    /// the schema used when none is asked for
    schema: SchemaVersion,
}

impl EditSession {
    /// start a session at the default theme
    pub fn new(settings: &Settings) -> Self {
        Self::with_state(settings, ThemeState::default())
    }

    /// start a session at `state`
    pub fn with_state(settings: &Settings, state: ThemeState) -> Self {
        let history = History::with_max_len(state, getopt!(settings, history.max_length))
            .with_policy(getopt!(settings, history.eviction));

        Self {
            history,
            exporter: Exporter::from_settings(settings),
            schema: getopt!(settings, export.schema),
        }
    }

    /// the current snapshot
    pub fn state(&self) -> &Arc<ThemeState> {
        self.history.current()
    }

    /// the configured schema
    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    /// record a whole new state
    pub fn push(&mut self, state: ThemeState) {
        self.history.push(state);
        debug!(
            len = self.history.len(),
            cursor = self.history.cursor(),
            "pushed snapshot"
        );
    }

    /// copy the current state, change it with `f`, and record the result
    pub fn edit(&mut self, f: impl FnOnce(&mut ThemeState)) {
        let mut next = ThemeState::clone(self.state());
        f(&mut next);
        self.push(next);
    }

    /// set one color
    pub fn set_color(&mut self, role: ColorRole, hex: impl Into<String>) {
        let hex = hex.into();
        self.edit(|state| state.colors.set(role, hex));
    }

    /// supply an image
    pub fn set_image(&mut self, role: ImageRole, asset: ImageAsset) {
        self.edit(|state| {
            state.images.insert(role, asset);
        });
    }

    /// drop an image, returns false (and records nothing) if there was none
    pub fn remove_image(&mut self, role: ImageRole) -> bool {
        if !self.state().images.contains_key(&role) {
            return false;
        }

        self.edit(|state| {
            state.images.remove(&role);
        });
        true
    }

    /// set or clear the icon
    pub fn set_icon(&mut self, icon: Option<ImageAsset>) {
        self.edit(|state| state.icon = icon);
    }

    /// set one tint
    pub fn set_tint(&mut self, role: TintRole, tint: Tint) {
        self.edit(|state| state.tints.set(role, tint));
    }

    /// replace the layout properties
    pub fn set_properties(&mut self, properties: ThemeProperties) {
        self.edit(|state| state.properties = properties);
    }

    /// replace every color with a palette generated from `base_hex`, as one snapshot
    pub fn apply_palette(&mut self, base_hex: &str) {
        let palette = generate_harmonious_palette(base_hex);
        self.edit(|state| state.colors = palette);
    }

    /// step back, returns whether anything changed
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// step forward, returns whether anything changed
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// whether there's anything to undo
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// whether there's anything to redo
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// export the current snapshot under `schema`
    pub async fn export(&self, schema: SchemaVersion) -> Result<ThemeArchive> {
        let snapshot = Arc::clone(self.state());
        self.exporter.export(&snapshot, schema).await
    }
}
