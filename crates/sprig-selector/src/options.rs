use strum_macros::{Display, EnumString};

/// Tag used for chunks that start directly with a modifier, e.g. `.card`.
pub const DEFAULT_TAG: &str = "div";

/// How comma-separated selector groups relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GroupMode {
    /// The `,` is dropped and building carries on from wherever the previous
    /// group left the cursor, so `div, span` nests `span` inside `div`.
    #[default]
    Continue,
    /// Every group starts again at the fragment root, so `div, span` yields
    /// two top-level elements. Combinators never reach across a `,`.
    Restart,
}

/// Options for a single build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Tag for chunks without one. An empty string means [`DEFAULT_TAG`].
    pub default_tag: String,
    /// Treatment of comma-separated groups.
    pub group_mode: GroupMode,
    /// Print each recorded issue once through the shared warning system.
    pub warnings: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            group_mode: GroupMode::default(),
            warnings: true,
        }
    }
}

impl BuildOptions {
    /// Use `tag` for chunks that have no tag of their own.
    #[must_use]
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Choose how comma-separated groups are built.
    #[must_use]
    pub const fn with_group_mode(mut self, group_mode: GroupMode) -> Self {
        self.group_mode = group_mode;
        self
    }

    /// Turn warning output on or off. Issues are recorded either way.
    #[must_use]
    pub const fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }

    /// The effective default tag.
    #[must_use]
    pub fn default_tag(&self) -> &str {
        if self.default_tag.is_empty() {
            DEFAULT_TAG
        } else {
            &self.default_tag
        }
    }
}
