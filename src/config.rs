use serde::{Deserialize, Serialize};

/// Default indent unit: one tab per nesting level.
pub const DEFAULT_INDENT: &str = "\t";

/// Per-call rendering settings.
///
/// Missing fields fall back to their defaults when deserialized, so
/// `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appended once per nesting level by the text renderer.
    pub indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}
