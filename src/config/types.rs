// Configuration types module
// Defines the rule file data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct RewriterConfig {
    /// Ordered rule list, evaluated first match wins
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A single rule as written in the rule file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Path to match: a literal, or a regular expression when `regex` is set
    pub pattern: String,
    /// Treat `pattern` as a regular expression
    #[serde(default)]
    pub regex: bool,
    /// New path; regex rules may reference capture groups ($1, $2, ...)
    pub replacement: String,
    /// What to do on a match
    #[serde(rename = "type")]
    pub action: ActionKind,
    /// Replacement upstream origin URL, rewrite rules only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Rule action selector
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Rewrite,
    Redirect,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_logging_enabled() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
        }
    }
}
