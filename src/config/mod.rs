// Configuration module entry point
// Loads the rule file with environment overrides layered on top

mod types;

// Re-export public types
pub use types::{ActionKind, LoggingConfig, RewriterConfig, RuleConfig};

use crate::error::RewriteError;

impl RewriterConfig {
    /// Load configuration from "rules.*" in the working directory
    pub fn load() -> Result<Self, RewriteError> {
        Self::load_from("rules")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// A missing rule file is an error: an evaluator with no rules to apply
    /// is a deployment mistake, not a runnable state.
    pub fn load_from(config_path: &str) -> Result<Self, RewriteError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path))
            .add_source(config::Environment::with_prefix("REWRITER").separator("__"))
            .set_default("logging.enabled", true)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
