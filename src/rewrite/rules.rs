//! Rule model module
//!
//! Converts rule file entries into the evaluated form. Conversion is where
//! bad rule data dies: regex patterns are compile-checked and origin URLs
//! parsed here, before the first request arrives.

use regex::Regex;

use crate::config::{ActionKind, RuleConfig};
use crate::error::RewriteError;
use crate::rewrite::origin::RuleOrigin;

/// How a rule matches the normalized request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPattern {
    /// Literal comparison against the whole path
    Exact(String),
    /// Regular expression source, compiled on first use
    Regex(String),
}

/// What a matched rule does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Forward upstream with the rewritten path, optionally to a new origin
    Rewrite { origin: Option<RuleOrigin> },
    /// Answer with a permanent redirect
    Redirect,
}

/// A single evaluated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: MatchPattern,
    pub replacement: String,
    pub action: RuleAction,
}

impl Rule {
    /// Convert a rule file entry, validating pattern and origin up front
    pub fn from_config(config: &RuleConfig) -> Result<Self, RewriteError> {
        let pattern = if config.regex {
            // Compile once here so a bad pattern fails at load, not on the
            // first request that reaches it
            Regex::new(&config.pattern).map_err(|source| RewriteError::InvalidPattern {
                pattern: config.pattern.clone(),
                source,
            })?;
            MatchPattern::Regex(config.pattern.clone())
        } else {
            MatchPattern::Exact(config.pattern.clone())
        };

        let action = match config.action {
            ActionKind::Rewrite => RuleAction::Rewrite {
                origin: config
                    .origin
                    .as_deref()
                    .map(RuleOrigin::parse)
                    .transpose()?,
            },
            ActionKind::Redirect => RuleAction::Redirect,
        };

        Ok(Self {
            pattern,
            replacement: config.replacement.clone(),
            action,
        })
    }

    /// Convert a whole rule list, stopping at the first invalid entry
    pub fn from_configs(configs: &[RuleConfig]) -> Result<Vec<Self>, RewriteError> {
        configs.iter().map(Self::from_config).collect()
    }
}
