//! Compiled pattern cache module
//!
//! Rule patterns arrive as strings and are compiled on first use, then
//! reused for the life of the engine. The cache is shared across concurrent
//! evaluations; the write lock is re-checked so each pattern is compiled at
//! most once and readers only ever see fully built entries.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::RewriteError;

/// Lazily populated map from pattern source string to its compiled form
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            patterns: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the compiled form of `pattern`, compiling it on first use
    ///
    /// A malformed pattern is bad rule data: the error is returned and never
    /// cached, so retrying the same pattern fails the same way.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, RewriteError> {
        // No panic site while the lock is held, so poisoning can only come
        // from a caller panicking elsewhere; the map stays consistent either
        // way and the entry is still usable
        if let Some(regex) = self
            .patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
        {
            return Ok(regex.clone());
        }

        let mut patterns = self
            .patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have compiled it while we waited for the lock
        if let Some(regex) = patterns.get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern).map_err(|source| RewriteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        patterns.insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }
}
