//! Rule evaluation module
//!
//! The rewrite/redirect core:
//! - Path normalization for case- and slash-insensitive matching
//! - Lazily compiled, cached regex patterns
//! - First-match-wins evaluation over the ordered rule list
//! - Origin substitution for rewrites that switch the upstream

mod engine;
mod normalize;
mod origin;
mod pattern;
mod rules;

pub use engine::{Outcome, RewriteEngine};
pub use normalize::{normalize, strip_trailing_slash};
pub use origin::RuleOrigin;
pub use pattern::PatternCache;
pub use rules::{MatchPattern, Rule, RuleAction};
