//! Rule evaluation engine module
//!
//! Walks the ordered rule list against the normalized request path and
//! dispatches the first match:
//! - Rewrite: mutate the request path, optionally switch the origin, forward
//! - Redirect: answer with a permanent redirect
//! - No match: forward the request untouched

use serde::Serialize;

use crate::config::RewriterConfig;
use crate::error::RewriteError;
use crate::event::{EdgeRequest, EdgeResponse};
use crate::http;
use crate::logger;
use crate::rewrite::normalize::normalize;
use crate::rewrite::pattern::PatternCache;
use crate::rewrite::rules::{MatchPattern, Rule, RuleAction};

/// Evaluation result: a request to forward upstream or a response to return
///
/// Serialized untagged, so the caller receives exactly the request or the
/// response JSON shape with no wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Forward(EdgeRequest),
    Redirect(EdgeResponse),
}

/// First-match-wins rule evaluator
///
/// Holds the immutable rule list and the shared pattern cache; one engine
/// serves any number of concurrent evaluations.
#[derive(Debug)]
pub struct RewriteEngine {
    rules: Vec<Rule>,
    patterns: PatternCache,
}

impl RewriteEngine {
    /// Create an engine over an ordered rule list
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            patterns: PatternCache::new(),
        }
    }

    /// Build an engine straight from loaded configuration
    pub fn from_config(config: &RewriterConfig) -> Result<Self, RewriteError> {
        Ok(Self::new(Rule::from_configs(&config.rules)?))
    }

    /// Evaluate the rules against the request path
    ///
    /// Matching runs on the normalized path; the substituted path is used
    /// verbatim. Later rules are never consulted once one matches.
    pub fn evaluate(&self, mut request: EdgeRequest) -> Result<Outcome, RewriteError> {
        let clean_path = normalize(&request.uri);

        for rule in &self.rules {
            let Some(new_path) = self.apply_pattern(rule, &clean_path)? else {
                continue;
            };

            match &rule.action {
                RuleAction::Rewrite { origin } => {
                    // An empty substitution still has to yield a routable path
                    request.uri = if new_path.is_empty() {
                        "/".to_string()
                    } else {
                        new_path
                    };
                    if let Some(origin) = origin {
                        origin.apply(&mut request);
                    }
                    logger::log_request(&request);
                    return Ok(Outcome::Forward(request));
                }
                RuleAction::Redirect => {
                    let response = http::build_redirect(&new_path);
                    logger::log_response(&response);
                    return Ok(Outcome::Redirect(response));
                }
            }
        }

        logger::log_no_match();
        Ok(Outcome::Forward(request))
    }

    /// Produce the substituted path if the rule matches `clean_path`
    fn apply_pattern(&self, rule: &Rule, clean_path: &str) -> Result<Option<String>, RewriteError> {
        match &rule.pattern {
            MatchPattern::Exact(pattern) => {
                if clean_path == pattern {
                    Ok(Some(rule.replacement.clone()))
                } else {
                    Ok(None)
                }
            }
            MatchPattern::Regex(source) => {
                let regex = self.patterns.get_or_compile(source)?;
                if regex.is_match(clean_path) {
                    Ok(Some(regex.replace(clean_path, &rule.replacement).into_owned()))
                } else {
                    Ok(None)
                }
            }
        }
    }
}
