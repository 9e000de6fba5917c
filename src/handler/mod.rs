//! Request handler module
//!
//! Entry point for viewer events: logs the envelope, unwraps the request,
//! and hands it to the rewrite engine. One handler is built per process and
//! shared across invocations.

use crate::config::RewriterConfig;
use crate::error::RewriteError;
use crate::event::ViewerEvent;
use crate::logger;
use crate::rewrite::{Outcome, RewriteEngine, Rule};

/// Viewer-request handler bound to one rule set
#[derive(Debug)]
pub struct Handler {
    engine: RewriteEngine,
}

impl Handler {
    /// Build a handler from loaded configuration
    ///
    /// Bad rule data (regex that does not compile, unparseable origin URL)
    /// is reported here, before any request arrives.
    pub fn new(config: &RewriterConfig) -> Result<Self, RewriteError> {
        logger::init(&config.logging);
        Ok(Self {
            engine: RewriteEngine::from_config(config)?,
        })
    }

    /// Build a handler from rules constructed in code
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            engine: RewriteEngine::new(rules),
        }
    }

    /// Process one viewer event
    pub fn handle(&self, event: ViewerEvent) -> Result<Outcome, RewriteError> {
        logger::log_event(&event);
        let request = event.into_request()?;
        self.engine.evaluate(request)
    }

    /// Process one viewer event given as raw JSON, answering in kind
    ///
    /// For hosts that deliver the payload as text: decodes the envelope,
    /// evaluates, and encodes whichever outcome shape resulted.
    pub fn handle_json(&self, payload: &str) -> Result<String, RewriteError> {
        let event: ViewerEvent = serde_json::from_str(payload)?;
        let outcome = self.handle(event)?;
        Ok(serde_json::to_string(&outcome)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionKind, LoggingConfig, RuleConfig};
    use crate::event::EdgeRequest;
    use serde_json::{json, Value};

    fn make_config(rules: Vec<RuleConfig>) -> RewriterConfig {
        RewriterConfig {
            rules,
            logging: LoggingConfig::default(),
        }
    }

    fn redirect_rule(pattern: &str, replacement: &str) -> RuleConfig {
        RuleConfig {
            pattern: pattern.to_string(),
            regex: false,
            replacement: replacement.to_string(),
            action: ActionKind::Redirect,
            origin: None,
        }
    }

    #[test]
    fn test_handle_end_to_end() {
        let handler = Handler::new(&make_config(vec![redirect_rule("/old", "/new")])).unwrap();

        let event = ViewerEvent::from_request(EdgeRequest::new("/OLD/"));
        let outcome = handler.handle(event).unwrap();

        match outcome {
            Outcome::Redirect(response) => {
                assert_eq!(response.status, "301");
                assert_eq!(response.headers["location"][0].value, "/new");
            }
            Outcome::Forward(request) => panic!("expected redirect, got {request:?}"),
        }
    }

    #[test]
    fn test_bad_rule_rejected_at_construction() {
        let mut rule = redirect_rule("(unclosed", "/new");
        rule.regex = true;

        let err = Handler::new(&make_config(vec![rule])).unwrap_err();
        assert!(matches!(err, RewriteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_handle_empty_event() {
        let handler = Handler::from_rules(vec![]);
        let err = handler.handle(ViewerEvent { records: vec![] }).unwrap_err();
        assert!(matches!(err, RewriteError::EmptyEvent));
    }

    #[test]
    fn test_handle_json_redirect() {
        let handler = Handler::new(&make_config(vec![redirect_rule("/old", "/new")])).unwrap();

        let payload = json!({
            "Records": [
                { "cf": { "request": { "uri": "/old", "headers": {} } } }
            ]
        });
        let output = handler.handle_json(&payload.to_string()).unwrap();

        let decoded: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(decoded["status"], "301");
        assert_eq!(decoded["statusDescription"], "Moved Permanently");
    }

    #[test]
    fn test_handle_json_pass_through() {
        let handler = Handler::from_rules(vec![]);

        let payload = json!({
            "Records": [
                {
                    "cf": {
                        "request": {
                            "uri": "/untouched",
                            "querystring": "keep=1",
                            "headers": {}
                        }
                    }
                }
            ]
        });
        let output = handler.handle_json(&payload.to_string()).unwrap();

        let decoded: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(decoded["uri"], "/untouched");
        assert_eq!(decoded["querystring"], "keep=1");
        assert!(decoded.get("status").is_none());
    }

    #[test]
    fn test_handle_json_malformed_payload() {
        let handler = Handler::from_rules(vec![]);
        let err = handler.handle_json("not json").unwrap_err();
        assert!(matches!(err, RewriteError::Envelope(_)));
    }
}
