//! Edge URL rewrite and redirect evaluator
//!
//! Evaluates an ordered rule list against viewer requests at the edge of a
//! content-delivery pipeline. Each event yields exactly one outcome:
//! - A rewritten request forwarded upstream, optionally pointed at a
//!   different origin
//! - A permanent redirect response
//! - The untouched request when no rule matches
//!
//! The typical embedding loads the rule file once at process start
//! ([`RewriterConfig::load`]), builds a [`Handler`], and keeps it for the
//! process lifetime; the handler is shared freely across concurrent
//! invocations.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod http;
pub mod logger;
pub mod rewrite;

pub use config::RewriterConfig;
pub use error::RewriteError;
pub use event::{EdgeRequest, EdgeResponse, ViewerEvent};
pub use handler::Handler;
pub use rewrite::{Outcome, RewriteEngine, Rule};
