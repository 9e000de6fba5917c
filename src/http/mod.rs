//! HTTP response layer module
//!
//! Response construction for the edge request/response contract, decoupled
//! from rule evaluation logic.

pub mod response;

// Re-export commonly used builders
pub use response::build_redirect;
