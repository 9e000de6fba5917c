//! Viewer event module
//!
//! Serde model of the event envelope delivered by the edge platform:
//! - The record list wrapping each viewer request
//! - Request and response records with their header map shape
//! - The custom-origin descriptor written by origin substitution
//!
//! Unknown fields are preserved across a decode/encode round trip so the
//! platform can evolve the envelope without breaking pass-through.

mod types;

pub use types::{
    CdnEvent, CustomOrigin, EdgeRequest, EdgeResponse, EventRecord, HeaderEntry, Headers,
    RequestOrigin, ViewerEvent,
};
