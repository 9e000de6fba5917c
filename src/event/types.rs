// Event envelope types
// Defines the viewer-event data structures exchanged with the edge platform

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::RewriteError;

/// Header map: lowercase header name to its list of entries
///
/// The platform keys the map by lowercased name while each entry keeps the
/// original casing in `key`.
pub type Headers = HashMap<String, Vec<HeaderEntry>>;

/// One header value with its optionally preserved original name casing
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl HeaderEntry {
    /// Create an entry carrying both name casing and value
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            value: value.to_string(),
        }
    }
}

/// Top-level event envelope handed to the request handler
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ViewerEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EventRecord>,
}

impl ViewerEvent {
    /// Wrap a single request in the envelope shape the platform delivers
    pub fn from_request(request: EdgeRequest) -> Self {
        Self {
            records: vec![EventRecord {
                cf: CdnEvent {
                    request,
                    extra: Map::new(),
                },
            }],
        }
    }

    /// Take the request out of the first record
    pub fn into_request(self) -> Result<EdgeRequest, RewriteError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(RewriteError::EmptyEvent)
    }
}

/// One record of the envelope
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EventRecord {
    pub cf: CdnEvent,
}

/// The CDN payload of a record: the viewer request plus distribution
/// metadata this crate does not interpret
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CdnEvent {
    pub request: EdgeRequest,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A viewer request as delivered by the platform
///
/// Only `uri`, `headers` and `origin` are interpreted; everything else rides
/// along untouched so a pass-through returns the request byte-equivalent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EdgeRequest {
    pub uri: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub querystring: Option<String>,
    #[serde(default, rename = "clientIp", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<RequestOrigin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRequest {
    /// Create a request with the given path and nothing else set
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            headers: Headers::new(),
            method: None,
            querystring: None,
            client_ip: None,
            origin: None,
            extra: Map::new(),
        }
    }
}

/// Upstream origin attached to a request
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RequestOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomOrigin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom-origin descriptor the platform uses to reach a replacement upstream
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrigin {
    pub domain_name: String,
    pub protocol: String,
    pub port: u16,
    pub path: String,
    pub ssl_protocols: Vec<String>,
    pub read_timeout: u64,
    pub keepalive_timeout: u64,
    #[serde(default)]
    pub custom_headers: Headers,
}

/// A response returned in place of forwarding the request
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EdgeResponse {
    pub status: String,
    #[serde(rename = "statusDescription")]
    pub status_description: String,
    pub headers: Headers,
}
