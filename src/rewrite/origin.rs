//! Origin substitution module
//!
//! A rewrite rule may switch the request to a different upstream. The origin
//! URL is parsed when the rule is built, so by evaluation time substitution
//! cannot fail.

use serde_json::Map;
use url::Url;

use crate::error::RewriteError;
use crate::event::{CustomOrigin, EdgeRequest, HeaderEntry, Headers, RequestOrigin};
use crate::rewrite::normalize::strip_trailing_slash;

/// TLS protocols offered to the replacement origin
const SSL_PROTOCOLS: [&str; 2] = ["TLSv1.2", "TLSv1.1"];
/// Origin response timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;
/// Origin keep-alive timeout in seconds
const KEEPALIVE_TIMEOUT_SECS: u64 = 5;

/// A rule's replacement origin, validated at rule construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOrigin {
    scheme: String,
    host: String,
    path: String,
}

impl RuleOrigin {
    /// Parse an origin URL, rejecting anything without a host
    pub fn parse(raw: &str) -> Result<Self, RewriteError> {
        let url = Url::parse(raw).map_err(|source| RewriteError::InvalidOrigin {
            url: raw.to_string(),
            source,
        })?;
        let host = url
            .host_str()
            .ok_or_else(|| RewriteError::OriginMissingHost(raw.to_string()))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            path: strip_trailing_slash(url.path()).to_string(),
        })
    }

    /// Port implied by the scheme; an explicit port in the URL is ignored
    fn port(&self) -> u16 {
        if self.scheme == "https" {
            443
        } else {
            80
        }
    }

    /// Point `request` at this origin and overwrite its `host` header
    pub fn apply(&self, request: &mut EdgeRequest) {
        request.origin = Some(RequestOrigin {
            custom: Some(CustomOrigin {
                domain_name: self.host.clone(),
                protocol: self.scheme.clone(),
                port: self.port(),
                path: self.path.clone(),
                ssl_protocols: SSL_PROTOCOLS.iter().map(ToString::to_string).collect(),
                read_timeout: READ_TIMEOUT_SECS,
                keepalive_timeout: KEEPALIVE_TIMEOUT_SECS,
                custom_headers: Headers::new(),
            }),
            extra: Map::new(),
        });
        request.headers.insert(
            "host".to_string(),
            vec![HeaderEntry::new("host", &self.host)],
        );
    }
}
