//! Read-only interface-definition data.
//!
//! WSDL discovery and parsing are out of scope; the target namespace
//! arrives already resolved (typically from the caller's own config)
//! and is safe to share across concurrent calls.

use serde::Deserialize;

/// Resolved interface-definition data for one service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definitions {
    /// XML namespace identifying the service interface.
    pub target_namespace: String,
}

impl Definitions {
    pub fn new(target_namespace: impl Into<String>) -> Self {
        Self {
            target_namespace: target_namespace.into(),
        }
    }

    /// SOAPAction base: the target namespace without a trailing slash.
    pub fn action_base(&self) -> &str {
        self.target_namespace.trim_end_matches('/')
    }
}
