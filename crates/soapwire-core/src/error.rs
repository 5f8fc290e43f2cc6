//! Shared error type across soapwire crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SoapError>;

/// Unified error type used by the core codec.
///
/// Every variant is terminal for the current call: nothing is retried
/// internally and there is no partial-success mode.
#[derive(Debug, Error)]
pub enum SoapError {
    /// Request built with an empty parameter mapping.
    #[error("params is empty")]
    EmptyParams,
    /// Envelope framing requested with an empty method or namespace.
    #[error("method or namespace is empty")]
    MissingMethodOrNamespace,
    /// A parameter kind the encoder cannot represent.
    #[error("unknown type for key {key}: {type_name}")]
    UnknownType { key: String, type_name: String },
    /// XML writer/reader failure.
    #[error("xml: {0}")]
    Xml(String),
    /// Reply is not an Envelope/Body wrapper.
    #[error("malformed reply envelope: {0}")]
    Envelope(String),
    /// Reply body is empty.
    #[error("body is empty")]
    EmptyBody,
    /// Server answered with a SOAP fault.
    #[error("[{code}]: {description}")]
    RemoteFault { code: String, description: String },
    /// Caller-side body decode failure.
    #[error("decode: {0}")]
    Decode(String),
}
