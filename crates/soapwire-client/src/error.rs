//! Client-facing error surface.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, CallError>;

/// Errors produced by a single call.
#[derive(Debug, Error)]
pub enum CallError {
    /// No usable interface definitions attached to the client.
    #[error("definitions is missing")]
    MissingDefinitions,
    /// Protocol-level failure from the core codec (encode, frame,
    /// fault, decode).
    #[error(transparent)]
    Soap(#[from] soapwire_core::SoapError),
    /// Transport failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
