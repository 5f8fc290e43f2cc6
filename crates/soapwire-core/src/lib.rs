//! soapwire core: transport-agnostic SOAP 1.1 protocol primitives.
//!
//! This crate defines the envelope encoding engine shared by the client
//! crate and by callers that bring their own transport: parameter
//! values, XML emission tokens, the recursive parameter encoder,
//! envelope framing, request building, and reply unwrapping with fault
//! detection. It intentionally carries no HTTP dependencies so it can
//! be reused behind any transport.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SoapError`/`Result` so a
//! malformed parameter tree or a hostile reply never crashes the
//! caller.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod encode;
pub mod envelope;
pub mod error;
pub mod request;
pub mod response;
pub mod token;
pub mod value;

/// Shared result type.
pub use error::{Result, SoapError};
pub use response::{FromBody, Response};
pub use value::{Params, Value};
