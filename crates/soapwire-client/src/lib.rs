//! soapwire client: blocking SOAP 1.1 calls over HTTP.
//!
//! This crate wires the core envelope codec to a `reqwest::blocking`
//! transport: read-only service definitions, the transport seam, and
//! the `Client` call orchestration. One call is synchronous end to
//! end — build request, send, block for the reply, unwrap the body.

pub mod client;
pub mod error;
pub mod transport;
pub mod wsdl;

pub use client::Client;
pub use error::{CallError, Result};
pub use wsdl::Definitions;
