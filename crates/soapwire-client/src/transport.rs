//! Byte-level HTTP transport.
//!
//! The `Transport` trait is the seam between call orchestration and
//! the network; the default implementation is a blocking reqwest
//! client. Request and response bodies are visible at TRACE level,
//! sizes at DEBUG.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::error::Result;

pub const CONTENT_TYPE: &str = "text/xml;charset=UTF-8";
pub const ACCEPT: &str = "text/xml";

/// One blocking request/response exchange.
pub trait Transport: Send + Sync {
    fn send(&self, endpoint: &str, soap_action: &str, payload: Vec<u8>) -> Result<Bytes>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, endpoint: &str, soap_action: &str, payload: Vec<u8>) -> Result<Bytes> {
        (**self).send(endpoint, soap_action, payload)
    }
}

/// `reqwest::blocking` transport.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn send(&self, endpoint: &str, soap_action: &str, payload: Vec<u8>) -> Result<Bytes> {
        debug!(endpoint, soap_action, bytes = payload.len(), "soap request");
        trace!(body = %String::from_utf8_lossy(&payload), "request body");

        let response = self
            .http
            .post(endpoint)
            .header("Content-Type", CONTENT_TYPE)
            .header("Accept", ACCEPT)
            .header("SOAPAction", soap_action)
            .body(payload)
            .send()?;

        let status = response.status();
        let body = response.bytes()?;
        debug!(%status, bytes = body.len(), "soap response");
        trace!(body = %String::from_utf8_lossy(&body), "response body");

        // Fault bodies ride on non-2xx statuses in SOAP 1.1; the
        // decoder sorts them out, so the status is not checked here.
        Ok(body)
    }
}
