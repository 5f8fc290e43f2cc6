//! SOAP 1.1 envelope framing.
//!
//! The envelope structure is fixed: `soap:Envelope` with three
//! namespace declarations, one `soap:Body`, one element named after
//! the invoked method carrying `xmlns` set to the target namespace.

use crate::error::{Result, SoapError};
use crate::token::TokenStream;

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

const ENVELOPE: &str = "soap:Envelope";
const BODY: &str = "soap:Body";

/// Append the Envelope/Body/method open tokens.
///
/// Fails without appending anything if the method or namespace is
/// empty.
pub fn open(method: &str, namespace: &str, sink: &mut TokenStream) -> Result<()> {
    if method.is_empty() || namespace.is_empty() {
        return Err(SoapError::MissingMethodOrNamespace);
    }

    sink.start_with_attrs(
        ENVELOPE,
        &[
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xmlns:xsd", XSD_NAMESPACE),
            ("xmlns:soap", SOAP_NAMESPACE),
        ],
    );
    sink.start(BODY);
    sink.start_with_attrs(method, &[("xmlns", namespace)]);

    Ok(())
}

/// Append the matching close tokens. Callers pass the same method name
/// that was given to `open`.
pub fn close(method: &str, sink: &mut TokenStream) {
    sink.end(method);
    sink.end(BODY);
    sink.end(ENVELOPE);
}
