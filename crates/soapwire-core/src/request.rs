//! Request building.
//!
//! One fresh token stream per call: the stream is allocated here,
//! populated by the framer and encoder, and consumed here. It is never
//! stored globally, so concurrent builds cannot corrupt each other.

use tracing::trace;

use crate::encode;
use crate::envelope;
use crate::error::{Result, SoapError};
use crate::token::TokenStream;
use crate::value::Params;

/// Build the serialized SOAP request for `method` in `namespace`.
///
/// All-or-nothing: any encode failure discards the partially built
/// stream; a truncated document is never returned.
pub fn build(method: &str, namespace: &str, params: &Params) -> Result<Vec<u8>> {
    if params.is_empty() {
        return Err(SoapError::EmptyParams);
    }

    let mut stream = TokenStream::new();
    envelope::open(method, namespace, &mut stream)?;
    for (key, value) in params {
        encode::encode(key, value, &mut stream)?;
    }
    envelope::close(method, &mut stream);

    trace!(method, tokens = stream.len(), "request framed");
    stream.into_bytes()
}
