//! Reply unwrapping and fault detection.
//!
//! The reply envelope is parsed only far enough to capture the Body's
//! inner content verbatim; that span may be arbitrary XML and is handed
//! to the caller's own decoder. Fault detection runs before the
//! caller's decoder so a fault body is never mistaken for a payload.

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, SoapError};

/// Caller-side decoder for the raw body span.
pub trait FromBody: Sized {
    fn from_body(body: &str) -> Result<Self>;
}

/// The raw body, unparsed.
impl FromBody for String {
    fn from_body(body: &str) -> Result<Self> {
        Ok(body.to_string())
    }
}

/// Protocol-level failure reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fault {
    pub code: String,
    pub description: String,
}

/// Raw reply body, extracted verbatim from the Envelope/Body wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    contents: Bytes,
}

impl Response {
    pub fn new(contents: Bytes) -> Self {
        Self { contents }
    }

    /// The Body's inner content, byte for byte.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Fault check, then the caller's own decode.
    ///
    /// Fails `EmptyBody` on an empty span and `RemoteFault` when the
    /// body parses as a fault with a non-empty code; in the fault case
    /// `T::from_body` is never invoked. A body that fails to parse as
    /// a fault is simply not a fault.
    pub fn decode<T: FromBody>(&self) -> Result<T> {
        if self.contents.is_empty() {
            return Err(SoapError::EmptyBody);
        }
        let body = std::str::from_utf8(&self.contents)
            .map_err(|e| SoapError::Envelope(e.to_string()))?;

        if let Some(fault) = parse_fault(body) {
            if !fault.code.is_empty() {
                return Err(SoapError::RemoteFault {
                    code: fault.code,
                    description: fault.description,
                });
            }
        }

        T::from_body(body)
    }
}

/// Extract the Body's inner content as a zero-copy span of `raw`.
///
/// A missing or self-closing Body yields an empty span; whether that is
/// an error is decided at decode time.
pub fn extract_body(raw: &Bytes) -> Result<Bytes> {
    let text = std::str::from_utf8(raw).map_err(|e| SoapError::Envelope(e.to_string()))?;
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) if start.local_name().as_ref() == b"Body" => {
                let span = reader
                    .read_to_end(start.name())
                    .map_err(|e| SoapError::Envelope(e.to_string()))?;
                let start = usize::try_from(span.start)
                    .map_err(|e| SoapError::Envelope(e.to_string()))?;
                let end = usize::try_from(span.end)
                    .map_err(|e| SoapError::Envelope(e.to_string()))?;
                return Ok(raw.slice(start..end));
            }
            Ok(Event::Empty(empty)) if empty.local_name().as_ref() == b"Body" => {
                return Ok(Bytes::new());
            }
            Ok(Event::Eof) => return Ok(Bytes::new()),
            Ok(_) => {}
            Err(e) => return Err(SoapError::Envelope(e.to_string())),
        }
    }
}

#[derive(Clone, Copy)]
enum FaultField {
    Code,
    Description,
}

/// Best-effort fault recovery. Returns `None` when the body does not
/// look like a fault or cannot be parsed at all; a parse failure here
/// is not an error.
///
/// A body is a fault only when its root element is locally named
/// `Fault`; `faultcode`/`faultstring` elements buried inside an
/// ordinary payload are payload, not protocol.
fn parse_fault(body: &str) -> Option<Fault> {
    let mut reader = Reader::from_str(body);
    let mut fault = Fault::default();
    let mut root_is_fault = false;
    let mut depth = 0usize;
    let mut field: Option<FaultField> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if depth == 0 {
                    if start.local_name().as_ref() != b"Fault" {
                        return None;
                    }
                    root_is_fault = true;
                } else if depth == 1 {
                    field = match start.local_name().as_ref() {
                        b"faultcode" => Some(FaultField::Code),
                        b"faultstring" => Some(FaultField::Description),
                        _ => None,
                    };
                } else {
                    field = None;
                }
                depth += 1;
            }
            Ok(Event::Text(text)) => {
                if let Some(which) = field {
                    let piece = text.unescape().ok()?;
                    match which {
                        FaultField::Code => fault.code.push_str(&piece),
                        FaultField::Description => fault.description.push_str(&piece),
                    }
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                field = None;
            }
            Ok(Event::Empty(empty)) => {
                if depth == 0 && empty.local_name().as_ref() != b"Fault" {
                    return None;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    root_is_fault.then_some(fault)
}
