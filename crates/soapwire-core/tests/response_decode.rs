//! Reply unwrapping and fault-detection vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use bytes::Bytes;
use soapwire_core::response::{extract_body, Response};
use soapwire_core::{FromBody, Result, SoapError};

fn load(name: &str) -> Bytes {
    Bytes::from(fs::read(format!("tests/vectors/{name}")).unwrap())
}

/// A decode target that must never run.
#[derive(Debug)]
struct Untouched;

impl FromBody for Untouched {
    fn from_body(_: &str) -> Result<Self> {
        panic!("target decoder must not be invoked");
    }
}

/// A decode target that always refuses the body.
#[derive(Debug)]
struct Refuses;

impl FromBody for Refuses {
    fn from_body(_: &str) -> Result<Self> {
        Err(SoapError::Decode("refused".to_string()))
    }
}

#[test]
fn body_span_is_verbatim() {
    let span = extract_body(&load("checkvat_response.xml")).unwrap();
    assert_eq!(
        span,
        concat!(
            "<checkVatResponse xmlns=\"urn:ec.europa.eu:taxud:vies:services:checkVat:types\">",
            "<countryCode>IE</countryCode>",
            "<vatNumber>6388047V</vatNumber>",
            "<valid>true</valid>",
            "</checkVatResponse>",
        )
        .as_bytes(),
    );
}

#[test]
fn decode_hands_raw_body_to_the_target() {
    let span = extract_body(&load("checkvat_response.xml")).unwrap();
    let body: String = Response::new(span.clone()).decode().unwrap();
    assert_eq!(body.as_bytes(), &span[..]);
}

#[test]
fn fault_takes_precedence_over_target_decode() {
    let span = extract_body(&load("fault_response.xml")).unwrap();
    let err = Response::new(span).decode::<Untouched>().unwrap_err();

    match err {
        SoapError::RemoteFault { code, description } => {
            assert_eq!(code, "Server.Error");
            assert_eq!(description, "boom");
        }
        other => panic!("expected RemoteFault, got {other:?}"),
    }
}

#[test]
fn fault_named_fields_inside_a_payload_are_payload() {
    let raw = Bytes::from_static(
        concat!(
            "<lookupResponse><entry>",
            "<faultcode>X12</faultcode>",
            "<faultstring>archived</faultstring>",
            "</entry></lookupResponse>",
        )
        .as_bytes(),
    );
    let body: String = Response::new(raw).decode().unwrap();
    assert!(body.contains("<faultcode>X12</faultcode>"));
}

#[test]
fn empty_fault_code_is_not_a_fault() {
    let span = extract_body(&load("empty_code_fault.xml")).unwrap();
    let body: String = Response::new(span).decode().unwrap();
    assert!(body.contains("nothing actually wrong"));
}

#[test]
fn self_closing_body_decodes_as_empty() {
    let span = extract_body(&load("empty_body.xml")).unwrap();
    assert!(span.is_empty());
    let err = Response::new(span).decode::<String>().unwrap_err();
    assert!(matches!(err, SoapError::EmptyBody));
}

#[test]
fn reply_without_body_decodes_as_empty() {
    let raw = Bytes::from_static(b"<soap:Envelope xmlns:soap=\"x\"></soap:Envelope>");
    let span = extract_body(&raw).unwrap();
    assert!(span.is_empty());
}

#[test]
fn mismatched_tags_fail_as_malformed_envelope() {
    let raw = Bytes::from_static(
        b"<soap:Envelope><soap:Body><unclosed></soap:Body></soap:Envelope>",
    );
    let err = extract_body(&raw).unwrap_err();
    assert!(matches!(err, SoapError::Envelope(_)));
}

#[test]
fn non_utf8_reply_fails_as_malformed_envelope() {
    let raw = Bytes::from_static(&[0xff, 0xfe, 0x00]);
    let err = extract_body(&raw).unwrap_err();
    assert!(matches!(err, SoapError::Envelope(_)));
}

#[test]
fn non_xml_span_is_not_a_fault() {
    let body: String = Response::new(Bytes::from_static(b"plain text"))
        .decode()
        .unwrap();
    assert_eq!(body, "plain text");
}

#[test]
fn target_errors_propagate_unchanged() {
    let err = Response::new(Bytes::from_static(b"<ok/>"))
        .decode::<Refuses>()
        .unwrap_err();
    match err {
        SoapError::Decode(reason) => assert_eq!(reason, "refused"),
        other => panic!("expected Decode, got {other:?}"),
    }
}
