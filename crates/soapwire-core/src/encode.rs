//! Recursive parameter encoder.
//!
//! Converts one (name, value) pair into zero or more emission tokens,
//! dispatching on the value kind. Omission rules: empty strings,
//! absent optional integers, and absent structured references produce
//! no element at all, so they are indistinguishable on the wire from
//! fields that were never supplied.

use num_bigint::{BigUint, Sign};
use num_rational::BigRational;

use crate::error::{Result, SoapError};
use crate::token::TokenStream;
use crate::value::Value;

/// Fractional digits used when rendering rational numerals.
const RATIONAL_DIGITS: u32 = 16;

/// Encode `value` under the element name `name`, appending to `sink`.
pub fn encode(name: &str, value: &Value, sink: &mut TokenStream) -> Result<()> {
    match value {
        Value::BigInt(n) => leaf(name, n.to_string(), sink),
        Value::Float(x) => leaf(name, x.to_string(), sink),
        Value::Rational(r) => leaf(name, rational_fixed(r, RATIONAL_DIGITS), sink),
        Value::Int(n) => leaf(name, n.to_string(), sink),
        Value::OptInt(Some(n)) => leaf(name, n.to_string(), sink),
        // Absent reference: deliberate omission, not an error.
        Value::OptInt(None) => Ok(()),
        Value::Text(s) if s.is_empty() => Ok(()),
        Value::Text(s) => leaf(name, s.clone(), sink),
        Value::Bool(b) => {
            let text = if *b { "true" } else { "false" };
            leaf(name, text.to_string(), sink)
        }
        Value::Map(entries) => {
            sink.start(name);
            for (key, entry) in entries {
                encode(key, entry, sink)?;
            }
            sink.end(name);
            Ok(())
        }
        Value::Seq(items) => {
            sink.start(name);
            // Each element value is encoded under the outer name.
            for item in items {
                encode(name, item, sink)?;
            }
            sink.end(name);
            Ok(())
        }
        Value::Opaque(json) => encode_opaque(name, json, sink),
    }
}

fn leaf(name: &str, text: String, sink: &mut TokenStream) -> Result<()> {
    sink.start(name);
    sink.text(text);
    sink.end(name);
    Ok(())
}

fn encode_opaque(name: &str, json: &serde_json::Value, sink: &mut TokenStream) -> Result<()> {
    use serde_json::Value as Json;

    match json {
        // Absent structured reference.
        Json::Null => Ok(()),
        Json::Object(fields) => {
            sink.start(name);
            for (key, field) in fields {
                encode_json(key, field, sink)?;
            }
            sink.end(name);
            Ok(())
        }
        other => Err(SoapError::UnknownType {
            key: name.to_string(),
            type_name: json_kind(other).to_string(),
        }),
    }
}

/// Field values inside a decomposed object follow the same rules as
/// the first-class kinds.
fn encode_json(name: &str, json: &serde_json::Value, sink: &mut TokenStream) -> Result<()> {
    use serde_json::Value as Json;

    match json {
        Json::Null => Ok(()),
        Json::Bool(b) => encode(name, &Value::Bool(*b), sink),
        Json::Number(n) => leaf(name, n.to_string(), sink),
        Json::String(s) => encode(name, &Value::Text(s.clone()), sink),
        Json::Array(items) => {
            sink.start(name);
            for item in items {
                encode_json(name, item, sink)?;
            }
            sink.end(name);
            Ok(())
        }
        Json::Object(_) => encode_opaque(name, json, sink),
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Decimal rendering with a fixed number of fractional digits, the
/// last digit rounded to nearest with halves away from zero. The wire
/// format requires exactly this rendering for rational numerals.
fn rational_fixed(r: &BigRational, digits: u32) -> String {
    let negative = r.numer().sign() == Sign::Minus;
    let numer = r.numer().magnitude();
    let denom = r.denom().magnitude();

    let scale = BigUint::from(10u64.pow(digits));
    let scaled = numer * &scale;
    let mut quot = &scaled / denom;
    let rem = &scaled % denom;
    if rem * 2u32 >= *denom {
        quot += 1u32;
    }

    let digits = digits as usize;
    let raw = quot.to_string();
    let padded = if raw.len() <= digits {
        format!("{raw:0>width$}", width = digits + 1)
    } else {
        raw
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - digits);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}
