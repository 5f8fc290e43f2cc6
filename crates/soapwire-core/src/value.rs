//! Caller-supplied parameter values.
//!
//! `Value` is a sealed union over the parameter kinds the encoder
//! supports, replacing open-ended runtime type dispatch. The `Opaque`
//! variant is the one bounded fallback: an arbitrary structured object
//! decomposed through serde into a field-name -> field-value tree.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_rational::BigRational;
use serde::Serialize;

use crate::error::{Result, SoapError};

/// Top-level parameter mapping for one call.
///
/// `BTreeMap` keeps the iteration order stable within a call; the
/// order is not semantically significant on the wire.
pub type Params = BTreeMap<String, Value>;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    /// Arbitrary-precision decimal float.
    Float(BigDecimal),
    /// Arbitrary-precision rational, rendered with 16 fractional digits.
    Rational(BigRational),
    /// Bounded integer by value.
    Int(i64),
    /// Bounded integer by optional reference; `None` encodes to nothing.
    OptInt(Option<i64>),
    /// Text; the empty string encodes to nothing.
    Text(String),
    /// Rendered as `"true"` / `"false"`.
    Bool(bool),
    /// Nested mapping, encoded entry by entry under each entry's key.
    Map(BTreeMap<String, Value>),
    /// Sequence, each element encoded under the outer element name.
    Seq(Vec<Value>),
    /// Structured object decomposed through serde. Only a JSON object
    /// (or null, meaning absent) is acceptable where this is encoded.
    Opaque(serde_json::Value),
}

impl Value {
    /// Decompose a structured object into an encodable tree via serde.
    ///
    /// `Option` fields follow the omission rules: `None` produces no
    /// element, `Some(inner)` is dereferenced and encoded.
    pub fn opaque<T: Serialize>(value: &T) -> Result<Value> {
        match serde_json::to_value(value) {
            Ok(json) => Ok(Value::Opaque(json)),
            Err(e) => Err(SoapError::UnknownType {
                key: std::any::type_name::<T>().to_string(),
                type_name: format!("unserializable: {e}"),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<Option<i64>> for Value {
    fn from(v: Option<i64>) -> Self {
        Value::OptInt(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::Float(v)
    }
}

impl From<BigRational> for Value {
    fn from(v: BigRational) -> Self {
        Value::Rational(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}
