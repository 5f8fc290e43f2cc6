//! XML emission tokens.
//!
//! A `TokenStream` is created fresh for each call, populated during
//! that call, and flushed at the end of it. It is owned exclusively by
//! the in-flight call and never shared between calls, so concurrent
//! requests cannot interleave tokens.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, SoapError};

/// One atomic unit of the XML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Element open, with attributes in emission order.
    Start {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Character data (entity-escaped on write).
    Text(String),
    /// Element close.
    End(String),
}

/// Ordered, append-only sequence of emission tokens.
///
/// Invariant upheld by the encoder and framer: every `Start` has
/// exactly one matching `End`, nesting in LIFO order.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append an element-open token without attributes.
    pub fn start(&mut self, name: &str) {
        self.tokens.push(Token::Start {
            name: name.to_string(),
            attrs: Vec::new(),
        });
    }

    /// Append an element-open token with attributes.
    pub fn start_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.tokens.push(Token::Start {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    /// Append a character-data token.
    pub fn text(&mut self, text: impl Into<String>) {
        self.tokens.push(Token::Text(text.into()));
    }

    /// Append an element-close token.
    pub fn end(&mut self, name: &str) {
        self.tokens.push(Token::End(name.to_string()));
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Emitted tokens, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when every `Start` has a matching `End` in LIFO order.
    pub fn is_balanced(&self) -> bool {
        let mut stack: Vec<&str> = Vec::new();
        for token in &self.tokens {
            match token {
                Token::Start { name, .. } => stack.push(name),
                Token::End(name) => {
                    if stack.pop() != Some(name.as_str()) {
                        return false;
                    }
                }
                Token::Text(_) => {}
            }
        }
        stack.is_empty()
    }

    /// Serialize the stream to UTF-8 XML bytes in emission order.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        for token in &self.tokens {
            let written = match token {
                Token::Start { name, attrs } => {
                    let mut start = BytesStart::new(name.as_str());
                    for (key, value) in attrs {
                        start.push_attribute((key.as_str(), value.as_str()));
                    }
                    writer.write_event(Event::Start(start))
                }
                Token::Text(text) => writer.write_event(Event::Text(BytesText::new(text))),
                Token::End(name) => writer.write_event(Event::End(BytesEnd::new(name.as_str()))),
            };
            written.map_err(|e| SoapError::Xml(e.to_string()))?;
        }
        Ok(writer.into_inner())
    }
}
