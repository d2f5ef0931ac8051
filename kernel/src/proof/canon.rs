//! Canonical JSON for hashing.
//!
//! Topology, traces, policies and snapshots are digested from the bytes this
//! module produces. Equal content yields equal bytes no matter how the
//! `serde_json::Value` was assembled:
//!
//! - object members are emitted in byte order of their keys
//! - separators carry no whitespace
//! - strings use `serde_json`'s RFC 8259 escaping
//! - numbers must be integers; costs and pixel coordinates never need floats

use super::hash::{canonical_hash, ContentHash, HashDomain};
use serde_json::{Map, Number, Value};

/// Why a value could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A number with a fractional part or exponent.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "canonical JSON admits integers only, got {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Accumulates canonical output for one value tree.
struct Emitter {
    out: Vec<u8>,
}

impl Emitter {
    fn value(&mut self, value: &Value) -> Result<(), CanonError> {
        match value {
            Value::Null => self.out.extend_from_slice(b"null"),
            Value::Bool(true) => self.out.extend_from_slice(b"true"),
            Value::Bool(false) => self.out.extend_from_slice(b"false"),
            Value::Number(n) => self.number(n)?,
            Value::String(s) => self.string(s),
            Value::Array(items) => {
                self.out.push(b'[');
                let mut first = true;
                for item in items {
                    if !std::mem::take(&mut first) {
                        self.out.push(b',');
                    }
                    self.value(item)?;
                }
                self.out.push(b']');
            }
            Value::Object(members) => self.object(members)?,
        }
        Ok(())
    }

    fn object(&mut self, members: &Map<String, Value>) -> Result<(), CanonError> {
        let mut sorted: Vec<(&String, &Value)> = members.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        self.out.push(b'{');
        for (ix, (key, member)) in sorted.into_iter().enumerate() {
            if ix != 0 {
                self.out.push(b',');
            }
            self.string(key);
            self.out.push(b':');
            self.value(member)?;
        }
        self.out.push(b'}');
        Ok(())
    }

    fn number(&mut self, n: &Number) -> Result<(), CanonError> {
        let digits = match (n.as_i64(), n.as_u64()) {
            (Some(signed), _) => signed.to_string(),
            (None, Some(unsigned)) => unsigned.to_string(),
            (None, None) => {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        };
        self.out.extend_from_slice(digits.as_bytes());
        Ok(())
    }

    fn string(&mut self, s: &str) {
        // Infallible for a &str into a Vec.
        let _ = serde_json::to_writer(&mut self.out, s);
    }
}

/// Serialize `value` to canonical JSON bytes.
///
/// # Errors
///
/// [`CanonError::NonIntegerNumber`] when any number anywhere in `value` is
/// not an `i64`/`u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut emitter = Emitter { out: Vec::new() };
    emitter.value(value)?;
    Ok(emitter.out)
}

/// Canonicalize `value` and digest the bytes under `domain`.
///
/// # Errors
///
/// Same as [`canonical_json_bytes`].
pub fn canonical_json_hash(domain: HashDomain, value: &Value) -> Result<ContentHash, CanonError> {
    canonical_json_bytes(value).map(|bytes| canonical_hash(domain, &bytes))
}
