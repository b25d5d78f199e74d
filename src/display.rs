//! Human-readable rendering of values, for logging and debugging.
//!
//! This is a one-way, lossy view: byte strings that are not valid UTF-8 are
//! shown as their base64 encoding so the output stays printable. It is never
//! parseable back into a value and has no bearing on the canonical encoding.

use super::value::Value;
use base64::Engine;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Bytes(b) => fmt_bytes(b, f),
            Value::List(l) => {
                f.write_str("[")?;
                for (i, item) in l.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Dict(d) => {
                f.write_str("{")?;
                for (i, (key, value)) in d.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    fmt_bytes(key, f)?;
                    f.write_str(":")?;
                    write!(f, "{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn fmt_bytes(b: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match std::str::from_utf8(b) {
        Ok(s) => write!(f, "{:?}", s),
        Err(_) => {
            let b64 = base64::engine::general_purpose::STANDARD.encode(b);
            write!(f, "{:?}", b64)
        }
    }
}
