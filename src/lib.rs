//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. Its canonical form is deterministic: structurally equal values
//! always encode to the same bytes, which is what makes consistent hashing of
//! encoded metadata possible.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use bencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! let encoded = encode(&Value::Integer(42));
//! assert_eq!(encoded, b"i42e");
//!
//! // Encode a string
//! let encoded = encode(&Value::string("hello"));
//! assert_eq!(encoded, b"5:hello");
//!
//! // Encode a dictionary; keys are emitted in ascending byte order no
//! // matter the order they were inserted in
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"spam"), Value::string("eggs"));
//! dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
//! let encoded = encode(&Value::Dict(dict));
//! assert_eq!(encoded, b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! ## Reading optional fields
//!
//! When a missing or wrongly-typed field should read the same as an empty
//! one, the lenient accessors avoid `Option` plumbing:
//!
//! ```
//! use bencode::decode;
//!
//! let value = decode(b"d4:porti6881ee").unwrap();
//! assert_eq!(value.get(b"port").map(|v| v.integer_or_default()), Some(6881));
//! assert!(value.get(b"ip").is_none());
//! ```
//!
//! # Error Handling
//!
//! Decoding is strict and can fail for various reasons:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended mid-value
//! - [`BencodeError::UnexpectedByte`] - Unrecognized leading marker
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidLength`] - Malformed or oversized string length
//! - [`BencodeError::DuplicateKey`] - Dictionary key repeated
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! Encoding never fails: every constructible [`Value`] has a canonical form.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod display;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;
