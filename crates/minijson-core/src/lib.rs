//! # minijson-core
//!
//! A tiny JSON value model with a recursive-descent parser and a serializer,
//! for embedding in applications that build, inspect, and exchange small
//! JSON payloads.
//!
//! Two deliberate deviations from strict JSON round-tripping:
//!
//! - `\uXXXX` escapes are **not decoded**: parsing the text `"\u00e9"`
//!   yields a string holding the six literal characters `\u00e9`, and
//!   dumping it reproduces the escape text, not the decoded code point.
//! - Object keys serialize in **key-sorted order**, not insertion order.
//!
//! ## Quick start
//!
//! ```rust
//! use minijson_core::{dump, parse, Indent, Value};
//!
//! let mut v = Value::object();
//! *v.entry("name") = Value::from("Alice");
//! v.entry("scores").push(95);
//! v.entry("scores").push(87);
//! assert_eq!(dump(&v, Indent::Compact), r#"{"name":"Alice","scores":[95,87]}"#);
//!
//! let parsed = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! assert_eq!(parsed, v);
//! assert_eq!(parsed.at("name").unwrap().as_str().unwrap(), "Alice");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type: constructors, predicates, checked
//!   accessors, keyed/indexed conveniences
//! - [`encoder`] — `Value` → JSON text, compact or indented
//! - [`decoder`] — JSON text → `Value`, with syntax errors at byte offsets
//! - [`convert`] — serde and `serde_json::Value` interop
//! - [`error`] — error types for parse failures and typed access

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;

pub use decoder::{parse, MAX_DEPTH};
pub use encoder::{dump, Indent};
pub use error::{JsonError, Result};
pub use value::{Array, Object, Value};
