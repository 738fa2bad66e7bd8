//! Truncated Avro record schemas, for decoding only the leading fields of a record.
//!
//! A record schema often starts with a few cheap "header" fields and ends in
//! expensive ones, like large strings or byte blobs. Because Avro's binary record
//! encoding is purely positional, with fields concatenated in declaration order and
//! no per-field framing, a reader holding only a leading run of the fields can
//! decode the front of a record and simply never touch the rest. This crate derives
//! such a schema: [`build_partial`] takes a full record schema and a field name, and
//! returns a new schema whose field list stops at (and includes) that field, with
//! every other schema property carried over unchanged.
//!
//! The result is re-parsed and re-validated through `apache-avro` before it is
//! returned, so it is held to exactly the rules a hand-written schema would be,
//! default values included. [`parse_strict`] exposes that same validation pipeline
//! for schema documents from any other source, and [`validate_defaults`] is the
//! default-value half of it on its own.
//!
//! ```
//! use apache_avro::{from_avro_datum, to_avro_datum, types::{Record, Value}};
//! use avro_partial::{build_partial, parse_strict};
//!
//! let full = parse_strict(r#"{
//!     "type": "record",
//!     "name": "LogLine",
//!     "fields": [
//!         {"name": "source", "type": "string"},
//!         {"name": "level", "type": "long"},
//!         {"name": "body", "type": "bytes"}
//!     ]
//! }"#)?;
//!
//! // A reader that only cares about the header fields
//! let partial = build_partial(&full, "level")?;
//!
//! let mut record = Record::new(&full).unwrap();
//! record.put("source", "auth");
//! record.put("level", 3i64);
//! record.put("body", Value::Bytes(vec![0u8; 1024]));
//! let encoded = to_avro_datum(&full, record)?;
//!
//! // Decodes source and level, never reads body
//! let decoded = from_avro_datum(&partial, &mut &encoded[..], None)?;
//! if let Value::Record(fields) = decoded {
//!     assert_eq!(fields[1], ("level".to_owned(), Value::Long(3)));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod partial;
mod validate;

pub use apache_avro::Schema;

pub use self::error::{Error, Result};
pub use self::partial::build_partial;
pub use self::validate::{parse_strict, validate_defaults};
