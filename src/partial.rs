//! Truncation of a record schema at a chosen field.
//!
//! Avro writes a record's fields positionally and contiguously, with no per-field
//! framing and no trailing metadata, so a schema holding only a leading run of the
//! fields can still decode the front of any record written under the full schema.
//! [`build_partial`] performs that truncation at the schema level; readers and
//! writers are then built against the result with `apache-avro` as usual. The win
//! is skipping the decode cost of expensive trailing fields (large strings or byte
//! blobs) when a consumer only wants the header.

use apache_avro::{schema::SchemaKind, Schema};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::validate::revalidate;

/// Build a partial schema from `schema`, keeping its top-level fields up to and
/// including `field_up_to`.
///
/// The retained fields and every other top-level property of the schema are copied
/// unchanged: field order, docs, defaults, aliases, and custom properties all come
/// through as they were. The input schema is never modified. Before being returned,
/// the truncated schema is re-parsed and re-validated, so the result is held to the
/// same rules as a hand-written schema.
///
/// Fails with [`Error::FieldNotFound`] if no top-level field is named `field_up_to`,
/// and with [`Error::NotARecord`] if `schema` isn't a record.
pub fn build_partial(schema: &Schema, field_up_to: &str) -> Result<Schema> {
    if !matches!(schema, Schema::Record(_)) {
        return Err(Error::NotARecord {
            kind: format!("{:?}", SchemaKind::from(schema)),
        });
    }

    let full = match serde_json::to_value(schema)? {
        Value::Object(props) => props,
        // A record schema always renders as a JSON object
        _ => unreachable!(),
    };

    let mut partial = Map::with_capacity(full.len());
    let mut found = false;
    for (prop, value) in &full {
        if prop == "fields" {
            partial.insert(prop.clone(), Value::Array(truncate_fields(value, field_up_to, &mut found)));
        } else {
            // Everything outside the field list is carried over untouched
            partial.insert(prop.clone(), value.clone());
        }
    }
    if !found {
        return Err(Error::FieldNotFound {
            field: field_up_to.to_owned(),
        });
    }

    revalidate(&Value::Object(partial))
}

/// Copy fields in declaration order, stopping once the target field has been copied.
fn truncate_fields(fields: &Value, field_up_to: &str, found: &mut bool) -> Vec<Value> {
    let fields = match fields.as_array() {
        Some(fields) => fields,
        None => return Vec::new(),
    };
    let mut kept = Vec::with_capacity(fields.len());
    for field in fields {
        kept.push(field.clone());
        if field.get("name").and_then(Value::as_str) == Some(field_up_to) {
            *found = true;
            break;
        }
    }
    kept
}
