//! Strict schema validation layered over the `apache-avro` parser.
//!
//! Parsing alone establishes that a schema document is structurally sound. The
//! functions here additionally hold every top-level field default to the type the
//! field declares. [`build_partial`][crate::build_partial] runs its output
//! through this pipeline before handing it back, and [`parse_strict`] offers the
//! same pipeline for schema documents from any other source.

use apache_avro::{types::Value as AvroValue, Schema};
use serde_json::Value;

use crate::error::{Error, Result};

/// Parse a schema document and run it through full validation, structural and
/// default-value checks both.
pub fn parse_strict(raw: &str) -> Result<Schema> {
    let schema = Schema::parse_str(raw).map_err(Error::FailValidate)?;
    validate_defaults(&schema)?;
    Ok(schema)
}

/// Re-parse an assembled JSON schema representation as if it were hand-written.
pub(crate) fn revalidate(candidate: &Value) -> Result<Schema> {
    let text = serde_json::to_string(candidate)?;
    parse_strict(&text)
}

/// Check every top-level field default of a record schema against the field's
/// declared type.
///
/// A union-typed field must have a default matching the union's first branch. Fields
/// whose type is a reference to a named type are skipped; their definitions were
/// checked wherever they were declared. Schemas without a top-level field list pass
/// vacuously.
pub fn validate_defaults(schema: &Schema) -> Result<()> {
    let record = match schema {
        Schema::Record(record) => record,
        _ => return Ok(()),
    };
    for field in &record.fields {
        let default = match &field.default {
            Some(default) => default,
            None => continue,
        };
        let target = match &field.schema {
            Schema::Union(union) => match union.variants().first() {
                Some(variant) => variant,
                None => continue,
            },
            other => other,
        };
        if let Schema::Ref { .. } = target {
            continue;
        }
        AvroValue::from(default.clone())
            .resolve(target)
            .map_err(|source| Error::BadDefault {
                field: field.name.clone(),
                source,
            })?;
    }
    Ok(())
}
