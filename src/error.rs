use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// Occurs when the requested truncation field doesn't appear in the schema's
    /// top-level field list. Matching is by exact, case-sensitive name.
    FieldNotFound { field: String },
    /// Occurs when the schema handed in isn't a record at the top level. Only a record
    /// has a field list to truncate.
    NotARecord { kind: String },
    /// Occurs when a schema fails the round trip through its JSON structural form.
    Json(serde_json::Error),
    /// Schema validation failure, either on a schema document handed to
    /// [`parse_strict`][crate::parse_strict] or on a truncated schema during
    /// re-validation.
    FailValidate(apache_avro::Error),
    /// Occurs when a field declares a default value that is inconsistent with the
    /// field's declared type.
    BadDefault {
        field: String,
        source: apache_avro::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::FieldNotFound { ref field } => {
                write!(f, "field {} not found in input schema", field)
            }
            Error::NotARecord { ref kind } => {
                write!(f, "expected a record schema, got {}", kind)
            }
            Error::Json(ref err) => write!(f, "schema JSON round trip failed: {}", err),
            Error::FailValidate(ref err) => write!(f, "schema failed validation: {}", err),
            Error::BadDefault {
                ref field,
                ref source,
            } => write!(
                f,
                "default value for field {} doesn't match its declared type: {}",
                field, source
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Json(ref err) => Some(err),
            Error::FailValidate(ref err) => Some(err),
            Error::BadDefault { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

impl std::convert::From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
