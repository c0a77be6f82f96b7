//! Human-readable formatting for values and scalars.
//!
//! Formatting is for diagnostics and opaque-payload stringification, not a
//! wire format: sequences render as `[a, b]`, structures as
//! `Tag { Name: value }`, maps as `{key: value}`.

use std::fmt;

use crate::scalar::Scalar;
use crate::value::Value;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::U8(v) => write!(f, "{v}"),
            Scalar::U16(v) => write!(f, "{v}"),
            Scalar::U32(v) => write!(f, "{v}"),
            Scalar::U64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Decimal(v) => write!(f, "{v}"),
            Scalar::Span(v) => write!(f, "{v}"),
            Scalar::Timestamp(v) => write!(f, "{v}"),
            Scalar::TimestampTz(v) => write!(f, "{v}"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Scalar(s) => write!(f, "{s}"),

            Value::Sequence(elements) => {
                write!(f, "[")?;
                let mut first = true;
                for element in elements {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }

            Value::Structure(structure) => {
                if let Some(tag) = structure.type_tag() {
                    write!(f, "{tag} ")?;
                }
                write!(f, "{{")?;
                let mut first = true;
                for property in structure.properties() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}: {}", property.name(), property.value())?;
                }
                write!(f, "}}")
            }

            Value::Map(entries) => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, value) in entries {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
