//! Lightweight classification enums for values and scalar payloads.
//!
//! Mostly used in diagnostics: a kind gives a stable, payload-free name
//! for a variant without dragging the payload into an error message.

use std::fmt;

/// The kind of a [`Value`](crate::Value) variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Scalar,
    Sequence,
    Structure,
    Map,
    Undefined,
}

impl ValueKind {
    /// Check if this kind is a composite (sequence, structure, or map).
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Sequence | Self::Structure | Self::Map)
    }

    /// Get a descriptive name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Structure => "structure",
            Self::Map => "map",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of a [`Scalar`](crate::Scalar) payload.
///
/// Integer widths collapse into `Integer` and float widths into `Float`;
/// the distinction never matters after canonicalization and a grouped kind
/// reads better in messages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    String,
    Integer,
    Float,
    Decimal,
    Span,
    Timestamp,
    TimestampTz,
    Other,
}

impl ScalarKind {
    /// Check if this kind is numeric.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }

    /// Check if this kind is temporal.
    #[inline]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Span | Self::Timestamp | Self::TimestampTz)
    }

    /// Check if payloads of this kind survive canonicalization unchanged.
    ///
    /// These are the six types comparison, arithmetic, and pattern
    /// operators accept. Integers and floats are *not* among them: they
    /// widen into decimal on the way in.
    #[inline]
    pub const fn is_canonical(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::String
                | Self::Decimal
                | Self::Span
                | Self::Timestamp
                | Self::TimestampTz
        )
    }

    /// Get a descriptive name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Span => "span",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp with zone",
            Self::Other => "opaque",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_names() {
        assert_eq!(ValueKind::Structure.name(), "structure");
        assert_eq!(ValueKind::Undefined.to_string(), "undefined");
        assert!(ValueKind::Map.is_composite());
        assert!(!ValueKind::Scalar.is_composite());
    }

    #[test]
    fn test_scalar_kind_predicates() {
        assert!(ScalarKind::Integer.is_numeric());
        assert!(ScalarKind::Decimal.is_numeric());
        assert!(!ScalarKind::String.is_numeric());
        assert!(ScalarKind::Span.is_temporal());
        assert!(ScalarKind::Decimal.is_canonical());
        assert!(!ScalarKind::Integer.is_canonical());
        assert!(!ScalarKind::Other.is_canonical());
    }
}
