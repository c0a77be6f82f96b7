//! Plain, generically-consumable data produced by externalization.
//!
//! [`Plain`] is what leaves the runtime: canonical scalar leaves under
//! ordered lists and key-value mappings, with nothing evaluator-internal
//! left in the tree. It is also the shape operators and user functions
//! work over, so the leaf variants are exactly the six canonical scalar
//! types.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Externalized data: canonical leaves, ordered lists, and mappings.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Plain {
    /// Absence: a null leaf, or an undefined evaluation result.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    String(String),
    /// Unified arbitrary-precision number.
    Number(Decimal),
    /// Time interval.
    Span(TimeDelta),
    /// Timestamp without a zone.
    Timestamp(NaiveDateTime),
    /// Timestamp with a fixed zone offset.
    TimestampTz(DateTime<FixedOffset>),
    /// Ordered list.
    Seq(Vec<Plain>),
    /// String-keyed mapping with preserved insertion order; structures
    /// externalize here, with the reserved `$type` field appended last.
    Object(IndexMap<String, Plain>),
    /// Mapping whose keys are themselves plain values.
    Map(Vec<(Plain, Plain)>),
}

impl Plain {
    /// Classify this value.
    #[must_use]
    pub fn kind(&self) -> PlainKind {
        match self {
            Self::Null => PlainKind::Null,
            Self::Bool(_) => PlainKind::Bool,
            Self::String(_) => PlainKind::String,
            Self::Number(_) => PlainKind::Number,
            Self::Span(_) => PlainKind::Span,
            Self::Timestamp(_) => PlainKind::Timestamp,
            Self::TimestampTz(_) => PlainKind::TimestampTz,
            Self::Seq(_) => PlainKind::Seq,
            Self::Object(_) => PlainKind::Object,
            Self::Map(_) => PlainKind::Map,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a number.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as a slice of list elements.
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Plain]> {
        match self {
            Self::Seq(elements) => Some(elements),
            _ => None,
        }
    }

    /// Try to get as an object reference.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Plain>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up an object field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Plain> {
        self.as_object().and_then(|fields| fields.get(name))
    }

    /// Look up a map entry by key.
    #[must_use]
    pub fn entry(&self, key: &Plain) -> Option<&Plain> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plain::Null => write!(f, "null"),
            Plain::Bool(b) => write!(f, "{b}"),
            Plain::String(s) => write!(f, "{s}"),
            Plain::Number(d) => write!(f, "{d}"),
            Plain::Span(s) => write!(f, "{s}"),
            Plain::Timestamp(t) => write!(f, "{t}"),
            Plain::TimestampTz(t) => write!(f, "{t}"),

            Plain::Seq(elements) => {
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

            Plain::Object(fields) => {
                write!(f, "{{")?;
                let mut first = true;
                for (name, value) in fields {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }

            Plain::Map(entries) => {
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

// ==================== From implementations ====================

impl From<bool> for Plain {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Plain {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Plain {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Decimal> for Plain {
    fn from(v: Decimal) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Plain {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<i64> for Plain {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Plain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Plain::Null => serializer.serialize_unit(),
            Plain::Bool(b) => serializer.serialize_bool(*b),
            Plain::String(s) => serializer.serialize_str(s),
            Plain::Number(d) => serde::Serialize::serialize(d, serializer),
            Plain::Span(s) => serializer.collect_str(s),
            Plain::Timestamp(t) => serializer.collect_str(t),
            Plain::TimestampTz(t) => serializer.collect_str(t),
            Plain::Seq(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Plain::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Plain::Map(entries) => {
                // Formats like JSON only take string keys; non-string keys
                // fall back to their textual rendering.
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    match key {
                        Plain::String(s) => map.serialize_entry(s, value)?,
                        other => map.serialize_entry(&other.to_string(), value)?,
                    }
                }
                map.end()
            }
        }
    }
}

/// The kind of a [`Plain`] value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlainKind {
    Null,
    Bool,
    String,
    Number,
    Span,
    Timestamp,
    TimestampTz,
    Seq,
    Object,
    Map,
}

impl PlainKind {
    /// Check if this kind is one of the six canonical scalar types.
    #[inline]
    pub const fn is_canonical_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::String
                | Self::Number
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
            Self::Number => "number",
            Self::Span => "span",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp with zone",
            Self::Seq => "sequence",
            Self::Object => "object",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for PlainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_predicates() {
        assert!(Plain::from("x").kind().is_canonical_scalar());
        assert!(Plain::from(1).kind().is_canonical_scalar());
        assert!(!Plain::Null.kind().is_canonical_scalar());
        assert!(!Plain::Seq(vec![]).kind().is_canonical_scalar());
    }

    #[test]
    fn test_object_field_lookup() {
        let object = Plain::Object(IndexMap::from([
            ("Name".to_owned(), Plain::from("nblumhardt")),
            ("Id".to_owned(), Plain::from(42)),
        ]));
        assert_eq!(object.field("Name"), Some(&Plain::from("nblumhardt")));
        assert_eq!(object.field("Missing"), None);
        assert_eq!(Plain::Null.field("Name"), None);
    }

    #[test]
    fn test_map_entry_lookup() {
        let map = Plain::Map(vec![
            (Plain::from(1), Plain::from("one")),
            (Plain::from("two"), Plain::from(2)),
        ]);
        assert_eq!(map.entry(&Plain::from(1)), Some(&Plain::from("one")));
        assert_eq!(map.entry(&Plain::from("two")), Some(&Plain::from(2)));
        assert_eq!(map.entry(&Plain::from(3)), None);
    }

    #[test]
    fn test_display() {
        let value = Plain::Seq(vec![
            Plain::from("a"),
            Plain::from(2),
            Plain::Map(vec![(Plain::from(1), Plain::from("one"))]),
        ]);
        assert_eq!(value.to_string(), "[a, 2, {1: one}]");
    }
}
