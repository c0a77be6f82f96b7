//! The tagged value model shared by event capture and the expression
//! runtime.

use crate::kind::ValueKind;
use crate::scalar::Scalar;

/// A captured property value, or an intermediate produced while evaluating
/// an expression over one.
///
/// Values form a tree: scalars at the leaves, sequences, structures, and
/// maps above them. Each evaluation round owns its own value graph; nothing
/// here is shared or mutated in place.
///
/// `Undefined` is the one variant that never crosses the runtime boundary:
/// it marks "evaluation could not produce a value here" and every
/// externalization path converts it to absence. It is distinct from
/// `Null`, which is a real captured absence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A leaf payload.
    Scalar(Scalar),
    /// An ordered, possibly heterogeneous list.
    Sequence(Vec<Value>),
    /// A named-field aggregate, optionally tagged with its logical type.
    Structure(Structure),
    /// An associative collection whose keys are themselves values.
    Map(Vec<(Value, Value)>),
    /// Evaluation produced nothing here. Runtime-internal only.
    Undefined,
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create the undefined sentinel.
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create a scalar leaf.
    pub fn scalar(payload: impl Into<Scalar>) -> Self {
        Self::Scalar(payload.into())
    }

    /// Create a sequence from an ordered collection of values.
    pub fn sequence(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Create a structure value.
    pub fn structure(structure: Structure) -> Self {
        Self::Structure(structure)
    }

    /// Create a map from key/value entry pairs.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Structure(_) => ValueKind::Structure,
            Self::Map(_) => ValueKind::Map,
            Self::Undefined => ValueKind::Undefined,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is the undefined sentinel.
    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if this is a scalar leaf.
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check if this is a composite (sequence, structure, or map).
    #[inline]
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    // ==================== Accessors ====================

    /// Try to get as a scalar reference.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a slice of sequence elements.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Try to get as a structure reference.
    #[inline]
    #[must_use]
    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Self::Structure(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a slice of map entries.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// A named-field aggregate: ordered properties plus an optional type tag
/// identifying the structure's logical type on the capturing side.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    properties: Vec<Property>,
    type_tag: Option<String>,
}

impl Structure {
    /// Create an untagged structure.
    pub fn new(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            type_tag: None,
        }
    }

    /// Create a structure tagged with its logical type name.
    pub fn tagged(
        type_tag: impl Into<String>,
        properties: impl IntoIterator<Item = Property>,
    ) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            type_tag: Some(type_tag.into()),
        }
    }

    /// The properties, in declaration order.
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The logical type tag, if the capturing side recorded one.
    #[inline]
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Look up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(Property::value)
    }
}

/// One named property of a [`Structure`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    /// Create a property.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The property name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::null().kind(), ValueKind::Null);
        assert_eq!(Value::undefined().kind(), ValueKind::Undefined);
        assert_eq!(Value::scalar(3).kind(), ValueKind::Scalar);
        assert_eq!(Value::sequence([]).kind(), ValueKind::Sequence);
        assert_eq!(
            Value::map([(Value::scalar(1), Value::scalar("one"))]).kind(),
            ValueKind::Map
        );
    }

    #[test]
    fn test_null_and_undefined_are_distinct() {
        assert_ne!(Value::null(), Value::undefined());
        assert!(Value::null().is_null());
        assert!(!Value::null().is_undefined());
        assert!(Value::undefined().is_undefined());
    }

    #[test]
    fn test_structure_lookup() {
        let s = Structure::tagged(
            "Person",
            [
                Property::new("Name", Value::scalar("nblumhardt")),
                Property::new("Id", Value::scalar(42)),
            ],
        );
        assert_eq!(s.type_tag(), Some("Person"));
        assert_eq!(s.get("Name"), Some(&Value::scalar("nblumhardt")));
        assert_eq!(s.get("Missing"), None);
        assert_eq!(s.properties().len(), 2);
    }

    #[test]
    fn test_accessors() {
        let seq = Value::sequence([Value::scalar(1), Value::scalar(2)]);
        assert_eq!(seq.as_sequence().map(|s| s.len()), Some(2));
        assert_eq!(seq.as_scalar(), None);
        assert!(seq.is_composite());

        let v = Value::scalar(true);
        assert_eq!(v.as_scalar().and_then(Scalar::as_bool), Some(true));
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }
}
