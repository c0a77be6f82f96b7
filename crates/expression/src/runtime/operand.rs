//! The runtime's internal value currency.

use sift_value::Value;

use crate::runtime::plain::Plain;

/// What flows between operators during expression evaluation: either data
/// already reduced to its plain form, or a still-structured model value
/// waiting to be walked into.
///
/// Composites stay on the model side until a result escapes; their scalar
/// leaves are canonicalized lazily, on the way out. A scalar that reaches
/// the strict externalization boundary still wrapped in `Model` is an
/// evaluator defect — see
/// [`expose`](crate::runtime::representation::expose).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Already-reduced plain data.
    Plain(Plain),
    /// A value-model graph, or the undefined sentinel.
    Model(Value),
}

impl Operand {
    /// The undefined sentinel as an operand.
    pub const fn undefined() -> Self {
        Self::Model(Value::Undefined)
    }

    /// Check if this is the undefined sentinel.
    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Model(Value::Undefined))
    }

    /// Try to get as plain data.
    #[inline]
    #[must_use]
    pub fn as_plain(&self) -> Option<&Plain> {
        match self {
            Self::Plain(plain) => Some(plain),
            Self::Model(_) => None,
        }
    }

    /// Try to get as a model value.
    #[inline]
    #[must_use]
    pub fn as_model(&self) -> Option<&Value> {
        match self {
            Self::Model(value) => Some(value),
            Self::Plain(_) => None,
        }
    }
}

impl From<Plain> for Operand {
    fn from(plain: Plain) -> Self {
        Self::Plain(plain)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Model(value)
    }
}
