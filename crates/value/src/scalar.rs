//! Raw scalar payloads as produced by the event capture pipeline.
//!
//! A [`Scalar`] is a leaf of the value model. Until it passes through the
//! expression runtime's canonicalizer it may carry any native payload the
//! capturing side produced: every fixed-width integer, both float widths,
//! or an arbitrary application type behind [`Scalar::Other`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::kind::ScalarKind;

/// A scalar payload the value model cannot name.
///
/// Captured property values are open-ended; anything that can describe
/// itself textually can ride along as [`Scalar::Other`] and will be
/// stringified when it reaches the expression runtime. Blanket-implemented
/// for every `Debug + Display + Send + Sync` type.
pub trait OpaqueScalar: fmt::Debug + fmt::Display + Send + Sync {}

impl<T: fmt::Debug + fmt::Display + Send + Sync> OpaqueScalar for T {}

/// A leaf value of the event value model.
///
/// The first group of variants (`Bool`, `String`, `Decimal`, `Span`,
/// `Timestamp`, `TimestampTz`) are the canonical payloads the expression
/// runtime's operators work over. The numeric width variants and `Other`
/// only exist transiently, before canonicalization.
#[derive(Debug, Clone)]
pub enum Scalar {
    /// An absent payload (a captured property that held nothing).
    Null,
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    String(String),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Arbitrary-precision decimal; the unified numeric type.
    Decimal(Decimal),
    /// Time interval.
    Span(TimeDelta),
    /// Timestamp without a zone.
    Timestamp(NaiveDateTime),
    /// Timestamp with a fixed zone offset.
    TimestampTz(DateTime<FixedOffset>),
    /// Any other native payload the capture pipeline produced.
    Other(Arc<dyn OpaqueScalar>),
}

impl Scalar {
    /// Wrap an arbitrary payload the value model has no variant for.
    pub fn other(payload: impl OpaqueScalar + 'static) -> Self {
        Self::Other(Arc::new(payload))
    }

    /// Classify this payload.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Null => ScalarKind::Null,
            Self::Bool(_) => ScalarKind::Bool,
            Self::String(_) => ScalarKind::String,
            Self::I8(_)
            | Self::I16(_)
            | Self::I32(_)
            | Self::I64(_)
            | Self::U8(_)
            | Self::U16(_)
            | Self::U32(_)
            | Self::U64(_) => ScalarKind::Integer,
            Self::F32(_) | Self::F64(_) => ScalarKind::Float,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Span(_) => ScalarKind::Span,
            Self::Timestamp(_) => ScalarKind::Timestamp,
            Self::TimestampTz(_) => ScalarKind::TimestampTz,
            Self::Other(_) => ScalarKind::Other,
        }
    }

    /// Check if the payload is absent.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the payload is numeric (any integer width, float, or decimal).
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Check if the payload is already one of the six canonical types.
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.kind().is_canonical()
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

    /// Try to get as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a decimal.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Span(a), Self::Span(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::TimestampTz(a), Self::TimestampTz(b)) => a == b,
            // The only observable an opaque payload guarantees is its
            // textual rendering.
            (Self::Other(a), Self::Other(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Scalar::Null.kind(), ScalarKind::Null);
        assert_eq!(Scalar::I32(1).kind(), ScalarKind::Integer);
        assert_eq!(Scalar::U64(1).kind(), ScalarKind::Integer);
        assert_eq!(Scalar::F32(1.0).kind(), ScalarKind::Float);
        assert_eq!(Scalar::Decimal(Decimal::ONE).kind(), ScalarKind::Decimal);
        assert_eq!(Scalar::other(42u128).kind(), ScalarKind::Other);
    }

    #[test]
    fn test_canonical_predicate() {
        assert!(Scalar::Bool(true).is_canonical());
        assert!(Scalar::String("x".into()).is_canonical());
        assert!(Scalar::Decimal(Decimal::ONE).is_canonical());
        assert!(Scalar::Span(TimeDelta::seconds(1)).is_canonical());
        assert!(!Scalar::Null.is_canonical());
        assert!(!Scalar::I64(1).is_canonical());
        assert!(!Scalar::F64(1.0).is_canonical());
        assert!(!Scalar::other("raw").is_canonical());
    }

    #[test]
    fn test_opaque_equality_by_rendering() {
        assert_eq!(Scalar::other(42u128), Scalar::other("42"));
        assert_ne!(Scalar::other(42u128), Scalar::other(43u128));
        // Opaque payloads never equal modeled ones, even when they render
        // the same.
        assert_ne!(Scalar::other("hi"), Scalar::String("hi".into()));
    }
}
