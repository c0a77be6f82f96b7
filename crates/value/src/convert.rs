//! `From` conversions into [`Scalar`] and [`Value`].
//!
//! The capture pipeline builds leaves out of whatever native type the
//! application handed it, so every primitive width converts losslessly
//! into its own variant; unification into the canonical set happens later,
//! in the expression runtime.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

use crate::scalar::Scalar;
use crate::value::{Structure, Value};

// ==================== Into Scalar ====================

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i8> for Scalar {
    fn from(v: i8) -> Self {
        Self::I8(v)
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for Scalar {
    fn from(v: u8) -> Self {
        Self::U8(v)
    }
}

impl From<u16> for Scalar {
    fn from(v: u16) -> Self {
        Self::U16(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<Decimal> for Scalar {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<TimeDelta> for Scalar {
    fn from(v: TimeDelta) -> Self {
        Self::Span(v)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(v: NaiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

impl From<DateTime<FixedOffset>> for Scalar {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::TimestampTz(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Self::TimestampTz(v.fixed_offset())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ==================== Into Value ====================

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl From<Structure> for Value {
    fn from(v: Structure) -> Self {
        Self::Structure(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Scalar(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_width_keeps_its_variant() {
        assert_eq!(Scalar::from(1i8), Scalar::I8(1));
        assert_eq!(Scalar::from(1u16), Scalar::U16(1));
        assert_eq!(Scalar::from(1i64), Scalar::I64(1));
        assert_eq!(Scalar::from(1.5f32), Scalar::F32(1.5));
        assert_eq!(Scalar::from(1.5f64), Scalar::F64(1.5));
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert_eq!(Scalar::from(None::<i32>), Scalar::Null);
        assert_eq!(Scalar::from(Some(7)), Scalar::I32(7));
    }

    #[test]
    fn test_utc_normalizes_to_fixed_offset() {
        let now = Utc::now();
        let s = Scalar::from(now);
        assert!(matches!(s, Scalar::TimestampTz(_)));
    }

    #[test]
    fn test_value_from_primitives() {
        assert_eq!(Value::from("apple"), Value::scalar("apple"));
        assert_eq!(Value::from(true), Value::Scalar(Scalar::Bool(true)));
    }
}
