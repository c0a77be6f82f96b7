//! The three conversion operations at the value-representation boundary.
//!
//! Property values enter evaluation through [`represent`], which narrows
//! raw scalar leaves into the six canonical types operators accept.
//! Results leave through [`expose`], which hands back plain nested data —
//! and treats a still-raw scalar as an evaluator defect, because every
//! leaf a *result* contains at its top level must already have been
//! represented. Its recursive helper [`expose_or_represent`] is the
//! permissive twin: leaves reached while walking *into* a composite have
//! never crossed a predicate boundary, so it canonicalizes them instead of
//! flagging them. [`recapture`] re-admits data produced by user-level
//! function bodies into the value model.
//!
//! All three operations are pure and total over their inputs; only strict
//! [`expose`] can fail, and only on the defect path.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use sift_value::{Scalar, Structure, Value};

use crate::error::{RepresentationError, RepresentationResult};
use crate::runtime::operand::Operand;
use crate::runtime::plain::Plain;

/// Reserved object key carrying a structure's type tag after
/// externalization.
pub const TYPE_TAG_KEY: &str = "$type";

/// Canonicalize a property value for use in operator evaluation.
///
/// A scalar leaf comes back as plain data: canonical payloads unchanged,
/// every fixed-width integer and float widened into one arbitrary-precision
/// number type (so a 32-bit integer and a 64-bit float compare without
/// per-width operator overloads), anything unrecognized stringified.
/// Non-scalar values pass through untouched — composites canonicalize
/// lazily, leaf by leaf, at externalization or comparison.
///
/// Never fails, whatever the capture pipeline produced.
pub fn represent(value: &Value) -> Operand {
    match value {
        Value::Scalar(scalar) => Operand::Plain(canonical(scalar)),
        other => Operand::Model(other.clone()),
    }
}

/// Hand an evaluation result out as plain nested data.
///
/// Sequences become ordered lists, structures become ordered string-keyed
/// objects (with [`TYPE_TAG_KEY`] appended when a type tag is present),
/// maps have both keys and values externalized, `Undefined` becomes null,
/// and already-plain data passes through unchanged.
///
/// # Errors
///
/// A bare [`Value::Scalar`] here means the evaluator emitted a result
/// without representing it first; that is an upstream defect and comes
/// back as [`RepresentationError::UnrepresentedScalar`] rather than being
/// silently coerced.
pub fn expose(value: &Operand) -> RepresentationResult<Plain> {
    match value {
        Operand::Plain(plain) => Ok(plain.clone()),
        Operand::Model(model) => match model {
            Value::Undefined | Value::Null => Ok(Plain::Null),
            Value::Scalar(scalar) => {
                Err(RepresentationError::unrepresented_scalar(scalar.kind()))
            }
            Value::Sequence(elements) => Ok(expose_sequence(elements)),
            Value::Structure(structure) => Ok(expose_structure(structure)),
            Value::Map(entries) => Ok(expose_map(entries)),
        },
    }
}

/// Externalize one value reached while walking into a composite result.
///
/// The permissive twin of [`expose`]: nested leaves are *expected* to
/// still be raw — they never individually crossed the predicate boundary —
/// so a scalar here is canonicalized, not flagged. Everything else behaves
/// as in [`expose`], recursively. Never fails.
pub fn expose_or_represent(value: &Value) -> Plain {
    match value {
        Value::Undefined | Value::Null => Plain::Null,
        Value::Scalar(scalar) => canonical(scalar),
        Value::Sequence(elements) => expose_sequence(elements),
        Value::Structure(structure) => expose_structure(structure),
        Value::Map(entries) => expose_map(entries),
    }
}

/// Re-admit data produced by a user-level function body into the value
/// model.
///
/// A model value passes through by identity. Plain leaves wrap as the
/// corresponding scalar payload. Plain *composites* were never constructed
/// as model values, so they wrap as one opaque scalar rather than being
/// reinterpreted structurally — callers that want composite results build
/// `Sequence`/`Structure`/`Map` values directly. Never fails.
pub fn recapture(value: Operand) -> Value {
    match value {
        Operand::Model(model) => model,
        Operand::Plain(plain) => Value::Scalar(scalar_from_plain(plain)),
    }
}

/// Narrow one raw scalar payload into the canonical set.
fn canonical(scalar: &Scalar) -> Plain {
    match scalar {
        Scalar::Null => Plain::Null,
        Scalar::Bool(b) => Plain::Bool(*b),
        Scalar::String(s) => Plain::String(s.clone()),
        // Already the unified numeric type.
        Scalar::Decimal(d) => Plain::Number(*d),
        Scalar::Span(s) => Plain::Span(*s),
        Scalar::Timestamp(t) => Plain::Timestamp(*t),
        Scalar::TimestampTz(t) => Plain::TimestampTz(*t),
        Scalar::I8(v) => Plain::Number((*v).into()),
        Scalar::I16(v) => Plain::Number((*v).into()),
        Scalar::I32(v) => Plain::Number((*v).into()),
        Scalar::I64(v) => Plain::Number((*v).into()),
        Scalar::U8(v) => Plain::Number((*v).into()),
        Scalar::U16(v) => Plain::Number((*v).into()),
        Scalar::U32(v) => Plain::Number((*v).into()),
        Scalar::U64(v) => Plain::Number((*v).into()),
        Scalar::F32(v) => Decimal::from_f32(*v).map_or_else(|| textual(v), Plain::Number),
        Scalar::F64(v) => Decimal::from_f64(*v).map_or_else(|| textual(v), Plain::Number),
        Scalar::Other(payload) => {
            tracing::debug!(payload = %payload, "unmodeled scalar payload represented textually");
            Plain::String(payload.to_string())
        }
    }
}

/// Fallback for payloads with no decimal form (non-finite floats).
fn textual(value: &dyn std::fmt::Display) -> Plain {
    tracing::debug!(%value, "numeric payload has no finite decimal form; representing textually");
    Plain::String(value.to_string())
}

fn expose_sequence(elements: &[Value]) -> Plain {
    Plain::Seq(elements.iter().map(expose_or_represent).collect())
}

fn expose_structure(structure: &Structure) -> Plain {
    let properties = structure.properties();
    let mut fields = IndexMap::with_capacity(properties.len() + 1);
    for property in properties {
        fields.insert(
            property.name().to_owned(),
            expose_or_represent(property.value()),
        );
    }
    // The reserved key lands after all declared properties.
    if let Some(tag) = structure.type_tag() {
        fields.insert(TYPE_TAG_KEY.to_owned(), Plain::String(tag.to_owned()));
    }
    Plain::Object(fields)
}

fn expose_map(entries: &[(Value, Value)]) -> Plain {
    Plain::Map(
        entries
            .iter()
            .map(|(key, value)| (expose_or_represent(key), expose_or_represent(value)))
            .collect(),
    )
}

fn scalar_from_plain(plain: Plain) -> Scalar {
    match plain {
        Plain::Null => Scalar::Null,
        Plain::Bool(b) => Scalar::Bool(b),
        Plain::String(s) => Scalar::String(s),
        Plain::Number(d) => Scalar::Decimal(d),
        Plain::Span(s) => Scalar::Span(s),
        Plain::Timestamp(t) => Scalar::Timestamp(t),
        Plain::TimestampTz(t) => Scalar::TimestampTz(t),
        composite @ (Plain::Seq(_) | Plain::Object(_) | Plain::Map(_)) => {
            tracing::debug!(
                kind = %composite.kind(),
                "composite plain data recaptured as an opaque scalar"
            );
            Scalar::other(composite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_value::ScalarKind;

    #[test]
    fn test_non_finite_floats_fall_back_to_text() {
        assert_eq!(
            represent(&Value::scalar(f64::NAN)),
            Operand::Plain(Plain::String("NaN".to_owned()))
        );
        assert_eq!(
            represent(&Value::scalar(f64::INFINITY)),
            Operand::Plain(Plain::String("inf".to_owned()))
        );
    }

    #[test]
    fn test_decimal_passes_through_untouched() {
        let d = Decimal::new(12345, 2);
        assert_eq!(
            represent(&Value::scalar(d)),
            Operand::Plain(Plain::Number(d))
        );
    }

    #[test]
    fn test_null_scalar_is_still_a_defect_at_the_strict_boundary() {
        let result = expose(&Operand::Model(Value::Scalar(Scalar::Null)));
        assert_eq!(
            result,
            Err(RepresentationError::unrepresented_scalar(ScalarKind::Null))
        );
    }

    #[test]
    fn test_recaptured_composite_renders_like_the_plain_data() {
        let composite = Plain::Seq(vec![Plain::from(1), Plain::from(2)]);
        let Value::Scalar(scalar) = recapture(Operand::Plain(composite)) else {
            panic!("composite plain data must recapture as a scalar");
        };
        assert_eq!(scalar.kind(), ScalarKind::Other);
        assert_eq!(scalar.to_string(), "[1, 2]");
    }
}
