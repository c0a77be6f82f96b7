//! Evaluator-side value representation.
//!
//! Everything an executing filter expression holds is an [`Operand`]:
//! either [`Plain`] data already narrowed to the canonical form operators
//! understand, or a still-structured model value. The
//! [`representation`] module owns the three conversions between the two
//! worlds.

pub mod operand;
pub mod plain;
pub mod representation;

pub use operand::Operand;
pub use plain::{Plain, PlainKind};
pub use representation::{TYPE_TAG_KEY, expose, expose_or_represent, recapture, represent};
