//! Event value model for the sift filter expression toolkit.
//!
//! Captured event properties are trees: scalar leaves under ordered
//! sequences, named structures, and associative maps. This crate defines
//! that model as one closed sum type, [`Value`], shared by the capture
//! side (which builds the trees) and the expression runtime in
//! `sift-expression` (which evaluates filters over them and narrows the
//! leaves into a canonical scalar set).
//!
//! Scalar leaves start out raw: any integer width, either float width, or
//! an arbitrary application type behind [`Scalar::Other`]. Nothing in this
//! crate unifies them; that is the expression runtime's job.

#![warn(clippy::all)]

pub mod convert;
pub mod display;
pub mod kind;
pub mod scalar;
pub mod value;

pub use kind::{ScalarKind, ValueKind};
pub use scalar::{OpaqueScalar, Scalar};
pub use value::{Property, Structure, Value};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{OpaqueScalar, Property, Scalar, ScalarKind, Structure, Value, ValueKind};
}
