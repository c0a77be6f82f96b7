//! Filter expression runtime for sift: the value-representation boundary.
//!
//! Compiled filter expressions evaluate against captured event property
//! values. Those values arrive in the rich `sift-value` model — scalars of
//! any native width, sequences, structures, maps — while comparison,
//! arithmetic, and pattern operators want one narrow, uniform shape. This
//! crate is the translation layer between the two:
//!
//! - [`represent`](runtime::represent) canonicalizes a scalar leaf into
//!   the six-type canonical set (strings, booleans, decimals, spans, and
//!   both timestamp flavors) as a property is read into evaluation;
//! - [`expose`](runtime::expose) and its permissive recursive helper
//!   [`expose_or_represent`](runtime::expose_or_represent) hand an
//!   evaluation result back out as plain nested data;
//! - [`recapture`](runtime::recapture) re-admits plain data produced by
//!   user-level functions into the value model.
//!
//! All operations are pure and stateless; each evaluation round owns its
//! value graph, so everything here is freely usable from concurrent
//! evaluations.

#![warn(clippy::all)]

pub mod error;
pub mod runtime;

pub use error::{RepresentationError, RepresentationResult};
pub use runtime::{
    Operand, Plain, PlainKind, TYPE_TAG_KEY, expose, expose_or_represent, recapture, represent,
};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Operand, Plain, PlainKind, RepresentationError, RepresentationResult, TYPE_TAG_KEY,
        expose, expose_or_represent, recapture, represent,
    };
    pub use sift_value::prelude::*;
}
