//! Descriptions of a finished compilation.
//!
//! These are the values the host compiler hands over when it signals that a
//! build cycle completed, plus the subset of its options this crate reads.

mod types;

pub use types::*;
