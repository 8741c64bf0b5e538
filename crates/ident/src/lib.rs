//! Stable, serializable identifiers for hierarchical test suites.
//!
//! A [`UniqueId`] is an ordered path of `(kind, value)` [`Segment`]s from the
//! owning engine down to a single container or case. Identifiers are
//! persistent: [`UniqueId::append`] returns a longer identifier and never
//! mutates the receiver. The text form round-trips exactly through
//! [`UniqueId::parse`]; malformed input is rejected with
//! [`MalformedIdError`] instead of being truncated.
//!
//! This crate only deals in segment structure. Giving a parsed segment a
//! meaning (which declared type or member it names) is the resolver's job,
//! not the identifier's.

mod parse;
mod segment;
mod unique_id;

pub use parse::MalformedIdError;
pub use segment::Segment;
pub use unique_id::{ENGINE_SEGMENT_KIND, UniqueId};
