//! Vitae Domain Layer
//!
//! This crate contains the data model shared by every other Vitae crate: the
//! deserialized curriculum document, person identifiers, the records the
//! extraction engine produces, and the trait interfaces for the external
//! collaborators that fetch, decompress and parse a curriculum.
//!
//! ## Key Concepts
//!
//! - **Document**: the deserialized XML tree of one person's curriculum
//! - **Node**: any mapping inside a Document, with attributes under `@attributes`
//! - **Ambiguous collection**: a repeated element shows up as a single Node when
//!   it occurs once and as an ordered sequence when it occurs more than once
//! - **Records**: awards and publications derived from a Document
//!
//! ## Architecture
//!
//! - No I/O and no infrastructure dependencies
//! - Trait definitions for all external interactions
//! - Infrastructure implementations live in `vitae-codec` and `vitae-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod person;
pub mod records;
pub mod traits;

// Re-exports for convenience
pub use document::{Document, ATTRIBUTES_KEY, TEXT_KEY};
pub use person::{PersonId, ResearcherId};
pub use records::{AwardRecord, PublicationRecord};
