//! Entry extraction: turning occurrences in a syntax tree into candidate entries.
//!
//! - `literal`: compile-time string extraction from argument nodes
//! - `builder`: one candidate entry per call-site or marker element
//! - `reference`: source references with optional base-dir stripping
//! - `collector`: swc visitor feeding occurrences to the builder

pub mod builder;
pub mod collector;
pub mod entry;
pub mod error;
pub mod literal;
pub mod reference;

pub use builder::{ElementAttribute, EntryBuilder};
pub use collector::EntryCollector;
pub use entry::CandidateEntry;
pub use error::ExtractError;
pub use literal::{Argument, LiteralNode, LiteralShape, extract_argument, extract_literal};
pub use reference::resolve_reference;
