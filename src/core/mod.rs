//! Core extraction engine.
//!
//! - `parsers`: swc front-end for JS/JSX/TS/TSX sources
//! - `extract`: literal extraction, entry building and AST collection
//! - `catalog`: merging candidate entries into one catalog
//! - `po`: PO file output
//! - `context`: one extraction run over a source tree

pub mod catalog;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod po;

pub use catalog::{Catalog, CatalogEntry, merge_entries};
pub use context::{ExtractContext, ExtractionReport};
pub use data::{SourceContext, SourceLocation};
pub use extract::{CandidateEntry, ExtractError};
