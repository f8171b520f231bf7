//! gettext-extract - translatable string extraction for JavaScript projects
//!
//! Scans JS/JSX/TS sources for gettext-style calls (`_`, `_n`, `_c`, `_nc`)
//! and `<LocalizedString>` marker elements, and merges every occurrence into
//! a single deduplicated PO catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and resolution
//! - `core`: Extraction engine (parsing, entry building, catalog merging)
//! - `issues`: Extraction failures and skipped files

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
