//! Problems reported while extracting a catalog.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use thiserror::Error;

use crate::core::data::SourceContext;
use crate::core::extract::ExtractError;

/// An occurrence that could not be extracted, with its position in source.
///
/// Fatal for the run: no catalog is written when one is found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} ({}:{}:{})", .context.location.file_path, .context.location.line, .context.location.col)]
pub struct ExtractionFailure {
    pub context: SourceContext,
    pub error: ExtractError,
}

impl ExtractionFailure {
    pub fn new(context: SourceContext, error: ExtractError) -> Self {
        Self { context, error }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// A source file that could not be read or parsed; skipped with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}
