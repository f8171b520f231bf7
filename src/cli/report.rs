//! Report formatting and printing utilities.
//!
//! Extraction failures are displayed in cargo-style format. Kept separate
//! from core logic so the extractor can be used as a library.

use std::fmt;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::ExtractionReport;
use crate::issues::ExtractionFailure;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print an extraction failure to stderr.
pub fn print_failure(failure: &ExtractionFailure) {
    print_failure_to(failure, &mut io::stderr().lock());
}

/// Print an extraction failure to a custom writer.
pub fn print_failure_to<W: Write>(failure: &ExtractionFailure, writer: &mut W) {
    let ctx = &failure.context;
    let line = ctx.line();
    let col = ctx.col();
    let width = line.to_string().len();

    let _ = writeln!(writer, "{}: {}", "error".bold().red(), failure.message());
    let _ = writeln!(
        writer,
        "{:>width$}{} {}:{}:{}",
        "",
        "-->".blue(),
        ctx.file_path(),
        line,
        col,
        width = width
    );
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        line.to_string().blue(),
        "|".blue(),
        ctx.source_line
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = ctx.source_line.chars().take(col.saturating_sub(1)).collect();
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = width,
        padding = UnicodeWidthStr::width(prefix.as_str())
    );

    let _ = writeln!(
        writer,
        "\n{} {}",
        FAILURE_MARK.red(),
        "Extraction failed, no catalog was written".red()
    );
}

/// Print the success line after a catalog was produced.
pub fn print_success(report: &ExtractionReport, destination: &str) {
    print_success_to(report, destination, &mut io::stdout().lock());
}

/// Print the success line to a custom writer.
pub fn print_success_to<W: Write>(report: &ExtractionReport, destination: &str, writer: &mut W) {
    let strings = report.catalog.len();
    let files = report.files_scanned;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} source {} into {}",
            strings,
            if strings == 1 { "string" } else { "strings" },
            files,
            if files == 1 { "file" } else { "files" },
            destination
        )
        .green()
    );
}

/// Print a `warning:` line to stderr.
pub fn print_warning(message: fmt::Arguments<'_>) {
    print_warning_to(message, &mut io::stderr().lock());
}

/// Print a `warning:` line to a custom writer.
pub fn print_warning_to<W: Write>(message: fmt::Arguments<'_>, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        print_warning_to(
            format_args!(
                "{} file(s) could not be parsed (use {} for details)",
                count,
                "-v".cyan()
            ),
            writer,
        );
    }
}

/// Print a warning for each header left out of the PO file.
pub fn print_skipped_headers(headers: &[String]) {
    for header in headers {
        print_warning(format_args!(
            "header '{}' is not a PO header field and was skipped",
            header
        ));
    }
}

// ============================================================
// Tests
// ============================================================
