//! Serialize a merged [`Catalog`] to a GNU gettext PO file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use polib::catalog::Catalog as PoCatalog;
use polib::message::Message;
use polib::metadata::CatalogMetadata;
use polib::po_file;

use crate::core::catalog::{Catalog, CatalogEntry};

/// A compiled catalog plus the header names that had to be dropped.
pub struct PoDocument {
    pub catalog: PoCatalog,
    pub skipped_headers: Vec<String>,
}

/// Replace (or add) the `charset` parameter of a Content-Type value.
fn with_charset(content_type: &str, charset: &str) -> String {
    let mut parts: Vec<String> = content_type
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| !part.to_ascii_lowercase().starts_with("charset="))
        .map(str::to_string)
        .collect();
    parts.push(format!("charset={}", charset));
    parts.join("; ")
}

/// Split a `Plural-Forms` value into `nplurals` and the plural expression.
fn parse_plural_forms(value: &str) -> Result<(usize, String)> {
    let mut nplurals = None;
    let mut expr = None;

    for rule in value.split(';').map(str::trim).filter(|rule| !rule.is_empty()) {
        let Some((key, rule_value)) = rule.split_once('=') else {
            bail!("Invalid Plural-Forms header '{}': cannot parse '{}'", value, rule);
        };
        let rule_value = rule_value.trim();
        match key.trim() {
            "nplurals" => {
                let count: usize = rule_value.parse().with_context(|| {
                    format!("Invalid Plural-Forms header '{}': bad nplurals", value)
                })?;
                nplurals = Some(count);
            }
            "plural" if !rule_value.is_empty() => expr = Some(rule_value.to_string()),
            other => bail!("Invalid Plural-Forms header '{}': unexpected '{}'", value, other),
        }
    }

    match (nplurals, expr) {
        (Some(count), Some(expr)) if count > 0 => Ok((count, expr)),
        _ => bail!(
            "Invalid Plural-Forms header '{}': expected nplurals=N; plural=EXPR;",
            value
        ),
    }
}

/// Store one header on the matching PO field, matched case-insensitively.
///
/// Returns `false` when the name is not a PO header field.
fn set_header(metadata: &mut CatalogMetadata, name: &str, value: &str, charset: &str) -> Result<bool> {
    let value = value.trim();
    let field = match name.trim().to_ascii_lowercase().as_str() {
        "project-id-version" => &mut metadata.project_id_version,
        "pot-creation-date" => &mut metadata.pot_creation_date,
        "po-revision-date" => &mut metadata.po_revision_date,
        "last-translator" => &mut metadata.last_translator,
        "language-team" => &mut metadata.language_team,
        "mime-version" => &mut metadata.mime_version,
        "content-transfer-encoding" => &mut metadata.content_transfer_encoding,
        "language" => &mut metadata.language,
        "content-type" => {
            metadata.content_type = with_charset(value, charset);
            return Ok(true);
        }
        "plural-forms" => {
            let (nplurals, expr) = parse_plural_forms(value)?;
            metadata.plural_rules.nplurals = nplurals;
            metadata.plural_rules.expr = expr;
            return Ok(true);
        }
        _ => return Ok(false),
    };
    *field = value.to_string();
    Ok(true)
}

/// Build the PO header block field by field.
fn build_metadata(catalog: &Catalog) -> Result<(CatalogMetadata, Vec<String>)> {
    let mut metadata = CatalogMetadata::new();
    let mut skipped = Vec::new();

    for (name, value) in &catalog.headers {
        if !set_header(&mut metadata, name, value, &catalog.charset)? {
            skipped.push(name.clone());
        }
    }
    if metadata.content_type.is_empty() {
        metadata.content_type = with_charset("text/plain", &catalog.charset);
    }

    Ok((metadata, skipped))
}

fn to_message(entry: &CatalogEntry) -> Message {
    let mut builder = match &entry.msgid_plural {
        Some(plural) => {
            let mut builder = Message::build_plural();
            builder
                .with_msgid(entry.msgid.clone())
                .with_msgid_plural(plural.clone())
                .with_msgstr_plural(entry.msgstr.clone());
            builder
        }
        None => {
            let mut builder = Message::build_singular();
            builder
                .with_msgid(entry.msgid.clone())
                .with_msgstr(String::new());
            builder
        }
    };

    if let Some(msgctxt) = &entry.msgctxt {
        builder.with_msgctxt(msgctxt.clone());
    }
    if let Some(reference) = &entry.comments.reference {
        builder.with_source(reference.clone());
    }
    if let Some(extracted) = &entry.comments.extracted {
        builder.with_comments(extracted.clone());
    }

    builder.done()
}

/// Convert a merged catalog into a polib catalog.
pub fn build_po_catalog(catalog: &Catalog) -> Result<PoDocument> {
    let (metadata, skipped_headers) = build_metadata(catalog)?;

    let mut po_catalog = PoCatalog::new(metadata);
    for entry in catalog.entries() {
        po_catalog.append_or_update(to_message(entry));
    }

    Ok(PoDocument {
        catalog: po_catalog,
        skipped_headers,
    })
}

/// Write the catalog to `path`, creating its parent directory.
///
/// Returns the names of headers that could not be written.
pub fn write_po_file(catalog: &Catalog, path: &Path) -> Result<Vec<String>> {
    let document = build_po_catalog(catalog)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    po_file::write(&document.catalog, path)
        .with_context(|| format!("Failed to write PO file: {}", path.display()))?;

    Ok(document.skipped_headers)
}
