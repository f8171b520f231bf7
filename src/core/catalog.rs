//! Merge candidate entries into one deduplicated catalog.
//!
//! Entries are keyed by `(context, msgid)`, where an absent context is the
//! empty string. Contexts and entries keep first-seen order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::CatalogOptions;
use crate::core::extract::CandidateEntry;

pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Headers every catalog starts with, before configured overrides.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("content-type", "text/plain; charset=UTF-8"),
    ("plural-forms", "nplurals=2; plural=(n!=1);"),
    ("language", "en_US"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogComments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub msgid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msgctxt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msgid_plural: Option<String>,
    /// One empty slot, or two once a plural form has been seen.
    pub msgstr: Vec<String>,
    pub comments: CatalogComments,
}

impl CatalogEntry {
    fn new(msgid: &str, msgctxt: Option<&str>) -> Self {
        Self {
            msgid: msgid.to_string(),
            msgctxt: msgctxt.map(str::to_string),
            msgid_plural: None,
            msgstr: vec![String::new()],
            comments: CatalogComments::default(),
        }
    }

    pub fn is_plural(&self) -> bool {
        self.msgstr.len() == 2
    }

    fn absorb(&mut self, candidate: &CandidateEntry) {
        let plural = non_empty(candidate.msgid_plural.as_deref());

        if plural.is_some() && !self.is_plural() {
            self.msgstr = vec![String::new(), String::new()];
        }
        if self.msgid_plural.is_none() {
            self.msgid_plural = plural.map(str::to_string);
        }
        if self.comments.extracted.is_none() {
            self.comments.extracted = non_empty(candidate.extracted.as_deref()).map(str::to_string);
        }

        if let Some(reference) = non_empty(candidate.reference.as_deref()) {
            match &mut self.comments.reference {
                Some(existing) if existing.contains(reference) => {}
                Some(existing) => {
                    existing.push('\n');
                    existing.push_str(reference);
                }
                None => self.comments.reference = Some(reference.to_string()),
            }
        }
    }
}

/// Deduplicated translation catalog of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub charset: String,
    pub headers: IndexMap<String, String>,
    /// context -> msgid -> entry; the default context is `""`.
    pub translations: IndexMap<String, IndexMap<String, CatalogEntry>>,
}

impl Catalog {
    pub fn new(options: &CatalogOptions) -> Self {
        let mut headers: IndexMap<String, String> = DEFAULT_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        Self {
            charset: options
                .charset
                .clone()
                .unwrap_or_else(|| DEFAULT_CHARSET.to_string()),
            headers,
            translations: IndexMap::new(),
        }
    }

    /// Fold one candidate into the catalog.
    pub fn merge(&mut self, candidate: &CandidateEntry) {
        if candidate.is_short_form {
            return;
        }

        let msgctxt = non_empty(candidate.msgctxt.as_deref());
        let context = msgctxt.unwrap_or_default();

        self.translations
            .entry(context.to_string())
            .or_default()
            .entry(candidate.msgid.clone())
            .or_insert_with(|| CatalogEntry::new(&candidate.msgid, msgctxt))
            .absorb(candidate);
    }

    pub fn get(&self, context: &str, msgid: &str) -> Option<&CatalogEntry> {
        self.translations.get(context)?.get(msgid)
    }

    /// Entries across all contexts, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.translations.values().flat_map(|entries| entries.values())
    }

    pub fn len(&self) -> usize {
        self.translations.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Merge every candidate of a run, in order, into a fresh catalog.
pub fn merge_entries<'a>(
    options: &CatalogOptions,
    entries: impl IntoIterator<Item = &'a CandidateEntry>,
) -> Catalog {
    let mut catalog = Catalog::new(options);
    for entry in entries {
        catalog.merge(entry);
    }
    catalog
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
