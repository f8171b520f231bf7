/// One occurrence of a translatable string, before merging.
///
/// Built by [`EntryBuilder`](crate::core::extract::EntryBuilder) and consumed
/// once by [`merge_entries`](crate::core::catalog::merge_entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateEntry {
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub msgctxt: Option<String>,
    /// Translator-facing comment.
    pub extracted: Option<String>,
    /// Marks a placeholder reference to a string defined elsewhere.
    pub is_short_form: bool,
    pub reference: Option<String>,
}

impl CandidateEntry {
    pub fn new(msgid: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            ..Default::default()
        }
    }

    pub fn with_plural(mut self, msgid_plural: impl Into<String>) -> Self {
        self.msgid_plural = Some(msgid_plural.into());
        self
    }

    pub fn with_context(mut self, msgctxt: impl Into<String>) -> Self {
        self.msgctxt = Some(msgctxt.into());
        self
    }

    pub fn with_extracted(mut self, extracted: impl Into<String>) -> Self {
        self.extracted = Some(extracted.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
