//! Candidate entry construction for call-sites and marker elements.

use crate::config::{FunctionRole, FunctionSpec, ResolvedConfig};
use crate::core::extract::{
    Argument, CandidateEntry, ExtractError, LiteralNode, extract_argument, resolve_reference,
};

/// A marker-element attribute as seen by the builder.
///
/// `value` is `None` for bare attributes (`<LocalizedString i18n />`) and for
/// values that are not literal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAttribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> ElementAttribute<'a> {
    pub fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self { name, value }
    }
}

/// Builds at most one [`CandidateEntry`] per occurrence in one source file.
pub struct EntryBuilder<'a> {
    config: &'a ResolvedConfig,
    /// Absolute path of the file, used for references.
    file_path: &'a str,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(config: &'a ResolvedConfig, file_path: &'a str) -> Self {
        Self { config, file_path }
    }

    /// Find the function spec for a callee, trying roles in priority order.
    pub fn match_function(&self, callee: &str) -> Option<&'a FunctionSpec> {
        let config: &'a ResolvedConfig = self.config;
        FunctionRole::PRIORITY.iter().find_map(|role| {
            config
                .functions
                .iter()
                .find(|func| func.role == *role && func.name == callee)
        })
    }

    /// Build an entry from a call such as `_n("One", "Many", count)`.
    ///
    /// Returns `Ok(None)` when the callee is not a configured function, or when
    /// extraction failed for a function marked `ignoreError`.
    pub fn build_call_entry<N: LiteralNode>(
        &self,
        callee: &str,
        arguments: &[Argument<'_, N>],
    ) -> Result<Option<CandidateEntry>, ExtractError> {
        let Some(func) = self.match_function(callee) else {
            return Ok(None);
        };

        match extract_call_entry(func, arguments) {
            Ok(entry) => Ok(Some(self.attach_reference(entry))),
            Err(_) if func.ignore_error => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Build an entry from a marker element such as
    /// `<LocalizedString id="One" idPlural="Many" />`.
    ///
    /// Short-form elements are validated and then discarded.
    pub fn build_element_entry<'n>(
        &self,
        element_name: &str,
        attributes: impl IntoIterator<Item = ElementAttribute<'n>>,
    ) -> Result<Option<CandidateEntry>, ExtractError> {
        let component = &self.config.component;
        if element_name != component.element_name {
            return Ok(None);
        }

        let mut entry = CandidateEntry::default();
        for ElementAttribute { name, value } in attributes {
            let value = value.map(str::to_string);
            if name == component.id_attribute {
                entry.msgid = value.unwrap_or_default();
            } else if name == component.plural_attribute {
                entry.msgid_plural = value;
            } else if name == component.context_attribute {
                entry.msgctxt = value;
            } else if name == component.comment_attribute {
                entry.extracted = value;
            } else if name == component.short_form_attribute {
                entry.is_short_form = true;
            }
        }

        if entry.msgid.is_empty() && !entry.is_short_form {
            return Err(ExtractError::MissingRequiredIdentifier {
                element: component.element_name.clone(),
                id_attribute: component.id_attribute.clone(),
                short_form_attribute: component.short_form_attribute.clone(),
            });
        }

        if entry.is_short_form {
            return Ok(None);
        }

        Ok(Some(self.attach_reference(entry)))
    }

    fn attach_reference(&self, mut entry: CandidateEntry) -> CandidateEntry {
        let reference = &self.config.reference;
        if reference.enabled {
            entry.reference = Some(resolve_reference(
                self.file_path,
                reference.base_dir.as_deref(),
            ));
        }
        entry
    }
}

fn extract_call_entry<N: LiteralNode>(
    func: &FunctionSpec,
    arguments: &[Argument<'_, N>],
) -> Result<CandidateEntry, ExtractError> {
    let msgid = extract_argument(arguments, func.singular_index, &func.name)?;
    let msgid_plural = func
        .plural_index
        .map(|index| extract_argument(arguments, index, &func.name))
        .transpose()?;
    let msgctxt = func
        .context_index
        .map(|index| extract_argument(arguments, index, &func.name))
        .transpose()?;

    Ok(CandidateEntry {
        msgid,
        msgid_plural,
        msgctxt,
        ..Default::default()
    })
}
