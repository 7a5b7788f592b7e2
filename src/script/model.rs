use std::collections::BTreeMap;

use crate::foundation::core::SectionId;
use crate::foundation::error::{InfographicError, InfographicResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Subtitle/content pair for one infographic section.
pub struct SectionText {
    /// Short heading rendered above the section body.
    pub subtitle: String,
    /// Narrative body text for the section.
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Per-section narrative produced once per run by the script generator.
///
/// A script is a pure data model keyed by zero-padded section ids
/// (`"01"`, `"02"`, ...). It is immutable after generation and consumed by
/// every downstream component.
pub struct Script {
    sections: BTreeMap<String, SectionText>,
}

impl Script {
    pub fn from_sections(sections: impl IntoIterator<Item = (SectionId, SectionText)>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|(id, text)| (id.key(), text))
                .collect(),
        }
    }

    pub fn insert(&mut self, id: SectionId, text: SectionText) {
        self.sections.insert(id.key(), text);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Point-of-use section lookup.
    ///
    /// The pipeline performs no up-front key validation; a script missing an
    /// expected section fails here, when a component first asks for it.
    pub fn section(&self, id: SectionId) -> InfographicResult<&SectionText> {
        self.sections.get(&id.key()).ok_or_else(|| {
            InfographicError::generation(format!("script has no section \"{id}\""))
        })
    }

    /// Sections in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionText)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
