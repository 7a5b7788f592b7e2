use crate::article::source::ArticlePayload;
use crate::foundation::core::{Language, PoliticalOrientation, SectionId};
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::script::model::{Script, SectionText};

/// Payload fields probed for the article headline.
const TITLE_FIELDS: &[&str] = &["title", "headline"];
/// Payload fields probed for the article body, in preference order.
const BODY_FIELDS: &[&str] = &["summary", "description", "content", "body"];

/// Produces the per-section narrative for an article.
///
/// Implementations must return exactly `section_count` sections keyed
/// `"01"..="NN"`, each with non-empty subtitle and content suitable for
/// direct rendering.
pub trait ScriptGenerator {
    fn generate(
        &mut self,
        article: &ArticlePayload,
        language: Language,
        orientation: PoliticalOrientation,
        section_count: u8,
    ) -> InfographicResult<Script>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Deterministic offline generator that lifts section text straight from
/// well-known payload fields. Stands in for the production model-backed
/// generator; `language` and `orientation` are accepted but do not change
/// the extracted text.
pub struct HeadlineScriptGenerator;

impl ScriptGenerator for HeadlineScriptGenerator {
    fn generate(
        &mut self,
        article: &ArticlePayload,
        _language: Language,
        _orientation: PoliticalOrientation,
        section_count: u8,
    ) -> InfographicResult<Script> {
        if section_count == 0 {
            return Err(InfographicError::generation(
                "section_count must be >= 1",
            ));
        }

        let title = article.first_str(TITLE_FIELDS).ok_or_else(|| {
            InfographicError::generation("article payload has no title or headline field")
        })?;
        let body = article.first_str(BODY_FIELDS).unwrap_or(title);

        let chunks = split_into_chunks(body, usize::from(section_count));
        let mut script = Script::default();
        for (idx, chunk) in chunks.iter().enumerate() {
            let id = SectionId::new(idx as u8 + 1)?;
            let subtitle = if idx == 0 {
                title.to_string()
            } else {
                leading_words(chunk, 6)
            };
            script.insert(
                id,
                SectionText {
                    subtitle,
                    content: chunk.clone(),
                },
            );
        }
        Ok(script)
    }
}

/// Split `text` into `n` contiguous word chunks. Chunks never come back
/// empty: when the text is shorter than `n` words, every chunk repeats the
/// full text.
fn split_into_chunks(text: &str, n: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < n {
        return vec![text.trim().to_string(); n];
    }
    let per = words.len().div_ceil(n);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let start = i * per;
        let end = ((i + 1) * per).min(words.len());
        if start >= words.len() {
            out.push(text.trim().to_string());
        } else {
            out.push(words[start..end].join(" "));
        }
    }
    out
}

fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/script/generate.rs"]
mod tests;
