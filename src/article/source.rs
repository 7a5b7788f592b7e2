use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;

use crate::foundation::core::ArticleCategory;
use crate::foundation::error::{InfographicError, InfographicResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Unstructured article data as produced by the upstream news ingest.
///
/// Payloads are free-form JSON objects; consumers probe for well-known
/// fields instead of relying on a fixed schema.
pub struct ArticlePayload(serde_json::Map<String, serde_json::Value>);

impl ArticlePayload {
    pub fn new(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: serde_json::Value) -> InfographicResult<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            other => Err(InfographicError::validation(format!(
                "article payload must be a JSON object, got {other}"
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// First non-blank string value among `keys`, probed in order.
    pub fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| {
            self.0
                .get(*k)
                .and_then(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
        })
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One article as persisted by the ingest, with query metadata alongside the
/// raw payload.
pub struct StoredArticle {
    pub title: String,
    #[serde(default)]
    pub category: ArticleCategory,
    /// Publication time as seconds since the Unix epoch.
    pub published_unix: u64,
    pub article: ArticlePayload,
}

/// Query surface over persisted articles.
pub trait ArticleSource {
    /// Recently-published articles in `category`, restricted to a `days`
    /// lookback window, deduplicated by title (newest wins), newest first.
    fn recent_unique_articles(
        &mut self,
        days: u32,
        category: ArticleCategory,
    ) -> InfographicResult<Vec<StoredArticle>>;
}

/// Article source backed by a directory of JSON files, one article per file.
///
/// Stands in for the production store so the batch driver can run against
/// local fixtures.
#[derive(Clone, Debug)]
pub struct JsonArticleSource {
    dir: PathBuf,
}

impl JsonArticleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load_all(&self) -> InfographicResult<Vec<StoredArticle>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("read article dir '{}'", self.dir.display()))?;

        let mut out = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("list article dir '{}'", self.dir.display()))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let bytes =
                fs::read(&path).with_context(|| format!("read article '{}'", path.display()))?;
            let stored: StoredArticle = serde_json::from_slice(&bytes)
                .with_context(|| format!("parse article '{}'", path.display()))?;
            out.push(stored);
        }
        Ok(out)
    }
}

impl ArticleSource for JsonArticleSource {
    fn recent_unique_articles(
        &mut self,
        days: u32,
        category: ArticleCategory,
    ) -> InfographicResult<Vec<StoredArticle>> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let cutoff = now.saturating_sub(u64::from(days) * 86_400);

        let mut articles = self.load_all()?;
        articles.retain(|a| a.category == category && a.published_unix >= cutoff);

        // newest entry wins per title
        articles.sort_by(|a, b| {
            a.title
                .cmp(&b.title)
                .then_with(|| b.published_unix.cmp(&a.published_unix))
        });
        articles.dedup_by(|next, kept| next.title == kept.title);

        articles.sort_by(|a, b| {
            b.published_unix
                .cmp(&a.published_unix)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(articles)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/article/source.rs"]
mod tests;
