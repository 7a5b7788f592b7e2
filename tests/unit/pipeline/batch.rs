use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::article::source::{ArticlePayload, StoredArticle};
use crate::foundation::error::InfographicError;
use crate::pipeline::orchestrator::PipelineConfig;
use crate::render::flat::FlatBlockRenderer;
use crate::script::model::Script;

struct FixedSource(InfographicResult<Vec<StoredArticle>>);

impl ArticleSource for FixedSource {
    fn recent_unique_articles(
        &mut self,
        _days: u32,
        _category: ArticleCategory,
    ) -> InfographicResult<Vec<StoredArticle>> {
        match &self.0 {
            Ok(articles) => Ok(articles.clone()),
            Err(_) => Err(InfographicError::generation("source unavailable")),
        }
    }
}

/// Generator that counts invocations and always fails.
struct CountingGenerator {
    calls: Rc<Cell<u32>>,
}

impl crate::script::generate::ScriptGenerator for CountingGenerator {
    fn generate(
        &mut self,
        _article: &ArticlePayload,
        _language: Language,
        _orientation: PoliticalOrientation,
        _section_count: u8,
    ) -> InfographicResult<Script> {
        self.calls.set(self.calls.get() + 1);
        Err(InfographicError::generation("model offline"))
    }
}

fn pipeline_with_counter(
    calls: Rc<Cell<u32>>,
) -> InfographicPipeline<CountingGenerator, crate::palette::extract::FrequencyPaletteService, FlatBlockRenderer>
{
    InfographicPipeline::new(
        PipelineConfig::default(),
        CountingGenerator { calls },
        crate::palette::extract::FrequencyPaletteService,
        FlatBlockRenderer::default(),
    )
    .unwrap()
}

#[test]
fn empty_source_reports_failure_without_generating() {
    let calls = Rc::new(Cell::new(0));
    let mut pipeline = pipeline_with_counter(calls.clone());
    let mut source = FixedSource(Ok(vec![]));

    assert!(!run_batch(&mut source, &mut pipeline));
    assert_eq!(calls.get(), 0);
}

#[test]
fn source_error_is_swallowed() {
    let calls = Rc::new(Cell::new(0));
    let mut pipeline = pipeline_with_counter(calls.clone());
    let mut source = FixedSource(Err(InfographicError::generation("down")));

    assert!(!run_batch(&mut source, &mut pipeline));
    assert_eq!(calls.get(), 0);
}

#[test]
fn generator_error_is_swallowed_but_generator_ran() {
    let calls = Rc::new(Cell::new(0));
    let mut pipeline = pipeline_with_counter(calls.clone());
    let article = ArticlePayload::from_value(serde_json::json!({"title": "t"})).unwrap();
    let mut source = FixedSource(Ok(vec![StoredArticle {
        title: "t".to_string(),
        category: ArticleCategory::General,
        published_unix: 0,
        article,
    }]));

    assert!(!run_batch(&mut source, &mut pipeline));
    assert_eq!(calls.get(), 1);
}
