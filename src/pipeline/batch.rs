use crate::article::source::ArticleSource;
use crate::foundation::core::{ArticleCategory, Language, PoliticalOrientation};
use crate::foundation::error::InfographicResult;
use crate::palette::extract::PaletteService;
use crate::pipeline::orchestrator::InfographicPipeline;
use crate::render::components::ComponentRenderer;
use crate::script::generate::ScriptGenerator;

/// Lookback window for the batch driver's article query, in days.
pub const BATCH_LOOKBACK_DAYS: u32 = 2;

/// Best-effort batch mode: fetch the most recent unique article and run the
/// full pipeline on it with English/neutral defaults.
///
/// Every failure, including an empty article query, is logged and collapsed
/// into the returned flag. This path never propagates an error; callers who
/// need failures surfaced use [`InfographicPipeline::run`] directly.
pub fn run_batch<S, G, P, R>(
    source: &mut S,
    pipeline: &mut InfographicPipeline<G, P, R>,
) -> bool
where
    S: ArticleSource,
    G: ScriptGenerator,
    P: PaletteService,
    R: ComponentRenderer,
{
    match try_run_batch(source, pipeline) {
        Ok(ran) => ran,
        Err(e) => {
            tracing::error!(error = %e, "infographic batch run failed");
            false
        }
    }
}

fn try_run_batch<S, G, P, R>(
    source: &mut S,
    pipeline: &mut InfographicPipeline<G, P, R>,
) -> InfographicResult<bool>
where
    S: ArticleSource,
    G: ScriptGenerator,
    P: PaletteService,
    R: ComponentRenderer,
{
    let recent = source.recent_unique_articles(BATCH_LOOKBACK_DAYS, ArticleCategory::General)?;
    let Some(stored) = recent.into_iter().next() else {
        tracing::error!("no news articles found in the article source");
        return Ok(false);
    };

    tracing::info!(title = %stored.title, "generating infographic for most recent article");
    pipeline.run(
        &stored.article,
        Language::English,
        PoliticalOrientation::Neutral,
    )?;
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
