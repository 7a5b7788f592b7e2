//! Infographics is a content-assembly pipeline that turns a news article
//! into a rendered multi-section infographic image.
//!
//! # Pipeline overview
//!
//! 1. **Script**: a [`ScriptGenerator`] turns the raw article payload into
//!    per-section subtitle/content text ([`Script`]).
//! 2. **Components**: a [`ComponentRenderer`] renders the term-explanation
//!    illustration, quote block and text blocks as in-memory
//!    [`RenderedBlock`] handles, interleaved with palette extraction from
//!    the illustration's own pixels ([`PaletteService`]).
//! 3. **Assembly**: the canvas assembler stacks the two section blocks on a
//!    background filled with the top dominant color and saves the PNG.
//!
//! The key design constraints:
//!
//! - **Strictly synchronous**: every step blocks until the previous one
//!   finished. The ordering is a hard dependency: the palette is read from
//!   the rendered illustration, so the illustration must exist before any
//!   text block is themed.
//! - **Explicit handles**: stages hand each other in-memory image handles
//!   rather than well-known file paths, so concurrent pipelines with
//!   separate [`PipelineConfig`]s do not race on shared intermediates.
//! - **Two error regimes**: library calls propagate typed
//!   [`InfographicError`] values unmodified; the batch driver
//!   ([`run_batch`]) logs every failure and reports a boolean outcome.
//!
//! Production script generation, palette extraction, component rendering
//! and article storage are external collaborators behind traits; the
//! offline implementations in this crate ([`HeadlineScriptGenerator`],
//! [`FrequencyPaletteService`], [`FlatBlockRenderer`],
//! [`JsonArticleSource`]) are deterministic stand-ins that let the batch
//! binary and the integration tests run end to end.
#![forbid(unsafe_code)]

mod article;
mod assemble;
mod foundation;
mod palette;
mod pipeline;
mod render;
mod script;

pub use article::source::{ArticlePayload, ArticleSource, JsonArticleSource, StoredArticle};
pub use assemble::canvas::{
    AssembleOpts, DEFAULT_SPACING, Placement, StackLayout, assemble_infographic, compose_stack,
    solve_stack_layout,
};
pub use foundation::core::{
    ArticleCategory, Language, PoliticalOrientation, Reporter, Rgb8, SectionId, WeightedColor,
};
pub use foundation::error::{InfographicError, InfographicResult};
pub use palette::extract::{
    CURATED_CLUSTERS, FrequencyPaletteService, PROMINENT_COLOR_COUNT, PaletteService,
};
pub use palette::model::Palette;
pub use pipeline::batch::{BATCH_LOOKBACK_DAYS, run_batch};
pub use pipeline::orchestrator::{
    DEFAULT_IMAGE_WIDTH, InfographicPipeline, PipelineConfig, PreparedComponents, SECTION_COUNT,
};
pub use render::components::{ComponentRenderer, RenderedBlock, TermIllustration};
pub use render::flat::FlatBlockRenderer;
pub use script::generate::{HeadlineScriptGenerator, ScriptGenerator};
pub use script::model::{Script, SectionText};
