use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::article::source::ArticlePayload;
use crate::assemble::canvas::{AssembleOpts, DEFAULT_SPACING, assemble_infographic};
use crate::foundation::core::{Language, PoliticalOrientation, Reporter, SectionId};
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::palette::extract::{PROMINENT_COLOR_COUNT, PaletteService};
use crate::palette::model::Palette;
use crate::render::components::{ComponentRenderer, RenderedBlock, TermIllustration};
use crate::script::generate::ScriptGenerator;
use crate::script::model::Script;

/// Sections composed by the canvas assembler. The stack layout is fixed at
/// two; [`InfographicPipeline::run_with_sections`] rejects other counts.
pub const SECTION_COUNT: u8 = 2;

/// Default canvas width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 1080;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Pipeline configuration, passed in at construction.
///
/// Every run reads paths and layout constants from here, so multiple
/// pipeline instances with separate configurations can coexist without
/// sharing any implicit global state.
pub struct PipelineConfig {
    /// Final canvas width in pixels.
    pub image_width: u32,
    /// Destination of the composed infographic PNG.
    pub output_path: PathBuf,
    /// Destinations of the two rendered section blocks.
    pub section_paths: [PathBuf; 2],
    /// Vertical gap inserted before each section.
    pub spacing: u32,
    /// Center sections horizontally instead of the compatible left-aligned
    /// paste (see [`AssembleOpts::center_sections`]).
    #[serde(default)]
    pub center_sections: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            output_path: PathBuf::from("infographics.png"),
            section_paths: [
                PathBuf::from("section_01.png"),
                PathBuf::from("section_02.png"),
            ],
            spacing: DEFAULT_SPACING,
            center_sections: false,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> InfographicResult<()> {
        if self.image_width == 0 {
            return Err(InfographicError::validation("image_width must be > 0"));
        }
        if self.spacing == 0 {
            return Err(InfographicError::validation("spacing must be > 0"));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> InfographicResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read pipeline config '{}'", path.display()))?;
        let config: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse pipeline config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug)]
/// Every sub-component of one run, plus the palette extracted from the term
/// illustration. Embedders that persist the quote block or illustration
/// read them from here.
pub struct PreparedComponents {
    pub term: TermIllustration,
    pub quote_block: RenderedBlock,
    pub text_blocks: [RenderedBlock; 2],
    pub palette: Palette,
}

/// Drives one article through script generation, component preparation and
/// canvas assembly.
///
/// The pipeline is strictly synchronous; every step blocks until the
/// previous one finished, and the step order is a hard dependency (the
/// palette is extracted from the rendered illustration's own pixels).
/// Errors from any collaborator propagate to the caller unmodified; the
/// batch driver in [`crate::pipeline::batch`] is the only place that
/// swallows them.
pub struct InfographicPipeline<G, P, R> {
    config: PipelineConfig,
    generator: G,
    palettes: P,
    renderer: R,
}

impl<G, P, R> InfographicPipeline<G, P, R>
where
    G: ScriptGenerator,
    P: PaletteService,
    R: ComponentRenderer,
{
    pub fn new(
        config: PipelineConfig,
        generator: G,
        palettes: P,
        renderer: R,
    ) -> InfographicResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generator,
            palettes,
            renderer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// One-shot library entry point with the default section count.
    pub fn run(
        &mut self,
        article: &ArticlePayload,
        language: Language,
        orientation: PoliticalOrientation,
    ) -> InfographicResult<()> {
        self.run_with_sections(article, language, orientation, SECTION_COUNT)
    }

    /// Generate the script, prepare all components, persist the section
    /// blocks, and assemble the final canvas at the configured path.
    #[tracing::instrument(skip(self, article))]
    pub fn run_with_sections(
        &mut self,
        article: &ArticlePayload,
        language: Language,
        orientation: PoliticalOrientation,
        section_count: u8,
    ) -> InfographicResult<()> {
        if section_count != SECTION_COUNT {
            return Err(InfographicError::validation(format!(
                "stack assembly supports exactly {SECTION_COUNT} sections, got {section_count}"
            )));
        }

        let script = self
            .generator
            .generate(article, language, orientation, section_count)?;
        let prepared = self.prepare_components(&script)?;

        for (block, path) in prepared.text_blocks.iter().zip(&self.config.section_paths) {
            block.save_png(path)?;
        }

        let opts = AssembleOpts {
            canvas_width: self.config.image_width,
            background: prepared.palette.dominant()?,
            spacing: self.config.spacing,
            center_sections: self.config.center_sections,
        };
        assemble_infographic(
            &prepared.text_blocks[0],
            &prepared.text_blocks[1],
            &opts,
            &self.config.output_path,
        )
    }

    /// Render every sub-component in dependency order.
    ///
    /// The order is a hard constraint, not a style choice: the text blocks
    /// are themed from the rendered illustration's own colors, so the
    /// dominant-color extraction must sit between the base term render and
    /// the first text render. The refine pass receives the base handle back
    /// so the graph overlay extends the same diagram.
    pub fn prepare_components(&mut self, script: &Script) -> InfographicResult<PreparedComponents> {
        let section_01 = SectionId::new(1)?;
        let section_02 = SectionId::new(2)?;

        let term = self.renderer.render_term_block(script, false, None)?;
        let clusters = self.palettes.clusters();
        let prominent = self
            .palettes
            .dominant_colors(&term.block, PROMINENT_COLOR_COUNT)?;
        let palette = Palette {
            prominent,
            clusters,
        };

        let primary = palette.dominant()?;
        let accent = palette.accent()?;

        let text_01 = {
            let text = script.section(section_01)?;
            self.renderer.render_text_block(
                primary,
                accent,
                section_01,
                &text.subtitle,
                &text.content,
            )?
        };

        let term = self.renderer.render_term_block(script, true, Some(term))?;

        let quote_block =
            self.renderer
                .render_quote_block(script, &palette.prominent, &palette.clusters)?;

        let text_02 = {
            let text = script.section(section_02)?;
            self.renderer.render_text_block(
                primary,
                accent,
                section_02,
                &text.subtitle,
                &text.content,
            )?
        };

        Ok(PreparedComponents {
            term,
            quote_block,
            text_blocks: [text_01, text_02],
            palette,
        })
    }

    /// Embedding-caller contract: run the pipeline and echo the assigned
    /// reporters back. The caption slot is returned empty and attachments
    /// are not populated here; callers read the composed image from the
    /// configured output path. `topic` and `length_limit` belong to the
    /// embedding contract and are not consumed by the assembly path.
    pub fn create_infographic(
        &mut self,
        article: &ArticlePayload,
        topic: &str,
        language: Language,
        orientation: PoliticalOrientation,
        reporters: Vec<Reporter>,
        length_limit: usize,
    ) -> InfographicResult<(String, Vec<Reporter>, Vec<PathBuf>)> {
        let _ = (topic, length_limit);
        self.run(article, language, orientation)?;
        Ok((String::new(), reporters, Vec::new()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/orchestrator.rs"]
mod tests;
