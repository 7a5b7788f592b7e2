use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Rgb8, SectionId, WeightedColor};
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::script::model::Script;

#[derive(Clone)]
/// In-memory handle to one rendered visual block.
///
/// Render operations return these handles and the assembler receives them
/// directly; stages never communicate through well-known file paths, so
/// concurrent pipelines with separate configurations cannot race on shared
/// intermediate files.
pub struct RenderedBlock {
    image: image::RgbaImage,
}

impl std::fmt::Debug for RenderedBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedBlock")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl RenderedBlock {
    pub fn new(image: image::RgbaImage) -> Self {
        Self { image }
    }

    /// Solid block of the given color.
    pub fn from_fill(width: u32, height: u32, color: Rgb8) -> InfographicResult<Self> {
        if width == 0 || height == 0 {
            return Err(InfographicError::validation(
                "rendered block dimensions must be > 0",
            ));
        }
        Ok(Self {
            image: image::RgbaImage::from_pixel(width, height, color.to_rgba()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut image::RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> image::RgbaImage {
        self.image
    }

    /// Persist the block as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> InfographicResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    pub fn load_png(path: &Path) -> InfographicResult<Self> {
        let img = image::open(path)
            .with_context(|| format!("read png '{}'", path.display()))?
            .to_rgba8();
        Ok(Self { image: img })
    }
}

#[derive(Clone, Debug)]
/// Handle to the rendered term-explanation illustration.
///
/// The refine pass receives the prior handle back so the graph overlay
/// extends the same base diagram instead of regenerating it.
pub struct TermIllustration {
    pub block: RenderedBlock,
}

/// Renders the visual sub-components of an infographic.
///
/// Implementations are free in how they draw; the pipeline only fixes the
/// call contracts and the dependency order between calls.
pub trait ComponentRenderer {
    /// Term-explanation illustration. `refine = false` renders the base
    /// diagram; `refine = true` extends `prior` with the graph overlay and
    /// requires the handle from the first pass.
    fn render_term_block(
        &mut self,
        script: &Script,
        refine: bool,
        prior: Option<TermIllustration>,
    ) -> InfographicResult<TermIllustration>;

    /// Quote block themed from the full dominant ranking plus the curated
    /// cluster set.
    fn render_quote_block(
        &mut self,
        script: &Script,
        prominent: &[WeightedColor],
        clusters: &[Rgb8],
    ) -> InfographicResult<RenderedBlock>;

    /// Text block for one section, themed with the top illustration color
    /// and an accent cluster color.
    fn render_text_block(
        &mut self,
        primary: Rgb8,
        accent: Rgb8,
        section: SectionId,
        subtitle: &str,
        content: &str,
    ) -> InfographicResult<RenderedBlock>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/components.rs"]
mod tests;
