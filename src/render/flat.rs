use crate::foundation::core::{Rgb8, SectionId, WeightedColor};
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::render::components::{ComponentRenderer, RenderedBlock, TermIllustration};
use crate::script::model::Script;

/// Side length of the square term illustration.
const ILLUSTRATION_SIZE: u32 = 640;
/// Height of the graph strip the refine pass overlays on the illustration.
const GRAPH_STRIP_HEIGHT: u32 = 160;
/// Bars drawn in the graph strip.
const GRAPH_BARS: u32 = 8;
/// Minimum quote-panel height before content lines are added.
const QUOTE_BASE_HEIGHT: u32 = 200;
/// Minimum text-panel height before content lines are added.
const TEXT_BASE_HEIGHT: u32 = 140;
/// Vertical allowance per wrapped line of content.
const LINE_HEIGHT: u32 = 28;
/// Assumed characters per wrapped line.
const WRAP_COLS: usize = 72;

/// Base tones the term illustration picks from, keyed off the lead subtitle.
const BASE_TONES: [Rgb8; 4] = [
    Rgb8::new(31, 68, 110),
    Rgb8::new(114, 48, 54),
    Rgb8::new(38, 92, 66),
    Rgb8::new(96, 74, 34),
];

#[derive(Clone, Copy, Debug)]
/// Deterministic offline renderer producing flat color panels.
///
/// Stands in for the production diagram/typography renderer: every block has
/// the right dimensions, carries enough distinct colors for palette
/// extraction, and is fully reproducible, but no text is rasterized.
pub struct FlatBlockRenderer {
    /// Width of quote and text panels.
    pub block_width: u32,
}

impl Default for FlatBlockRenderer {
    fn default() -> Self {
        Self { block_width: 960 }
    }
}

fn shade(c: Rgb8, delta: i16) -> Rgb8 {
    let adj = |v: u8| (i16::from(v) + delta).clamp(0, 255) as u8;
    Rgb8::new(adj(c.r), adj(c.g), adj(c.b))
}

fn base_tone(seed: &str) -> Rgb8 {
    let sum: u32 = seed.bytes().map(u32::from).sum();
    BASE_TONES[sum as usize % BASE_TONES.len()]
}

fn wrapped_lines(text: &str) -> u32 {
    text.len().div_ceil(WRAP_COLS).max(1) as u32
}

impl FlatBlockRenderer {
    fn render_base_illustration(&self, script: &Script) -> InfographicResult<TermIllustration> {
        let lead = script.section(SectionId::new(1)?)?;
        let base = base_tone(&lead.subtitle);
        let light = shade(base, 56);
        let dark = shade(base, -64);

        let mut image =
            image::RgbaImage::from_pixel(ILLUSTRATION_SIZE, ILLUSTRATION_SIZE, base.to_rgba());
        for (x, y, px) in image.enumerate_pixels_mut() {
            if x >= ILLUSTRATION_SIZE * 2 / 3 {
                *px = light.to_rgba();
            }
            let edge = x < 8 || y < 8 || x >= ILLUSTRATION_SIZE - 8 || y >= ILLUSTRATION_SIZE - 8;
            if edge {
                *px = dark.to_rgba();
            }
        }
        Ok(TermIllustration {
            block: RenderedBlock::new(image),
        })
    }

    fn overlay_graph(&self, prior: TermIllustration) -> TermIllustration {
        let mut image = prior.block.into_image();
        let (w, h) = image.dimensions();
        let strip_top = h.saturating_sub(GRAPH_STRIP_HEIGHT);
        let backdrop = Rgb8::new(236, 233, 226);
        let ink = Rgb8::new(28, 28, 32);

        for (x, y, px) in image.enumerate_pixels_mut() {
            if y < strip_top {
                continue;
            }
            let bar = (x * GRAPH_BARS / w.max(1)).min(GRAPH_BARS - 1);
            let bar_height = GRAPH_STRIP_HEIGHT * (bar % 4 + 2) / 6;
            let in_bar = y >= h - bar_height && x % (w / GRAPH_BARS).max(1) >= 6;
            *px = if in_bar {
                ink.to_rgba()
            } else {
                backdrop.to_rgba()
            };
        }
        TermIllustration {
            block: RenderedBlock::new(image),
        }
    }
}

impl ComponentRenderer for FlatBlockRenderer {
    fn render_term_block(
        &mut self,
        script: &Script,
        refine: bool,
        prior: Option<TermIllustration>,
    ) -> InfographicResult<TermIllustration> {
        if !refine {
            return self.render_base_illustration(script);
        }
        let prior = prior.ok_or_else(|| {
            InfographicError::render("refine pass requires the prior term illustration")
        })?;
        Ok(self.overlay_graph(prior))
    }

    fn render_quote_block(
        &mut self,
        script: &Script,
        prominent: &[WeightedColor],
        clusters: &[Rgb8],
    ) -> InfographicResult<RenderedBlock> {
        let dominant = prominent.first().map(|w| w.color).ok_or_else(|| {
            InfographicError::render("quote block needs a non-empty prominent ranking")
        })?;
        let backdrop = clusters.first().copied().unwrap_or(dominant);

        // longest section body stands in for the pulled quote
        let quote = script
            .iter()
            .map(|(_, s)| s.content.as_str())
            .max_by_key(|c| c.len())
            .ok_or_else(|| InfographicError::render("script has no sections to quote"))?;

        let height = QUOTE_BASE_HEIGHT + wrapped_lines(quote) * LINE_HEIGHT;
        let mut block = RenderedBlock::from_fill(self.block_width, height, backdrop)?;
        let image = block.image_mut();
        for (x, y, px) in image.enumerate_pixels_mut() {
            if x < 24 || y < 12 || y >= height - 12 {
                *px = dominant.to_rgba();
            }
        }
        Ok(block)
    }

    fn render_text_block(
        &mut self,
        primary: Rgb8,
        accent: Rgb8,
        section: SectionId,
        subtitle: &str,
        content: &str,
    ) -> InfographicResult<RenderedBlock> {
        let height = TEXT_BASE_HEIGHT + wrapped_lines(content) * LINE_HEIGHT;
        let mut block = RenderedBlock::from_fill(self.block_width, height, accent)?;

        let header_h = 64u32;
        let underline_w = (subtitle.chars().count() as u32 * 9).min(self.block_width);
        let image = block.image_mut();
        for (x, y, px) in image.enumerate_pixels_mut() {
            if y < header_h || x < 16 {
                *px = primary.to_rgba();
            } else if y < header_h + 6 && x < underline_w {
                *px = shade(primary, -48).to_rgba();
            }
        }

        // section markers: one notch per section index, top-right corner
        let ink = shade(primary, -48);
        for i in 0..u32::from(section.index()) {
            let x0 = self.block_width.saturating_sub((i + 1) * 28);
            for y in 12..36u32 {
                for x in x0..(x0 + 16).min(self.block_width) {
                    image.put_pixel(x, y, ink.to_rgba());
                }
            }
        }
        Ok(block)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/flat.rs"]
mod tests;
