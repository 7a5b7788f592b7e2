use std::collections::HashMap;

use crate::foundation::core::{Rgb8, WeightedColor};
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::render::components::RenderedBlock;

/// Ranking depth requested from the palette service for each run.
pub const PROMINENT_COLOR_COUNT: usize = 10;

/// Curated cluster colors used to accent text styling. Fixed and
/// independent of any rendered image.
pub const CURATED_CLUSTERS: [Rgb8; 5] = [
    Rgb8::new(244, 241, 234),
    Rgb8::new(226, 220, 206),
    Rgb8::new(64, 61, 57),
    Rgb8::new(197, 90, 60),
    Rgb8::new(87, 111, 114),
];

/// Extracts color themes from rendered blocks.
pub trait PaletteService {
    /// Ranked dominant colors of `block`, descending weight, at most `k`
    /// entries.
    fn dominant_colors(
        &self,
        block: &RenderedBlock,
        k: usize,
    ) -> InfographicResult<Vec<WeightedColor>>;

    /// The small curated cluster set.
    fn clusters(&self) -> Vec<Rgb8>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Offline palette service ranking colors by quantized pixel population.
///
/// Channels are bucketed to 4 bits before counting so anti-aliased
/// neighbors collapse into one bucket; each bucket reports its midpoint
/// color. Ties break on channel order to keep the ranking deterministic.
pub struct FrequencyPaletteService;

impl PaletteService for FrequencyPaletteService {
    fn dominant_colors(
        &self,
        block: &RenderedBlock,
        k: usize,
    ) -> InfographicResult<Vec<WeightedColor>> {
        if k == 0 {
            return Err(InfographicError::palette("ranking depth k must be >= 1"));
        }

        let mut counts: HashMap<(u8, u8, u8), u32> = HashMap::new();
        for px in block.image().pixels() {
            let [r, g, b, a] = px.0;
            if a == 0 {
                continue;
            }
            let bucket = (quantize(r), quantize(g), quantize(b));
            *counts.entry(bucket).or_insert(0) += 1;
        }
        if counts.is_empty() {
            return Err(InfographicError::palette("block has no opaque pixels"));
        }

        let mut ranked: Vec<((u8, u8, u8), u32)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);

        Ok(ranked
            .into_iter()
            .map(|((r, g, b), weight)| WeightedColor {
                color: Rgb8::new(r, g, b),
                weight,
            })
            .collect())
    }

    fn clusters(&self) -> Vec<Rgb8> {
        CURATED_CLUSTERS.to_vec()
    }
}

/// Bucket a channel to 4 bits and report the bucket midpoint.
fn quantize(v: u8) -> u8 {
    (v & 0xF0) | 0x08
}

#[cfg(test)]
#[path = "../../tests/unit/palette/extract.rs"]
mod tests;
