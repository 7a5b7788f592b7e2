use crate::foundation::core::{Rgb8, WeightedColor};
use crate::foundation::error::{InfographicError, InfographicResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Color theme of one pipeline run.
///
/// `prominent` is the dominance ranking extracted from the rendered term
/// illustration (descending weight); `clusters` is the small curated set
/// that is independent of any image. The palette is computed exactly once
/// per run, after the illustration exists.
pub struct Palette {
    pub prominent: Vec<WeightedColor>,
    pub clusters: Vec<Rgb8>,
}

impl Palette {
    /// The single most dominant illustration color; canvas background and
    /// primary text theming both come from here.
    pub fn dominant(&self) -> InfographicResult<Rgb8> {
        self.prominent
            .first()
            .map(|w| w.color)
            .ok_or_else(|| InfographicError::palette("prominent color ranking is empty"))
    }

    /// The second curated cluster color, used as the text-block accent.
    pub fn accent(&self) -> InfographicResult<Rgb8> {
        self.clusters.get(1).copied().ok_or_else(|| {
            InfographicError::palette("curated cluster set has fewer than two colors")
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/model.rs"]
mod tests;
