use crate::foundation::error::{InfographicError, InfographicResult};

/// Straight (non-premultiplied) RGB color used for backgrounds and theming.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA pixel for canvas fills and pastes.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One entry of the dominant-color ranking: a color and its dominance weight
/// (pixel population). Rankings are ordered by descending weight.
pub struct WeightedColor {
    pub color: Rgb8,
    pub weight: u32,
}

/// 1-based section identifier, rendered zero-padded ("01", "02", ...).
///
/// Script keys and section artifacts use the zero-padded form end to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(u8);

impl SectionId {
    pub fn new(n: u8) -> InfographicResult<Self> {
        if n == 0 {
            return Err(InfographicError::validation("SectionId must be >= 1"));
        }
        Ok(Self(n))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Zero-padded script key ("01", "02", ...).
    pub fn key(self) -> String {
        format!("{:02}", self.0)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Target language for the generated section scripts.
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Editorial slant requested from the script generator.
pub enum PoliticalOrientation {
    Left,
    #[default]
    Neutral,
    Right,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Category tag carried by stored articles and used by the batch query.
pub enum ArticleCategory {
    #[default]
    General,
    Politics,
    Business,
    Technology,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Reporter identity echoed back unchanged by the embedding contract.
pub struct Reporter {
    pub name: String,
}
