pub type InfographicResult<T> = Result<T, InfographicError>;

#[derive(thiserror::Error, Debug)]
pub enum InfographicError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("script generation failed: {0}")]
    Generation(String),

    #[error("palette extraction failed: {0}")]
    Palette(String),

    #[error("component render failed: {0}")]
    Render(String),

    #[error("canvas assembly failed: {0}")]
    Assembly(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InfographicError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly(msg.into())
    }
}
