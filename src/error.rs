use thiserror::Error;

/// All errors that a typesetting call can surface to its caller
#[derive(Error, Debug)]
pub enum TypesetError {
    #[error(transparent)]
    /// The typesetter options were rejected before layout started
    Config(#[from] ConfigError),

    #[error(transparent)]
    /// The text measurer could not produce a width; the whole call fails
    Measure(#[from] MeasureError),
}

/// Invalid layout parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("line width must be positive, got {0}")]
    NonPositiveLineWidth(f64),

    #[error("line height must be positive, got {0}")]
    NonPositiveLineHeight(f64),

    #[error("default font size must be positive, got {0}")]
    NonPositiveFontSize(f64),

    #[error("line number frequency must be at least 1")]
    ZeroLineNumberFrequency,

    #[error("default font family must not be empty")]
    EmptyFontFamily,
}

/// Failures of the injected text measurer
#[derive(Error, Debug)]
pub enum MeasureError {
    #[error("no font loaded for family `{family}`")]
    MissingFont { family: String },

    #[error("measurer returned a non-finite width for `{text}`")]
    NonFiniteWidth { text: String },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("text measurement failed: {0}")]
    Backend(String),
}

/// Broken invariants inside the line compositor. These are programming errors,
/// never caused by the input tokens, and only ever abandon a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("reordering produced {actual} tokens for a line of {expected}")]
    TokenCountMismatch { expected: usize, actual: usize },

    #[error("display order visits token {index} more than once")]
    RepeatedToken { index: usize },
}
