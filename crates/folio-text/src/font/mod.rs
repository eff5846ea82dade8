pub mod baseline;
pub mod face;
pub mod metrics;

pub use baseline::{BaselineSet, resolve_baselines, resolve_padded_baselines};
pub use face::{FaceMetrics, FontFace};
pub use metrics::{FontMetrics, FontMetricsProvider, ScaledFontMetrics, ScriptBaselines};

use core::fmt;

/// Errors that can occur while working with fonts.
#[derive(Debug)]
pub enum FontError {
    Io(std::io::Error),
    InvalidFont,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io(err) => write!(f, "font I/O error: {err}"),
            FontError::InvalidFont => write!(f, "invalid font data"),
        }
    }
}

impl std::error::Error for FontError {}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err)
    }
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
