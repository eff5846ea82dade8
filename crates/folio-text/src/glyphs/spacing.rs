use serde::{Deserialize, Serialize};

/// Flexible letter-spacing bounds recorded once per glyph.
///
/// The layout pass may stretch or shrink inter-glyph gaps anywhere between
/// `minimum` and `maximum`, preferring `optimum`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub minimum: f32,
    pub optimum: f32,
    pub maximum: f32,
}

impl Spacing {
    /// Zero spacing, used when the output target does not support
    /// letter spacing.
    pub const EMPTY: Spacing = Spacing {
        minimum: 0.0,
        optimum: 0.0,
        maximum: 0.0,
    };

    /// Build a spacing range, reordering the bounds so that
    /// `minimum <= optimum <= maximum` always holds.
    pub fn new(minimum: f32, optimum: f32, maximum: f32) -> Self {
        let (lo, hi) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };
        Self {
            minimum: lo,
            optimum: optimum.clamp(lo, hi),
            maximum: hi,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::EMPTY
    }
}
