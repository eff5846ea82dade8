pub mod spacing;
pub mod store;

pub use spacing::Spacing;
pub use store::{FrozenGlyphs, GlyphRef, GlyphStore};

/// Whether a position after a glyph is a valid break point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakWeight {
    /// No break opportunity.
    None,
    /// Ordinary word-wrap opportunity.
    Word,
    /// Forced line break.
    Line,
}

/// Coarse classification of a shaped cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    Space,
    Letter,
    Other,
}
