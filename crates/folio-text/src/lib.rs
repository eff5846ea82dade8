//! folio-text: streaming text shaping and incremental line segmentation.
//!
//! Styled text is fed chunk-by-chunk into a [`WordTextFactory`], which
//! clusters code points, filters whitespace, detects break opportunities
//! and emits positionable [`RenderNode`]s (words and spacers) for a
//! downstream line/page layout pass. Pre-shaped text bypasses the factory
//! through [`split_text_lines`], which only splits on explicit line
//! terminators.
//!
//! Per-code-point metrics (advance widths, baselines, kerning) come from a
//! [`FontMetricsProvider`]; a reference implementation over real font data
//! is provided by [`font::face::FaceMetrics`].

pub mod factory;
pub mod font;
pub mod glyphs;
pub mod pipeline;
pub mod style;

pub use factory::{
    RenderNode, SpacerNode, TextLine, WordNode, WordTextFactory, split_text_lines,
};
pub use font::{
    FontError,
    baseline::{BaselineSet, resolve_baselines, resolve_padded_baselines},
    face::{FaceMetrics, FontFace},
    metrics::{FontMetrics, FontMetricsProvider, ScaledFontMetrics, ScriptBaselines},
};
pub use glyphs::{BreakWeight, FrozenGlyphs, GlyphClass, GlyphRef, GlyphStore, Spacing};
pub use style::{TextStyle, WhitespaceMode, WrapMode};
