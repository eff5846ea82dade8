use core::ops::Range;

use crate::font::baseline::BaselineSet;
use crate::glyphs::{FrozenGlyphs, Spacing};

/// A positionable node handed to the line/page layout pass, in
/// left-to-right order.
#[derive(Debug, Clone)]
pub enum RenderNode {
    Word(WordNode),
    Spacer(SpacerNode),
}

/// One unbreakable run of glyphs plus its resolved baseline vector.
///
/// `offset`/`length` address the frozen store, so later passes can split a
/// word without copying glyph data.
#[derive(Debug, Clone)]
pub struct WordNode {
    pub baseline: BaselineSet,
    pub glyphs: FrozenGlyphs,
    pub offset: usize,
    pub length: usize,
    pub script: u32,
    /// True when an explicit line terminator closed this word.
    pub force_linebreak: bool,
}

impl WordNode {
    pub fn glyph_range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Reconstructed text of the word.
    pub fn text(&self) -> String {
        self.glyphs.text(self.glyph_range())
    }

    /// Width when every inter-glyph gap shrinks to its minimum.
    pub fn min_width(&self) -> f32 {
        self.width_with(|s| s.minimum)
    }

    /// Width at optimum letter spacing.
    pub fn preferred_width(&self) -> f32 {
        self.width_with(|s| s.optimum)
    }

    /// Width when every inter-glyph gap stretches to its maximum.
    pub fn max_width(&self) -> f32 {
        self.width_with(|s| s.maximum)
    }

    fn width_with(&self, pick: impl Fn(Spacing) -> f32) -> f32 {
        let range = self.glyph_range();
        let mut width = 0.0;
        for i in range.clone() {
            let glyph = self.glyphs.glyph(i);
            width += glyph.width();
            if i > range.start {
                width += glyph.kerning();
            }
            if i + 1 < range.end {
                width += pick(glyph.spacing());
            }
        }
        width
    }
}

/// Accumulated inter-word whitespace rendered as a single gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacerNode {
    /// Cumulative advance width of the collapsed spaces.
    pub width: f32,
    /// True when the spacer stems from collapsible whitespace and may be
    /// dropped at a line start.
    pub collapsed: bool,
    /// Number of space code points folded into this spacer.
    pub space_count: u32,
}
