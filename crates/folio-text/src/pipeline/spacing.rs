use crate::font::metrics::FontMetricsProvider;
use crate::glyphs::Spacing;
use crate::pipeline::is_pseudo;
use crate::style::TextStyle;

/// Metrics for one code point, as consumed by the glyph store.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphMetrics {
    pub width: f32,
    pub height: f32,
    pub baseline: f32,
    pub kerning: f32,
}

/// Looks up per-code-point size metrics and kerning, and carries the
/// style's letter-spacing bounds.
///
/// Kerning is stateful: each code point is paired with the previous one
/// fed through `advance`, so the first member of a cluster gets the gap to
/// the preceding cluster. Pseudo code points reset the pair state.
#[derive(Debug, Clone, Copy)]
pub struct SpacingProducer {
    letter_spacing: Spacing,
    prev: Option<char>,
}

impl SpacingProducer {
    /// Build from the style's letter-spacing bounds. When the output
    /// target does not support spacing, degrade to the static empty
    /// spacing without reading the style values.
    pub fn new(style: &TextStyle, supports_spacing: bool) -> Self {
        let letter_spacing = if supports_spacing {
            Spacing::new(
                style.min_letter_spacing,
                style.optimum_letter_spacing,
                style.max_letter_spacing,
            )
        } else {
            Spacing::EMPTY
        };
        Self {
            letter_spacing,
            prev: None,
        }
    }

    /// The letter-spacing bounds recorded with every glyph.
    pub fn spacing(&self) -> Spacing {
        self.letter_spacing
    }

    /// Size metrics and kerning for the next code point in the stream.
    pub fn advance<P: FontMetricsProvider + ?Sized>(&mut self, cp: u32, provider: &P) -> GlyphMetrics {
        if is_pseudo(cp) {
            self.prev = None;
            return GlyphMetrics::default();
        }
        // Guarded by is_pseudo above.
        let Some(c) = char::from_u32(cp) else {
            return GlyphMetrics::default();
        };
        let kerning = match self.prev {
            Some(prev) => provider.kerning(prev, c),
            None => 0.0,
        };
        self.prev = Some(c);
        GlyphMetrics {
            width: provider.advance_width(c),
            height: provider.char_height(c),
            baseline: provider.baseline_offset(c),
            kerning,
        }
    }

    /// Forget the kerning pair state.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}
