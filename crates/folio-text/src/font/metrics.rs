/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
    /// Offset from the baseline to the underline stroke.
    pub underline_offset: f32,
    /// Offset from the baseline to the strikeout stroke.
    pub strikeout_offset: f32,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            underline_offset: self.underline_offset * scale,
            strikeout_offset: self.strikeout_offset * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub underline_offset: f32,
    pub strikeout_offset: f32,
    pub font_size: f32,
}

/// Provider-space baseline positions for one script, measured from the
/// before-edge (top) of the line area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptBaselines {
    pub hanging: f32,
    pub alphabetic: f32,
    pub central: f32,
    pub ideographic: f32,
    pub mathematical: f32,
    pub middle: f32,
}

/// Source of per-code-point metrics consumed by the shaping pipeline.
///
/// Only the scalar essentials are required; everything derivable from
/// ascent/descent has a default so table-less providers stay small.
pub trait FontMetricsProvider {
    /// Declared font size in the same unit as all returned metrics.
    fn font_size(&self) -> f32;
    /// Ascent above the alphabetic baseline (positive).
    fn ascent(&self) -> f32;
    /// Descent below the alphabetic baseline (positive).
    fn descent(&self) -> f32;
    /// Advance width for a single code point.
    fn advance_width(&self, cp: char) -> f32;
    /// Offset from the baseline to the underline stroke.
    fn underline_position(&self) -> f32;
    /// Offset from the baseline to the strikeout stroke.
    fn strikethrough_position(&self) -> f32;

    /// Line gap.
    fn leading(&self) -> f32 {
        0.0
    }

    /// Height of a single code point.
    fn char_height(&self, _cp: char) -> f32 {
        self.ascent() + self.descent()
    }

    /// Distance from the glyph's top edge down to its dominant baseline.
    fn baseline_offset(&self, _cp: char) -> f32 {
        self.ascent()
    }

    /// Kerning adjustment between two adjacent code points.
    fn kerning(&self, _left: char, _right: char) -> f32 {
        0.0
    }

    /// Script identifier for a code point.
    fn script(&self, _cp: char) -> u32 {
        0
    }

    /// Script baseline table for a code point. The default derives a flat
    /// table from ascent/descent for providers without baseline tables.
    fn script_baselines(&self, _cp: char) -> ScriptBaselines {
        let ascent = self.ascent();
        let height = ascent + self.descent();
        ScriptBaselines {
            hanging: ascent * 0.2,
            alphabetic: ascent,
            central: height * 0.5,
            ideographic: height,
            mathematical: ascent * 0.5,
            middle: ascent * 0.5,
        }
    }

    /// True when baseline data is identical for every code point, which
    /// lets consumers cache the resolved baseline vector.
    fn is_uniform(&self) -> bool {
        false
    }

    /// True when the output target honours letter/word spacing.
    fn supports_spacing(&self) -> bool {
        true
    }
}

impl<P: FontMetricsProvider + ?Sized> FontMetricsProvider for &P {
    fn font_size(&self) -> f32 {
        (**self).font_size()
    }

    fn ascent(&self) -> f32 {
        (**self).ascent()
    }

    fn descent(&self) -> f32 {
        (**self).descent()
    }

    fn advance_width(&self, cp: char) -> f32 {
        (**self).advance_width(cp)
    }

    fn underline_position(&self) -> f32 {
        (**self).underline_position()
    }

    fn strikethrough_position(&self) -> f32 {
        (**self).strikethrough_position()
    }

    fn leading(&self) -> f32 {
        (**self).leading()
    }

    fn char_height(&self, cp: char) -> f32 {
        (**self).char_height(cp)
    }

    fn baseline_offset(&self, cp: char) -> f32 {
        (**self).baseline_offset(cp)
    }

    fn kerning(&self, left: char, right: char) -> f32 {
        (**self).kerning(left, right)
    }

    fn script(&self, cp: char) -> u32 {
        (**self).script(cp)
    }

    fn script_baselines(&self, cp: char) -> ScriptBaselines {
        (**self).script_baselines(cp)
    }

    fn is_uniform(&self) -> bool {
        (**self).is_uniform()
    }

    fn supports_spacing(&self) -> bool {
        (**self).supports_spacing()
    }
}
