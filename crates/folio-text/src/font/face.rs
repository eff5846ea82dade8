use std::cell::RefCell;
use std::sync::Arc;

use hashbrown::HashMap;
use swash::{FontRef, Metrics};

use crate::font::metrics::{FontMetrics, FontMetricsProvider, ScaledFontMetrics};
use crate::font::{FontError, Result};

/// Loaded font face backed by a font file (TTF/OTF).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes high-level metrics and per-code-point
/// advance widths.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            metrics,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            underline_offset,
            strikeout_offset,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
            underline_offset,
            strikeout_offset,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    /// Advance width of a single code point at the given pixel size.
    ///
    /// Unmapped code points resolve to the font's notdef glyph.
    pub fn scaled_advance(&self, cp: char, font_size: f32) -> f32 {
        let font = self.as_swash_ref();
        let glyph = font.charmap().map(cp);
        font.glyph_metrics(&[]).scale(font_size).advance_width(glyph)
    }
}

/// Metrics provider over one loaded face at a fixed pixel size.
///
/// Advance widths are memoized per code point. Not thread-safe; confine
/// one instance to one thread like the factory that owns it.
#[derive(Debug)]
pub struct FaceMetrics {
    face: FontFace,
    scaled: ScaledFontMetrics,
    advances: RefCell<HashMap<char, f32>>,
}

impl FaceMetrics {
    pub fn new(face: FontFace, font_size: f32) -> Self {
        let scaled = face.scaled_metrics(font_size);
        Self {
            face,
            scaled,
            advances: RefCell::new(HashMap::new()),
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }
}

impl FontMetricsProvider for FaceMetrics {
    fn font_size(&self) -> f32 {
        self.scaled.font_size
    }

    fn ascent(&self) -> f32 {
        self.scaled.ascent
    }

    fn descent(&self) -> f32 {
        self.scaled.descent
    }

    fn advance_width(&self, cp: char) -> f32 {
        if let Some(width) = self.advances.borrow().get(&cp) {
            return *width;
        }
        let width = self.face.scaled_advance(cp, self.scaled.font_size);
        self.advances.borrow_mut().insert(cp, width);
        width
    }

    fn underline_position(&self) -> f32 {
        self.scaled.underline_offset
    }

    fn strikethrough_position(&self) -> f32 {
        self.scaled.strikeout_offset
    }

    fn leading(&self) -> f32 {
        self.scaled.line_gap
    }

    // One face, one baseline table.
    fn is_uniform(&self) -> bool {
        true
    }
}
