use crate::glyphs::GlyphClass;

/// Assigns a coarse class per code point: whitespace, letter/digit, or
/// everything else. Pseudo code points classify as `Other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphClassifier;

impl GlyphClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, cp: u32) -> GlyphClass {
        match char::from_u32(cp) {
            Some(c) if c.is_whitespace() => GlyphClass::Space,
            Some(c) if c.is_alphanumeric() => GlyphClass::Letter,
            _ => GlyphClass::Other,
        }
    }
}
