use serde::{Deserialize, Serialize};

/// How raw whitespace code points are filtered before shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhitespaceMode {
    /// Strip all whitespace, line terminators included.
    Discard,
    /// Pass every code point through untouched.
    Preserve,
    /// Keep line terminators, normalize other whitespace to U+0020.
    PreserveBreaks,
    /// Normalize every whitespace code point (terminators included) to
    /// U+0020; runs of spaces collapse into a single spacer downstream.
    Collapse,
}

/// Whether word-wrap opportunities are reported at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Only explicit line terminators break; used when wrapping is disabled.
    None,
    /// Ordinary word-wrap points plus explicit terminators.
    Wrap,
}

/// Style context consulted once per `create_text` call.
///
/// Letter spacing is a min/optimum/max range the layout pass may flex
/// within; word spacing is added to every inter-word space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub whitespace: WhitespaceMode,
    pub wrap: WrapMode,
    pub min_letter_spacing: f32,
    pub optimum_letter_spacing: f32,
    pub max_letter_spacing: f32,
    pub word_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            whitespace: WhitespaceMode::Collapse,
            wrap: WrapMode::Wrap,
            min_letter_spacing: 0.0,
            optimum_letter_spacing: 0.0,
            max_letter_spacing: 0.0,
            word_spacing: 0.0,
        }
    }
}
