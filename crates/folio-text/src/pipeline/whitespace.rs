use crate::style::WhitespaceMode;

/// Non-breaking spaces are content, never filterable whitespace.
fn is_filterable_space(c: char) -> bool {
    c.is_whitespace() && c != '\u{00A0}' && c != '\u{202F}'
}

/// Explicit line terminators (UAX-14 classes BK, CR, LF, NL).
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\r' | '\n' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Maps raw code points to their filtered form according to the style's
/// whitespace mode. `None` is the strip sentinel.
#[derive(Debug, Clone, Copy)]
pub struct WhitespaceFilter {
    mode: WhitespaceMode,
}

impl WhitespaceFilter {
    pub fn new(mode: WhitespaceMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WhitespaceMode {
        self.mode
    }

    /// Filter one real code point; `None` means strip it.
    pub fn filter_char(&self, c: char) -> Option<char> {
        if !is_filterable_space(c) {
            return Some(c);
        }
        match self.mode {
            WhitespaceMode::Discard => None,
            WhitespaceMode::Preserve => Some(c),
            WhitespaceMode::PreserveBreaks => {
                if is_line_terminator(c) {
                    Some(c)
                } else {
                    Some(' ')
                }
            }
            WhitespaceMode::Collapse => Some(' '),
        }
    }

    /// Filter a code point; values outside the Unicode scalar range
    /// (the flow pseudo code points) pass through unchanged.
    pub fn filter(&self, cp: u32) -> Option<u32> {
        match char::from_u32(cp) {
            Some(c) => self.filter_char(c).map(|c| c as u32),
            None => Some(cp),
        }
    }
}
