use unicode_linebreak::{BreakClass, break_property};

use crate::glyphs::BreakWeight;
use crate::style::WrapMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Only explicit line terminators break (wrap disabled).
    LineBreaksOnly,
    /// Word-wrap opportunities plus explicit terminators.
    WordAndLineBreaks,
}

/// Reports the break weight per code point using the UAX-14 break classes.
#[derive(Debug, Clone, Copy)]
pub struct BreakProducer {
    mode: Mode,
}

impl BreakProducer {
    pub fn new(wrap: WrapMode) -> Self {
        let mode = match wrap {
            WrapMode::None => Mode::LineBreaksOnly,
            WrapMode::Wrap => Mode::WordAndLineBreaks,
        };
        Self { mode }
    }

    pub fn weight(&self, cp: u32) -> BreakWeight {
        if char::from_u32(cp).is_none() {
            return BreakWeight::None;
        }
        match break_property(cp) {
            BreakClass::Mandatory
            | BreakClass::CarriageReturn
            | BreakClass::LineFeed
            | BreakClass::NextLine => BreakWeight::Line,
            BreakClass::Space | BreakClass::ZeroWidthSpace => {
                if self.mode == Mode::WordAndLineBreaks {
                    BreakWeight::Word
                } else {
                    BreakWeight::None
                }
            }
            _ => BreakWeight::None,
        }
    }
}
