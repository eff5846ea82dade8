/// One line of pre-shaped text produced by [`split_text_lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    /// True when an explicit terminator ended this line. Only the last
    /// line of the input can be unterminated.
    pub force_linebreak: bool,
}

/// Split pre-shaped text purely on explicit line terminators.
///
/// CR and LF both end a line; a CR directly followed by LF (or LF by CR)
/// counts as one terminator, while two identical terminators in a row
/// produce an empty line between them. A terminator at end-of-input does
/// not emit a trailing empty line; it only marks the preceding line as
/// force-broken.
pub fn split_text_lines(text: &str) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' || c == '\n' {
            let pair = if c == '\r' { '\n' } else { '\r' };
            if chars.peek() == Some(&pair) {
                chars.next();
            }
            lines.push(TextLine {
                text: std::mem::take(&mut current),
                force_linebreak: true,
            });
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        lines.push(TextLine {
            text: current,
            force_linebreak: false,
        });
    }
    lines
}
