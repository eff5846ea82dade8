//! Per-code-point producers driven by the word factory.
//!
//! All producers accept `u32` code points so that the two pseudo code
//! points below can travel the same path as real content, letting each
//! producer prime and flush its state symmetrically.

pub mod breaks;
pub mod classify;
pub mod clusters;
pub mod spacing;
pub mod whitespace;

pub use breaks::BreakProducer;
pub use classify::GlyphClassifier;
pub use clusters::ClusterProducer;
pub use spacing::{GlyphMetrics, SpacingProducer};
pub use whitespace::WhitespaceFilter;

/// Pseudo code point fed through the producers when a text flow starts.
pub const START_OF_TEXT: u32 = 0x0011_0000;

/// Pseudo code point fed through the producers when a text flow ends.
pub const END_OF_TEXT: u32 = 0x0011_0001;

/// Zero-width placeholder anchoring a cluster whose lead character was
/// stripped by the whitespace filter.
pub const STRIPPED_ANCHOR: char = '\u{200B}';

/// True for the out-of-range pseudo code points.
pub(crate) fn is_pseudo(cp: u32) -> bool {
    char::from_u32(cp).is_none()
}
