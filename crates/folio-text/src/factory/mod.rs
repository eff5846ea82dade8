pub mod lines;
pub mod nodes;
pub mod words;

pub use lines::{TextLine, split_text_lines};
pub use nodes::{RenderNode, SpacerNode, WordNode};
pub use words::WordTextFactory;
