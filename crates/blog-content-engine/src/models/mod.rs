pub mod content_block;
pub mod editor;
pub mod post;

pub use content_block::{ContentBlock, ContentKind, MAX_BLOCK_LEN, sorted_by_order};
pub use editor::{EditorMode, EditorString};
pub use post::{Post, UNTITLED_TITLE};
