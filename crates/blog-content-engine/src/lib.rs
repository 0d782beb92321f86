pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod preview;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{blocks_to_editor, blocks_to_editor_with};
pub use io::*;
pub use models::*;
pub use parsing::{
    BoundaryAwareChunker, ChunkStrategy, CommonMarkDetector, FixedWidthChunker, PatternDetector,
    SyntaxDetector, html_to_blocks, is_markdown, markdown_to_blocks, split,
};
pub use pipeline::{Chunking, Detection, Pipeline, PipelineSettings, normalize};
pub use preview::{CardSummary, card_summary, first_image_url, first_text, truncate};
