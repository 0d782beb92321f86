//! # Normalization
//!
//! Turns editor content into the ordered block list sent to the blog API.
//!
//! ## Modules
//!
//! - **`detect`**: `SyntaxDetector` trait with regex and CommonMark implementations
//! - **`chunk`**: `ChunkStrategy` trait with fixed-width and boundary-aware cutting
//! - **`builder`**: `BlockBuilder` assigning dense 1-based `order` values
//! - **`markdown`**: Markdown source to TEXT/IMAGE blocks (image syntax split out)
//! - **`html`**: editor HTML to TEXT/IMAGE blocks (DOM walk over block elements)
//! - **`invariants`**: assertions on freshly normalized lists, used by tests
//!
//! ## Key Invariants
//!
//! - Every pass numbers its output from 1; `order` is never carried over
//! - Non-whitespace source text and image references are never dropped
//! - The HTML branch always returns at least one block; the Markdown branch
//!   returns none for blank input

pub mod builder;
pub mod chunk;
pub mod detect;
pub mod html;
pub mod invariants;
pub mod markdown;

pub use builder::BlockBuilder;
pub use chunk::{BoundaryAwareChunker, ChunkStrategy, FixedWidthChunker, split};
pub use detect::{CommonMarkDetector, MarkdownPattern, PatternDetector, SyntaxDetector, is_markdown};
pub use html::{html_to_blocks, html_to_blocks_with};
pub use markdown::{markdown_to_blocks, markdown_to_blocks_with};
