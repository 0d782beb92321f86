/*!
 * # Denormalization
 *
 * Rebuilds the string an editor is re-seeded with when a stored post is opened
 * for editing.
 *
 * ## Mode Selection
 *
 * The whole document gets one mode. The TEXT blocks are joined in `order` and
 * classified once by a `SyntaxDetector`; per-block modes are never mixed.
 *
 * ## Output Shapes
 *
 * - **Markdown**: each block on its own line, images as `![](url)`
 * - **Basic**: TEXT blocks verbatim (they already hold HTML) with an empty
 *   paragraph between consecutive TEXT blocks, images as `<p><img src="url" /></p>`
 *
 * Round trips are semantic, not byte-exact: alt text, chunk boundaries and
 * inter-paragraph whitespace are not preserved.
 */

pub mod denormalize;

pub use denormalize::{PARAGRAPH_GAP, blocks_to_editor, blocks_to_editor_with};
