use crate::models::{ContentBlock, ContentKind};

/// Asserts the structural guarantees of a freshly normalized block list.
///
/// - `order` runs 1, 2, 3, ... in array position
/// - textual blocks are at most `max_len` characters
/// - IMAGE blocks carry a non-empty URL
///
/// Panics with a description of the first violation.
pub fn check(blocks: &[ContentBlock], max_len: usize) {
    for (i, b) in blocks.iter().enumerate() {
        assert_eq!(
            b.order as usize,
            i + 1,
            "order is not dense and 1-based at index {i}: {b:?}"
        );
        match b.kind {
            ContentKind::Text | ContentKind::Markdown => {
                let len = b.content.chars().count();
                assert!(
                    len <= max_len,
                    "block {} exceeds {max_len} chars ({len})",
                    b.order
                );
            }
            ContentKind::Image => {
                assert!(!b.content.is_empty(), "image block {} has no URL", b.order);
            }
        }
    }
}
