use serde::{Deserialize, Serialize};

/// Maximum number of characters stored in a single TEXT or MARKDOWN block.
pub const MAX_BLOCK_LEN: usize = 255;

/// The kind of a stored content block.
///
/// Serializes to the literal wire strings `TEXT`, `IMAGE` and `MARKDOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentKind {
    /// Free text. HTML when produced from the basic editor, Markdown otherwise.
    Text,
    /// An image reference; `content` holds the URL and is never chunked.
    Image,
    /// Markdown source stored verbatim.
    Markdown,
}

impl ContentKind {
    /// Whether blocks of this kind carry free text (as opposed to a URL).
    pub fn is_textual(self) -> bool {
        matches!(self, ContentKind::Text | ContentKind::Markdown)
    }
}

/// One ordered unit of post content.
///
/// The wire shape is `{ contentOrder, content, contentType }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Dense 1-based position assigned by the pass that produced the list.
    ///
    /// Not a stable identity: every normalization pass renumbers from 1.
    #[serde(rename = "contentOrder")]
    pub order: u32,
    pub content: String,
    #[serde(rename = "contentType")]
    pub kind: ContentKind,
}

impl ContentBlock {
    pub fn new(order: u32, kind: ContentKind, content: impl Into<String>) -> Self {
        Self {
            order,
            kind,
            content: content.into(),
        }
    }

    pub fn text(order: u32, content: impl Into<String>) -> Self {
        Self::new(order, ContentKind::Text, content)
    }

    pub fn image(order: u32, url: impl Into<String>) -> Self {
        Self::new(order, ContentKind::Image, url)
    }

    pub fn markdown(order: u32, content: impl Into<String>) -> Self {
        Self::new(order, ContentKind::Markdown, content)
    }

    pub fn is_image(&self) -> bool {
        self.kind == ContentKind::Image
    }
}

/// Returns the blocks in ascending `order`.
///
/// The sort is stable, so blocks sharing an `order` keep their array position.
pub fn sorted_by_order(blocks: &[ContentBlock]) -> Vec<&ContentBlock> {
    let mut sorted: Vec<&ContentBlock> = blocks.iter().collect();
    sorted.sort_by_key(|b| b.order);
    sorted
}
