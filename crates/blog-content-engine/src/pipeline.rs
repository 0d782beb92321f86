use crate::{
    editing::blocks_to_editor_with,
    models::{ContentBlock, EditorString, MAX_BLOCK_LEN, Post, UNTITLED_TITLE},
    parsing::{
        BoundaryAwareChunker, ChunkStrategy, CommonMarkDetector, FixedWidthChunker,
        PatternDetector, SyntaxDetector, html_to_blocks_with, markdown_to_blocks_with,
    },
    preview::{CardSummary, PREVIEW_LEN, card_summary},
};

/// How text is cut into blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Chunking {
    #[default]
    FixedWidth,
    BoundaryAware,
}

/// Which classifier picks the editor mode on reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detection {
    #[default]
    Patterns,
    CommonMark,
}

/// Plain settings from which a [`Pipeline`] is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub max_block_len: usize,
    pub preview_len: usize,
    pub untitled_title: String,
    pub chunking: Chunking,
    pub detection: Detection,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_block_len: MAX_BLOCK_LEN,
            preview_len: PREVIEW_LEN,
            untitled_title: UNTITLED_TITLE.to_string(),
            chunking: Chunking::default(),
            detection: Detection::default(),
        }
    }
}

/// The publish, reload and preview paths wired to one detector and chunker.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct Pipeline {
    detector: Box<dyn SyntaxDetector + Send + Sync>,
    chunker: Box<dyn ChunkStrategy + Send + Sync>,
    preview_len: usize,
    untitled_title: String,
}

impl Pipeline {
    pub fn new(settings: &PipelineSettings) -> Self {
        let detector: Box<dyn SyntaxDetector + Send + Sync> = match settings.detection {
            Detection::Patterns => Box::new(PatternDetector::default()),
            Detection::CommonMark => Box::new(CommonMarkDetector),
        };
        let chunker: Box<dyn ChunkStrategy + Send + Sync> = match settings.chunking {
            Chunking::FixedWidth => Box::new(FixedWidthChunker::new(settings.max_block_len)),
            Chunking::BoundaryAware => {
                Box::new(BoundaryAwareChunker::new(settings.max_block_len))
            }
        };
        Self {
            detector,
            chunker,
            preview_len: settings.preview_len,
            untitled_title: settings.untitled_title.clone(),
        }
    }

    /// Publish path: builds the post sent to the blog API.
    pub fn normalize(&self, title: &str, content: &str, is_markdown: bool) -> Post {
        let contents = if is_markdown {
            self.markdown_to_blocks(content)
        } else {
            self.html_to_blocks(content)
        };
        Post::new(title, contents, &self.untitled_title)
    }

    pub fn markdown_to_blocks(&self, text: &str) -> Vec<ContentBlock> {
        markdown_to_blocks_with(text, &*self.chunker)
    }

    pub fn html_to_blocks(&self, html: &str) -> Vec<ContentBlock> {
        html_to_blocks_with(html, &*self.chunker)
    }

    pub fn is_markdown(&self, text: &str) -> bool {
        self.detector.is_markdown(text)
    }

    /// Edit-load path.
    pub fn blocks_to_editor(&self, blocks: &[ContentBlock]) -> EditorString {
        blocks_to_editor_with(blocks, &*self.detector)
    }

    /// Listing path.
    pub fn card_summary(&self, blocks: &[ContentBlock]) -> CardSummary {
        card_summary(blocks, self.preview_len)
    }

    pub fn max_block_len(&self) -> usize {
        self.chunker.max_len()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&PipelineSettings::default())
    }
}

/// Publish path with default settings.
pub fn normalize(title: &str, content: &str, is_markdown: bool) -> Post {
    Pipeline::default().normalize(title, content, is_markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentKind, EditorMode};
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_dispatches_on_markdown_flag() {
        let md = normalize("Title", "**hi** ![x](a.png)", true);
        assert_eq!(
            md.contents,
            vec![ContentBlock::text(1, "**hi**"), ContentBlock::image(2, "a.png")]
        );

        let html = normalize("Title", "<p>hi</p>", false);
        assert_eq!(html.contents, vec![ContentBlock::text(1, "<p>hi</p>")]);
    }

    #[test]
    fn normalize_defaults_blank_title() {
        assert_eq!(normalize("   ", "", true).title, "제목 없음");
        assert_eq!(normalize("  Trip  ", "", true).title, "Trip");
    }

    #[test]
    fn empty_content_asymmetry_between_branches() {
        assert!(normalize("t", "", true).contents.is_empty());
        assert_eq!(
            normalize("t", "", false).contents,
            vec![ContentBlock::text(1, "")]
        );
    }

    #[test]
    fn settings_select_chunk_width_and_title() {
        let pipeline = Pipeline::new(&PipelineSettings {
            max_block_len: 4,
            untitled_title: "untitled".to_string(),
            ..PipelineSettings::default()
        });

        let post = pipeline.normalize("", "abcdefghij", true);
        assert_eq!(post.title, "untitled");
        let lengths: Vec<usize> = post.contents.iter().map(|b| b.content.len()).collect();
        assert_eq!(lengths, vec![4, 4, 2]);
        assert_eq!(pipeline.max_block_len(), 4);
    }

    #[test]
    fn boundary_aware_pipeline_keeps_tags_whole() {
        let pipeline = Pipeline::new(&PipelineSettings {
            max_block_len: 12,
            chunking: Chunking::BoundaryAware,
            ..PipelineSettings::default()
        });

        let blocks = pipeline.html_to_blocks("<p>alpha beta <b>gamma</b></p>");
        assert!(blocks.iter().all(|b| b.kind == ContentKind::Text));
        for b in &blocks {
            assert_eq!(
                b.content.matches('<').count(),
                b.content.matches('>').count(),
                "tag split across blocks in {:?}",
                b.content
            );
        }
    }

    #[test]
    fn pipeline_reload_and_preview() {
        let pipeline = Pipeline::default();
        let post = pipeline.normalize("t", "# Hello\n\n![x](https://x/a.png)\n\nBody text", true);

        let editor = pipeline.blocks_to_editor(&post.contents);
        assert_eq!(editor.mode, EditorMode::Markdown);

        let card = pipeline.card_summary(&post.contents);
        assert_eq!(card.text, "Hello Body text");
        assert_eq!(card.thumbnail.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn pipeline_is_shareable_across_threads() {
        let pipeline = std::sync::Arc::new(Pipeline::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pipeline = pipeline.clone();
                std::thread::spawn(move || {
                    pipeline
                        .normalize("t", &format!("<p>post {i}</p>"), false)
                        .contents
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let contents = handle.join().unwrap();
            assert_eq!(contents, vec![ContentBlock::text(1, format!("<p>post {i}</p>"))]);
        }
    }
}
