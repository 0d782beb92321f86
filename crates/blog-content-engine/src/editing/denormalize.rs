use std::fmt::Write;

use crate::models::{ContentBlock, ContentKind, EditorMode, EditorString, sorted_by_order};
use crate::parsing::{PatternDetector, SyntaxDetector};

/// Inserted between consecutive TEXT blocks in basic mode.
pub const PARAGRAPH_GAP: &str = "<p><br></p>";

/// Rebuilds a single editor string from stored blocks.
///
/// The mode is chosen once for the whole document: the TEXT blocks, in
/// `order`, are joined with newlines and handed to the default detector.
pub fn blocks_to_editor(blocks: &[ContentBlock]) -> EditorString {
    blocks_to_editor_with(blocks, &PatternDetector::default())
}

/// [`blocks_to_editor`] with an explicit detector.
pub fn blocks_to_editor_with(
    blocks: &[ContentBlock],
    detector: &dyn SyntaxDetector,
) -> EditorString {
    if blocks.is_empty() {
        return EditorString::default();
    }

    let sorted = sorted_by_order(blocks);
    let mode = detect_mode(&sorted, detector);
    log::debug!("denormalized {} block(s) in {mode:?} mode", blocks.len());

    match mode {
        EditorMode::Markdown => EditorString::markdown(render_markdown(&sorted)),
        EditorMode::Basic => EditorString::basic(render_basic(&sorted)),
    }
}

fn detect_mode(sorted: &[&ContentBlock], detector: &dyn SyntaxDetector) -> EditorMode {
    let probe = sorted
        .iter()
        .filter(|b| b.kind == ContentKind::Text)
        .map(|b| b.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if detector.is_markdown(&probe) {
        EditorMode::Markdown
    } else {
        EditorMode::Basic
    }
}

fn render_markdown(sorted: &[&ContentBlock]) -> String {
    let mut out = String::new();
    for b in sorted {
        match b.kind {
            ContentKind::Image => {
                writeln!(out, "![]({})", b.content).unwrap();
            }
            ContentKind::Text | ContentKind::Markdown => {
                out.push_str(&b.content);
                out.push('\n');
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_basic(sorted: &[&ContentBlock]) -> String {
    let mut out = String::new();
    for (i, b) in sorted.iter().enumerate() {
        match b.kind {
            ContentKind::Image => {
                let src = html_escape::encode_double_quoted_attribute(&b.content);
                write!(out, r#"<p><img src="{src}" /></p>"#).unwrap();
            }
            ContentKind::Text | ContentKind::Markdown => {
                out.push_str(&b.content);
                let next_is_text = sorted
                    .get(i + 1)
                    .is_some_and(|next| next.kind == ContentKind::Text);
                if next_is_text {
                    out.push_str(PARAGRAPH_GAP);
                }
            }
        }
    }
    out
}
