//! # Preview Extraction
//!
//! Plain-text summaries and thumbnails for post listings.
//!
//! Text blocks may hold HTML, Markdown or both (Markdown typed into the basic
//! editor). Tags are stripped first by parsing the block as an HTML fragment and
//! reading its text content, then Markdown syntax is removed with an ordered
//! list of substitutions.

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;
use serde::Serialize;

use crate::models::{ContentBlock, sorted_by_order};

/// Default preview width in characters.
pub const PREVIEW_LEN: usize = 100;

/// Appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Summary shown on a post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub text: String,
    pub thumbnail: Option<String>,
}

/// Plain text of all TEXT and MARKDOWN blocks, in `order`, joined by single spaces.
pub fn first_text(blocks: &[ContentBlock]) -> String {
    sorted_by_order(blocks)
        .into_iter()
        .filter(|b| b.kind.is_textual())
        .map(|b| strip_markdown(&strip_html(&b.content)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL of the first IMAGE block by array position.
///
/// Unlike everything else in the crate this does not consult `order`: when
/// array position and `order` disagree, the earliest array element wins.
pub fn first_image_url(blocks: &[ContentBlock]) -> Option<&str> {
    blocks
        .iter()
        .find(|b| b.is_image())
        .map(|b| b.content.as_str())
}

/// Cuts `text` to `max_len` characters followed by `...` when it is longer.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}

/// Builds the card summary: truncated plain text plus thumbnail URL.
pub fn card_summary(blocks: &[ContentBlock], max_len: usize) -> CardSummary {
    CardSummary {
        text: truncate(&first_text(blocks), max_len),
        thumbnail: first_image_url(blocks).map(str::to_string),
    }
}

/// Text content of `text` parsed as an HTML fragment.
pub fn strip_html(text: &str) -> String {
    Html::parse_fragment(text).root_element().text().collect()
}

/// Removes Markdown syntax, keeping the readable text.
pub fn strip_markdown(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in markdown_substitutions() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

fn markdown_substitutions() -> &'static [(Regex, &'static str)] {
    static SUBSTITUTIONS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    SUBSTITUTIONS.get_or_init(|| {
        [
            // fenced code blocks
            (r"(?s)```.*?```", ""),
            // inline code
            (r"`([^`]+)`", "$1"),
            // images, before links so the `!` goes too
            (r"!\[[^\]]*\]\([^)]*\)", ""),
            (r"\[([^\]]+)\]\([^)]*\)", "$1"),
            (r"(?m)^#{1,6}\s+", ""),
            (r"(?m)^>\s?", ""),
            (r"(?m)^[ \t]*[-*+]\s+", ""),
            (r"(?m)^[ \t]*\d+\.\s+", ""),
            (r"\*\*([^*]+)\*\*", "$1"),
            (r"\*([^*]+)\*", "$1"),
            (r"~~([^~]+)~~", "$1"),
            // horizontal rules
            (r"(?m)^[ \t]*-{3,}[ \t]*$", ""),
            (r"\n\s*\n", "\n\n"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("Invalid markdown stripping regex"),
                replacement,
            )
        })
        .collect()
    })
}
