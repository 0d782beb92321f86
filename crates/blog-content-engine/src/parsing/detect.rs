//! # Markdown Syntax Detection
//!
//! Heuristic classification of a string as Markdown or as plain text / HTML.
//!
//! Callers depend on the [`SyntaxDetector`] trait only. Two implementations ship:
//!
//! - **`PatternDetector`**: an ordered list of independent regex patterns; the
//!   first match wins and no ranking takes place. This is the default.
//! - **`CommonMarkDetector`**: runs a CommonMark parser and reports Markdown when
//!   any construct beyond plain paragraphs and raw HTML appears.

use std::sync::OnceLock;

use pulldown_cmark::{Event, Options, Parser, Tag};
use regex::Regex;

/// Classifies text as Markdown or not.
pub trait SyntaxDetector {
    /// Returns `true` when `text` looks like Markdown. Empty text is never Markdown.
    fn is_markdown(&self, text: &str) -> bool;
}

/// One Markdown construct recognised by [`PatternDetector`].
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownPattern {
    /// `# Title` through `###### Title` at the start of a line.
    Heading,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `[text](url)`
    Link,
    /// `- item`, `* item` or `+ item` at the start of a line.
    UnorderedList,
    /// `> quote` at the start of a line.
    Blockquote,
    /// `` `code` ``
    InlineCode,
    /// A fenced code block delimited by triple backticks.
    FencedCode,
    /// `1. item` at the start of a line.
    OrderedList,
    /// A line consisting of three or more dashes.
    HorizontalRule,
    /// `~~struck~~`
    Strikethrough,
}

impl MarkdownPattern {
    pub const ALL: [MarkdownPattern; 11] = [
        MarkdownPattern::Heading,
        MarkdownPattern::Bold,
        MarkdownPattern::Italic,
        MarkdownPattern::Link,
        MarkdownPattern::UnorderedList,
        MarkdownPattern::Blockquote,
        MarkdownPattern::InlineCode,
        MarkdownPattern::FencedCode,
        MarkdownPattern::OrderedList,
        MarkdownPattern::HorizontalRule,
        MarkdownPattern::Strikethrough,
    ];

    fn source(self) -> &'static str {
        match self {
            MarkdownPattern::Heading => r"(?m)^#{1,6}\s",
            MarkdownPattern::Bold => r"\*\*[^*\n]+\*\*",
            MarkdownPattern::Italic => r"\*[^*\n]+\*",
            MarkdownPattern::Link => r"\[[^\]\n]+\]\([^)\n]+\)",
            MarkdownPattern::UnorderedList => r"(?m)^[-*+]\s",
            MarkdownPattern::Blockquote => r"(?m)^>\s",
            MarkdownPattern::InlineCode => r"`[^`\n]+`",
            MarkdownPattern::FencedCode => r"(?s)```.*?```",
            MarkdownPattern::OrderedList => r"(?m)^\d+\.\s",
            MarkdownPattern::HorizontalRule => r"(?m)^---+\r?$",
            MarkdownPattern::Strikethrough => r"~~[^~\n]+~~",
        }
    }

    fn regex(self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = COMPILED.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|p| Regex::new(p.source()).expect("Invalid markdown detection regex"))
                .collect()
        });
        &compiled[self as usize]
    }

    pub fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

/// Regex-based detector: any pattern in the set matching is enough.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    patterns: Vec<MarkdownPattern>,
}

impl PatternDetector {
    /// Builds a detector restricted to `patterns`, evaluated in the given order.
    pub fn new(patterns: impl Into<Vec<MarkdownPattern>>) -> Self {
        Self {
            patterns: patterns.into(),
        }
    }

    /// Returns the first pattern matching `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<MarkdownPattern> {
        if text.is_empty() {
            return None;
        }
        self.patterns.iter().copied().find(|p| p.is_match(text))
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new(MarkdownPattern::ALL)
    }
}

impl SyntaxDetector for PatternDetector {
    fn is_markdown(&self, text: &str) -> bool {
        let found = self.first_match(text);
        if let Some(pattern) = found {
            log::trace!("markdown detected via {pattern:?}");
        }
        found.is_some()
    }
}

/// Detector backed by a CommonMark parser.
///
/// Stricter than [`PatternDetector`]: Markdown inside raw HTML blocks is not
/// recognised, and emphasis needs to be well formed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkDetector;

impl SyntaxDetector for CommonMarkDetector {
    fn is_markdown(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).any(|event| match event {
            Event::Start(Tag::Paragraph | Tag::HtmlBlock) => false,
            Event::Start(_) => true,
            Event::Code(_) | Event::Rule => true,
            _ => false,
        })
    }
}

/// Classifies `text` with the default [`PatternDetector`].
pub fn is_markdown(text: &str) -> bool {
    PatternDetector::default().is_markdown(text)
}
