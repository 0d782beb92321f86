//! Splitting over-long strings into ordered pieces of bounded length.
//!
//! Lengths are counted in `char`s. Cuts always land on `char` boundaries but
//! [`FixedWidthChunker`] ignores words, HTML tags and grapheme clusters: a long
//! HTML block may be split mid-tag. [`BoundaryAwareChunker`] avoids that.

use crate::models::MAX_BLOCK_LEN;

/// Decides where an over-long string is cut into blocks.
pub trait ChunkStrategy {
    /// Splits `text` into pieces whose concatenation is `text`.
    ///
    /// Returns an empty vector for empty input.
    fn split(&self, text: &str) -> Vec<String>;

    /// Upper bound on the `char` length of each piece.
    fn max_len(&self) -> usize;
}

/// Naive fixed-width cut every `max_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthChunker {
    max_len: usize,
}

impl FixedWidthChunker {
    /// A `max_len` of zero is treated as one so that splitting always progresses.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }
}

impl Default for FixedWidthChunker {
    fn default() -> Self {
        Self::new(MAX_BLOCK_LEN)
    }
}

impl ChunkStrategy for FixedWidthChunker {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let chunks: Vec<String> = chars
            .chunks(self.max_len)
            .map(|piece| piece.iter().collect())
            .collect();
        log::trace!(
            "split {} chars into {} chunk(s) of <= {}",
            chars.len(),
            chunks.len(),
            self.max_len
        );
        chunks
    }

    fn max_len(&self) -> usize {
        self.max_len
    }
}

/// Cuts at the last safe position inside each window.
///
/// A position is safe when it is not inside an HTML tag and it follows
/// whitespace, follows a `>` or precedes a `<`. When a window has no safe
/// position the cut falls back to the full window width; the tag state is
/// carried into the next window so a tag split that way stays uncut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryAwareChunker {
    max_len: usize,
}

impl BoundaryAwareChunker {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }

    /// Length of the next chunk taken from the front of `rest`.
    fn cut_len(&self, rest: &[char], starts_in_tag: bool) -> usize {
        if rest.len() <= self.max_len {
            return rest.len();
        }

        let mut in_tag = starts_in_tag;
        let mut best = None;
        for p in 1..=self.max_len {
            match rest[p - 1] {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ => {}
            }
            if in_tag {
                continue;
            }
            let prev = rest[p - 1];
            if prev.is_whitespace() || prev == '>' || rest[p] == '<' {
                best = Some(p);
            }
        }
        best.unwrap_or(self.max_len)
    }
}

/// Whether scanning `piece` leaves us inside a tag.
fn tag_open_after(piece: &[char], starts_in_tag: bool) -> bool {
    piece.iter().fold(starts_in_tag, |in_tag, c| match c {
        '<' => true,
        '>' => false,
        _ => in_tag,
    })
}

impl Default for BoundaryAwareChunker {
    fn default() -> Self {
        Self::new(MAX_BLOCK_LEN)
    }
}

impl ChunkStrategy for BoundaryAwareChunker {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut in_tag = false;
        while start < chars.len() {
            let len = self.cut_len(&chars[start..], in_tag);
            let piece = &chars[start..start + len];
            in_tag = tag_open_after(piece, in_tag);
            chunks.push(piece.iter().collect());
            start += len;
        }
        log::trace!(
            "boundary-aware split of {} chars into {} chunk(s)",
            chars.len(),
            chunks.len()
        );
        chunks
    }

    fn max_len(&self) -> usize {
        self.max_len
    }
}

/// Splits `text` into fixed-width pieces of at most `max_len` characters.
pub fn split(text: &str, max_len: usize) -> Vec<String> {
    FixedWidthChunker::new(max_len).split(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn long_text_is_cut_into_full_width_pieces_and_a_remainder() {
        let text = "a".repeat(300);
        let chunks = split(&text, 255);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 255);
        assert_eq!(chunks[1].len(), 45);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split("", 255).is_empty());
    }

    #[test]
    fn text_exactly_at_limit_is_one_chunk() {
        let text = "b".repeat(255);
        assert_eq!(split(&text, 255), vec![text]);
    }

    #[test]
    fn lengths_are_counted_in_chars_not_bytes() {
        let text = "가".repeat(10);
        let chunks = split(&text, 4);

        let lengths: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
        assert_eq!(lengths, vec![4, 4, 2]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn fixed_width_cuts_through_tags() {
        let chunks = split("<p>hello</p>", 5);
        assert_eq!(chunks, vec!["<p>he", "llo</", "p>"]);
    }

    #[test]
    fn zero_width_does_not_loop_forever() {
        assert_eq!(split("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn boundary_aware_never_cuts_inside_a_tag() {
        let chunker = BoundaryAwareChunker::new(10);
        let html = "<p>one two</p><p>three four five</p>";
        let chunks = chunker.split(html);

        assert_eq!(chunks.concat(), html);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10, "{chunk:?} is too long");
        }
        assert_eq!(
            chunks,
            vec!["<p>one two", "</p><p>", "three ", "four five", "</p>"]
        );
    }

    #[test]
    fn boundary_aware_prefers_whitespace() {
        let chunker = BoundaryAwareChunker::new(8);
        let chunks = chunker.split("alpha beta gamma");
        assert_eq!(chunks, vec!["alpha ", "beta ", "gamma"]);
    }

    #[test]
    fn boundary_aware_falls_back_to_hard_cut() {
        let chunker = BoundaryAwareChunker::new(4);
        let chunks = chunker.split("abcdefghij");
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn boundary_aware_remembers_a_tag_left_open_by_a_hard_cut() {
        let chunker = BoundaryAwareChunker::new(4);
        let chunks = chunker.split("<abcd ef gh>ij");
        assert_eq!(chunks, vec!["<abc", "d ef", " gh>", "ij"]);
    }
}
