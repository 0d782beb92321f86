use serde::{Deserialize, Serialize};

use super::ContentBlock;

/// Title used when a post is published with a blank title ("untitled").
pub const UNTITLED_TITLE: &str = "제목 없음";

/// A post as sent to the blog API on publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub contents: Vec<ContentBlock>,
}

impl Post {
    /// Builds a post, trimming the title and substituting `untitled` when it is blank.
    pub fn new(title: &str, contents: Vec<ContentBlock>, untitled: &str) -> Self {
        let title = match title.trim() {
            "" => untitled.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self { title, contents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let post = Post::new("  Hello  ", vec![], UNTITLED_TITLE);
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn blank_title_falls_back_to_untitled() {
        let post = Post::new(" \n\t ", vec![], UNTITLED_TITLE);
        assert_eq!(post.title, "제목 없음");
    }
}
