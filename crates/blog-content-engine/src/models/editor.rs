use serde::{Deserialize, Serialize};

/// Which editor surface a string belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EditorMode {
    /// The WYSIWYG editor; text is HTML.
    #[default]
    Basic,
    Markdown,
}

/// Editor contents together with the mode they should be loaded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorString {
    pub mode: EditorMode,
    pub text: String,
}

impl EditorString {
    pub fn basic(text: impl Into<String>) -> Self {
        Self {
            mode: EditorMode::Basic,
            text: text.into(),
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            mode: EditorMode::Markdown,
            text: text.into(),
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.mode == EditorMode::Markdown
    }
}
