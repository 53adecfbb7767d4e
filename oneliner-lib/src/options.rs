use crate::text::text_block::LineEnding;

/// Longest collapsed rule (indent, rule text and both trailing line endings)
/// that the collapser will emit.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 90;

/// Threshold used by the first release of the collapser.
pub const LEGACY_MAX_LINE_LENGTH: usize = 72;

/// Tag whose indentation is removed from HTML documents.
pub const DEFAULT_CONTAINER_TAG: &str = "head";

/// Kind of document handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Css,
    Html,
}

impl Language {
    /// Maps a file extension (without the dot, any case) to a language.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "css" => Some(Language::Css),
            "html" | "htm" => Some(Language::Html),
            _ => None,
        }
    }
}

/// Which indentation rewrite `normalize_indentation` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    /// Leading spaces become tabs, two spaces per tab.
    Css,
    /// The container tag's indentation is stripped from every line.
    Html,
}

impl From<Language> for IndentMode {
    fn from(language: Language) -> Self {
        match language {
            Language::Css => IndentMode::Css,
            Language::Html => IndentMode::Html,
        }
    }
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub line_ending: LineEnding,
    pub max_line_length: usize,
    /// HTML tag whose indentation level gets removed, e.g. `head`.
    pub container_tag: String,
    /// Run the indentation pass after collapsing.
    pub normalize_indentation: bool,
    /// Split attribute selectors onto their own lines before collapsing.
    pub split_attributes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            line_ending: LineEnding::Lf,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            normalize_indentation: true,
            split_attributes: false,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    pub fn with_normalize_indentation(mut self, enabled: bool) -> Self {
        self.normalize_indentation = enabled;
        self
    }

    pub fn with_split_attributes(mut self, enabled: bool) -> Self {
        self.split_attributes = enabled;
        self
    }
}
