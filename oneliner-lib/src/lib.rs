//! Re-collapses short CSS rules after a generic pretty-printer has spread
//! them over several lines.
//!
//! Every pass is a pure `&str -> String` rewrite; nothing is shared between
//! calls, so documents can be formatted from as many threads as needed.
//!
//! - [`collapse_single_rules`]: single-declaration rules onto one line, then
//!   [`remove_blank_lines_between_one_liners`]
//! - [`split_attribute_selectors`]: one `[attr]` group per line
//! - [`normalize_indentation`]: spaces to tabs (CSS) or container de-indent (HTML)
//! - [`one_liner`]: the whole pipeline for CSS and HTML documents

pub mod layout_indent;
pub mod options;
pub mod pipeline;
pub mod text;

pub mod parser {
    pub mod html;
}

pub mod style {
    pub mod attribute_split;
    pub mod collapse;
    pub mod compact;
    pub mod rule_candidate;
}

pub use layout_indent::normalize_indentation;
pub use options::{
    FormatOptions, IndentMode, Language, DEFAULT_CONTAINER_TAG, DEFAULT_MAX_LINE_LENGTH,
    LEGACY_MAX_LINE_LENGTH,
};
pub use parser::html::replace_style_regions;
pub use pipeline::one_liner;
pub use style::attribute_split::split_attribute_selectors;
pub use style::collapse::{collapse_single_rules, collapse_single_rules_with};
pub use style::compact::remove_blank_lines_between_one_liners;
pub use text::text_block::LineEnding;
