//! Collapses single-declaration rule blocks onto one line.
//!
//! The pattern is line oriented and deliberately not a CSS parser: a block
//! only matches when its body holds exactly one `;`-terminated declaration
//! and no braces, so multi-declaration rules and nested blocks are never
//! touched.

use crate::options::{FormatOptions, DEFAULT_MAX_LINE_LENGTH};
use crate::style::compact;
use crate::style::rule_candidate::RuleCandidate;
use crate::text::text_block::LineEnding;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `<indent><selector> {<ws><declaration>;<ws>}` followed by line breaks.
///
/// `R` keeps `.` and the line anchors from treating `\r` as content.
static SINGLE_RULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^(\s*)(\S.*)\s+\{\s*([^{};]+;)\s*\}((?:\r?\n)+)")
        .expect("failed to compile single rule regex")
});

/// Rewrites every matching rule to `<indent><selector> { <declaration> }`
/// plus two line endings, unless that would exceed `max_line_length`.
pub fn collapse(css: &str, line_ending: LineEnding, max_line_length: usize) -> String {
    SINGLE_RULE_RE
        .replace_all(css, |caps: &Captures<'_>| {
            let Some(candidate) = RuleCandidate::from_captures(caps) else {
                return caps[0].to_string();
            };
            let len = candidate.collapsed_len(line_ending);
            if len > max_line_length {
                debug!(
                    "keeping `{}` on several lines ({} > {} chars)",
                    candidate.selector, len, max_line_length
                );
                return caps[0].to_string();
            }
            trace!("collapsed `{}`", candidate);
            candidate.one_line(line_ending)
        })
        .into_owned()
}

/// Collapses single-declaration rules, then removes the blank lines the
/// collapse leaves between neighbouring one-liners.
pub fn collapse_single_rules(css: &str, line_ending: LineEnding) -> String {
    compact::remove_blank_lines_between_one_liners(&collapse(
        css,
        line_ending,
        DEFAULT_MAX_LINE_LENGTH,
    ))
}

/// Same as [`collapse_single_rules`] with the line ending and threshold
/// taken from `opts`.
pub fn collapse_single_rules_with(css: &str, opts: &FormatOptions) -> String {
    compact::remove_blank_lines_between_one_liners(&collapse(
        css,
        opts.line_ending,
        opts.max_line_length,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapse_preserves_indentation() {
        let input = "\t.foo {\n\t\tcolor: red;\n\t}\n";
        assert_eq!(
            collapse_single_rules(input, LineEnding::Lf),
            "\t.foo { color: red; }\n\n"
        );
    }

    #[test]
    fn test_collapse_adjacent_rules() {
        let input = "\n\t\t\t\t.foo {\n\t\t\t\t\tcolor: red;\n\t\t\t\t}\n\t\t\t\t.bar {\n\t\t\t\t\tbackground: blue;\n\t\t\t\t}\n\t\t\t";
        let expected = "\n\t\t\t\t.foo { color: red; }\n\t\t\t\t.bar { background: blue; }\n\n\t\t\t";
        assert_eq!(collapse_single_rules(input, LineEnding::Lf), expected);
    }

    #[test]
    fn test_multi_declaration_rule_untouched() {
        let input = "\t.foo {\n\t\tcolor: red;\n\t\tbackground: blue;\n\t}\n";
        assert_eq!(collapse(input, LineEnding::Lf, DEFAULT_MAX_LINE_LENGTH), input);
    }

    #[test]
    fn test_nested_block_only_inner_rule_collapses() {
        let input = "@media print {\n  .a {\n    display: none;\n  }\n}\n";
        assert_eq!(
            collapse_single_rules(input, LineEnding::Lf),
            "@media print {\n  .a { display: none; }\n}\n"
        );
    }

    #[test]
    fn test_crlf_input_and_output() {
        let input = "  .foo {\r\n    color: red;\r\n  }\r\n";
        assert_eq!(
            collapse(input, LineEnding::CrLf, DEFAULT_MAX_LINE_LENGTH),
            "  .foo { color: red; }\r\n\r\n"
        );
    }

    #[test]
    fn test_length_guard_keeps_original_text() {
        let input = "  .a-rather-long-selector-name {\n    color: red;\n  }\n";
        // "  .a-rather-long-selector-name { color: red; }" is 46 chars + "\n\n"
        assert_eq!(collapse(input, LineEnding::Lf, 47), input);
        assert_eq!(
            collapse(input, LineEnding::Lf, 48),
            "  .a-rather-long-selector-name { color: red; }\n\n"
        );
    }

    #[test]
    fn test_no_match_is_identity() {
        let input = "body {\n}\n/* nothing to do */\n";
        assert_eq!(collapse_single_rules(input, LineEnding::Lf), input);
    }

    #[test]
    fn test_options_threshold_is_used() {
        let input = ".foo {\n  color: red;\n}\n";
        let opts = FormatOptions::new().with_max_line_length(10);
        assert_eq!(collapse_single_rules_with(input, &opts), input);
    }
}
