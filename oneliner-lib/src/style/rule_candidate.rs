// src/style/rule_candidate.rs (one match of the single-rule pattern, kept apart from the collapser)
use crate::text::text_block::LineEnding;
use regex::Captures;
use std::fmt;

/// A single-declaration rule found by the collapsing pattern.
///
/// Borrowed from the text being rewritten; lives only for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCandidate<'a> {
    /// Whitespace before the selector. May include blank lines above the rule.
    pub indent: &'a str,
    /// e.g. ".foo", "a:hover > span"
    pub selector: &'a str,
    /// The lone declaration including its `;`, e.g. "color: red;"
    pub declaration: &'a str,
    /// Line breaks consumed after the closing brace.
    pub trailing: &'a str,
}

impl<'a> RuleCandidate<'a> {
    /// Builds a candidate from the four groups of the single-rule pattern.
    pub fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(RuleCandidate {
            indent: caps.get(1)?.as_str(),
            selector: caps.get(2)?.as_str(),
            declaration: caps.get(3)?.as_str(),
            trailing: caps.get(4)?.as_str(),
        })
    }

    /// `<indent><selector> { <declaration> }` followed by two line endings.
    pub fn one_line(&self, line_ending: LineEnding) -> String {
        let eol = line_ending.as_str();
        format!("{}{}{}{}", self.indent, self, eol, eol)
    }

    /// Character count of the collapsed output line plus its two line endings.
    ///
    /// Blank lines swallowed by the indent are not part of the line and are
    /// not counted.
    pub fn collapsed_len(&self, line_ending: LineEnding) -> usize {
        let last_line_indent = match self.indent.rfind('\n') {
            Some(pos) => &self.indent[pos + 1..],
            None => self.indent,
        };
        last_line_indent.chars().count()
            + self.to_string().chars().count()
            + 2 * line_ending.as_str().len()
    }
}

impl fmt::Display for RuleCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {} }}", self.selector, self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate<'a>(indent: &'a str, selector: &'a str, declaration: &'a str) -> RuleCandidate<'a> {
        RuleCandidate {
            indent,
            selector,
            declaration,
            trailing: "\n",
        }
    }

    #[test]
    fn test_one_line_uses_requested_line_ending() {
        let rule = candidate("\t", ".foo", "color: red;");
        assert_eq!(rule.one_line(LineEnding::Lf), "\t.foo { color: red; }\n\n");
        assert_eq!(
            rule.one_line(LineEnding::CrLf),
            "\t.foo { color: red; }\r\n\r\n"
        );
    }

    #[test]
    fn test_collapsed_len_ignores_blank_lines_in_indent() {
        let plain = candidate("  ", ".a", "x: 1;");
        let padded = candidate("\n\n  ", ".a", "x: 1;");
        // "  .a { x: 1; }" is 14 chars, plus "\n\n"
        assert_eq!(plain.collapsed_len(LineEnding::Lf), 16);
        assert_eq!(padded.collapsed_len(LineEnding::Lf), 16);
        assert_eq!(plain.collapsed_len(LineEnding::CrLf), 18);
    }
}
