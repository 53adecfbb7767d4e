//! Removes blank lines between one-line rules.
//!
//! Collapsing appends an empty line after every rule it rewrites. Between two
//! one-liners, or between a one-liner and the `}` closing its block, that
//! empty line is noise; anywhere else it is kept.

use crate::text::text_block::{is_blank_line, split_terminator};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// A whole line holding one complete single-declaration rule.
static ONE_LINE_RULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\S.*\{\s*[^{};]+;\s*\}[ \t]*$").expect("failed to compile one-line rule regex")
});

/// What may follow a run of removable blank lines: another single-declaration
/// rule (its body may still span lines) or a closing brace.
static FOLLOWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?R)\A(?:\s*\S.+?\s*\{\s*[^{};]+;\s*\}|\s*\})")
        .expect("failed to compile follower regex")
});

fn is_one_line_rule(line: &str) -> bool {
    let (content, terminator) = split_terminator(line);
    !terminator.is_empty() && ONE_LINE_RULE_RE.is_match(content)
}

/// Drops the blank lines after a one-line rule when the next content is
/// another rule or a closing brace. The rule keeps its own line break.
pub fn remove_blank_lines_between_one_liners(css: &str) -> String {
    let lines: Vec<&str> = css.split_inclusive('\n').collect();
    let mut out = String::with_capacity(css.len());
    let mut offset = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        out.push_str(line);
        offset += line.len();
        i += 1;

        if !is_one_line_rule(line) {
            continue;
        }

        let mut blank_end = i;
        let mut blank_bytes = 0;
        while blank_end < lines.len() && is_blank_line(lines[blank_end]) {
            blank_bytes += lines[blank_end].len();
            blank_end += 1;
        }
        if blank_end == i {
            continue;
        }

        if FOLLOWER_RE.is_match(&css[offset + blank_bytes..]) {
            trace!("dropping {} blank line(s) after `{}`", blank_end - i, line.trim());
            offset += blank_bytes;
            i = blank_end;
        }
    }
    out
}
