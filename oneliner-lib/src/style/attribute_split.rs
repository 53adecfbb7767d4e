use crate::text::text_block::{indent_of, split_terminator, LineEnding};

/// Scanner state while walking one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any `[...]` group.
    Plain,
    /// After an unescaped `[`, waiting for its `]`.
    InBrackets,
}

/// Splits every line that contains attribute selectors so that each
/// `[...]` group starts its own line, e.g.
///
/// ```text
///   a[href][target] { }
/// ```
///
/// becomes
///
/// ```text
///   a
///   [href]
///   [target] { }
/// ```
///
/// Every produced line reuses the original line's indentation and line
/// ending. Lines without an unescaped `[` are copied unchanged. There is no
/// state across lines and no nesting: a `[` that is never closed keeps the
/// rest of the line in one fragment.
pub fn split_attribute_selectors(css: &str) -> String {
    // Only needed when the last line has no terminator of its own.
    let fallback = LineEnding::detect(css).as_str();
    let mut out = String::with_capacity(css.len());

    for line in css.split_inclusive('\n') {
        let (content, terminator) = split_terminator(line);
        let fragments = match split_line(content) {
            Some(fragments) => fragments,
            None => {
                out.push_str(line);
                continue;
            }
        };

        let indent = indent_of(content);
        let separator = if terminator.is_empty() {
            fallback
        } else {
            terminator
        };
        for (n, fragment) in fragments.iter().enumerate() {
            if n > 0 {
                out.push_str(separator);
            }
            out.push_str(indent);
            out.push_str(fragment);
        }
        out.push_str(terminator);
    }
    out
}

/// Cuts one line (without terminator) in front of every unescaped `[` that
/// opens a bracket group. Returns `None` when there is nothing to cut.
fn split_line(content: &str) -> Option<Vec<&str>> {
    let mut state = ScanState::Plain;
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut opened = false;
    let mut chars = content.char_indices();

    while let Some((pos, ch)) = chars.next() {
        match (state, ch) {
            (_, '\\') => {
                // Escaped character, never a bracket.
                chars.next();
            }
            (ScanState::Plain, '[') => {
                fragments.push(&content[start..pos]);
                start = pos;
                state = ScanState::InBrackets;
                opened = true;
            }
            (ScanState::InBrackets, ']') => {
                state = ScanState::Plain;
            }
            _ => {}
        }
    }

    if !opened {
        return None;
    }
    fragments.push(&content[start..]);

    Some(
        fragments
            .into_iter()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect(),
    )
}
