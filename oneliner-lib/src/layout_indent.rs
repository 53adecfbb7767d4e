use crate::options::{IndentMode, DEFAULT_CONTAINER_TAG};
use crate::parser::html::container_indent;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LEADING_SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^ +").expect("failed to compile leading spaces regex"));

/// Rewrites the indentation of a formatted document.
///
/// * `IndentMode::Css` - see [`spaces_to_tabs`].
/// * `IndentMode::Html` - see [`strip_container_indent`]; `context` names the
///   container tag and defaults to `head`.
pub fn normalize_indentation(text: &str, mode: IndentMode, context: Option<&str>) -> String {
    match mode {
        IndentMode::Css => spaces_to_tabs(text),
        IndentMode::Html => {
            strip_container_indent(text, context.unwrap_or(DEFAULT_CONTAINER_TAG))
        }
    }
}

/// Replaces each run of leading spaces with one tab per two spaces.
/// An odd trailing space is dropped.
pub fn spaces_to_tabs(text: &str) -> String {
    LEADING_SPACES_RE
        .replace_all(text, |caps: &Captures<'_>| "\t".repeat(caps[0].len() / 2))
        .into_owned()
}

/// Removes the indentation of the first `<tag>` line from the start of every
/// line that begins with it. Documents without an indented `<tag>` line are
/// returned unchanged.
pub fn strip_container_indent(html: &str, tag: &str) -> String {
    let Some(indent) = container_indent(html, tag) else {
        return html.to_string();
    };
    debug!("removing {:?} from every line", indent);

    let mut out = String::with_capacity(html.len());
    for line in html.split_inclusive('\n') {
        out.push_str(line.strip_prefix(indent).unwrap_or(line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spaces_become_half_as_many_tabs() {
        let input = ".a {\n  color: red;\n     margin: 0;\n}\n";
        assert_eq!(
            normalize_indentation(input, IndentMode::Css, None),
            ".a {\n\tcolor: red;\n\t\tmargin: 0;\n}\n"
        );
    }

    #[test]
    fn test_only_leading_spaces_change() {
        let input = "\t  a  b\n";
        assert_eq!(spaces_to_tabs(input), input);
        assert_eq!(spaces_to_tabs(" x\n"), "x\n");
    }

    #[test]
    fn test_tab_input_is_fixed_point() {
        let input = "\t.a { x: 1; }\n\t\t.b { y: 2; }\n";
        assert_eq!(spaces_to_tabs(input), input);
    }

    #[test]
    fn test_head_indent_stripped_from_every_line() {
        let input = "<html>\n\t<head>\n\t\t<title>x</title>\n\t</head>\n\t<body></body>\n</html>\n";
        assert_eq!(
            normalize_indentation(input, IndentMode::Html, None),
            "<html>\n<head>\n\t<title>x</title>\n</head>\n<body></body>\n</html>\n"
        );
    }

    #[test]
    fn test_html_without_indented_container_unchanged() {
        let input = "<html>\n<head></head>\n  <body></body>\n</html>\n";
        assert_eq!(normalize_indentation(input, IndentMode::Html, None), input);
        assert_eq!(
            normalize_indentation(input, IndentMode::Html, Some("body")),
            "<html>\n<head></head>\n<body></body>\n</html>\n"
        );
    }
}
