//! Helpers for the HTML side of the pipeline.
//!
//! HTML is never parsed; the pipeline only needs the bodies of `<style>`
//! elements and the indentation of one container tag.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `<style ...>` through the nearest `</style>`, tags in any case.
static STYLE_REGION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("failed to compile style region regex")
});

/// Returns the body of every `<style>` element, in document order.
pub fn style_regions(html: &str) -> Vec<&str> {
    STYLE_REGION_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Replaces the body of every `<style>` element with `rewrite(body)`.
///
/// The element is written back as a bare `<style>...</style>`; attributes on
/// the original opening tag are not carried over.
pub fn replace_style_regions<F>(html: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    STYLE_REGION_RE
        .replace_all(html, |caps: &Captures<'_>| {
            format!("<style>{}</style>", rewrite(&caps[1]))
        })
        .into_owned()
}

/// Indentation in front of the first line that starts with `<tag>`.
///
/// Returns `None` if no such line exists or it is not indented.
pub fn container_indent<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let open_tag = format!("<{}>", tag);
    for line in html.split('\n') {
        let rest = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
        if rest.starts_with(&open_tag) {
            let indent = &line[..line.len() - rest.len()];
            debug!("<{}> indented by {:?}", tag, indent);
            return if indent.is_empty() { None } else { Some(indent) };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "<html>\n  <head>\n    <STYLE type=\"text/css\">\n.a{}\n    </Style>\n  </head>\n  <body><style>b{}</style></body>\n</html>\n";

    #[test]
    fn test_style_regions_are_found_case_insensitively() {
        assert_eq!(style_regions(PAGE), vec!["\n.a{}\n    ", "b{}"]);
    }

    #[test]
    fn test_replace_drops_opening_tag_attributes() {
        let out = replace_style_regions(PAGE, |css| css.trim().to_uppercase());
        assert_eq!(
            out,
            "<html>\n  <head>\n    <style>.A{}</style>\n  </head>\n  <body><style>B{}</style></body>\n</html>\n"
        );
    }

    #[test]
    fn test_container_indent() {
        assert_eq!(container_indent(PAGE, "head"), Some("  "));
        assert_eq!(container_indent(PAGE, "html"), None);
        assert_eq!(container_indent(PAGE, "main"), None);
        assert_eq!(container_indent("\t<head>\r\n", "head"), Some("\t"));
    }
}
