use crate::layout_indent;
use crate::options::{FormatOptions, IndentMode, Language};
use crate::parser::html;
use crate::style::{attribute_split, collapse};

pub mod one_liner {
    use super::*;
    use log::debug;

    /// CSS document: collapse, compact, then turn leading spaces into tabs.
    pub fn format_css(css: &str, opts: &FormatOptions) -> String {
        let collapsed = collapse_stylesheet(css, opts);
        if opts.normalize_indentation {
            layout_indent::normalize_indentation(&collapsed, IndentMode::Css, None)
        } else {
            collapsed
        }
    }

    /// HTML document: collapse the body of every `<style>` element, then
    /// remove the container tag's indentation from the whole document.
    pub fn format_html(html_content: &str, opts: &FormatOptions) -> String {
        let mut regions = 0;
        let rewritten = html::replace_style_regions(html_content, |css| {
            regions += 1;
            collapse_stylesheet(css, opts)
        });
        debug!("rewrote {} <style> region(s)", regions);

        if opts.normalize_indentation {
            layout_indent::normalize_indentation(
                &rewritten,
                IndentMode::Html,
                Some(&opts.container_tag),
            )
        } else {
            rewritten
        }
    }

    pub fn format_document(text: &str, language: Language, opts: &FormatOptions) -> String {
        match language {
            Language::Css => format_css(text, opts),
            Language::Html => format_html(text, opts),
        }
    }

    fn collapse_stylesheet(css: &str, opts: &FormatOptions) -> String {
        if opts.split_attributes {
            let split = attribute_split::split_attribute_selectors(css);
            collapse::collapse_single_rules_with(&split, opts)
        } else {
            collapse::collapse_single_rules_with(css, opts)
        }
    }
}
