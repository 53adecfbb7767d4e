use std::fmt;

pub mod text_block {
    use super::*;

    /// The line terminator used for every line break the pipeline synthesizes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum LineEnding {
        /// `"\n"`
        #[default]
        Lf,
        /// `"\r\n"`
        CrLf,
    }

    impl LineEnding {
        pub fn as_str(self) -> &'static str {
            match self {
                LineEnding::Lf => "\n",
                LineEnding::CrLf => "\r\n",
            }
        }

        /// Picks the convention of the first line break in `text`.
        /// Text without any line break is treated as `Lf`.
        pub fn detect(text: &str) -> Self {
            match text.find('\n') {
                Some(pos) if text[..pos].ends_with('\r') => LineEnding::CrLf,
                _ => LineEnding::Lf,
            }
        }
    }

    impl fmt::Display for LineEnding {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                LineEnding::Lf => write!(f, "LF"),
                LineEnding::CrLf => write!(f, "CRLF"),
            }
        }
    }

    /// Splits a line (as yielded by `split_inclusive('\n')`) into its content
    /// and its terminator (`"\n"`, `"\r\n"` or `""` for a final unterminated line).
    pub fn split_terminator(line: &str) -> (&str, &str) {
        if let Some(content) = line.strip_suffix("\r\n") {
            (content, &line[content.len()..])
        } else if let Some(content) = line.strip_suffix('\n') {
            (content, &line[content.len()..])
        } else {
            (line, "")
        }
    }

    /// Leading spaces and tabs of a line.
    pub fn indent_of(line: &str) -> &str {
        let rest = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
        &line[..line.len() - rest.len()]
    }

    /// A terminated line holding nothing but spaces and tabs.
    pub fn is_blank_line(line: &str) -> bool {
        let (content, terminator) = split_terminator(line);
        !terminator.is_empty() && content.chars().all(|c| c == ' ' || c == '\t')
    }
}

#[cfg(test)]
mod tests {
    use super::text_block::*;

    #[test]
    fn detects_line_ending_from_first_break() {
        assert_eq!(LineEnding::detect("a {\r\n}\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a {\n}\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("no breaks"), LineEnding::Lf);
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn splits_terminators() {
        assert_eq!(split_terminator("  a;\r\n"), ("  a;", "\r\n"));
        assert_eq!(split_terminator("  a;\n"), ("  a;", "\n"));
        assert_eq!(split_terminator("  a;"), ("  a;", ""));
    }

    #[test]
    fn indent_and_blank_lines() {
        assert_eq!(indent_of("\t  .foo {"), "\t  ");
        assert_eq!(indent_of(".foo {"), "");
        assert!(is_blank_line(" \t\n"));
        assert!(is_blank_line("\r\n"));
        assert!(!is_blank_line("   "));
        assert!(!is_blank_line("  }\n"));
    }
}
