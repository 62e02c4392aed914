//! Report characters that are unusual in LaTeX sources.
//!
//! Nothing here is an error: the findings are shown to the user so they can
//! check for stray Unicode punctuation, invisible spaces and the like.

use crate::config::SAFE_WHITESPACE;

/// A character outside the safe set and the line it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub ch: char,
    /// 1-based line number
    pub line: usize,
}

impl Finding {
    pub fn code_point(&self) -> String {
        code_point(self.ch)
    }
}

/// Whether `ch` is plain printable ASCII or ordinary whitespace.
pub fn is_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch.is_ascii_punctuation() || SAFE_WHITESPACE.contains(&ch)
}

/// Every unsafe character in `text`, in order of appearance.
pub fn scan(text: &str) -> Vec<Finding> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.chars()
                .filter(|&ch| !is_safe(ch))
                .map(move |ch| Finding {
                    ch,
                    line: index + 1,
                })
        })
        .collect()
}

/// Format a code point as `U+XXXX`.
pub fn code_point(ch: char) -> String {
    format!("U+{:04X}", u32::from(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_source_is_clean() {
        assert!(scan("\\section{Intro}\r\n\tSee Fig.~\\ref{a} -- 100\\%.\n").is_empty());
    }

    #[test]
    fn findings_carry_line_numbers() {
        let findings = scan("caf\u{e9}\nok\n\u{2014} and\u{a0}x");
        assert_eq!(
            findings,
            vec![
                Finding { ch: '\u{e9}', line: 1 },
                Finding { ch: '\u{2014}', line: 3 },
                Finding { ch: '\u{a0}', line: 3 },
            ]
        );
    }

    #[test]
    fn control_characters_are_reported() {
        let findings = scan("a\u{b}b\u{c}");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].code_point(), "U+000B");
    }

    #[test]
    fn code_points_are_padded_and_uppercase() {
        assert_eq!(code_point('\u{e9}'), "U+00E9");
        assert_eq!(code_point('\u{2013}'), "U+2013");
        assert_eq!(code_point('\u{1F600}'), "U+1F600");
    }
}
