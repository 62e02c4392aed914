//! Configuration constants and options for latex-typograph.

use std::path::PathBuf;

/// The LaTeX tie: renders as a space but forbids a line break.
pub const NBSP: char = '~';

/// Horizontal whitespace that the passes collapse.
pub const HSPACE: &str = r"[ \t]+";

/// Dash tokens recognized by the dash pass, longest first.
pub const DASHES: [&str; 4] = ["---", "--", "\u{2013}", "\u{2014}"];

/// Minimum width of the numeric suffix in generated output names.
pub const SUFFIX_WIDTH: usize = 2;

/// Whitespace characters that are accepted by the charset report.
pub const SAFE_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// A reference command together with the words that may abbreviate its
/// referent and the characters that may open its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefCommand {
    pub name: &'static str,
    pub shorthands: &'static [&'static str],
    pub delimiters: &'static [char],
}

/// Reference commands in the order the passes visit them.
pub static REF_COMMANDS: [RefCommand; 4] = [
    RefCommand {
        name: "ref",
        shorthands: &["Figs", "Fig", "Refs", "Ref", "Eqs", "Eq", "Sec"],
        delimiters: &['{'],
    },
    RefCommand {
        name: "pageref",
        shorthands: &["pp", "p"],
        delimiters: &['{'],
    },
    RefCommand {
        name: "eqref",
        shorthands: &["Eqs", "Eq"],
        delimiters: &['{'],
    },
    RefCommand {
        name: "cite",
        shorthands: &["Refs", "Ref"],
        delimiters: &['{', '['],
    },
];

/// Command-line options
#[derive(Debug, Clone)]
pub struct Options {
    /// Explicit output path, only meaningful with a single input
    pub output: Option<PathBuf>,
    /// Print the result instead of writing a file
    pub stdout: bool,
    /// Report characters outside the safe set
    pub charset_check: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: None,
            stdout: false,
            charset_check: true,
        }
    }
}

impl Options {
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn with_charset_check(mut self, enabled: bool) -> Self {
        self.charset_check = enabled;
        self
    }
}
