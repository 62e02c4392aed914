//! The typograph passes.
//!
//! Each rewrite runs over the whole document and feeds the next one:
//!
//! 1. spaced dashes get a tie before them and a single space after them,
//! 2. a word, number or closing delimiter followed by whitespace and a
//!    reference command is tied to the command,
//! 3. an abbreviation such as `Fig.` or `pp.` followed by whitespace and a
//!    reference command is tied to the command.
//!
//! The `regex` crate has no lookaround, so every pattern matches a candidate
//! and a small predicate inspects the text before it. A rejected candidate
//! does not consume input: the search resumes one character after its start.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::{DASHES, HSPACE, NBSP, REF_COMMANDS, RefCommand};

/// Characters that may be tied to a directly following reference command.
const JOINABLE: &str = r"''|'|\x{201D}|\x{2019}|\\%|[A-Za-z0-9$)\]}]";

/// Characters after which a shorthand word may start.
const SHORTHAND_OPENERS: [char; 9] = [
    '\n', ' ', '\t', '[', '(', '{', '`', '\u{201C}', '\u{2018}',
];

static DASH: Lazy<Regex> = Lazy::new(|| {
    let dashes = DASHES
        .iter()
        .map(|dash| regex::escape(dash))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("{HSPACE}(?P<dash>{dashes}){HSPACE}")).expect("dash pattern is valid")
});

static COMMANDS: Lazy<Vec<CommandPatterns>> =
    Lazy::new(|| REF_COMMANDS.iter().map(CommandPatterns::new).collect());

/// Compiled patterns for one reference command.
struct CommandPatterns {
    command: &'static RefCommand,
    /// `x \ref{` where `x` is joinable
    adjacent: Regex,
    /// `Fig. \ref{`
    shorthand: Regex,
}

impl CommandPatterns {
    fn new(command: &'static RefCommand) -> Self {
        let delimiters: String = command
            .delimiters
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let invocation = format!(
            r"\\{}(?P<delim>[{}])",
            regex::escape(command.name),
            delimiters
        );
        let words = command
            .shorthands
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        let adjacent = Regex::new(&format!("(?P<join>{JOINABLE}){HSPACE}{invocation}"))
            .expect("adjacency pattern is valid");
        let shorthand = Regex::new(&format!(r"(?P<word>{words})\.{HSPACE}{invocation}"))
            .expect("shorthand pattern is valid");

        Self {
            command,
            adjacent,
            shorthand,
        }
    }

    /// Append `~\name<delim>` for the matched invocation.
    fn emit_tied(&self, caps: &Captures<'_>, out: &mut String) {
        out.push(NBSP);
        out.push('\\');
        out.push_str(self.command.name);
        out.push_str(&caps["delim"]);
    }
}

/// Outcome of running every pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typeset {
    /// The rewritten document
    pub text: String,
    /// Ties inserted before spaced dashes
    pub dashes: usize,
    /// Ties inserted between a joinable character and a reference command
    pub references: usize,
    /// Ties inserted between a shorthand word and a reference command
    pub shorthands: usize,
}

impl Typeset {
    /// Total number of substitutions across all passes.
    pub fn total(&self) -> usize {
        self.dashes + self.references + self.shorthands
    }
}

/// Rewrite `text` and return it together with the number of substitutions.
pub fn transform(text: &str) -> (String, usize) {
    let typeset = typograph(text);
    let total = typeset.total();
    (typeset.text, total)
}

/// Rewrite `text`, keeping the per-pass substitution counts.
pub fn typograph(text: &str) -> Typeset {
    let (text, dashes) = tie_dashes(text);
    let (text, references, shorthands) = tie_references(&text);

    Typeset {
        text,
        dashes,
        references,
        shorthands,
    }
}

/// Pass 1: `word -- text` becomes `word~-- text` unless the dash opens a line.
fn tie_dashes(text: &str) -> (String, usize) {
    rewrite(
        text,
        &DASH,
        |before, _| !opens_line(before),
        |caps, out| {
            out.push(NBSP);
            out.push_str(&caps["dash"]);
            out.push(' ');
        },
    )
}

/// Pass 2: every command's adjacency rewrite, then every command's shorthand
/// rewrite.
fn tie_references(text: &str) -> (String, usize, usize) {
    let mut text = text.to_owned();
    let mut references = 0;
    let mut shorthands = 0;

    for patterns in COMMANDS.iter() {
        let (next, count) = rewrite(
            &text,
            &patterns.adjacent,
            |before, caps| joinable(before, &caps["join"]),
            |caps, out| {
                out.push_str(&caps["join"]);
                patterns.emit_tied(caps, out);
            },
        );
        text = next;
        references += count;
    }

    for patterns in COMMANDS.iter() {
        let (next, count) = rewrite(
            &text,
            &patterns.shorthand,
            |before, _| opens_shorthand(before),
            |caps, out| {
                out.push_str(&caps["word"]);
                out.push('.');
                patterns.emit_tied(caps, out);
            },
        );
        text = next;
        shorthands += count;
    }

    (text, references, shorthands)
}

/// Replace every accepted, non-overlapping match of `pattern`.
///
/// `accept` sees the text preceding the candidate. When it refuses, the
/// search restarts one character after the candidate's start, so a match
/// beginning inside the refused candidate is still found.
fn rewrite<A, E>(text: &str, pattern: &Regex, accept: A, emit: E) -> (String, usize)
where
    A: Fn(&str, &Captures<'_>) -> bool,
    E: Fn(&Captures<'_>, &mut String),
{
    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;
    let mut pos = 0;
    let mut count = 0;

    while let Some(caps) = pattern.captures_at(text, pos) {
        let Some(found) = caps.get(0) else { break };
        let before = &text[..found.start()];

        if !accept(before, &caps) {
            let step = text[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            pos = found.start() + step;
            continue;
        }

        out.push_str(&text[copied..found.start()]);
        emit(&caps, &mut out);
        copied = found.end();
        pos = found.end();
        count += 1;
    }

    out.push_str(&text[copied..]);
    (out, count)
}

/// True when only spaces or tabs separate `before`'s end from a line start.
fn opens_line(before: &str) -> bool {
    let rest = before.trim_end_matches([' ', '\t']);
    rest.is_empty() || rest.ends_with('\n')
}

/// True when a letter at the end of `before` would continue a control word.
fn in_control_word(before: &str) -> bool {
    before
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .ends_with('\\')
}

fn joinable(before: &str, join: &str) -> bool {
    let prev = before.chars().next_back();
    match join {
        "''" | "\u{201D}" | ")" | "]" => !matches!(prev, Some('.' | '?' | '!')),
        "'" | "\u{2019}" => !matches!(prev, Some('.' | '?' | '!' | '\'' | '\u{2019}')),
        _ if join.starts_with(|c: char| c.is_ascii_alphabetic()) => !in_control_word(before),
        _ => true,
    }
}

fn opens_shorthand(before: &str) -> bool {
    before
        .chars()
        .next_back()
        .is_none_or(|c| SHORTHAND_OPENERS.contains(&c))
}
