//! Command representation
//!
//! One variant per letter pair. Lowercase letters are line scope,
//! uppercase letters are file scope.

use crate::pattern::CompiledPattern;

/// Every letter the parser accepts
pub const ALPHABET: &str = "sSfFgGxXoOrRuUlLtTcCaApPiIyYdD";

/// Whether a command works per line or on the whole text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Line,
    File,
}

impl Scope {
    pub fn of_letter(letter: char) -> Self {
        if letter.is_uppercase() {
            Scope::File
        } else {
            Scope::Line
        }
    }
}

/// A parsed command, ready to execute
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// s/S, and the fixed-string f/F
    Substitute {
        scope: Scope,
        pattern: CompiledPattern,
        replacement: String,
        fixed: bool,
    },

    /// g (match anywhere) / G (match whole line): keep matching lines
    Grep {
        whole_line: bool,
        pattern: CompiledPattern,
    },

    /// x (match anywhere) / X (match whole line): drop matching lines
    Exclude {
        whole_line: bool,
        pattern: CompiledPattern,
    },

    /// o/O: keep only the matched text
    Only {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// r/R: delete matched text
    Remove {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// u/U
    Upper {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// l/L
    Lower {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// t/T: title-case every alphabetic run inside a match
    Title {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// c/C: capitalize each match as a whole
    Capitalize {
        scope: Scope,
        pattern: CompiledPattern,
    },

    /// a (new lines after the last line) / A (raw text after the last character)
    Append {
        scope: Scope,
        content: String,
    },

    /// p (new lines before the first line) / P (raw text before the first character)
    Prepend {
        scope: Scope,
        content: String,
    },

    /// i/I: insert at a line index or character offset
    Insert {
        scope: Scope,
        index: i64,
        content: String,
    },

    /// y/Y: replace `count` lines or characters starting at `start`
    Replace {
        scope: Scope,
        start: i64,
        count: i64,
        content: String,
    },

    /// d/D: delete `count` lines or characters starting at `start`
    Delete {
        scope: Scope,
        start: i64,
        count: i64,
    },
}

impl Command {
    pub fn scope(&self) -> Scope {
        match self {
            Command::Grep { .. } | Command::Exclude { .. } => Scope::Line,
            Command::Substitute { scope, .. }
            | Command::Only { scope, .. }
            | Command::Remove { scope, .. }
            | Command::Upper { scope, .. }
            | Command::Lower { scope, .. }
            | Command::Title { scope, .. }
            | Command::Capitalize { scope, .. }
            | Command::Append { scope, .. }
            | Command::Prepend { scope, .. }
            | Command::Insert { scope, .. }
            | Command::Replace { scope, .. }
            | Command::Delete { scope, .. } => *scope,
        }
    }

    /// The letter this command was written with
    pub fn letter(&self) -> char {
        let lower = match self {
            Command::Substitute { fixed: false, .. } => 's',
            Command::Substitute { fixed: true, .. } => 'f',
            Command::Grep { whole_line, .. } => return if *whole_line { 'G' } else { 'g' },
            Command::Exclude { whole_line, .. } => return if *whole_line { 'X' } else { 'x' },
            Command::Only { .. } => 'o',
            Command::Remove { .. } => 'r',
            Command::Upper { .. } => 'u',
            Command::Lower { .. } => 'l',
            Command::Title { .. } => 't',
            Command::Capitalize { .. } => 'c',
            Command::Append { .. } => 'a',
            Command::Prepend { .. } => 'p',
            Command::Insert { .. } => 'i',
            Command::Replace { .. } => 'y',
            Command::Delete { .. } => 'd',
        };
        match self.scope() {
            Scope::Line => lower,
            Scope::File => lower.to_ascii_uppercase(),
        }
    }

    /// The pattern this command matches with, if any
    pub fn pattern(&self) -> Option<&CompiledPattern> {
        match self {
            Command::Substitute { pattern, .. }
            | Command::Grep { pattern, .. }
            | Command::Exclude { pattern, .. }
            | Command::Only { pattern, .. }
            | Command::Remove { pattern, .. }
            | Command::Upper { pattern, .. }
            | Command::Lower { pattern, .. }
            | Command::Title { pattern, .. }
            | Command::Capitalize { pattern, .. } => Some(pattern),
            Command::Append { .. }
            | Command::Prepend { .. }
            | Command::Insert { .. }
            | Command::Replace { .. }
            | Command::Delete { .. } => None,
        }
    }
}
