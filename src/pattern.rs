//! Pattern compilation
//!
//! Turns a raw pattern plus [`MatchOptions`] into a reusable matcher. In
//! literal mode every character is matched verbatim; otherwise the pattern
//! is compiled with the `regex` crate.

use crate::error::{ErrorKind, PedError, Result};
use crate::options::MatchOptions;
use regex::{Matches, Regex, RegexBuilder};

/// Where a pattern has to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Anywhere inside the subject
    Anywhere,
    /// The whole subject, start to end
    Whole,
}

/// A pattern compiled once at parse time and reused for every match
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// The pattern as the user wrote it
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Non-overlapping matches, left to right
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(haystack)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.regex.as_str() == other.regex.as_str()
    }
}

/// Compile `pattern` under `options`
///
/// `force_literal` makes the pattern literal regardless of `options.literal`.
pub fn compile(
    pattern: &str,
    options: &MatchOptions,
    force_literal: bool,
    anchoring: Anchoring,
) -> Result<CompiledPattern> {
    let mut body = if force_literal || options.literal {
        regex::escape(pattern)
    } else if options.ascii_whitespace {
        ascii_whitespace_classes(pattern)
    } else {
        pattern.to_string()
    };

    if anchoring == Anchoring::Whole {
        body = format!(r"\A(?:{})\z", body);
    }

    let regex = RegexBuilder::new(&body)
        .case_insensitive(options.ignore_case)
        .dot_matches_new_line(options.dot_all)
        .multi_line(options.multiline)
        .build()
        .map_err(|err| pattern_error(pattern, &err))?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Rewrite `\s` and `\S` so they only cover ASCII whitespace
///
/// The set is space, tab, newline, carriage return and form feed; vertical
/// tab is not included. Nested classes are allowed, so the replacement is
/// valid inside `[...]` as well.
const ASCII_SPACE: &str = r"[ \t\n\r\x0C]";
const ASCII_NON_SPACE: &str = r"[^ \t\n\r\x0C]";

fn ascii_whitespace_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push_str(ASCII_SPACE),
            Some('S') => out.push_str(ASCII_NON_SPACE),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn pattern_error(pattern: &str, err: &regex::Error) -> PedError {
    let detail = err.to_string();
    let mut message = format!("Invalid pattern \"{}\"\n{}", pattern, detail);
    if let Some(hint) = suggestion(&detail) {
        message.push_str("\nSuggestion: ");
        message.push_str(hint);
    }
    PedError::new(ErrorKind::Pattern, message)
}

fn suggestion(detail: &str) -> Option<&'static str> {
    let lower = detail.to_lowercase();
    if lower.contains("repetition operator missing expression") {
        Some("A quantifier (*, +, ?, {n}) has nothing to repeat. Escape it or use --fixed.")
    } else if lower.contains("unclosed group") {
        Some("Unclosed group '(...)'. Add a closing ')'.")
    } else if lower.contains("unclosed character class") {
        Some("Unclosed character class '[...]'. Add a closing ']'.")
    } else if lower.contains("unopened group") {
        Some("Unmatched ')'. Escape it as '\\)' for a literal parenthesis.")
    } else if lower.contains("look-around") || lower.contains("lookaround") {
        Some("Look-around assertions are not supported.")
    } else if lower.contains("backreference") {
        Some("Backreferences are not supported in patterns.")
    } else {
        None
    }
}
