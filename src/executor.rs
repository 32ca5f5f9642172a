//! Command execution
//!
//! [`apply`] runs one command against the working text. Line-scope commands
//! see the text as lines split on `\n` and leave it as lines; file-scope
//! commands see one string and leave one string. Which form the text is in
//! after the last command decides how it is rendered.

use crate::address;
use crate::command::{Command, Scope};
use crate::options::MatchOptions;
use crate::pattern::CompiledPattern;

/// The value threaded through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    /// A single character sequence
    Raw(String),
    /// Discrete lines; an element may still contain `\n` after a substitution
    Lines(Vec<String>),
}

impl Text {
    /// Line view: split on `\n`, resplitting any line that gained a newline
    ///
    /// Empty raw text has no lines, and a trailing `\n` does not start an
    /// extra empty line.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Text::Raw(text) => split_lines(&text).into_iter().map(str::to_string).collect(),
            Text::Lines(lines) => {
                if !lines.iter().any(|line| line.contains('\n')) {
                    return lines;
                }
                lines
                    .iter()
                    .flat_map(|line| line.split('\n'))
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    /// Whole-text view: lines are joined with `\n`
    pub fn into_string(self) -> String {
        match self {
            Text::Raw(text) => text,
            Text::Lines(lines) => lines.join("\n"),
        }
    }

    pub fn is_lines(&self) -> bool {
        matches!(self, Text::Lines(_))
    }
}

/// Split raw text into lines on `\n`
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

/// Apply one command to the text
pub fn apply(command: &Command, text: Text, options: &MatchOptions) -> Text {
    let result = match command {
        Command::Substitute {
            scope,
            pattern,
            replacement,
            ..
        } => substitute(*scope, pattern, replacement, text, options),

        Command::Grep {
            pattern,
            ..
        } => Text::Lines(filter_lines(text, |line| pattern.is_match(line))),

        Command::Exclude {
            pattern,
            ..
        } => Text::Lines(filter_lines(text, |line| !pattern.is_match(line))),

        Command::Only {
            scope: Scope::Line,
            pattern,
        } => Text::Lines(
            text.into_lines()
                .iter()
                .filter_map(|line| only_matches(pattern, line))
                .collect(),
        ),
        Command::Only {
            scope: Scope::File,
            pattern,
        } => {
            let text = text.into_string();
            Text::Raw(only_matches(pattern, &text).unwrap_or_default())
        }

        Command::Remove { scope, pattern } => {
            map_scope(*scope, text, |s| rewrite_matches(pattern, s, None, |_| String::new()).0)
        }
        Command::Upper { scope, pattern } => {
            map_scope(*scope, text, |s| rewrite_matches(pattern, s, None, str::to_uppercase).0)
        }
        Command::Lower { scope, pattern } => {
            map_scope(*scope, text, |s| rewrite_matches(pattern, s, None, str::to_lowercase).0)
        }
        Command::Title { scope, pattern } => {
            map_scope(*scope, text, |s| rewrite_matches(pattern, s, None, title_case).0)
        }
        Command::Capitalize { scope, pattern } => {
            map_scope(*scope, text, |s| rewrite_matches(pattern, s, None, capitalize).0)
        }

        Command::Append {
            scope: Scope::Line,
            content,
        } => {
            let mut lines = text.into_lines();
            lines.extend(content_lines(content));
            Text::Lines(lines)
        }
        Command::Append {
            scope: Scope::File,
            content,
        } => {
            let mut text = text.into_string();
            text.push_str(content);
            Text::Raw(text)
        }

        Command::Prepend {
            scope: Scope::Line,
            content,
        } => {
            let mut lines = content_lines(content);
            lines.extend(text.into_lines());
            Text::Lines(lines)
        }
        Command::Prepend {
            scope: Scope::File,
            content,
        } => Text::Raw(format!("{}{}", content, text.into_string())),

        Command::Insert {
            scope: Scope::Line,
            index,
            content,
        } => {
            let mut lines = text.into_lines();
            let at = address::insertion_point(*index, lines.len());
            lines.splice(at..at, content_lines(content));
            Text::Lines(lines)
        }
        Command::Insert {
            scope: Scope::File,
            index,
            content,
        } => {
            let mut text = text.into_string();
            let at = address::insertion_point(*index, text.chars().count());
            text.insert_str(byte_offset(&text, at), content);
            Text::Raw(text)
        }

        Command::Replace {
            scope: Scope::Line,
            start,
            count,
            content,
        } => {
            let mut lines = text.into_lines();
            let range = address::range(*start, *count, lines.len());
            lines.splice(range, content_lines(content));
            Text::Lines(lines)
        }
        Command::Replace {
            scope: Scope::File,
            start,
            count,
            content,
        } => {
            let mut text = text.into_string();
            let range = address::range(*start, *count, text.chars().count());
            let bytes = byte_offset(&text, range.start)..byte_offset(&text, range.end);
            text.replace_range(bytes, content);
            Text::Raw(text)
        }

        Command::Delete {
            scope: Scope::Line,
            start,
            count,
        } => {
            let mut lines = text.into_lines();
            let range = address::range(*start, *count, lines.len());
            lines.drain(range);
            Text::Lines(lines)
        }
        Command::Delete {
            scope: Scope::File,
            start,
            count,
        } => {
            let mut text = text.into_string();
            let range = address::range(*start, *count, text.chars().count());
            let bytes = byte_offset(&text, range.start)..byte_offset(&text, range.end);
            text.replace_range(bytes, "");
            Text::Raw(text)
        }
    };

    tracing::debug!(
        letter = %command.letter(),
        line_mode = result.is_lines(),
        "executed command"
    );
    result
}

fn content_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Byte offset of the `chars`-th character, or the end of the text
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

fn filter_lines<F>(text: Text, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    text.into_lines()
        .into_iter()
        .filter(|line| keep(line.as_str()))
        .collect()
}

/// Run `f` once per line (line scope) or once on the whole text (file scope)
fn map_scope<F>(scope: Scope, text: Text, f: F) -> Text
where
    F: Fn(&str) -> String,
{
    match scope {
        Scope::Line => Text::Lines(text.into_lines().iter().map(|line| f(line.as_str())).collect()),
        Scope::File => Text::Raw(f(&text.into_string())),
    }
}

fn substitute(
    scope: Scope,
    pattern: &CompiledPattern,
    replacement: &str,
    text: Text,
    options: &MatchOptions,
) -> Text {
    let mut used = 0usize;
    let next_limit = |used: usize| match scope {
        Scope::Line => min_limit(
            options.max_sub_per_line.remaining(0),
            options.max_sub_total.remaining(used),
        ),
        Scope::File => options.max_sub_total.remaining(used),
    };

    match scope {
        Scope::Line => {
            let lines = text
                .into_lines()
                .iter()
                .map(|line| {
                    let limit = next_limit(used);
                    let (out, count) = rewrite_matches(pattern, line, limit, |_| replacement.to_string());
                    used += count;
                    out
                })
                .collect();
            Text::Lines(lines)
        }
        Scope::File => {
            let text = text.into_string();
            let (out, _) = rewrite_matches(pattern, &text, next_limit(used), |_| replacement.to_string());
            Text::Raw(out)
        }
    }
}

fn min_limit(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(n), None) | (None, Some(n)) => Some(n),
        (None, None) => None,
    }
}

/// Rewrite up to `limit` non-overlapping matches, left to right
///
/// Returns the new text and the number of matches rewritten.
fn rewrite_matches<F>(
    pattern: &CompiledPattern,
    haystack: &str,
    limit: Option<usize>,
    mut rewrite: F,
) -> (String, usize)
where
    F: FnMut(&str) -> String,
{
    let limit = limit.unwrap_or(usize::MAX);
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;

    for found in pattern.find_iter(haystack).take(limit) {
        out.push_str(&haystack[last..found.start()]);
        out.push_str(&rewrite(found.as_str()));
        last = found.end();
        count += 1;
    }
    out.push_str(&haystack[last..]);

    (out, count)
}

/// Concatenation of every match, or `None` when nothing matched
fn only_matches(pattern: &CompiledPattern, haystack: &str) -> Option<String> {
    let mut found_any = false;
    let joined: String = pattern
        .find_iter(haystack)
        .inspect(|_| found_any = true)
        .map(|m| m.as_str())
        .collect();
    found_any.then_some(joined)
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Upper-case the first character, lower-case everything else
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
