//! Matching options shared by every pattern-based command

/// Cap on the number of substitutions a command may perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubLimit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl SubLimit {
    pub fn from_option(limit: Option<usize>) -> Self {
        match limit {
            Some(n) => SubLimit::AtMost(n),
            None => SubLimit::Unbounded,
        }
    }

    /// How many more substitutions are allowed after `used` have been made
    pub fn remaining(self, used: usize) -> Option<usize> {
        match self {
            SubLimit::Unbounded => None,
            SubLimit::AtMost(n) => Some(n.saturating_sub(used)),
        }
    }
}

/// Flags consumed by the pattern compiler and the substitution commands
///
/// Built once per invocation and passed by reference to every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Case-insensitive comparison
    pub ignore_case: bool,
    /// `.` also matches `\n`
    pub dot_all: bool,
    /// `^` and `$` anchor at line boundaries inside the text
    pub multiline: bool,
    /// `\s` only matches ASCII whitespace
    pub ascii_whitespace: bool,
    /// Patterns are matched verbatim instead of compiled as regex
    pub literal: bool,
    /// Cap across a whole substitution command
    pub max_sub_total: SubLimit,
    /// Cap within a single line (line scope only)
    pub max_sub_per_line: SubLimit,
}
