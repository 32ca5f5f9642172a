//! Command parser
//!
//! A raw command is a letter, a delimiter, and delimiter-separated fields,
//! e.g. `s/pattern/replacement/` or `S:this:that`. The delimiter is whatever
//! character follows the letter. Trailing content fields run to the end of
//! the string, so they may contain the delimiter and embedded newlines.

use crate::command::{ALPHABET, Command, Scope};
use crate::error::{PedError, Result};
use crate::options::MatchOptions;
use crate::pattern::{self, Anchoring, CompiledPattern};

/// Parser bound to the options patterns are compiled with
pub struct Parser<'o> {
    options: &'o MatchOptions,
}

/// A raw command split into letter, delimiter and the text after the delimiter
struct RawCommand<'a> {
    source: &'a str,
    letter: char,
    delimiter: char,
    body: &'a str,
}

impl<'a> RawCommand<'a> {
    fn split(source: &'a str) -> Result<Self> {
        let mut chars = source.chars();
        let letter = chars
            .next()
            .filter(|c| ALPHABET.contains(*c))
            .ok_or_else(|| PedError::unknown_command(source))?;
        let delimiter = chars
            .next()
            .ok_or_else(|| PedError::malformed(source, "missing delimiter after command letter"))?;

        Ok(Self {
            source,
            letter,
            delimiter,
            body: chars.as_str(),
        })
    }

    /// Split the body into at most `n` fields; the last one keeps any delimiters
    fn fields(&self, n: usize) -> Vec<&'a str> {
        self.body.splitn(n, self.delimiter).collect()
    }

    fn number(&self, field: Option<&str>, name: &str) -> Result<i64> {
        let field = field.ok_or_else(|| PedError::malformed(self.source, format!("missing {}", name)))?;
        field.trim().parse::<i64>().map_err(|_| {
            PedError::malformed(
                self.source,
                format!("{} must be an integer, got '{}'", name, field),
            )
        })
    }
}

impl<'o> Parser<'o> {
    pub fn new(options: &'o MatchOptions) -> Self {
        Self { options }
    }

    /// Parse every command before any of them runs
    pub fn parse_all<S: AsRef<str>>(&self, commands: &[S]) -> Result<Vec<Command>> {
        commands.iter().map(|raw| self.parse(raw.as_ref())).collect()
    }

    /// Parse a single raw command
    pub fn parse(&self, source: &str) -> Result<Command> {
        let raw = RawCommand::split(source)?;
        let scope = Scope::of_letter(raw.letter);

        let command = match raw.letter {
            's' | 'S' | 'f' | 'F' => {
                let fixed = raw.letter.eq_ignore_ascii_case(&'f');
                let fields = raw.fields(3);
                Command::Substitute {
                    scope,
                    pattern: self.compile(fields[0], fixed, Anchoring::Anywhere)?,
                    replacement: fields.get(1).copied().unwrap_or_default().to_string(),
                    fixed,
                }
            }
            'g' | 'G' => {
                let whole_line = raw.letter == 'G';
                Command::Grep {
                    whole_line,
                    pattern: self.filter_pattern(&raw, whole_line)?,
                }
            }
            'x' | 'X' => {
                let whole_line = raw.letter == 'X';
                Command::Exclude {
                    whole_line,
                    pattern: self.filter_pattern(&raw, whole_line)?,
                }
            }
            'o' | 'O' => Command::Only {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            'r' | 'R' => Command::Remove {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            'u' | 'U' => Command::Upper {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            'l' | 'L' => Command::Lower {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            't' | 'T' => Command::Title {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            'c' | 'C' => Command::Capitalize {
                scope,
                pattern: self.leading_pattern(&raw)?,
            },
            'a' | 'A' => Command::Append {
                scope,
                content: raw.body.to_string(),
            },
            'p' | 'P' => Command::Prepend {
                scope,
                content: raw.body.to_string(),
            },
            'i' | 'I' => {
                let fields = raw.fields(2);
                Command::Insert {
                    scope,
                    index: raw.number(fields.first().copied(), "index")?,
                    content: fields.get(1).copied().unwrap_or_default().to_string(),
                }
            }
            'y' | 'Y' => {
                let fields = raw.fields(3);
                Command::Replace {
                    scope,
                    start: raw.number(fields.first().copied(), "start")?,
                    count: raw.number(fields.get(1).copied(), "count")?,
                    content: fields.get(2).copied().unwrap_or_default().to_string(),
                }
            }
            'd' | 'D' => {
                // A third field is accepted and ignored.
                let fields = raw.fields(3);
                Command::Delete {
                    scope,
                    start: raw.number(fields.first().copied(), "start")?,
                    count: raw.number(fields.get(1).copied(), "count")?,
                }
            }
            _ => return Err(PedError::unknown_command(source)),
        };

        tracing::debug!(
            command = source,
            letter = %command.letter(),
            scope = ?command.scope(),
            "parsed command"
        );
        Ok(command)
    }

    fn compile(&self, source: &str, fixed: bool, anchoring: Anchoring) -> Result<CompiledPattern> {
        pattern::compile(source, self.options, fixed, anchoring)
    }

    /// The first field, compiled; anything after a second delimiter is ignored
    fn leading_pattern(&self, raw: &RawCommand<'_>) -> Result<CompiledPattern> {
        let fields = raw.fields(2);
        self.compile(fields[0], false, Anchoring::Anywhere)
    }

    fn filter_pattern(&self, raw: &RawCommand<'_>, whole_line: bool) -> Result<CompiledPattern> {
        let fields = raw.fields(2);
        let anchoring = if whole_line {
            Anchoring::Whole
        } else {
            Anchoring::Anywhere
        };
        self.compile(fields[0], false, anchoring)
    }
}
