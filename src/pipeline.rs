//! Pipeline: parse every command, then fold them over the input text
//!
//! Rendering depends on the form the text is left in. After a line-scope
//! command the output is rebuilt from lines and gets a trailing line ending;
//! after a file-scope command (or no command at all) the text is written as is.
//! Normalization happens before the fold: the input is terminated first, so
//! commands that touch the end of the text see the line ending.

use std::borrow::Cow;

use crate::command::Command;
use crate::error::Result;
use crate::executor::{self, Text};
use crate::options::MatchOptions;
use crate::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Line,
    Raw,
}

/// Trailing-terminator policy applied when rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Joins lines in line mode; appended as the terminator
    pub line_ending: String,
    /// Make sure the input ends with one line ending before any command runs
    pub normalize: bool,
    /// Never append a trailing line ending; wins over `normalize`
    pub no_eof: bool,
}

impl RenderOptions {
    /// The input as the first command sees it
    ///
    /// With `normalize` (and without `no_eof`) an unterminated input gets one
    /// line ending; input that already ends with it is left alone.
    pub fn prepare_input<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.normalize && !self.no_eof && !input.ends_with(self.line_ending.as_str()) {
            Cow::Owned(format!("{}{}", input, self.line_ending))
        } else {
            Cow::Borrowed(input)
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_ending: "\n".to_string(),
            normalize: false,
            no_eof: false,
        }
    }
}

/// Result of running a pipeline, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    text: Text,
}

impl Output {
    pub fn mode(&self) -> RenderMode {
        if self.text.is_lines() {
            RenderMode::Line
        } else {
            RenderMode::Raw
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn render(self, options: &RenderOptions) -> String {
        match self.text {
            Text::Raw(text) => text,
            lines @ Text::Lines(_) => {
                let lines = lines.into_lines();
                if lines.is_empty() {
                    return String::new();
                }
                let mut text = lines.join(&options.line_ending);
                if !options.no_eof {
                    text.push_str(&options.line_ending);
                }
                text
            }
        }
    }
}

/// An ordered list of parsed commands and the options they run under
#[derive(Debug, Clone)]
pub struct Pipeline {
    commands: Vec<Command>,
    options: MatchOptions,
}

impl Pipeline {
    /// Parse every raw command; fails before any text is touched
    pub fn parse<S: AsRef<str>>(commands: &[S], options: MatchOptions) -> Result<Self> {
        let commands = Parser::new(&options).parse_all(commands)?;
        Ok(Self { commands, options })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Fold the commands over `input`, left to right
    pub fn run(&self, input: &str) -> Output {
        let text = self
            .commands
            .iter()
            .fold(Text::Raw(input.to_string()), |text, command| {
                executor::apply(command, text, &self.options)
            });
        Output { text }
    }

    /// Prepare `input`, run every command and render the result
    pub fn process(&self, input: &str, render: &RenderOptions) -> String {
        self.run(&render.prepare_input(input)).render(render)
    }
}

/// Parse, run and render in one step
pub fn transform<S: AsRef<str>>(
    input: &str,
    commands: &[S],
    options: MatchOptions,
    render: &RenderOptions,
) -> Result<String> {
    let pipeline = Pipeline::parse(commands, options)?;
    Ok(pipeline.process(input, render))
}
