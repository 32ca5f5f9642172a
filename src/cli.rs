use crate::config::Config;
use crate::file_processor::Source;
use crate::options::{MatchOptions, SubLimit};
use crate::pipeline::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ped")]
#[command(about = "Pipeline text editor: apply single-letter commands to a file or stdin")]
#[command(long_about = "ped reads text from a file or standard input and applies an ordered
list of commands to it, printing the result (or writing it back in place).

A command is a letter, a delimiter, and delimiter-separated fields. Lowercase
letters work line by line; uppercase letters work on the whole text.

COMMANDS:
  s/pat/rep   S/pat/rep    substitute (f/F: fixed-string substitute)
  g/pat       G/pat        keep lines matching anywhere / matching whole line
  x/pat       X/pat        drop lines matching anywhere / matching whole line
  o/pat       O/pat        keep only the matched text
  r/pat       R/pat        remove matched text
  u l t c     U L T C      upper / lower / title / capitalize matched text
  a/text      A/text       append lines / raw text
  p/text      P/text       prepend lines / raw text
  i/N/text    I/N/text     insert at line N / character N
  y/N/C/text  Y/N/C/text   replace C lines / characters starting at N
  d/N/C       D/N/C        delete C lines / characters starting at N

Negative indices count back from the end; out-of-range indices are clamped.

EXAMPLES:
  ped -f notes.txt 's/colour/color/'
  cat log.txt | ped 'g/ERROR' 'o/code=\\d+'
  ped -e -b ~/backups -f config.ini 'S:old_host:new_host'
  ped -f list.txt 'i/0/# header' 'd/-1/1'")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Commands to apply, in order
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<String>,

    /// Read this file instead of standard input
    #[arg(short = 'f', long = "filepath", value_name = "PATH")]
    pub filepath: Option<PathBuf>,

    /// Write the result back to --filepath
    #[arg(short = 'e', long = "in-place", requires = "filepath")]
    pub in_place: bool,

    /// Copy the original into DIR before an in-place edit
    #[arg(short = 'b', long = "backup-path", value_name = "DIR")]
    pub backup_path: Option<PathBuf>,

    /// Case-insensitive matching
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// '.' also matches newlines
    #[arg(short = 'd', long = "dotall")]
    pub dotall: bool,

    /// '^' and '$' match at line boundaries
    #[arg(short = 'm', long = "multiline")]
    pub multiline: bool,

    /// '\s' only matches ASCII whitespace
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,

    /// Treat every pattern as a fixed string
    #[arg(short = 'F', long = "fixed")]
    pub fixed: bool,

    /// Maximum number of substitutions per command
    #[arg(short = 'M', long = "max-sub", value_name = "N")]
    pub max_sub: Option<usize>,

    /// Maximum number of substitutions per line
    #[arg(short = 'L', long = "line-max-sub", value_name = "N")]
    pub line_max_sub: Option<usize>,

    /// Terminate the input with a line ending before running commands
    #[arg(short = 'n', long = "normalize")]
    pub normalize: bool,

    /// Never append a trailing line ending
    #[arg(short = 'Z', long = "no-eof")]
    pub no_eof: bool,

    /// Line ending used to join lines and terminate output
    #[arg(long = "line-ending", value_name = "STR")]
    pub line_ending: Option<String>,

    /// Write debug logs to ~/.ped/ped.log
    #[arg(long)]
    pub debug: bool,

    /// Write a commented config template to the config path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

/// Everything one invocation needs, after merging flags with config
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub commands: Vec<String>,
    pub source: Source,
    pub in_place: bool,
    pub backup_dir: Option<PathBuf>,
    pub match_options: MatchOptions,
    pub render: RenderOptions,
    pub debug: bool,
    pub init_config: bool,
}

impl Args {
    /// Merge flags onto config values; flags only ever switch options on
    pub fn from_cli(cli: Cli, config: &Config) -> Self {
        let matching = &config.matching;
        let match_options = MatchOptions {
            ignore_case: cli.ignore_case || matching.ignore_case,
            dot_all: cli.dotall || matching.dot_all,
            multiline: cli.multiline || matching.multiline,
            ascii_whitespace: cli.ascii || matching.ascii,
            literal: cli.fixed || matching.fixed,
            max_sub_total: SubLimit::from_option(cli.max_sub),
            max_sub_per_line: SubLimit::from_option(cli.line_max_sub),
        };

        let render = RenderOptions {
            line_ending: cli
                .line_ending
                .unwrap_or_else(|| config.output.line_ending.clone()),
            normalize: cli.normalize || config.output.normalize,
            no_eof: cli.no_eof || config.output.no_eof,
        };

        let backup_dir = cli
            .backup_path
            .or_else(|| config.backup.backup_dir.as_ref().map(PathBuf::from));

        let source = match cli.filepath {
            Some(path) => Source::File(path),
            None => Source::Stdin,
        };

        Self {
            commands: cli.commands,
            source,
            in_place: cli.in_place,
            backup_dir,
            match_options,
            render,
            debug: cli.debug || config.logging.debug,
            init_config: cli.init_config,
        }
    }
}

pub fn parse_args(config: &Config) -> Args {
    Args::from_cli(Cli::parse(), config)
}
