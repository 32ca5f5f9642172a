//! End-to-end command scenarios
//!
//! Each test builds options from a command line the way the binary does,
//! then runs the pipeline over in-memory text.

use clap::Parser as _;
use ped::cli::{Args, Cli};
use ped::config::Config;
use ped::file_processor::FileProcessor;
use ped::{ErrorKind, Pipeline};

const ABCDEF: &str = "abcdef";
const ABC_DEF: &str = "abc\ndef";
const SHORT: &str = "this is a test\nof this thing here \nand you might be special.";
const SHORT_UC: &str = "THIS IS A TEST\nOF THIS THING HERE \nAND YOU MIGHT BE SPECIAL.";
const ALPHABET_TWICE: &str = "abcdefghijklmnopqrstuvwxyz\nabcdefghijklmnopqrstuvwxyz";

fn args(argv: &[&str]) -> Args {
    let cli = Cli::try_parse_from(std::iter::once("ped").chain(argv.iter().copied()))
        .expect("valid command line");
    Args::from_cli(cli, &Config::default())
}

fn try_run(argv: &[&str], input: &str) -> ped::error::Result<String> {
    let args = args(argv);
    let pipeline = Pipeline::parse(&args.commands, args.match_options)?;
    Ok(FileProcessor::new(pipeline, args.render).process_text(input))
}

fn run(argv: &[&str], input: &str) -> String {
    try_run(argv, input).expect("pipeline runs")
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_noop() {
    assert_eq!(run(&[], ABCDEF), "abcdef");
}

#[test]
fn test_noop_normalize() {
    assert_eq!(run(&["-n"], ABCDEF), "abcdef\n");
    assert_eq!(run(&["--normalize"], ABCDEF), "abcdef\n");
    assert_eq!(run(&["--no-eof", "--normalize"], ABCDEF), "abcdef");
    assert_eq!(run(&["-n"], "abcdef\n"), "abcdef\n");
    assert_eq!(run(&["-n", "S/f/F/"], "abcdef\n"), "abcdeF\n");
}

#[test]
fn test_line_ending() {
    assert_eq!(run(&["-n", "--line-ending", "\r"], ABCDEF), "abcdef\r");
    assert_eq!(run(&["-n", "--line-ending", ":"], ABCDEF), "abcdef:");
}

#[test]
fn test_delimiters() {
    assert_eq!(
        run(&["S:this:------"], "this or that, that or this"),
        "------ or that, that or ------"
    );
}

#[test]
fn test_ignore_case() {
    assert_eq!(
        run(&["-i", "s/[aeIOU]/-"], SHORT),
        "th-s -s - t-st\n-f th-s th-ng h-r- \n-nd y-- m-ght b- sp-c--l.\n"
    );
    assert_eq!(
        run(&["--ignore-case", "s/[aeiOU]/-"], SHORT_UC),
        "TH-S -S - T-ST\n-F TH-S TH-NG H-R- \n-ND Y-- M-GHT B- SP-C--L.\n"
    );
    assert_eq!(
        run(&["--ignore-case", "g/thing|SPECIAL/-"], SHORT),
        "of this thing here \nand you might be special.\n"
    );
    assert_eq!(
        run(&["g/thIS", "-i"], SHORT_UC),
        "THIS IS A TEST\nOF THIS THING HERE \n"
    );
}

#[test]
fn test_fixed() {
    let input = "#####&&&&&+++++((((()))))";
    assert_eq!(run(&["--fixed", "S/+++++/-----"], input), "#####&&&&&-----((((()))))");
    assert_eq!(run(&["-F", "S/+++++/-----"], input), "#####&&&&&-----((((()))))");
    assert_eq!(run(&["S/#+/-----"], input), "-----&&&&&+++++((((()))))");
}

#[test]
fn test_multiline() {
    assert_eq!(
        run(&["S/^/===> "], SHORT),
        "===> this is a test\nof this thing here \nand you might be special."
    );
    assert_eq!(
        run(&["-m", r"S/^\W*/===> "], SHORT),
        "===> this is a test\n===> of this thing here \n===> and you might be special."
    );
}

#[test]
fn test_dotall() {
    let input = "#####\n&&&&&\n*****\n((((()))))";
    assert_eq!(run(&["S/##.*&&/-----"], input), input);
    assert_eq!(run(&["--dotall", "S/##.*&&/-----"], input), "-----\n*****\n((((()))))");
    assert_eq!(run(&["-d", "S/##.*&&/-----"], input), "-----\n*****\n((((()))))");
}

#[test]
fn test_ascii() {
    let input = " \t\n\r\u{a0}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200a}";
    assert_eq!(run(&[r"S/\s/-"], input), "----------------");
    assert_eq!(
        run(&["--ascii", r"S/\s/-"], input),
        "----\u{a0}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200a}"
    );
}

#[test]
fn test_no_eof() {
    let input = "abcdefghi\njklmnopqrs\ntuvwxyz";
    assert_eq!(run(&["s/[aeiou]/-"], input), "-bcd-fgh-\njklmn-pqrs\nt-vwxyz\n");
    assert_eq!(run(&["--no-eof", "s/[aeiou]/-"], input), "-bcd-fgh-\njklmn-pqrs\nt-vwxyz");
    assert_eq!(run(&["-Z", "s/[aeiou]/-"], input), "-bcd-fgh-\njklmn-pqrs\nt-vwxyz");
}

#[test]
fn test_substitution_caps() {
    assert_eq!(
        run(&["s/[aeiou]/-"], ALPHABET_TWICE),
        "-bcd-fgh-jklmn-pqrst-vwxyz\n-bcd-fgh-jklmn-pqrst-vwxyz\n"
    );
    assert_eq!(
        run(&["-M", "3", "s/[aeiou]/-"], ALPHABET_TWICE),
        "-bcd-fgh-jklmnopqrstuvwxyz\nabcdefghijklmnopqrstuvwxyz\n"
    );
    assert_eq!(
        run(&["--max-sub", "8", "s/[aeiou]/-"], ALPHABET_TWICE),
        "-bcd-fgh-jklmn-pqrst-vwxyz\n-bcd-fgh-jklmnopqrstuvwxyz\n"
    );
    assert_eq!(
        run(&["-M", "6", "-L", "4", "s/[aeiou]/-"], ALPHABET_TWICE),
        "-bcd-fgh-jklmn-pqrstuvwxyz\n-bcd-fghijklmnopqrstuvwxyz\n"
    );
    assert_eq!(
        run(&["--line-max-sub", "2", "s/[aeiou]/-"], ALPHABET_TWICE),
        "-bcd-fghijklmnopqrstuvwxyz\n-bcd-fghijklmnopqrstuvwxyz\n"
    );
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_line_sub() {
    assert_eq!(run(&["s/c/C/"], ABCDEF), "abCdef\n");
    assert_eq!(run(&["s/^../x/"], ABC_DEF), "xc\nxf\n");
    assert_eq!(run(&["s/[ace]/@@@/"], ABC_DEF), "@@@b@@@\nd@@@f\n");
    assert_eq!(
        run(&["s/this|here/----/"], SHORT),
        "---- is a test\nof ---- thing ---- \nand you might be special.\n"
    );
    assert_eq!(
        run(&["-L", "1", "s/this|here/----/"], SHORT),
        "---- is a test\nof ---- thing here \nand you might be special.\n"
    );
    assert_eq!(
        run(&["-L", "3", "-M", "8", "s/[aeiou]/•"], SHORT),
        "th•s •s • test\n•f th•s th•ng here \n•nd y•u might be special.\n"
    );
}

#[test]
fn test_file_sub() {
    assert_eq!(run(&["S/c/C/"], ABCDEF), "abCdef");
    assert_eq!(run(&["-n", "S/c/C/"], ABCDEF), "abCdef\n");
    assert_eq!(run(&["-n", "S/c/C/"], ABC_DEF), "abC\ndef\n");
    assert_eq!(run(&["-n", "S/c\nd/C\nD/"], ABC_DEF), "abC\nDef\n");
    assert_eq!(run(&["-nm", "S/.$/X/"], ABC_DEF), "abX\ndeX\n");
}

#[test]
fn test_fixed_sub() {
    assert_eq!(
        run(&["f/./!/"], SHORT),
        "this is a test\nof this thing here \nand you might be special!\n"
    );
}

#[test]
fn test_file_fixed_sub() {
    assert_eq!(run(&["F/+++/-"], "a+++\n+++"), "a-\n-");
    assert_eq!(run(&["F/a.b/x/"], "a.b\naxb"), "x\naxb");
    assert_eq!(run(&["-M", "1", "F/+++/-"], "a+++\n+++"), "a-\n+++");
}

#[test]
fn test_grep() {
    assert_eq!(run(&["g/thing"], SHORT), "of this thing here \n");
    assert_eq!(
        run(&[r"g/\b\w{5}\b/"], SHORT),
        "of this thing here \nand you might be special.\n"
    );
    assert_eq!(run(&["G/.*special.*"], SHORT), "and you might be special.\n");
    assert_eq!(run(&[r"G/of.*here\s?"], SHORT), "of this thing here \n");
}

#[test]
fn test_exclude() {
    assert_eq!(run(&["x/this"], SHORT), "and you might be special.\n");
    assert_eq!(run(&["-dm", "X/[a-eg-z .]*/"], SHORT), "of this thing here \n");
}

#[test]
fn test_only() {
    assert_eq!(run(&["-dm", r"o/\b\w{7}\b"], SHORT), "special\n");
    assert_eq!(run(&["-dm", r"O/\b\w{7}\b"], SHORT), "special");
    assert_eq!(
        run(&["--dotall", r"O/\b\w{5}\b.*\b\w{5}\b/"], SHORT),
        "thing here \nand you might"
    );
}

#[test]
fn test_only_then_file_commands_render_raw() {
    assert_eq!(
        run(&["-dm", r"o/\b\w+[ .]*$", r"S/\s+/ ", r"S/ $|\./"], SHORT),
        "test here special"
    );
}

#[test]
fn test_remove() {
    assert_eq!(run(&["-dm", r"r/\b\w{2,5}\b( |$|.)"], SHORT), "a \n\nspecial.\n");
    assert_eq!(run(&["-dm", r"R/\b\w{2,5}\b( |\n|$|\.)+/"], SHORT), "a special.");
}

#[test]
fn test_case_commands() {
    assert_eq!(
        run(&[r"u/\b\w{3,4}\b"], SHORT),
        "THIS is a TEST\nof THIS thing HERE \nAND YOU might be special.\n"
    );
    assert_eq!(
        run(&["-dm", r"U/\b\w{4}\s?\n\w{2,4}\b"], SHORT),
        "this is a TEST\nOF this thing HERE \nAND you might be special."
    );
    assert_eq!(
        run(&[r"l/\b\w{3,4}\b"], SHORT_UC),
        "this IS A test\nOF this THING here \nand you MIGHT BE SPECIAL.\n"
    );
    assert_eq!(
        run(&["-dm", r"L/\b\w{4}\s?\n\w{2,4}\b"], SHORT_UC),
        "THIS IS A test\nof THIS THING here \nand YOU MIGHT BE SPECIAL."
    );
    assert_eq!(
        run(&[r"t/\b\w.*\w\b"], SHORT_UC),
        "This Is A Test\nOf This Thing Here \nAnd You Might Be Special.\n"
    );
    assert_eq!(
        run(&["-dm", r"T/\b\w{4}\s?\n\w{2,4}\b"], SHORT_UC),
        "THIS IS A Test\nOf THIS THING Here \nAnd YOU MIGHT BE SPECIAL."
    );
    assert_eq!(
        run(&[r"c/\b\w.*\w\b"], SHORT_UC),
        "This is a test\nOf this thing here \nAnd you might be special.\n"
    );
    assert_eq!(
        run(&["-dm", r"C/\b\w{4}\s?\n\w{2,4}\b"], SHORT),
        "this is a Test\nof this thing Here \nand you might be special."
    );
}

#[test]
fn test_append_and_prepend() {
    assert_eq!(run(&["a/123456"], ABCDEF), "abcdef\n123456\n");
    assert_eq!(
        run(&["a/oh yea?\nyea!"], SHORT),
        "this is a test\nof this thing here \nand you might be special.\noh yea?\nyea!\n"
    );
    assert_eq!(run(&["A/123456"], ABCDEF), "abcdef123456");
    assert_eq!(
        run(&["A/oh yea?\nyea!"], SHORT),
        "this is a test\nof this thing here \nand you might be special.oh yea?\nyea!"
    );
    assert_eq!(
        run(&["-n", "A/oh yea?\nyea!"], SHORT),
        "this is a test\nof this thing here \nand you might be special.\noh yea?\nyea!"
    );
    assert_eq!(run(&["p/123456"], ABCDEF), "123456\nabcdef\n");
    assert_eq!(run(&["P/123456"], ABCDEF), "123456abcdef");
    assert_eq!(
        run(&["P/oh yea?\nyea!"], SHORT),
        "oh yea?\nyea!this is a test\nof this thing here \nand you might be special."
    );
    assert_eq!(
        run(&["-n", "P/oh yea?\nyea!"], SHORT),
        "oh yea?\nyea!this is a test\nof this thing here \nand you might be special.\n"
    );
}

#[test]
fn test_insert() {
    assert_eq!(run(&["i/0/123456"], ABCDEF), "123456\nabcdef\n");
    assert_eq!(run(&["i/1/123456"], ABCDEF), "abcdef\n123456\n");
    assert_eq!(run(&["i/-5/123456"], ABCDEF), "123456\nabcdef\n");
    assert_eq!(run(&["i/5/123456"], ABCDEF), "abcdef\n123456\n");
    assert_eq!(
        run(&["i/2/123456"], SHORT),
        "this is a test\nof this thing here \n123456\nand you might be special.\n"
    );
    assert_eq!(
        run(&["i/-2/123456"], SHORT),
        "this is a test\n123456\nof this thing here \nand you might be special.\n"
    );
    assert_eq!(run(&["I/0/123456"], ABCDEF), "123456abcdef");
    assert_eq!(run(&["I/10000/123456"], ABCDEF), "abcdef123456");
    assert_eq!(
        run(&["I/6/123456"], SHORT),
        "this i123456s a test\nof this thing here \nand you might be special."
    );
    assert_eq!(
        run(&["I/-10/123456"], SHORT),
        "this is a test\nof this thing here \nand you might b123456e special."
    );
}

#[test]
fn test_replace() {
    assert_eq!(run(&["y/0/0/123456"], ABCDEF), "123456\nabcdef\n");
    assert_eq!(run(&["y/1/0/123456"], ABCDEF), "abcdef\n123456\n");
    assert_eq!(
        run(&["y/1/1/123456"], SHORT),
        "this is a test\n123456\nand you might be special.\n"
    );
    assert_eq!(run(&["y/1/2/123456"], SHORT), "this is a test\n123456\n");
    assert_eq!(run(&["Y/0/0/123456"], ABCDEF), "123456abcdef");
    assert_eq!(run(&["Y/-50/0/123456"], ABCDEF), "123456abcdef");
    assert_eq!(run(&["Y/2/2/123456"], ABCDEF), "ab123456ef");
    assert_eq!(
        run(&["Y/5/4/123456"], SHORT),
        "this 123456 test\nof this thing here \nand you might be special."
    );
    assert_eq!(
        run(&["Y/-11/2/123456"], SHORT),
        "this is a test\nof this thing here \nand you might 123456 special."
    );
}

#[test]
fn test_delete() {
    assert_eq!(run(&["d/0/0"], ABCDEF), "abcdef\n");
    assert_eq!(run(&["d/2/4/"], SHORT), "this is a test\nof this thing here \n");
    assert_eq!(run(&["d/0/2/123456"], SHORT), "and you might be special.\n");
    assert_eq!(run(&["D/2/2"], ABCDEF), "abef");
    assert_eq!(run(&["D/0/4"], ABCDEF), "ef");
    assert_eq!(run(&["D/3/6"], ABCDEF), "abc");
    assert_eq!(run(&["D/5/44"], SHORT), "this be special.");
    assert_eq!(run(&["D/-32/200"], SHORT), "this is a test\nof this thing");
}

// ============================================================================
// Multiple commands
// ============================================================================

#[test]
fn test_multiple_substitutions_thread_text() {
    assert_eq!(
        run(&["s/thing/\n", "s/^/> "], SHORT),
        "> this is a test\n> of this \n>  here \n> and you might be special.\n"
    );
}

#[test]
fn test_line_edits_then_prefix() {
    assert_eq!(run(&["a/a\nb\nc", "s/^/> /"], ""), "> a\n> b\n> c\n");
    assert_eq!(run(&["p/a\nb\nc", "s/^/> /"], ""), "> a\n> b\n> c\n");
    assert_eq!(
        run(&["i/1/xx\nyy\nzz", "s/^/> /"], "a\nb\nc"),
        "> a\n> xx\n> yy\n> zz\n> b\n> c\n"
    );
    assert_eq!(
        run(&["y/1/1/xx\nyy\nzz", "s/^/> /"], "a\nb\nc"),
        "> a\n> xx\n> yy\n> zz\n> c\n"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_command() {
    let err = try_run(&["🌀/?/ "], "test").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCommand);
}

#[test]
fn test_pattern_error() {
    let err = try_run(&["s/?/"], "test").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Pattern);
}

#[test]
fn test_first_failure_wins() {
    let err = try_run(&["s/ok/fine/", "🌀/x/", "s/?/"], "test").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCommand);
}
