use std::process::{Command, Output};

fn cmdopts(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmdopts"))
        .args(args)
        .env("COLUMNS", "120")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdopts")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_without_options_prints_help() {
    let output = cmdopts(&["demo"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("usage: cmdopts demo [options] [--] [ARGS]...\n"));
    assert!(text.contains("list of command line options:\n\nGeneral options:\n"));
    assert!(text.contains("    -h, --help       display this help and exit\n"));
}

#[test]
fn demo_positionals_only_still_prints_help() {
    let output = cmdopts(&["demo", "--", "file.txt"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("list of command line options:"));
}

#[test]
fn demo_help_flag_reaches_the_demo_parser() {
    let output = cmdopts(&["demo", "--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Processing options:\n"));
}

#[test]
fn demo_reports_number_and_positionals() {
    let output = cmdopts(&["demo", "--", "-n", "5", "alpha", "--", "-beta"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "number was: 5\npositional parameter #1: alpha\npositional parameter #2: -beta\n"
    );
}

#[test]
fn demo_alias_forwards_to_number() {
    let output = cmdopts(&["demo", "--", "--count", "9"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "number was: 9\n");
}

#[test]
fn demo_verbose_lists_include_paths_and_default_output() {
    let output = cmdopts(&["demo", "--", "-v", "-I", "src", "--include", "lib"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "include path: src\ninclude path: lib\noutput file: a.out\n"
    );
}

#[test]
fn demo_unknown_option_fails() {
    let output = cmdopts(&["demo", "--", "--bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("parsing of command-line options failed"));
    assert!(err.contains("unknown command line option: '--bogus'"));
}

#[test]
fn demo_missing_argument_fails() {
    let output = cmdopts(&["demo", "--", "-v", "--number"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("parsing of command-line options failed"));
    assert!(err.contains("expected argument for option 'number'"));
}

#[test]
fn demo_repeated_option_warns_but_succeeds() {
    let output = cmdopts(&["demo", "--", "-n", "1", "-n", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "number was: 2\n");
    assert!(stderr(&output).contains("option 'n' is only allowed once"));
}

#[test]
fn demo_version_flag() {
    let output = cmdopts(&["demo", "--", "-V"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("cmdopts {}\n", env!("CARGO_PKG_VERSION")));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_wide_and_narrow_layouts() {
    let wide = stdout(&cmdopts(&["help", "--width", "120"]));
    assert!(wide.contains("    -V, --version    print the version and exit\n"));

    let narrow = stdout(&cmdopts(&["help", "--width", "120", "--narrow"]));
    assert!(narrow.contains("    -V, --version\n        print the version and exit\n"));

    let small = stdout(&cmdopts(&["help", "--width", "60"]));
    assert!(small.contains("    -V, --version\n        print the version and exit\n"));
    assert!(small.lines().all(|line| line.chars().count() < 60));
}

#[test]
fn help_uses_columns_when_width_is_not_given() {
    let from_env = stdout(&cmdopts(&["help"]));
    let explicit = stdout(&cmdopts(&["help", "--width", "120"]));
    assert_eq!(from_env, explicit);
}

// ---------------------------------------------------------------------------
// manpage
// ---------------------------------------------------------------------------

#[test]
fn manpage_renders_full_page() {
    let output = cmdopts(&["manpage"]);
    assert!(output.status.success());

    let page = stdout(&output);
    assert!(page.starts_with(".TH cmdopts 1 \"01 Jan 1970\""));
    assert!(page.contains(".SH NAME\ncmdopts \\- command-line option parsing demo\n"));
    assert!(page.contains(".SS Processing options:\n"));
    assert!(page.contains(".IP \"\\fB\\-n, \\-\\-number\\fR\" 4\n"));
    assert!(page.contains(".IP \"\\fB\\-\\-count\\fR\" 4\nsame as --number\n"));
    assert!(page.ends_with(".SH AUTHOR\nthe cmdopts developers\n"));
}

// ---------------------------------------------------------------------------
// describe
// ---------------------------------------------------------------------------

#[test]
fn describe_json_lists_entries() {
    let output = cmdopts(&["describe", "--format", "json"]);
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0]["kind"], "section");
    assert_eq!(entries[0]["name"], "General options:");
    assert_eq!(entries[7]["argument"], "a.out");
    assert_eq!(entries[8]["alias"]["Resolved"], 5);
}

#[test]
fn describe_markdown_has_a_table_per_section() {
    let output = cmdopts(&["describe", "--format", "markdown"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.matches("| Option | Argument | Default | Description |").count(), 2);
    assert!(text.contains("| `-o, --output` | single | `a.out` |"));
    assert!(text.contains("| `--count` | none |  | same as --number (alias of `-n, --number`) |"));
}
