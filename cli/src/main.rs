use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use cmdopts_core::{Registry, validate_registry};
use cmdopts_render::{
    EnvWidth, FixedWidth, HelpFormatter, HelpLayout, ManPage, OutputFormat, TerminalWidth,
    TtyWidth, describe,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod demo;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "cmdopts", disable_help_subcommand = true)]
#[command(about = "Command-line option registry demo and documentation generator")]
#[command(version = PACKAGE_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse ARGS with the demo option set and report the result.
    #[command(disable_help_flag = true)]
    Demo(DemoArgs),
    /// Print the demo man page in roff format.
    Manpage,
    /// Render the demo help text.
    Help(HelpArgs),
    /// Describe the demo option set for tooling or documentation.
    Describe(DescribeArgs),
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Arguments handed to the demo parser.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Display width in columns (default: terminal width).
    #[arg(long)]
    width: Option<usize>,
    /// Always use the narrow layout.
    #[arg(long)]
    narrow: bool,
}

#[derive(Debug, Args)]
struct DescribeArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Demo(args) => run_demo(args),
        Command::Manpage => run_manpage(),
        Command::Help(args) => run_help(args),
        Command::Describe(args) => run_describe(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn demo_registry() -> Result<Registry, String> {
    let registry = demo::registry()
        .map_err(|err| format!("initialization of command-line options parser failed: {err}"))?;
    for problem in validate_registry(&registry) {
        warn!(%problem, "demo option set has a declaration problem");
    }
    Ok(registry)
}

fn terminal() -> EnvWidth<TtyWidth> {
    EnvWidth::new(TtyWidth)
}

fn run_demo(args: DemoArgs) -> Result<(), String> {
    let mut registry = demo_registry()?;
    registry
        .parse(&args.args)
        .map_err(|err| format!("parsing of command-line options failed: {err}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if registry.was_provided("help") || registry.no_options_provided() {
        return HelpFormatter::new(&registry)
            .write_to(&terminal(), &mut out)
            .map_err(|err| format!("failed to write help: {err}"));
    }

    if registry.was_provided("version") {
        return writeln!(out, "{} {PACKAGE_VERSION}", demo::PROGRAM)
            .map_err(|err| format!("failed to write version: {err}"));
    }

    let lines = demo_report(&registry)?;
    for line in lines {
        writeln!(out, "{line}").map_err(|err| format!("failed to write output: {err}"))?;
    }
    Ok(())
}

fn demo_report(registry: &Registry) -> Result<Vec<String>, String> {
    let mut lines = Vec::new();

    if registry.was_provided("number") {
        let raw = registry
            .get_argument("number")
            .and_then(|value| value.as_single())
            .unwrap_or_default();
        let number: i64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid number '{raw}'"))?;
        lines.push(format!("number was: {number}"));
    }

    let verbose = registry.was_provided("verbose");
    let includes = registry
        .get_argument("include")
        .map(|value| value.values().to_vec())
        .unwrap_or_default();
    let output = registry
        .get_argument("output")
        .and_then(|value| value.as_single())
        .unwrap_or_default()
        .to_string();
    if verbose {
        for path in &includes {
            lines.push(format!("include path: {path}"));
        }
        lines.push(format!("output file: {output}"));
    }

    if !registry.all_options_checked() {
        warn!("some provided options were never processed");
    }

    for (index, positional) in registry.positional_parameters().iter().enumerate() {
        lines.push(format!("positional parameter #{}: {positional}", index + 1));
    }
    Ok(lines)
}

fn run_manpage() -> Result<(), String> {
    let registry = demo_registry()?;
    let page = ManPage::new(demo::PROGRAM, PACKAGE_VERSION)
        .with_title(&format!("{} man page", demo::PROGRAM))
        .with_summary(demo::SUMMARY)
        .with_synopsis(demo::SYNOPSIS)
        .with_description(demo::DESCRIPTION)
        .with_author("the cmdopts developers")
        .render(&registry);
    io::stdout()
        .write_all(page.as_bytes())
        .map_err(|err| format!("failed to write man page: {err}"))
}

fn run_help(args: HelpArgs) -> Result<(), String> {
    let registry = demo_registry()?;
    let layout = HelpLayout {
        force_narrow: args.narrow,
        ..HelpLayout::default()
    };
    let width_source: Box<dyn TerminalWidth> = match args.width {
        Some(width) => Box::new(FixedWidth(width)),
        None => Box::new(terminal()),
    };
    HelpFormatter::new(&registry)
        .with_layout(layout)
        .write_to(width_source.as_ref(), &mut io::stdout().lock())
        .map_err(|err| format!("failed to write help: {err}"))
}

fn run_describe(args: DescribeArgs) -> Result<(), String> {
    let registry = demo_registry()?;
    let text = describe(&registry, args.format).map_err(|err| err.to_string())?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
