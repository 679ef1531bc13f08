//! evtable CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use evtable_foundation::Error;
use evtable_runtime::{RunConfig, run};
use tracing_subscriber::EnvFilter;

/// CLI options parsed from arguments.
#[derive(Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    synthetic: Option<u64>,
    seed: Option<u64>,
    max_events: Option<u64>,
    real_data: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run_cli(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid {flag} value: {value}").into())
}

fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => cli.show_help = true,
            "-V" | "--version" => cli.show_version = true,
            "-v" | "--verbose" => cli.verbose = true,
            "--data" => cli.real_data = true,
            "-o" | "--output" => cli.output = Some(parse_value(args, &mut i, "--output")?),
            "-c" | "--config" => cli.config = Some(parse_value(args, &mut i, "--config")?),
            "--synthetic" => cli.synthetic = Some(parse_value(args, &mut i, "--synthetic")?),
            "--seed" => cli.seed = Some(parse_value(args, &mut i, "--seed")?),
            "--max-events" => cli.max_events = Some(parse_value(args, &mut i, "--max-events")?),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if cli.input.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                cli.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(cli)
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply(cli: &CliArgs, mut config: RunConfig) -> RunConfig {
    if let Some(input) = &cli.input {
        config.input = Some(input.clone());
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    if let Some(count) = cli.synthetic {
        config.synthetic.events = Some(count);
    }
    if let Some(seed) = cli.seed {
        config.synthetic.seed = seed;
    }
    if cli.real_data {
        config.synthetic.real_data = true;
    }
    if let Some(max) = cli.max_events {
        config.max_events = Some(max);
    }
    if cli.verbose {
        config.log_filter = "debug".to_string();
    }
    config
}

fn run_cli(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("evtable {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => RunConfig::load(path).map_err(describe)?,
        None => RunConfig::default(),
    };
    let config = apply(&cli, config);
    config.validate().map_err(describe)?;

    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(&config).map_err(describe)?;
    Ok(())
}

/// Appends the failing event and stage, when known.
fn describe(e: Error) -> Box<dyn std::error::Error> {
    match &e.context {
        Some(context) => format!("{e} at {context}").into(),
        None => e.into(),
    }
}

fn print_help() {
    println!(
        "\x1b[1mevtable\x1b[0m - Per-event lepton/jet association ntupler

\x1b[1mUSAGE:\x1b[0m
    evtable [OPTIONS] [INPUT]

\x1b[1mARGUMENTS:\x1b[0m
    [INPUT]    MessagePack event stream (default: stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -o, --output PATH     Write rows to PATH (default: stdout)
    -c, --config PATH     Load run configuration from a TOML file
    --synthetic N         Process N generated events instead of INPUT
    --seed S              Seed for generated events
    --data                Generate collision data (no pileup)
    --max-events N        Stop after N events
    -v, --verbose         Log every processing stage

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG              Overrides the configured log filter

\x1b[1mEXAMPLES:\x1b[0m
    evtable events.msgpack -o rows.msgpack
    evtable --synthetic 1000 --seed 7 -o rows.msgpack
    evtable -c run.toml --max-events 100 -v"
    );
}
