//! scriptck CLI entry point.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use scriptck_debug::TracerConfig;
use scriptck_engine::CheckConfig;
use scriptck_foundation::{Error, Result};
use scriptck_runtime::{JsonTagSource, OutputFormat, Session, SessionConfig, TagSource};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit code when at least one script has inconsistencies.
const EXIT_ISSUES: u8 = 2;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    json: bool,
    pretty: bool,
    end_of_show: bool,
    act_checks: bool,
    trace: bool,
    trace_json: bool,
    trace_issues_only: bool,
    trace_ids: bool,
    trace_buffer: Option<usize>,
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_ISSUES),
        Err(e) => {
            match &e.context {
                Some(context) => eprintln!("\x1b[31mError: {e} ({context})\x1b[0m"),
                None => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr, filtered by `SCRIPTCK_LOG`, then `RUST_LOG`, default `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("SCRIPTCK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--json" => config.json = true,
            "--pretty" => config.pretty = true,
            "--strict" => {
                config.end_of_show = true;
                config.act_checks = true;
            }
            "--end-of-show" => config.end_of_show = true,
            "--act-checks" => config.act_checks = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "--trace-issues" => {
                config.trace = true;
                config.trace_issues_only = true;
            }
            "--trace-ids" => {
                config.trace = true;
                config.trace_ids = true;
            }
            "--trace-buffer" => {
                i += 1;
                if i >= args.len() {
                    return Err(Error::usage("--trace-buffer requires a value"));
                }
                config.trace_buffer = Some(args[i].parse().map_err(|_| {
                    Error::usage(format!("invalid --trace-buffer value: {}", args[i]))
                })?);
            }
            "-" => config.files.push(PathBuf::from("-")),
            arg if arg.starts_with('-') => {
                return Err(Error::usage(format!("unknown option: {arg}")));
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn session_config(cli: &CliConfig) -> SessionConfig {
    let check = CheckConfig::new()
        .with_end_of_show(cli.end_of_show)
        .with_act_transitions(cli.act_checks);

    let mut tracer = TracerConfig::new();
    if cli.trace {
        tracer = tracer.enabled().to_stderr();
    }
    if cli.trace_json {
        tracer = tracer.json();
    }
    if cli.trace_issues_only {
        tracer = tracer.issues_only();
    }
    if cli.trace_ids {
        tracer = tracer.with_ids();
    }
    if cli.pretty {
        tracer = tracer.pretty();
    }
    if let Some(size) = cli.trace_buffer {
        tracer = tracer.with_buffer_size(size);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    SessionConfig::new()
        .with_check(check)
        .with_format(format)
        .with_tracer(tracer)
        .with_source_labels(cli.files.len() > 1)
        .with_pretty_json(cli.pretty)
}

/// Returns whether every script was clean.
fn run(args: Vec<String>) -> Result<bool> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("scriptck {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let mut session = Session::new(session_config(&cli));
    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let mut all_clean = true;
    let mut stdout = io::stdout().lock();
    for file in &files {
        let mut source: Box<dyn TagSource> = if file.as_os_str() == "-" {
            Box::new(JsonTagSource::from_reader("-", io::stdin().lock()))
        } else {
            Box::new(JsonTagSource::open(file)?)
        };

        let report = session.check(source.as_mut())?;
        all_clean &= report.is_clean();
        stdout.write_all(session.render(source.name(), &report).as_bytes())?;
    }
    stdout.flush()?;

    Ok(all_clean)
}

fn print_help() {
    println!(
        "\x1b[1mscriptck\x1b[0m - Consistency checker for parsed theatrical scripts

\x1b[1mUSAGE:\x1b[0m
    scriptck [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    JSON tag files to check (array or one object per line).
                  Reads stdin when none are given, or for `-`.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print this help message
    -V, --version         Print version information
        --json            Print reports as JSON
        --pretty          Pretty-print JSON reports and traces
        --strict          Enable every optional check
        --end-of-show     Report characters left on stage or mics left open
        --act-checks      Report characters on stage or mics open at act changes

\x1b[1mTRACING:\x1b[0m
        --trace           Trace each tag to stderr
        --trace-json      Trace each tag to stderr as JSON
        --trace-issues    Trace only tags that produced errors
        --trace-ids       Prefix each trace line with its record ID
        --trace-buffer N  Keep at most N trace records

\x1b[1mENVIRONMENT:\x1b[0m
    SCRIPTCK_LOG          Log filter (falls back to RUST_LOG, default `warn`)

\x1b[1mEXIT STATUS:\x1b[0m
    0 when every script is clean, 2 when inconsistencies were found,
    1 on any other failure."
    );
}
