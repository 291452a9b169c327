//! One-shot console formatter.
//!
//! `linefmt <severity> <message...>` prints a single formatted record, which
//! makes the renderer usable from shell scripts. `--demo` renders a tour of
//! the output styles instead.
//!
//! Usage:
//!   linefmt info server started
//!   linefmt warn --scope net --file src/net.rs --line 40 retrying
//!   linefmt error --data '{"code": 500}' upstream failed
//!   linefmt --demo

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use linefmt::{ErrorLike, FormatConfig, Formatter, LogBridge, LogElement, Metadata, Severity};
use serde_json::{Value, json};

/// linefmt - Format one log record for the console.
#[derive(Parser)]
#[command(
    name = "linefmt",
    version,
    about = "Format one log record for the console"
)]
struct Cli {
    /// Severity name (trace, debug, info, warn, error, log, or anything else)
    #[arg(default_value = "log")]
    severity: String,

    /// Message text; words are joined with spaces
    message: Vec<String>,

    /// Scope label shown after the severity
    #[arg(long)]
    scope: Option<String>,

    /// Source file shown after the title (needs --line)
    #[arg(long)]
    file: Option<String>,

    /// Source line shown after the title (needs --file)
    #[arg(long)]
    line: Option<String>,

    /// Structured JSON value appended to the record (repeatable)
    #[arg(long = "data", value_name = "JSON")]
    data: Vec<String>,

    /// Config file path instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Project folder name for path shortening
    #[arg(long, value_name = "NAME")]
    root: Option<String>,

    /// Container nesting depth for rendered values
    #[arg(long, value_name = "N")]
    depth: Option<usize>,

    /// Leave the clock segment out
    #[arg(long)]
    no_timestamp: bool,

    /// Print a rendering tour instead of one record
    #[arg(long)]
    demo: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match cli
        .config
        .as_deref()
        .map_or_else(FormatConfig::load, FormatConfig::load_from)
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Flags win over file settings
    if cli.no_timestamp {
        config.timestamps = false;
    }
    if let Some(root) = cli.root.clone() {
        config.root_folder = Some(root);
    }
    if let Some(depth) = cli.depth {
        config.object_depth = depth;
    }

    if cli.demo {
        return demo(&config);
    }

    let mut metadata = Metadata::new();
    if let Some(scope) = cli.scope {
        metadata.insert("scope".to_string(), Value::from(scope));
    }
    if let Some(file) = cli.file {
        metadata.insert("file".to_string(), Value::from(file));
    }
    if let Some(line) = cli.line {
        metadata.insert("line".to_string(), Value::from(line));
    }

    let mut elements: Vec<LogElement> = Vec::new();
    if !cli.message.is_empty() {
        elements.push(cli.message.join(" ").into());
    }
    for raw in &cli.data {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => elements.push(value.into()),
            Err(e) => {
                eprintln!("error: --data is not valid JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    if elements.is_empty() && metadata.is_empty() {
        eprintln!("error: nothing to format; pass a message, --data, or metadata flags");
        return ExitCode::FAILURE;
    }

    let formatter = config.formatter();
    match formatter.format(&cli.severity, Local::now(), &elements, &metadata) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders one line per severity, a scoped record with structured data, an
/// error with its stack, and a couple of records routed through the `log`
/// facade.
fn demo(config: &FormatConfig) -> ExitCode {
    let formatter = config.formatter();

    for severity in Severity::all() {
        let message = format!("{severity} severity rendering");
        print_line(&formatter, severity.as_str(), &[message.into()], &scoped("demo"));
    }

    let mut metadata = scoped("net");
    metadata.insert("endpoint".to_string(), Value::from("10.0.0.2:4317"));
    metadata.insert("attempts".to_string(), Value::from(3));
    print_line(&formatter, "info", &["retrying connection".into()], &metadata);

    print_line(
        &formatter,
        "debug",
        &[
            "session state".into(),
            json!({
                "user": "mara",
                "roles": ["ops", "deploy"],
                "session": { "id": "f3a1", "ttl": 1800 },
            })
            .into(),
        ],
        &scoped("auth"),
    );

    let err = ErrorLike::new(
        "connection refused",
        "connection refused\n    at dial (src/net.rs:88)\n    at retry (src/net.rs:131)",
    );
    let mut metadata = scoped("net");
    metadata.insert("file".to_string(), Value::from("src/net.rs"));
    metadata.insert("line".to_string(), Value::from("88"));
    print_line(&formatter, "error", &[err.into()], &metadata);

    // Same output, driven through the log facade instead of direct calls
    let bridge = LogBridge::new(config.formatter()).filter(log::LevelFilter::Trace);
    if bridge.install().is_ok() {
        log::info!(target: "bridge", "records routed through the log facade");
        log::warn!(target: "bridge", "warnings land on stderr");
    }

    ExitCode::SUCCESS
}

fn print_line(formatter: &Formatter, severity: &str, elements: &[LogElement], metadata: &Metadata) {
    match formatter.format(severity, Local::now(), elements, metadata) {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("error: {e}"),
    }
}

fn scoped(scope: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("scope".to_string(), Value::from(scope));
    metadata
}
