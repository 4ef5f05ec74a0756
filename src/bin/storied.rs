//! Command-line interface for storied
//! This binary parses plain-text backlogs and prints the result in one of the registered formats.
//!
//! Usage:
//!   storied parse `<path>` [--format `<format>`] [--config `<file>`] [--strict]  - Parse and print a backlog
//!   storied watch `<path>` [--interval `<secs>`] [--format `<format>`]          - Re-print whenever the file changes
//!   storied formats                                                           - List available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;
use std::thread;
use std::time::Duration;
use storied::backlog::config::{Loader, StoriedConfig};
use storied::backlog::formats::{FormatError, FormatRegistry};
use storied::backlog::loader::{DocumentLoader, FileProvider};
use storied::Parsed;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_tracing();

    let matches = Command::new("storied")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse plain-text user story backlogs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format (see `storied formats`)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a backlog and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the backlog file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Exit with status 2 when an ungrouped story or bug is found"),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Poll a backlog and print it again whenever it changes")
                .arg(
                    Arg::new("path")
                        .help("Path to the backlog file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .value_parser(clap::value_parser!(u64))
                        .help("Seconds between polls"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches, &config),
        Some(("watch", watch_matches)) => handle_watch_command(watch_matches, &config),
        Some(("formats", _)) => handle_formats_command(&config),
        _ => unreachable!(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storied=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Defaults, then the --config file, then flags
fn load_config(matches: &ArgMatches) -> Result<StoriedConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = subcommand_arg(matches, "format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(("parse", parse_matches)) = matches.subcommand() {
        if parse_matches.get_flag("strict") {
            loader = loader.set_override("diagnostics.strict", true)?;
        }
    }
    if let Some(("watch", watch_matches)) = matches.subcommand() {
        if let Some(interval) = watch_matches.get_one::<u64>("interval") {
            loader = loader.set_override("watch.interval_secs", *interval)?;
        }
    }
    loader.build()
}

/// Global args may be given before or after the subcommand
fn subcommand_arg<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a String> {
    matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>(name))
        .or_else(|| matches.get_one::<String>(name))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &StoriedConfig) {
    let path = matches.get_one::<String>("path").unwrap();
    let registry = FormatRegistry::with_options(&config.format_options());

    let mut loader = DocumentLoader::new(FileProvider::new());
    let parsed = match loader.load(path) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => Parsed::default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    print_parsed(&parsed, &registry, config);

    if config.diagnostics.strict && parsed.has_errors() {
        process::exit(2);
    }
}

/// Handle the watch command
fn handle_watch_command(matches: &ArgMatches, config: &StoriedConfig) {
    let path = matches.get_one::<String>("path").unwrap();
    let registry = FormatRegistry::with_options(&config.format_options());
    let interval = Duration::from_secs(config.watch.interval_secs.max(1));

    let mut loader = DocumentLoader::new(FileProvider::new());
    loop {
        match loader.load(path) {
            Ok(Some(parsed)) => print_parsed(&parsed, &registry, config),
            Ok(None) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        thread::sleep(interval);
    }
}

/// Handle the formats command
fn handle_formats_command(config: &StoriedConfig) {
    let registry = FormatRegistry::with_options(&config.format_options());
    println!("Available formats:\n");
    for (name, description) in registry.list_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn print_parsed(parsed: &Parsed, registry: &FormatRegistry, config: &StoriedConfig) {
    for diagnostic in &parsed.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let output = registry
        .serialize(&parsed.document, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Format error: {}", e);
            if let FormatError::FormatNotFound(_) = e {
                let names: Vec<String> = registry
                    .list_formats()
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect();
                eprintln!("Available formats: {}", names.join(", "));
            }
            process::exit(1);
        });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}
