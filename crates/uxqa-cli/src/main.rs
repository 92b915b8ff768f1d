//! CLI entry point for uxqa-scanner.
//!
//! This binary scans a React source tree for components and interactive
//! elements, reports end-to-end test coverage and generates Playwright
//! scaffolds for untested components.
//!
//! # Usage
//!
//! ```bash
//! uxqa-scanner [COMMAND] [OPTIONS]
//!
//! # Scan ./src and print a coverage report
//! uxqa-scanner scan --root ./src
//!
//! # Machine-readable report
//! uxqa-scanner scan --json > coverage.json
//!
//! # Preview, then write scaffolds for untested components
//! uxqa-scanner generate
//! uxqa-scanner generate --write --out e2e/generated
//!
//! # Create uxqa-scanner.config.json with defaults
//! uxqa-scanner init
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uxqa_core::{Framework, ScannerConfig, CONFIG_FILE_NAME};
use uxqa_report::{build_json_report, generate_tests, render_console, render_json};
use uxqa_scanner::Scanner;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Scan React components for end-to-end test coverage and generate
/// Playwright test scaffolds.
///
/// Settings are read from `./uxqa-scanner.config.json` when present;
/// command-line flags take precedence.
#[derive(Debug, Parser)]
#[command(name = "uxqa-scanner", version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Command to execute (defaults to `scan`).
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to scan.
    #[arg(short, long, global = true)]
    root: Option<Utf8PathBuf>,

    /// Directory generated tests are written to.
    #[arg(short, long, global = true)]
    out: Option<Utf8PathBuf>,

    /// Framework mode: react, vue, html or auto.
    #[arg(short, long, global = true)]
    framework: Option<String>,

    /// Base URL the generated tests navigate to.
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Include glob patterns, comma separated.
    #[arg(short, long, global = true, value_delimiter = ',')]
    include: Option<Vec<String>>,

    /// Exclude glob patterns, comma separated.
    #[arg(short, long, global = true, value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Print machine-readable JSON instead of the console report.
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging (debug level).
    #[arg(long, global = true)]
    verbose: bool,

    /// Disable colored log output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Scan components and print a coverage report.
    Scan,

    /// Generate Playwright scaffolds for components without tests.
    Generate {
        /// Write files to the output directory instead of printing them.
        #[arg(short, long)]
        write: bool,
    },

    /// Create a default uxqa-scanner.config.json in the current directory.
    Init,

    /// Print version information.
    Version,
}

/// Parses arguments, dropping flags the CLI does not know.
///
/// A value that followed a dropped flag (`--foo bar scan`) is dropped too
/// when clap would otherwise read it as a subcommand or positional.
///
/// Returns the parsed CLI and the ignored arguments. Other parse errors,
/// including `--help` and `--version`, are returned unchanged.
fn parse_args<I, T>(args: I) -> Result<(Cli, Vec<String>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut ignored = Vec::new();
    // Index of the argument that moved into the slot of the last dropped flag
    let mut dropped_at: Option<usize> = None;

    loop {
        let error = match Cli::try_parse_from(&args) {
            Ok(cli) => return Ok((cli, ignored)),
            Err(error) => error,
        };

        let index = match error.kind() {
            ErrorKind::UnknownArgument => {
                let Some(ContextValue::String(unknown)) = error.get(ContextKind::InvalidArg)
                else {
                    return Err(error);
                };
                // Skip argv[0]; drop the first occurrence, with or without `=value`
                args.iter()
                    .skip(1)
                    .position(|arg| {
                        arg.to_str().is_some_and(|arg| {
                            arg == unknown.as_str()
                                || arg
                                    .strip_prefix(unknown.as_str())
                                    .is_some_and(|rest| rest.starts_with('='))
                        })
                    })
                    .map(|position| position + 1)
            }
            ErrorKind::InvalidSubcommand => {
                let Some(ContextValue::String(value)) = error.get(ContextKind::InvalidSubcommand)
                else {
                    return Err(error);
                };
                dropped_at.filter(|&index| {
                    args.get(index)
                        .and_then(|arg| arg.to_str())
                        .is_some_and(|arg| arg == value.as_str())
                })
            }
            _ => None,
        };

        let Some(index) = index else {
            return Err(error);
        };
        let removed = args.remove(index);
        ignored.push(removed.to_string_lossy().into_owned());
        dropped_at = Some(index);
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default. Logs go
/// to stderr so that report output on stdout stays machine-readable.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},ignore=warn,globset=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds the effective configuration.
///
/// Starts from `config_path` when it exists (defaults otherwise) and
/// applies command-line overrides on top.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be read or
/// parsed, or if `--framework` is not a known framework.
fn load_config(cli: &Cli, config_path: &Utf8Path) -> color_eyre::Result<ScannerConfig> {
    let mut config = match ScannerConfig::load(config_path)? {
        Some(config) => {
            info!(path = %config_path, "Loaded configuration file");
            config
        }
        None => ScannerConfig::default(),
    };

    if let Some(root) = &cli.root {
        config.root_dir.clone_from(root);
    }
    if let Some(out) = &cli.out {
        config.out_dir.clone_from(out);
    }
    if let Some(framework) = &cli.framework {
        config.framework = framework.parse::<Framework>()?;
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(include) = &cli.include {
        config.include.clone_from(include);
    }
    if let Some(exclude) = &cli.exclude {
        config.exclude.clone_from(exclude);
    }

    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Scans and prints the console or JSON report.
///
/// # Errors
///
/// Returns an error if scanning or writing output fails.
fn run_scan(config: &ScannerConfig, json: bool, out: &mut dyn Write) -> color_eyre::Result<()> {
    let result = Scanner::new(config.clone()).scan()?;

    if json {
        let report = build_json_report(&result, chrono::Utc::now());
        writeln!(out, "{}", render_json(&report)?)?;
    } else {
        write!(out, "{}", render_console(&result, config.suggest_test_ids))?;
    }

    Ok(())
}

/// Generates scaffolds for untested components.
///
/// Without `write`, each scaffold is printed after a header line (or all of
/// them as a JSON array with `json`). With `write`, files are written under
/// the output directory and their paths printed.
///
/// # Errors
///
/// Returns an error if scanning, serialization or file writing fails.
fn run_generate(
    config: &ScannerConfig,
    write: bool,
    json: bool,
    out: &mut dyn Write,
) -> color_eyre::Result<()> {
    let result = Scanner::new(config.clone()).scan()?;
    let generated = generate_tests(&result, &config.generate, &config.base_url, &config.out_dir);

    info!(count = generated.len(), out_dir = %config.out_dir, "Generated scaffolds");

    if generated.is_empty() {
        writeln!(out, "All components have tests; nothing to generate.")?;
        return Ok(());
    }

    if write {
        for test in &generated {
            if let Some(parent) = test.file_path.parent() {
                fs::create_dir_all(parent.as_std_path())
                    .wrap_err_with(|| format!("failed to create directory {parent}"))?;
            }
            fs::write(test.file_path.as_std_path(), &test.content)
                .wrap_err_with(|| format!("failed to write {}", test.file_path))?;
            writeln!(
                out,
                "Wrote {} ({} tests)",
                test.file_path, test.test_count
            )?;
        }
    } else if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&generated)?)?;
    } else {
        for test in &generated {
            writeln!(
                out,
                "// ===== {} ({}, {} tests) =====",
                test.file_path, test.component_name, test.test_count
            )?;
            writeln!(out, "{}", test.content)?;
        }
    }

    Ok(())
}

/// Writes a default configuration file unless one already exists.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
fn run_init(config_path: &Utf8Path, out: &mut dyn Write) -> color_eyre::Result<()> {
    if config_path.exists() {
        warn!(path = %config_path, "Configuration file already exists");
        writeln!(out, "{config_path} already exists; leaving it unchanged.")?;
        return Ok(());
    }

    let mut contents = ScannerConfig::default().to_json_pretty()?;
    contents.push('\n');
    fs::write(config_path.as_std_path(), contents)
        .wrap_err_with(|| format!("failed to write {config_path}"))?;

    writeln!(out, "Created {config_path}")?;
    Ok(())
}

/// Prints the version line.
fn run_version(out: &mut dyn Write) -> color_eyre::Result<()> {
    writeln!(out, "uxqa-scanner {}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

/// Routes a parsed command line to its command.
fn run(cli: &Cli, out: &mut dyn Write) -> color_eyre::Result<()> {
    let config_path = Utf8Path::new(CONFIG_FILE_NAME);

    match cli.command.unwrap_or(Commands::Scan) {
        Commands::Scan => run_scan(&load_config(cli, config_path)?, cli.json, out),
        Commands::Generate { write } => {
            run_generate(&load_config(cli, config_path)?, write, cli.json, out)
        }
        Commands::Init => run_init(config_path, out),
        Commands::Version => run_version(out),
    }
}

/// Formats a fatal error with its cause chain on one line.
fn error_line(error: &color_eyre::Report) -> String {
    format!("Error: {error:#}")
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> ExitCode {
    // 1. Install color-eyre FIRST (before any potential panics)
    let installed = color_eyre::install();

    // 2. Parse CLI arguments (help, version and usage errors exit here)
    let (cli, ignored) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(error) => error.exit(),
    };

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);
    for arg in &ignored {
        warn!(arg = %arg, "Ignoring unrecognized argument");
    }

    // 4. Route to appropriate command
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match installed.and_then(|()| run(&cli, &mut handle)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(std::io::stderr().lock(), "{}", error_line(&error));
            ExitCode::FAILURE
        }
    }
}
