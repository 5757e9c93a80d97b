//! Disperse - Entry Point

use clap::Parser;
use disperse::model::AppError;
use disperse::parser::EXAMPLE_INPUT;
use disperse::report::{self, OutputFormat};
use disperse::resolver::Resolution;
use disperse::state::DisperseState;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Exit status when the list has findings.
const EXIT_FINDINGS: u8 = 1;
/// Exit status when input, config or output fails.
const EXIT_ERROR: u8 = 2;

/// Disperse - validate and normalize bulk address=amount recipient lists
#[derive(Parser, Debug)]
#[command(name = "disperse")]
#[command(version)]
#[command(about = "Validate and normalize bulk address=amount recipient lists")]
pub struct Args {
    /// Path to recipient list (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Rewrite the list so each address appears once, printing the result
    #[arg(short, long, value_enum)]
    pub resolve: Option<Resolution>,

    /// Diagnostic output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print an example list and exit
    #[arg(long)]
    pub example: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    if args.example {
        println!("{EXAMPLE_INPUT}");
        return Ok(ExitCode::SUCCESS);
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = disperse::config::load_config_with_precedence(args.config.clone())?;
        let merged = disperse::config::merge_config(config_file);
        let with_env = disperse::config::apply_env_overrides(merged);
        disperse::config::apply_cli_overrides(with_env, args.format, args.resolve)
    };

    disperse::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = disperse::source::detect_input_source(args.file.clone())?;
    let source_name = source.describe();
    let mut state = DisperseState::with_text(source.read_text()?);

    info!(source = %source_name, lines = state.line_count(), "Input loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let valid = match config.resolve {
        Some(resolution) => {
            state.resolve(resolution);
            writeln!(out, "{}", state.text())?;

            let valid = state.validate();
            if !valid {
                warn!(
                    findings = state.diagnostics().len(),
                    "Resolved list still has findings"
                );
                eprintln!("{}", report::render(state.diagnostics(), config.format)?);
            }
            valid
        }
        None => {
            let valid = state.validate();
            let rendered = report::render(state.diagnostics(), config.format)?;
            if !rendered.is_empty() {
                writeln!(out, "{rendered}")?;
            }
            valid
        }
    };

    info!(valid, findings = state.diagnostics().len(), "Done");

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FINDINGS)
    })
}
