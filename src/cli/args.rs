use crate::config::DocType;
use crate::constants::{exit_codes, verbosity};
use crate::session::ExportFormat;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// ShieldPage - legal boilerplate for small websites.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate legal documents from the questionnaire or saved answers.
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Convert a Markdown document to HTML.
    Render(RenderArgs),

    /// Unlock every document type.
    Unlock(UnlockArgs),
}

/// Arguments for the generate command.
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Answers as a JSON object or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Path to a JSON or YAML file containing answers.
    #[arg(long = "answers-file", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Destination directory for generated files.
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = "legal")]
    pub output_dir: PathBuf,

    /// Documents to generate (comma-separated). Defaults to every unlocked document.
    #[arg(short, long, value_delimiter = ',', value_enum)]
    pub doc: Vec<DocType>,

    /// Output formats (comma-separated).
    #[arg(short, long, value_delimiter = ',', value_enum, default_value = "markdown")]
    pub format: Vec<ExportFormat>,

    /// Text of the "Last Updated" line. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Force overwrite of an existing output directory.
    #[arg(long)]
    pub force: bool,

    /// Skip the questionnaire and use saved and provided answers only.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the documents instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Do not remember the answers for the next run.
    #[arg(long = "no-save")]
    pub no_save: bool,

    /// Store file to use instead of the default data directory.
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

/// Arguments for the render command.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Markdown file or `-` to read from stdin.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap the HTML in a standalone page.
    #[arg(long)]
    pub page: bool,

    /// Page title. Defaults to the first top-level heading.
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the unlock command.
#[derive(Parser, Debug, Clone)]
pub struct UnlockArgs {
    /// Store file to use instead of the default data directory.
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        }
        _ => e.exit(),
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
