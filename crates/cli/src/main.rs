//! plagscan CLI - similarity checks for student project submissions

use anyhow::Result;
use clap::{Parser, Subcommand};
use plagscan_core::Config;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{
  cmd_compare, cmd_config_init, cmd_config_reset, cmd_config_show, cmd_domains, cmd_extract, cmd_projects, cmd_scan,
};
use logging::init_logging;

#[derive(Parser)]
#[command(name = "plagscan")]
#[command(about = "Similarity checks for student project submissions")]
#[command(after_help = "\
QUICK START:
  plagscan config init                      # Create .plagscan/config.toml
  plagscan domains                          # List catalog domains
  plagscan scan report.pdf --domain 3       # Compare against a domain

COMMON WORKFLOWS:
  plagscan compare a.docx b.pdf             # Score two files directly
  plagscan extract slides.pptx              # Inspect extracted text")]
struct Cli {
  /// Log at debug level (RUST_LOG still takes precedence)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Subcommands for `plagscan config`
#[derive(Subcommand)]
pub enum ConfigCommand {
  /// Show current effective configuration
  #[command(long_about = "Show the current effective configuration.\n\n\
    Displays which config file is being used and its contents as TOML.")]
  Show,

  /// Initialize project config file (.plagscan/config.toml)
  Init,

  /// Reset user configuration to defaults
  #[command(long_about = "Reset the user-level configuration file to defaults.\n\n\
    This affects ~/.config/plagscan/config.toml, not project configs.")]
  Reset,
}

#[derive(Subcommand)]
enum Commands {
  /// Extract the title and text of a file
  Extract {
    /// File to extract (.pdf, .docx, .pptx, .txt)
    file: PathBuf,
    /// File type, when the extension is missing or misleading
    #[arg(long = "type", value_name = "TYPE")]
    file_type: Option<String>,
    /// Print at most this many characters of text (0 prints everything)
    #[arg(long, default_value = "2000")]
    max_chars: usize,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Score one file against another
  #[command(after_help = "\
The second file plays the stored project. Unless --abstract is given, its
abstract is the first 1000 characters of its text.")]
  Compare {
    /// Uploaded file
    upload: PathBuf,
    /// Stored project file
    project: PathBuf,
    /// Abstract of the stored project
    #[arg(long = "abstract", value_name = "TEXT")]
    abstract_text: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Scan a file against every project in a catalog domain
  #[command(after_help = "\
EXAMPLES:
  plagscan scan report.pdf --domain 3
  plagscan scan report.pdf --domain \"Artificial Intelligence\" --threshold 0.5
  plagscan scan slides.pptx --domain 3 --limit 5 --json")]
  Scan {
    /// Uploaded file
    file: PathBuf,
    /// Domain id or name
    #[arg(short, long)]
    domain: String,
    /// Catalog file (default: configured catalog.path)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Report matches strictly above this overall similarity (0.0-1.0)
    #[arg(long)]
    threshold: Option<f64>,
    /// Maximum number of matches to report
    #[arg(short, long)]
    limit: Option<usize>,
    /// File type, when the extension is missing or misleading
    #[arg(long = "type", value_name = "TYPE")]
    file_type: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// List catalog domains
  Domains {
    /// Catalog file (default: configured catalog.path)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// List catalog projects
  Projects {
    /// Only projects in this domain (id or name)
    #[arg(short, long)]
    domain: Option<String>,
    /// Catalog file (default: configured catalog.path)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Manage configuration
  #[command(after_help = "\
CONFIG LOCATIONS:
  Project: .plagscan/config.toml
  User:    ~/.config/plagscan/config.toml")]
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  let config = Config::load_for_project(&cwd);
  init_logging(&config.logging, cli.verbose);

  match cli.command {
    Commands::Extract {
      file,
      file_type,
      max_chars,
      json,
    } => cmd_extract(&config, &file, file_type.as_deref(), max_chars, json).await,
    Commands::Compare {
      upload,
      project,
      abstract_text,
      json,
    } => cmd_compare(&config, &upload, &project, abstract_text.as_deref(), json).await,
    Commands::Scan {
      file,
      domain,
      catalog,
      threshold,
      limit,
      file_type,
      json,
    } => {
      cmd_scan(
        config,
        &cwd,
        &file,
        &domain,
        catalog.as_deref(),
        threshold,
        limit,
        file_type.as_deref(),
        json,
      )
      .await
    }
    Commands::Domains { catalog, json } => cmd_domains(&config, &cwd, catalog.as_deref(), json),
    Commands::Projects { domain, catalog, json } => {
      cmd_projects(&config, &cwd, domain.as_deref(), catalog.as_deref(), json)
    }

    // Config subcommands
    Commands::Config { command } => match command {
      ConfigCommand::Show => cmd_config_show(&config, &cwd),
      ConfigCommand::Init => cmd_config_init(&cwd),
      ConfigCommand::Reset => cmd_config_reset(),
    },
  }
}
