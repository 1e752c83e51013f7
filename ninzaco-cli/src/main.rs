//! # ninzaco
//!
//! Builds the Ninzaco landing page as static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html
//! ninzaco build
//!
//! # Separate stylesheet, custom output directory
//! ninzaco build --stylesheet external --out-dir public
//!
//! # Print the document or its stylesheet
//! ninzaco render > index.html
//! ninzaco css > styles.css
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use ninzaco_landing::config::{SiteConfig, StylesheetMode};
use ninzaco_landing::{render_page, render_stylesheet, write_site};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "ninzaco")]
#[command(about = "Render the Ninzaco landing page to static HTML")]
#[command(version)]
struct Args {
    /// Config file (default: ./ninzaco.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write index.html (and the stylesheet in external mode)
    Build {
        /// Output directory (overrides output.dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Print the full HTML document to stdout
    Render {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Print the document stylesheet to stdout
    Css,
    /// Print the resolved configuration as JSON
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Flags that override values from the config file.
#[derive(clap::Args, Debug, Default)]
struct Overrides {
    /// Document title
    #[arg(long)]
    title: Option<String>,
    /// Meta description
    #[arg(long)]
    description: Option<String>,
    /// `<html lang>` value
    #[arg(long)]
    lang: Option<String>,
    /// Stylesheet delivery
    #[arg(long, value_enum)]
    stylesheet: Option<StylesheetArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StylesheetArg {
    Inline,
    External,
}

impl From<StylesheetArg> for StylesheetMode {
    fn from(arg: StylesheetArg) -> Self {
        match arg {
            StylesheetArg::Inline => StylesheetMode::Inline,
            StylesheetArg::External => StylesheetMode::External,
        }
    }
}

impl Overrides {
    fn apply(self, config: &mut SiteConfig) {
        if let Some(title) = self.title {
            config.metadata.title = title;
        }
        if let Some(description) = self.description {
            config.metadata.description = description;
        }
        if let Some(lang) = self.lang {
            config.lang = lang;
        }
        if let Some(stylesheet) = self.stylesheet {
            config.output.stylesheet = stylesheet.into();
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("resolving working directory")?;
            SiteConfig::load(&cwd).context("loading ninzaco.toml")
        }
    }
}

fn write_stdout(contents: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(contents.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush())
        .context("writing to stdout")
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;

    match args.command {
        Command::Build { out_dir, overrides } => {
            overrides.apply(&mut config);
            let out_dir = out_dir.unwrap_or_else(|| config.output.dir.clone());
            debug!(out_dir = %out_dir.display(), "building site");

            let report = write_site(&config, &out_dir)
                .with_context(|| format!("building site into {}", out_dir.display()))?;

            info!(
                files = report.files.len(),
                bytes = report.total_bytes(),
                "Built {}",
                out_dir.display()
            );
        }
        Command::Render { overrides } => {
            overrides.apply(&mut config);
            write_stdout(&render_page(&config))?;
        }
        Command::Css => {
            write_stdout(&render_stylesheet())?;
        }
        Command::Config { overrides } => {
            overrides.apply(&mut config);
            let json = serde_json::to_string_pretty(&config).context("serializing config")?;
            write_stdout(&json)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("ninzaco v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
