//! `typeset` command line: build a typography stylesheet from a config file.
//!
//! ```text
//! typeset build typography.yaml --breakpoints breakpoints.yaml -o dist
//! typeset variants typography.yaml
//! ```
//!
//! Set `RUST_LOG=typeset=debug` to see resolution and publishing.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use typeset::{
    create_typography, load_breakpoints, resolve_options, stringify_style, BreakpointTable,
    DirectorySink, Headless, Observable, StyleSink, TypographyConfig,
};

/// Compile typography variants into a layered stylesheet.
#[derive(Parser)]
#[command(name = "typeset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the stylesheet for a configuration file
    Build {
        /// Typography config (.yaml, .yml or .json)
        config: PathBuf,

        /// Breakpoint table (name: min-width); defaults to the built-in table
        #[arg(long, value_name = "FILE")]
        breakpoints: Option<PathBuf>,

        /// Skip media-query variants
        #[arg(long)]
        no_responsive: bool,

        /// Write `{stylesheetId}.css` into this directory instead of stdout
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// List the resolved variants and their declarations
    Variants {
        /// Typography config (.yaml, .yml or .json)
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            config,
            breakpoints,
            no_responsive,
            output,
        } => build(config, breakpoints, no_responsive, output),
        Command::Variants { config } => variants(config),
    }
}

fn load_config(path: &Path) -> Result<TypographyConfig> {
    TypographyConfig::from_file(path)
        .with_context(|| format!("loading typography config {}", path.display()))
}

fn build(
    config: PathBuf,
    breakpoints: Option<PathBuf>,
    no_responsive: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(&config)?;
    if no_responsive {
        if let TypographyConfig::Enabled(options) = &mut config {
            options.responsive = Some(false);
        }
    }

    let table = match &breakpoints {
        Some(path) => load_breakpoints(path)
            .with_context(|| format!("loading breakpoints {}", path.display()))?,
        None => BreakpointTable::default(),
    };

    let sink: Box<dyn StyleSink> = match &output {
        Some(dir) => Box::new(DirectorySink::new(dir)),
        None => Box::new(Headless),
    };

    let Some(typography) = create_typography(config, Some(Observable::new(table)), sink.as_ref())?
    else {
        bail!("typography is disabled in this configuration");
    };

    match output {
        Some(dir) => {
            if typography.publish_count() == 0 {
                bail!("failed to write stylesheet into {}", dir.display());
            }
            eprintln!(
                "wrote {}",
                dir.join(format!("{}.css", typography.stylesheet_id()))
                    .display()
            );
        }
        None => println!("{}", typography.css()),
    }
    Ok(())
}

fn variants(config: PathBuf) -> Result<()> {
    let config = load_config(&config)?;
    let Some(options) = config.options() else {
        bail!("typography is disabled in this configuration");
    };

    let resolved = resolve_options(Some(options));
    for (name, style) in resolved.variants.iter() {
        println!("{:<20} {}", name, stringify_style(style, None));
    }
    Ok(())
}
