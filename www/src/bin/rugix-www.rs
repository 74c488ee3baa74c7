//! # rugix-www
//!
//! Renders the Rugix home page to static HTML.
//!
//! ```bash
//! rugix-www build --config site.toml --static-dir static --out build
//! rugix-www check --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rugix_www::content;
use rugix_www::pipeline::{self, BuildOptions, BuildReport};

#[derive(Parser, Debug)]
#[command(name = "rugix-www")]
#[command(about = "Render the Rugix home page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render index.html and copy referenced assets into the output directory
    Build {
        #[command(flatten)]
        site: SiteArgs,
        /// Output directory
        #[arg(long, short, default_value = "build")]
        out: PathBuf,
        /// Print the build report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Resolve configuration and assets and render in memory without writing
    Check {
        #[command(flatten)]
        site: SiteArgs,
        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
        /// Print the page content tree as JSON instead of a report
        #[arg(long)]
        dump_content: bool,
    },
}

#[derive(clap::Args, Debug)]
struct SiteArgs {
    /// Site configuration file
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,
    /// Directory holding static assets (logos)
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

fn print_report(report: &BuildReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    match &report.output {
        Some(out) => println!(
            "Built {} page(s), {} asset(s) into {}",
            report.pages.len(),
            report.assets.len(),
            out.display()
        ),
        None => println!(
            "OK: {} page(s), {} asset(s) resolved",
            report.pages.len(),
            report.assets.len()
        ),
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("rugix-www v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Build { site, out, json } => {
            let options = BuildOptions {
                config_path: site.config,
                static_dir: site.static_dir,
                out_dir: out,
            };
            let report = pipeline::build_site(&options)
                .with_context(|| format!("failed to build into {}", options.out_dir.display()))?;
            print_report(&report, json)
        }
        Command::Check {
            site,
            json,
            dump_content,
        } => {
            if dump_content {
                println!("{}", serde_json::to_string_pretty(&content::home_page())?);
                return Ok(());
            }
            let report = pipeline::check_site(&site.config, &site.static_dir)
                .context("site check failed")?;
            print_report(&report, json)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[rugix-www] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
