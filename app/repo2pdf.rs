//! Command-line interface for repo2pdf.
//!
//! Renders the source files of a directory into
//! `<dir>/repository_code_structure.pdf`. The directory comes from the first
//! argument or, when none is given, from an interactive prompt.

use clap::Parser;
use repo2pdf::{RenderBuilder, RenderReport, render_repository};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// repo2pdf — render a source tree into a PDF listing
#[derive(Parser)]
#[command(name = "repo2pdf", version, about, long_about = None)]
struct Cli {
    /// Repository directory (prompted for when omitted)
    root: Option<PathBuf>,

    /// Log every file considered
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Asks for the repository path on stdout and reads one line from stdin.
fn prompt_for_root() -> io::Result<PathBuf> {
    print!("Enter the repository path: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(answer)
    })
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => prompt_for_root().unwrap_or_else(|e| {
            eprintln!("Error: failed to read repository path: {}", e);
            exit(1);
        }),
    };

    match render_repository(RenderBuilder::new(root).build()) {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &RenderReport) {
    if !report.skipped.is_empty() {
        eprintln!("Skipped {} file(s)", report.skipped.len());
    }
    println!("PDF generated: {}", report.output.display());
}
