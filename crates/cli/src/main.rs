use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

/// Convert an HTML fragment to Slack mrkdwn on stdout.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input HTML file (default: read standard input)
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("slackify: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            slackify_core::convert_reader(file)
                .with_context(|| format!("failed to convert {}", path.display()))?
        }
        None => slackify_core::convert_reader(io::stdin().lock())
            .context("failed to convert standard input")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;
    Ok(())
}
