mod args;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use ps_batch::BatchRunner;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let runner = BatchRunner::new(cli.config()).context("invalid arguments")?;
    let dir = runner.config().target_dir.display().to_string();
    tracing::debug!(config = ?runner.config(), "starting run");

    let report = if cli.json {
        let report = runner
            .run(&mut io::sink())
            .with_context(|| format!("failed to clean posts in {dir}"))?;
        println!("{}", report.to_json()?);
        report
    } else {
        let mut out = io::stdout().lock();
        runner
            .run(&mut out)
            .with_context(|| format!("failed to clean posts in {dir}"))?
    };

    if report.failed > 0 {
        anyhow::bail!("{} of {} posts could not be processed", report.failed, report.found);
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn setup_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
