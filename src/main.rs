use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use config_collector::cli::Args;
use config_collector::collectors::{self, CollectionStats};
use config_collector::constants;
use config_collector::context::RunContext;
use config_collector::providers;
use config_collector::runlog::RunLog;
use config_collector::utils::summary;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize console logging
    initialize_logging(args.verbose)?;

    info!("Starting workstation configuration collection");

    // Build the immutable run context
    let ctx = RunContext::from_environment(args.output)?;

    // Setup the staging directory; a failure here is fatal
    let created = prepare_working_dir(&ctx)?;

    // Open the collection log and record the run banner
    let mut run_log = RunLog::open(&ctx.log_path, ctx.log_enabled)
        .context("Failed to open the collection log")?;
    if created {
        run_log.info(&format!("Created working directory {}", ctx.working_dir.display()))?;
    }
    write_banner(&ctx, &mut run_log)?;

    // Run every collector in the fixed order
    let providers = providers::platform_providers();
    let stats = collectors::run_all(&ctx, &mut run_log, &providers)?;

    run_log.info("Collection complete")?;

    // Write the machine-readable run summary
    write_run_summary(&ctx, &stats)?;

    info!("Workstation configuration collection completed successfully");
    println!(
        "Collection output is in {} (log file {})",
        ctx.working_dir.display(),
        ctx.log_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    Ok(())
}

/// Initialize console logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Ensure the working directory exists, returning whether it was created.
fn prepare_working_dir(ctx: &RunContext) -> Result<bool> {
    if ctx.working_dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(&ctx.working_dir).with_context(|| {
        format!("Failed to create working directory {}", ctx.working_dir.display())
    })?;

    info!("Working directory created at {}", ctx.working_dir.display());
    Ok(true)
}

/// Run-start banner recorded at the top of each day's log.
fn write_banner(ctx: &RunContext, run_log: &mut RunLog) -> Result<()> {
    run_log.info(&format!("Collection tool version {}", constants::COLLECTOR_VERSION))?;
    run_log.info(&format!("Run date: {}", ctx.run_date.to_rfc3339()))?;
    run_log.info(&format!(
        "Running as {} on {}",
        ctx.qualified_user(),
        ctx.host_name
    ))?;
    Ok(())
}

/// Write the JSON run summary next to the log. Fatal on failure.
fn write_run_summary(ctx: &RunContext, stats: &CollectionStats) -> Result<()> {
    let summary_json = summary::create_run_summary(ctx, stats)?;
    let summary_path = ctx.working_dir.join(constants::RUN_SUMMARY_NAME);

    fs::write(&summary_path, &summary_json)
        .with_context(|| format!("Failed to write run summary to {}", summary_path.display()))?;

    info!("Run summary written to {}", summary_path.display());
    Ok(())
}
