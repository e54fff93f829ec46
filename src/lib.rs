//! # config-collector
//!
//! A single-pass collector that records a workstation's user-specific
//! configuration state and stages select files for a later provisioning
//! or migration workflow.
//!
//! ## Overview
//!
//! One run per user session enumerates installed applications, printer
//! connections, mapped network drives, local mail archive stores, proxy
//! configuration, and hosts-file entries, then copies a fixed set of
//! user files into a staging directory. Every fact lands as one line in
//! an append-only, timestamped collection log; a JSON run summary is
//! written alongside it.
//!
//! Execution is strictly sequential: each collector reads one external
//! data source through an injected provider and runs to completion
//! before the next starts. A failing provider is logged and survived; a
//! failing log or staging directory aborts the run with a non-zero exit.
//!
//! ## Usage
//!
//! ```no_run
//! use config_collector::collectors;
//! use config_collector::context::RunContext;
//! use config_collector::providers;
//! use config_collector::runlog::RunLog;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = RunContext::from_environment(None)?;
//! std::fs::create_dir_all(&ctx.working_dir)?;
//!
//! let mut log = RunLog::open(&ctx.log_path, ctx.log_enabled)?;
//! let providers = providers::platform_providers();
//!
//! let stats = collectors::run_all(&ctx, &mut log, &providers)?;
//! println!("{} printers, {} programs", stats.printers, stats.programs);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`context`]: The immutable per-run execution snapshot
//! - [`models`]: Record types for the collected facts
//! - [`runlog`]: The append-only per-run collection log
//! - [`providers`]: Capability seams over the OS data sources
//! - [`collectors`]: One collector per configuration inventory
//! - [`utils`]: Run summary generation
//! - [`constants`]: Compile-time collection parameters

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Inventory collectors for the user's configuration state
pub mod collectors;

/// Compile-time collection parameters
pub mod constants;

/// The immutable per-run execution snapshot
pub mod context;

/// Record types for the collected facts
pub mod models;

/// Capability seams over the OS data sources
pub mod providers;

/// The append-only per-run collection log
pub mod runlog;

/// Utility functions for the run summary
pub mod utils;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
