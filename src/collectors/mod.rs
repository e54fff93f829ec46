//! Inventory collectors.
//!
//! Each collector reads one provider snapshot, appends formatted facts
//! to the run log, and returns how many facts it recorded. A failing
//! provider is logged and survived; only a failing run log aborts the
//! sequence.

pub mod applications;
pub mod drives;
pub mod files;
pub mod hosts;
pub mod mail_stores;
pub mod printers;
pub mod proxy;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::context::RunContext;
use crate::providers::Providers;
use crate::runlog::RunLog;

/// Per-collector fact counts, reported in the run summary.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CollectionStats {
    pub printers: usize,
    pub programs: usize,
    pub mapped_drives: usize,
    pub mail_stores: usize,
    pub hosts_entries: usize,
    pub files_copied: usize,
}

/// Run every collector in the fixed presentation order, reporting coarse
/// progress on the console.
pub fn run_all(ctx: &RunContext, log: &mut RunLog, providers: &Providers) -> Result<CollectionStats> {
    let mut stats = CollectionStats::default();

    info!("[1/7] Enumerating printers");
    stats.printers = printers::collect(log, providers.printers.as_ref())?;

    info!("[2/7] Enumerating installed applications (this can take a while)");
    stats.programs = applications::collect(log, providers.applications.as_ref())?;

    info!("[3/7] Enumerating mapped drives");
    stats.mapped_drives = drives::collect(log, providers.drives.as_ref())?;

    info!("[4/7] Looking for mail archive stores");
    stats.mail_stores = mail_stores::collect(log, providers.mail.as_ref())?;

    info!("[5/7] Inspecting proxy configuration");
    proxy::collect(log, providers.proxy.as_ref())?;

    info!("[6/7] Parsing the hosts file");
    stats.hosts_entries = hosts::collect(log, &providers.hosts_path)?;

    info!("[7/7] Staging backup files");
    stats.files_copied = files::collect(log, &providers.backup_files, &ctx.working_dir)?;

    Ok(stats)
}
