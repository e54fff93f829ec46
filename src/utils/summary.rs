use anyhow::{Context, Result};
use serde_json::json;
use uuid::Uuid;

use crate::collectors::CollectionStats;
use crate::context::RunContext;

/// Create the JSON run summary written next to the log.
///
/// A machine-readable companion to the text log: one object naming the
/// run identity and the per-collector fact counts, for the provisioning
/// workflow that consumes the staging directory.
pub fn create_run_summary(ctx: &RunContext, stats: &CollectionStats) -> Result<String> {
    let log_file = ctx
        .log_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let summary = json!({
        "collection_id": Uuid::new_v4().to_string(),
        "hostname": ctx.host_name,
        "user": ctx.user_name,
        "domain": ctx.domain_name,
        "collection_time": ctx.run_date.to_rfc3339(),
        "collector_version": env!("CARGO_PKG_VERSION"),
        "log_file": log_file,
        "facts": stats,
    });

    serde_json::to_string_pretty(&summary).context("Failed to serialize run summary to JSON")
}
