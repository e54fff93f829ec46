use std::fs;
use std::path::Path;

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::HostsEntry;
use crate::runlog::RunLog;

lazy_static! {
    /// Anchored `<IPv4> <rest-of-line>` entry. Comments, blanks, and
    /// indented lines never match.
    static ref HOSTS_ENTRY: Regex =
        Regex::new(r"^(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+(\S.*)$").unwrap();
}

/// Log every resolvable entry in the hosts file, or a single "no
/// entries" line when nothing matches.
pub fn collect(log: &mut RunLog, hosts_path: &Path) -> Result<usize> {
    let content = match fs::read_to_string(hosts_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("hosts file {} unreadable: {}", hosts_path.display(), e);
            log.error("Hosts file entry: Unable to read hosts file")?;
            return Ok(0);
        }
    };

    let entries = parse_entries(&content);
    if entries.is_empty() {
        log.info("Hosts file entry: No entries found.")?;
        return Ok(0);
    }

    for entry in &entries {
        log.info(&format!("Hosts file entry: {}, {}", entry.ip, entry.host))?;
    }

    Ok(entries.len())
}

/// Pure matching pass over the file content; running it twice on the
/// same input yields the same entries.
pub fn parse_entries(content: &str) -> Vec<HostsEntry> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim_end_matches('\r');
            HOSTS_ENTRY.captures(line).map(|captures| HostsEntry {
                ip: captures[1].to_string(),
                host: captures[2].to_string(),
            })
        })
        .collect()
}
