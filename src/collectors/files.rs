use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::runlog::RunLog;

/// Stage the configured user files into the working directory.
///
/// Existing files are copied with overwrite; duplicate list entries are
/// copied again rather than deduplicated. A failed copy is logged and
/// skipped. Compression of the staged files is not implemented.
pub fn collect(log: &mut RunLog, backup_files: &[PathBuf], working_dir: &Path) -> Result<usize> {
    log.info("Looking for files to back up")?;

    if backup_files.is_empty() {
        log.info("No backup files found.")?;
        return Ok(0);
    }

    let mut copied = 0;
    for path in backup_files {
        if !path.is_file() {
            log.info(&format!("Misc Files: File {} not found, skipping", path.display()))?;
            continue;
        }

        let Some(file_name) = path.file_name() else {
            log.info(&format!("Misc Files: File {} not found, skipping", path.display()))?;
            continue;
        };

        let destination = working_dir.join(file_name);
        match fs::copy(path, &destination) {
            Ok(_) => {
                log.info(&format!(
                    "Misc Files: Copied {} to {}",
                    path.display(),
                    working_dir.display()
                ))?;
                copied += 1;
            }
            Err(e) => {
                debug!("copy of {} failed: {}", path.display(), e);
                log.error(&format!(
                    "Misc Files: Failed to copy {}, skipping",
                    path.display()
                ))?;
            }
        }
    }

    Ok(copied)
}
