use anyhow::Result;
use log::debug;

use crate::providers::DriveInventory;
use crate::runlog::RunLog;

/// Log every SMB drive mapping, or a single "none found" line.
pub fn collect(log: &mut RunLog, provider: &dyn DriveInventory) -> Result<usize> {
    let drives = match provider.mapped_drives() {
        Ok(drives) => drives,
        Err(e) => {
            debug!("mapped drive enumeration unavailable: {}", e);
            log.error("Drive: Unable to enumerate mapped drives")?;
            return Ok(0);
        }
    };

    if drives.is_empty() {
        log.info("Drive: No mapped drives found")?;
        return Ok(0);
    }

    for drive in &drives {
        log.info(&format!("Drive: {} is mapped to {}", drive.local_path, drive.remote_path))?;
    }

    Ok(drives.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MappedDrive;
    use crate::providers::{MockDriveInventory, ProviderError};
    use crate::test_utils::{logged_messages, temp_runlog};

    #[test]
    fn test_each_mapping_is_logged() {
        let mut provider = MockDriveInventory::new();
        provider.expect_mapped_drives().returning(|| {
            Ok(vec![
                MappedDrive {
                    local_path: "H:".to_string(),
                    remote_path: r"\\fileserver\home".to_string(),
                },
                MappedDrive {
                    local_path: "S:".to_string(),
                    remote_path: r"\\fileserver\shared".to_string(),
                },
            ])
        });

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &provider).unwrap();

        assert_eq!(count, 2);
        let messages = logged_messages(&log);
        assert_eq!(messages[0], r"Info: Drive: H: is mapped to \\fileserver\home");
        assert_eq!(messages[1], r"Info: Drive: S: is mapped to \\fileserver\shared");
    }

    #[test]
    fn test_empty_snapshot_logs_none_found_once() {
        let mut provider = MockDriveInventory::new();
        provider.expect_mapped_drives().returning(|| Ok(vec![]));

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &provider).unwrap();

        assert_eq!(count, 0);
        assert_eq!(logged_messages(&log), vec!["Info: Drive: No mapped drives found"]);
    }

    #[test]
    fn test_provider_failure_logs_single_error_line() {
        let mut provider = MockDriveInventory::new();
        provider
            .expect_mapped_drives()
            .returning(|| Err(ProviderError::Unsupported("mapped drive enumeration")));

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &provider).unwrap();

        assert_eq!(count, 0);
        let messages = logged_messages(&log);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error: Drive:"));
    }
}
