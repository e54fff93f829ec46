use anyhow::Result;
use log::debug;

use crate::providers::MailClient;
use crate::runlog::RunLog;

/// Report local archive stores from a fresh mail-client session.
///
/// The session handle is dropped before any line is written; the client
/// resource is released on every exit path. Any failure while opening
/// or enumerating collapses into a single Error line; this collector
/// never aborts the run.
pub fn collect(log: &mut RunLog, client: &dyn MailClient) -> Result<usize> {
    let stores = match client.open_session().and_then(|mut session| session.stores()) {
        Ok(stores) => stores,
        Err(e) => {
            debug!("mail store enumeration failed: {}", e);
            log.error("Outlook PST: Unable to get PST Information")?;
            return Ok(0);
        }
    };

    let mut count = 0;
    for store in stores.iter().filter(|store| store.store_type.is_local_archive()) {
        log.info(&format!(
            "Outlook PST: \"{}\" found at {}",
            store.display_name, store.file_path
        ))?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::{MailStore, StoreType};
    use crate::providers::{MailSession, ProviderError};
    use crate::test_utils::{logged_messages, temp_runlog};

    /// Fake client whose sessions bump a shared counter when released.
    struct FakeMailClient {
        stores: Result<Vec<MailStore>, ()>,
        fail_open: bool,
        releases: Arc<AtomicUsize>,
    }

    struct FakeSession {
        stores: Result<Vec<MailStore>, ()>,
        releases: Arc<AtomicUsize>,
    }

    impl MailClient for FakeMailClient {
        fn open_session(&self) -> Result<Box<dyn MailSession>, ProviderError> {
            if self.fail_open {
                return Err(ProviderError::Query("client not installed".to_string()));
            }
            Ok(Box::new(FakeSession {
                stores: self.stores.clone(),
                releases: Arc::clone(&self.releases),
            }))
        }
    }

    impl MailSession for FakeSession {
        fn stores(&mut self) -> Result<Vec<MailStore>, ProviderError> {
            self.stores
                .clone()
                .map_err(|_| ProviderError::Query("MAPI error".to_string()))
        }
    }

    impl Drop for FakeSession {
        fn drop(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn store(name: &str, path: &str, store_type: StoreType) -> MailStore {
        MailStore {
            display_name: name.to_string(),
            file_path: path.to_string(),
            store_type,
        }
    }

    #[test]
    fn test_only_local_archive_stores_are_logged() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = FakeMailClient {
            stores: Ok(vec![
                store("Mailbox - J. Doe", "server", StoreType::PrimaryMailbox),
                store("Archive 2023", r"C:\Users\jdoe\archive2023.pst", StoreType::LocalArchive),
                store("Public Folders", "server", StoreType::PublicFolders),
                store("Old Mail", r"D:\mail\old.pst", StoreType::LocalArchive),
            ]),
            fail_open: false,
            releases: Arc::clone(&releases),
        };

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &client).unwrap();

        assert_eq!(count, 2);
        let messages = logged_messages(&log);
        assert_eq!(
            messages,
            vec![
                r#"Info: Outlook PST: "Archive 2023" found at C:\Users\jdoe\archive2023.pst"#,
                r#"Info: Outlook PST: "Old Mail" found at D:\mail\old.pst"#,
            ]
        );
    }

    #[test]
    fn test_session_released_once_on_success() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = FakeMailClient {
            stores: Ok(vec![store("A", r"C:\a.pst", StoreType::LocalArchive)]),
            fail_open: false,
            releases: Arc::clone(&releases),
        };

        let (_dir, mut log) = temp_runlog();
        collect(&mut log, &client).unwrap();

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_session_released_once_when_enumeration_fails() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = FakeMailClient {
            stores: Err(()),
            fail_open: false,
            releases: Arc::clone(&releases),
        };

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &client).unwrap();

        assert_eq!(count, 0);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        assert_eq!(
            logged_messages(&log),
            vec!["Error: Outlook PST: Unable to get PST Information"]
        );
    }

    #[test]
    fn test_open_failure_logs_single_error_line() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = FakeMailClient {
            stores: Ok(vec![]),
            fail_open: true,
            releases: Arc::clone(&releases),
        };

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &client).unwrap();

        assert_eq!(count, 0);
        assert_eq!(releases.load(Ordering::SeqCst), 0);
        assert_eq!(
            logged_messages(&log),
            vec!["Error: Outlook PST: Unable to get PST Information"]
        );
    }

    #[test]
    fn test_no_archive_stores_logs_nothing() {
        let releases = Arc::new(AtomicUsize::new(0));
        let client = FakeMailClient {
            stores: Ok(vec![store("Mailbox", "server", StoreType::ServerMailbox)]),
            fail_open: false,
            releases: Arc::clone(&releases),
        };

        let (_dir, mut log) = temp_runlog();
        let count = collect(&mut log, &client).unwrap();

        assert_eq!(count, 0);
        assert!(logged_messages(&log).is_empty());
    }
}
