//! Capability seams over the OS facilities the collectors read.
//!
//! Each collector consumes one of these traits rather than touching WMI,
//! the registry, or the mail client directly, so every inventory is
//! testable against substitutable fakes. Real implementations live in
//! the platform modules and are selected once at startup.

use std::env;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::constants;
use crate::models::{InstalledProgram, MailStore, MappedDrive, PrinterRecord, ProxySettings};

pub mod fallback;
#[cfg(target_os = "windows")]
pub mod windows;

/// Failure surface shared by all providers. Collectors translate these
/// into Error log lines and keep the run alive.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),

    #[error("query failed: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Snapshot source for the OS installed-application inventory.
///
/// The underlying OS provider enumerates the full installer database and
/// can be slow; callers should expect the call to block.
#[cfg_attr(test, mockall::automock)]
pub trait ApplicationInventory {
    fn installed_programs(&self) -> Result<Vec<InstalledProgram>, ProviderError>;
}

/// Snapshot source for printer connections visible to the current user.
#[cfg_attr(test, mockall::automock)]
pub trait PrinterInventory {
    fn printers(&self) -> Result<Vec<PrinterRecord>, ProviderError>;
}

/// Snapshot source for SMB drive mappings.
#[cfg_attr(test, mockall::automock)]
pub trait DriveInventory {
    fn mapped_drives(&self) -> Result<Vec<MappedDrive>, ProviderError>;
}

/// Factory for mail-client sessions. A fresh session is opened for each
/// collection and released when the returned handle drops.
pub trait MailClient {
    fn open_session(&self) -> Result<Box<dyn MailSession>, ProviderError>;
}

/// An open mail-client session. Dropping the handle releases the
/// underlying client resource; there is no separate close call.
pub trait MailSession {
    fn stores(&mut self) -> Result<Vec<MailStore>, ProviderError>;
}

/// Source for the user's proxy configuration pair and raw
/// connection-settings blob.
#[cfg_attr(test, mockall::automock)]
pub trait ProxyConfigSource {
    fn proxy_settings(&self) -> Result<ProxySettings, ProviderError>;
}

/// The full provider set one collection run consumes, bundled so the
/// orchestrator stays platform-agnostic.
pub struct Providers {
    pub applications: Box<dyn ApplicationInventory>,
    pub printers: Box<dyn PrinterInventory>,
    pub drives: Box<dyn DriveInventory>,
    pub mail: Box<dyn MailClient>,
    pub proxy: Box<dyn ProxyConfigSource>,
    /// Hosts file the hosts collector parses.
    pub hosts_path: PathBuf,
    /// Absolute paths of the user files to stage.
    pub backup_files: Vec<PathBuf>,
}

/// Get the appropriate providers for the current platform.
pub fn platform_providers() -> Providers {
    #[cfg(target_os = "windows")]
    {
        info!("Using Windows providers");
        windows::windows_providers()
    }
    #[cfg(not(target_os = "windows"))]
    {
        info!("Using fallback providers for unsupported platform");
        fallback::fallback_providers()
    }
}

/// Resolve the static backup file list against the current user profile.
pub fn default_backup_files() -> Vec<PathBuf> {
    let profile = env::var_os("USERPROFILE")
        .or_else(|| env::var_os("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir);

    constants::BACKUP_FILE_SUFFIXES
        .iter()
        .map(|suffix| profile.join(suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_providers_resolve() {
        let providers = platform_providers();
        assert!(!providers.hosts_path.as_os_str().is_empty());
        assert_eq!(providers.backup_files.len(), constants::BACKUP_FILE_SUFFIXES.len());
    }

    #[test]
    fn test_default_backup_files_are_absolute() {
        for path in default_backup_files() {
            assert!(path.is_absolute(), "expected absolute path: {}", path.display());
        }
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Unsupported("printer enumeration");
        assert_eq!(err.to_string(), "printer enumeration is not available on this platform");

        let err = ProviderError::Query("bad query".to_string());
        assert!(err.to_string().contains("bad query"));
    }
}
