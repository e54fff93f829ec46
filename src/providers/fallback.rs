//! Inert providers for platforms without the Windows facilities.
//!
//! Hosts-file parsing and file staging work everywhere; the inventories
//! backed by WMI, the registry, and the mail client report
//! `Unsupported`, which the collectors log and survive.

use std::path::PathBuf;

use crate::constants;
use crate::models::{InstalledProgram, MailStore, MappedDrive, PrinterRecord, ProxySettings};

use super::{
    ApplicationInventory, DriveInventory, MailClient, MailSession, PrinterInventory,
    ProviderError, Providers, ProxyConfigSource,
};

/// Provider stub used wherever the platform facility does not exist.
pub struct UnsupportedProvider;

impl ApplicationInventory for UnsupportedProvider {
    fn installed_programs(&self) -> Result<Vec<InstalledProgram>, ProviderError> {
        Err(ProviderError::Unsupported("application inventory"))
    }
}

impl PrinterInventory for UnsupportedProvider {
    fn printers(&self) -> Result<Vec<PrinterRecord>, ProviderError> {
        Err(ProviderError::Unsupported("printer enumeration"))
    }
}

impl DriveInventory for UnsupportedProvider {
    fn mapped_drives(&self) -> Result<Vec<MappedDrive>, ProviderError> {
        Err(ProviderError::Unsupported("mapped drive enumeration"))
    }
}

impl MailClient for UnsupportedProvider {
    fn open_session(&self) -> Result<Box<dyn MailSession>, ProviderError> {
        Err(ProviderError::Unsupported("mail client"))
    }
}

impl ProxyConfigSource for UnsupportedProvider {
    fn proxy_settings(&self) -> Result<ProxySettings, ProviderError> {
        Err(ProviderError::Unsupported("proxy configuration"))
    }
}

/// Provider set for platforms without the Windows facilities.
pub fn fallback_providers() -> Providers {
    Providers {
        applications: Box::new(UnsupportedProvider),
        printers: Box::new(UnsupportedProvider),
        drives: Box::new(UnsupportedProvider),
        mail: Box::new(UnsupportedProvider),
        proxy: Box::new(UnsupportedProvider),
        hosts_path: PathBuf::from(constants::HOSTS_FILE_PATH),
        backup_files: super::default_backup_files(),
    }
}
