//! Windows implementations of the provider seams.
//!
//! Inventory snapshots come from WMI raw queries; proxy state and the
//! mail-store catalog come from the user registry hive. Each provider
//! takes one snapshot per call and holds no state between calls.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use winreg::enums::HKEY_CURRENT_USER;
use winreg::RegKey;
use wmi::{COMLibrary, WMIConnection};

use crate::constants;
use crate::models::{InstalledProgram, MailStore, MappedDrive, PrinterRecord, ProxySettings, StoreType};

use super::{
    ApplicationInventory, DriveInventory, MailClient, MailSession, PrinterInventory,
    ProviderError, Providers, ProxyConfigSource,
};

const INTERNET_SETTINGS_KEY: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Internet Settings";
const CONNECTIONS_KEY: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Internet Settings\Connections";
const CONNECTION_SETTINGS_VALUE: &str = "DefaultConnectionSettings";

/// Store catalog of the default Outlook profile. Value names are the
/// absolute paths of every open store file.
const OUTLOOK_CATALOG_KEY: &str = r"Software\Microsoft\Office\16.0\Outlook\Search\Catalog";

fn wmi_connection() -> Result<WMIConnection, ProviderError> {
    let com = COMLibrary::new()
        .map_err(|e| ProviderError::Query(format!("COM initialization failed: {}", e)))?;
    WMIConnection::new(com.into())
        .map_err(|e| ProviderError::Query(format!("WMI connection failed: {}", e)))
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct Win32Product {
    name: Option<String>,
    version: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct Win32Printer {
    name: Option<String>,
    system_name: Option<String>,
    port_name: Option<String>,
    driver_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct Win32MappedLogicalDisk {
    name: Option<String>,
    provider_name: Option<String>,
}

/// Installed-application inventory backed by the Windows installer
/// database. Enumerating Win32_Product is slow and may trigger installer
/// consistency checks; that behavior belongs to the OS provider.
pub struct WmiApplicationInventory;

impl ApplicationInventory for WmiApplicationInventory {
    fn installed_programs(&self) -> Result<Vec<InstalledProgram>, ProviderError> {
        let conn = wmi_connection()?;
        let rows: Vec<Win32Product> = conn
            .raw_query("SELECT Name, Version FROM Win32_Product")
            .map_err(|e| ProviderError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| InstalledProgram {
                name: row.name.unwrap_or_default(),
                version: row.version.unwrap_or_default(),
            })
            .collect())
    }
}

/// Printer snapshot from Win32_Printer.
pub struct WmiPrinterInventory;

impl PrinterInventory for WmiPrinterInventory {
    fn printers(&self) -> Result<Vec<PrinterRecord>, ProviderError> {
        let conn = wmi_connection()?;
        let rows: Vec<Win32Printer> = conn
            .raw_query("SELECT Name, SystemName, PortName, DriverName FROM Win32_Printer")
            .map_err(|e| ProviderError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PrinterRecord {
                name: row.name.unwrap_or_default(),
                host_computer: row.system_name.unwrap_or_default(),
                port_name: row.port_name.unwrap_or_default(),
                driver_name: row.driver_name.unwrap_or_default(),
            })
            .collect())
    }
}

/// Mapped-drive snapshot from Win32_MappedLogicalDisk.
pub struct WmiDriveInventory;

impl DriveInventory for WmiDriveInventory {
    fn mapped_drives(&self) -> Result<Vec<MappedDrive>, ProviderError> {
        let conn = wmi_connection()?;
        let rows: Vec<Win32MappedLogicalDisk> = conn
            .raw_query("SELECT Name, ProviderName FROM Win32_MappedLogicalDisk")
            .map_err(|e| ProviderError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| MappedDrive {
                local_path: row.name.unwrap_or_default(),
                remote_path: row.provider_name.unwrap_or_default(),
            })
            .collect())
    }
}

/// Mail client backed by the local Outlook profile's store catalog in
/// the user hive. The session owns the registry handle for its lifetime
/// and releases it when dropped.
pub struct OutlookMailClient;

struct OutlookCatalogSession {
    catalog: RegKey,
}

impl MailClient for OutlookMailClient {
    fn open_session(&self) -> Result<Box<dyn MailSession>, ProviderError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let catalog = hkcu.open_subkey(OUTLOOK_CATALOG_KEY)?;
        Ok(Box::new(OutlookCatalogSession { catalog }))
    }
}

impl MailSession for OutlookCatalogSession {
    fn stores(&mut self) -> Result<Vec<MailStore>, ProviderError> {
        let mut stores = Vec::new();

        for value in self.catalog.enum_values() {
            let (file_path, _) = value?;
            let display_name = Path::new(&file_path)
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| file_path.clone());

            // Archive/offline stores are the .pst files; .ost caches
            // belong to a live server mailbox.
            let store_type = if file_path.to_ascii_lowercase().ends_with(".pst") {
                StoreType::LocalArchive
            } else {
                StoreType::ServerMailbox
            };

            stores.push(MailStore {
                display_name,
                file_path,
                store_type,
            });
        }

        Ok(stores)
    }
}

/// Proxy configuration from the Internet Settings namespace in the user
/// hive: the ProxyEnable/ProxyServer pair plus the raw
/// DefaultConnectionSettings blob.
pub struct RegistryProxySource;

impl ProxyConfigSource for RegistryProxySource {
    fn proxy_settings(&self) -> Result<ProxySettings, ProviderError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let settings = hkcu.open_subkey(INTERNET_SETTINGS_KEY)?;

        let proxy_enable: u32 = settings.get_value("ProxyEnable").unwrap_or(0);
        let proxy_server: String = settings.get_value("ProxyServer").unwrap_or_default();

        let connection_settings = hkcu
            .open_subkey(CONNECTIONS_KEY)
            .and_then(|key| key.get_raw_value(CONNECTION_SETTINGS_VALUE))
            .map(|value| value.bytes)
            .unwrap_or_default();

        Ok(ProxySettings {
            proxy_enabled: proxy_enable != 0,
            proxy_server,
            connection_settings,
        })
    }
}

/// Provider set for a Windows workstation.
pub fn windows_providers() -> Providers {
    Providers {
        applications: Box::new(WmiApplicationInventory),
        printers: Box::new(WmiPrinterInventory),
        drives: Box::new(WmiDriveInventory),
        mail: Box::new(OutlookMailClient),
        proxy: Box::new(RegistryProxySource),
        hosts_path: PathBuf::from(constants::HOSTS_FILE_PATH),
        backup_files: super::default_backup_files(),
    }
}
