use serde::{Serialize, Deserialize};

use crate::constants::AUTODETECT_BYTE_OFFSET;

/// One entry from the OS installed-application inventory.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstalledProgram {
    pub name: String,
    pub version: String,
}

/// A printer connection visible to the current user.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PrinterRecord {
    pub name: String,
    pub host_computer: String,
    pub port_name: String,
    pub driver_name: String,
}

/// A drive letter mapped to a remote UNC target.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MappedDrive {
    pub local_path: String,
    pub remote_path: String,
}

/// Mail-client data store classification, mirroring the client's
/// store-type enumeration values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// Primary server mailbox (raw value 0).
    PrimaryMailbox,
    /// Additional live server mailbox (raw value 1).
    ServerMailbox,
    /// Server public folders (raw value 2).
    PublicFolders,
    /// A store backed by a local archive/offline file (raw value 3).
    LocalArchive,
    /// Delegate server mailbox (raw value 4).
    DelegateMailbox,
    /// A value the client enumeration does not define.
    Other(u32),
}

impl StoreType {
    /// Map the client's raw store-type value onto the enumeration.
    pub fn from_raw(raw: u32) -> StoreType {
        match raw {
            0 => StoreType::PrimaryMailbox,
            1 => StoreType::ServerMailbox,
            2 => StoreType::PublicFolders,
            3 => StoreType::LocalArchive,
            4 => StoreType::DelegateMailbox,
            other => StoreType::Other(other),
        }
    }

    /// Whether the store is backed by a local archive/offline file.
    pub fn is_local_archive(&self) -> bool {
        matches!(self, StoreType::LocalArchive)
    }
}

/// An open data store reported by the mail client.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MailStore {
    pub display_name: String,
    pub file_path: String,
    pub store_type: StoreType,
}

/// User proxy configuration as read from the registry namespace: the
/// simple enabled/server pair plus the raw connection-settings blob.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProxySettings {
    pub proxy_enabled: bool,
    pub proxy_server: String,
    pub connection_settings: Vec<u8>,
}

impl ProxySettings {
    /// The flag byte encoding the auto-detect checkbox state, if the
    /// blob is long enough to hold it.
    pub fn autodetect_byte(&self) -> Option<u8> {
        self.connection_settings.get(AUTODETECT_BYTE_OFFSET).copied()
    }
}

/// One resolvable line from the platform hosts file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HostsEntry {
    pub ip: String,
    pub host: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_from_raw() {
        assert_eq!(StoreType::from_raw(0), StoreType::PrimaryMailbox);
        assert_eq!(StoreType::from_raw(3), StoreType::LocalArchive);
        assert_eq!(StoreType::from_raw(4), StoreType::DelegateMailbox);
        assert_eq!(StoreType::from_raw(99), StoreType::Other(99));
    }

    #[test]
    fn test_only_raw_three_is_local_archive() {
        for raw in 0..10u32 {
            assert_eq!(StoreType::from_raw(raw).is_local_archive(), raw == 3);
        }
    }

    #[test]
    fn test_autodetect_byte_requires_long_enough_blob() {
        let mut settings = ProxySettings::default();
        assert_eq!(settings.autodetect_byte(), None);

        settings.connection_settings = vec![0; 8];
        assert_eq!(settings.autodetect_byte(), None);

        settings.connection_settings = vec![70, 0, 0, 0, 2, 0, 0, 0, 9, 0];
        assert_eq!(settings.autodetect_byte(), Some(9));
    }
}
