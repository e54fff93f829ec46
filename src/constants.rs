//! Global constants for the config-collector application.
//!
//! Collection behavior is constant-configured: there is no configuration
//! file, and every tunable lives here.

/// Collector version string written to the run-start banner.
pub const COLLECTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Master gate for the run log. When false every `RunLog` call is a no-op
/// and no log file is created.
pub const RUN_LOG_ENABLED: bool = true;

/// Leaf directory under the sync root that receives the log and the
/// staged files.
pub const WORKING_DIR_NAME: &str = "Config";

/// Date component of the run log filename. One log per day per user;
/// repeat runs on the same day append to the same file.
pub const LOG_DATE_FORMAT: &str = "%Y%m%d";

/// Filename of the machine-readable run summary written next to the log.
pub const RUN_SUMMARY_NAME: &str = "collection-summary.json";

// Printer names that are software devices rather than user printers.
// Matched exactly, never as substrings.
pub const BOGUS_PRINTER_NAMES: &[&str] = &[
    "Microsoft Print to PDF",
    "Microsoft XPS Document Writer",
    "Send To OneNote 2016",
    "OneNote (Desktop)",
    "OneNote for Windows 10",
    "Fax",
    "Adobe PDF",
];

/// User files worth staging for migration, relative to the profile
/// directory. Resolved once at startup and never mutated.
pub const BACKUP_FILE_SUFFIXES: &[&str] = &[
    r"AppData\Roaming\Microsoft\Sticky Notes\StickyNotes.snt",
    r"AppData\Local\Packages\Microsoft.MicrosoftStickyNotes_8wekyb3d8bbwe\LocalState\plum.sqlite",
];

// Proxy connection-settings blob layout. The byte at the fixed offset
// encodes the "automatically detect settings" checkbox combined with the
// proxy-enabled state.

/// Offset of the flag byte within the DefaultConnectionSettings blob.
pub const AUTODETECT_BYTE_OFFSET: usize = 8;

/// Proxy enabled, auto-detect checked.
pub const AUTODETECT_ENABLED_CHECKED: u8 = 11;

/// Proxy enabled, auto-detect unchecked.
pub const AUTODETECT_ENABLED_UNCHECKED: u8 = 3;

/// Proxy disabled, auto-detect checked. The only value reported as
/// "set to autodetect"; every other value logs as un-set.
pub const AUTODETECT_DISABLED_CHECKED: u8 = 9;

/// Proxy disabled, auto-detect unchecked.
pub const AUTODETECT_DISABLED_UNCHECKED: u8 = 1;

/// Platform hosts file location.
#[cfg(target_os = "windows")]
pub const HOSTS_FILE_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// Platform hosts file location.
#[cfg(not(target_os = "windows"))]
pub const HOSTS_FILE_PATH: &str = "/etc/hosts";
