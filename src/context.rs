use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Local};

use crate::constants::{LOG_DATE_FORMAT, RUN_LOG_ENABLED, WORKING_DIR_NAME};

/// Immutable per-run execution snapshot: who is running, when, and where
/// the output goes.
///
/// Built once at startup and passed by reference to the log writer and
/// the collectors; nothing mutates it after capture.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_date: DateTime<Local>,
    pub host_name: String,
    pub user_name: String,
    pub domain_name: String,
    pub working_dir: PathBuf,
    pub log_path: PathBuf,
    pub log_enabled: bool,
}

impl RunContext {
    /// Capture the current user identity and compute the output paths.
    ///
    /// The staging root defaults to the user's sync root (the `OneDrive`
    /// environment variable), falling back to the profile directory and
    /// finally the system temp dir. `output_override` replaces the root
    /// lookup entirely; the `Config` leaf is appended either way.
    pub fn from_environment(output_override: Option<PathBuf>) -> Result<Self> {
        let run_date = Local::now();

        let host_name = hostname::get()
            .map_err(|e| anyhow!("Failed to get hostname: {}", e))?
            .to_string_lossy()
            .to_string();

        let user_name = env::var("USERNAME")
            .or_else(|_| env::var("USER"))
            .unwrap_or_else(|_| "unknown".to_string());

        let domain_name = env::var("USERDOMAIN").unwrap_or_else(|_| host_name.clone());

        let root = output_override.unwrap_or_else(sync_root);
        let working_dir = root.join(WORKING_DIR_NAME);

        let log_name = format!(
            "{}-CollectionLog-{}-{}.log",
            run_date.format(LOG_DATE_FORMAT),
            host_name,
            user_name
        );
        let log_path = working_dir.join(log_name);

        Ok(RunContext {
            run_date,
            host_name,
            user_name,
            domain_name,
            working_dir,
            log_path,
            log_enabled: RUN_LOG_ENABLED,
        })
    }

    /// `DOMAIN\user` form used in the run banner.
    pub fn qualified_user(&self) -> String {
        format!("{}\\{}", self.domain_name, self.user_name)
    }
}

/// User profile sync root: OneDrive when present, otherwise the local
/// profile, otherwise the temp dir.
fn sync_root() -> PathBuf {
    env::var_os("OneDrive")
        .or_else(|| env::var_os("USERPROFILE"))
        .or_else(|| env::var_os("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
}
