use anyhow::Result;
use log::debug;

use crate::constants::{
    AUTODETECT_BYTE_OFFSET, AUTODETECT_DISABLED_CHECKED, AUTODETECT_DISABLED_UNCHECKED,
    AUTODETECT_ENABLED_CHECKED, AUTODETECT_ENABLED_UNCHECKED,
};
use crate::providers::ProxyConfigSource;
use crate::runlog::RunLog;

/// Report the user's proxy server and auto-detect checkbox state.
///
/// The flag byte is tested against `AUTODETECT_DISABLED_CHECKED` only;
/// every other value, and a blob too short to index, reports as un-set.
/// The enabled-flag line is independent of the flag byte.
pub fn collect(log: &mut RunLog, provider: &dyn ProxyConfigSource) -> Result<()> {
    let settings = match provider.proxy_settings() {
        Ok(settings) => settings,
        Err(e) => {
            debug!("proxy configuration unavailable: {}", e);
            log.error("Proxy: Unable to read proxy configuration")?;
            return Ok(());
        }
    };

    if settings.proxy_enabled {
        log.info(&format!(
            "Proxy is enabled with a custom setting: {}",
            settings.proxy_server
        ))?;
    }

    let flag_byte = settings.autodetect_byte();
    if let Some(byte) = flag_byte {
        debug!(
            "connection settings byte {} is {} ({})",
            AUTODETECT_BYTE_OFFSET,
            byte,
            describe_autodetect(byte)
        );
    } else {
        debug!("connection settings blob is missing or too short");
    }

    if flag_byte == Some(AUTODETECT_DISABLED_CHECKED) {
        log.info("Proxy: Proxy is set to autodetect")?;
    } else {
        log.warn("Proxy: Autodetect proxy setting is un-set!")?;
    }

    Ok(())
}

/// Four-state decode of the flag byte, surfaced on the console only; the
/// run log keeps the coarse set/un-set signal.
fn describe_autodetect(byte: u8) -> &'static str {
    match byte {
        AUTODETECT_ENABLED_CHECKED => "proxy enabled, autodetect checked",
        AUTODETECT_ENABLED_UNCHECKED => "proxy enabled, autodetect unchecked",
        AUTODETECT_DISABLED_CHECKED => "proxy disabled, autodetect checked",
        AUTODETECT_DISABLED_UNCHECKED => "proxy disabled, autodetect unchecked",
        _ => "unrecognized flag value",
    }
}
