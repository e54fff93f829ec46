use anyhow::Result;
use log::debug;

use crate::constants::BOGUS_PRINTER_NAMES;
use crate::providers::PrinterInventory;
use crate::runlog::RunLog;

/// Log the user's real printer connections.
///
/// Software devices on the denylist are skipped. An empty snapshot logs
/// one "no connected printers" line; a snapshot where everything was
/// filtered logs one "no user printers" line, never more than one.
pub fn collect(log: &mut RunLog, provider: &dyn PrinterInventory) -> Result<usize> {
    let printers = match provider.printers() {
        Ok(printers) => printers,
        Err(e) => {
            debug!("printer enumeration unavailable: {}", e);
            log.error("Printer: Unable to enumerate printers")?;
            return Ok(0);
        }
    };

    if printers.is_empty() {
        log.info("Printer: No connected printers.")?;
        return Ok(0);
    }

    let mut count = 0;
    for printer in &printers {
        if is_bogus_printer(&printer.name) {
            continue;
        }
        log.info(&format!(
            "Printer: \"{}\", on {} port {} using {}",
            printer.name, printer.host_computer, printer.port_name, printer.driver_name
        ))?;
        count += 1;
    }

    if count == 0 {
        log.info("Printer: No user printers found")?;
    }

    Ok(count)
}

/// Exact-match test against the virtual-printer denylist.
fn is_bogus_printer(name: &str) -> bool {
    BOGUS_PRINTER_NAMES.iter().any(|bogus| *bogus == name)
}
