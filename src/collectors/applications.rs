use anyhow::Result;
use log::debug;

use crate::providers::ApplicationInventory;
use crate::runlog::RunLog;

/// Log one line per installed application with a usable name and version.
///
/// Records missing either field are dropped; everything else is reported
/// in provider order.
pub fn collect(log: &mut RunLog, provider: &dyn ApplicationInventory) -> Result<usize> {
    let programs = match provider.installed_programs() {
        Ok(programs) => programs,
        Err(e) => {
            debug!("application inventory unavailable: {}", e);
            log.error("Program: Unable to read installed application inventory")?;
            return Ok(0);
        }
    };

    let mut count = 0;
    for program in &programs {
        if program.name.is_empty() || program.version.is_empty() {
            continue;
        }
        log.info(&format!("Program: {}; Version: {}", program.name, program.version))?;
        count += 1;
    }

    Ok(count)
}
