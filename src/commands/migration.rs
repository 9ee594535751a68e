//! `migration`: placeholder.

use anyhow::Result;
use console::style;

/// Migration generation is not wired up yet; the command only says so.
pub struct MigrationCommand;

impl MigrationCommand {
    pub fn execute() -> Result<()> {
        println!(
            "{}",
            style("Migration generation is not available yet; nothing was generated.").yellow()
        );
        Ok(())
    }
}
