//! Status overview command.

use anyhow::Result;
use std::io::Write;
use teamer_core::Catalog;

use crate::output;

pub fn execute(catalog: &Catalog) -> Result<()> {
    let stdout = std::io::stdout();
    run(catalog, &mut stdout.lock())
}

pub fn run(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    output::write_status(out, catalog)?;
    Ok(())
}
