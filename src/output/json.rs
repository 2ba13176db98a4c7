//! JSON output for subnet reports.

use crate::models::SubnetReport;
use std::error::Error;

/// Print the full report as pretty JSON to stdout.
pub fn print_json(report: &SubnetReport) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_json()");
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
