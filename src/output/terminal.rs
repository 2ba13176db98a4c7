//! Terminal output for subnet reports.
//!
//! Renders the labeled report lines and the enumeration table with
//! aligned columns.

use crate::models::{SubnetReport, SubnetRow};
use colored::Colorize;

/// Format a value as a right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

/// Print the report as labeled lines followed by the subnet table.
///
/// `table_limit` caps the printed rows only; the report always holds the
/// full enumeration.
pub fn print_report(report: &SubnetReport, table_limit: Option<usize>) {
    log::info!("#Start print_report() rows={}", report.table.len());

    println!("IP Address: {}", report.ip_address);
    println!();
    println!("Network Address: {}", report.network_address);
    println!();
    println!("First Host: {}", report.first_host);
    println!();
    println!("Last Host: {}", report.last_host);
    println!();
    println!("Broadcast Address: {}", report.broadcast_address);
    println!();
    println!("Total hosts: {}", report.total_hosts);
    println!();
    println!("Usable Hosts: {}", report.usable_hosts);
    println!();
    println!("Subnet ID: {}", report.subnet_id);
    println!();
    println!("Subnet Mask Slash Notation: /{}", report.prefix);
    println!();
    println!("Subnet Mask: {}", report.mask_dotted);
    println!();
    println!("Binary Subnet Mask: {}", report.mask_binary);
    println!();
    println!("IP class: {}", report.class);
    println!();

    println!("Network Address, Usable Range, Broadcast Address");
    let shown = table_limit.unwrap_or(report.table.len());
    for (i, row) in report.table.iter().take(shown).enumerate() {
        print_table_row(i, row);
    }
    if shown < report.table.len() {
        println!(
            "#{}# table truncated to {} of {} rows",
            "NOTE".on_red(),
            shown,
            report.table.len()
        );
    }
}

/// Print a single table row with aligned columns.
fn print_table_row(i: usize, row: &SubnetRow) {
    println!(
        "{idx} {network}, {range}, {broadcast}",
        idx = format_field(i, 4),
        network = format_field(row.network, 15),
        range = format_field(
            format!("{} - {}", row.first_host, row.last_host),
            33
        ),
        broadcast = format_field(row.broadcast, 15),
    );
}
