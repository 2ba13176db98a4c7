//! Command-line argument collaborator.
//!
//! Only prefix-length masks are accepted on the command line; the
//! dotted-decimal form is a programmatic-API shape. With no arguments the
//! fixed demonstration inputs are used.

use clap::Parser;

/// Classful IPv4 subnet calculator.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// IPv4 address in dotted-decimal form.
    #[arg(default_value = "192.168.1.129")]
    pub address: String,

    /// Subnet mask as a prefix length (slash notation without the slash).
    #[arg(default_value_t = 30)]
    pub prefix: u8,

    /// Print the report as JSON instead of labeled text.
    #[arg(long)]
    pub json: bool,
}
