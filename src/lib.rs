// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CalcError;
pub use models::{MaskSpec, SubnetReport, SubnetRow};
pub use processing::build;

/// Compute the full subnet report for an address and a raw mask argument
/// (either a prefix length or a dotted-decimal mask string).
pub fn calculate(address: &str, mask: &str) -> Result<SubnetReport, CalcError> {
    let mask = MaskSpec::parse(mask)?;
    processing::build(address, mask)
}
