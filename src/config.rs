//! Runtime settings read from the environment.
//!
//! `.env` is loaded in `main`; settings here only shape presentation,
//! never the calculation itself.

/// Environment variable capping the number of table rows printed to the
/// terminal. Large spreads (a /30 inside a class A block is 2^22 rows)
/// stay fully computed; only the display is cut.
pub const TABLE_LIMIT_ENV: &str = "SUBNET_CALC_TABLE_LIMIT";

/// Presentation settings.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Maximum table rows to print, unlimited when unset.
    pub table_limit: Option<usize>,
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Config {
        Config {
            table_limit: parse_limit(std::env::var(TABLE_LIMIT_ENV).ok()),
        }
    }
}

fn parse_limit(raw: Option<String>) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(limit) => Some(limit),
        Err(_) => {
            log::warn!("Ignoring unparsable {TABLE_LIMIT_ENV}={raw}");
            None
        }
    }
}
