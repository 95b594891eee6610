//! Environment-backed configuration.
//!
//! Defaults are read from the environment (a `.env` file is loaded in
//! `main` before this runs); CLI arguments override them.

use crate::error::CidrError;
use crate::models::parse_prefix;

/// Which renderer the report goes through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved configuration defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default divide prefix when the positional argument is absent.
    pub divide: Option<u8>,
    /// Default output format, overridden by `--json`.
    pub format: OutputFormat,
}

impl Config {
    /// Read `SUBNET_CALC_DIVIDE` and `SUBNET_CALC_FORMAT` from the
    /// environment.
    ///
    /// An unparsable divide value fails with `InvalidPrefix` at startup; an
    /// unrecognized format falls back to text with a warning.
    pub fn from_env() -> Result<Config, CidrError> {
        let divide = match std::env::var("SUBNET_CALC_DIVIDE") {
            Ok(value) => Some(parse_prefix(&value)?),
            Err(_) => None,
        };
        let format = match std::env::var("SUBNET_CALC_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Ok(value) if value.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Ok(value) => {
                log::warn!("unknown SUBNET_CALC_FORMAT {value:?}, using text");
                OutputFormat::Text
            }
            Err(_) => OutputFormat::Text,
        };
        log::debug!("config: divide={divide:?} format={format:?}");
        Ok(Config { divide, format })
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            divide: None,
            format: OutputFormat::Text,
        }
    }
}
