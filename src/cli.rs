//! Command-line argument parsing.
//!
//! Accepts three invocation shapes:
//!
//! ```text
//! subnet-calc <ADDRESS> <PREFIX> [DIVIDE]
//! subnet-calc <ADDRESS/PREFIX> [DIVIDE]
//! subnet-calc resolve <HOSTNAME|IPV4>
//! ```
//!
//! `--json` switches the calculator output to a single JSON document.

use crate::config::{Config, OutputFormat};
use crate::error::CidrError;
use crate::models::parse_prefix;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

pub const USAGE: &str = "usage: subnet-calc <ADDRESS> <PREFIX> [DIVIDE] [--json]
       subnet-calc <ADDRESS/PREFIX> [DIVIDE] [--json]
       subnet-calc resolve <HOSTNAME|IPV4>";

/// Regex matching a dotted-quad shaped token (octet ranges are checked by
/// the address parser, not here).
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX
        .get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("Invalid Regex"))
}

/// A resolver query, with the lookup direction already detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Forward lookup: hostname to address.
    Name(String),
    /// Reverse lookup: address to hostname.
    Addr(Ipv4Addr),
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Report {
        /// Address text as typed; kept raw so classification sees the
        /// original value.
        addr: String,
        prefix: u8,
        divide: Option<u8>,
        format: OutputFormat,
    },
    Resolve(Query),
}

/// Parse the argument vector (without the program name) against config
/// defaults.
pub fn parse_args(args: &[String], config: &Config) -> Result<Command, Box<dyn Error>> {
    if args.first().map(String::as_str) == Some("resolve") {
        let query = match args {
            [_, q] => q,
            _ => return Err(format!("resolve takes exactly one argument\n{USAGE}").into()),
        };
        // A dotted-quad shaped token means reverse lookup; octets out of
        // range still fail address parsing rather than being treated as a
        // hostname.
        if get_dotted_quad_regex().is_match(query) {
            let addr: Ipv4Addr = query
                .parse()
                .map_err(|_| CidrError::InvalidAddress(query.clone()))?;
            return Ok(Command::Resolve(Query::Addr(addr)));
        }
        return Ok(Command::Resolve(Query::Name(query.clone())));
    }

    let mut format = config.format;
    let positional: Vec<&String> = args
        .iter()
        .filter(|a| {
            if a.as_str() == "--json" {
                format = OutputFormat::Json;
                false
            } else {
                true
            }
        })
        .collect();

    let (addr, prefix, rest) = match positional.as_slice() {
        [] => return Err(format!("missing arguments\n{USAGE}").into()),
        [cidr, rest @ ..] if cidr.contains('/') => {
            let (addr_text, prefix_text) = cidr.split_once('/').unwrap_or((cidr.as_str(), ""));
            (addr_text.to_string(), parse_prefix(prefix_text)?, rest)
        }
        [_addr] => return Err(format!("missing prefix argument\n{USAGE}").into()),
        [addr, prefix, rest @ ..] => (addr.to_string(), parse_prefix(prefix)?, rest),
    };

    let divide = match rest {
        [] => config.divide,
        [token] => Some(parse_prefix(token)?),
        _ => return Err(format!("too many arguments\n{USAGE}").into()),
    };

    Ok(Command::Report {
        addr,
        prefix,
        divide,
        format,
    })
}
