//! Name-resolution boundary.
//!
//! The calculator core never touches this module; it exists for the CLI's
//! `resolve` subcommand, which is a pass-through to the operating-system
//! resolver. Forward lookups go through tokio's in-process resolver;
//! reverse lookups consult the platform hosts database via `getent`.

use crate::error::ResolveError;
use colored::Colorize;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr};
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// The resolver capability the CLI depends on.
///
/// Both directions return zero-or-one answer; absence is a typed failure,
/// anything else (resolver unreachable, bad output) is
/// [`ResolveError::Failed`].
#[allow(async_fn_in_trait)]
pub trait Resolve {
    /// Forward lookup: first IPv4 answer for a hostname.
    async fn lookup_host(&self, name: &str) -> Result<Ipv4Addr, ResolveError>;
    /// Reverse lookup: hostname for an IPv4 address.
    async fn lookup_addr(&self, addr: Ipv4Addr) -> Result<String, ResolveError>;
}

/// Pass-through to the operating-system resolver.
pub struct SystemResolver;

impl Resolve for SystemResolver {
    async fn lookup_host(&self, name: &str) -> Result<Ipv4Addr, ResolveError> {
        log::debug!("lookup_host({name})");
        let addrs = tokio::net::lookup_host((name, 0))
            .await
            .map_err(|e| {
                log::debug!("resolver returned no answer for {name}: {e}");
                ResolveError::NameNotFound(name.to_string())
            })?;
        addrs
            .map(|sock| sock.ip())
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| ResolveError::NameNotFound(name.to_string()))
    }

    async fn lookup_addr(&self, addr: Ipv4Addr) -> Result<String, ResolveError> {
        log::debug!("lookup_addr({addr})");
        let output = run(&format!("getent hosts {addr}"))?;
        if !output.status.success() {
            // getent exits non-zero when the database has no entry.
            log::debug!("getent status {:?} for {addr}", output.status.code());
            return Err(ResolveError::AddressNotFound(addr));
        }
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| ResolveError::Failed(format!("invalid UTF-8 from getent: {e}")))?;
        parse_hosts_entry(&stdout).ok_or(ResolveError::AddressNotFound(addr))
    }
}

/// Run a shell command, with quoted substrings preserved during splitting.
fn run(cmd: &str) -> Result<std::process::Output, ResolveError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let mut command = Command::new(cmds[0]);
    for arg in cmds.iter().skip(1) {
        command.arg(arg);
    }

    command.output().map_err(|e| {
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        ResolveError::Failed(format!("failed to execute command: {e}"))
    })
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

/// Pull the canonical hostname out of a `getent hosts` answer line.
///
/// The line format is `<address> <canonical-name> [aliases...]`; the first
/// line wins when the database returns several.
fn parse_hosts_entry(output: &str) -> Option<String> {
    output
        .lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_complex() {
        let input = "getent 'hosts db' hosts 8.8.8.8";
        let expected = vec!["getent", "hosts db", "hosts", "8.8.8.8"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        let input = "NoSpacesHere";
        let expected = vec!["NoSpacesHere"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_parse_hosts_entry() {
        let line = "8.8.8.8         dns.google\n";
        assert_eq!(parse_hosts_entry(line), Some("dns.google".to_string()));
    }

    #[test]
    fn test_parse_hosts_entry_aliases_and_extra_lines() {
        let lines = "10.0.0.7  primary.example.com alias1 alias2\n10.0.0.7  other.example.com\n";
        assert_eq!(
            parse_hosts_entry(lines),
            Some("primary.example.com".to_string())
        );
    }

    #[test]
    fn test_parse_hosts_entry_no_answer() {
        assert_eq!(parse_hosts_entry(""), None);
        assert_eq!(parse_hosts_entry("8.8.8.8\n"), None);
    }
}
