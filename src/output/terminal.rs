//! Terminal output for the network report.
//!
//! Prints the aligned text report to stdout. The subnet breakdown streams
//! the lazy subdivision iterator; the partition is never materialized here.

use crate::processing::NetworkReport;
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 22;

/// Format a label as a left-aligned field of minimum width.
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label_str = label.to_string();
    if label_str.len() >= width {
        label_str
    } else {
        format!("{label_str:<width$}")
    }
}

/// Print the full text report in report order.
pub fn print_report(report: &NetworkReport) {
    log::info!("#Start print_report() for {}", report.network);

    println!("{}", "--- NETWORK INFORMATION ---".blue().bold());
    print_line("Network Address:", report.network.addr());
    print_line("Broadcast Address:", report.broadcast);
    print_line("Subnet Mask:", report.netmask);
    print_line("Wildcard Mask:", report.wildcard);

    println!();
    println!("{}", "--- HOST DETAILS ---".blue().bold());
    print_line("Usable Hosts:", report.usable_hosts);
    print_line("First Usable Host:", report.first_host);
    print_line("Last Usable Host:", report.last_host);
    print_line("Address Class:", report.class);

    if let Some(subnets) = report.subdivision() {
        println!();
        println!("{}", "--- SUBNET BREAKDOWN ---".blue().bold());
        log::debug!(
            "first subnets: {preview}, total {total}",
            preview = subnets.clone().take(4).format(", "),
            total = subnets.len()
        );
        for subnet in subnets {
            println!("{subnet}");
        }
    }
}

fn print_line<T: std::fmt::Display>(label: &str, value: T) {
    println!("{label} {value}", label = format_field(label, LABEL_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("Subnet Mask:", 16), "Subnet Mask:    ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("Mask:", 5), "Mask:");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(
            format_field("A rather long label:", 5),
            "A rather long label:"
        );
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(254, 6), "254   ");
    }
}
