//! JSON output for the network report.

use crate::processing::NetworkReport;
use std::error::Error;

/// Render the report as a single JSON document.
///
/// The subdivision is materialized here since a JSON array cannot stream.
pub fn to_json(report: NetworkReport) -> Result<String, Box<dyn Error>> {
    let report = report.materialize_subnets();
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

/// Print the report as JSON to stdout.
pub fn print_report_json(report: NetworkReport) -> Result<(), Box<dyn Error>> {
    println!("{}", to_json(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_document_fields() {
        let report = NetworkReport::build("192.168.10.5", 28, None).expect("valid input");
        let json = to_json(report).expect("serializable");
        let doc: Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(doc["input"], "192.168.10.5");
        assert_eq!(doc["network"], "192.168.10.0/28");
        assert_eq!(doc["netmask"], "255.255.255.240");
        assert_eq!(doc["wildcard"], "0.0.0.15");
        assert_eq!(doc["broadcast"], "192.168.10.15");
        assert_eq!(doc["usable_hosts"], 14);
        assert_eq!(doc["first_host"], "192.168.10.1");
        assert_eq!(doc["last_host"], "192.168.10.14");
        assert_eq!(doc["class"], "C");
        assert!(doc.get("subnets").is_none(), "no divide prefix given");
    }

    #[test]
    fn test_json_includes_subdivision() {
        let report = NetworkReport::build("192.168.10.0", 24, Some(30)).expect("valid input");
        let json = to_json(report).expect("serializable");
        let doc: Value = serde_json::from_str(&json).expect("valid JSON");

        let subnets = doc["subnets"].as_array().expect("subnets array");
        assert_eq!(subnets.len(), 64);
        assert_eq!(subnets[0], "192.168.10.0/30");
        assert_eq!(subnets[63], "192.168.10.252/30");
    }
}
