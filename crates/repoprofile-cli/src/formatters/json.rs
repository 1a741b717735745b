//! JSON formatter for repository profiles.

use repoprofile_core::RepoReport;

pub struct JsonFormatter;

pub fn print_json(report: &RepoReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}
