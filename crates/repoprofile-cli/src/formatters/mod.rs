//! Output formatters for repository profiles.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Trait for formatting a completed report
pub trait Formatter {
    /// Format and print the report
    fn format(&self, report: &repoprofile_core::RepoReport);
}

impl Formatter for HumanFormatter {
    fn format(&self, report: &repoprofile_core::RepoReport) {
        human::print_report(report);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &repoprofile_core::RepoReport) {
        json::print_json(report);
    }
}
