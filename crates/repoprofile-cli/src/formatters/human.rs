//! Human-readable formatter for repository profiles.

use colored::*;
use repoprofile_core::RepoReport;

pub struct HumanFormatter;

pub fn print_report(report: &RepoReport) {
    println!("\n{}", "Repository Profile".bold());
    println!("{}\n", "==================".bold());

    if !report.description.is_empty() {
        println!("{}", "Description:".cyan());
        for line in report.description.lines().take(5) {
            println!("  {}", line);
        }
        println!();
    }

    println!("{} {}", "Main language:".cyan(), report.main_language);
    if !report.languages.is_empty() {
        println!("{}", "Languages:".cyan());
        for (language, count) in &report.languages {
            println!("  {}: {} files", language, count);
        }
    }
    println!();

    println!("{}", "Tech stack:".cyan());
    print_list("Frameworks", report.tech_stack.frameworks.iter());
    print_list("Build tools", report.tech_stack.build_tools.iter());
    print_list("Dependencies", report.tech_stack.dependencies.iter());
    println!();

    if !report.structure.is_empty() {
        println!("{}", "Structure:".cyan());
        for (dir, files) in &report.structure {
            println!("  {}/: {}", dir, files.join(", "));
        }
        println!();
    }

    println!("{}", "Entry points:".cyan());
    print_paths("main", &report.entry_points.main);
    print_paths("config", &report.entry_points.config);
    print_paths("test", &report.entry_points.test);

    if !report.api_files.is_empty() {
        println!("\n{}", "API files:".cyan());
        for path in &report.api_files {
            println!("  {}", path);
        }
    }
}

fn print_list<'a>(label: &str, items: impl Iterator<Item = &'a String>) {
    let joined: Vec<&str> = items.map(String::as_str).collect();
    if joined.is_empty() {
        println!("  {}: none", label);
    } else {
        println!("  {}: {}", label, joined.join(", "));
    }
}

fn print_paths(bucket: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    println!("  {}:", bucket);
    for path in paths {
        println!("    {}", path);
    }
}
