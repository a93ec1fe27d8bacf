//! Display functions for command results

use super::formatters::{NOT_RECOGNIZED, format_stats};
use crate::commands::{LookupResult, RebuildResult};
use crate::index::IndexStats;
use colored::Colorize;

/// Print the result of a lookup
///
/// Matches go to stdout one per line with no decoration so the output can be piped.
pub fn print_lookup_result(result: &LookupResult) {
    if result.is_found() {
        for word in &result.matches {
            println!("{word}");
        }
    } else {
        println!("{NOT_RECOGNIZED}");
    }
}

/// Print index statistics
pub fn print_stats(stats: &IndexStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANAGRAM INDEX".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n{}", format_stats(stats));
}

/// Print the result of a forced rebuild
pub fn print_rebuild_result(result: &RebuildResult) {
    println!(
        "{} {} words in {} classes ({:.2}s)",
        "✅ Rebuilt index:".green().bold(),
        result.word_count,
        result.class_count,
        result.duration.as_secs_f64()
    );
    println!("   Source: {}", result.origin);
    match &result.cached_at {
        Some(path) => println!("   Cached: {}", path.display()),
        None => println!("   Cached: {}", "no".yellow()),
    }
}
