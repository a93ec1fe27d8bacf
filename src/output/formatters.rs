//! Formatting utilities for terminal output

use crate::index::IndexStats;
use colored::Colorize;
use std::fmt::Write;

/// Printed when a query has no anagrams
pub const NOT_RECOGNIZED: &str = "Word not recognized.";

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render index statistics as a multi-line report
#[must_use]
pub fn format_stats(stats: &IndexStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "   Words:            {}", stats.word_count);
    let _ = writeln!(out, "   Classes:          {}", stats.class_count);
    let _ = write!(
        out,
        "   With anagrams:    {}",
        stats.anagram_classes.to_string().bright_yellow()
    );

    let Some((_, biggest)) = stats.largest.first() else {
        return out;
    };
    let max = biggest.len() as f64;

    let _ = write!(out, "\n\n   {}", "Largest classes:".bright_cyan().bold());
    for (key, words) in &stats.largest {
        let bar = create_progress_bar(words.len() as f64, max, 20);
        let _ = write!(
            out,
            "\n   {:<12} {} {:3}  {}",
            key,
            bar.green(),
            words.len(),
            words.join(" ").bright_black()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AnagramIndex;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn stats_report_lists_classes() {
        colored::control::set_override(false);

        let index: AnagramIndex = ["stop", "pots", "tops", "tea", "eat", "dog"]
            .into_iter()
            .collect();
        let report = format_stats(&IndexStats::from_index(&index, 2));

        assert!(report.contains("Words:            6"));
        assert!(report.contains("Classes:          3"));
        assert!(report.contains("stop pots tops"));
        assert!(report.contains("tea eat"));
        assert!(!report.contains("dog"));
    }

    #[test]
    fn stats_report_of_empty_index() {
        let report = format_stats(&IndexStats::from_index(&AnagramIndex::new(), 5));
        assert!(!report.contains("Largest"));
    }
}
