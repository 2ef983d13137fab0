//! Output formatting utilities

use crate::application::SyncOutcome;
use crate::domain::{CategoryFilter, Quote, ALL_CATEGORIES};
use std::collections::BTreeSet;

/// Shown when a filter matches nothing
pub const NO_QUOTES_MESSAGE: &str = "No quotes found in this category!";

/// Format a single quote for display
pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\n  - {}", quote.text, quote.category)
}

/// Format a list of quotes, one per line
pub fn format_quote_list(quotes: &[&Quote]) -> String {
    if quotes.is_empty() {
        return NO_QUOTES_MESSAGE.to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format!("[{}] {}\n", quote.category, quote.text));
    }
    output
}

/// Format the category list, marking the selected entry with `*`
pub fn format_category_list(categories: &BTreeSet<String>, selected: &CategoryFilter) -> String {
    let marker = |is_selected: bool| if is_selected { "* " } else { "  " };

    let mut output = format!(
        "{}{}\n",
        marker(*selected == CategoryFilter::All),
        ALL_CATEGORIES
    );
    for category in categories {
        output.push_str(&format!(
            "{}{}\n",
            marker(matches!(selected, CategoryFilter::Category(c) if c == category)),
            category
        ));
    }
    output
}

/// Summarize a sync cycle
pub fn format_sync_outcome(outcome: &SyncOutcome, total: usize) -> String {
    match outcome {
        SyncOutcome::Skipped => "Sync skipped: a previous sync is still running".to_string(),
        SyncOutcome::Completed(report) => {
            let mut line = format!(
                "Synced {} quote(s) from server ({} total)",
                report.merged, total
            );
            if !report.failed.is_empty() {
                line.push_str(&format!("; failed: {}", report.failed.join(", ")));
            }
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SyncReport;

    #[test]
    fn test_format_quote() {
        let quote = Quote::new("Less is more.", "Design").unwrap();
        assert_eq!(format_quote(&quote), "\"Less is more.\"\n  - Design");
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_quote_list(&[]), "No quotes found in this category!");
    }

    #[test]
    fn test_format_quote_list() {
        let a = Quote::new("one", "A").unwrap();
        let b = Quote::new("two", "B").unwrap();
        assert_eq!(format_quote_list(&[&a, &b]), "[A] one\n[B] two\n");
    }

    #[test]
    fn test_format_category_list_marks_all() {
        let categories: BTreeSet<String> = ["Work".to_string(), "Life".to_string()].into();
        assert_eq!(
            format_category_list(&categories, &CategoryFilter::All),
            "* all\n  Life\n  Work\n"
        );
    }

    #[test]
    fn test_format_category_list_marks_selected() {
        let categories: BTreeSet<String> = ["Work".to_string(), "Life".to_string()].into();
        let selected = CategoryFilter::Category("Work".to_string());
        assert_eq!(
            format_category_list(&categories, &selected),
            "  all\n  Life\n* Work\n"
        );
    }

    #[test]
    fn test_format_sync_outcome() {
        let outcome = SyncOutcome::Completed(SyncReport {
            merged: 3,
            failed: vec!["http://x.test".to_string()],
        });
        assert_eq!(
            format_sync_outcome(&outcome, 10),
            "Synced 3 quote(s) from server (10 total); failed: http://x.test"
        );
        assert!(format_sync_outcome(&SyncOutcome::Skipped, 0).contains("skipped"));
    }
}
