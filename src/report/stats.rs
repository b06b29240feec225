//! Problem counts and per-category summary tables.
//!
//! The summary tables list how often each category occurred, one table for
//! errors and one for warnings, most frequent first.

use super::links::category_label;
use super::types::{CategoryTally, Row};
use crate::config::RenderConfiguration;
use crate::console_format::{Align, Role, Styler, render_table};
use crate::types::Severity;

/// Alignment of the indent, count and category columns.
pub const SUMMARY_TABLE_ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Left];

/// Label shown in summary tables for diagnostics without a rule id.
pub const UNCLASSIFIED_LABEL: &str = "(no rule)";

/// `word` with an "s" appended unless `count` is exactly 1.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 { word.to_string() } else { format!("{}s", word) }
}

/// `<glyph> N problems (E errors, W warnings)`
pub fn format_problem_line(errors: usize, warnings: usize, styler: &dyn Styler) -> String {
    let total = errors + warnings;
    let severity = if errors > 0 { Severity::Error } else { Severity::Warning };
    let counts = format!(
        "{} {} ({} {}, {} {})",
        total,
        pluralize("problem", total),
        errors,
        pluralize("error", errors),
        warnings,
        pluralize("warning", warnings)
    );
    format!("{} {}", styler.paint(severity.glyph(), severity.role()), styler.paint(&counts, Role::Emphasis))
}

/// Title line followed by a count/category table, or "" for an empty tally.
pub fn format_category_summary(
    title: &str,
    tally: &CategoryTally,
    config: &RenderConfiguration,
    styler: &dyn Styler,
) -> String {
    if tally.is_empty() {
        return String::new();
    }

    let rows: Vec<Row> = tally
        .ranked()
        .into_iter()
        .map(|(category, count)| vec![String::new(), count.to_string(), summary_label(category, config, styler)])
        .collect();

    format!("{}\n{}", styler.paint(title, Role::Emphasis), render_table(&rows, &SUMMARY_TABLE_ALIGN))
}

fn summary_label(category: &str, config: &RenderConfiguration, styler: &dyn Styler) -> String {
    if category.is_empty() {
        styler.paint(UNCLASSIFIED_LABEL, Role::Muted)
    } else {
        styler.paint(&category_label(category, config), Role::Muted)
    }
}
