//! Ordering and category filtering of the flattened diagnostics.

use crate::types::Diagnostic;
use log::debug;
use std::cmp::Ordering;

/// Compare two diagnostics by severity class (warnings first), rule id when
/// grouping by category, file path, line and column.
pub fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic, group_by_category: bool) -> Ordering {
    a.severity_class()
        .cmp(&b.severity_class())
        .then_with(|| if group_by_category { a.rule_key().cmp(b.rule_key()) } else { Ordering::Equal })
        .then_with(|| compare_paths(&a.file_path, &b.file_path))
        .then_with(|| a.line().cmp(&b.line()))
        .then_with(|| a.column().cmp(&b.column()))
}

/// Case-insensitive path order, falling back to the raw order so the result
/// stays total.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Stable sort; fully equal diagnostics keep their input order.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic], group_by_category: bool) {
    diagnostics.sort_by(|a, b| compare_diagnostics(a, b, group_by_category));
}

/// Keep only diagnostics whose rule id is exactly `category`.
pub fn filter_by_category(diagnostics: Vec<Diagnostic>, category: Option<&str>) -> Vec<Diagnostic> {
    let Some(category) = category else {
        return diagnostics;
    };
    let before = diagnostics.len();
    let kept: Vec<Diagnostic> =
        diagnostics.into_iter().filter(|d| d.rule_id.as_deref() == Some(category)).collect();
    debug!("Category filter '{}' kept {} of {} diagnostics", category, kept.len(), before);
    kept
}
