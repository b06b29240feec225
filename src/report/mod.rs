//! Report generation module - the formatter pipeline.
//!
//! This module handles:
//! - Flattening per-file results into one diagnostic list
//! - Sorting and category filtering
//! - Converting diagnostics into table rows and tallies
//! - Composing the main table, problem line and summary tables
//!
//! Terminal concerns (styling, widths, layout) live in `console_format`.
//!
//! # Module Organization
//!
//! - `types` - Rows, category tallies and the row-building result
//! - `flatten` - Per-file results to one diagnostic sequence
//! - `sort` - Comparator, stable sort and category filter
//! - `table` - Row building (pointer lines, message normalization)
//! - `stats` - Problem line and per-category summary tables
//! - `links` - Rule documentation and editor links

mod flatten;
mod links;
mod sort;
mod stats;
mod table;
mod types;

pub use types::{BuiltRows, CategoryTally, Row};

pub use flatten::flatten_results;
pub use links::{category_label, editor_link};
pub use sort::{compare_diagnostics, compare_paths, filter_by_category, sort_diagnostics};
pub use stats::{UNCLASSIFIED_LABEL, format_category_summary, format_problem_line, pluralize};
pub use table::{MAIN_TABLE_ALIGN, MAX_SOURCE_LENGTH, build_rows, location_block, normalize_message, pointer_line};

use crate::config::RenderConfiguration;
use crate::console_format::{AnsiStyler, PlainStyler, Styler, render_table};
use crate::paths::PathResolver;
use crate::types::FileResult;

/// Render `results` into the final report string.
///
/// Returns "" when no diagnostic survives filtering. The resolver is only
/// consulted when `config.absolute_paths` is set.
pub fn format_results(
    results: &[FileResult],
    config: &RenderConfiguration,
    styler: &dyn Styler,
    resolver: &dyn PathResolver,
) -> String {
    let resolver = if config.absolute_paths { Some(resolver) } else { None };
    let mut diagnostics = flatten_results(results, resolver);
    sort_diagnostics(&mut diagnostics, config.group_by_category);
    let diagnostics = filter_by_category(diagnostics, config.filter_category.as_deref());
    if diagnostics.is_empty() {
        return String::new();
    }

    let built = build_rows(&diagnostics, config, styler);
    compose_report(&built, config, styler)
}

/// Assemble the report from built rows.
///
/// Layout: blank line, main table, blank line, problem line, then the error
/// and warning summaries (each preceded by a blank line), and a final blank
/// line. Nothing at all when there are no rows.
pub fn compose_report(built: &BuiltRows, config: &RenderConfiguration, styler: &dyn Styler) -> String {
    if built.rows.is_empty() {
        return String::new();
    }

    let mut output = String::from("\n");
    output.push_str(&render_table(&built.rows, &MAIN_TABLE_ALIGN));
    output.push_str("\n\n");
    output.push_str(&format_problem_line(built.errors, built.warnings, styler));
    output.push('\n');

    let sections = [("Errors:", built.errors, &built.error_tally), ("Warnings:", built.warnings, &built.warning_tally)];
    for (title, count, tally) in sections {
        if count == 0 {
            continue;
        }
        let summary = format_category_summary(title, tally, config, styler);
        if !summary.is_empty() {
            output.push('\n');
            output.push_str(&summary);
            output.push('\n');
        }
    }

    output.push('\n');
    output
}

/// A configured formatter: configuration plus its styling and path collaborators.
pub struct Formatter {
    config: RenderConfiguration,
    styler: Box<dyn Styler + Send + Sync>,
    resolver: Box<dyn PathResolver + Send + Sync>,
}

impl Formatter {
    /// Styling follows `config.color`.
    pub fn new<R>(config: RenderConfiguration, resolver: R) -> Self
    where
        R: PathResolver + Send + Sync + 'static,
    {
        let styler: Box<dyn Styler + Send + Sync> =
            if config.color { Box::new(AnsiStyler) } else { Box::new(PlainStyler) };
        Self { config, styler, resolver: Box::new(resolver) }
    }

    /// Replace the styler chosen from the configuration.
    pub fn with_styler<S>(mut self, styler: S) -> Self
    where
        S: Styler + Send + Sync + 'static,
    {
        self.styler = Box::new(styler);
        self
    }

    pub fn format(&self, results: &[FileResult]) -> String {
        format_results(results, &self.config, self.styler.as_ref(), self.resolver.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::BaseDirResolver;
    use crate::types::Diagnostic;

    fn plain() -> RenderConfiguration {
        RenderConfiguration { rule_links: false, color: false, ..RenderConfiguration::default() }
    }

    fn resolver() -> BaseDirResolver {
        BaseDirResolver::new("/repo")
    }

    #[test]
    fn test_empty_input_renders_empty_string() {
        assert_eq!(format_results(&[], &plain(), &PlainStyler, &resolver()), "");
        let results = vec![FileResult::new("a.js", vec![]), FileResult { file_path: "b.js".into(), messages: None }];
        assert_eq!(format_results(&results, &plain(), &PlainStyler, &resolver()), "");
    }

    #[test]
    fn test_filter_removing_everything_renders_empty_string() {
        let results = vec![FileResult::new("a.js", vec![Diagnostic::new(2, Some("semi"), "x")])];
        let config = RenderConfiguration { filter_category: Some("quotes".to_string()), ..plain() };
        assert_eq!(format_results(&results, &config, &PlainStyler, &resolver()), "");
    }

    #[test]
    fn test_single_warning_full_output() {
        let results =
            vec![FileResult::new("a.js", vec![Diagnostic::new(1, Some("semi"), "Missing semicolon.").at(1, 5)])];
        let out = format_results(&results, &plain(), &PlainStyler, &resolver());

        assert_eq!(
            out,
            "\n  ⚠  semi  Missing semicolon  a.js:1:5\n\n⚠ 1 problem (0 errors, 1 warning)\n\nWarnings:\n  1  semi\n\n"
        );
    }

    #[test]
    fn test_compose_report_empty_rows() {
        assert_eq!(compose_report(&BuiltRows::default(), &plain(), &PlainStyler), "");
    }

    #[test]
    fn test_formatter_uses_plain_styler_without_color() {
        let formatter = Formatter::new(plain(), resolver());
        let results = vec![FileResult::new("a.js", vec![Diagnostic::new(2, Some("semi"), "x").at(1, 1)])];
        assert!(!formatter.format(&results).contains('\x1b'));
    }

    #[test]
    fn test_formatter_colors_by_default() {
        let config = RenderConfiguration { rule_links: false, ..RenderConfiguration::default() };
        let formatter = Formatter::new(config, resolver());
        let results = vec![FileResult::new("a.js", vec![Diagnostic::new(2, Some("semi"), "x").at(1, 1)])];
        assert!(formatter.format(&results).contains("\x1b[31m✘\x1b[0m"));
    }

    #[test]
    fn test_formatter_with_styler_overrides_color_choice() {
        let config = RenderConfiguration { rule_links: false, ..RenderConfiguration::default() };
        let formatter = Formatter::new(config, resolver()).with_styler(PlainStyler);
        let results = vec![FileResult::new("a.js", vec![Diagnostic::new(2, Some("semi"), "x").at(1, 1)])];
        let out = formatter.format(&results);

        assert!(!out.contains('\x1b'));
        assert!(out.contains("  ✘  semi  x  a.js:1:1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_paths_only_when_enabled() {
        let results = vec![FileResult::new("src/a.js", vec![Diagnostic::new(2, Some("semi"), "x").at(2, 3)])];

        let relative = format_results(&results, &plain(), &PlainStyler, &resolver());
        assert!(relative.contains(" src/a.js:2:3"));

        let config = RenderConfiguration { absolute_paths: true, ..plain() };
        let absolute = format_results(&results, &config, &PlainStyler, &resolver());
        assert!(absolute.contains("/repo/src/a.js:2:3"));
    }
}
