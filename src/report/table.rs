//! Main diagnostics table: row building and rendering.
//!
//! Every diagnostic becomes one logical row of four cells; the location
//! cell carries the source snippet and pointer on extra lines, which the
//! table renderer expands into multiple output lines.

use super::links::{category_label, editor_link};
use super::types::{BuiltRows, Row};
use crate::config::RenderConfiguration;
use crate::console_format::{self, Align, Role, Styler};
use crate::types::{Diagnostic, Severity};
use log::debug;

/// Source lines at or above this many characters are not reproduced.
pub const MAX_SOURCE_LENGTH: usize = 1000;

/// Alignment of the marker, category, message and location columns.
pub const MAIN_TABLE_ALIGN: [Align; 4] = [Align::Left, Align::Left, Align::Left, Align::Left];

/// Build one row per diagnostic, counting severities and categories as we go.
///
/// `diagnostics` must already be sorted and filtered.
pub fn build_rows(diagnostics: &[Diagnostic], config: &RenderConfiguration, styler: &dyn Styler) -> BuiltRows {
    let mut built = BuiltRows::default();

    for diagnostic in diagnostics {
        let severity = diagnostic.severity_class();
        match severity {
            Severity::Error => {
                built.errors += 1;
                built.error_tally.record(diagnostic.rule_key());
            }
            Severity::Warning => {
                built.warnings += 1;
                built.warning_tally.record(diagnostic.rule_key());
            }
        }
        built.rows.push(build_row(diagnostic, severity, config, styler));
    }

    debug!(
        "Built {} rows ({} errors, {} warnings, {} error categories, {} warning categories)",
        built.rows.len(),
        built.errors,
        built.warnings,
        built.error_tally.len(),
        built.warning_tally.len()
    );
    built
}

fn build_row(diagnostic: &Diagnostic, severity: Severity, config: &RenderConfiguration, styler: &dyn Styler) -> Row {
    vec![
        String::new(),
        severity_cell(diagnostic, severity, config, styler),
        normalize_message(&diagnostic.message).to_string(),
        location_block(diagnostic, config),
    ]
}

/// Severity glyph followed by the category label.
fn severity_cell(
    diagnostic: &Diagnostic,
    severity: Severity,
    config: &RenderConfiguration,
    styler: &dyn Styler,
) -> String {
    let glyph = styler.paint(severity.glyph(), severity.role());
    let label = category_label(diagnostic.rule_key(), config);
    if label.is_empty() { glyph } else { format!("{}  {}", glyph, styler.paint(&label, Role::Muted)) }
}

/// Drop one trailing period.
pub fn normalize_message(message: &str) -> &str {
    message.strip_suffix('.').unwrap_or(message)
}

/// `path:line:column`, followed by the source line and pointer when available.
pub fn location_block(diagnostic: &Diagnostic, config: &RenderConfiguration) -> String {
    let location = format!("{}:{}:{}", diagnostic.file_path, diagnostic.line(), diagnostic.column());
    let mut block = match &config.editor_link_scheme {
        Some(scheme) => console_format::hyperlink(&location, &editor_link(scheme, diagnostic)),
        None => location,
    };

    if let Some(source) = diagnostic.source.as_deref()
        && let Some(pointer) = pointer_line(source, diagnostic.column())
    {
        block.push('\n');
        block.push_str(source);
        block.push('\n');
        block.push_str(&pointer);
    }
    block
}

/// Whitespace up to the 1-based `column`, then a caret.
///
/// Tabs in `source` are reproduced so the caret lines up under tab-indented
/// code. Returns `None` for sources of `MAX_SOURCE_LENGTH` characters or more.
/// The padding is capped at `MAX_SOURCE_LENGTH` characters, so an absurd
/// column puts the caret just past the longest source we would print.
pub fn pointer_line(source: &str, column: u32) -> Option<String> {
    if source.chars().count() >= MAX_SOURCE_LENGTH {
        return None;
    }
    let offset = (column.saturating_sub(1) as usize).min(MAX_SOURCE_LENGTH);
    let mut pointer: String = source
        .chars()
        .chain(std::iter::repeat(' '))
        .take(offset)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    pointer.push('^');
    Some(pointer)
}
