//! diag-table: column-aligned terminal reports for lint diagnostics.
//!
//! A lint engine hands over its per-file results; `format_results` (or a
//! configured `Formatter`) turns them into one report string: a table of
//! diagnostics with source pointers, a problem count line and per-category
//! summaries. The empty string means there is nothing to report.
//!
//! High-level modules:
//! - `types`: Diagnostic and per-file result models.
//! - `config`: `RenderConfiguration` resolved from environment and arguments.
//! - `report`: The formatter pipeline (flatten, sort, filter, rows, summary).
//! - `console_format`: Styling, width measurement and table layout.
//! - `paths`: Absolute path resolution.
//! - `input`: Reading engine JSON output.

pub mod config;
pub mod console_format;
pub mod input;
pub mod paths;
pub mod report;
pub mod types;

pub use config::RenderConfiguration;
pub use console_format::{AnsiStyler, PlainStyler, Role, Styler};
pub use paths::{BaseDirResolver, PathResolver};
pub use report::{Formatter, format_results};
pub use types::{Diagnostic, FileResult, Severity};
