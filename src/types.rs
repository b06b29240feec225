//! Diagnostic data model shared by every stage of the formatter.
//!
//! The field names follow the JSON shape lint engines emit (`filePath`,
//! `ruleId`, ...), so results can be deserialized straight from an engine's
//! JSON report.

use crate::console_format::Role;
use serde::{Deserialize, Serialize};

/// Severity value engines use for errors.
pub const SEVERITY_ERROR: u8 = 2;

fn default_severity() -> u8 {
    // A record without severity is rendered as an error
    SEVERITY_ERROR
}

/// Severity class a diagnostic resolves to.
///
/// Ordered so that warnings sort before errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Glyph shown in front of the category label.
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠",
            Severity::Error => "✘",
        }
    }

    /// Semantic style role for cells of this severity.
    pub fn role(&self) -> Role {
        match self {
            Severity::Warning => Role::Warning,
            Severity::Error => Role::Error,
        }
    }
}

/// One finding reported by the lint engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Attached during flattening; engines usually leave it out of the message itself.
    #[serde(default)]
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(default = "default_severity")]
    pub severity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub message: String,
    /// The offending source line, if the engine captured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the given raw severity, rule and message.
    pub fn new(severity: u8, rule_id: Option<&str>, message: &str) -> Self {
        Diagnostic {
            file_path: String::new(),
            line: None,
            column: None,
            severity,
            fatal: None,
            rule_id: rule_id.map(str::to_string),
            message: message.to_string(),
            source: None,
        }
    }

    /// Set the line and column.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Set the captured source line.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Mark the diagnostic as fatal.
    pub fn fatal(mut self) -> Self {
        self.fatal = Some(true);
        self
    }

    /// Copy of this diagnostic with the file path replaced. The original is untouched.
    pub fn with_file_path(&self, file_path: &str) -> Self {
        Diagnostic { file_path: file_path.to_string(), ..self.clone() }
    }

    /// Resolve the severity class: fatal or severity 2 is an error, anything else a warning.
    pub fn severity_class(&self) -> Severity {
        if self.fatal == Some(true) || self.severity == SEVERITY_ERROR {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Category key used for grouping, filtering and tallies ("" when unclassified).
    pub fn rule_key(&self) -> &str {
        self.rule_id.as_deref().unwrap_or("")
    }

    pub fn line(&self) -> u32 {
        self.line.unwrap_or(0)
    }

    pub fn column(&self) -> u32 {
        self.column.unwrap_or(0)
    }
}

/// Diagnostics the engine produced for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file_path: String,
    /// `None` when the engine left the collection out; treated as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Diagnostic>>,
}

impl FileResult {
    pub fn new(file_path: &str, messages: Vec<Diagnostic>) -> Self {
        FileResult { file_path: file_path.to_string(), messages: Some(messages) }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.messages.as_deref().unwrap_or(&[])
    }
}
