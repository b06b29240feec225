//! Rule documentation and editor links.

use crate::config::RenderConfiguration;
use crate::types::Diagnostic;

/// Label shown for a category: a documentation link when rule links are
/// enabled, the bare rule id otherwise. Unclassified diagnostics get "".
pub fn category_label(rule_id: &str, config: &RenderConfiguration) -> String {
    if rule_id.is_empty() {
        String::new()
    } else if config.rule_links {
        format!("{}{}", config.rule_docs_base, rule_id)
    } else {
        rule_id.to_string()
    }
}

/// Expand `%file`, `%line` and `%column` in an editor link template.
pub fn editor_link(scheme: &str, diagnostic: &Diagnostic) -> String {
    scheme
        .replace("%file", &diagnostic.file_path)
        .replace("%line", &diagnostic.line().to_string())
        .replace("%column", &diagnostic.column().to_string())
}
