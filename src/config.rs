/// Configuration resolution module
///
/// This module handles:
/// - Reading the formatter's environment variables
/// - Interpreting formatter arguments passed after `--`
/// - Producing one immutable `RenderConfiguration` for the renderer
///
/// Nothing downstream reads the process environment; everything it needs is
/// resolved here, up front.
use log::debug;

/// Rewrite reported paths to absolute form when set to `"true"`
pub const ENV_ABSOLUTE_PATHS: &str = "DIAG_TABLE_ABSOLUTE_PATHS";
/// Editor link template, e.g. `vscode://file/%file:%line:%column`
pub const ENV_EDITOR_SCHEME: &str = "DIAG_TABLE_EDITOR_SCHEME";
/// Show bare rule ids instead of documentation links when set to `"true"`
pub const ENV_NO_LINK_RULES: &str = "DIAG_TABLE_NO_LINK_RULES";
/// Base URL rule ids are appended to
pub const ENV_RULE_DOCS: &str = "DIAG_TABLE_RULE_DOCS";
/// https://no-color.org
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_RULE_DOCS_BASE: &str = "https://eslint.org/docs/rules/";

const ARG_GROUP_BY_CATEGORY: &str = "--group-by-category";
const ARG_FILTER: &str = "--filter";

/// Everything the renderer needs to know about the current invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfiguration {
    /// Sort by rule id right after severity
    pub group_by_category: bool,
    /// Keep only diagnostics with exactly this rule id
    pub filter_category: Option<String>,
    /// Rewrite paths to absolute form before sorting and display
    pub absolute_paths: bool,
    /// Template with `%file`, `%line` and `%column` placeholders
    pub editor_link_scheme: Option<String>,
    /// Render category labels as documentation links
    pub rule_links: bool,
    pub rule_docs_base: String,
    /// Emit ANSI styling
    pub color: bool,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            group_by_category: false,
            filter_category: None,
            absolute_paths: false,
            editor_link_scheme: None,
            rule_links: true,
            rule_docs_base: DEFAULT_RULE_DOCS_BASE.to_string(),
            color: true,
        }
    }
}

/// Resolve configuration from the process environment and formatter arguments
pub fn from_process(formatter_args: &[String]) -> RenderConfiguration {
    resolve_configuration(formatter_args, |key| std::env::var(key).ok())
}

/// Resolve configuration using `env` for variable lookup
///
/// Boolean variables are only true for the literal value `"true"`.
pub fn resolve_configuration<F>(formatter_args: &[String], env: F) -> RenderConfiguration
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = RenderConfiguration {
        absolute_paths: env_flag(&env, ENV_ABSOLUTE_PATHS),
        editor_link_scheme: env(ENV_EDITOR_SCHEME).filter(|s| !s.is_empty()),
        rule_links: !env_flag(&env, ENV_NO_LINK_RULES),
        color: env(ENV_NO_COLOR).is_none(),
        ..RenderConfiguration::default()
    };
    if let Some(base) = env(ENV_RULE_DOCS).filter(|s| !s.is_empty()) {
        config.rule_docs_base = base;
    }

    apply_formatter_args(&mut config, formatter_args);

    debug!(
        "Resolved configuration: group_by_category={} filter={:?} absolute_paths={} editor_scheme={} rule_links={} color={}",
        config.group_by_category,
        config.filter_category,
        config.absolute_paths,
        config.editor_link_scheme.is_some(),
        config.rule_links,
        config.color
    );

    config
}

fn env_flag<F>(env: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    env(key).as_deref() == Some("true")
}

/// Apply `--group-by-category` and `--filter[=]<rule>` from the formatter arguments
fn apply_formatter_args(config: &mut RenderConfiguration, args: &[String]) {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == ARG_GROUP_BY_CATEGORY {
            config.group_by_category = true;
        } else if arg == ARG_FILTER {
            config.filter_category = iter.next().filter(|v| !v.is_empty()).cloned();
        } else if let Some(value) = arg.strip_prefix(ARG_FILTER).and_then(|rest| rest.strip_prefix('=')) {
            config.filter_category = Some(value.to_string()).filter(|v| !v.is_empty());
        } else {
            debug!("Ignoring unknown formatter argument: {}", arg);
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
