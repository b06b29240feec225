use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "diag-table")]
#[command(about = "Render lint engine JSON results as an aligned terminal report")]
#[command(after_help = "Formatter arguments go after `--`:\n  \
    diag-table --input eslint.json -- --group-by-category\n  \
    diag-table -- --filter=no-unused-vars < eslint.json\n\n\
    Environment: DIAG_TABLE_ABSOLUTE_PATHS, DIAG_TABLE_EDITOR_SCHEME, DIAG_TABLE_NO_LINK_RULES,\n\
    DIAG_TABLE_RULE_DOCS, NO_COLOR")]
#[command(version)]
pub struct CliArgs {
    /// Read lint results from this JSON file instead of stdin
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// When to color the report
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Shorthand for `--color never`
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Formatter arguments: --group-by-category, --filter=<RULE>
    #[arg(last = true, value_name = "FORMATTER_ARGS")]
    pub formatter_args: Vec<String>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref input) = self.input
            && !input.is_file()
        {
            return Err(format!("Input file not found: {}", input.display()));
        }
        Ok(())
    }

    /// Final color decision. `configured` is the environment's answer (false
    /// under NO_COLOR); `Auto` additionally requires a terminal on stdout.
    pub fn color_enabled(&self, configured: bool, stdout_is_terminal: bool) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => configured && stdout_is_terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_args_after_separator() {
        let args =
            CliArgs::try_parse_from(["diag-table", "--no-color", "--", "--group-by-category", "--filter=semi"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.input, None);
        assert_eq!(args.formatter_args, vec!["--group-by-category", "--filter=semi"]);
    }

    #[test]
    fn test_color_defaults_to_auto() {
        let args = CliArgs::try_parse_from(["diag-table"]).unwrap();
        assert_eq!(args.color, ColorChoice::Auto);
        assert!(args.color_enabled(true, true));
        assert!(!args.color_enabled(true, false));
        assert!(!args.color_enabled(false, true));
    }

    #[test]
    fn test_color_always_and_never() {
        let always = CliArgs::try_parse_from(["diag-table", "--color", "always"]).unwrap();
        assert!(always.color_enabled(false, false));

        let never = CliArgs::try_parse_from(["diag-table", "--color=never"]).unwrap();
        assert!(!never.color_enabled(true, true));

        let no_color = CliArgs::try_parse_from(["diag-table", "--no-color"]).unwrap();
        assert!(!no_color.color_enabled(true, true));
    }

    #[test]
    fn test_no_color_conflicts_with_color() {
        assert!(CliArgs::try_parse_from(["diag-table", "--no-color", "--color", "always"]).is_err());
    }

    #[test]
    fn test_formatter_args_require_separator() {
        assert!(CliArgs::try_parse_from(["diag-table", "--group-by-category"]).is_err());
    }

    #[test]
    fn test_validate_missing_input_fails() {
        let args = CliArgs {
            input: Some(PathBuf::from("definitely/not/here.json")),
            color: ColorChoice::Auto,
            no_color: false,
            formatter_args: vec![],
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_stdin_succeeds() {
        let args = CliArgs { input: None, color: ColorChoice::Auto, no_color: true, formatter_args: vec![] };
        assert!(args.validate().is_ok());
    }
}
