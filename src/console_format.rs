/// Console formatting module - Pure rendering concerns
///
/// This module handles all terminal text concerns of the report:
/// - Semantic styling (error/warning/muted/emphasis roles) via `Styler`
/// - Visible width measurement that ignores escape sequences
/// - Padding and column alignment
/// - Multi-line table layout
/// - OSC 8 hyperlinks
///
/// It knows nothing about diagnostics; the report module feeds it cells.
use term::color::Color;
use unicode_width::UnicodeWidthStr;

/// Separator placed between table columns
pub const COLUMN_GAP: &str = "  ";

//
// Styling
//

/// Semantic role a piece of text plays in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Error,
    Warning,
    /// Secondary text such as category labels
    Muted,
    /// Headings and the problem count line
    Emphasis,
}

/// Maps (text, role) to styled text
pub trait Styler {
    fn paint(&self, text: &str, role: Role) -> String;
}

/// Leaves text untouched (NO_COLOR, tests, piping to files)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// Wraps text in ANSI SGR sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, text: &str, role: Role) -> String {
        if text.is_empty() {
            return String::new();
        }
        let code = match role {
            Role::Error => foreground_code(term::color::RED),
            Role::Warning => foreground_code(term::color::YELLOW),
            Role::Muted => foreground_code(term::color::BRIGHT_BLACK),
            Role::Emphasis => 1, // bold
        };
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }
}

/// SGR foreground code for a terminal palette color
fn foreground_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

/// Wrap `text` in an OSC 8 hyperlink pointing at `target`
pub fn hyperlink(text: &str, target: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", target, text)
}

//
// Text Formatting Utilities
//

/// Remove CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL|ST`) sequences
pub fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // Parameters and intermediates run until a final byte in '@'..='~'
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// Count the display width of a string, ignoring escape sequences and
/// accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        UnicodeWidthStr::width(strip_escapes(s).as_str())
    } else {
        UnicodeWidthStr::width(s)
    }
}

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Pad string to exact display width; text wider than `width` is left as is
pub fn pad_to_width(s: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(display_width(s));
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(padding)),
        Align::Right => format!("{}{}", " ".repeat(padding), s),
    }
}

//
// Table Layout
//

/// Lay out rows of cells into aligned columns.
///
/// Cells may contain newlines; a row then spans as many output lines as its
/// tallest cell. Column widths are the widest visible line in each column.
/// Columns beyond `align` default to left alignment. Trailing spaces are
/// trimmed from every output line, and no trailing newline is added.
pub fn render_table(rows: &[Vec<String>], align: &[Align]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let split: Vec<Vec<Vec<&str>>> =
        rows.iter().map(|row| row.iter().map(|cell| cell.split('\n').collect()).collect()).collect();

    let mut widths = vec![0usize; columns];
    for row in &split {
        for (col, cell) in row.iter().enumerate() {
            for line in cell {
                widths[col] = widths[col].max(display_width(line));
            }
        }
    }

    let mut lines = Vec::new();
    for row in &split {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for index in 0..height {
            let mut line = String::new();
            for (col, width) in widths.iter().enumerate() {
                if col > 0 {
                    line.push_str(COLUMN_GAP);
                }
                let text = row.get(col).and_then(|cell| cell.get(index)).copied().unwrap_or("");
                let alignment = align.get(col).copied().unwrap_or_default();
                line.push_str(&pad_to_width(text, *width, alignment));
            }
            lines.push(line.trim_end_matches(' ').to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
