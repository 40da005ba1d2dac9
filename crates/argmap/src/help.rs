//! Help text rendering for a declaration set.
//!
//! Pure formatting over the declarations, independent of the parsing core:
//! a consumer of the validated set, never a participant in parsing.

use crate::spec::{Arity, Obligation, OptSpec, with_help};

/// Column layout policy for [`render_with`].
#[derive(Debug, Clone, Copy)]
pub struct HelpStyle {
    /// Total line width descriptions are wrapped to.
    pub line_width: usize,
    /// Spaces between the option column and the description column.
    pub column_gap: usize,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            line_width: 80,
            column_gap: 2,
        }
    }
}

/// Render the option table with the default layout.
pub fn render(specs: &[OptSpec]) -> String {
    render_with(specs, &HelpStyle::default())
}

/// Render the option table, one row per declaration with the implicit
/// `--help` row included, descriptions aligned past the widest left column.
pub fn render_with(specs: &[OptSpec], style: &HelpStyle) -> String {
    let full = with_help(specs);
    let rows: Vec<(String, String)> = full
        .iter()
        .map(|spec| (left_column(spec), right_column(spec)))
        .collect();
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    // Hanging indent for wrapped description lines.
    let indent = 2 + width + style.column_gap;
    let avail = style.line_width.saturating_sub(indent).max(16);

    let mut out = String::new();
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
            continue;
        }
        for (i, line) in wrap(&help, avail).iter().enumerate() {
            if i == 0 {
                out.push_str(&format!(
                    "  {left:width$}{gap}{line}\n",
                    gap = " ".repeat(style.column_gap)
                ));
            } else {
                out.push_str(&format!("{}{line}\n", " ".repeat(indent)));
            }
        }
    }
    out
}

fn left_column(spec: &OptSpec) -> String {
    let mut out = format!("-{}, --{}", spec.short, spec.long);
    match spec.arity {
        Arity::None => {}
        Arity::Required => {
            out.push_str(&format!(" <{}>", value_name(spec)));
        }
        Arity::Optional => {
            out.push_str(&format!(" [<{}>]", value_name(spec)));
        }
    }
    out
}

fn right_column(spec: &OptSpec) -> String {
    let mut out = spec.help.trim().to_string();
    if spec.obligation == Obligation::Required {
        if out.is_empty() {
            out.push_str("required");
        } else {
            out.push_str(" (required)");
        }
    }
    if let Some(default_value) = &spec.default_value {
        if out.is_empty() {
            out.push_str(&format!("[default: {default_value}]"));
        } else {
            out.push_str(&format!(" [default: {default_value}]"));
        }
    }
    out
}

fn value_name(spec: &OptSpec) -> String {
    spec.long.replace('-', "_").to_ascii_uppercase()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
