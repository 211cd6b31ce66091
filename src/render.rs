//! Output formats for a [`TranspositionTable`].

use crate::error::TransposeError;
use crate::table::TranspositionTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(TransposeError::Config(format!(
                "Unknown output format '{}' (expected text, html or yaml)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `table` in the requested format.
pub fn render(table: &TranspositionTable, format: OutputFormat) -> Result<String, TransposeError> {
    match format {
        OutputFormat::Text => Ok(render_text(table)),
        OutputFormat::Html => Ok(render_html(table)),
        OutputFormat::Yaml => render_yaml(table),
    }
}

/// Fixed-width grid with an underlined header row.
pub fn render_text(table: &TranspositionTable) -> String {
    let headers = table.headers();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        widths[0] = widths[0].max(row.key.chars().count());
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_text_line(&mut out, headers.iter().map(String::as_str), &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_text_line(&mut out, rule.iter().map(String::as_str), &widths);

    for row in table.rows() {
        let cells = std::iter::once(row.key).chain(row.cells.iter().map(String::as_str));
        push_text_line(&mut out, cells, &widths);
    }

    out
}

fn push_text_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.chars().count()));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// `<table>` fragment with a header row and one body row per key.
pub fn render_html(table: &TranspositionTable) -> String {
    let mut html = String::new();

    html.push_str("<table class=\"transposition-grid\">\n");

    // Header
    html.push_str("  <thead>\n    <tr>");
    for header in table.headers() {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in table.rows() {
        html.push_str(&format!("    <tr><td>{}</td>", escape_html(row.key)));
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n");

    html.push_str("</table>\n");
    html
}

pub fn render_yaml(table: &TranspositionTable) -> Result<String, TransposeError> {
    serde_yaml::to_string(table).map_err(|e| TransposeError::Render(e.to_string()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;

    fn table(tokens: &[&str]) -> TranspositionTable {
        let chords: Vec<Chord> = tokens.iter().map(|t| t.parse().unwrap()).collect();
        TranspositionTable::build(&chords).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&table(&["C", "G:7"]));
        let lines: Vec<&str> = text.lines().collect();

        // header + rule + 12 rows
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Key    C      G7");
        assert_eq!(lines[1], "-----  -----  ------");
        assert_eq!(lines[2], "C      C      C7");
        assert_eq!(lines[3], "C#/Db  C#/Db  C#/Db7");
        assert_eq!(lines[13], "B      B      B7");
    }

    #[test]
    fn test_html_structure() {
        let html = render_html(&table(&["A:m"]));
        assert!(html.starts_with("<table"));
        assert!(html.contains("<thead>\n    <tr><th>Key</th><th>Am</th></tr>"));
        assert!(html.contains("<tr><td>C#/Db</td><td>C#/Dbm</td></tr>"));
        assert_eq!(html.matches("<tr><td>").count(), 12);
        assert!(html.trim_end().ends_with("</table>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("G#/Ab"), "G#/Ab");
    }

    #[test]
    fn test_yaml_output() {
        let yaml = render_yaml(&table(&["D:m7"])).unwrap();
        assert!(yaml.contains("headers:"));
        assert!(yaml.contains("rows:"));
        assert_eq!(yaml.matches("key:").count(), 12);
        assert!(yaml.contains("F#/Gbm7"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("HTML".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
