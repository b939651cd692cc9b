use crate::core::file_diff::FileComparison;
use crate::error::DisplayError;
use crate::storage::config::OutputFormat;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use std::io::IsTerminal;

const IDENTICAL_MESSAGE: &str = "Files are identical";

/// Renders file comparison reports and field lists for the terminal
pub struct ReportDisplay {
    use_colors: bool,
}

impl Default for ReportDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colored headers, e.g. when output is not a terminal
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Colored headers only when stdout is a terminal
    pub fn for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::new()
        } else {
            Self::new().without_colors()
        }
    }

    pub fn render_comparison(
        &self,
        comparison: &FileComparison,
        format: OutputFormat,
    ) -> Result<String, DisplayError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(comparison)?),
            OutputFormat::Plain => Ok(self.render_plain(comparison)),
            OutputFormat::Table => Ok(self.render_table(comparison)),
        }
    }

    pub fn render_fields(&self, fields: &[String], json: bool) -> Result<String, DisplayError> {
        if json {
            Ok(serde_json::to_string(fields)?)
        } else {
            Ok(fields.join("\n"))
        }
    }

    fn render_plain(&self, comparison: &FileComparison) -> String {
        if comparison.equal {
            IDENTICAL_MESSAGE.to_string()
        } else {
            comparison.reason.clone()
        }
    }

    fn render_table(&self, comparison: &FileComparison) -> String {
        if comparison.equal {
            return IDENTICAL_MESSAGE.to_string();
        }
        if comparison.differences.is_empty() {
            return comparison.reason.clone();
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let headers = ["Offset", "Offset (hex)", "Left", "Right"];
        if self.use_colors {
            table.set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
                    .collect::<Vec<Cell>>(),
            );
        } else {
            table.set_header(headers);
        }

        for diff in &comparison.differences {
            table.add_row(vec![
                diff.offset.to_string(),
                format!("0x{:X}", diff.offset),
                format!("0x{:02X}", diff.left),
                format!("0x{:02X}", diff.right),
            ]);
        }

        format!("{}\n{}", comparison.reason, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_diff::FileDiff;

    fn differing() -> FileComparison {
        FileComparison {
            equal: false,
            reason: "Content of 'a' differs from 'b' at 1 location(s): offset 26: 0x1A != 0xFF"
                .to_string(),
            differences: vec![FileDiff {
                offset: 26,
                left: 0x1A,
                right: 0xFF,
            }],
        }
    }

    fn identical() -> FileComparison {
        FileComparison {
            equal: true,
            reason: String::new(),
            differences: Vec::new(),
        }
    }

    #[test]
    fn test_identical_rendering() {
        let display = ReportDisplay::new();
        for format in [OutputFormat::Table, OutputFormat::Plain] {
            let output = display
                .render_comparison(&identical(), format)
                .expect("Failed to render");
            assert_eq!(output, IDENTICAL_MESSAGE);
        }
    }

    #[test]
    fn test_table_rendering_lists_differences() {
        let output = ReportDisplay::new()
            .without_colors()
            .render_comparison(&differing(), OutputFormat::Table)
            .expect("Failed to render");
        assert!(output.starts_with("Content of 'a'"));
        assert!(output.contains("Offset (hex)"));
        assert!(output.contains("0x1A"));
        assert!(output.contains("0xFF"));
    }

    #[test]
    fn test_json_rendering() {
        let output = ReportDisplay::new()
            .render_comparison(&differing(), OutputFormat::Json)
            .expect("Failed to render");
        let parsed: FileComparison = serde_json::from_str(&output).expect("Invalid JSON");
        assert_eq!(parsed, differing());
    }

    #[test]
    fn test_for_stdout_follows_terminal() {
        let display = ReportDisplay::for_stdout();
        assert_eq!(display.use_colors, std::io::stdout().is_terminal());
    }

    #[test]
    fn test_render_fields() {
        let fields = vec!["Aa".to_string(), String::new(), "Cc".to_string()];
        let display = ReportDisplay::new();
        assert_eq!(
            display.render_fields(&fields, true).expect("Failed to render"),
            r#"["Aa","","Cc"]"#
        );
        assert_eq!(
            display.render_fields(&fields, false).expect("Failed to render"),
            "Aa\n\nCc"
        );
    }
}
