//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use gleaner_domain::DatasetStats;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format dataset statistics.
    pub fn format_stats(&self, stats: &DatasetStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Table => Ok(self.format_stats_table(stats)),
            OutputFormat::Quiet => Ok(format!(
                "{} {} {} {} {} {}",
                stats.total_entries,
                stats.verified_entries,
                stats.total_verified_points,
                stats.accurate_points,
                stats.inaccurate_points,
                stats.uncertain_points
            )),
        }
    }

    fn format_stats_table(&self, stats: &DatasetStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Count"]);
        builder.push_record(["Entries", &stats.total_entries.to_string()]);
        builder.push_record(["Verified entries", &stats.verified_entries.to_string()]);
        builder.push_record(["Verified points", &stats.total_verified_points.to_string()]);
        builder.push_record(["Accurate points", &stats.accurate_points.to_string()]);
        builder.push_record(["Inaccurate points", &stats.inaccurate_points.to_string()]);
        builder.push_record(["Uncertain points", &stats.uncertain_points.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Summary line for one processed article.
    pub fn entry_added(
        &self,
        url: &str,
        points: usize,
        attempts: usize,
        flagged: bool,
    ) -> String {
        let mut msg = format!("{}: {} point(s) in {} attempt(s)", url, points, attempts);
        if flagged {
            msg.push_str(" [contains inaccurate points]");
            return self.warning(&msg);
        }
        self.success(&msg)
    }

    /// Summary line for a whole run.
    pub fn run_summary(&self, added: usize, failed: usize) -> String {
        let msg = format!("{} article(s) added, {} failed", added, failed);
        if failed > 0 {
            self.warning(&msg)
        } else {
            self.success(&msg)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> DatasetStats {
        DatasetStats {
            total_entries: 4,
            verified_entries: 3,
            total_verified_points: 12,
            accurate_points: 9,
            inaccurate_points: 2,
            uncertain_points: 1,
        }
    }

    #[test]
    fn test_stats_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_stats(&sample_stats()).unwrap();
        assert!(output.contains("Entries"));
        assert!(output.contains("Inaccurate points"));
        assert!(output.contains('4'));
    }

    #[test]
    fn test_stats_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_stats(&sample_stats()).unwrap();
        assert!(output.contains("\"accurate_points\": 9"));
    }

    #[test]
    fn test_stats_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_stats(&sample_stats()).unwrap();
        assert_eq!(output, "4 3 12 9 2 1");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_flagged_entry_is_a_warning() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.entry_added("https://example.com", 3, 2, true);
        assert!(msg.contains("contains inaccurate points"));
        assert!(msg.starts_with('⚠'));
    }
}
