pub mod csv;
pub mod json;
pub mod markdown;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::markdown::MarkdownFormatter;

use crate::error::Result;
use crate::models::{AnalyticsSummary, ScheduleEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    #[default]
    Markdown,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Markdown => "Markdown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn export_schedule(entries: &[ScheduleEntry], format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Csv => CsvFormatter::format_schedule(entries)?,
        ExportFormat::Json => JsonFormatter::format_schedule(entries)?,
        ExportFormat::Markdown => MarkdownFormatter::format_schedule(entries),
    })
}

pub fn export_analytics(summary: &AnalyticsSummary, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Csv => CsvFormatter::format_analytics(summary)?,
        ExportFormat::Json => JsonFormatter::format_analytics(summary)?,
        ExportFormat::Markdown => MarkdownFormatter::format_analytics(summary),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_from_str() {
        assert_eq!(ExportFormat::from_str("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_str("md"), Some(ExportFormat::Markdown));
        assert_eq!(
            ExportFormat::from_str("Markdown"),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(ExportFormat::from_str("xlsx"), None);
    }

    #[test]
    fn extension_round_trips() {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Markdown] {
            assert_eq!(ExportFormat::from_str(format.extension()), Some(format));
        }
    }
}
