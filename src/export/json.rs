use crate::models::{AnalyticsSummary, ScheduleEntry};

/// JSON formatter for schedules and analytics
pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed array of schedule entries
    pub fn format_schedule(entries: &[ScheduleEntry]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(entries)
    }

    pub fn format_analytics(summary: &AnalyticsSummary) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::analytics::get_analytics_summary;
    use crate::models::IrrigationStatus;

    #[test]
    fn test_format_schedule() {
        let entries = vec![ScheduleEntry {
            date: "Mar 21".into(),
            etc: 4.7,
            rain: 0.0,
            irrigation: 0.0,
            status: IrrigationStatus::NoIrrigation,
        }];

        let json = JsonFormatter::format_schedule(&entries).unwrap();
        assert!(json.contains("\"date\": \"Mar 21\""));
        assert!(json.contains("\"etc\": 4.7"));
        assert!(json.contains("\"status\": \"No Irrigation\""));

        let parsed: Vec<ScheduleEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_format_analytics() {
        let json = JsonFormatter::format_analytics(&get_analytics_summary("Last 60 Days")).unwrap();
        assert!(json.contains("\"timeframe\": \"Last 60 Days\""));
        assert!(json.contains("\"savings_percent\": 18.0"));
        assert!(json.contains("\"history\": ["));
    }
}
