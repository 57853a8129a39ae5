use crate::models::{AnalyticsSummary, ScheduleEntry, ScheduleTotals};

/// Markdown formatter for schedules and analytics
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format_schedule(entries: &[ScheduleEntry]) -> String {
        let mut md = String::with_capacity(256 + entries.len() * 64);

        md.push_str("# Irrigation Schedule\n\n");
        md.push_str("| Date | ETc (mm) | Rain (mm) | Irrigation (mm) | Status |\n");
        md.push_str("|------|---------:|----------:|----------------:|--------|\n");
        for e in entries {
            md.push_str(&format!(
                "| {} | {:.1} | {:.1} | {:.1} | {} |\n",
                e.date, e.etc, e.rain, e.irrigation, e.status
            ));
        }

        let totals = ScheduleTotals::from_entries(entries);
        md.push_str(&format!(
            "\n**Total irrigation:** {:.1} mm over {} day(s)  \n",
            totals.irrigation_mm, totals.irrigation_days
        ));
        md.push_str(&format!("**Total rain:** {:.1} mm\n", totals.rain_mm));

        md
    }

    pub fn format_analytics(summary: &AnalyticsSummary) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# Water-Use Analytics: {}\n\n", summary.timeframe));

        md.push_str("## Totals\n\n");
        md.push_str(&format!(
            "- **Irrigation:** {:.1} mm\n",
            summary.total_irrigation_mm
        ));
        md.push_str(&format!(
            "- **Rainfall:** {:.1} mm\n",
            summary.total_rainfall_mm
        ));
        md.push_str(&format!(
            "- **Efficiency:** {:.0}%\n\n",
            summary.efficiency_percent
        ));

        md.push_str("## Water Balance\n\n");
        md.push_str("| Applied (mm) | Needed (mm) | Lost (mm) |\n");
        md.push_str("|-------------:|------------:|----------:|\n");
        md.push_str(&format!(
            "| {:.1} | {:.1} | {:.1} |\n\n",
            summary.water_applied_mm, summary.water_needed_mm, summary.water_lost_mm
        ));

        md.push_str("## Usage\n\n");
        md.push_str(&format!(
            "Used {:.0} m³ this period against {:.0} m³ previously, a {:.0}% saving.\n\n",
            summary.usage.current_period_m3,
            summary.usage.previous_period_m3,
            summary.usage.savings_percent
        ));

        if !summary.history.is_empty() {
            md.push_str("## Irrigation History\n\n");
            md.push_str("| Date | Amount (mm) | Duration (min) | Efficiency (%) |\n");
            md.push_str("|------|------------:|---------------:|---------------:|\n");
            for h in &summary.history {
                md.push_str(&format!(
                    "| {} | {:.1} | {} | {:.0} |\n",
                    h.date, h.amount_mm, h.duration_minutes, h.efficiency_percent
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::analytics::get_analytics_summary;
    use crate::models::IrrigationStatus;

    #[test]
    fn test_format_schedule() {
        let entries = vec![
            ScheduleEntry {
                date: "Mar 20 (Today)".into(),
                etc: 4.9,
                rain: 0.0,
                irrigation: 5.8,
                status: IrrigationStatus::IrrigateToday,
            },
            ScheduleEntry {
                date: "Mar 21".into(),
                etc: 4.7,
                rain: 0.5,
                irrigation: 0.0,
                status: IrrigationStatus::NoIrrigation,
            },
        ];

        let md = MarkdownFormatter::format_schedule(&entries);
        assert!(md.starts_with("# Irrigation Schedule\n\n"));
        assert!(md.contains("| Mar 20 (Today) | 4.9 | 0.0 | 5.8 | Irrigate Today |"));
        assert!(md.contains("| Mar 21 | 4.7 | 0.5 | 0.0 | No Irrigation |"));
        assert!(md.contains("**Total irrigation:** 5.8 mm over 1 day(s)"));
        assert!(md.contains("**Total rain:** 0.5 mm"));
    }

    #[test]
    fn test_format_analytics() {
        let md = MarkdownFormatter::format_analytics(&get_analytics_summary("Last 90 Days"));
        assert!(md.starts_with("# Water-Use Analytics: Last 90 Days"));
        assert!(md.contains("- **Efficiency:** 80%"));
        assert!(md.contains("| 470.0 | 376.0 | 94.0 |"));
        assert!(md.contains("a 20% saving"));
        assert!(md.contains("## Irrigation History"));
    }
}
