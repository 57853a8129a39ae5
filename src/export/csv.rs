use crate::error::{AgriWeatherError, Result};
use crate::models::{AnalyticsSummary, ScheduleEntry};
use ::csv::Writer;
use serde::Serialize;

/// One schedule line as written to CSV; depths carry one decimal
#[derive(Serialize)]
struct ScheduleRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "ETc (mm)")]
    etc: String,
    #[serde(rename = "Rain (mm)")]
    rain: String,
    #[serde(rename = "Irrigation (mm)")]
    irrigation: String,
    #[serde(rename = "Status")]
    status: &'static str,
}

/// CSV formatter for schedules and analytics
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn format_schedule(entries: &[ScheduleEntry]) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);
        if entries.is_empty() {
            wtr.write_record(["Date", "ETc (mm)", "Rain (mm)", "Irrigation (mm)", "Status"])?;
        }
        for e in entries {
            wtr.serialize(ScheduleRow {
                date: &e.date,
                etc: format!("{:.1}", e.etc),
                rain: format!("{:.1}", e.rain),
                irrigation: format!("{:.1}", e.irrigation),
                status: e.status.as_str(),
            })?;
        }
        into_string(wtr)
    }

    /// Metric rows followed by a blank line and the history table
    pub fn format_analytics(summary: &AnalyticsSummary) -> Result<String> {
        let mut metrics = Writer::from_writer(vec![]);
        metrics.write_record(["Metric", "Value"])?;
        let rows: [(&str, String); 10] = [
            ("Timeframe", summary.timeframe.as_str().to_string()),
            ("Total Irrigation (mm)", format!("{:.1}", summary.total_irrigation_mm)),
            ("Total Rainfall (mm)", format!("{:.1}", summary.total_rainfall_mm)),
            ("Efficiency (%)", format!("{:.0}", summary.efficiency_percent)),
            ("Water Applied (mm)", format!("{:.1}", summary.water_applied_mm)),
            ("Water Needed (mm)", format!("{:.1}", summary.water_needed_mm)),
            ("Water Lost (mm)", format!("{:.1}", summary.water_lost_mm)),
            ("Current Usage (m3)", format!("{:.0}", summary.usage.current_period_m3)),
            ("Previous Usage (m3)", format!("{:.0}", summary.usage.previous_period_m3)),
            ("Savings (%)", format!("{:.0}", summary.usage.savings_percent)),
        ];
        for (label, value) in &rows {
            metrics.write_record([*label, value.as_str()])?;
        }

        let mut history = Writer::from_writer(vec![]);
        history.write_record(["Date", "Amount (mm)", "Duration (min)", "Efficiency (%)"])?;
        for h in &summary.history {
            history.write_record([
                h.date.clone(),
                format!("{:.1}", h.amount_mm),
                h.duration_minutes.to_string(),
                format!("{:.0}", h.efficiency_percent),
            ])?;
        }

        Ok(format!("{}\n{}", into_string(metrics)?, into_string(history)?))
    }
}

fn into_string(wtr: Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AgriWeatherError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AgriWeatherError::InvalidData(format!("CSV output is not UTF-8: {}", e)))
}
