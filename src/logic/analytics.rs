use crate::models::{AnalyticsSummary, IrrigationHistoryEntry, Timeframe, WaterUsage};

/// Water-use summary for a timeframe label.
///
/// The figures are a fixed per-window table, not derived from any schedule.
/// Unrecognised labels select "Last 30 Days".
pub fn get_analytics_summary(timeframe_label: &str) -> AnalyticsSummary {
    let timeframe = Timeframe::from_label(timeframe_label);
    if timeframe.as_str() != timeframe_label {
        tracing::debug!(
            "Unknown timeframe '{}', showing {}",
            timeframe_label,
            timeframe
        );
    }
    summary_for(timeframe)
}

pub fn summary_for(timeframe: Timeframe) -> AnalyticsSummary {
    match timeframe {
        Timeframe::Last30Days => AnalyticsSummary {
            timeframe,
            total_irrigation_mm: 142.0,
            total_rainfall_mm: 18.5,
            efficiency_percent: 85.0,
            water_applied_mm: 167.0,
            water_needed_mm: 142.0,
            water_lost_mm: 25.0,
            usage: WaterUsage {
                current_period_m3: 1_420.0,
                previous_period_m3: 1_670.0,
                savings_percent: 15.0,
            },
            history: vec![
                IrrigationHistoryEntry::new("Mar 18", 24.5, 180, 86.0),
                IrrigationHistoryEntry::new("Mar 15", 22.0, 165, 85.0),
                IrrigationHistoryEntry::new("Mar 12", 25.5, 190, 84.0),
                IrrigationHistoryEntry::new("Mar 9", 21.0, 160, 85.0),
                IrrigationHistoryEntry::new("Mar 6", 23.5, 175, 86.0),
            ],
        },
        Timeframe::Last60Days => AnalyticsSummary {
            timeframe,
            total_irrigation_mm: 268.0,
            total_rainfall_mm: 47.0,
            efficiency_percent: 82.0,
            water_applied_mm: 327.0,
            water_needed_mm: 268.0,
            water_lost_mm: 59.0,
            usage: WaterUsage {
                current_period_m3: 2_680.0,
                previous_period_m3: 3_270.0,
                savings_percent: 18.0,
            },
            history: vec![
                IrrigationHistoryEntry::new("Mar 18", 24.5, 180, 86.0),
                IrrigationHistoryEntry::new("Mar 9", 21.0, 160, 85.0),
                IrrigationHistoryEntry::new("Feb 28", 20.5, 155, 81.0),
                IrrigationHistoryEntry::new("Feb 19", 19.0, 150, 80.0),
                IrrigationHistoryEntry::new("Feb 10", 18.5, 145, 79.0),
            ],
        },
        Timeframe::Last90Days => AnalyticsSummary {
            timeframe,
            total_irrigation_mm: 376.0,
            total_rainfall_mm: 92.5,
            efficiency_percent: 80.0,
            water_applied_mm: 470.0,
            water_needed_mm: 376.0,
            water_lost_mm: 94.0,
            usage: WaterUsage {
                current_period_m3: 3_760.0,
                previous_period_m3: 4_700.0,
                savings_percent: 20.0,
            },
            history: vec![
                IrrigationHistoryEntry::new("Mar 18", 24.5, 180, 86.0),
                IrrigationHistoryEntry::new("Feb 28", 20.5, 155, 81.0),
                IrrigationHistoryEntry::new("Feb 10", 18.5, 145, 79.0),
                IrrigationHistoryEntry::new("Jan 24", 16.0, 130, 77.0),
                IrrigationHistoryEntry::new("Jan 6", 15.5, 125, 76.0),
            ],
        },
    }
}
