//! Irrigation water-balance planning.
//!
//! Crop coefficients, a daily irrigation schedule over a weather forecast,
//! the scalar gross irrigation requirement and canned water-use analytics.
//! Everything here is synchronous and pure; formatting for download lives in
//! [`export`].

pub mod config;
pub mod error;
pub mod export;
pub mod logic;
pub mod models;

pub use error::{AgriWeatherError, Result};
pub use logic::{
    compute_gross_requirement, compute_schedule, get_analytics_summary, lookup_coefficient,
};
pub use models::{AnalyticsSummary, ForecastDay, IrrigationStatus, ScheduleEntry, SoilProfile};
