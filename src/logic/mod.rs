pub mod analytics;
pub mod balance;
pub mod calculations;
pub mod coefficients;
pub mod policy;
pub mod schedule;

pub use analytics::get_analytics_summary;
pub use balance::SoilMoistureBalance;
pub use calculations::{compute_gross_requirement, current_requirement, RequirementSnapshot};
pub use coefficients::{crop_profile, lookup_coefficient, try_lookup_coefficient, DEFAULT_KC};
pub use policy::{DepletionTrigger, FixedCadence, PolicyKind, SchedulePolicy};
pub use schedule::{compute_schedule, compute_schedule_with, try_compute_schedule};
