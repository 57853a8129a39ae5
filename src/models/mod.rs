pub mod analytics;
pub mod crop;
pub mod forecast;
pub mod schedule;
pub mod services;
pub mod soil;

pub use analytics::*;
pub use crop::*;
pub use forecast::*;
pub use schedule::*;
pub use services::*;
pub use soil::*;
