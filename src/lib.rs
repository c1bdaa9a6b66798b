pub mod alert_contact;
pub mod client;
pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod monitor;
mod raw;
pub mod style;

pub use alert_contact::AlertContact;
pub use client::{GetMonitors, UptimeRobot};
pub use error::MonitorError;
pub use log::Log;
pub use monitor::Monitor;
pub use raw::RawRecord;
pub use style::ColorMode;
