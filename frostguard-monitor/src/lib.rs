//! Host adapter for the FrostGuard engine
//!
//! The engine only understands two finite numbers. Real hosts deliver sensor
//! states as strings that may be missing, `unknown`, `unavailable` or
//! garbage. This crate sits in between:
//!
//! 1. **Parse** both source states and drop anything that is not a number
//! 2. **Evaluate** with [`frostguard_core::evaluate`]
//! 3. **Expose** one output per quantity, with the inputs and the bilingual
//!    risk description as attributes
//!
//! ```rust
//! use frostguard_monitor::{FrostMonitor, MonitorConfig};
//! use frostguard_core::Quantity;
//!
//! let config = MonitorConfig::from_json(r#"{
//!     "name": "Orchard",
//!     "temperature_sensor": "sensor.orchard_temperature",
//!     "humidity_sensor": "sensor.orchard_humidity"
//! }"#)?;
//!
//! let monitor = FrostMonitor::new(config)?;
//! let snapshot = monitor.update(Some("-3.0"), Some("90"));
//!
//! let risk = snapshot.output(Quantity::FrostRiskLevel);
//! assert_eq!(risk.key, "orchard_frost_risk_level");
//! assert_eq!(risk.value, Some(4.0));
//! assert_eq!(risk.attributes.description_en, Some("High"));
//! # Ok::<(), frostguard_monitor::MonitorError>(())
//! ```

pub mod config;
pub mod error;
pub mod monitor;
pub mod output;
pub mod state;

pub use config::MonitorConfig;
pub use error::{MonitorError, MonitorResult};
pub use monitor::{FrostMonitor, MonitorSnapshot};
pub use output::{OutputAttributes, SensorOutput};
pub use state::SourceState;
