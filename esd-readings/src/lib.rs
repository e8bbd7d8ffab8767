//! Core types for environmental sensor readings.
//!
//! - `reading`: the `SensorReading` record and JSON payload parsing
//! - `timestamp`: `ReadingTimestamp`, the raw timestamp text plus its parsed instant
//! - `quantity`: `Quantity`, a numeric field that may also hold raw text
//! - `field`: the declared field list and the `SensorDraft` form buffer

mod de;
pub mod field;
pub mod quantity;
pub mod reading;
pub mod timestamp;

pub use field::{SensorDraft, SensorField};
pub use quantity::Quantity;
pub use reading::{parse_readings, SensorReading};
pub use timestamp::ReadingTimestamp;
