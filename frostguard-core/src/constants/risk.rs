//! Frost Risk Thresholds
//!
//! Thresholds for the heuristic frost-risk ladders. These are field-tuned
//! values, not derived from a single physical formula. Each ladder is listed
//! from most to least severe; the first threshold that holds gives the level.

/// Lowest risk level.
pub const RISK_LEVEL_MIN: u8 = 0;

/// Highest risk level.
pub const RISK_LEVEL_MAX: u8 = 5;

/// Air temperature ladder: (upper bound °C, level).
pub const TEMPERATURE_LADDER: [(f64, u8); 5] = [
    (-5.0, 5),
    (-2.0, 4),
    (0.0, 3),
    (2.0, 2),
    (4.0, 1),
];

/// Dew point ladder: (upper bound °C, level).
pub const DEW_POINT_LADDER: [(f64, u8); 4] = [
    (-5.0, 4),
    (-2.0, 3),
    (0.0, 2),
    (2.0, 1),
];

/// Freezing point ladder: (upper bound °C, level).
pub const FREEZING_POINT_LADDER: [(f64, u8); 3] = [
    (-2.0, 4),
    (0.0, 3),
    (1.0, 2),
];

// ===== WET BULB LADDER =====

/// Wet bulb at or below this, with cold air, is high risk (°C).
pub const WET_BULB_FREEZING_C: f64 = 0.0;

/// Air temperature bound for the freezing wet bulb rule (°C).
pub const WET_BULB_FREEZING_AIR_MAX_C: f64 = 2.0;

/// Level for a freezing wet bulb.
pub const WET_BULB_FREEZING_LEVEL: u8 = 4;

/// Wet bulb at or below this, with cool air, is moderate risk (°C).
pub const WET_BULB_NEAR_FREEZING_C: f64 = 1.0;

/// Air temperature bound for the near-freezing wet bulb rule (°C).
pub const WET_BULB_NEAR_FREEZING_AIR_MAX_C: f64 = 3.0;

/// Level for a near-freezing wet bulb.
pub const WET_BULB_NEAR_FREEZING_LEVEL: u8 = 3;

// ===== ABSOLUTE HUMIDITY LADDER =====

/// Boundary between dry and moist air (g/m³).
pub const DRY_AIR_ABSOLUTE_HUMIDITY_G_M3: f64 = 2.8;

/// Dry air rule: air temperature bound (°C).
pub const DRY_AIR_TEMP_MAX_C: f64 = 1.0;
/// Dry air rule: freezing point bound (°C).
pub const DRY_AIR_FREEZING_MAX_C: f64 = 0.0;
/// Dry air rule: level.
pub const DRY_AIR_LEVEL: u8 = 1;

/// Moist air near freezing: air temperature bound (°C).
pub const MOIST_AIR_TEMP_MAX_C: f64 = 4.0;
/// Moist air near freezing: freezing point bound (°C).
pub const MOIST_AIR_FREEZING_MAX_C: f64 = 0.5;
/// Moist air near freezing: level.
pub const MOIST_AIR_LEVEL: u8 = 2;

/// Moist air below freezing: air temperature bound (°C).
///
/// Evaluated after the near-freezing rule, whose bounds contain these.
pub const MOIST_COLD_AIR_TEMP_MAX_C: f64 = 1.0;
/// Moist air below freezing: freezing point bound (°C).
pub const MOIST_COLD_AIR_FREEZING_MAX_C: f64 = 0.0;
/// Moist air below freezing: level.
pub const MOIST_COLD_AIR_LEVEL: u8 = 3;
