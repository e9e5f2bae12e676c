//! Psychrometric Constants
//!
//! Coefficients for the empirical saturation curves used by the formula
//! library. Three different Magnus parameter sets appear on purpose: the
//! saturation vapor pressure curve (Alduchov & Eskridge style, b = 243.5), the
//! Magnus-Tetens dew point inversion (b = 237.7) and the ice-phase curve for
//! the frost point (b = 265.5).

// ===== REFERENCE CONDITIONS =====

/// Absolute zero in Celsius (°C).
///
/// Offset between the Celsius and Kelvin scales.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Kelvin offset added to a Celsius temperature (K).
pub const KELVIN_OFFSET: f64 = 273.15;

/// Standard atmospheric pressure at sea level (hPa).
///
/// The humidity ratio assumes this fixed ambient pressure.
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Ratio of the molar masses of water vapor and dry air.
///
/// Source: ASHRAE Fundamentals, psychrometrics chapter
pub const MOLAR_MASS_RATIO: f64 = 0.622;

// ===== SATURATION VAPOR PRESSURE (WATER) =====

/// Saturation vapor pressure at 0°C (hPa).
pub const MAGNUS_ES0_HPA: f64 = 6.112;

/// Magnus `a` coefficient for saturation vapor pressure over water.
pub const MAGNUS_A: f64 = 17.67;

/// Magnus `b` coefficient for saturation vapor pressure over water (°C).
///
/// The formula has a pole at `T = -MAGNUS_B`.
pub const MAGNUS_B_C: f64 = 243.5;

/// Conversion factor from hPa·%RH over Kelvin to g/m³.
///
/// Derived from the ideal gas law with the specific gas constant of water
/// vapor (461.5 J/kg·K).
///
/// Source: carnotcycle, "How to convert relative humidity to absolute humidity"
pub const ABSOLUTE_HUMIDITY_FACTOR: f64 = 2.1674;

// ===== DEW POINT (MAGNUS-TETENS) =====

/// Magnus-Tetens `a` coefficient for the dew point inversion.
pub const DEW_POINT_A: f64 = 17.27;

/// Magnus-Tetens `b` coefficient for the dew point inversion (°C).
pub const DEW_POINT_B_C: f64 = 237.7;

// ===== FROST POINT (ICE PHASE) =====

/// Magnus `a` coefficient for saturation over ice.
pub const FROST_POINT_A: f64 = 21.875;

/// Magnus `b` coefficient for saturation over ice (°C).
pub const FROST_POINT_B_C: f64 = 265.5;

// ===== FREEZING POINT =====

/// Numerator of the freezing point correction term (K).
pub const FREEZING_NUMERATOR_K: f64 = 2671.02;

/// Inverse-temperature coefficient of the freezing point correction (K).
pub const FREEZING_INVERSE_COEFF_K: f64 = 2954.61;

/// Logarithmic coefficient of the freezing point correction.
pub const FREEZING_LOG_COEFF: f64 = 2.193665;

/// Constant term of the freezing point correction.
pub const FREEZING_OFFSET: f64 = 13.3448;

// ===== WET BULB (STULL 2011) =====

/// Relative humidity below which the wet bulb is approximated (%).
///
/// Stull's fit is only published for RH ≥ 5%.
///
/// Source: Stull, R., 2011, J. Appl. Meteor. Climatol., 50, 2267-2269
pub const WET_BULB_MIN_FIT_RH_PCT: f64 = 5.0;

/// Depression applied to the dry bulb for very dry air (°C).
pub const WET_BULB_DRY_AIR_DEPRESSION_C: f64 = 0.5;

// Stull coefficients, in order of appearance in the published equation:
// Tw = T·atan(C1·√(RH + C2)) + atan(T + RH) − atan(RH − C3)
//      + C4·RH^1.5·atan(C5·RH) − C6

/// Stull `C1`, scales the square-root term.
pub const STULL_C1: f64 = 0.151977;
/// Stull `C2`, humidity offset under the square root (%).
pub const STULL_C2: f64 = 8.313659;
/// Stull `C3`, humidity offset of the third arctangent (%).
pub const STULL_C3: f64 = 1.676331;
/// Stull `C4`, weight of the RH^1.5 term.
pub const STULL_C4: f64 = 0.00391838;
/// Stull `C5`, scales the humidity inside the last arctangent.
pub const STULL_C5: f64 = 0.023101;
/// Stull `C6`, constant offset (°C).
pub const STULL_C6: f64 = 4.686035;

// ===== HUMIDITY DOMAIN =====

/// Lower bound of the physical relative humidity range (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Upper bound of the physical relative humidity range (%).
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

/// Lowest relative humidity accepted by logarithmic formulas (%).
///
/// Anything below reads as zero at reporting precision, where `ln(RH/100)`
/// diverges and the dew point stops meaning anything.
pub const HUMIDITY_FLOOR_PCT: f64 = 0.01;

/// Distance from a formula pole treated as the pole itself (°C).
pub const SINGULARITY_TOLERANCE_C: f64 = 1e-9;

// ===== REPORTING PRECISION =====

/// Decimals kept for temperatures, pressures and absolute humidity.
pub const METRIC_DECIMALS: i32 = 2;

/// Decimals kept for the dimensionless humidity ratio.
pub const HUMIDITY_RATIO_DECIMALS: i32 = 6;
