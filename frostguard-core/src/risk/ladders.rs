//! The five frost-risk ladders
//!
//! Four ladders are plain threshold lists: walk from most to least severe and
//! take the first bound the value sits at or below. The wet bulb ladder adds
//! an air temperature condition to each rung. The absolute humidity ladder is
//! a decision list whose branches overlap, so its order decides the outcome.

use crate::constants::risk::{
    DEW_POINT_LADDER, DRY_AIR_ABSOLUTE_HUMIDITY_G_M3, DRY_AIR_FREEZING_MAX_C, DRY_AIR_LEVEL,
    DRY_AIR_TEMP_MAX_C, FREEZING_POINT_LADDER, MOIST_AIR_FREEZING_MAX_C, MOIST_AIR_LEVEL,
    MOIST_AIR_TEMP_MAX_C, MOIST_COLD_AIR_FREEZING_MAX_C, MOIST_COLD_AIR_LEVEL,
    MOIST_COLD_AIR_TEMP_MAX_C, TEMPERATURE_LADDER, WET_BULB_FREEZING_AIR_MAX_C,
    WET_BULB_FREEZING_C, WET_BULB_FREEZING_LEVEL, WET_BULB_NEAR_FREEZING_AIR_MAX_C,
    WET_BULB_NEAR_FREEZING_C, WET_BULB_NEAR_FREEZING_LEVEL,
};

fn threshold(value: f64, ladder: &[(f64, u8)]) -> u8 {
    ladder
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map_or(0, |(_, level)| *level)
}

/// Air temperature ladder, 0-5
pub fn temperature(temperature: f64) -> u8 {
    threshold(temperature, &TEMPERATURE_LADDER)
}

/// Dew point ladder, 0-4
pub fn dew_point(dew_point: f64) -> u8 {
    threshold(dew_point, &DEW_POINT_LADDER)
}

/// Wet bulb ladder, 0, 3 or 4
pub fn wet_bulb(wet_bulb: f64, temperature: f64) -> u8 {
    if wet_bulb <= WET_BULB_FREEZING_C && temperature <= WET_BULB_FREEZING_AIR_MAX_C {
        WET_BULB_FREEZING_LEVEL
    } else if wet_bulb <= WET_BULB_NEAR_FREEZING_C && temperature <= WET_BULB_NEAR_FREEZING_AIR_MAX_C {
        WET_BULB_NEAR_FREEZING_LEVEL
    } else {
        0
    }
}

/// Freezing point ladder, 0 or 2-4
pub fn freezing_point(freezing_point: f64) -> u8 {
    threshold(freezing_point, &FREEZING_POINT_LADDER)
}

/// Absolute humidity decision list, first match wins
///
/// The third branch is contained in the second and never fires; it is kept so
/// the list reads the same as the rule set it encodes.
pub fn absolute_humidity(absolute_humidity: f64, temperature: f64, freezing_point: f64) -> u8 {
    let dry = absolute_humidity < DRY_AIR_ABSOLUTE_HUMIDITY_G_M3;
    let moist = absolute_humidity >= DRY_AIR_ABSOLUTE_HUMIDITY_G_M3;

    if dry && temperature <= DRY_AIR_TEMP_MAX_C && freezing_point <= DRY_AIR_FREEZING_MAX_C {
        DRY_AIR_LEVEL
    } else if moist && temperature <= MOIST_AIR_TEMP_MAX_C && freezing_point <= MOIST_AIR_FREEZING_MAX_C {
        MOIST_AIR_LEVEL
    } else if moist
        && temperature <= MOIST_COLD_AIR_TEMP_MAX_C
        && freezing_point <= MOIST_COLD_AIR_FREEZING_MAX_C
    {
        MOIST_COLD_AIR_LEVEL
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rungs_are_inclusive() {
        assert_eq!(temperature(-5.0), 5);
        assert_eq!(temperature(-4.99), 4);
        assert_eq!(temperature(-2.0), 4);
        assert_eq!(temperature(0.0), 3);
        assert_eq!(temperature(2.0), 2);
        assert_eq!(temperature(4.0), 1);
        assert_eq!(temperature(4.01), 0);
    }

    #[test]
    fn dew_point_rungs() {
        assert_eq!(dew_point(-12.0), 4);
        assert_eq!(dew_point(-2.0), 3);
        assert_eq!(dew_point(-0.5), 2);
        assert_eq!(dew_point(1.7), 1);
        assert_eq!(dew_point(2.01), 0);
    }

    #[test]
    fn wet_bulb_needs_cold_air() {
        assert_eq!(wet_bulb(-1.0, 2.0), 4);
        // Freezing wet bulb but air too warm for the top rung
        assert_eq!(wet_bulb(-1.0, 2.5), 3);
        assert_eq!(wet_bulb(1.0, 3.0), 3);
        assert_eq!(wet_bulb(0.5, 3.5), 0);
        assert_eq!(wet_bulb(1.5, 0.0), 0);
    }

    #[test]
    fn freezing_point_rungs() {
        assert_eq!(freezing_point(-2.0), 4);
        assert_eq!(freezing_point(0.0), 3);
        assert_eq!(freezing_point(1.0), 2);
        assert_eq!(freezing_point(1.01), 0);
    }

    #[test]
    fn absolute_humidity_first_match_wins() {
        // Dry, cold, freezing
        assert_eq!(absolute_humidity(2.0, 0.0, -1.0), 1);
        // Dry but not cold enough
        assert_eq!(absolute_humidity(2.0, 2.0, -1.0), 0);
        // Moist and near freezing
        assert_eq!(absolute_humidity(4.0, 3.0, 0.4), 2);
        // Moist and below freezing: the wider rule matches first
        assert_eq!(absolute_humidity(4.0, 0.5, -1.0), 2);
        assert_eq!(absolute_humidity(2.8, 4.0, 0.5), 2);
        assert_eq!(absolute_humidity(4.0, 4.5, 0.0), 0);
    }

    #[test]
    fn nan_fails_every_rung() {
        assert_eq!(temperature(f64::NAN), 0);
        assert_eq!(wet_bulb(f64::NAN, 0.0), 0);
        assert_eq!(absolute_humidity(f64::NAN, 0.0, -1.0), 0);
    }
}
