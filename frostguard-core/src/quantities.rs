//! Catalogue of the quantities FrostGuard reports
//!
//! Hosts expose each derived value as its own sensor. The metadata a host
//! needs for that (stable key, bilingual display names, unit, device and state
//! class, icon) is fixed per quantity and lives here rather than in every
//! integration.

use core::fmt;

/// A quantity produced by one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Quantity {
    /// Water vapor mass per volume of air (g/m³)
    AbsoluteHumidity = 0,
    /// Saturation temperature over liquid water (°C)
    DewPoint = 1,
    /// Saturation temperature over ice (°C)
    FrostPoint = 2,
    /// Humidity-corrected freezing point (°C)
    FreezingPoint = 3,
    /// Evaporative cooling limit (°C)
    WetBulb = 4,
    /// Partial pressure of water vapor (hPa)
    VaporPressure = 5,
    /// Vapor mass per dry air mass (kg/kg)
    HumidityRatio = 6,
    /// Frost risk classification (0-5)
    FrostRiskLevel = 7,
}

impl Quantity {
    /// Every quantity, in reporting order
    pub const ALL: [Quantity; 8] = [
        Quantity::AbsoluteHumidity,
        Quantity::DewPoint,
        Quantity::FrostPoint,
        Quantity::FreezingPoint,
        Quantity::WetBulb,
        Quantity::VaporPressure,
        Quantity::HumidityRatio,
        Quantity::FrostRiskLevel,
    ];

    /// Stable machine key
    pub const fn key(&self) -> &'static str {
        match self {
            Quantity::AbsoluteHumidity => "absolute_humidity",
            Quantity::DewPoint => "dew_point",
            Quantity::FrostPoint => "frost_point",
            Quantity::FreezingPoint => "freezing_point",
            Quantity::WetBulb => "wet_bulb_temperature",
            Quantity::VaporPressure => "vapor_pressure",
            Quantity::HumidityRatio => "humidity_ratio",
            Quantity::FrostRiskLevel => "frost_risk_level",
        }
    }

    /// English display name
    pub const fn name_en(&self) -> &'static str {
        match self {
            Quantity::AbsoluteHumidity => "Absolute Humidity",
            Quantity::DewPoint => "Dew Point",
            Quantity::FrostPoint => "Frost Point",
            Quantity::FreezingPoint => "Freezing Point",
            Quantity::WetBulb => "Wet-Bulb Temperature",
            Quantity::VaporPressure => "Vapor Pressure",
            Quantity::HumidityRatio => "Humidity Ratio",
            Quantity::FrostRiskLevel => "Frost Risk Level",
        }
    }

    /// Dutch display name
    pub const fn name_nl(&self) -> &'static str {
        match self {
            Quantity::AbsoluteHumidity => "Absolute Vochtigheid",
            Quantity::DewPoint => "Dauwpunt",
            Quantity::FrostPoint => "Rijppunt",
            Quantity::FreezingPoint => "Vriespunt",
            Quantity::WetBulb => "Natte-Bol Temperatuur",
            Quantity::VaporPressure => "Dampdruk",
            Quantity::HumidityRatio => "Vochtverhouding",
            Quantity::FrostRiskLevel => "Vorst Risico Niveau",
        }
    }

    /// Unit of measurement, `None` for the unitless risk level
    pub const fn unit(&self) -> Option<&'static str> {
        match self {
            Quantity::AbsoluteHumidity => Some("g/m³"),
            Quantity::DewPoint
            | Quantity::FrostPoint
            | Quantity::FreezingPoint
            | Quantity::WetBulb => Some("°C"),
            Quantity::VaporPressure => Some("hPa"),
            Quantity::HumidityRatio => Some("kg/kg"),
            Quantity::FrostRiskLevel => None,
        }
    }

    /// Device class hint for hosts that group sensors by kind
    pub const fn device_class(&self) -> Option<&'static str> {
        match self {
            Quantity::DewPoint
            | Quantity::FrostPoint
            | Quantity::FreezingPoint
            | Quantity::WetBulb => Some("temperature"),
            Quantity::VaporPressure => Some("atmospheric_pressure"),
            Quantity::AbsoluteHumidity
            | Quantity::HumidityRatio
            | Quantity::FrostRiskLevel => None,
        }
    }

    /// State class hint, `measurement` for every continuous quantity
    pub const fn state_class(&self) -> Option<&'static str> {
        match self {
            Quantity::FrostRiskLevel => None,
            _ => Some("measurement"),
        }
    }

    /// Material Design icon name
    pub const fn icon(&self) -> &'static str {
        match self {
            Quantity::AbsoluteHumidity => "mdi:water",
            Quantity::DewPoint => "mdi:thermometer-water",
            Quantity::FrostPoint => "mdi:snowflake-thermometer",
            Quantity::FreezingPoint => "mdi:snowflake-alert",
            Quantity::WetBulb => "mdi:thermometer",
            Quantity::VaporPressure => "mdi:gauge",
            Quantity::HumidityRatio => "mdi:water-percent",
            Quantity::FrostRiskLevel => "mdi:snowflake-alert",
        }
    }

    /// Look a quantity up by its stable key
    pub fn from_key(key: &str) -> Option<Quantity> {
        Self::ALL.iter().copied().find(|q| q.key() == key)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_round_trip() {
        for (i, a) in Quantity::ALL.iter().enumerate() {
            assert_eq!(Quantity::from_key(a.key()), Some(*a));
            for b in &Quantity::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
        assert_eq!(Quantity::from_key("heat_index"), None);
    }

    #[test]
    fn temperatures_share_unit_and_class() {
        for q in [Quantity::DewPoint, Quantity::FrostPoint, Quantity::FreezingPoint, Quantity::WetBulb] {
            assert_eq!(q.unit(), Some("°C"));
            assert_eq!(q.device_class(), Some("temperature"));
        }
    }

    #[test]
    fn risk_level_is_unitless() {
        let q = Quantity::FrostRiskLevel;
        assert_eq!(q.unit(), None);
        assert_eq!(q.state_class(), None);
        assert_eq!(q.name_nl(), "Vorst Risico Niveau");
    }
}
