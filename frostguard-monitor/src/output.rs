//! Consumer-visible sensor outputs
//!
//! Every [`Quantity`] becomes one output carrying its value, static metadata
//! and the original inputs as attributes. The risk output also carries the
//! bilingual description of its level.

use frostguard_core::{Evaluation, Language, Quantity};
use serde::Serialize;

/// Attributes attached to every output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputAttributes {
    /// Parsed temperature input (°C)
    pub temperature: Option<f64>,
    /// Parsed humidity input (%)
    pub humidity: Option<f64>,
    /// English risk description, risk output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<&'static str>,
    /// Dutch risk description, risk output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_nl: Option<&'static str>,
}

/// One exposed sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorOutput {
    /// Unique key, `{monitor slug}_{quantity key}`
    pub key: String,
    /// Quantity reported
    pub quantity: Quantity,
    /// Display name, `{monitor name} {English quantity name}`
    pub name: String,
    /// Current value, `None` while unavailable
    pub value: Option<f64>,
    /// Unit of measurement
    pub unit: Option<&'static str>,
    /// Device class hint
    pub device_class: Option<&'static str>,
    /// State class hint
    pub state_class: Option<&'static str>,
    /// Icon
    pub icon: &'static str,
    /// Inputs and descriptions
    pub attributes: OutputAttributes,
}

impl SensorOutput {
    /// Build the output of `quantity` for one monitor update
    pub fn build(
        monitor_name: &str,
        monitor_slug: &str,
        quantity: Quantity,
        temperature: Option<f64>,
        humidity: Option<f64>,
        evaluation: Option<&Evaluation>,
    ) -> Self {
        let value = evaluation.map(|e| e.value(quantity));

        let (description_en, description_nl) = match (quantity, evaluation) {
            (Quantity::FrostRiskLevel, Some(e)) => (
                Some(e.risk.description(Language::En)),
                Some(e.risk.description(Language::Nl)),
            ),
            _ => (None, None),
        };

        Self {
            key: format!("{}_{}", monitor_slug, quantity.key()),
            quantity,
            name: format!("{} {}", monitor_name, quantity.name_en()),
            value,
            unit: quantity.unit(),
            device_class: quantity.device_class(),
            state_class: quantity.state_class(),
            icon: quantity.icon(),
            attributes: OutputAttributes {
                temperature,
                humidity,
                description_en,
                description_nl,
            },
        }
    }
}
