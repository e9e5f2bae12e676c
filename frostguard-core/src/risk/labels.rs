//! Bilingual risk descriptions

/// Language of a risk description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English
    En,
    /// Dutch
    Nl,
}

/// Description pair for one risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskLabels {
    /// English description
    pub en: &'static str,
    /// Dutch description
    pub nl: &'static str,
}

impl RiskLabels {
    /// Description in the requested language
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Nl => self.nl,
        }
    }
}

/// Descriptions indexed by risk level
pub const RISK_LABELS: [RiskLabels; 6] = [
    RiskLabels { en: "No Risk", nl: "Geen Risico" },
    RiskLabels { en: "Very Low", nl: "Zeer Laag" },
    RiskLabels { en: "Low", nl: "Laag" },
    RiskLabels { en: "Moderate", nl: "Gemiddeld" },
    RiskLabels { en: "High", nl: "Hoog" },
    RiskLabels { en: "Very High", nl: "Zeer Hoog" },
];
