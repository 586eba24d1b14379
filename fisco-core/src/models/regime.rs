use serde::{Deserialize, Serialize};

/// Italian fiscal regime of the taxpayer.
///
/// The flat-rate regime ("forfettario") and the agricultural regime receive
/// special-cased tax treatment: flat-rate is VAT-exempt and pays a substitute
/// tax instead of progressive IRPEF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiscalRegime {
    #[serde(rename = "ordinario")]
    Ordinary,
    #[serde(rename = "semplificato")]
    Simplified,
    #[serde(rename = "forfettario")]
    FlatRate,
    #[serde(rename = "agricoltura")]
    Agricultural,
}

impl FiscalRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ordinario",
            Self::Simplified => "semplificato",
            Self::FlatRate => "forfettario",
            Self::Agricultural => "agricoltura",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ordinario" => Some(Self::Ordinary),
            "semplificato" => Some(Self::Simplified),
            "forfettario" => Some(Self::FlatRate),
            "agricoltura" => Some(Self::Agricultural),
            _ => None,
        }
    }

    pub fn is_flat_rate(&self) -> bool {
        matches!(self, Self::FlatRate)
    }
}
