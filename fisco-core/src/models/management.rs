use serde::{Deserialize, Serialize};

/// INPS pension-management category for taxpayers without a professional
/// fund.
///
/// Employees and agricultural workers are reachable only through the
/// explicit override on the taxpayer profile; activity-code classification
/// only ever yields separate management or artisans/merchants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InpsManagement {
    #[serde(rename = "gestione_separata")]
    SeparateManagement,
    #[serde(rename = "artigiani_commercianti")]
    ArtisansMerchants,
    #[serde(rename = "dipendenti")]
    Employees,
    #[serde(rename = "autonoma_agricola")]
    Agricultural,
}

impl InpsManagement {
    /// Human-readable label used in calculation traces and results.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeparateManagement => "Gestione Separata",
            Self::ArtisansMerchants => "Artigiani e Commercianti",
            Self::Employees => "Lavoratori Dipendenti",
            Self::Agricultural => "Autonoma Agricola",
        }
    }
}
