use serde::{Deserialize, Serialize};

use super::activity::ActivityClassification;
use super::economics::EconomicParameters;
use super::profile::TaxpayerProfile;

/// A complete, serializable calculation request.
///
/// The surrounding application owns persistence: a request can be stored
/// and resumed at any time by round-tripping it through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub profile: TaxpayerProfile,
    pub activity: ActivityClassification,
    pub economics: EconomicParameters,
}
