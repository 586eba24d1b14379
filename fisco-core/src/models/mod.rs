mod activity;
mod deadline;
mod economics;
mod management;
mod profile;
mod regime;
mod request;
mod result;

pub use activity::ActivityClassification;
pub use deadline::{DeadlineKind, PaymentDeadline};
pub use economics::{
    CustomRates, Deductions, EconomicParameters, FlatRateBracket, Incentives, ReferencePeriod,
    WelfareOptions,
};
pub use management::InpsManagement;
pub use profile::{Location, SpecialStatus, SubjectType, TaxpayerProfile};
pub use regime::FiscalRegime;
pub use request::CalculationRequest;
pub use result::{
    AppliedIncentives, CalculationResult, ContributionBreakdown, FundContributionBreakdown,
    IncomeTaxBreakdown, IrapBreakdown, SurtaxBreakdown, TaxType, VatBreakdown,
};
