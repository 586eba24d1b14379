use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Caller-supplied overrides for the standard VAT and income-tax rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRates {
    pub vat: Option<Decimal>,
    pub income_tax: Option<Decimal>,
}

/// Fixed deductions subtracted from the computed income tax, by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    #[serde(default)]
    pub work: Decimal,
    #[serde(default)]
    pub family: Decimal,
    #[serde(default)]
    pub renovation: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

impl Deductions {
    pub fn total(&self) -> Decimal {
        self.work + self.family + self.renovation + self.other
    }
}

/// Preferential substitute-tax bracket available under the flat-rate regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlatRateBracket {
    /// 5%, reserved to new activities.
    #[serde(rename = "5")]
    Reduced,
    /// 15%, the standard flat rate.
    #[serde(rename = "15")]
    Standard,
}

impl FlatRateBracket {
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Reduced => dec!(5),
            Self::Standard => dec!(15),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelfareOptions {
    #[serde(default)]
    pub fringe_benefit: bool,
    #[serde(default)]
    pub productivity_bonus: bool,
    #[serde(default)]
    pub rent_relief: bool,
}

/// Incentives and discounts elected by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incentives {
    pub flat_rate_bracket: Option<FlatRateBracket>,
    #[serde(default)]
    pub first_year_contribution_discount: bool,
    #[serde(default)]
    pub artisan_merchant_discount: bool,
    #[serde(default)]
    pub territorial_incentive: bool,
    /// Codes of the professional-fund benefits the caller wants applied.
    #[serde(default)]
    pub fund_benefit_codes: Vec<String>,
    #[serde(default)]
    pub welfare: WelfareOptions,
}

/// Economic figures for the reference period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicParameters {
    pub period: ReferencePeriod,
    pub revenue: Decimal,
    pub costs: Decimal,
    #[serde(default)]
    pub deductible_costs: Decimal,
    #[serde(default)]
    pub custom_rates: CustomRates,
    #[serde(default)]
    pub deductions: Deductions,
    #[serde(default)]
    pub incentives: Incentives,
}
