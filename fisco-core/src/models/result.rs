use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deadline::PaymentDeadline;
use super::economics::FlatRateBracket;
use super::management::InpsManagement;

/// Which income tax was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxType {
    Irpef,
    SubstituteTax,
}

impl TaxType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Irpef => "IRPEF",
            Self::SubstituteTax => "Imposta Sostitutiva",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurtaxBreakdown {
    pub regional: Decimal,
    pub municipal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBreakdown {
    pub taxable_base: Decimal,
    pub amount: Decimal,
    /// Marginal rate of the band containing the taxable base, or the
    /// substitute-tax rate under the flat-rate regime.
    pub rate: Decimal,
    pub deductions: Decimal,
    pub tax_type: TaxType,
    pub surtaxes: SurtaxBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrapBreakdown {
    pub taxable_base: Decimal,
    pub amount: Decimal,
    pub rate: Decimal,
    /// IRAP sector label ("banche", "assicurazioni", ...), or "standard"
    /// when no sector override applies.
    pub sector: String,
}

/// Professional-fund share of the contributions, present only when a fund
/// was resolved from the activity code or professional order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundContributionBreakdown {
    pub fund_name: String,
    pub base: Decimal,
    pub additional: Decimal,
    pub fixed: Decimal,
    /// Discount from fund benefits, already reflected in `total`.
    pub benefit_discount: Decimal,
    pub total: Decimal,
    pub applied_benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    pub inps: Decimal,
    pub inail: Decimal,
    pub fund: Option<FundContributionBreakdown>,
    /// INPS management used for the fallback calculation; `None` when a
    /// professional fund applies.
    pub management: Option<InpsManagement>,
    /// Percentage discount applied by the elected/automatic contribution
    /// incentives (territorial stacking excluded, reported as a flag).
    pub discount_percent: Decimal,
    pub total: Decimal,
    /// Human-readable calculation trace, one line per computed amount.
    pub detail: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedIncentives {
    pub flat_rate_bracket: Option<FlatRateBracket>,
    pub first_year_contribution_discount: bool,
    pub artisan_merchant_discount: bool,
    pub territorial_incentive: bool,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
}

/// Structured outcome of a calculation. Constructed fresh per request and
/// immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub computed_at: NaiveDate,
    pub taxable_base: Decimal,
    pub vat: VatBreakdown,
    pub income_tax: IncomeTaxBreakdown,
    pub irap: IrapBreakdown,
    pub contributions: ContributionBreakdown,
    pub incentives: AppliedIncentives,
    pub total_taxes: Decimal,
    pub total_contributions: Decimal,
    pub total_due: Decimal,
    pub deadlines: Vec<PaymentDeadline>,
}
