//! Professional fund resolution and contribution calculation.
//!
//! Fund resolution is a four-stage lookup over the static fund table, each
//! stage first-match-wins in table order: primary ATECO codes, secondary
//! ATECO codes, profession name, professional-order name. Contributions
//! follow the fund's regime-specific bracket schedule, with the elected
//! benefits discounting the proportional part.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::data::funds::{
    BenefitCondition, ContributionBracket, FundBenefit, ProfessionalFund, funds,
};
use crate::models::FiscalRegime;

use super::common::pct_of;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundContributionError {
    /// The fund table entry carries no bracket schedule for the regime.
    /// Static-data invariant; reaching this means the table is broken.
    #[error("fund {fund} has no contribution brackets for regime {regime}")]
    EmptyBracketSchedule { fund: String, regime: String },
}

/// Caller-side facts relevant to benefit eligibility.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalContext {
    pub age: Option<u32>,
    /// Benefit codes the taxpayer asked to apply.
    pub requested_benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundContribution {
    pub base: Decimal,
    pub additional: Decimal,
    pub fixed: Decimal,
    /// Discount taken off base + additional by the applied benefits.
    pub discount: Decimal,
    pub total: Decimal,
    pub applied_benefits: Vec<String>,
    pub detail: Vec<String>,
}

/// Resolves the professional fund for a taxpayer, if any.
pub fn find_fund(
    activity_code: &str,
    profession: Option<&str>,
    professional_order: Option<&str>,
) -> Option<&'static ProfessionalFund> {
    let by_code = |codes: fn(&ProfessionalFund) -> &[&'static str]| {
        funds().iter().find(|fund| {
            codes(fund)
                .iter()
                .any(|code| activity_code.starts_with(&code[..code.len().min(5)]))
        })
    };

    if let Some(fund) = by_code(|f| &f.ateco.primary) {
        return Some(fund);
    }
    if let Some(fund) = by_code(|f| &f.ateco.secondary) {
        return Some(fund);
    }

    if let Some(profession) = profession {
        let needle = profession.to_lowercase();
        let found = funds()
            .iter()
            .find(|fund| fund.professions.iter().any(|p| p.to_lowercase().contains(&needle)));
        if found.is_some() {
            return found;
        }
    }

    if let Some(order) = professional_order {
        let needle = order.to_lowercase();
        return funds()
            .iter()
            .find(|fund| fund.orders.iter().any(|o| o.to_lowercase().contains(&needle)));
    }

    None
}

/// Computes the annual contribution owed to a fund.
pub fn compute_contribution(
    fund: &ProfessionalFund,
    income: Decimal,
    regime: FiscalRegime,
    ctx: &ProfessionalContext,
) -> Result<FundContribution, FundContributionError> {
    let schedule = fund.contribution.brackets_for(regime);
    let bracket = applicable_bracket(schedule, income).ok_or_else(|| {
        FundContributionError::EmptyBracketSchedule {
            fund: fund.code.to_string(),
            regime: regime.as_str().to_string(),
        }
    })?;

    let mut detail = Vec::new();

    let mut base = pct_of(income, bracket.base_rate);
    if let Some(min) = bracket.min_contribution {
        base = base.max(min);
    }
    if let Some(max) = bracket.max_contribution {
        base = base.min(max);
    }
    detail.push(format!("Contributo base: €{income} × {}% = €{base}", bracket.base_rate));

    let additional = match bracket.additional_rate {
        Some(rate) => {
            let amount = pct_of(income, rate);
            detail.push(format!("Contributo integrativo: €{income} × {rate}% = €{amount}"));
            amount
        }
        None => Decimal::ZERO,
    };

    let fixed = fund
        .contribution
        .fixed
        .as_ref()
        .map(|f| f.annual_amount)
        .unwrap_or(Decimal::ZERO);
    if fixed > Decimal::ZERO {
        detail.push(format!("Contributo fisso: €{fixed}"));
    }

    let mut applied_benefits = Vec::new();
    let mut discount_percent = Decimal::ZERO;
    for benefit in &fund.benefits {
        if !ctx.requested_benefits.iter().any(|code| code == benefit.code) {
            continue;
        }
        if !is_eligible(benefit, ctx) {
            continue;
        }
        applied_benefits.push(benefit.code.to_string());
        // Non-cumulable benefits are listed but do not stack onto an
        // already accrued discount.
        if !benefit.cumulable && discount_percent > Decimal::ZERO {
            continue;
        }
        discount_percent += benefit.discount_percent;
        detail.push(format!("Agevolazione {}: -{}%", benefit.name, benefit.discount_percent));
    }

    let discount = pct_of(base + additional, discount_percent);
    let total = base + additional + fixed - discount;
    if discount > Decimal::ZERO {
        detail.push(format!("Sconto totale: -€{discount} ({discount_percent}%)"));
    }

    Ok(FundContribution { base, additional, fixed, discount, total, applied_benefits, detail })
}

/// Benefits of a fund the taxpayer currently qualifies for.
pub fn available_benefits<'f>(
    fund: &'f ProfessionalFund,
    ctx: &ProfessionalContext,
) -> Vec<&'f FundBenefit> {
    fund.benefits.iter().filter(|benefit| is_eligible(benefit, ctx)).collect()
}

/// Only age conditions are machine-checked; the remaining conditions are
/// self-certified by the caller.
fn is_eligible(benefit: &FundBenefit, ctx: &ProfessionalContext) -> bool {
    benefit.conditions.iter().all(|condition| match condition {
        BenefitCondition::AgeBelow(limit) => ctx.age.is_some_and(|age| age < *limit),
        _ => true,
    })
}

fn applicable_bracket(
    schedule: &[ContributionBracket],
    income: Decimal,
) -> Option<&ContributionBracket> {
    schedule
        .iter()
        .find(|b| {
            income >= b.income_min && b.income_max.is_none_or(|max| income <= max)
        })
        .or_else(|| schedule.last())
}
