//! Full tax and contribution calculation for one reference year.
//!
//! [`TaxCalculator`] ties the per-concern modules together: VAT, IRPEF or
//! substitute tax, territorial surtaxes and IRAP, INPS/INAIL or
//! professional-fund contributions, contribution discounts and the payment
//! deadline schedule. The calculator never reads the system clock; every
//! date-dependent rule keys off the `as_of` reference date it was built
//! with, so the same request always yields the same result.
//!
//! # Examples
//!
//! ```
//! use fisco_core::{CalculationRequest, TaxCalculator};
//!
//! # fn demo(request: &CalculationRequest) -> Result<(), Box<dyn std::error::Error>> {
//! let calculator = TaxCalculator::new("2025-06-30".parse()?);
//! let result = calculator.calculate(request)?;
//! assert_eq!(result.total_due, result.total_taxes + result.total_contributions);
//! # Ok(())
//! # }
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::data::territorial::{Region, region_by_name};
use crate::models::{
    AppliedIncentives, CalculationRequest, CalculationResult, ContributionBreakdown, DeadlineKind,
    FiscalRegime, FundContributionBreakdown, IncomeTaxBreakdown, IrapBreakdown, PaymentDeadline,
    SurtaxBreakdown, TaxType, VatBreakdown,
};

use super::common::{floor_zero, pct_of, round_half_up};
use super::funds::{FundContributionError, ProfessionalContext, compute_contribution, find_fund};
use super::inps;
use super::management;
use super::territorial::{compute_surtaxes, irap_rate, sector_for_activity_code};

/// Default VAT rate, percent.
const DEFAULT_VAT_RATE: Decimal = dec!(22);

/// National average fallback rates used when no region is selected.
const FALLBACK_REGIONAL_SURTAX: Decimal = dec!(1.9);
const FALLBACK_MUNICIPAL_SURTAX: Decimal = dec!(0.8);
const FALLBACK_IRAP_RATE: Decimal = dec!(3.9);

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error(transparent)]
    FundContribution(#[from] FundContributionError),
}

/// Deterministic tax calculator for a fixed reference date.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    as_of: NaiveDate,
}

impl TaxCalculator {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Runs the full calculation for a request.
    pub fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculationError> {
        let regime = request.profile.regime;
        let economics = &request.economics;

        let taxable_base = floor_zero(economics.revenue - economics.costs);
        let fiscal_base = floor_zero(taxable_base - economics.deductible_costs);
        debug!(%taxable_base, %fiscal_base, regime = regime.as_str(), "computed bases");

        let vat = self.vat(economics.revenue, economics.costs, regime, economics.custom_rates.vat);
        let mut income_tax = self.income_tax(request, fiscal_base);
        let (surtaxes, irap) = self.territorial(request, fiscal_base);
        income_tax.surtaxes = surtaxes;

        let (contributions, discount_amount) = self.contributions(request, fiscal_base)?;
        let incentives = AppliedIncentives {
            flat_rate_bracket: economics.incentives.flat_rate_bracket,
            first_year_contribution_discount: economics.incentives.first_year_contribution_discount,
            artisan_merchant_discount: economics.incentives.artisan_merchant_discount,
            territorial_incentive: economics.incentives.territorial_incentive,
            discount_percent: contributions.discount_percent,
            discount_amount,
        };

        let total_taxes =
            vat.balance + income_tax.amount + surtaxes.regional + surtaxes.municipal + irap.amount;
        let total_contributions = contributions.total;
        let total_due = total_taxes + total_contributions;

        let deadlines = self.deadlines(
            income_tax.tax_type,
            vat.balance,
            income_tax.amount,
            irap.amount,
            total_contributions,
        );

        Ok(CalculationResult {
            computed_at: self.as_of,
            taxable_base,
            vat,
            income_tax,
            irap,
            contributions,
            incentives,
            total_taxes,
            total_contributions,
            total_due,
            deadlines,
        })
    }

    fn vat(
        &self,
        revenue: Decimal,
        costs: Decimal,
        regime: FiscalRegime,
        custom_rate: Option<Decimal>,
    ) -> VatBreakdown {
        if regime.is_flat_rate() {
            // VAT-exempt regime: everything reported as zero.
            return VatBreakdown {
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
                balance: Decimal::ZERO,
                rate: Decimal::ZERO,
            };
        }

        let rate = custom_rate.unwrap_or(DEFAULT_VAT_RATE);
        let debit = round_half_up(pct_of(revenue, rate));
        let credit = round_half_up(pct_of(costs, rate));
        VatBreakdown { debit, credit, balance: debit - credit, rate }
    }

    fn income_tax(&self, request: &CalculationRequest, fiscal_base: Decimal) -> IncomeTaxBreakdown {
        let economics = &request.economics;

        let (rate, tax_type) = match request.profile.regime {
            FiscalRegime::FlatRate => {
                let rate = match economics.incentives.flat_rate_bracket {
                    Some(bracket) => bracket.rate(),
                    // New activities get the reduced bracket automatically.
                    None if request.activity.years_active(self.as_of) <= 5 => dec!(5),
                    None => dec!(15),
                };
                (rate, TaxType::SubstituteTax)
            }
            _ => {
                let rate = economics
                    .custom_rates
                    .income_tax
                    .unwrap_or_else(|| irpef_band_rate(fiscal_base));
                (rate, TaxType::Irpef)
            }
        };

        // The whole base is taxed at the band rate; no progressive slicing.
        let gross = pct_of(fiscal_base, rate);
        let deductions = economics.deductions.total();
        let amount = round_half_up(floor_zero(gross - deductions));
        debug!(%rate, %gross, %deductions, tax_type = tax_type.label(), "income tax");

        IncomeTaxBreakdown {
            taxable_base: fiscal_base,
            amount,
            rate,
            deductions,
            tax_type,
            surtaxes: SurtaxBreakdown { regional: Decimal::ZERO, municipal: Decimal::ZERO },
        }
    }

    /// Regional/municipal surtaxes and IRAP. All zero under the flat-rate
    /// regime; national average rates when no region is selected.
    fn territorial(
        &self,
        request: &CalculationRequest,
        fiscal_base: Decimal,
    ) -> (SurtaxBreakdown, IrapBreakdown) {
        if request.profile.regime.is_flat_rate() {
            return (
                SurtaxBreakdown { regional: Decimal::ZERO, municipal: Decimal::ZERO },
                IrapBreakdown {
                    taxable_base: fiscal_base,
                    amount: Decimal::ZERO,
                    rate: Decimal::ZERO,
                    sector: "standard".to_string(),
                },
            );
        }

        let sector = sector_for_activity_code(&request.activity.code);
        let region = request
            .profile
            .location
            .as_ref()
            .and_then(|l| l.region.as_deref())
            .and_then(region_by_name);

        match region {
            Some(region) => {
                let municipal_rate = self.municipal_rate(request, region);
                let surtaxes = compute_surtaxes(fiscal_base, region, municipal_rate);
                let rate = irap_rate(region, sector);
                (
                    SurtaxBreakdown {
                        regional: round_half_up(surtaxes.regional),
                        municipal: round_half_up(surtaxes.municipal),
                    },
                    IrapBreakdown {
                        taxable_base: fiscal_base,
                        amount: round_half_up(pct_of(fiscal_base, rate)),
                        rate,
                        sector: sector.map_or_else(|| "standard".to_string(), |s| s.label().to_string()),
                    },
                )
            }
            None => {
                debug!("no region selected, using national average rates");
                (
                    SurtaxBreakdown {
                        regional: round_half_up(pct_of(fiscal_base, FALLBACK_REGIONAL_SURTAX)),
                        municipal: round_half_up(pct_of(fiscal_base, FALLBACK_MUNICIPAL_SURTAX)),
                    },
                    IrapBreakdown {
                        taxable_base: fiscal_base,
                        amount: round_half_up(pct_of(fiscal_base, FALLBACK_IRAP_RATE)),
                        rate: FALLBACK_IRAP_RATE,
                        sector: sector.map_or_else(|| "standard".to_string(), |s| s.label().to_string()),
                    },
                )
            }
        }
    }

    /// Municipal surtax rate: the selected municipality's own rate, else
    /// the selected province's average, else none.
    fn municipal_rate(&self, request: &CalculationRequest, region: &Region) -> Option<Decimal> {
        let location = request.profile.location.as_ref()?;

        if let Some(municipality) = location
            .municipality
            .as_deref()
            .and_then(|name| region.municipality_by_name(name))
        {
            return Some(municipality.surtax_rate);
        }

        location
            .province
            .as_deref()
            .and_then(|name| region.province_by_name(name))
            .map(|province| province.average_municipal_surtax)
    }

    /// Returns the breakdown plus the amount taken off by the elected or
    /// automatic discount (step one only, before the territorial stack).
    fn contributions(
        &self,
        request: &CalculationRequest,
        fiscal_base: Decimal,
    ) -> Result<(ContributionBreakdown, Decimal), CalculationError> {
        let regime = request.profile.regime;
        let flat_rate = regime.is_flat_rate();
        let incentives = &request.economics.incentives;

        let fund = find_fund(
            &request.activity.code,
            None,
            request.profile.professional_order.as_deref(),
        );

        let mut inps_amount;
        let inail;
        let detail;
        let mut management_used = None;
        let mut fund_parts = None;

        match fund {
            Some(fund) => {
                debug!(fund = fund.code, "professional fund resolved");
                let ctx = ProfessionalContext {
                    age: request.profile.age(self.as_of),
                    requested_benefits: incentives.fund_benefit_codes.clone(),
                };
                let contribution = compute_contribution(fund, fiscal_base, regime, &ctx)?;
                detail = contribution.detail.clone();

                inps_amount = if fund.contribution.replaces_inps {
                    Decimal::ZERO
                } else {
                    pct_of(fiscal_base, if flat_rate { dec!(24) } else { dec!(25) })
                };
                inail = if fund.details.injury_insurance {
                    Decimal::ZERO
                } else {
                    pct_of(fiscal_base, if flat_rate { dec!(1.5) } else { dec!(1.75) })
                };

                fund_parts = Some((fund.name.to_string(), contribution));
            }
            None => {
                let management = management::classify(
                    &request.activity.code,
                    request.profile.inps_management,
                );
                debug!(management = management.label(), "no professional fund, INPS management");
                let computed = inps::compute(fiscal_base, management, regime);
                inps_amount = computed.inps;
                inail = computed.inail;
                detail = computed.detail;
                management_used = Some(management);
            }
        }

        // Contribution discounts apply to INPS and the fund base component;
        // the integrative and fixed parts and INAIL are never reduced.
        let mut fund_base = fund_parts
            .as_ref()
            .map(|(_, c)| c.base)
            .unwrap_or(Decimal::ZERO);
        let mut discount_percent = Decimal::ZERO;

        if incentives.first_year_contribution_discount {
            discount_percent = dec!(50);
        } else if incentives.artisan_merchant_discount && flat_rate {
            discount_percent = dec!(35);
        } else if request.activity.years_active(self.as_of) <= 1 && flat_rate {
            // Automatic first-year relief when nothing was elected.
            discount_percent = dec!(50);
        }

        let discount_amount = round_half_up(pct_of(inps_amount + fund_base, discount_percent));
        if discount_percent > Decimal::ZERO {
            debug!(%discount_percent, %discount_amount, "contribution discount");
            let keep = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
            inps_amount *= keep;
            fund_base *= keep;
        }

        if incentives.territorial_incentive {
            // Stacked multiplicatively on top of any other discount.
            inps_amount *= dec!(0.75);
            fund_base *= dec!(0.75);
        }

        let inps_amount = round_half_up(inps_amount);
        let inail = round_half_up(inail);

        let fund_breakdown = fund_parts.map(|(fund_name, c)| {
            let base = round_half_up(fund_base);
            let additional = round_half_up(c.additional);
            let fixed = round_half_up(c.fixed);
            let benefit_discount = round_half_up(c.discount);
            FundContributionBreakdown {
                fund_name,
                base,
                additional,
                fixed,
                benefit_discount,
                total: floor_zero(base + additional + fixed - benefit_discount),
                applied_benefits: c.applied_benefits,
            }
        });

        let fund_total = fund_breakdown.as_ref().map(|f| f.total).unwrap_or(Decimal::ZERO);
        let total = inps_amount + inail + fund_total;

        Ok((
            ContributionBreakdown {
                inps: inps_amount,
                inail,
                fund: fund_breakdown,
                management: management_used,
                discount_percent,
                total,
                detail,
            },
            discount_amount,
        ))
    }

    fn deadlines(
        &self,
        tax_type: TaxType,
        vat_balance: Decimal,
        income_tax: Decimal,
        irap: Decimal,
        contributions: Decimal,
    ) -> Vec<PaymentDeadline> {
        let year = self.as_of.year();
        let mut deadlines = Vec::new();

        if vat_balance > Decimal::ZERO {
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::Vat,
                description: "Liquidazione IVA Trimestrale".to_string(),
                due_date: fixed_date(year, 4, 16),
                amount: vat_balance,
                paid: false,
            });
        }

        if income_tax > Decimal::ZERO {
            let label = tax_type.label();
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::IncomeTax,
                description: format!("Acconto {label} (40%)"),
                due_date: fixed_date(year, 6, 17),
                amount: round_half_up(pct_of(income_tax, dec!(40))),
                paid: false,
            });
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::IncomeTax,
                description: format!("Saldo {label}"),
                due_date: fixed_date(year + 1, 6, 17),
                amount: round_half_up(pct_of(income_tax, dec!(60))),
                paid: false,
            });
        }

        if irap > Decimal::ZERO {
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::Irap,
                description: "Acconto IRAP (40%)".to_string(),
                due_date: fixed_date(year, 6, 17),
                amount: round_half_up(pct_of(irap, dec!(40))),
                paid: false,
            });
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::Irap,
                description: "Saldo IRAP".to_string(),
                due_date: fixed_date(year + 1, 6, 17),
                amount: round_half_up(pct_of(irap, dec!(60))),
                paid: false,
            });
        }

        if contributions > Decimal::ZERO {
            deadlines.push(PaymentDeadline {
                kind: DeadlineKind::Contributions,
                description: "Contributi INPS".to_string(),
                due_date: fixed_date(year, 8, 20),
                amount: contributions,
                paid: false,
            });
        }

        deadlines.sort_by_key(|d| d.due_date);
        deadlines
    }
}

/// Progressive IRPEF band rate for a fiscal base. The rate is marginal but
/// applied to the whole base.
fn irpef_band_rate(fiscal_base: Decimal) -> Decimal {
    if fiscal_base <= dec!(15000) {
        dec!(23)
    } else if fiscal_base <= dec!(28000) {
        dec!(27)
    } else if fiscal_base <= dec!(55000) {
        dec!(38)
    } else if fiscal_base <= dec!(75000) {
        dec!(41)
    } else {
        dec!(43)
    }
}

/// Statutory deadline dates are fixed month/day pairs, valid in any year.
fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed calendar date")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::{
        ActivityClassification, EconomicParameters, Location, ReferencePeriod, SubjectType,
        TaxpayerProfile,
    };

    use super::*;

    fn request(regime: FiscalRegime) -> CalculationRequest {
        CalculationRequest {
            profile: TaxpayerProfile {
                subject_type: SubjectType::NaturalPerson,
                first_name: "Mario".into(),
                last_name: "Rossi".into(),
                tax_code: "RSSMRA85T10A562S".into(),
                vat_number: Some("12345678903".into()),
                regime,
                location: None,
                birth_date: Some("1985-12-10".parse().unwrap()),
                professional_order: None,
                special_status: None,
                inps_management: None,
            },
            activity: ActivityClassification {
                code: "62.01.00".into(),
                description: "Produzione di software".into(),
                start_date: "2018-03-01".parse().unwrap(),
            },
            economics: EconomicParameters {
                period: ReferencePeriod {
                    start: "2025-01-01".parse().unwrap(),
                    end: "2025-12-31".parse().unwrap(),
                },
                revenue: dec!(45000),
                costs: dec!(8000),
                deductible_costs: dec!(0),
                custom_rates: Default::default(),
                deductions: Default::default(),
                incentives: Default::default(),
            },
        }
    }

    fn calculator() -> TaxCalculator {
        TaxCalculator::new("2025-06-30".parse().unwrap())
    }

    // ===== VAT =====

    #[test]
    fn flat_rate_is_vat_exempt() {
        let result = calculator().calculate(&request(FiscalRegime::FlatRate)).unwrap();

        assert_eq!(result.vat.rate, dec!(0));
        assert_eq!(result.vat.balance, dec!(0));
    }

    #[test]
    fn ordinary_vat_balance_is_debit_minus_credit() {
        let result = calculator().calculate(&request(FiscalRegime::Ordinary)).unwrap();

        assert_eq!(result.vat.debit, dec!(9900.00));
        assert_eq!(result.vat.credit, dec!(1760.00));
        assert_eq!(result.vat.balance, dec!(8140.00));
    }

    #[test]
    fn custom_vat_rate_replaces_the_default() {
        let mut request = request(FiscalRegime::Ordinary);
        request.economics.custom_rates.vat = Some(dec!(10));

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.vat.rate, dec!(10));
        assert_eq!(result.vat.debit, dec!(4500.00));
    }

    // ===== income tax =====

    #[test]
    fn flat_rate_standard_bracket_on_established_activity() {
        // Started 2018, so well past the five-year window.
        let result = calculator().calculate(&request(FiscalRegime::FlatRate)).unwrap();

        assert_eq!(result.taxable_base, dec!(37000));
        assert_eq!(result.income_tax.rate, dec!(15));
        assert_eq!(result.income_tax.amount, dec!(5550.00));
        assert_eq!(result.income_tax.tax_type, TaxType::SubstituteTax);
    }

    #[test]
    fn young_activity_gets_the_reduced_bracket_automatically() {
        let mut request = request(FiscalRegime::FlatRate);
        request.activity.start_date = "2023-05-01".parse().unwrap();

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.income_tax.rate, dec!(5));
    }

    #[test]
    fn elected_bracket_overrides_the_automatic_choice() {
        let mut request = request(FiscalRegime::FlatRate);
        request.activity.start_date = "2023-05-01".parse().unwrap();
        request.economics.incentives.flat_rate_bracket =
            Some(crate::models::FlatRateBracket::Standard);

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.income_tax.rate, dec!(15));
    }

    #[test]
    fn irpef_band_rate_applies_to_the_whole_base() {
        // 37000 falls in the 38% band; the whole base is taxed at 38%.
        let result = calculator().calculate(&request(FiscalRegime::Ordinary)).unwrap();

        assert_eq!(result.income_tax.rate, dec!(38));
        assert_eq!(result.income_tax.amount, dec!(14060.00));
        assert_eq!(result.income_tax.tax_type, TaxType::Irpef);
    }

    #[test]
    fn deductions_reduce_income_tax_floored_at_zero() {
        let mut request = request(FiscalRegime::Ordinary);
        request.economics.deductions.work = dec!(20000);

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.income_tax.amount, dec!(0));
    }

    #[test]
    fn irpef_bands_are_monotonic() {
        let bases = [dec!(10000), dec!(20000), dec!(40000), dec!(60000), dec!(90000)];
        let rates: Vec<Decimal> = bases.iter().map(|b| irpef_band_rate(*b)).collect();

        assert_eq!(rates, vec![dec!(23), dec!(27), dec!(38), dec!(41), dec!(43)]);
    }

    // ===== territorial =====

    #[test]
    fn flat_rate_skips_surtaxes_and_irap() {
        let mut request = request(FiscalRegime::FlatRate);
        request.profile.location = Some(Location {
            region: Some("Lazio".into()),
            province: None,
            municipality: None,
        });

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.income_tax.surtaxes.regional, dec!(0));
        assert_eq!(result.income_tax.surtaxes.municipal, dec!(0));
        assert_eq!(result.irap.amount, dec!(0));
    }

    #[test]
    fn missing_region_uses_national_average_rates() {
        let result = calculator().calculate(&request(FiscalRegime::Ordinary)).unwrap();

        assert_eq!(result.income_tax.surtaxes.regional, dec!(703.000));
        assert_eq!(result.income_tax.surtaxes.municipal, dec!(296.000));
        assert_eq!(result.irap.rate, dec!(3.9));
        assert_eq!(result.irap.amount, dec!(1443.000));
    }

    #[test]
    fn selected_municipality_uses_its_own_surtax_rate() {
        let mut request = request(FiscalRegime::Ordinary);
        request.profile.location = Some(Location {
            region: Some("Lombardia".into()),
            province: Some("Milano".into()),
            municipality: Some("Milano".into()),
        });

        let result = calculator().calculate(&request).unwrap();

        // Milano's own 0.9% rather than the provincial average.
        assert_eq!(result.income_tax.surtaxes.municipal, dec!(333.00));
    }

    #[test]
    fn province_average_backs_a_missing_municipality() {
        let mut request = request(FiscalRegime::Ordinary);
        request.profile.location = Some(Location {
            region: Some("Lombardia".into()),
            province: Some("Milano".into()),
            municipality: None,
        });

        let result = calculator().calculate(&request).unwrap();

        assert!(result.income_tax.surtaxes.municipal > dec!(0));
    }

    // ===== contributions =====

    #[test]
    fn separate_management_contributions_for_flat_rate() {
        let result = calculator().calculate(&request(FiscalRegime::FlatRate)).unwrap();
        let contributions = &result.contributions;

        assert_eq!(contributions.management, Some(crate::models::InpsManagement::SeparateManagement));
        assert_eq!(contributions.inps, dec!(8880.00));
        assert_eq!(contributions.inail, dec!(259.000));
        assert_eq!(contributions.fund, None);
    }

    #[test]
    fn engineer_resolves_to_fund_and_pays_no_inps() {
        let mut request = request(FiscalRegime::Ordinary);
        request.activity.code = "71.11.00".into();

        let result = calculator().calculate(&request).unwrap();
        let fund = result.contributions.fund.as_ref().unwrap();

        assert_eq!(fund.fund_name, "Inarcassa");
        assert_eq!(result.contributions.inps, dec!(0));
        // 37000 × 14.5% base + 1% integrative.
        assert_eq!(fund.base, dec!(5365.000));
        assert_eq!(fund.additional, dec!(370.00));
        // Inarcassa does not carry injury insurance, INAIL stays due.
        assert_eq!(result.contributions.inail, dec!(647.5000));
    }

    #[test]
    fn fund_with_injury_insurance_suppresses_inail() {
        let mut request = request(FiscalRegime::Ordinary);
        request.activity.code = "86.21.00".into();

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.contributions.fund.as_ref().unwrap().fund_name, "ENPAM");
        assert_eq!(result.contributions.inail, dec!(0));
    }

    #[test]
    fn explicit_first_year_discount_halves_inps() {
        let mut request = request(FiscalRegime::FlatRate);
        request.economics.incentives.first_year_contribution_discount = true;

        let full = calculator().calculate(&self::request(FiscalRegime::FlatRate)).unwrap();
        let discounted = calculator().calculate(&request).unwrap();

        assert_eq!(discounted.contributions.inps, full.contributions.inps * dec!(0.5));
        assert_eq!(discounted.contributions.discount_percent, dec!(50));
        assert_eq!(discounted.incentives.discount_amount, full.contributions.inps * dec!(0.5));
        // INAIL is untouched.
        assert_eq!(discounted.contributions.inail, full.contributions.inail);
    }

    #[test]
    fn artisan_discount_requires_flat_rate() {
        let mut flat = request(FiscalRegime::FlatRate);
        flat.economics.incentives.artisan_merchant_discount = true;
        let mut ordinary = request(FiscalRegime::Ordinary);
        ordinary.economics.incentives.artisan_merchant_discount = true;

        let flat_result = calculator().calculate(&flat).unwrap();
        let ordinary_result = calculator().calculate(&ordinary).unwrap();

        assert_eq!(flat_result.contributions.discount_percent, dec!(35));
        assert_eq!(ordinary_result.contributions.discount_percent, dec!(0));
    }

    #[test]
    fn automatic_first_year_relief_for_new_flat_rate_activity() {
        let mut request = request(FiscalRegime::FlatRate);
        request.activity.start_date = "2025-02-01".parse().unwrap();

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.contributions.discount_percent, dec!(50));
        assert_eq!(result.contributions.inps, dec!(4440.000));
    }

    #[test]
    fn territorial_incentive_stacks_multiplicatively() {
        let mut request = request(FiscalRegime::FlatRate);
        request.economics.incentives.first_year_contribution_discount = true;
        request.economics.incentives.territorial_incentive = true;

        let result = calculator().calculate(&request).unwrap();

        // 8880 × 0.5 × 0.75
        assert_eq!(result.contributions.inps, dec!(3330.0000));
        // Only the first-year step is reported as the discount percentage.
        assert_eq!(result.contributions.discount_percent, dec!(50));
    }

    // ===== totals and deadlines =====

    #[test]
    fn totals_add_up() {
        let result = calculator().calculate(&request(FiscalRegime::Ordinary)).unwrap();

        assert_eq!(
            result.total_taxes,
            result.vat.balance
                + result.income_tax.amount
                + result.income_tax.surtaxes.regional
                + result.income_tax.surtaxes.municipal
                + result.irap.amount
        );
        assert_eq!(result.total_due, result.total_taxes + result.total_contributions);
    }

    #[test]
    fn surtaxes_appear_in_breakdown_and_totals_alike() {
        let mut request = request(FiscalRegime::Ordinary);
        request.profile.location = Some(Location {
            region: Some("Lazio".into()),
            province: None,
            municipality: None,
        });

        let result = calculator().calculate(&request).unwrap();

        assert!(result.income_tax.surtaxes.regional > dec!(0));
        assert_eq!(
            result.total_taxes,
            result.vat.balance
                + result.income_tax.amount
                + result.income_tax.surtaxes.regional
                + result.income_tax.surtaxes.municipal
                + result.irap.amount
        );
    }

    #[test]
    fn deadlines_are_sorted_and_positive() {
        let result = calculator().calculate(&request(FiscalRegime::Ordinary)).unwrap();

        assert!(!result.deadlines.is_empty());
        for pair in result.deadlines.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
        for deadline in &result.deadlines {
            assert!(deadline.amount > dec!(0));
        }
    }

    #[test]
    fn flat_rate_has_no_vat_or_irap_deadlines() {
        let result = calculator().calculate(&request(FiscalRegime::FlatRate)).unwrap();

        assert!(!result.deadlines.iter().any(|d| d.kind == DeadlineKind::Vat));
        assert!(!result.deadlines.iter().any(|d| d.kind == DeadlineKind::Irap));
        assert!(
            result
                .deadlines
                .iter()
                .any(|d| d.description == "Acconto Imposta Sostitutiva (40%)")
        );
    }

    #[test]
    fn income_tax_deadline_amounts_split_forty_sixty() {
        let result = calculator().calculate(&request(FiscalRegime::FlatRate)).unwrap();

        let advance = result
            .deadlines
            .iter()
            .find(|d| d.description.starts_with("Acconto Imposta"))
            .unwrap();
        let balance = result
            .deadlines
            .iter()
            .find(|d| d.description.starts_with("Saldo Imposta"))
            .unwrap();

        assert_eq!(advance.amount + balance.amount, result.income_tax.amount);
        assert_eq!(advance.due_date, "2025-06-17".parse().unwrap());
        assert_eq!(balance.due_date, "2026-06-17".parse().unwrap());
    }

    #[test]
    fn negative_operating_result_floors_the_bases() {
        let mut request = request(FiscalRegime::Ordinary);
        request.economics.revenue = dec!(5000);
        request.economics.costs = dec!(9000);

        let result = calculator().calculate(&request).unwrap();

        assert_eq!(result.taxable_base, dec!(0));
        assert_eq!(result.income_tax.amount, dec!(0));
        assert_eq!(result.contributions.inps, dec!(0));
    }
}
