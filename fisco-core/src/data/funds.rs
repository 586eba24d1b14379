//! Professional pension fund ("cassa professionale") reference table.
//!
//! One entry per regulated liberal profession, each with its ATECO-code
//! mappings, tiered contribution brackets (with per-regime overrides) and
//! the contribution benefits the fund offers. Entries are in resolution
//! order: [`crate::calculations::funds::find_fund`] returns the first match.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::FiscalRegime;

/// One income tier of a fund's contribution schedule. Tiers are contiguous
/// and non-overlapping; the last tier of a schedule is open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionBracket {
    pub income_min: Decimal,
    /// `None` marks the open-ended top tier.
    pub income_max: Option<Decimal>,
    /// Base contribution rate, percent.
    pub base_rate: Decimal,
    /// Additional ("integrativo") rate, percent.
    pub additional_rate: Option<Decimal>,
    pub min_contribution: Option<Decimal>,
    pub max_contribution: Option<Decimal>,
}

/// Machine-checkable eligibility condition of a fund benefit.
///
/// Only [`BenefitCondition::AgeBelow`] is enforced by the engine; the other
/// variants document conditions the funds state but that the calculation
/// deliberately does not verify (they require information the caller
/// self-certifies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCondition {
    AgeBelow(u32),
    FirstEnrollment,
    IncomeBelow(Decimal),
    TraineeRegistration,
    ParentalLeave,
    Specialization,
    ApplicationWithinDays(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundBenefit {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Discount on base + additional contribution, percent.
    pub discount_percent: Decimal,
    pub duration_years: Option<u32>,
    pub conditions: Vec<BenefitCondition>,
    /// Non-cumulable benefits only apply when no other discount has
    /// accrued yet.
    pub cumulable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedContribution {
    pub annual_amount: Decimal,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRules {
    /// Whether membership replaces INPS separate management entirely.
    pub replaces_inps: bool,
    /// General schedule, kept for reference and benefit listings.
    pub brackets: Vec<ContributionBracket>,
    pub fixed: Option<FixedContribution>,
    pub ordinary_brackets: Vec<ContributionBracket>,
    pub simplified_brackets: Vec<ContributionBracket>,
    pub flat_rate_brackets: Vec<ContributionBracket>,
}

impl ContributionRules {
    /// Regime-specific schedule. The agricultural regime uses the ordinary
    /// schedule; funds do not publish a dedicated one.
    pub fn brackets_for(&self, regime: FiscalRegime) -> &[ContributionBracket] {
        match regime {
            FiscalRegime::Ordinary | FiscalRegime::Agricultural => &self.ordinary_brackets,
            FiscalRegime::Simplified => &self.simplified_brackets,
            FiscalRegime::FlatRate => &self.flat_rate_brackets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtecoMapping {
    pub primary: Vec<&'static str>,
    pub secondary: Vec<&'static str>,
    pub excluded: Vec<&'static str>,
}

/// Welfare coverage details; `injury_insurance` suppresses the separate
/// INAIL computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundDetails {
    pub disability_insurance: bool,
    pub injury_insurance: bool,
    pub health_care: bool,
    pub maternity_fund: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionalFund {
    pub code: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub ateco: AtecoMapping,
    pub professions: Vec<&'static str>,
    pub orders: Vec<&'static str>,
    pub contribution: ContributionRules,
    pub benefits: Vec<FundBenefit>,
    pub details: FundDetails,
}

fn bracket(
    income_min: Decimal,
    income_max: Option<Decimal>,
    base_rate: Decimal,
) -> ContributionBracket {
    ContributionBracket {
        income_min,
        income_max,
        base_rate,
        additional_rate: None,
        min_contribution: None,
        max_contribution: None,
    }
}

static FUNDS: LazyLock<Vec<ProfessionalFund>> = LazyLock::new(|| {
    vec![
        ProfessionalFund {
            code: "INARCASSA",
            name: "Inarcassa",
            full_name: "Cassa Nazionale di Previdenza ed Assistenza per gli \
                        Ingegneri ed Architetti Liberi Professionisti",
            ateco: AtecoMapping {
                primary: vec![
                    "71.11.00", "71.12.10", "71.12.20", "74.10.11", "74.10.12", "74.10.21",
                    "74.10.22",
                ],
                secondary: vec!["71.20.10", "74.90.11", "74.90.12"],
                excluded: vec![],
            },
            professions: vec![
                "Architetto",
                "Ingegnere",
                "Pianificatore territoriale",
                "Paesaggista",
                "Conservatore",
            ],
            orders: vec!["Ordine degli Architetti", "Ordine degli Ingegneri"],
            contribution: ContributionRules {
                replaces_inps: true,
                brackets: vec![
                    ContributionBracket {
                        min_contribution: Some(dec!(1600)),
                        ..bracket(dec!(0), Some(dec!(16000)), dec!(10))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(1)),
                        max_contribution: Some(dec!(6815)),
                        ..bracket(dec!(16001), Some(dec!(47000)), dec!(14.5))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(1)),
                        max_contribution: Some(dec!(14500)),
                        ..bracket(dec!(47001), Some(dec!(100000)), dec!(14.5))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(1)),
                        max_contribution: Some(dec!(50000)),
                        ..bracket(dec!(100001), None, dec!(14.5))
                    },
                ],
                fixed: None,
                ordinary_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(1)),
                    ..bracket(dec!(0), None, dec!(14.5))
                }],
                simplified_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(1)),
                    ..bracket(dec!(0), None, dec!(14.5))
                }],
                flat_rate_brackets: vec![ContributionBracket {
                    min_contribution: Some(dec!(1600)),
                    ..bracket(dec!(0), None, dec!(14.5))
                }],
            },
            benefits: vec![
                FundBenefit {
                    code: "GIOVANI_ARCHITETTI",
                    name: "Agevolazione Giovani Professionisti",
                    description: "Riduzione 50% contributi primi 3 anni per under 35",
                    discount_percent: dec!(50),
                    duration_years: Some(3),
                    conditions: vec![
                        BenefitCondition::AgeBelow(35),
                        BenefitCondition::FirstEnrollment,
                        BenefitCondition::IncomeBelow(dec!(30000)),
                    ],
                    cumulable: false,
                },
                FundBenefit {
                    code: "MATERNITA_PATERNITA",
                    name: "Esonero Maternità/Paternità",
                    description: "Esonero totale contributi durante congedo parentale",
                    discount_percent: dec!(100),
                    duration_years: Some(1),
                    conditions: vec![
                        BenefitCondition::ParentalLeave,
                        BenefitCondition::ApplicationWithinDays(30),
                    ],
                    cumulable: true,
                },
            ],
            details: FundDetails {
                disability_insurance: true,
                injury_insurance: false,
                health_care: true,
                maternity_fund: true,
            },
        },
        ProfessionalFund {
            code: "CASSA_FORENSE",
            name: "Cassa Forense",
            full_name: "Cassa Nazionale di Previdenza e Assistenza Forense",
            ateco: AtecoMapping {
                primary: vec!["69.10.10", "69.10.90"],
                secondary: vec!["84.23.10"],
                excluded: vec![],
            },
            professions: vec!["Avvocato", "Procuratore legale"],
            orders: vec!["Ordine degli Avvocati"],
            contribution: ContributionRules {
                replaces_inps: true,
                brackets: vec![
                    ContributionBracket {
                        min_contribution: Some(dec!(1200)),
                        ..bracket(dec!(0), Some(dec!(15000)), dec!(8))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(2)),
                        ..bracket(dec!(15001), Some(dec!(40000)), dec!(12))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(2)),
                        ..bracket(dec!(40001), Some(dec!(100000)), dec!(14))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(2)),
                        max_contribution: Some(dec!(40000)),
                        ..bracket(dec!(100001), None, dec!(14))
                    },
                ],
                fixed: Some(FixedContribution {
                    annual_amount: dec!(416),
                    description: "Contributo soggettivo fisso annuale",
                }),
                ordinary_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(2)),
                    ..bracket(dec!(0), None, dec!(14))
                }],
                simplified_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(2)),
                    ..bracket(dec!(0), None, dec!(14))
                }],
                flat_rate_brackets: vec![ContributionBracket {
                    min_contribution: Some(dec!(1200)),
                    ..bracket(dec!(0), None, dec!(14))
                }],
            },
            benefits: vec![
                FundBenefit {
                    code: "PRATICANTI_AVVOCATI",
                    name: "Agevolazione Praticanti",
                    description: "Contributi ridotti durante il periodo di praticantato",
                    discount_percent: dec!(75),
                    duration_years: Some(2),
                    conditions: vec![
                        BenefitCondition::TraineeRegistration,
                        BenefitCondition::IncomeBelow(dec!(15000)),
                    ],
                    cumulable: false,
                },
                FundBenefit {
                    code: "UNDER_30",
                    name: "Agevolazione Under 30",
                    description: "Riduzione 50% contributi per avvocati under 30",
                    discount_percent: dec!(50),
                    duration_years: Some(3),
                    conditions: vec![
                        BenefitCondition::AgeBelow(30),
                        BenefitCondition::FirstEnrollment,
                    ],
                    cumulable: true,
                },
            ],
            details: FundDetails {
                disability_insurance: true,
                injury_insurance: false,
                health_care: true,
                maternity_fund: true,
            },
        },
        ProfessionalFund {
            code: "ENPAM",
            name: "ENPAM",
            full_name: "Ente Nazionale di Previdenza ed Assistenza Medici",
            ateco: AtecoMapping {
                primary: vec!["86.21.00", "86.22.00", "86.23.00", "75.00.00"],
                secondary: vec!["86.90.11", "86.90.12"],
                excluded: vec![],
            },
            professions: vec!["Medico chirurgo", "Odontoiatra", "Veterinario"],
            orders: vec!["Ordine dei Medici", "Ordine dei Veterinari"],
            contribution: ContributionRules {
                replaces_inps: true,
                brackets: vec![
                    ContributionBracket {
                        min_contribution: Some(dec!(1915)),
                        ..bracket(dec!(0), Some(dec!(43000)), dec!(10))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(2)),
                        ..bracket(dec!(43001), Some(dec!(100000)), dec!(13))
                    },
                    ContributionBracket {
                        additional_rate: Some(dec!(2)),
                        max_contribution: Some(dec!(60000)),
                        ..bracket(dec!(100001), None, dec!(15.5))
                    },
                ],
                fixed: None,
                ordinary_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(2)),
                    ..bracket(dec!(0), None, dec!(15.5))
                }],
                simplified_brackets: vec![ContributionBracket {
                    additional_rate: Some(dec!(2)),
                    ..bracket(dec!(0), None, dec!(15.5))
                }],
                flat_rate_brackets: vec![ContributionBracket {
                    min_contribution: Some(dec!(1915)),
                    ..bracket(dec!(0), None, dec!(15.5))
                }],
            },
            benefits: vec![
                FundBenefit {
                    code: "MEDICI_GIOVANI",
                    name: "Agevolazione Medici Giovani",
                    description: "Riduzione contributi primi 4 anni per under 32",
                    discount_percent: dec!(66),
                    duration_years: Some(4),
                    conditions: vec![
                        BenefitCondition::AgeBelow(32),
                        BenefitCondition::FirstEnrollment,
                    ],
                    cumulable: false,
                },
                FundBenefit {
                    code: "SPECIALIZZANDI",
                    name: "Esonero Specializzandi",
                    description: "Esonero totale durante specializzazione",
                    discount_percent: dec!(100),
                    duration_years: None,
                    conditions: vec![BenefitCondition::Specialization],
                    cumulable: false,
                },
            ],
            details: FundDetails {
                disability_insurance: true,
                injury_insurance: true,
                health_care: true,
                maternity_fund: true,
            },
        },
    ]
});

pub fn funds() -> &'static [ProfessionalFund] {
    &FUNDS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_fund_has_an_open_ended_top_tier() {
        for fund in funds() {
            let last = fund.contribution.brackets.last().unwrap();
            assert_eq!(last.income_max, None, "fund {}", fund.code);
        }
    }

    #[test]
    fn general_brackets_are_contiguous_and_increasing() {
        for fund in funds() {
            for pair in fund.contribution.brackets.windows(2) {
                let upper = pair[0].income_max.unwrap();
                assert!(pair[1].income_min > upper, "fund {}", fund.code);
                assert!(pair[1].income_min - upper <= dec!(1), "fund {}", fund.code);
            }
        }
    }

    #[test]
    fn regime_schedules_exist_for_every_regime() {
        for fund in funds() {
            for regime in [
                FiscalRegime::Ordinary,
                FiscalRegime::Simplified,
                FiscalRegime::FlatRate,
                FiscalRegime::Agricultural,
            ] {
                assert!(
                    !fund.contribution.brackets_for(regime).is_empty(),
                    "fund {} regime {}",
                    fund.code,
                    regime.as_str()
                );
            }
        }
    }

    #[test]
    fn enpam_covers_injury_insurance() {
        let enpam = funds().iter().find(|f| f.code == "ENPAM").unwrap();

        assert!(enpam.details.injury_insurance);
    }
}
