//! End-to-end calculation scenarios exercising the public API the way a
//! caller would: build a request, validate it, run the calculator, inspect
//! the result, round-trip it through JSON.

use fisco_core::{
    ActivityClassification, CalculationRequest, CalculationResult, EconomicParameters,
    FiscalRegime, Location, ReferencePeriod, SubjectType, TaxCalculator, TaxpayerProfile,
    validate,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn freelance_developer(regime: FiscalRegime) -> CalculationRequest {
    CalculationRequest {
        profile: TaxpayerProfile {
            subject_type: SubjectType::NaturalPerson,
            first_name: "Laura".into(),
            last_name: "Conti".into(),
            tax_code: "RSSMRA85T10A562S".into(),
            vat_number: Some("12345678903".into()),
            regime,
            location: None,
            birth_date: Some("1991-04-12".parse().unwrap()),
            professional_order: None,
            special_status: None,
            inps_management: None,
        },
        activity: ActivityClassification {
            code: "62.01.00".into(),
            description: "Produzione di software non connesso all'edizione".into(),
            start_date: "2017-09-01".parse().unwrap(),
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

fn calculate(request: &CalculationRequest) -> CalculationResult {
    assert_eq!(validate(request), Vec::<String>::new());
    TaxCalculator::new("2025-06-30".parse().unwrap())
        .calculate(request)
        .unwrap()
}

#[test]
fn flat_rate_developer_reference_figures() {
    let request = freelance_developer(FiscalRegime::FlatRate);

    let result = calculate(&request);

    assert_eq!(result.taxable_base, dec!(37000));
    assert_eq!(result.vat.balance, dec!(0));
    // Activity started 2017, past the reduced window: 15% substitute tax.
    assert_eq!(result.income_tax.amount, dec!(5550.00));
    // Separate management at the reduced flat-rate rates.
    assert_eq!(result.contributions.inps, dec!(8880.00));
    assert_eq!(result.contributions.inail, dec!(259.000));
    assert_eq!(result.income_tax.surtaxes.regional, dec!(0));
    assert_eq!(result.irap.amount, dec!(0));
}

#[test]
fn ordinary_regime_with_region_below_surtax_threshold() {
    let mut request = freelance_developer(FiscalRegime::Ordinary);
    request.economics.revenue = dec!(20000);
    request.economics.costs = dec!(6000);
    request.profile.location = Some(Location {
        region: Some("Piemonte".into()),
        province: None,
        municipality: None,
    });

    let result = calculate(&request);

    // 14000 is at or below the 15000 exempt threshold.
    assert_eq!(result.income_tax.surtaxes.regional, dec!(0));
    // No municipality and no province selected, so no municipal surtax.
    assert_eq!(result.income_tax.surtaxes.municipal, dec!(0));
    assert!(result.irap.amount > dec!(0));
}

#[test]
fn first_year_discount_halves_contributions_exactly() {
    let base = freelance_developer(FiscalRegime::FlatRate);
    let mut discounted = base.clone();
    discounted.economics.incentives.first_year_contribution_discount = true;

    let full = calculate(&base);
    let reduced = calculate(&discounted);

    assert_eq!(reduced.contributions.inps * dec!(2), full.contributions.inps);
    assert_eq!(reduced.contributions.inail, full.contributions.inail);
}

#[test]
fn stacked_discounts_keep_three_eighths_of_inps() {
    let mut request = freelance_developer(FiscalRegime::FlatRate);
    request.economics.incentives.first_year_contribution_discount = true;
    request.economics.incentives.territorial_incentive = true;

    let result = calculate(&request);

    // 0.5 × 0.75 of the undiscounted amount.
    assert_eq!(result.contributions.inps, dec!(8880.00) * dec!(0.375));
}

#[test]
fn architect_pays_the_fund_instead_of_inps() {
    let mut request = freelance_developer(FiscalRegime::Ordinary);
    request.activity.code = "71.11.00".into();
    request.activity.description = "Attività degli studi di architettura".into();

    let result = calculate(&request);
    let fund = result.contributions.fund.as_ref().unwrap();

    assert_eq!(fund.fund_name, "Inarcassa");
    assert_eq!(result.contributions.inps, dec!(0));
    assert_eq!(fund.total, fund.base + fund.additional + fund.fixed - fund.benefit_discount);
    assert_eq!(
        result.total_contributions,
        result.contributions.inps + result.contributions.inail + fund.total
    );
}

#[test]
fn young_doctor_with_benefit_gets_a_fund_discount() {
    let mut request = freelance_developer(FiscalRegime::Ordinary);
    request.activity.code = "86.21.00".into();
    request.activity.description = "Servizi degli studi medici".into();
    request.profile.birth_date = Some("1996-01-15".parse().unwrap());
    request.economics.incentives.fund_benefit_codes = vec!["MEDICI_GIOVANI".into()];

    let result = calculate(&request);
    let fund = result.contributions.fund.as_ref().unwrap();

    assert_eq!(fund.fund_name, "ENPAM");
    assert_eq!(fund.applied_benefits, vec!["MEDICI_GIOVANI".to_string()]);
    assert!(fund.benefit_discount > dec!(0));
    // ENPAM covers injury risk, so INAIL is not due on top.
    assert_eq!(result.contributions.inail, dec!(0));
}

#[test]
fn deadlines_are_ascending_and_strictly_positive() {
    let result = calculate(&freelance_developer(FiscalRegime::Ordinary));

    assert!(result.deadlines.len() >= 5);
    for pair in result.deadlines.windows(2) {
        assert!(pair[0].due_date <= pair[1].due_date);
    }
    for deadline in &result.deadlines {
        assert!(deadline.amount > dec!(0), "{}", deadline.description);
    }
}

#[test]
fn totals_are_consistent_after_a_json_round_trip() {
    let result = calculate(&freelance_developer(FiscalRegime::Ordinary));

    let json = serde_json::to_string(&result).unwrap();
    let restored: CalculationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, result);
    assert_eq!(restored.total_due, restored.total_taxes + restored.total_contributions);
}

#[test]
fn requests_survive_a_json_round_trip() {
    let request = freelance_developer(FiscalRegime::FlatRate);

    let json = serde_json::to_string(&request).unwrap();
    let restored: CalculationRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, request);
    // The regime serializes under its Italian wire name.
    assert!(json.contains("\"forfettario\""));
}

#[test]
fn invalid_request_is_caught_before_calculation() {
    let mut request = freelance_developer(FiscalRegime::FlatRate);
    request.profile.tax_code = "NOTACODE".into();
    request.economics.revenue = dec!(-1);

    let errors = validate(&request);

    assert_eq!(errors.len(), 2);
}
