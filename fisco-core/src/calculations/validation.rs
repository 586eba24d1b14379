//! Request validation.
//!
//! [`validate`] collects every problem it finds instead of failing fast, so
//! a caller can report the full list to the user in one pass. An empty
//! vector means the request is safe to hand to
//! [`crate::calculations::calculator::TaxCalculator`].

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::CalculationRequest;

static TAX_CODE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{6}[0-9]{2}[A-Z][0-9]{2}[A-Z][0-9]{3}[A-Z]$").expect("valid regex")
});

static VAT_NUMBER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("valid regex"));

/// Validates a calculation request, returning one message per problem.
pub fn validate(request: &CalculationRequest) -> Vec<String> {
    let mut errors = Vec::new();

    let profile = &request.profile;
    if profile.first_name.trim().is_empty() {
        errors.push("first name is required".to_string());
    }
    if profile.last_name.trim().is_empty() {
        errors.push("last name is required".to_string());
    }
    if profile.tax_code.trim().is_empty() {
        errors.push("tax code is required".to_string());
    } else if !is_valid_tax_code(&profile.tax_code) {
        errors.push(format!("tax code {:?} is not a valid codice fiscale", profile.tax_code));
    }
    if let Some(vat) = &profile.vat_number
        && !is_valid_vat_number(vat)
    {
        errors.push(format!("VAT number {vat:?} is not a valid partita IVA"));
    }

    let activity = &request.activity;
    if activity.code.trim().is_empty() {
        errors.push("activity code is required".to_string());
    }
    if activity.description.trim().is_empty() {
        errors.push("activity description is required".to_string());
    }

    let economics = &request.economics;
    if economics.revenue < Decimal::ZERO {
        errors.push("revenue cannot be negative".to_string());
    }
    if economics.costs < Decimal::ZERO {
        errors.push("costs cannot be negative".to_string());
    }
    if economics.deductible_costs < Decimal::ZERO {
        errors.push("deductible costs cannot be negative".to_string());
    }
    if economics.period.end < economics.period.start {
        errors.push("reference period ends before it starts".to_string());
    }

    errors
}

/// Codice fiscale check: 16-character shape plus the odd/even checksum
/// letter defined by D.M. 23/12/1976.
pub fn is_valid_tax_code(code: &str) -> bool {
    let code = code.trim().to_ascii_uppercase();
    if !TAX_CODE_SHAPE.is_match(&code) {
        return false;
    }

    let sum: u32 = code
        .bytes()
        .take(15)
        .enumerate()
        .map(|(i, b)| {
            // Positions are 1-based in the ministerial tables.
            if i % 2 == 0 { odd_value(b) } else { even_value(b) }
        })
        .sum();

    code.as_bytes()[15] == b'A' + (sum % 26) as u8
}

/// Partita IVA check: 11 digits with a Luhn check digit.
pub fn is_valid_vat_number(number: &str) -> bool {
    let number = number.trim();
    if !VAT_NUMBER_SHAPE.is_match(number) {
        return false;
    }

    let digits: Vec<u32> = number.bytes().map(|b| u32::from(b - b'0')).collect();
    let mut total = 0;
    for (i, d) in digits.iter().take(10).enumerate() {
        if i % 2 == 0 {
            total += d;
        } else {
            let doubled = d * 2;
            total += if doubled > 9 { doubled - 9 } else { doubled };
        }
    }

    digits[10] == (10 - total % 10) % 10
}

fn even_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        _ => u32::from(b - b'A'),
    }
}

fn odd_value(b: u8) -> u32 {
    const DIGITS: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];
    const LETTERS: [u32; 26] = [
        1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24,
        23,
    ];
    match b {
        b'0'..=b'9' => DIGITS[usize::from(b - b'0')],
        _ => LETTERS[usize::from(b - b'A')],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{
        ActivityClassification, CalculationRequest, EconomicParameters, FiscalRegime,
        ReferencePeriod, SubjectType, TaxpayerProfile,
    };

    use super::*;

    fn valid_request() -> CalculationRequest {
        CalculationRequest {
            profile: TaxpayerProfile {
                subject_type: SubjectType::NaturalPerson,
                first_name: "Mario".into(),
                last_name: "Rossi".into(),
                tax_code: "RSSMRA85T10A562S".into(),
                vat_number: Some("12345678903".into()),
                regime: FiscalRegime::FlatRate,
                location: None,
                birth_date: Some("1985-12-10".parse().unwrap()),
                professional_order: None,
                special_status: None,
                inps_management: None,
            },
            activity: ActivityClassification {
                code: "62.01.00".into(),
                description: "Produzione di software".into(),
                start_date: "2023-03-01".parse().unwrap(),
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

    #[test]
    fn valid_request_produces_no_errors() {
        assert_eq!(validate(&valid_request()), Vec::<String>::new());
    }

    #[test]
    fn collects_every_problem() {
        let mut request = valid_request();
        request.profile.first_name = " ".into();
        request.economics.revenue = dec!(-1);

        let errors = validate(&request);

        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("first name"));
        assert!(errors[1].contains("revenue"));
    }

    #[test]
    fn tax_code_checksum_is_enforced() {
        assert!(is_valid_tax_code("RSSMRA85T10A562S"));
        assert!(is_valid_tax_code("rssmra85t10a562s"));
        assert!(!is_valid_tax_code("RSSMRA85T10A562T"));
        assert!(!is_valid_tax_code("RSSMRA85T10A562"));
    }

    #[test]
    fn vat_number_check_digit_is_enforced() {
        assert!(is_valid_vat_number("12345678903"));
        assert!(!is_valid_vat_number("12345678904"));
        assert!(!is_valid_vat_number("1234567890"));
        assert!(!is_valid_vat_number("1234567890a"));
    }

    #[test]
    fn inverted_period_is_rejected() {
        let mut request = valid_request();
        request.economics.period.end = "2024-12-31".parse().unwrap();

        let errors = validate(&request);

        assert_eq!(errors, vec!["reference period ends before it starts".to_string()]);
    }
}
