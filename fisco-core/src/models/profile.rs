use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::management::InpsManagement;
use super::regime::FiscalRegime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    NaturalPerson,
    LegalPerson,
}

/// Special professional status that can unlock fund benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    Trainee,
    Specializing,
    NewlyGraduated,
    RetiredActive,
}

/// Free-form territorial selection, resolved against the static territorial
/// table by name. A province without a municipality falls back to the
/// province's average municipal surtax rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub region: Option<String>,
    pub province: Option<String>,
    pub municipality: Option<String>,
}

/// Personal and classification data of the taxpayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub subject_type: SubjectType,
    pub first_name: String,
    pub last_name: String,

    /// Codice fiscale (16-character Italian tax code).
    pub tax_code: String,

    /// Partita IVA, when the taxpayer has one.
    pub vat_number: Option<String>,

    pub regime: FiscalRegime,

    #[serde(default)]
    pub location: Option<Location>,

    pub birth_date: Option<NaiveDate>,

    /// Professional-order membership (e.g. "Ordine degli Ingegneri"), used
    /// as a fallback key when resolving the professional fund.
    pub professional_order: Option<String>,

    pub special_status: Option<SpecialStatus>,

    /// Explicit INPS management override; when set it bypasses the
    /// activity-code classifier entirely.
    pub inps_management: Option<InpsManagement>,
}

impl TaxpayerProfile {
    /// Completed age at `as_of`, when the birth date is known.
    pub fn age(&self, as_of: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        let mut age = as_of.year() - birth.year();
        if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}
