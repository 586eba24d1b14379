use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    Vat,
    IncomeTax,
    Irap,
    Contributions,
}

/// A single entry of the payment schedule. Generated deterministically from
/// the calculation result; the schedule is ordered ascending by due date
/// and never contains zero or negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDeadline {
    pub kind: DeadlineKind,
    pub description: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub paid: bool,
}
