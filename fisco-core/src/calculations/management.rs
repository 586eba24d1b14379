//! INPS management classification.
//!
//! When the taxpayer is not enrolled in a professional fund, the INPS
//! management is inferred from the ATECO division (first two digits of the
//! activity code). Manufacturing and commerce divisions map to the artisans
//! and merchants management; everything else falls to the separate
//! management, which covers the bulk of self-employed professionals. The
//! employee and agricultural managements are only reached through an
//! explicit override on the taxpayer profile.

use crate::models::InpsManagement;

/// ATECO divisions enrolled with the artisans and merchants management:
/// manufacturing (10-33) and vehicle, wholesale and retail commerce (45-47).
const ARTISAN_MERCHANT_DIVISIONS: &[&str] = &[
    "10", "11", "13", "14", "15", "16", "17", "18", "20", "22", "23", "24", "25", "31", "32",
    "33", "45", "46", "47",
];

/// Resolves the INPS management for an activity code. An explicit override
/// from the taxpayer profile always wins.
pub fn classify(activity_code: &str, explicit: Option<InpsManagement>) -> InpsManagement {
    if let Some(management) = explicit {
        return management;
    }

    let division: String = activity_code.chars().take(2).collect();
    if ARTISAN_MERCHANT_DIVISIONS.contains(&division.as_str()) {
        InpsManagement::ArtisansMerchants
    } else {
        InpsManagement::SeparateManagement
    }
}
