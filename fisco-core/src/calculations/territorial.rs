//! Regional and municipal IRPEF surtaxes and IRAP.

use rust_decimal::Decimal;

use crate::data::territorial::{Region, Sector};

use super::common::pct_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritorialSurtaxes {
    pub regional: Decimal,
    pub municipal: Decimal,
}

impl TerritorialSurtaxes {
    pub fn total(&self) -> Decimal {
        self.regional + self.municipal
    }
}

/// Computes regional and municipal IRPEF surtaxes for a resolved region.
///
/// The regional surtax is due only above the region's exempt threshold. The
/// municipal surtax needs a rate, either a municipality's own or the
/// provincial average; with neither, it stays at zero.
pub fn compute_surtaxes(
    taxable_base: Decimal,
    region: &Region,
    municipal_rate: Option<Decimal>,
) -> TerritorialSurtaxes {
    let threshold = region.surtax.exempt_threshold.unwrap_or(Decimal::ZERO);
    let regional = if taxable_base > threshold {
        pct_of(taxable_base, region.surtax.base_rate)
    } else {
        Decimal::ZERO
    };

    let municipal = municipal_rate
        .map(|rate| pct_of(taxable_base, rate))
        .unwrap_or(Decimal::ZERO);

    TerritorialSurtaxes { regional, municipal }
}

/// Computes IRAP on the net production value, using the region's sector
/// override when one applies.
pub fn compute_irap(taxable_base: Decimal, region: &Region, sector: Option<Sector>) -> Decimal {
    let rate = irap_rate(region, sector);
    pct_of(taxable_base, rate)
}

pub fn irap_rate(region: &Region, sector: Option<Sector>) -> Decimal {
    sector
        .and_then(|s| {
            region
                .irap
                .sector_rates
                .iter()
                .find(|(candidate, _)| *candidate == s)
                .map(|(_, rate)| *rate)
        })
        .unwrap_or(region.irap.base_rate)
}

/// Maps an activity code to an IRAP sector: exact code first, then the
/// two-character division prefix. Divisions 64, 65 and 66 are the financial
/// ones.
pub fn sector_for_activity_code(code: &str) -> Option<Sector> {
    fn exact(code: &str) -> Option<Sector> {
        match code {
            "64" | "K64" => Some(Sector::Banks),
            "65" | "K65" => Some(Sector::Insurance),
            "66" | "K66" => Some(Sector::FinancialServices),
            _ => None,
        }
    }

    exact(code).or_else(|| {
        let prefix: String = code.chars().take(2).collect();
        exact(&prefix)
    })
}
