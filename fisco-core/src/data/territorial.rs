//! Territorial tax reference table: regions, provinces and sample
//! municipalities with their 2024 regional-surtax, municipal-surtax and
//! IRAP rates.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// IRAP sector with a region-specific override rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Banks,
    Insurance,
    FinancialServices,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Banks => "banche",
            Self::Insurance => "assicurazioni",
            Self::FinancialServices => "attivita_finanziarie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Municipality {
    pub name: &'static str,
    pub istat_code: &'static str,
    /// Municipal surtax rate, percent.
    pub surtax_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Province {
    pub code: &'static str,
    pub name: &'static str,
    /// Average municipal surtax across the province, percent. Used as a
    /// synthetic municipality when the caller picks a province without a
    /// specific municipality.
    pub average_municipal_surtax: Decimal,
    pub municipalities: Vec<Municipality>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalSurtax {
    /// Base rate, percent.
    pub base_rate: Decimal,
    /// Statutory ceiling, percent.
    pub max_rate: Decimal,
    /// No regional surtax is due at or below this taxable base.
    pub exempt_threshold: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrapRates {
    pub base_rate: Decimal,
    pub sector_rates: Vec<(Sector, Decimal)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub surtax: RegionalSurtax,
    pub irap: IrapRates,
    pub provinces: Vec<Province>,
}

impl Region {
    /// Case-insensitive substring match over this region's provinces; the
    /// first table entry that matches wins.
    pub fn province_by_name(&self, name: &str) -> Option<&Province> {
        let needle = name.to_lowercase();
        self.provinces
            .iter()
            .find(|p| p.name.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring match over this region's municipalities,
    /// in province order.
    pub fn municipality_by_name(&self, name: &str) -> Option<&Municipality> {
        let needle = name.to_lowercase();
        self.provinces
            .iter()
            .flat_map(|p| p.municipalities.iter())
            .find(|m| m.name.to_lowercase().contains(&needle))
    }
}

fn muni(name: &'static str, istat_code: &'static str, surtax_rate: Decimal) -> Municipality {
    Municipality {
        name,
        istat_code,
        surtax_rate,
    }
}

fn prov(
    code: &'static str,
    name: &'static str,
    average_municipal_surtax: Decimal,
    municipalities: Vec<Municipality>,
) -> Province {
    Province {
        code,
        name,
        average_municipal_surtax,
        municipalities,
    }
}

fn surtax(base_rate: Decimal, max_rate: Decimal, exempt_threshold: Decimal) -> RegionalSurtax {
    RegionalSurtax {
        base_rate,
        max_rate,
        exempt_threshold: Some(exempt_threshold),
    }
}

static REGIONS: LazyLock<Vec<Region>> = LazyLock::new(|| {
    vec![
        Region {
            code: "01",
            name: "Piemonte",
            surtax: surtax(dec!(1.68), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![
                    (Sector::Banks, dec!(4.65)),
                    (Sector::Insurance, dec!(5.9)),
                    (Sector::FinancialServices, dec!(4.25)),
                ],
            },
            provinces: vec![
                prov(
                    "001",
                    "Torino",
                    dec!(0.6),
                    vec![
                        muni("Torino", "001272", dec!(0.8)),
                        muni("Moncalieri", "001158", dec!(0.7)),
                        muni("Rivoli", "001208", dec!(0.5)),
                    ],
                ),
                prov(
                    "002",
                    "Cuneo",
                    dec!(0.5),
                    vec![
                        muni("Cuneo", "004078", dec!(0.6)),
                        muni("Alba", "004003", dec!(0.7)),
                    ],
                ),
            ],
        },
        Region {
            code: "02",
            name: "Valle d'Aosta",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![prov(
                "007",
                "Aosta",
                dec!(0.4),
                vec![
                    muni("Aosta", "007003", dec!(0.5)),
                    muni("Courmayeur", "007022", dec!(0.3)),
                ],
            )],
        },
        Region {
            code: "03",
            name: "Lombardia",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![(Sector::Banks, dec!(4.65)), (Sector::Insurance, dec!(5.9))],
            },
            provinces: vec![
                prov(
                    "015",
                    "Milano",
                    dec!(0.7),
                    vec![
                        muni("Milano", "015146", dec!(0.9)),
                        muni("Sesto San Giovanni", "015190", dec!(0.8)),
                        muni("Rho", "015173", dec!(0.7)),
                    ],
                ),
                prov(
                    "016",
                    "Bergamo",
                    dec!(0.6),
                    vec![
                        muni("Bergamo", "016024", dec!(0.8)),
                        muni("Treviglio", "016219", dec!(0.7)),
                    ],
                ),
                prov(
                    "017",
                    "Brescia",
                    dec!(0.6),
                    vec![
                        muni("Brescia", "017029", dec!(0.8)),
                        muni("Desenzano del Garda", "017067", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "04",
            name: "Trentino-Alto Adige",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                // Reduced rate under the special-statute autonomy.
                base_rate: dec!(2.68),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "021",
                    "Bolzano",
                    dec!(0.3),
                    vec![
                        muni("Bolzano", "021008", dec!(0.5)),
                        muni("Merano", "021051", dec!(0.4)),
                    ],
                ),
                prov(
                    "022",
                    "Trento",
                    dec!(0.4),
                    vec![
                        muni("Trento", "022205", dec!(0.6)),
                        muni("Rovereto", "022165", dec!(0.5)),
                    ],
                ),
            ],
        },
        Region {
            code: "05",
            name: "Veneto",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "027",
                    "Venezia",
                    dec!(0.6),
                    vec![
                        muni("Venezia", "027042", dec!(0.7)),
                        muni("Chioggia", "027010", dec!(0.6)),
                    ],
                ),
                prov(
                    "028",
                    "Verona",
                    dec!(0.5),
                    vec![
                        muni("Verona", "023091", dec!(0.8)),
                        muni("Legnago", "023042", dec!(0.6)),
                    ],
                ),
                prov(
                    "029",
                    "Padova",
                    dec!(0.6),
                    vec![
                        muni("Padova", "028060", dec!(0.8)),
                        muni("Abano Terme", "028001", dec!(0.7)),
                    ],
                ),
            ],
        },
        Region {
            code: "06",
            name: "Friuli-Venezia Giulia",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(2.68),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "030",
                    "Trieste",
                    dec!(0.6),
                    vec![
                        muni("Trieste", "032006", dec!(0.8)),
                        muni("Muggia", "032004", dec!(0.6)),
                    ],
                ),
                prov(
                    "031",
                    "Udine",
                    dec!(0.5),
                    vec![
                        muni("Udine", "030129", dec!(0.7)),
                        muni("Codroipo", "030023", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "07",
            name: "Liguria",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.17),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "010",
                    "Genova",
                    dec!(0.7),
                    vec![
                        muni("Genova", "010025", dec!(0.8)),
                        muni("Rapallo", "010046", dec!(0.7)),
                    ],
                ),
                prov(
                    "011",
                    "Savona",
                    dec!(0.6),
                    vec![
                        muni("Savona", "009057", dec!(0.7)),
                        muni("Albenga", "009002", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "08",
            name: "Emilia-Romagna",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "037",
                    "Bologna",
                    dec!(0.7),
                    vec![
                        muni("Bologna", "037006", dec!(0.8)),
                        muni("Imola", "037027", dec!(0.7)),
                    ],
                ),
                prov(
                    "036",
                    "Modena",
                    dec!(0.6),
                    vec![
                        muni("Modena", "036023", dec!(0.8)),
                        muni("Carpi", "036006", dec!(0.7)),
                    ],
                ),
                prov(
                    "034",
                    "Parma",
                    dec!(0.6),
                    vec![
                        muni("Parma", "034027", dec!(0.8)),
                        muni("Fidenza", "034017", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "09",
            name: "Toscana",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "048",
                    "Firenze",
                    dec!(0.6),
                    vec![
                        muni("Firenze", "048017", dec!(0.8)),
                        muni("Empoli", "048013", dec!(0.6)),
                        muni("Scandicci", "048038", dec!(0.7)),
                    ],
                ),
                prov(
                    "052",
                    "Pisa",
                    dec!(0.6),
                    vec![
                        muni("Pisa", "050026", dec!(0.8)),
                        muni("Pontedera", "050027", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "10",
            name: "Umbria",
            surtax: surtax(dec!(1.4), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "054",
                    "Perugia",
                    dec!(0.6),
                    vec![
                        muni("Perugia", "054039", dec!(0.8)),
                        muni("Foligno", "054018", dec!(0.7)),
                    ],
                ),
                prov(
                    "055",
                    "Terni",
                    dec!(0.7),
                    vec![
                        muni("Terni", "055032", dec!(0.8)),
                        muni("Orvieto", "055023", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "11",
            name: "Marche",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.2),
                sector_rates: vec![],
            },
            provinces: vec![prov(
                "042",
                "Ancona",
                dec!(0.6),
                vec![
                    muni("Ancona", "042002", dec!(0.8)),
                    muni("Senigallia", "042045", dec!(0.6)),
                    muni("Jesi", "042024", dec!(0.7)),
                ],
            )],
        },
        Region {
            code: "12",
            name: "Lazio",
            // Lazio sits at the statutory ceiling.
            surtax: surtax(dec!(3.33), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.82),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "058",
                    "Roma",
                    dec!(0.8),
                    vec![
                        muni("Roma", "058091", dec!(0.9)),
                        muni("Tivoli", "058111", dec!(0.8)),
                        muni("Fiumicino", "058033", dec!(0.6)),
                    ],
                ),
                prov(
                    "059",
                    "Latina",
                    dec!(0.6),
                    vec![
                        muni("Latina", "059011", dec!(0.8)),
                        muni("Aprilia", "059002", dec!(0.7)),
                    ],
                ),
            ],
        },
        Region {
            code: "13",
            name: "Abruzzo",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "066",
                    "L'Aquila",
                    dec!(0.5),
                    vec![
                        muni("L'Aquila", "066049", dec!(0.7)),
                        muni("Avezzano", "066006", dec!(0.6)),
                    ],
                ),
                prov(
                    "068",
                    "Pescara",
                    dec!(0.6),
                    vec![
                        muni("Pescara", "068028", dec!(0.8)),
                        muni("Montesilvano", "068027", dec!(0.7)),
                    ],
                ),
            ],
        },
        Region {
            code: "14",
            name: "Molise",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![prov(
                "070",
                "Campobasso",
                dec!(0.5),
                vec![
                    muni("Campobasso", "070009", dec!(0.7)),
                    muni("Termoli", "070078", dec!(0.6)),
                ],
            )],
        },
        Region {
            code: "15",
            name: "Campania",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.82),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "063",
                    "Napoli",
                    dec!(0.7),
                    vec![
                        muni("Napoli", "063049", dec!(0.8)),
                        muni("Pozzuoli", "063060", dec!(0.7)),
                    ],
                ),
                prov(
                    "065",
                    "Salerno",
                    dec!(0.6),
                    vec![
                        muni("Salerno", "065116", dec!(0.8)),
                        muni("Battipaglia", "065011", dec!(0.7)),
                    ],
                ),
            ],
        },
        Region {
            code: "16",
            name: "Puglia",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.82),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "072",
                    "Bari",
                    dec!(0.7),
                    vec![
                        muni("Bari", "072006", dec!(0.8)),
                        muni("Molfetta", "072025", dec!(0.6)),
                    ],
                ),
                prov(
                    "075",
                    "Lecce",
                    dec!(0.6),
                    vec![
                        muni("Lecce", "075035", dec!(0.8)),
                        muni("Gallipoli", "075028", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "17",
            name: "Basilicata",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(3.9),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "076",
                    "Potenza",
                    dec!(0.5),
                    vec![
                        muni("Potenza", "076063", dec!(0.7)),
                        muni("Melfi", "076048", dec!(0.6)),
                    ],
                ),
                prov(
                    "077",
                    "Matera",
                    dec!(0.6),
                    vec![
                        muni("Matera", "077014", dec!(0.8)),
                        muni("Policoro", "077023", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "18",
            name: "Calabria",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.82),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "078",
                    "Cosenza",
                    dec!(0.6),
                    vec![
                        muni("Cosenza", "078045", dec!(0.7)),
                        muni("Rende", "078103", dec!(0.6)),
                    ],
                ),
                prov(
                    "080",
                    "Reggio Calabria",
                    dec!(0.6),
                    vec![
                        muni("Reggio Calabria", "080063", dec!(0.8)),
                        muni("Villa San Giovanni", "080091", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "19",
            name: "Sicilia",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(4.82),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "082",
                    "Palermo",
                    dec!(0.6),
                    vec![
                        muni("Palermo", "082053", dec!(0.8)),
                        muni("Bagheria", "082006", dec!(0.7)),
                    ],
                ),
                prov(
                    "087",
                    "Catania",
                    dec!(0.5),
                    vec![
                        muni("Catania", "087015", dec!(0.7)),
                        muni("Acireale", "087002", dec!(0.6)),
                    ],
                ),
            ],
        },
        Region {
            code: "20",
            name: "Sardegna",
            surtax: surtax(dec!(1.23), dec!(3.33), dec!(15000)),
            irap: IrapRates {
                base_rate: dec!(2.68),
                sector_rates: vec![],
            },
            provinces: vec![
                prov(
                    "092",
                    "Cagliari",
                    dec!(0.6),
                    vec![
                        muni("Cagliari", "092009", dec!(0.8)),
                        muni("Quartu Sant'Elena", "092051", dec!(0.7)),
                    ],
                ),
                prov(
                    "090",
                    "Sassari",
                    dec!(0.5),
                    vec![
                        muni("Sassari", "090064", dec!(0.7)),
                        muni("Alghero", "090003", dec!(0.6)),
                    ],
                ),
            ],
        },
    ]
});

pub fn regions() -> &'static [Region] {
    &REGIONS
}

/// Case-insensitive substring match against region names; the first table
/// entry that matches wins.
pub fn region_by_name(name: &str) -> Option<&'static Region> {
    let needle = name.to_lowercase();
    regions()
        .iter()
        .find(|r| r.name.to_lowercase().contains(&needle))
}
