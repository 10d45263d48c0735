use std::sync::OnceLock;

use chrono::NaiveDate;

use super::super::mission::DeorbitStrategy;
use super::domain::{EnvFact, FootprintGrade, LaunchVehicle, LifecyclePhase, PropellantType};
use crate::engine::{Catalog, Clause, Guidance, Rule, Severity};

/// Reference emission factors for one launch vehicle.
#[derive(Debug, Clone, Copy)]
pub struct VehicleFactors {
    pub propellant: PropellantType,
    /// Full launch campaign, dedicated flight, in tonnes CO2-equivalent.
    pub launch_tco2e: f64,
}

/// Static vehicle reference table backing the launch-phase computation.
pub const fn vehicle_factors(vehicle: LaunchVehicle) -> VehicleFactors {
    match vehicle {
        LaunchVehicle::Falcon9 => VehicleFactors {
            propellant: PropellantType::Kerolox,
            launch_tco2e: 1_150.0,
        },
        LaunchVehicle::Ariane6 => VehicleFactors {
            propellant: PropellantType::Hydrolox,
            launch_tco2e: 1_420.0,
        },
        LaunchVehicle::VegaC => VehicleFactors {
            propellant: PropellantType::Solid,
            launch_tco2e: 640.0,
        },
        LaunchVehicle::Electron => VehicleFactors {
            propellant: PropellantType::Kerolox,
            launch_tco2e: 70.0,
        },
        LaunchVehicle::Soyuz => VehicleFactors {
            propellant: PropellantType::Kerolox,
            launch_tco2e: 1_100.0,
        },
    }
}

/// Per-kilogram factors for the spacecraft segment, tCO2e.
pub const RAW_MATERIALS_TCO2E_PER_KG: f64 = 0.085;
pub const MANUFACTURING_TCO2E_PER_KG: f64 = 0.16;
pub const TRANSPORT_TCO2E_PER_KG: f64 = 0.012;

/// Ground segment, tCO2e per station per operational year.
pub const OPERATIONS_TCO2E_PER_STATION_YEAR: f64 = 38.0;

/// Disposal-route factor, tCO2e per kilogram of spacecraft mass.
pub const fn end_of_life_tco2e_per_kg(strategy: DeorbitStrategy) -> f64 {
    match strategy {
        DeorbitStrategy::ControlledDeorbit => 0.020,
        DeorbitStrategy::NaturalDecay => 0.004,
        DeorbitStrategy::GraveyardOrbit => 0.012,
        DeorbitStrategy::None => 0.0,
    }
}

/// Upper bounds (inclusive) mapping total GWP to grade letters; totals above
/// the last band fall through to grade F.
pub const GRADE_BANDS: &[(f64, FootprintGrade)] = &[
    (500.0, FootprintGrade::A),
    (1_500.0, FootprintGrade::B),
    (3_000.0, FootprintGrade::C),
    (6_000.0, FootprintGrade::D),
    (12_000.0, FootprintGrade::E),
];

pub fn grade_for_total(total_tco2e: f64) -> FootprintGrade {
    for (bound, grade) in GRADE_BANDS {
        if total_tco2e <= *bound {
            return *grade;
        }
    }
    FootprintGrade::F
}

/// A lifecycle phase contributing strictly more than this share of the total
/// is flagged as a hotspot.
pub const HOTSPOT_SHARE_THRESHOLD: f64 = 0.25;

/// Fixed suggestion table keyed by hotspot phase.
pub const fn phase_recommendation(phase: LifecyclePhase) -> &'static str {
    match phase {
        LifecyclePhase::RawMaterials => {
            "Source structural materials with certified recycled content to cut extraction emissions."
        }
        LifecyclePhase::Manufacturing => {
            "Shift integration and test facilities to certified renewable electricity."
        }
        LifecyclePhase::Transport => {
            "Consolidate hardware shipments and prefer sea or rail freight to the launch site."
        }
        LifecyclePhase::Launch => {
            "Book rideshare capacity or a lower-impact vehicle to shrink the launch allocation."
        }
        LifecyclePhase::Operations => {
            "Consolidate ground-station usage or procure renewable power for the ground segment."
        }
        LifecyclePhase::EndOfLife => {
            "Re-evaluate the disposal route; design-for-demise reduces end-of-life impact."
        }
    }
}

/// Fixed suggestion table keyed by non-compliant requirement.
pub fn rule_recommendation(rule_id: &str) -> Option<&'static str> {
    match rule_id {
        "EFD-01" => Some("File the environmental footprint declaration before the next reporting window closes."),
        "EFD-03" => Some("Request launch-campaign emission data from the launch provider; estimates from the reference table are accepted meanwhile."),
        "EFD-05" => Some("Attach the disposal emissions estimate to the end-of-life plan already on file."),
        "EFD-06" => Some("Commission the cumulative constellation assessment early; it gates constellation-phase authorisations."),
        _ => None,
    }
}

/// Process-wide environmental requirement table. Loaded once, read-only.
pub fn catalog() -> &'static Catalog<EnvFact> {
    static CATALOG: OnceLock<Catalog<EnvFact>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let published = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid catalog publication date");
        Catalog::new("environmental_footprint", "2026.1", published, standard_requirements())
    })
}

fn standard_requirements() -> Vec<Rule<EnvFact>> {
    vec![
        Rule {
            id: "EFD-01",
            title: "Environmental Footprint Declaration",
            citation: "EU Space Act, Art. 57(1)",
            category: "reporting",
            severity: Severity::Critical,
            clauses: vec![Clause::AtLeast {
                fact: EnvFact::SatelliteCount,
                min: 1.0,
            }],
            guidance: Guidance {
                summary: "Submit a lifecycle environmental footprint declaration covering every \
                          phase from raw materials to end of life.",
                tips: &[
                    "Use the reference emission factors where supplier-specific data is unavailable.",
                ],
                evidence: &["Current EFD filing reference"],
            },
        },
        Rule {
            id: "EFD-02",
            title: "Simplified Assessment Eligibility",
            citation: "EU Space Act, Art. 57(4)",
            category: "reporting",
            severity: Severity::Minor,
            clauses: vec![Clause::Is {
                fact: EnvFact::SmallEnterprise,
                expected: true,
            }],
            guidance: Guidance {
                summary: "Small enterprises may file the simplified footprint assessment; the \
                          computed totals are unchanged, only the reporting depth is reduced.",
                tips: &[
                    "Eligibility is independent of the debris light regime and is checked separately.",
                ],
                evidence: &["SME self-declaration"],
            },
        },
        Rule {
            id: "EFD-03",
            title: "Launch Campaign Emissions Reporting",
            citation: "EU Space Act, Art. 58(2)",
            category: "launch_segment",
            severity: Severity::Major,
            clauses: vec![Clause::AtLeast {
                fact: EnvFact::SatelliteCount,
                min: 1.0,
            }],
            guidance: Guidance {
                summary: "Report the launch campaign's emission allocation, including the rideshare \
                          fraction where the flight is shared.",
                tips: &[
                    "A dedicated flight is attributed in full; rideshares report their mass fraction.",
                ],
                evidence: &["Launch provider emission statement or reference-table estimate"],
            },
        },
        Rule {
            id: "EFD-04",
            title: "High-Impact Propellant Disclosure",
            citation: "EU Space Act, Art. 58(3)",
            category: "launch_segment",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: EnvFact::Propellant,
                allowed: &["kerolox", "solid", "hypergolic"],
            }],
            guidance: Guidance {
                summary: "Disclose combustion products and stratospheric effects for carbon-intensive \
                          or toxic propellant families.",
                tips: &[
                    "Solid and hypergolic propellants additionally require a ground-safety annex.",
                ],
                evidence: &["Propellant disclosure annex"],
            },
        },
        Rule {
            id: "EFD-05",
            title: "Disposal Emissions Estimate",
            citation: "EU Space Act, Art. 59(1)",
            category: "end_of_life",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: EnvFact::DeorbitStrategy,
                allowed: &["controlled_deorbit", "graveyard_orbit"],
            }],
            guidance: Guidance {
                summary: "Active disposal manoeuvres must carry an emissions estimate for the \
                          disposal phase in the declaration.",
                tips: &[],
                evidence: &["Disposal-phase emissions worksheet"],
            },
        },
        Rule {
            id: "EFD-06",
            title: "Cumulative Constellation Assessment",
            citation: "EU Space Act, Art. 57(6)",
            category: "reporting",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: EnvFact::ConstellationTier,
                allowed: &["large", "mega"],
            }],
            guidance: Guidance {
                summary: "Large constellations must assess cumulative fleet effects, including \
                          replenishment launches over the constellation lifetime.",
                tips: &[
                    "Include planned replacement cadence, not just the initial deployment.",
                ],
                evidence: &["Cumulative assessment covering the full replenishment plan"],
            },
        },
        Rule {
            id: "EFD-07",
            title: "Extended Operations Energy Reporting",
            citation: "EU Space Act, Art. 58(5)",
            category: "operations",
            severity: Severity::Minor,
            clauses: vec![Clause::AtLeast {
                fact: EnvFact::MissionDurationYears,
                min: 5.0,
            }],
            guidance: Guidance {
                summary: "Missions operating five years or longer report ground-segment energy \
                          consumption annually.",
                tips: &[
                    "Meter station power directly; estimates drift badly over multi-year missions.",
                ],
                evidence: &["Most recent annual energy report"],
            },
        },
        Rule {
            id: "EFD-08",
            title: "Night Sky Brightness Mitigation",
            citation: "EU Space Act, Art. 60(2)",
            category: "operations",
            severity: Severity::Minor,
            clauses: vec![Clause::AnyOf {
                fact: EnvFact::ConstellationTier,
                allowed: &["medium", "large", "mega"],
            }],
            guidance: Guidance {
                summary: "Constellations of ten or more spacecraft document brightness mitigation \
                          measures for optical astronomy.",
                tips: &[
                    "Low-reflectivity coatings and attitude biasing during orbit raising both count.",
                ],
                evidence: &["Brightness mitigation statement"],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_well_formed() {
        assert!(catalog().validate().is_ok());
        assert_eq!(catalog().domain(), "environmental_footprint");
        assert_eq!(catalog().len(), 8);
    }

    #[test]
    fn grade_bands_are_inclusive_upper_bounds() {
        assert_eq!(grade_for_total(500.0), FootprintGrade::A);
        assert_eq!(grade_for_total(500.1), FootprintGrade::B);
        assert_eq!(grade_for_total(3_000.0), FootprintGrade::C);
        assert_eq!(grade_for_total(6_000.1), FootprintGrade::E);
        assert_eq!(grade_for_total(12_000.1), FootprintGrade::F);
    }

    #[test]
    fn every_vehicle_has_positive_launch_factor() {
        for vehicle in [
            LaunchVehicle::Falcon9,
            LaunchVehicle::Ariane6,
            LaunchVehicle::VegaC,
            LaunchVehicle::Electron,
            LaunchVehicle::Soyuz,
        ] {
            assert!(vehicle_factors(vehicle).launch_tco2e > 0.0);
        }
    }
}
