use std::sync::OnceLock;

use chrono::NaiveDate;

use super::domain::DebrisFact;
use crate::engine::{Catalog, Clause, Guidance, Rule, Severity};

/// Process-wide debris-mitigation requirement table. Loaded once, read-only.
pub fn catalog() -> &'static Catalog<DebrisFact> {
    static CATALOG: OnceLock<Catalog<DebrisFact>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let published = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid catalog publication date");
        Catalog::new("debris_mitigation", "2026.1", published, standard_requirements())
    })
}

fn standard_requirements() -> Vec<Rule<DebrisFact>> {
    vec![
        Rule {
            id: "DEB-01",
            title: "Debris Mitigation Plan",
            citation: "EU Space Act, Art. 43",
            category: "documentation",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: DebrisFact::ActivityType,
                allowed: &["spacecraft_operation", "in_orbit_services", "reentry_operation"],
            }],
            guidance: Guidance {
                summary: "Maintain an approved debris mitigation plan covering design, \
                          operations, and disposal for every spacecraft under the authorisation.",
                tips: &[
                    "Align the plan structure with ISO 24113 so the NCA can cross-check clauses directly.",
                    "Refresh the plan whenever the mission profile or disposal strategy changes.",
                ],
                evidence: &[
                    "Current debris mitigation plan with revision history",
                    "NCA acknowledgement or approval reference",
                ],
            },
        },
        Rule {
            id: "DEB-02",
            title: "Post-Mission Disposal Within 25 Years (LEO)",
            citation: "ISO 24113:2023, §6.3.3",
            category: "disposal",
            severity: Severity::Critical,
            clauses: vec![
                Clause::AnyOf {
                    fact: DebrisFact::OrbitRegime,
                    allowed: &["leo"],
                },
                Clause::AnyOf {
                    fact: DebrisFact::ActivityType,
                    allowed: &["spacecraft_operation", "in_orbit_services"],
                },
            ],
            guidance: Guidance {
                summary: "Demonstrate that each spacecraft clears the protected LEO region \
                          within 25 years of end of mission, by manoeuvre or natural decay.",
                tips: &[
                    "Run the residual-lifetime analysis at the end-of-life orbit, not the operational one.",
                    "Book disposal propellant in the mission budget from the design phase.",
                ],
                evidence: &[
                    "Orbital lifetime analysis for the disposal orbit",
                    "Disposal manoeuvre plan or decay justification",
                ],
            },
        },
        Rule {
            id: "DEB-03",
            title: "Graveyard Re-Orbit Above the GEO Protected Region",
            citation: "IADC-02-01, §5.3.1",
            category: "disposal",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: DebrisFact::OrbitRegime,
                allowed: &["geo"],
            }],
            guidance: Guidance {
                summary: "Re-orbit GEO spacecraft at end of mission to a graveyard orbit with \
                          sufficient clearance above the protected region.",
                tips: &[
                    "Compute the minimum re-orbit altitude from the spacecraft's area-to-mass ratio.",
                    "Schedule the manoeuvre while attitude control margins are still healthy.",
                ],
                evidence: &["Re-orbit manoeuvre plan with delta-v budget"],
            },
        },
        Rule {
            id: "DEB-04",
            title: "Collision Avoidance Manoeuvre Procedures",
            citation: "EU Space Act, Art. 45(1)",
            category: "collision_avoidance",
            severity: Severity::Major,
            clauses: vec![
                Clause::AnyOf {
                    fact: DebrisFact::ActivityType,
                    allowed: &["spacecraft_operation", "in_orbit_services"],
                },
                Clause::AnyOf {
                    fact: DebrisFact::Maneuverability,
                    allowed: &["limited", "full"],
                },
            ],
            guidance: Guidance {
                summary: "Operate documented conjunction-response procedures, including decision \
                          thresholds and manoeuvre execution timelines.",
                tips: &[
                    "Define a probability-of-collision threshold above which a manoeuvre is mandatory.",
                    "Rehearse the decision chain so a manoeuvre can be commanded within hours.",
                ],
                evidence: &[
                    "Conjunction assessment procedure",
                    "Log of executed or waived avoidance manoeuvres",
                ],
            },
        },
        Rule {
            id: "DEB-05",
            title: "Conjunction Data Service Subscription",
            citation: "EU Space Act, Art. 45(3)",
            category: "collision_avoidance",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: DebrisFact::ActivityType,
                allowed: &["spacecraft_operation", "in_orbit_services"],
            }],
            guidance: Guidance {
                summary: "Receive conjunction warnings from EU SST or an equivalent space \
                          surveillance provider for every operated spacecraft.",
                tips: &[
                    "Register all objects with the surveillance provider before launch.",
                ],
                evidence: &["Active EU SST registration or service contract"],
            },
        },
        Rule {
            id: "DEB-06",
            title: "Constellation Coordination Plan",
            citation: "EU Space Act, Art. 46(2)",
            category: "collision_avoidance",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: DebrisFact::ConstellationTier,
                allowed: &["large", "mega"],
            }],
            guidance: Guidance {
                summary: "Large constellations must file a fleet-level coordination plan covering \
                          orbital separation, manoeuvre responsibility, and failure-rate limits.",
                tips: &[
                    "State the maximum tolerated dead-satellite fraction and the replenishment response.",
                    "Describe how manoeuvre responsibility is allocated in mixed-fleet conjunctions.",
                ],
                evidence: &["Fleet coordination plan accepted by the NCA"],
            },
        },
        Rule {
            id: "DEB-07",
            title: "Ephemeris Sharing for Mega Constellations",
            citation: "EU Space Act, Art. 46(4)",
            category: "collision_avoidance",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: DebrisFact::ConstellationTier,
                allowed: &["mega"],
            }],
            guidance: Guidance {
                summary: "Publish spacecraft ephemerides and planned manoeuvres to other operators \
                          and surveillance networks on an agreed cadence.",
                tips: &[
                    "Automate the ephemeris feed; manual uploads fall behind within days at fleet scale.",
                ],
                evidence: &["Ephemeris publication endpoint and update cadence"],
            },
        },
        Rule {
            id: "DEB-08",
            title: "Passivation of Stored Energy Sources",
            citation: "ISO 24113:2023, §6.2.2",
            category: "disposal",
            severity: Severity::Major,
            clauses: vec![Clause::Is {
                fact: DebrisFact::Propulsion,
                expected: true,
            }],
            guidance: Guidance {
                summary: "Deplete or safe all stored energy (propellant, pressurant, batteries) \
                          at end of mission to prevent break-ups.",
                tips: &[
                    "Vent residual pressurant after the final disposal manoeuvre.",
                    "Include battery disconnect in the end-of-life command sequence.",
                ],
                evidence: &["End-of-life passivation procedure"],
            },
        },
        Rule {
            id: "DEB-09",
            title: "Trackability Aids for Sub-10 kg Spacecraft",
            citation: "EU Space Act, Art. 44(5)",
            category: "tracking",
            severity: Severity::Major,
            clauses: vec![
                Clause::AtMost {
                    fact: DebrisFact::SpacecraftMassKg,
                    max: 10.0,
                },
                Clause::AnyOf {
                    fact: DebrisFact::OrbitRegime,
                    allowed: &["leo"],
                },
            ],
            guidance: Guidance {
                summary: "Very small spacecraft in LEO must carry passive or active aids that keep \
                          them trackable by ground-based surveillance.",
                tips: &[
                    "A corner-cube retroreflector is usually the cheapest compliant option.",
                ],
                evidence: &["Trackability aid description in the spacecraft design file"],
            },
        },
        Rule {
            id: "DEB-10",
            title: "Re-Entry Casualty Risk Assessment",
            citation: "EU Space Act, Art. 47(1)",
            category: "safety",
            severity: Severity::Critical,
            clauses: vec![
                Clause::AnyOf {
                    fact: DebrisFact::DeorbitStrategy,
                    allowed: &["natural_decay", "none"],
                },
                Clause::AnyOf {
                    fact: DebrisFact::OrbitRegime,
                    allowed: &["leo"],
                },
            ],
            guidance: Guidance {
                summary: "Uncontrolled re-entries require a casualty risk assessment demonstrating \
                          the expectation stays below 1 in 10,000 per re-entry event.",
                tips: &[
                    "Model demisability component by component; titanium tanks dominate survivability.",
                    "If the threshold cannot be met, switch to a controlled deorbit over ocean.",
                ],
                evidence: &["Casualty risk analysis report"],
            },
        },
        Rule {
            id: "DEB-11",
            title: "Disposal Propellant Reserve",
            citation: "ISO 24113:2023, §6.3.4",
            category: "disposal",
            severity: Severity::Major,
            clauses: vec![
                Clause::Is {
                    fact: DebrisFact::Propulsion,
                    expected: true,
                },
                Clause::AnyOf {
                    fact: DebrisFact::DeorbitStrategy,
                    allowed: &["controlled_deorbit", "graveyard_orbit"],
                },
            ],
            guidance: Guidance {
                summary: "Reserve and monitor the propellant needed for the disposal manoeuvre \
                          throughout the operational phase.",
                tips: &[
                    "Gate mission extensions on the remaining disposal reserve, not total propellant.",
                ],
                evidence: &["Propellant budget with dedicated disposal allocation"],
            },
        },
        Rule {
            id: "DEB-12",
            title: "Extended-Mission Disposal Review",
            citation: "EU Space Act, Art. 43(6)",
            category: "disposal",
            severity: Severity::Minor,
            clauses: vec![Clause::AtLeast {
                fact: DebrisFact::MissionDurationYears,
                min: 8.0,
            }],
            guidance: Guidance {
                summary: "Missions planned beyond eight years must periodically re-verify that the \
                          disposal strategy remains achievable as the spacecraft ages.",
                tips: &[
                    "Re-run the disposal analysis at mid-life using measured degradation data.",
                ],
                evidence: &["Most recent disposal review record"],
            },
        },
        Rule {
            id: "DEB-13",
            title: "Light-Regime Simplified Documentation",
            citation: "EU Space Act, Art. 9 (light regime)",
            category: "documentation",
            severity: Severity::Minor,
            clauses: vec![
                Clause::Is {
                    fact: DebrisFact::SmallEnterprise,
                    expected: true,
                },
                Clause::AnyOf {
                    fact: DebrisFact::ConstellationTier,
                    allowed: &["single", "small"],
                },
            ],
            guidance: Guidance {
                summary: "Small enterprises operating at most a handful of spacecraft may file the \
                          simplified mitigation dossier instead of the full plan.",
                tips: &[
                    "The simplified dossier still requires the disposal analysis; only the reporting \
                     depth is reduced.",
                ],
                evidence: &["Simplified mitigation dossier"],
            },
        },
        Rule {
            id: "DEB-14",
            title: "Surveillance Registration for Untracked Spacecraft",
            citation: "EU Space Act, Art. 44(6)",
            category: "tracking",
            severity: Severity::Major,
            clauses: vec![Clause::Is {
                fact: DebrisFact::TransponderFitted,
                expected: false,
            }],
            guidance: Guidance {
                summary: "Spacecraft without their own tracking transponder must be registered for \
                          third-party tracking before launch.",
                tips: &[
                    "Provide launch and deployment state vectors to the surveillance provider early.",
                ],
                evidence: &["Tracking registration confirmation"],
            },
        },
    ]
}
