use std::sync::OnceLock;

use chrono::NaiveDate;

use super::domain::JurisdictionFact;
use crate::engine::{Catalog, Clause, Guidance, Rule, Severity};

/// Process-wide space-law applicability table. Loaded once, read-only.
pub fn catalog() -> &'static Catalog<JurisdictionFact> {
    static CATALOG: OnceLock<Catalog<JurisdictionFact>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let published = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid catalog publication date");
        Catalog::new("jurisdiction", "2026.1", published, standard_provisions())
    })
}

fn standard_provisions() -> Vec<Rule<JurisdictionFact>> {
    vec![
        Rule {
            id: "JUR-01",
            title: "EU Space Act Authorisation",
            citation: "EU Space Act, Art. 6(1)",
            category: "eu_space_act",
            severity: Severity::Critical,
            clauses: vec![Clause::Is {
                fact: JurisdictionFact::EuMarketActor,
                expected: true,
            }],
            guidance: Guidance {
                summary: "Operators established in the Union, or offering space-based services into \
                          the Union market, must hold an authorisation from their competent authority.",
                tips: &[
                    "Third-country operators serving EU customers fall in scope through the market \
                     access clause; establishment is not required.",
                ],
                evidence: &["Authorisation file reference or application receipt"],
            },
        },
        Rule {
            id: "JUR-02",
            title: "EU Space Act Debris Mitigation Obligations",
            citation: "EU Space Act, Art. 43",
            category: "eu_space_act",
            severity: Severity::Critical,
            clauses: vec![
                Clause::Is {
                    fact: JurisdictionFact::EuMarketActor,
                    expected: true,
                },
                Clause::AnyOf {
                    fact: JurisdictionFact::ActivityType,
                    allowed: &["spacecraft_operation", "in_orbit_services"],
                },
            ],
            guidance: Guidance {
                summary: "Spacecraft operators in scope of the Act carry the full debris-mitigation \
                          chapter; the detailed checklist lives in the debris assessment.",
                tips: &[],
                evidence: &["Debris mitigation plan reference"],
            },
        },
        Rule {
            id: "JUR-03",
            title: "Environmental Footprint Declaration Obligation",
            citation: "EU Space Act, Art. 57",
            category: "eu_space_act",
            severity: Severity::Major,
            clauses: vec![Clause::Is {
                fact: JurisdictionFact::EuMarketActor,
                expected: true,
            }],
            guidance: Guidance {
                summary: "Operators in scope file a lifecycle environmental footprint declaration; \
                          the computation lives in the environmental assessment.",
                tips: &[],
                evidence: &["EFD filing reference"],
            },
        },
        Rule {
            id: "JUR-04",
            title: "NIS2 Cybersecurity Risk Management",
            citation: "Directive (EU) 2022/2555, Art. 21",
            category: "nis2",
            severity: Severity::Critical,
            clauses: vec![
                Clause::Is {
                    fact: JurisdictionFact::EuEstablished,
                    expected: true,
                },
                Clause::AnyOf {
                    fact: JurisdictionFact::EnterpriseSize,
                    allowed: &["medium", "large"],
                },
            ],
            guidance: Guidance {
                summary: "Space is an essential sector under NIS2; medium and large EU-established \
                          operators must implement the Article 21 risk-management measures.",
                tips: &[
                    "Micro and small enterprises fall outside the size cap unless designated by a \
                     member state.",
                ],
                evidence: &["Information-security management documentation"],
            },
        },
        Rule {
            id: "JUR-05",
            title: "NIS2 Incident Reporting",
            citation: "Directive (EU) 2022/2555, Art. 23",
            category: "nis2",
            severity: Severity::Major,
            clauses: vec![
                Clause::Is {
                    fact: JurisdictionFact::EuEstablished,
                    expected: true,
                },
                Clause::AnyOf {
                    fact: JurisdictionFact::EnterpriseSize,
                    allowed: &["medium", "large"],
                },
            ],
            guidance: Guidance {
                summary: "Significant incidents must reach the CSIRT within 24 hours (early warning) \
                          and 72 hours (incident notification).",
                tips: &[
                    "Pre-register reporting contacts with the CSIRT so the 24-hour clock is not \
                     spent on account setup.",
                ],
                evidence: &["Incident response procedure with notification timelines"],
            },
        },
        Rule {
            id: "JUR-06",
            title: "French Space Operations Authorisation",
            citation: "Loi n° 2008-518 (LOS), Art. 2",
            category: "national_law",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["france"],
            }],
            guidance: Guidance {
                summary: "French operators require a CNES-instructed authorisation for any space \
                          operation, wherever the launch occurs.",
                tips: &[],
                evidence: &["LOS authorisation reference"],
            },
        },
        Rule {
            id: "JUR-07",
            title: "Launch From French Territory",
            citation: "Loi n° 2008-518 (LOS), Art. 2(1)",
            category: "national_law",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::LaunchCountry,
                allowed: &["france"],
            }],
            guidance: Guidance {
                summary: "Any launch procured from French territory, including CSG Kourou, needs a \
                          French launch authorisation regardless of the operator's establishment.",
                tips: &[],
                evidence: &["Launch service agreement naming the launch site"],
            },
        },
        Rule {
            id: "JUR-08",
            title: "German Space Activity Registration",
            citation: "German Space Activities Act (draft), §3",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["germany"],
            }],
            guidance: Guidance {
                summary: "German operators register space activities with the federal regulator and \
                          follow the national liability regime.",
                tips: &[],
                evidence: &["Registration confirmation"],
            },
        },
        Rule {
            id: "JUR-09",
            title: "UK Space Industry Act Licence",
            citation: "Space Industry Act 2018, s. 3",
            category: "national_law",
            severity: Severity::Critical,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["united_kingdom"],
            }],
            guidance: Guidance {
                summary: "UK-established operators require a CAA licence for spaceflight activities \
                          and orbital operation.",
                tips: &[],
                evidence: &["CAA licence number"],
            },
        },
        Rule {
            id: "JUR-10",
            title: "Austrian Outer Space Act Authorisation",
            citation: "Austrian Outer Space Act, §3",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["austria"],
            }],
            guidance: Guidance {
                summary: "Austrian operators require ministerial authorisation and must insure \
                          against third-party damage.",
                tips: &[],
                evidence: &["Authorisation and insurance certificate"],
            },
        },
        Rule {
            id: "JUR-11",
            title: "Belgian Space Operations Authorisation",
            citation: "Law of 17 September 2005, Art. 2",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["belgium"],
            }],
            guidance: Guidance {
                summary: "Belgian operators notify and obtain authorisation from the federal science \
                          policy office for activities under Belgian jurisdiction.",
                tips: &[],
                evidence: &["Authorisation reference"],
            },
        },
        Rule {
            id: "JUR-12",
            title: "Dutch Space Activities Licence",
            citation: "Wet ruimtevaartactiviteiten, Art. 3",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["netherlands"],
            }],
            guidance: Guidance {
                summary: "Operators established in the Netherlands require a licence from the \
                          Ministry of Economic Affairs for space activities.",
                tips: &[],
                evidence: &["Licence reference"],
            },
        },
        Rule {
            id: "JUR-13",
            title: "Finnish Act on Space Activities Authorisation",
            citation: "Act on Space Activities (63/2018), §5",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["finland"],
            }],
            guidance: Guidance {
                summary: "Finnish operators apply to the Ministry of Economic Affairs and Employment \
                          before commencing space activities.",
                tips: &[],
                evidence: &["Authorisation decision"],
            },
        },
        Rule {
            id: "JUR-14",
            title: "Luxembourg Space Activities Authorisation",
            citation: "Law of 15 December 2020, Art. 2",
            category: "national_law",
            severity: Severity::Major,
            clauses: vec![Clause::AnyOf {
                fact: JurisdictionFact::EstablishedIn,
                allowed: &["luxembourg"],
            }],
            guidance: Guidance {
                summary: "Luxembourg operators require ministerial authorisation covering both the \
                          mission and the operator's financial standing.",
                tips: &[],
                evidence: &["Authorisation reference"],
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
        assert_eq!(catalog().domain(), "jurisdiction");
        assert_eq!(catalog().len(), 14);
    }
}
