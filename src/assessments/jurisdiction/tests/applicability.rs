use super::common::*;
use crate::assessments::jurisdiction::assess;
use crate::assessments::jurisdiction::domain::Country;
use crate::engine::StatusLedger;

#[test]
fn french_operator_gets_eu_and_national_regimes() {
    let assessment = assess(french_operator(), &StatusLedger::new()).expect("valid");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("JUR-01"), "EU authorisation applies");
    assert!(evaluation.is_applicable("JUR-02"), "EU debris chapter applies");
    assert!(evaluation.is_applicable("JUR-06"), "French LOS applies");
    assert!(evaluation.is_applicable("JUR-07"), "Kourou launch needs French authorisation");
    assert!(!evaluation.is_applicable("JUR-09"), "UK licence does not apply");
}

#[test]
fn third_country_operator_in_eu_market_gets_eu_rules_only() {
    let assessment = assess(us_operator_serving_eu(), &StatusLedger::new()).expect("valid");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("JUR-01"));
    assert!(
        !evaluation.is_applicable("JUR-04"),
        "NIS2 requires EU establishment, not just market access"
    );
    assert!(!evaluation.is_applicable("JUR-06"));
}

#[test]
fn nis2_size_cap_exempts_small_enterprises() {
    let mut submission = french_operator();
    submission.employee_count = 30;
    submission.annual_turnover_meur = 5.0;
    let small = assess(submission, &StatusLedger::new()).expect("valid");

    assert!(small.evaluation.is_applicable("JUR-01"), "EU Space Act still applies");
    assert!(
        !small.evaluation.is_applicable("JUR-04"),
        "small enterprises sit under the NIS2 size cap"
    );
    assert!(!small.evaluation.is_applicable("JUR-05"));

    let medium = assess(french_operator(), &StatusLedger::new()).expect("valid");
    assert!(medium.evaluation.is_applicable("JUR-04"));
    assert!(medium.evaluation.is_applicable("JUR-05"));
}

#[test]
fn unbooked_launch_excludes_territory_rule_with_warning() {
    let mut submission = french_operator();
    submission.launch_country = None;
    let assessment = assess(submission, &StatusLedger::new()).expect("valid");
    let evaluation = &assessment.evaluation;

    assert!(!evaluation.is_applicable("JUR-07"));
    let warnings: Vec<_> = evaluation
        .warnings
        .iter()
        .filter(|warning| warning.rule_id == "JUR-07")
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].missing_fact, "launch_country");
}

#[test]
fn report_lists_regimes_in_catalog_order() {
    let assessment = assess(french_operator(), &StatusLedger::new()).expect("valid");
    let generated_on = chrono::NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");

    let report = assessment.report(generated_on);

    assert_eq!(report.regimes, vec!["eu_space_act", "nis2", "national_law"]);
    assert!(report
        .sections
        .iter()
        .any(|section| section.category == "national_law"));
}

#[test]
fn establishment_switch_moves_the_national_regime() {
    let mut submission = french_operator();
    submission.established_in = Country::Finland;
    submission.launch_country = Some(Country::UnitedStates);
    let assessment = assess(submission, &StatusLedger::new()).expect("valid");
    let evaluation = &assessment.evaluation;

    assert!(evaluation.is_applicable("JUR-13"), "Finnish act applies");
    assert!(!evaluation.is_applicable("JUR-06"), "French LOS no longer applies");
    assert!(!evaluation.is_applicable("JUR-07"), "launch moved off French territory");
}
