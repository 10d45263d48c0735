use super::common::*;
use crate::assessments::debris::assess;
use crate::engine::{RequirementStatus, StatusLedger};
use chrono::NaiveDate;

#[test]
fn fresh_assessment_defaults_every_finding_to_not_assessed() {
    let assessment = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(evaluation
        .findings
        .iter()
        .all(|finding| finding.status == RequirementStatus::NotAssessed));
    assert_eq!(evaluation.counts.not_assessed, evaluation.counts.total_applicable);
    assert_eq!(evaluation.score, 0);
}

#[test]
fn ledger_statuses_flow_into_counts_and_score() {
    let ledger = ledger_with(&[
        ("DEB-01", RequirementStatus::Compliant),
        ("DEB-02", RequirementStatus::NonCompliant),
    ]);
    let assessment = assess(leo_submission(), &ledger).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert_eq!(evaluation.counts.compliant, 1);
    assert_eq!(evaluation.counts.non_compliant, 1);

    let expected =
        (100.0 / evaluation.counts.total_applicable as f64).round() as u8;
    assert_eq!(evaluation.score, expected);
}

#[test]
fn marking_one_rule_compliant_moves_score_by_one_increment() {
    let before = assess(leo_submission(), &StatusLedger::new()).expect("valid profile");
    let total = before.evaluation.counts.total_applicable;

    let ledger = ledger_with(&[("DEB-01", RequirementStatus::Compliant)]);
    let after = assess(leo_submission(), &ledger).expect("valid profile");

    let increment = (100.0 / total as f64).round() as u8;
    assert_eq!(after.evaluation.score - before.evaluation.score, increment);
}

#[test]
fn status_upgrade_never_lowers_the_score() {
    let ledger = ledger_with(&[("DEB-02", RequirementStatus::NotAssessed)]);
    let before = assess(leo_submission(), &ledger).expect("valid profile");

    let ledger = ledger_with(&[("DEB-02", RequirementStatus::Compliant)]);
    let after = assess(leo_submission(), &ledger).expect("valid profile");

    assert!(after.evaluation.score >= before.evaluation.score);
}

#[test]
fn tracked_rule_that_stops_applying_is_retired() {
    // DEB-03 was tracked while the fleet flew in GEO; the refiled LEO profile
    // retires it instead of dropping the history.
    let ledger = ledger_with(&[("DEB-03", RequirementStatus::Compliant)]);
    let assessment = assess(leo_submission(), &ledger).expect("valid profile");
    let evaluation = &assessment.evaluation;

    assert!(!evaluation.is_applicable("DEB-03"));
    let retired = evaluation
        .retired
        .iter()
        .find(|entry| entry.rule_id == "DEB-03")
        .expect("history preserved");
    assert_eq!(retired.previous_status, RequirementStatus::Compliant);
    assert_eq!(retired.status, RequirementStatus::NotApplicable);
}

#[test]
fn report_carries_score_sections_and_disclaimer() {
    let ledger = ledger_with(&[("DEB-01", RequirementStatus::Compliant)]);
    let assessment = assess(leo_submission(), &ledger).expect("valid profile");
    let generated_on = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");

    let report = assessment.report(generated_on);

    assert_eq!(report.generated_on, generated_on);
    assert_eq!(report.score, assessment.evaluation.score);
    assert!(!report.sections.is_empty());
    assert!(report.disclaimer.contains("not legal advice"));

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["catalog_version"], "2026.1");
    assert!(json["sections"].as_array().is_some());
}
