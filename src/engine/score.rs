use serde::Serialize;

use super::status::RequirementStatus;

/// Tally of applicable-requirement statuses backing the compliance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub compliant: usize,
    pub non_compliant: usize,
    pub not_assessed: usize,
    pub total_applicable: usize,
}

impl StatusCounts {
    pub(crate) fn record(&mut self, status: RequirementStatus) {
        self.total_applicable += 1;
        match status {
            RequirementStatus::Compliant => self.compliant += 1,
            RequirementStatus::NonCompliant => self.non_compliant += 1,
            RequirementStatus::NotAssessed => self.not_assessed += 1,
            // Not counted: applicable findings never carry this status.
            RequirementStatus::NotApplicable => {}
        }
    }
}

/// `round(100 * compliant / total_applicable)`. An empty applicable set is
/// vacuously compliant and scores 100.
pub fn compliance_score(counts: &StatusCounts) -> u8 {
    if counts.total_applicable == 0 {
        return 100;
    }

    let ratio = counts.compliant as f64 / counts.total_applicable as f64;
    (100.0 * ratio).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(compliant: usize, total: usize) -> StatusCounts {
        StatusCounts {
            compliant,
            non_compliant: total - compliant,
            not_assessed: 0,
            total_applicable: total,
        }
    }

    #[test]
    fn empty_applicable_set_scores_vacuous_hundred() {
        assert_eq!(compliance_score(&StatusCounts::default()), 100);
    }

    #[test]
    fn full_compliance_scores_hundred() {
        assert_eq!(compliance_score(&counts(7, 7)), 100);
    }

    #[test]
    fn score_rounds_half_away_from_zero() {
        // 1/3 -> 33.33 -> 33; 2/3 -> 66.67 -> 67; 1/8 -> 12.5 -> 13
        assert_eq!(compliance_score(&counts(1, 3)), 33);
        assert_eq!(compliance_score(&counts(2, 3)), 67);
        assert_eq!(compliance_score(&counts(1, 8)), 13);
    }

    #[test]
    fn single_status_change_moves_score_by_exact_increment() {
        let before = compliance_score(&counts(2, 5));
        let after = compliance_score(&counts(3, 5));
        assert_eq!(after - before, 20);
    }

    #[test]
    fn record_tallies_each_status_bucket() {
        let mut tally = StatusCounts::default();
        tally.record(RequirementStatus::Compliant);
        tally.record(RequirementStatus::NonCompliant);
        tally.record(RequirementStatus::NotAssessed);

        assert_eq!(tally.total_applicable, 3);
        assert_eq!(tally.compliant, 1);
        assert_eq!(tally.non_compliant, 1);
        assert_eq!(tally.not_assessed, 1);
    }
}
