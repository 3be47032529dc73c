//! Impact/effort matrix used to group initiatives on the portfolio view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Score1To5, UseCaseRecord};

const HIGH_SCORE_THRESHOLD: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// High impact, low effort
    QuickWins,
    /// High impact, high effort
    Strategic,
    /// Low impact, low effort
    FillIns,
    /// Low impact, high effort
    Reconsider,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWins,
        Quadrant::Strategic,
        Quadrant::FillIns,
        Quadrant::Reconsider,
    ];

    pub fn classify(impact: Score1To5, effort: Score1To5) -> Self {
        let high_impact = impact.as_f64() >= HIGH_SCORE_THRESHOLD;
        let high_effort = effort.as_f64() >= HIGH_SCORE_THRESHOLD;

        match (high_impact, high_effort) {
            (true, false) => Quadrant::QuickWins,
            (true, true) => Quadrant::Strategic,
            (false, false) => Quadrant::FillIns,
            (false, true) => Quadrant::Reconsider,
        }
    }

    pub fn of(use_case: &UseCaseRecord) -> Self {
        Self::classify(use_case.impact_score, use_case.effort_score)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::QuickWins => "Quick Wins",
            Quadrant::Strategic => "Strategic Projects",
            Quadrant::FillIns => "Fill-Ins",
            Quadrant::Reconsider => "Reconsider",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::QuickWins => "High Impact, Low Effort",
            Quadrant::Strategic => "High Impact, High Effort",
            Quadrant::FillIns => "Low Impact, Low Effort",
            Quadrant::Reconsider => "Low Impact, High Effort",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four quadrants in fixed order, members in input order.
pub fn group_by_quadrant(use_cases: &[UseCaseRecord]) -> Vec<(Quadrant, Vec<&UseCaseRecord>)> {
    Quadrant::ALL
        .iter()
        .map(|&quadrant| {
            let members = use_cases
                .iter()
                .filter(|uc| Quadrant::of(uc) == quadrant)
                .collect();
            (quadrant, members)
        })
        .collect()
}

/// Set `selected` on every member of `quadrant`; others are unchanged.
pub fn set_quadrant_selection(
    use_cases: &[UseCaseRecord],
    quadrant: Quadrant,
    selected: bool,
) -> Vec<UseCaseRecord> {
    use_cases
        .iter()
        .map(|uc| {
            if Quadrant::of(uc) == quadrant {
                UseCaseRecord {
                    selected,
                    ..uc.clone()
                }
            } else {
                uc.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, effort: i64, impact: i64) -> UseCaseRecord {
        UseCaseRecord::new(id, id).with_scores(effort, impact)
    }

    #[test]
    fn classify_splits_at_four() {
        let s = Score1To5::new;
        assert_eq!(Quadrant::classify(s(4), s(2)), Quadrant::QuickWins);
        assert_eq!(Quadrant::classify(s(5), s(4)), Quadrant::Strategic);
        assert_eq!(Quadrant::classify(s(3), s(3)), Quadrant::FillIns);
        assert_eq!(Quadrant::classify(s(1), s(5)), Quadrant::Reconsider);
    }

    #[test]
    fn grouping_covers_every_quadrant_in_order() {
        let records = vec![scored("a", 2, 4), scored("b", 5, 2), scored("c", 1, 5)];
        let groups = group_by_quadrant(&records);
        let order: Vec<Quadrant> = groups.iter().map(|(q, _)| *q).collect();
        assert_eq!(order, Quadrant::ALL.to_vec());
        let quick: Vec<&str> = groups[0].1.iter().map(|uc| uc.id.as_str()).collect();
        assert_eq!(quick, vec!["a", "c"]);
        assert!(groups[2].1.is_empty());
        assert_eq!(groups[3].1.len(), 1);
    }

    #[test]
    fn quadrant_selection_only_touches_members() {
        let records = vec![scored("quick", 1, 5), scored("avoid", 5, 1)];
        let updated = set_quadrant_selection(&records, Quadrant::Reconsider, false);
        assert!(updated[0].selected);
        assert!(!updated[1].selected);
    }
}
