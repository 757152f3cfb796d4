//! "Next best action" recommendation.

use serde::Serialize;

use crate::models::persona::{Goal, SectionKey, Stage};
use crate::targets::aggregate::{effective_weights, rounded_ratio, SectionProgress};
use crate::targets::tables::Label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextPriority {
    pub section: SectionKey,
    pub label: Label,
    pub percent: u32,
    /// effective weight × (100 − percent)
    pub marginal_gain: u32,
    /// Chosen from sections holding an unmet required target.
    pub gated_by_required: bool,
}

/// Picks the section whose improvement matters most. Sections with an unmet
/// required target always outrank the rest. Ties keep input order.
pub fn next_priority(sections: &[SectionProgress], stage: Stage, goal: Goal) -> Option<NextPriority> {
    let weights = effective_weights(stage, goal);

    let gated: Vec<&SectionProgress> = sections.iter().filter(|s| s.has_unmet_required()).collect();
    let gated_by_required = !gated.is_empty();
    let mut pool = if gated_by_required {
        gated
    } else {
        sections.iter().filter(|s| s.percent < 100).collect()
    };

    let gain = |s: &SectionProgress| weights.get(s.section) * (100 - s.percent.min(100));
    // stable, so equal gains stay in canonical section order
    pool.sort_by(|a, b| gain(b).cmp(&gain(a)));

    pool.first().map(|s| NextPriority {
        section: s.section,
        label: s.label,
        percent: s.percent,
        marginal_gain: gain(s),
        gated_by_required,
    })
}

/// Display-friendly share of the overall score a section could add:
/// `round((100 − percent) / section_count)`, never below 1.
pub fn gain_percent(percent: u32, section_count: usize) -> u32 {
    let shortfall = u64::from(100 - percent.min(100));
    (rounded_ratio(shortfall, section_count as u64) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::aggregate::SectionTier;
    use crate::targets::compiler::{CareerTarget, LocalizedText, TargetCategory};
    use crate::targets::evaluator::{EvaluatedTarget, TargetCheck};
    use crate::targets::tables::section_label;

    fn section(key: SectionKey, percent: u32, unmet_required: bool) -> SectionProgress {
        let text = LocalizedText {
            en: "t".into(),
            ar: "t".into(),
        };
        let targets = if unmet_required {
            vec![EvaluatedTarget {
                target: CareerTarget {
                    section: key,
                    requirement: text.clone(),
                    tip: text,
                    weight: 5,
                    category: TargetCategory::Required,
                    check: TargetCheck::ContactComplete,
                },
                met: false,
            }]
        } else {
            Vec::new()
        };
        SectionProgress {
            section: key,
            label: section_label(key),
            percent,
            tier: SectionTier::from_percent(percent),
            targets,
        }
    }

    #[test]
    fn test_required_gating_beats_marginal_gain() {
        let sections = vec![
            section(SectionKey::Languages, 60, true),
            section(SectionKey::Experience, 0, false),
        ];
        // experience has gain 30*100, languages only 3*40
        let pick = next_priority(&sections, Stage::Graduate, Goal::FullTime).unwrap();
        assert_eq!(pick.section, SectionKey::Languages);
        assert!(pick.gated_by_required);
        assert_eq!(pick.marginal_gain, 120);
    }

    #[test]
    fn test_highest_marginal_gain_wins() {
        let sections = vec![
            section(SectionKey::Education, 67, false),
            section(SectionKey::Certifications, 0, false),
            section(SectionKey::Languages, 100, false),
        ];
        let pick = next_priority(&sections, Stage::Graduate, Goal::FullTime).unwrap();
        assert_eq!(pick.section, SectionKey::Certifications);
        assert_eq!(pick.marginal_gain, 1000);
        assert!(!pick.gated_by_required);
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let sections = vec![
            section(SectionKey::Personal, 0, true),
            section(SectionKey::Summary, 0, true),
        ];
        let pick = next_priority(&sections, Stage::Freshman, Goal::PartTime).unwrap();
        assert_eq!(pick.section, SectionKey::Personal);
    }

    #[test]
    fn test_all_complete_returns_none() {
        let sections = vec![
            section(SectionKey::Personal, 100, false),
            section(SectionKey::Skills, 100, false),
        ];
        assert_eq!(next_priority(&sections, Stage::Student, Goal::Internship), None);
        assert_eq!(next_priority(&[], Stage::Student, Goal::Internship), None);
    }

    #[test]
    fn test_gain_percent() {
        assert_eq!(gain_percent(0, 8), 13);
        assert_eq!(gain_percent(67, 8), 4);
        assert_eq!(gain_percent(99, 8), 1);
        assert_eq!(gain_percent(100, 8), 1);
        assert_eq!(gain_percent(40, 0), 1);
    }
}
