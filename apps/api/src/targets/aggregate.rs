//! Section and overall aggregation.

use serde::Serialize;
use tracing::debug;

use crate::models::persona::{Goal, Persona, SectionKey, Stage};
use crate::targets::compiler::TargetCategory;
use crate::targets::evaluator::EvaluatedTarget;
use crate::targets::tables::{goal_definition, persona_definition, section_label, Label, SectionWeights};

/// Highest percent a section may report while a required target is unmet.
/// One below the `strong` tier threshold.
pub const REQUIRED_CAP: u32 = 69;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTier {
    Excellent,
    Strong,
    GettingThere,
    NeedsWork,
}

impl SectionTier {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            90.. => SectionTier::Excellent,
            70..=89 => SectionTier::Strong,
            40..=69 => SectionTier::GettingThere,
            _ => SectionTier::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionProgress {
    pub section: SectionKey,
    pub label: Label,
    pub percent: u32,
    pub tier: SectionTier,
    pub targets: Vec<EvaluatedTarget>,
}

impl SectionProgress {
    pub fn has_unmet_required(&self) -> bool {
        self.targets
            .iter()
            .any(|t| t.target.category == TargetCategory::Required && !t.met)
    }

    pub fn met_count(&self) -> usize {
        self.targets.iter().filter(|t| t.met).count()
    }
}

/// `round(num / den)` with halves rounded up; 0 when `den` is 0.
pub(crate) fn rounded_ratio(num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    (num * 2 + den) / (den * 2)
}

fn section_percent(targets: &[EvaluatedTarget]) -> u32 {
    let total: u64 = targets.iter().map(|t| u64::from(t.target.weight)).sum();
    let met: u64 = targets
        .iter()
        .filter(|t| t.met)
        .map(|t| u64::from(t.target.weight))
        .sum();

    let raw = rounded_ratio(met * 100, total).min(100) as u32;
    let gated = targets
        .iter()
        .any(|t| t.target.category == TargetCategory::Required && !t.met);
    if gated {
        raw.min(REQUIRED_CAP)
    } else {
        raw
    }
}

/// Groups evaluated targets by section. Only sections that own at least one
/// target appear, in canonical section order.
pub fn aggregate(evaluated: Vec<EvaluatedTarget>) -> Vec<SectionProgress> {
    let mut buckets: Vec<(SectionKey, Vec<EvaluatedTarget>)> =
        SectionKey::ALL.iter().map(|k| (*k, Vec::new())).collect();
    for target in evaluated {
        if let Some((_, bucket)) = buckets.iter_mut().find(|(k, _)| *k == target.target.section) {
            bucket.push(target);
        }
    }

    buckets
        .into_iter()
        .filter(|(_, targets)| !targets.is_empty())
        .map(|(section, targets)| {
            let percent = section_percent(&targets);
            debug!(%section, percent, targets = targets.len(), "section scored");
            SectionProgress {
                section,
                label: section_label(section),
                percent,
                tier: SectionTier::from_percent(percent),
                targets,
            }
        })
        .collect()
}

/// Stage base weights merged with the goal's sparse modifiers, floored at 0.
pub fn effective_weights(stage: Stage, goal: Goal) -> SectionWeights {
    persona_definition(stage)
        .section_weights
        .merge(goal_definition(goal).weight_modifiers)
}

/// Weighted mean of section percents using the persona's effective weights.
pub fn compute_weighted_overall(sections: &[SectionProgress], persona: &Persona) -> u32 {
    let weights = effective_weights(persona.stage, persona.goal);
    let (sum, total) = sections.iter().fold((0u64, 0u64), |(sum, total), s| {
        let w = u64::from(weights.get(s.section));
        (sum + u64::from(s.percent) * w, total + w)
    });
    rounded_ratio(sum, total) as u32
}

/// Unweighted mean, used when no persona is available.
pub fn compute_overall(sections: &[SectionProgress]) -> u32 {
    let sum: u64 = sections.iter().map(|s| u64::from(s.percent)).sum();
    rounded_ratio(sum, sections.len() as u64) as u32
}

pub fn overall_score(sections: &[SectionProgress], persona: Option<&Persona>) -> u32 {
    match persona {
        Some(persona) => compute_weighted_overall(sections, persona),
        None => compute_overall(sections),
    }
}
