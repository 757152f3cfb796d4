//! Persona setup: what the onboarding flow shows once a persona is chosen.

use serde::Serialize;

use crate::models::persona::{Goal, Persona, SectionKey, Stage};
use crate::targets::aggregate::effective_weights;
use crate::targets::tables::{
    field_definition, goal_definition, persona_definition, AtsPriority, Label, SectionWeights,
    TemplateDecision, SECTION_ORDER_MATRIX, TEMPLATE_MATRIX,
};

/// Template for `(stage, goal)`. Falls back to the stage's part-time entry,
/// then to the stage's default template.
pub fn select_template(stage: Stage, goal: Goal) -> TemplateDecision {
    let lookup = |goal: Goal| {
        TEMPLATE_MATRIX
            .iter()
            .find(|(s, g, _)| *s == stage && *g == goal)
            .map(|(_, _, decision)| *decision)
    };
    lookup(goal)
        .or_else(|| lookup(Goal::PartTime))
        .unwrap_or_else(|| TemplateDecision {
            template: persona_definition(stage).default_template,
            reason: Label {
                en: "Default template for your stage",
                ar: "القالب الافتراضي لمرحلتك",
            },
        })
}

/// Display order of résumé sections, same fallback chain as [`select_template`].
pub fn section_order(stage: Stage, goal: Goal) -> [SectionKey; 8] {
    let lookup = |goal: Goal| {
        SECTION_ORDER_MATRIX
            .iter()
            .find(|(s, g, _)| *s == stage && *g == goal)
            .map(|(_, _, order)| *order)
    };
    lookup(goal)
        .or_else(|| lookup(Goal::PartTime))
        .unwrap_or(SectionKey::ALL)
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    pub en: &'static [&'static str],
    pub ar: &'static [&'static str],
}

/// Display names for each axis of a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaLabels {
    pub stage: Label,
    pub field: Label,
    pub goal: Label,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonaSetup {
    pub persona: Persona,
    pub labels: PersonaLabels,
    pub template: TemplateDecision,
    pub section_order: [SectionKey; 8],
    pub section_weights: SectionWeights,
    pub strengths: [Label; 3],
    pub summary_tone: Label,
    pub goal_tone: Label,
    pub ats_priority: AtsPriority,
    pub summary_length_min: usize,
    pub summary_length_ideal: usize,
    pub experience_expected: bool,
    pub suggested_skills: Suggestions,
    pub suggested_certifications: Suggestions,
    pub project_expectation: Label,
}

pub fn persona_setup(persona: Persona) -> PersonaSetup {
    let stage_def = persona_definition(persona.stage);
    let field_def = field_definition(persona.field);
    let goal_def = goal_definition(persona.goal);

    PersonaSetup {
        persona,
        labels: PersonaLabels {
            stage: stage_def.label,
            field: field_def.label,
            goal: goal_def.label,
        },
        template: select_template(persona.stage, persona.goal),
        section_order: section_order(persona.stage, persona.goal),
        section_weights: effective_weights(persona.stage, persona.goal),
        strengths: stage_def.strengths,
        summary_tone: stage_def.summary_tone,
        goal_tone: goal_def.tone,
        ats_priority: goal_def.ats_priority,
        summary_length_min: goal_def.summary_length_min,
        summary_length_ideal: goal_def.summary_length_ideal,
        experience_expected: goal_def.experience_expected,
        suggested_skills: Suggestions {
            en: field_def.skills_en,
            ar: field_def.skills_ar,
        },
        suggested_certifications: Suggestions {
            en: field_def.cert_suggestions_en,
            ar: field_def.cert_suggestions_ar,
        },
        project_expectation: field_def.project_expectation.for_stage(persona.stage),
    }
}
