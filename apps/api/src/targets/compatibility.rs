//! Stage × goal compatibility checks for the onboarding survey.

use serde::Serialize;

use crate::models::persona::{Goal, Stage};
use crate::targets::tables::{edge_case_rule, goal_definition, persona_definition, EdgeAction, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    /// False only for blocked combinations.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<EdgeAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Label>,
}

/// Side-effect free, so it is safe to call for every candidate option.
pub fn validate(stage: Stage, goal: Goal) -> Compatibility {
    match edge_case_rule(stage, goal) {
        None => Compatibility {
            valid: true,
            action: None,
            message: None,
        },
        Some(rule) => Compatibility {
            valid: rule.action != EdgeAction::Block,
            action: Some(rule.action),
            message: Some(rule.message),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalOption {
    pub goal: Goal,
    pub label: Label,
    /// Listed in the stage's allowed goals.
    pub allowed: bool,
    pub compatibility: Compatibility,
}

/// Every goal with its verdict for `stage`, in goal-table order.
pub fn goal_options(stage: Stage) -> Vec<GoalOption> {
    let allowed_goals = persona_definition(stage).allowed_goals;
    Goal::ALL
        .iter()
        .map(|&goal| GoalOption {
            goal,
            label: goal_definition(goal).label,
            allowed: allowed_goals.contains(&goal),
            compatibility: validate(stage, goal),
        })
        .collect()
}
