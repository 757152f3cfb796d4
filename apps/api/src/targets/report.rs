//! The full scoring pipeline: compile, evaluate, aggregate, recommend.

use serde::Serialize;
use tracing::debug;

use crate::models::persona::{Field, Goal, Persona, Stage};
use crate::models::resume::ResumeContent;
use crate::targets::aggregate::{aggregate, overall_score, SectionProgress};
use crate::targets::compiler::compile_targets;
use crate::targets::evaluator::evaluate;
use crate::targets::priority::{gain_percent, next_priority, NextPriority};

/// Persona used to compile targets when the caller has none.
pub const LEGACY_PERSONA: Persona = Persona {
    stage: Stage::Student,
    field: Field::Other,
    goal: Goal::PartTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Weighted,
    /// No persona: unweighted overall mean.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityRecommendation {
    #[serde(flatten)]
    pub priority: NextPriority,
    pub gain_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub mode: ScoringMode,
    pub persona: Persona,
    pub sections: Vec<SectionProgress>,
    pub overall: u32,
    pub next_priority: Option<PriorityRecommendation>,
    pub total_targets: usize,
    pub met_targets: usize,
    pub has_unmet_required: bool,
}

/// Scores `content`. A `None` persona runs in legacy mode.
pub fn build_report(persona: Option<Persona>, content: &ResumeContent) -> ProgressReport {
    let (mode, effective) = match persona {
        Some(p) => (ScoringMode::Weighted, p),
        None => (ScoringMode::Legacy, LEGACY_PERSONA),
    };

    let sections = aggregate(evaluate(compile_targets(&effective), content));
    let overall = overall_score(&sections, persona.as_ref());
    let next_priority = next_priority(&sections, effective.stage, effective.goal).map(|priority| {
        PriorityRecommendation {
            gain_percent: gain_percent(priority.percent, sections.len()),
            priority,
        }
    });

    let total_targets = sections.iter().map(|s| s.targets.len()).sum();
    let met_targets = sections.iter().map(SectionProgress::met_count).sum();
    let has_unmet_required = sections.iter().any(SectionProgress::has_unmet_required);

    debug!(
        ?mode,
        overall,
        met_targets,
        total_targets,
        "progress report built"
    );

    ProgressReport {
        mode,
        persona: effective,
        sections,
        overall,
        next_priority,
        total_targets,
        met_targets,
        has_unmet_required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::persona::SectionKey;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, LanguageEntry, ProjectEntry,
    };
    use crate::targets::aggregate::REQUIRED_CAP;
    use proptest::prelude::*;

    fn percents(report: &ProgressReport) -> Vec<(SectionKey, u32)> {
        report.sections.iter().map(|s| (s.section, s.percent)).collect()
    }

    fn graduate_resume() -> ResumeContent {
        ResumeContent {
            full_name: "Sara Al-Harbi".into(),
            job_title: "Software Engineer".into(),
            location: "Riyadh".into(),
            phone: "+966 50 000 0000".into(),
            email: "sara@example.com".into(),
            linkedin: "https://linkedin.com/in/sara".into(),
            summary: "Software engineering graduate seeking a full-time career building reliable web services."
                .into(),
            experiences: vec![ExperienceEntry {
                job_title: "Backend Intern".into(),
                company: "Acme Systems".into(),
                bullets: "Built REST endpoints".into(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                degree: "BSc Computer Science".into(),
                institution: "King Saud University".into(),
                ..Default::default()
            }],
            skills: "Python, SQL, Git, Docker, Teamwork, Communication".into(),
            languages: vec![LanguageEntry {
                name: "Arabic".into(),
                level: "Native".into(),
            }],
            projects: vec![ProjectEntry {
                name: "Graduation project: campus navigator".into(),
                description: "Indoor navigation app".into(),
                url: "https://github.com/sara/navigator".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_freshman_empty_resume_scenario() {
        let persona = Persona {
            stage: Stage::Freshman,
            field: Field::Other,
            goal: Goal::PartTime,
        };
        let report = build_report(Some(persona), &ResumeContent::default());

        assert_eq!(report.mode, ScoringMode::Weighted);
        assert_eq!(
            percents(&report),
            vec![
                (SectionKey::Personal, 0),
                (SectionKey::Summary, 0),
                (SectionKey::Education, 0),
                (SectionKey::Skills, 0),
                (SectionKey::Experience, 0),
                (SectionKey::Languages, 0),
            ]
        );
        assert_eq!(report.overall, 0);
        assert_eq!(report.met_targets, 0);
        assert_eq!(report.total_targets, 8);
        assert!(report.has_unmet_required);

        let next = report.next_priority.unwrap();
        assert_eq!(next.priority.section, SectionKey::Personal);
        assert!(next.priority.gated_by_required);
        assert_eq!(next.gain_percent, 17);
    }

    #[test]
    fn test_graduate_technology_full_time_scenario() {
        let persona = Persona {
            stage: Stage::Graduate,
            field: Field::Technology,
            goal: Goal::FullTime,
        };
        let report = build_report(Some(persona), &graduate_resume());

        assert!(!report.has_unmet_required);
        assert_eq!(
            percents(&report),
            vec![
                (SectionKey::Personal, 100),
                (SectionKey::Summary, 100),
                (SectionKey::Education, 67),
                (SectionKey::Skills, 100),
                (SectionKey::Projects, 100),
                (SectionKey::Experience, 100),
                (SectionKey::Certifications, 0),
                (SectionKey::Languages, 100),
            ]
        );
        // 9069 / 103
        assert_eq!(report.overall, 88);

        let next = report.next_priority.unwrap();
        assert_eq!(next.priority.section, SectionKey::Certifications);
        assert!(!next.priority.gated_by_required);
        assert_eq!(next.gain_percent, 13);
    }

    #[test]
    fn test_missing_persona_uses_legacy_mode() {
        let report = build_report(None, &graduate_resume());
        assert_eq!(report.mode, ScoringMode::Legacy);
        assert_eq!(report.persona, LEGACY_PERSONA);

        let sum: u32 = report.sections.iter().map(|s| s.percent).sum();
        let n = report.sections.len() as u32;
        assert_eq!(report.overall, (sum * 2 + n) / (n * 2));
    }

    #[test]
    fn test_complete_resume_has_no_priority() {
        let persona = Persona {
            stage: Stage::Freshman,
            field: Field::Other,
            goal: Goal::Volunteering,
        };
        let content = ResumeContent {
            full_name: "Omar".into(),
            email: "omar@example.com".into(),
            phone: "0500000000".into(),
            summary: "First-year student eager to volunteer with the community club.".into(),
            education: vec![EducationEntry {
                institution: "Qassim University".into(),
                ..Default::default()
            }],
            skills: "Communication, Teamwork, Leadership, Time Management".into(),
            experiences: vec![ExperienceEntry {
                job_title: "Volunteer".into(),
                company: "Red Crescent".into(),
                ..Default::default()
            }],
            languages: vec![LanguageEntry {
                name: "Arabic".into(),
                level: "Native".into(),
            }],
            ..Default::default()
        };
        let report = build_report(Some(persona), &content);
        assert!(report.sections.iter().all(|s| s.percent == 100));
        assert_eq!(report.overall, 100);
        assert_eq!(report.next_priority, None);
        assert_eq!(report.met_targets, report.total_targets);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(None, &ResumeContent::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "legacy");
        assert_eq!(json["persona"]["goal"], "part-time");
        assert_eq!(json["sections"][0]["section"], "personal");
        assert_eq!(json["sections"][0]["tier"], "needs_work");
        assert_eq!(json["sections"][0]["targets"][0]["met"], false);
        assert_eq!(json["sections"][0]["targets"][0]["check"]["kind"], "contact_complete");
        assert!(json["next_priority"]["gain_percent"].is_number());
        assert!(json["next_priority"]["section"].is_string());
    }

    // ── properties ─────────────────────────────────────────────────────────

    fn arb_text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            Just("[Your Full Name]".to_string()),
            Just("https://github.com/user/repo".to_string()),
            Just("https://linkedin.com/in/user".to_string()),
            Just("volunteer club, moot court, first aid".to_string()),
            "[a-zA-Z ,]{0,90}",
        ]
    }

    prop_compose! {
        fn arb_resume()(
            header in prop::collection::vec(arb_text(), 8),
            skills in prop_oneof![
                arb_text(),
                Just("Python, SQL, Git, Communication, Teamwork, Leadership, Excel".to_string()),
            ],
            experiences in prop::collection::vec((arb_text(), arb_text(), arb_text()), 0..3),
            education in prop::collection::vec((arb_text(), arb_text()), 0..3),
            certs in prop::collection::vec(arb_text(), 0..3),
            languages in prop::collection::vec((arb_text(), arb_text()), 0..3),
            projects in prop::collection::vec((arb_text(), arb_text()), 0..3),
        ) -> ResumeContent {
            ResumeContent {
                full_name: header[0].clone(),
                email: header[1].clone(),
                phone: header[2].clone(),
                location: header[3].clone(),
                linkedin: header[4].clone(),
                website: header[5].clone(),
                summary: format!("{} {}", header[6], header[7]),
                skills,
                experiences: experiences
                    .into_iter()
                    .map(|(job_title, company, bullets)| ExperienceEntry {
                        job_title,
                        company,
                        bullets,
                        ..Default::default()
                    })
                    .collect(),
                education: education
                    .into_iter()
                    .map(|(institution, description)| EducationEntry {
                        institution,
                        description,
                        ..Default::default()
                    })
                    .collect(),
                certifications: certs
                    .into_iter()
                    .map(|name| crate::models::resume::CertificationEntry {
                        name,
                        ..Default::default()
                    })
                    .collect(),
                languages: languages
                    .into_iter()
                    .map(|(name, level)| LanguageEntry { name, level })
                    .collect(),
                projects: projects
                    .into_iter()
                    .map(|(name, url)| ProjectEntry {
                        name,
                        url,
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            }
        }
    }

    fn arb_persona() -> impl Strategy<Value = Option<Persona>> {
        proptest::option::of(
            (
                prop::sample::select(Stage::ALL.to_vec()),
                prop::sample::select(Field::ALL.to_vec()),
                prop::sample::select(Goal::ALL.to_vec()),
            )
                .prop_map(|(stage, field, goal)| Persona { stage, field, goal }),
        )
    }

    proptest! {
        #[test]
        fn prop_pipeline_is_deterministic(persona in arb_persona(), content in arb_resume()) {
            prop_assert_eq!(build_report(persona, &content), build_report(persona, &content));
        }

        #[test]
        fn prop_percents_are_bounded(persona in arb_persona(), content in arb_resume()) {
            let report = build_report(persona, &content);
            prop_assert!(report.overall <= 100);
            for section in &report.sections {
                prop_assert!(section.percent <= 100);
                if section.has_unmet_required() {
                    prop_assert!(section.percent <= REQUIRED_CAP);
                }
            }
        }

        #[test]
        fn prop_required_sections_gate_priority(persona in arb_persona(), content in arb_resume()) {
            let report = build_report(persona, &content);
            if report.has_unmet_required {
                let next = report.next_priority.as_ref().map(|n| &n.priority);
                prop_assert!(next.is_some());
                let next = next.unwrap();
                prop_assert!(next.gated_by_required);
                let chosen = report.sections.iter().find(|s| s.section == next.section).unwrap();
                prop_assert!(chosen.has_unmet_required());
            }
        }

        #[test]
        fn prop_placeholder_scores_like_empty(persona in arb_persona(), content in arb_resume()) {
            let mut placeholder = content.clone();
            placeholder.full_name = "[Your Full Name]".into();
            placeholder.summary = "[Write a short summary]".into();
            placeholder.linkedin = "[LinkedIn URL]".into();
            let mut empty = content;
            empty.full_name = String::new();
            empty.summary = String::new();
            empty.linkedin = String::new();
            prop_assert_eq!(build_report(persona, &placeholder), build_report(persona, &empty));
        }
    }
}
