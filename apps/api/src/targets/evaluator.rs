//! Rule evaluator: the predicates behind every career target.
//!
//! Every "is this filled in" decision goes through [`is_placeholder`], so a
//! bracketed template prompt such as `[Your Full Name]` scores exactly like an
//! empty field everywhere.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::resume::ResumeContent;
use crate::targets::compiler::CareerTarget;

/// True for empty/whitespace text and for text that is entirely one
/// `[...]` prompt with no nested brackets.
pub fn is_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|inner| !inner.contains(|c: char| c == '[' || c == ']'))
        .unwrap_or(false)
}

pub fn is_filled(text: &str) -> bool {
    !is_placeholder(text)
}

/// Lowercased, trimmed skill items. Placeholder items are dropped.
pub fn skills_list(content: &ResumeContent) -> Vec<String> {
    content
        .skills
        .split(|c: char| matches!(c, ',' | '،' | ';' | '\n'))
        .filter(|s| is_filled(s))
        .map(|s| s.trim().to_lowercase())
        .collect()
}

/// Number of distinct skill items that contain at least one keyword. A skill
/// hitting several overlapping keywords (`javascript` holds `java`) counts once.
pub fn count_matching_skills(skills: &[String], keywords: &[&str]) -> usize {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| keywords.iter().any(|k| s.contains(k.as_str())))
        .filter(|s| seen.insert(s.as_str()))
        .count()
}

/// `needle` occurs in `haystack` with no ASCII letter or digit directly on
/// either side, so `intern` does not match inside `international`.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bounded = |c: Option<char>| !c.is_some_and(|c| c.is_ascii_alphanumeric());
    haystack.match_indices(needle).any(|(i, m)| {
        bounded(haystack[..i].chars().next_back()) && bounded(haystack[i + m.len()..].chars().next())
    })
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .any(|k| contains_word(&text, &k.to_lowercase()))
}

fn filled_lowercase<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| is_filled(p))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn experience_text(content: &ResumeContent) -> String {
    filled_lowercase(content.experiences.iter().flat_map(|e| {
        [e.job_title.as_str(), e.company.as_str(), e.bullets.as_str()]
    }))
}

fn certification_text(content: &ResumeContent) -> String {
    filled_lowercase(
        content
            .certifications
            .iter()
            .flat_map(|c| [c.name.as_str(), c.issuer.as_str()]),
    )
}

/// The predicate of a career target, reified as data so compiled targets can
/// be compared, logged and serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetCheck {
    /// Name, email and phone all filled.
    ContactComplete,
    LinkedinUrl,
    SummaryMinLength { min_chars: usize },
    SummaryMentionsAny { keywords: &'static [&'static str] },
    EducationEntry,
    EducationDetails,
    SkillCount { min: usize },
    SoftSkillCount { keywords: &'static [&'static str], min: usize },
    SkillKeywordMatches { keywords: &'static [&'static str], min: usize },
    ProjectEntry,
    ProjectUrlContains { needle: &'static str },
    /// A personal website or any project link.
    PortfolioUrl,
    ExperienceEntry,
    ExperienceMentionsAny { keywords: &'static [&'static str] },
    CertificationEntry,
    CertificationMentionsAny { keywords: &'static [&'static str] },
    LanguageEntry,
}

impl TargetCheck {
    /// Pure function of `content`; never panics on missing data.
    pub fn is_met(&self, content: &ResumeContent) -> bool {
        match self {
            TargetCheck::ContactComplete => {
                is_filled(&content.full_name)
                    && is_filled(&content.email)
                    && is_filled(&content.phone)
            }
            TargetCheck::LinkedinUrl => {
                is_filled(&content.linkedin)
                    && content.linkedin.to_lowercase().contains("linkedin.com")
            }
            TargetCheck::SummaryMinLength { min_chars } => {
                is_filled(&content.summary)
                    && content.summary.trim().chars().count() >= *min_chars
            }
            TargetCheck::SummaryMentionsAny { keywords } => {
                is_filled(&content.summary) && mentions_any(&content.summary, keywords)
            }
            TargetCheck::EducationEntry => {
                content.education.iter().any(|e| is_filled(&e.institution))
            }
            TargetCheck::EducationDetails => content
                .education
                .iter()
                .any(|e| is_filled(&e.description) && e.description.trim().chars().count() > 5),
            TargetCheck::SkillCount { min } => skills_list(content).len() >= *min,
            TargetCheck::SoftSkillCount { keywords, min }
            | TargetCheck::SkillKeywordMatches { keywords, min } => {
                count_matching_skills(&skills_list(content), keywords) >= *min
            }
            TargetCheck::ProjectEntry => content.projects.iter().any(|p| is_filled(&p.name)),
            TargetCheck::ProjectUrlContains { needle } => content
                .projects
                .iter()
                .any(|p| is_filled(&p.url) && p.url.to_lowercase().contains(needle)),
            TargetCheck::PortfolioUrl => {
                is_filled(&content.website) || content.projects.iter().any(|p| is_filled(&p.url))
            }
            TargetCheck::ExperienceEntry => {
                content.experiences.iter().any(|e| is_filled(&e.company))
            }
            TargetCheck::ExperienceMentionsAny { keywords } => {
                mentions_any(&experience_text(content), keywords)
            }
            TargetCheck::CertificationEntry => {
                content.certifications.iter().any(|c| is_filled(&c.name))
            }
            TargetCheck::CertificationMentionsAny { keywords } => {
                mentions_any(&certification_text(content), keywords)
            }
            TargetCheck::LanguageEntry => content
                .languages
                .iter()
                .any(|l| is_filled(&l.name) && is_filled(&l.level)),
        }
    }
}

/// A compiled target annotated with its result for one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedTarget {
    #[serde(flatten)]
    pub target: CareerTarget,
    pub met: bool,
}

/// Runs every target's predicate against `content`. Order is preserved and
/// no target depends on another.
pub fn evaluate(targets: Vec<CareerTarget>, content: &ResumeContent) -> Vec<EvaluatedTarget> {
    targets
        .into_iter()
        .map(|target| {
            let met = target.check.is_met(content);
            EvaluatedTarget { target, met }
        })
        .collect()
}
