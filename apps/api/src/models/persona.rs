use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Career / education stage. Unknown strings resolve to `Student`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum Stage {
    Freshman,
    Student,
    Graduate,
}

/// Industry the user is targeting. Unknown strings resolve to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum Field {
    Technology,
    Business,
    Engineering,
    Healthcare,
    Creative,
    Law,
    Education,
    Other,
}

/// What the résumé is for. Unknown strings resolve to `PartTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "Option<String>")]
pub enum Goal {
    Volunteering,
    Internship,
    PartTime,
    FullTime,
}

/// The (stage, field, goal) triple a scoring pass runs against.
///
/// Persisted personas may predate the `field` key (`industry`) or miss an
/// axis entirely; each missing or null axis takes its fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub stage: Stage,
    #[serde(default, alias = "industry")]
    pub field: Field,
    #[serde(default)]
    pub goal: Goal,
}

/// One named division of a résumé. Declaration order is the canonical
/// enumeration order used for display and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Personal,
    Summary,
    Education,
    Skills,
    Projects,
    Experience,
    Certifications,
    Languages,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace('_', "-")
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Freshman, Stage::Student, Stage::Graduate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Freshman => "freshman",
            Stage::Student => "student",
            Stage::Graduate => "graduate",
        }
    }

    /// Strict parse, used where unknown input is a client error.
    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "freshman" => Some(Stage::Freshman),
            "student" => Some(Stage::Student),
            "graduate" => Some(Stage::Graduate),
            _ => None,
        }
    }

    /// Lenient parse for scoring: never fails.
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!(value, "unknown stage, falling back to student");
            Stage::Student
        })
    }
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Technology,
        Field::Business,
        Field::Engineering,
        Field::Healthcare,
        Field::Creative,
        Field::Law,
        Field::Education,
        Field::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Technology => "technology",
            Field::Business => "business",
            Field::Engineering => "engineering",
            Field::Healthcare => "healthcare",
            Field::Creative => "creative",
            Field::Law => "law",
            Field::Education => "education",
            Field::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "technology" | "tech" | "it" => Some(Field::Technology),
            "business" => Some(Field::Business),
            "engineering" => Some(Field::Engineering),
            "healthcare" | "health" => Some(Field::Healthcare),
            "creative" | "design" => Some(Field::Creative),
            "law" | "legal" => Some(Field::Law),
            "education" => Some(Field::Education),
            "other" => Some(Field::Other),
            _ => None,
        }
    }

    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!(value, "unknown field, falling back to other");
            Field::Other
        })
    }
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Volunteering,
        Goal::Internship,
        Goal::PartTime,
        Goal::FullTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Volunteering => "volunteering",
            Goal::Internship => "internship",
            Goal::PartTime => "part-time",
            Goal::FullTime => "full-time",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "volunteering" => Some(Goal::Volunteering),
            "internship" | "co-op" => Some(Goal::Internship),
            "part-time" | "parttime" => Some(Goal::PartTime),
            "full-time" | "fulltime" => Some(Goal::FullTime),
            _ => None,
        }
    }

    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!(value, "unknown goal, falling back to part-time");
            Goal::PartTime
        })
    }
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Personal,
        SectionKey::Summary,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Experience,
        SectionKey::Certifications,
        SectionKey::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Personal => "personal",
            SectionKey::Summary => "summary",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Experience => "experience",
            SectionKey::Certifications => "certifications",
            SectionKey::Languages => "languages",
        }
    }
}

impl From<Option<String>> for Stage {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Stage::resolve(&v)).unwrap_or_default()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Student
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Field::resolve(&v)).unwrap_or_default()
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Other
    }
}

impl From<Option<String>> for Goal {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Goal::resolve(&v)).unwrap_or_default()
    }
}

impl Default for Goal {
    fn default() -> Self {
        Goal::PartTime
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
