use serde::{Deserialize, Serialize};

/// Everything the form layer collects. Absent fields deserialize to empty
/// values so no predicate has to special-case missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeContent {
    pub full_name: String,
    pub job_title: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    /// Free text, comma separated.
    pub skills: String,
    pub languages: Vec<LanguageEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Newline separated bullet points.
    pub bullets: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl ResumeContent {
    /// Largest number of entries in any repeated list.
    pub fn max_list_len(&self) -> usize {
        [
            self.experiences.len(),
            self.education.len(),
            self.certifications.len(),
            self.languages.len(),
            self.projects.len(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}
