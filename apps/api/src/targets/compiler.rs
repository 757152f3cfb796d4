//! Rule compiler: turns a persona into its ordered list of career targets.
//!
//! Targets are assembled in strata: universal, stage-specific, then
//! field-specific. Goals contribute no targets of their own beyond the
//! universal "summary mentions a goal keyword" target; they only shift
//! section weights (see `aggregate::effective_weights`).

use serde::Serialize;
use tracing::debug;

use crate::models::persona::{Field, Persona, SectionKey, Stage};
use crate::targets::evaluator::TargetCheck;
use crate::targets::tables::{
    field_definition, goal_definition, persona_definition, FieldDefinition, GoalDefinition,
    Label, PersonaDefinition, FIRST_AID_CERT_KEYWORDS, LEGAL_TRAINING_KEYWORDS,
    SOFT_SKILL_KEYWORDS, VOLUNTEER_KEYWORDS,
};

const SUMMARY_MIN_CHARS: usize = 30;
const GRADUATE_SUMMARY_MIN_CHARS: usize = 60;
const FRESHMAN_SOFT_SKILLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCategory {
    /// Gates the section: while unmet, the section is capped below "strong".
    Required,
    Recommended,
    Bonus,
}

/// Owned bilingual text; target texts are sometimes formatted per persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl From<Label> for LocalizedText {
    fn from(label: Label) -> Self {
        Self {
            en: label.en.to_string(),
            ar: label.ar.to_string(),
        }
    }
}

impl From<(String, String)> for LocalizedText {
    fn from((en, ar): (String, String)) -> Self {
        Self { en, ar }
    }
}

/// One weighted, categorized scoring rule tied to a résumé section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerTarget {
    pub section: SectionKey,
    pub requirement: LocalizedText,
    pub tip: LocalizedText,
    /// 1 (minor) to 5 (critical).
    pub weight: u8,
    pub category: TargetCategory,
    pub check: TargetCheck,
}

fn target(
    section: SectionKey,
    category: TargetCategory,
    weight: u8,
    requirement: impl Into<LocalizedText>,
    tip: impl Into<LocalizedText>,
    check: TargetCheck,
) -> CareerTarget {
    CareerTarget {
        section,
        requirement: requirement.into(),
        tip: tip.into(),
        weight,
        category,
        check,
    }
}

fn required_if(flag: bool) -> TargetCategory {
    if flag {
        TargetCategory::Required
    } else {
        TargetCategory::Recommended
    }
}

/// Compiles the full target list for `persona`. Pure: the same persona always
/// yields an element-wise identical list.
pub fn compile_targets(persona: &Persona) -> Vec<CareerTarget> {
    let stage_def = persona_definition(persona.stage);
    let field_def = field_definition(persona.field);
    let goal_def = goal_definition(persona.goal);

    let mut targets = universal_targets(stage_def, goal_def);
    targets.extend(stage_targets(persona, stage_def, field_def));
    targets.extend(field_targets(persona, field_def));

    debug!(
        stage = %persona.stage,
        field = %persona.field,
        goal = %persona.goal,
        count = targets.len(),
        "compiled career targets"
    );
    targets
}

fn universal_targets(stage_def: &PersonaDefinition, goal_def: &GoalDefinition) -> Vec<CareerTarget> {
    vec![
        target(
            SectionKey::Personal,
            TargetCategory::Required,
            5,
            Label {
                en: "Complete your contact information",
                ar: "أكمل معلومات الاتصال",
            },
            Label {
                en: "Include name, email, phone, and city at minimum.",
                ar: "أضف الاسم والبريد والهاتف والمدينة كحد أدنى.",
            },
            TargetCheck::ContactComplete,
        ),
        target(
            SectionKey::Summary,
            TargetCategory::Required,
            5,
            (
                format!("Write a professional summary (≥{SUMMARY_MIN_CHARS} characters)"),
                format!("اكتب ملخصاً مهنياً ({SUMMARY_MIN_CHARS} حرف على الأقل)"),
            ),
            Label {
                en: "A strong summary increases recruiter interest by 40%. Mention your goal and top skills.",
                ar: "الملخص القوي يزيد اهتمام المسؤولين بنسبة 40%. اذكر هدفك وأبرز مهاراتك.",
            },
            TargetCheck::SummaryMinLength {
                min_chars: SUMMARY_MIN_CHARS,
            },
        ),
        target(
            SectionKey::Summary,
            stage_def.goal_keyword_category,
            3,
            (
                format!("Mention your goal ({}) in your summary", goal_def.label.en),
                format!("اذكر هدفك ({}) في ملخصك", goal_def.label.ar),
            ),
            goal_def.tone,
            TargetCheck::SummaryMentionsAny {
                keywords: goal_def.summary_keywords,
            },
        ),
        target(
            SectionKey::Education,
            TargetCategory::Recommended,
            4,
            Label {
                en: "Add at least 1 education entry",
                ar: "أضف مؤهل تعليمي واحد على الأقل",
            },
            Label {
                en: "Education is the most important section for students. Include your GPA if above 3.0.",
                ar: "التعليم هو أهم قسم للطلاب. أضف معدلك التراكمي إذا كان أعلى من 3.0.",
            },
            TargetCheck::EducationEntry,
        ),
        target(
            SectionKey::Languages,
            TargetCategory::Recommended,
            2,
            Label {
                en: "Add at least 1 language with proficiency level",
                ar: "أضف لغة واحدة مع مستوى الإتقان",
            },
            Label {
                en: "Bilingual candidates stand out. Include Arabic and English with IELTS/TOEFL scores if available.",
                ar: "المرشحون ثنائيو اللغة يتميزون. أضف العربية والإنجليزية مع درجات IELTS/TOEFL إن وجدت.",
            },
            TargetCheck::LanguageEntry,
        ),
    ]
}

fn stage_targets(
    persona: &Persona,
    stage_def: &PersonaDefinition,
    field_def: &FieldDefinition,
) -> Vec<CareerTarget> {
    let project_tip: LocalizedText = field_def.project_expectation.for_stage(persona.stage).into();

    match persona.stage {
        Stage::Freshman => vec![
            min_skills_target(stage_def.min_skills),
            target(
                SectionKey::Skills,
                TargetCategory::Recommended,
                4,
                (
                    format!("List at least {FRESHMAN_SOFT_SKILLS} soft skills"),
                    format!("أضف {FRESHMAN_SOFT_SKILLS} مهارات شخصية على الأقل"),
                ),
                Label {
                    en: "Without work history, soft skills like communication and teamwork carry your résumé.",
                    ar: "بدون خبرة عملية، المهارات الشخصية مثل التواصل والعمل الجماعي هي ما يميز سيرتك.",
                },
                TargetCheck::SoftSkillCount {
                    keywords: SOFT_SKILL_KEYWORDS,
                    min: FRESHMAN_SOFT_SKILLS,
                },
            ),
            target(
                SectionKey::Experience,
                TargetCategory::Recommended,
                3,
                Label {
                    en: "Add volunteer work or club activities",
                    ar: "أضف عمل تطوعي أو أنشطة أندية",
                },
                Label {
                    en: "Since you don't have formal experience yet, listing 2 volunteer activities will increase your chances by 40%.",
                    ar: "بما أنك لا تملك خبرة رسمية بعد، إضافة نشاطين تطوعيين سيزيد فرصك بنسبة 40%.",
                },
                TargetCheck::ExperienceMentionsAny {
                    keywords: VOLUNTEER_KEYWORDS,
                },
            ),
        ],
        Stage::Student => vec![
            min_skills_target(stage_def.min_skills),
            target(
                SectionKey::Projects,
                required_if(stage_def.projects_required),
                if persona.field == Field::Technology { 5 } else { 4 },
                Label {
                    en: "Add at least 1 project",
                    ar: "أضف مشروع واحد على الأقل",
                },
                project_tip,
                TargetCheck::ProjectEntry,
            ),
            education_details_target(),
            certification_target(),
        ],
        Stage::Graduate => vec![
            target(
                SectionKey::Experience,
                required_if(stage_def.experience_required),
                5,
                Label {
                    en: "Add at least 1 work experience or internship",
                    ar: "أضف خبرة عملية أو تدريب واحد على الأقل",
                },
                Label {
                    en: "Even short internships count. Include co-op training or part-time roles.",
                    ar: "حتى التدريبات القصيرة مهمة. أضف التدريب التعاوني أو العمل الجزئي.",
                },
                TargetCheck::ExperienceEntry,
            ),
            target(
                SectionKey::Personal,
                TargetCategory::Recommended,
                3,
                Label {
                    en: "Add your LinkedIn profile URL",
                    ar: "أضف رابط حسابك في LinkedIn",
                },
                Label {
                    en: "Recruiters check LinkedIn for most graduate hires. Keep it consistent with your résumé.",
                    ar: "مسؤولو التوظيف يراجعون LinkedIn لأغلب الخريجين. اجعله متوافقاً مع سيرتك.",
                },
                TargetCheck::LinkedinUrl,
            ),
            target(
                SectionKey::Summary,
                TargetCategory::Recommended,
                3,
                (
                    format!("Expand your summary to at least {GRADUATE_SUMMARY_MIN_CHARS} characters"),
                    format!("وسّع ملخصك إلى {GRADUATE_SUMMARY_MIN_CHARS} حرفاً على الأقل"),
                ),
                stage_def.summary_tone,
                TargetCheck::SummaryMinLength {
                    min_chars: GRADUATE_SUMMARY_MIN_CHARS,
                },
            ),
            min_skills_target(stage_def.min_skills),
            target(
                SectionKey::Projects,
                required_if(stage_def.projects_required),
                4,
                Label {
                    en: "Add your graduation project",
                    ar: "أضف مشروع التخرج",
                },
                project_tip,
                TargetCheck::ProjectEntry,
            ),
            education_details_target(),
            certification_target(),
        ],
    }
}

fn min_skills_target(min: usize) -> CareerTarget {
    target(
        SectionKey::Skills,
        TargetCategory::Recommended,
        4,
        (
            format!("List at least {min} skills"),
            format!("أضف {min} مهارات على الأقل"),
        ),
        Label {
            en: "Include a mix of technical and soft skills relevant to your field.",
            ar: "أضف مزيجاً من المهارات التقنية والشخصية المتعلقة بتخصصك.",
        },
        TargetCheck::SkillCount { min },
    )
}

fn education_details_target() -> CareerTarget {
    target(
        SectionKey::Education,
        TargetCategory::Bonus,
        2,
        Label {
            en: "Include degree details or GPA",
            ar: "أضف تفاصيل الدرجة أو المعدل التراكمي",
        },
        Label {
            en: "Adding GPA or honors distinguishes you from other candidates.",
            ar: "إضافة المعدل أو مرتبة الشرف يميزك عن المرشحين الآخرين.",
        },
        TargetCheck::EducationDetails,
    )
}

fn certification_target() -> CareerTarget {
    target(
        SectionKey::Certifications,
        TargetCategory::Bonus,
        2,
        Label {
            en: "Add at least 1 certification (optional but recommended)",
            ar: "أضف شهادة واحدة (اختياري لكن مُوصى به)",
        },
        Label {
            en: "Online certifications from Coursera, Udemy, or Google show continuous learning.",
            ar: "الشهادات من Coursera أو Udemy أو Google تُظهر التعلم المستمر.",
        },
        TargetCheck::CertificationEntry,
    )
}

fn field_targets(persona: &Persona, field_def: &FieldDefinition) -> Vec<CareerTarget> {
    let mut targets = Vec::new();

    if field_def.min_required_skill_matches > 0 {
        targets.push(target(
            SectionKey::Skills,
            TargetCategory::Required,
            4,
            field_def.skill_requirement,
            Label {
                en: "ATS systems scan for industry-specific keywords. Add relevant tools to pass automated screening.",
                ar: "أنظمة ATS تفحص الكلمات المفتاحية المتخصصة. أضف الأدوات المناسبة لتجاوز الفحص التلقائي.",
            },
            TargetCheck::SkillKeywordMatches {
                keywords: field_def.required_skill_keywords,
                min: field_def.min_required_skill_matches,
            },
        ));
    }

    match (field_def.id, persona.stage) {
        (Field::Technology, Stage::Student | Stage::Graduate) => targets.push(target(
            SectionKey::Projects,
            TargetCategory::Required,
            3,
            Label {
                en: "Link a GitHub repository in one of your projects",
                ar: "أضف رابط GitHub لأحد مشاريعك",
            },
            Label {
                en: "Most IT recruiters look for at least one GitHub project at your level.",
                ar: "أغلب مسؤولي التوظيف في التقنية يبحثون عن مشروع واحد على الأقل في GitHub.",
            },
            TargetCheck::ProjectUrlContains {
                needle: "github.com",
            },
        )),
        (Field::Healthcare, Stage::Student) => targets.push(target(
            SectionKey::Certifications,
            TargetCategory::Recommended,
            3,
            Label {
                en: "Add a BLS or first-aid certification",
                ar: "أضف شهادة BLS أو إسعافات أولية",
            },
            Label {
                en: "Clinical placements usually ask for a valid BLS/CPR card.",
                ar: "التدريب السريري يتطلب عادةً بطاقة BLS/CPR سارية.",
            },
            TargetCheck::CertificationMentionsAny {
                keywords: FIRST_AID_CERT_KEYWORDS,
            },
        )),
        (Field::Law, Stage::Graduate) => targets.push(target(
            SectionKey::Experience,
            TargetCategory::Recommended,
            3,
            Label {
                en: "Include Summer Training or Moot Court",
                ar: "أضف التدريب الصيفي أو المحكمة الصورية",
            },
            Label {
                en: "Law firms highly value moot court and summer training experiences.",
                ar: "مكاتب المحاماة تقدر كثيراً تجارب المحكمة الصورية والتدريب الصيفي.",
            },
            TargetCheck::ExperienceMentionsAny {
                keywords: LEGAL_TRAINING_KEYWORDS,
            },
        )),
        _ => {}
    }

    if field_def.id == Field::Creative {
        targets.push(target(
            SectionKey::Projects,
            TargetCategory::Required,
            4,
            Label {
                en: "Add a portfolio link (website or project URL)",
                ar: "أضف رابط معرض أعمالك (موقع أو رابط مشروع)",
            },
            Label {
                en: "Design recruiters judge the portfolio first. Behance, Dribbble or a personal site all work.",
                ar: "مسؤولو التوظيف في التصميم يبدؤون بمعرض الأعمال. Behance أو Dribbble أو موقع شخصي كلها مناسبة.",
            },
            TargetCheck::PortfolioUrl,
        ));
    }

    targets
}
