//! Configuration tables: static persona, field, goal, edge-case, template and
//! section-order data.
//!
//! Tables are plain `static` slices keyed by the enums in `models::persona`.
//! Lookups never fail: a key missing from a table falls back to that table's
//! default entry. Consistency is checked once at startup by [`validate_tables`];
//! an inconsistency there is a programming error and aborts the process.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::persona::SectionKey::{
    Certifications as Cer, Education as Edu, Experience as Exp, Languages as Lan,
    Personal as Per, Projects as Pro, Skills as Ski, Summary as Sum,
};
use crate::models::persona::{Field, Goal, Persona, SectionKey, Stage};
use crate::targets::compiler::{compile_targets, TargetCategory};

// ────────────────────────────────────────────────────────────────────────────
// Record types
// ────────────────────────────────────────────────────────────────────────────

/// A static bilingual string pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub en: &'static str,
    pub ar: &'static str,
}

const fn label(en: &'static str, ar: &'static str) -> Label {
    Label { en, ar }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateName {
    Starter,
    Academic,
    Professional,
}

/// Informational only; never feeds into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeAction {
    Block,
    Warn,
}

/// Relative per-section weights. They need not sum to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionWeights {
    pub personal: u32,
    pub summary: u32,
    pub education: u32,
    pub skills: u32,
    pub projects: u32,
    pub experience: u32,
    pub certifications: u32,
    pub languages: u32,
}

impl SectionWeights {
    pub fn get(&self, key: SectionKey) -> u32 {
        match key {
            SectionKey::Personal => self.personal,
            SectionKey::Summary => self.summary,
            SectionKey::Education => self.education,
            SectionKey::Skills => self.skills,
            SectionKey::Projects => self.projects,
            SectionKey::Experience => self.experience,
            SectionKey::Certifications => self.certifications,
            SectionKey::Languages => self.languages,
        }
    }

    fn slot(&mut self, key: SectionKey) -> &mut u32 {
        match key {
            SectionKey::Personal => &mut self.personal,
            SectionKey::Summary => &mut self.summary,
            SectionKey::Education => &mut self.education,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Projects => &mut self.projects,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Certifications => &mut self.certifications,
            SectionKey::Languages => &mut self.languages,
        }
    }

    /// Applies sparse signed deltas on top of these base weights. Sections
    /// without a delta keep their base weight; results are floored at zero.
    pub fn merge(&self, modifiers: &[(SectionKey, i32)]) -> SectionWeights {
        let mut merged = *self;
        for &(key, delta) in modifiers {
            let slot = merged.slot(key);
            *slot = (i64::from(*slot) + i64::from(delta)).max(0) as u32;
        }
        merged
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PersonaDefinition {
    pub id: Stage,
    pub label: Label,
    pub allowed_goals: &'static [Goal],
    pub default_template: TemplateName,
    pub section_weights: SectionWeights,
    pub strengths: [Label; 3],
    pub summary_tone: Label,
    pub min_skills: usize,
    pub experience_required: bool,
    pub projects_required: bool,
    /// Category of the "summary mentions a goal keyword" target for this stage.
    pub goal_keyword_category: TargetCategory,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectExpectation {
    pub freshman: Label,
    pub student: Label,
    pub graduate: Label,
}

impl ProjectExpectation {
    pub fn for_stage(&self, stage: Stage) -> Label {
        match stage {
            Stage::Freshman => self.freshman,
            Stage::Student => self.student,
            Stage::Graduate => self.graduate,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    pub id: Field,
    pub label: Label,
    pub skills_en: &'static [&'static str],
    pub skills_ar: &'static [&'static str],
    pub cert_suggestions_en: &'static [&'static str],
    pub cert_suggestions_ar: &'static [&'static str],
    /// Lowercase keywords matched against the user's skill list.
    pub required_skill_keywords: &'static [&'static str],
    pub min_required_skill_matches: usize,
    pub skill_requirement: Label,
    pub project_expectation: ProjectExpectation,
}

#[derive(Debug, Clone, Copy)]
pub struct GoalDefinition {
    pub id: Goal,
    pub label: Label,
    pub ats_priority: AtsPriority,
    pub summary_length_min: usize,
    pub summary_length_ideal: usize,
    pub experience_expected: bool,
    pub tone: Label,
    pub weight_modifiers: &'static [(SectionKey, i32)],
    /// Lowercase keywords a goal-appropriate summary mentions.
    pub summary_keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EdgeCaseRule {
    pub stage: Stage,
    pub goal: Goal,
    pub action: EdgeAction,
    pub message: Label,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateDecision {
    pub template: TemplateName,
    pub reason: Label,
}

// ────────────────────────────────────────────────────────────────────────────
// Section labels
// ────────────────────────────────────────────────────────────────────────────

pub static SECTION_LABELS: &[(SectionKey, Label)] = &[
    (SectionKey::Personal, label("Personal Info", "المعلومات الشخصية")),
    (SectionKey::Summary, label("Summary", "الملخص")),
    (SectionKey::Education, label("Education", "التعليم")),
    (SectionKey::Skills, label("Skills", "المهارات")),
    (SectionKey::Projects, label("Projects", "المشاريع")),
    (SectionKey::Experience, label("Experience", "الخبرات")),
    (SectionKey::Certifications, label("Certifications", "الشهادات")),
    (SectionKey::Languages, label("Languages", "اللغات")),
];

// ────────────────────────────────────────────────────────────────────────────
// Persona (stage) table
// ────────────────────────────────────────────────────────────────────────────

pub static PERSONAS: &[PersonaDefinition] = &[
    PersonaDefinition {
        id: Stage::Freshman,
        label: label("Freshman", "مستجد"),
        allowed_goals: &[Goal::Volunteering, Goal::PartTime],
        default_template: TemplateName::Starter,
        section_weights: SectionWeights {
            personal: 10,
            summary: 10,
            education: 25,
            skills: 25,
            projects: 10,
            experience: 5,
            certifications: 10,
            languages: 5,
        },
        strengths: [
            label("High Potential & Eagerness to Learn", "إمكانيات عالية وشغف بالتعلم"),
            label("Fast Learner & Adaptable", "سرعة تعلّم وقدرة على التكيّف"),
            label("Extracurricular & Leadership Mindset", "عقلية قيادية ونشاط لا منهجي"),
        ],
        summary_tone: label(
            "Enthusiastic and eager; highlight potential and willingness to learn",
            "متحمس وشغوف؛ أبرز الإمكانيات والرغبة في التعلم",
        ),
        min_skills: 3,
        experience_required: false,
        projects_required: false,
        goal_keyword_category: TargetCategory::Recommended,
    },
    PersonaDefinition {
        id: Stage::Student,
        label: label("University Student", "طالب جامعي"),
        allowed_goals: &[Goal::Volunteering, Goal::Internship, Goal::PartTime, Goal::FullTime],
        default_template: TemplateName::Academic,
        section_weights: SectionWeights {
            personal: 10,
            summary: 10,
            education: 20,
            skills: 20,
            projects: 15,
            experience: 10,
            certifications: 10,
            languages: 5,
        },
        strengths: [
            label("Academic Excellence & Strong GPA", "تميّز أكاديمي ومعدل تراكمي قوي"),
            label("Project-based Practical Experience", "خبرة عملية من خلال المشاريع"),
            label("Solid Technical Foundation", "أساس تقني متين"),
        ],
        summary_tone: label(
            "Confident and academic; emphasize projects and technical skills",
            "واثق وأكاديمي؛ أبرز المشاريع والمهارات التقنية",
        ),
        min_skills: 5,
        experience_required: false,
        projects_required: true,
        goal_keyword_category: TargetCategory::Recommended,
    },
    PersonaDefinition {
        id: Stage::Graduate,
        label: label("Fresh Graduate", "خريج حديث"),
        allowed_goals: &[Goal::Volunteering, Goal::Internship, Goal::PartTime, Goal::FullTime],
        default_template: TemplateName::Professional,
        section_weights: SectionWeights {
            personal: 10,
            summary: 15,
            education: 10,
            skills: 15,
            projects: 10,
            experience: 25,
            certifications: 10,
            languages: 5,
        },
        strengths: [
            label("Professional Readiness & Confidence", "جاهزية مهنية وثقة عالية"),
            label("Specialized Knowledge in Field", "معرفة متخصصة في المجال"),
            label("Strong Career Motivation", "دافع مهني قوي"),
        ],
        summary_tone: label(
            "Professional and results-oriented; highlight specialization and career drive",
            "مهني وموجه نحو النتائج؛ أبرز التخصص والدافع المهني",
        ),
        min_skills: 6,
        experience_required: true,
        projects_required: true,
        goal_keyword_category: TargetCategory::Required,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Field (industry) table
// ────────────────────────────────────────────────────────────────────────────

pub static FIELDS: &[FieldDefinition] = &[
    FieldDefinition {
        id: Field::Technology,
        label: label("Information Technology", "تقنية المعلومات"),
        skills_en: &["Programming", "Python", "JavaScript", "TypeScript", "SQL", "Git", "Data Structures", "Web Development", "Problem Solving", "Cloud Basics", "Agile/Scrum", "REST APIs"],
        skills_ar: &["برمجة", "Python", "JavaScript", "TypeScript", "SQL", "Git", "هياكل بيانات", "تطوير ويب", "حل مشكلات", "أساسيات سحابية", "Agile/Scrum", "REST APIs"],
        cert_suggestions_en: &["AWS Cloud Practitioner", "Google IT Support Professional", "CompTIA A+", "Meta Front-End Developer", "IBM Data Science"],
        cert_suggestions_ar: &["AWS Cloud Practitioner", "شهادة دعم تقنية المعلومات من Google", "CompTIA A+", "مطور واجهات أمامية من Meta", "علوم البيانات من IBM"],
        required_skill_keywords: &["programming", "python", "javascript", "java", "sql", "git", "web development", "react", "c++"],
        min_required_skill_matches: 2,
        skill_requirement: label(
            "Include at least 2 programming languages or core tools",
            "أضف لغتي برمجة أو أداتين أساسيتين على الأقل",
        ),
        project_expectation: ProjectExpectation {
            freshman: label(
                "A simple personal project or class assignment (e.g., a calculator app or personal website)",
                "مشروع شخصي بسيط أو واجب دراسي (مثلاً: آلة حاسبة أو موقع شخصي)",
            ),
            student: label(
                "A technical project with real-world application (e.g., a web app, mobile app, or data analysis project)",
                "مشروع تقني بتطبيق واقعي (مثلاً: تطبيق ويب، تطبيق جوال، أو مشروع تحليل بيانات)",
            ),
            graduate: label(
                "A capstone or graduation project demonstrating full-stack capability or specialized expertise",
                "مشروع تخرج يُظهر قدرة متكاملة في التطوير أو خبرة متخصصة",
            ),
        },
    },
    FieldDefinition {
        id: Field::Business,
        label: label("Business Administration", "إدارة الأعمال"),
        skills_en: &["Financial Analysis", "Excel", "Power BI", "Market Research", "Strategic Planning", "Communication", "Project Management", "Budgeting", "Presentation Skills", "Business Writing", "CRM Systems"],
        skills_ar: &["تحليل مالي", "Excel", "Power BI", "بحث السوق", "تخطيط استراتيجي", "تواصل", "إدارة مشاريع", "إعداد ميزانيات", "مهارات عرض", "كتابة تجارية", "أنظمة CRM"],
        cert_suggestions_en: &["SOCPA (Saudi Organization for Certified Public Accountants)", "PMP — Project Management Professional", "CFA Level I", "Google Data Analytics", "HubSpot Marketing"],
        cert_suggestions_ar: &["الهيئة السعودية للمحاسبين القانونيين (SOCPA)", "PMP — إدارة مشاريع احترافية", "CFA المستوى الأول", "تحليل بيانات من Google", "تسويق HubSpot"],
        required_skill_keywords: &["excel", "financial analysis", "market research", "project management", "accounting", "marketing", "تسويق", "محاسبة"],
        min_required_skill_matches: 1,
        skill_requirement: label(
            "Include business tools (Excel, financial analysis)",
            "أضف أدوات الأعمال (Excel، تحليل مالي)",
        ),
        project_expectation: ProjectExpectation {
            freshman: label("A group class project or case study analysis", "مشروع جماعي دراسي أو تحليل دراسة حالة"),
            student: label(
                "A market research report, business plan, or data-driven analysis project",
                "تقرير بحث سوقي، خطة عمل، أو مشروع تحليل مبني على البيانات",
            ),
            graduate: label(
                "A comprehensive capstone project such as a feasibility study or strategic business plan",
                "مشروع تخرج شامل مثل دراسة جدوى أو خطة عمل استراتيجية",
            ),
        },
    },
    FieldDefinition {
        id: Field::Engineering,
        label: label("Engineering", "الهندسة"),
        skills_en: &["AutoCAD", "SolidWorks", "MATLAB", "Technical Drawing", "Project Management", "Quality Control", "Process Design", "Safety Standards", "Problem Solving", "3D Modeling", "Simulation"],
        skills_ar: &["AutoCAD", "SolidWorks", "MATLAB", "رسم تقني", "إدارة مشاريع", "مراقبة جودة", "تصميم عمليات", "معايير سلامة", "حل مشكلات", "نمذجة ثلاثية الأبعاد", "محاكاة"],
        cert_suggestions_en: &["Saudi Council of Engineers Membership", "PMP — Project Management Professional", "Six Sigma Green Belt", "OSHA Safety Certification", "AutoCAD Certified Professional"],
        cert_suggestions_ar: &["عضوية الهيئة السعودية للمهندسين", "PMP — إدارة مشاريع احترافية", "Six Sigma الحزام الأخضر", "شهادة سلامة OSHA", "AutoCAD معتمد"],
        required_skill_keywords: &["autocad", "solidworks", "matlab", "technical drawing", "safety", "quality control"],
        min_required_skill_matches: 2,
        skill_requirement: label(
            "Include engineering tools (AutoCAD, MATLAB, etc.)",
            "أضف أدوات هندسية (AutoCAD, MATLAB...)",
        ),
        project_expectation: ProjectExpectation {
            freshman: label("A basic engineering design assignment or lab project", "واجب تصميم هندسي أساسي أو مشروع مختبر"),
            student: label(
                "A hands-on design or simulation project (e.g., bridge model, circuit design, process optimization)",
                "مشروع تصميم أو محاكاة عملي (مثلاً: نموذج جسر، تصميم دائرة، تحسين عمليات)",
            ),
            graduate: label(
                "A senior design project or capstone demonstrating engineering judgment and professional standards",
                "مشروع تخرج يُظهر الحكم الهندسي والالتزام بالمعايير المهنية",
            ),
        },
    },
    FieldDefinition {
        id: Field::Healthcare,
        label: label("Health Sciences", "العلوم الصحية"),
        skills_en: &["Patient Care", "Clinical Research", "BLS/CPR", "Medical Terminology", "Electronic Health Records", "Lab Skills", "Data Analysis", "Health & Safety", "First Aid", "Infection Control", "HIPAA Compliance"],
        skills_ar: &["رعاية المرضى", "بحث سريري", "BLS/CPR", "مصطلحات طبية", "سجلات صحية إلكترونية", "مهارات مخبرية", "تحليل بيانات", "صحة وسلامة", "إسعافات أولية", "مكافحة العدوى", "الامتثال لـ HIPAA"],
        cert_suggestions_en: &["SCFHS Registration (Saudi Commission for Health Specialties)", "BLS — Basic Life Support", "ACLS — Advanced Cardiac Life Support", "Clinical Research Certification", "Infection Control Certificate"],
        cert_suggestions_ar: &["تسجيل الهيئة السعودية للتخصصات الصحية (SCFHS)", "BLS — إنعاش القلب الأساسي", "ACLS — إنعاش القلب المتقدم", "شهادة بحث سريري", "شهادة مكافحة عدوى"],
        required_skill_keywords: &["patient care", "clinical research", "medical terminology", "bls", "first aid", "cpr", "إسعافات"],
        min_required_skill_matches: 2,
        skill_requirement: label(
            "Include healthcare-related skills (patient care, BLS, first aid)",
            "أضف مهارات صحية (رعاية المرضى، BLS، إسعافات أولية)",
        ),
        project_expectation: ProjectExpectation {
            freshman: label("A health awareness campaign or basic lab report", "حملة توعية صحية أو تقرير مختبر أساسي"),
            student: label(
                "A clinical case study, community health project, or research poster",
                "دراسة حالة سريرية، مشروع صحة مجتمعية، أو ملصق بحثي",
            ),
            graduate: label(
                "A clinical rotation summary, published research, or capstone health project",
                "ملخص تدريب سريري، بحث منشور، أو مشروع تخرج صحي",
            ),
        },
    },
    FieldDefinition {
        id: Field::Creative,
        label: label("Design & Creative Arts", "التصميم والفنون الإبداعية"),
        skills_en: &["Adobe Creative Suite", "Figma", "UI/UX Design", "Branding", "Typography", "Photography", "Video Editing", "Design Thinking", "Illustration", "Motion Graphics", "Prototyping"],
        skills_ar: &["Adobe Creative Suite", "Figma", "تصميم UI/UX", "هوية بصرية", "خطوط", "تصوير", "مونتاج", "تفكير تصميمي", "رسم توضيحي", "موشن جرافيك", "نماذج أولية"],
        cert_suggestions_en: &["Google UX Design Professional Certificate", "Adobe Certified Professional", "Interaction Design Foundation (IxDF)", "HubSpot Content Marketing", "Coursera Graphic Design Specialization"],
        cert_suggestions_ar: &["شهادة تصميم UX من Google", "Adobe معتمد احترافي", "مؤسسة تصميم التفاعل (IxDF)", "تسويق محتوى HubSpot", "تخصص تصميم جرافيك من Coursera"],
        required_skill_keywords: &["adobe", "figma", "ui/ux", "design thinking", "branding", "photoshop", "illustrator"],
        min_required_skill_matches: 2,
        skill_requirement: label(
            "Include design tools (Figma, Photoshop, etc.)",
            "أضف أدوات التصميم (Figma, Photoshop...)",
        ),
        project_expectation: ProjectExpectation {
            freshman: label(
                "A personal design piece, poster, or social media campaign mockup",
                "تصميم شخصي، ملصق، أو نموذج حملة لوسائل التواصل",
            ),
            student: label(
                "A portfolio-worthy design project (e.g., app redesign, brand identity, video production)",
                "مشروع تصميم يستحق الإضافة للمعرض (مثلاً: إعادة تصميم تطبيق، هوية بصرية، إنتاج فيديو)",
            ),
            graduate: label(
                "A comprehensive portfolio piece or client project demonstrating end-to-end design process",
                "عمل شامل في المعرض أو مشروع لعميل يُظهر عملية التصميم من البداية للنهاية",
            ),
        },
    },
    FieldDefinition {
        id: Field::Law,
        label: label("Law", "القانون"),
        skills_en: &["Legal Research", "Contract Drafting", "Case Analysis", "Saudi Labor Law", "Regulatory Compliance", "Negotiation", "Legal Writing", "Critical Thinking", "Dispute Resolution", "Corporate Governance", "Sharia Law Basics"],
        skills_ar: &["بحث قانوني", "صياغة عقود", "تحليل قضايا", "نظام العمل السعودي", "الامتثال التنظيمي", "تفاوض", "كتابة قانونية", "تفكير نقدي", "حل نزاعات", "حوكمة الشركات", "أساسيات الشريعة"],
        cert_suggestions_en: &["Saudi Bar Association License", "Certified Legal Professional (CLP)", "Contract Management Certificate", "Arbitration & Mediation Training", "Compliance Officer Certification"],
        cert_suggestions_ar: &["رخصة الهيئة السعودية للمحامين", "محترف قانوني معتمد (CLP)", "شهادة إدارة العقود", "تدريب تحكيم ووساطة", "شهادة مسؤول امتثال"],
        required_skill_keywords: &["legal research", "contract", "case analysis", "litigation", "بحث قانوني", "عقود"],
        min_required_skill_matches: 1,
        skill_requirement: label("Include 'Legal Research' in skills", "أضف 'البحث القانوني' في مهاراتك"),
        project_expectation: ProjectExpectation {
            freshman: label(
                "A legal essay, moot court brief, or case summary assignment",
                "مقال قانوني، مذكرة محكمة صورية، أو ملخص قضية دراسي",
            ),
            student: label(
                "A moot court competition, legal clinic participation, or research paper",
                "مسابقة محكمة صورية، مشاركة في عيادة قانونية، أو ورقة بحثية",
            ),
            graduate: label(
                "A published legal analysis, internship at a law firm, or graduation thesis on a legal topic",
                "تحليل قانوني منشور، تدريب في مكتب محاماة، أو رسالة تخرج في موضوع قانوني",
            ),
        },
    },
    FieldDefinition {
        id: Field::Education,
        label: label("Education", "التعليم"),
        skills_en: &["Classroom Management", "Curriculum Design", "Lesson Planning", "Student Assessment", "Educational Technology", "Differentiated Instruction", "Communication", "Mentoring", "Special Education Basics", "Presentation Skills", "E-Learning Platforms"],
        skills_ar: &["إدارة الصف", "تصميم المناهج", "تخطيط الدروس", "تقييم الطلاب", "تقنيات التعليم", "التعليم المتمايز", "تواصل", "إرشاد", "أساسيات التربية الخاصة", "مهارات عرض", "منصات التعليم الإلكتروني"],
        cert_suggestions_en: &["Teaching License (Saudi Ministry of Education)", "TESOL/TEFL Certification", "Google Certified Educator", "Microsoft Innovative Educator", "Montessori Teaching Certificate"],
        cert_suggestions_ar: &["رخصة التدريس (وزارة التعليم السعودية)", "شهادة TESOL/TEFL", "معلم معتمد من Google", "معلم مبتكر من Microsoft", "شهادة تدريس مونتيسوري"],
        required_skill_keywords: &["classroom management", "lesson planning", "curriculum design", "student assessment"],
        min_required_skill_matches: 1,
        skill_requirement: label(
            "Include teaching skills (lesson planning, classroom management)",
            "أضف مهارات التدريس (تخطيط الدروس، إدارة الصف)",
        ),
        project_expectation: ProjectExpectation {
            freshman: label(
                "A tutoring experience, peer mentoring activity, or teaching demo",
                "تجربة تدريس خصوصي، نشاط إرشاد أقران، أو عرض تدريسي",
            ),
            student: label(
                "A practicum lesson plan, educational workshop, or student teaching portfolio",
                "خطة درس تطبيقية، ورشة عمل تعليمية، أو ملف تدريس ميداني",
            ),
            graduate: label(
                "A student teaching capstone, curriculum development project, or classroom research study",
                "مشروع تخرج تدريس ميداني، مشروع تطوير منهج، أو دراسة بحثية صفية",
            ),
        },
    },
    FieldDefinition {
        id: Field::Other,
        label: label("Other", "أخرى"),
        skills_en: &["Communication", "Problem Solving", "Team Collaboration", "Time Management", "Critical Thinking", "Adaptability", "Leadership", "Microsoft Office", "Organizational Skills", "Customer Service"],
        skills_ar: &["تواصل", "حل مشكلات", "عمل جماعي", "إدارة الوقت", "تفكير نقدي", "تكيّف", "قيادة", "Microsoft Office", "مهارات تنظيمية", "خدمة عملاء"],
        cert_suggestions_en: &["Google Project Management", "LinkedIn Learning Certificates", "Coursera Professional Certificates", "First Aid & CPR", "Customer Service Excellence"],
        cert_suggestions_ar: &["إدارة مشاريع من Google", "شهادات LinkedIn Learning", "شهادات Coursera المهنية", "إسعافات أولية و CPR", "التميز في خدمة العملاء"],
        required_skill_keywords: &[],
        min_required_skill_matches: 0,
        skill_requirement: label("Include skills relevant to your field", "أضف مهارات متعلقة بمجالك"),
        project_expectation: ProjectExpectation {
            freshman: label(
                "Any personal initiative, volunteer project, or class assignment",
                "أي مبادرة شخصية، مشروع تطوعي، أو واجب دراسي",
            ),
            student: label(
                "A meaningful academic or personal project demonstrating initiative",
                "مشروع أكاديمي أو شخصي يُظهر روح المبادرة",
            ),
            graduate: label(
                "A capstone project, portfolio piece, or professional initiative",
                "مشروع تخرج، عمل في المعرض، أو مبادرة مهنية",
            ),
        },
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Goal table
// ────────────────────────────────────────────────────────────────────────────

pub static GOALS: &[GoalDefinition] = &[
    GoalDefinition {
        id: Goal::Volunteering,
        label: label("Volunteering & Clubs", "تطوع وأنشطة طلابية"),
        ats_priority: AtsPriority::Low,
        summary_length_min: 80,
        summary_length_ideal: 150,
        experience_expected: false,
        tone: label(
            "Enthusiastic and community-oriented; emphasize soft skills and initiative",
            "متحمس وموجه للمجتمع؛ أبرز المهارات الشخصية وروح المبادرة",
        ),
        weight_modifiers: &[
            (SectionKey::Experience, -3),
            (SectionKey::Projects, 2),
            (SectionKey::Skills, 2),
        ],
        summary_keywords: &[
            "volunteer", "volunteers", "volunteered", "volunteering", "community", "initiative",
            "club", "clubs", "تطوع", "مجتمع", "مبادرة",
        ],
    },
    GoalDefinition {
        id: Goal::Internship,
        label: label("Co-op / Internship", "تدريب تعاوني"),
        ats_priority: AtsPriority::High,
        summary_length_min: 120,
        summary_length_ideal: 200,
        experience_expected: false,
        tone: label(
            "Professional yet learning-focused; highlight academic achievements and technical readiness",
            "مهني مع تركيز على التعلم؛ أبرز الإنجازات الأكاديمية والجاهزية التقنية",
        ),
        weight_modifiers: &[
            (SectionKey::Experience, 3),
            (SectionKey::Projects, 3),
            (SectionKey::Skills, 2),
        ],
        summary_keywords: &[
            "intern", "internship", "internships", "co-op", "training", "learn", "learning", "تدريب", "تعلم",
        ],
    },
    GoalDefinition {
        id: Goal::PartTime,
        label: label("Part-time Job", "عمل جزئي"),
        ats_priority: AtsPriority::Medium,
        summary_length_min: 100,
        summary_length_ideal: 180,
        experience_expected: false,
        tone: label(
            "Flexible and reliable; emphasize availability, time management, and relevant skills",
            "مرن وموثوق؛ أبرز المرونة في الوقت وإدارة المهام والمهارات ذات الصلة",
        ),
        weight_modifiers: &[(SectionKey::Experience, 1), (SectionKey::Skills, 2)],
        summary_keywords: &["part-time", "flexible", "reliable", "availability", "time management", "جزئي", "مرن"],
    },
    GoalDefinition {
        id: Goal::FullTime,
        label: label("Full-time Position", "وظيفة بدوام كامل"),
        ats_priority: AtsPriority::Critical,
        summary_length_min: 150,
        summary_length_ideal: 250,
        experience_expected: true,
        tone: label(
            "Confident and results-driven; demonstrate impact, specialization, and career commitment",
            "واثق وموجه نحو النتائج؛ أظهر الأثر والتخصص والالتزام المهني",
        ),
        weight_modifiers: &[
            (SectionKey::Experience, 5),
            (SectionKey::Summary, 3),
            (SectionKey::Education, -3),
            (SectionKey::Languages, -2),
        ],
        summary_keywords: &[
            "full-time", "career", "careers", "professional", "results", "impact", "مهني", "وظيفة",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Edge-case rules (stage × goal compatibility)
// ────────────────────────────────────────────────────────────────────────────

pub static EDGE_CASE_RULES: &[EdgeCaseRule] = &[
    EdgeCaseRule {
        stage: Stage::Freshman,
        goal: Goal::Internship,
        action: EdgeAction::Block,
        message: label(
            "Internships typically require students in their 3rd year or above. Consider volunteering or part-time work to build experience first.",
            "التدريب التعاوني عادةً يتطلب طلاب السنة الثالثة فأعلى. ننصحك بالتطوع أو العمل الجزئي لبناء خبرتك أولاً.",
        ),
    },
    EdgeCaseRule {
        stage: Stage::Freshman,
        goal: Goal::FullTime,
        action: EdgeAction::Block,
        message: label(
            "Full-time positions require a completed degree. Focus on building skills through volunteering and part-time roles.",
            "الوظائف بدوام كامل تتطلب إكمال الدرجة العلمية. ركّز على بناء مهاراتك من خلال التطوع والعمل الجزئي.",
        ),
    },
    EdgeCaseRule {
        stage: Stage::Graduate,
        goal: Goal::Volunteering,
        action: EdgeAction::Warn,
        message: label(
            "As a graduate, you're qualified for professional roles. Volunteering is great, but consider also targeting internships or full-time positions.",
            "كخريج، أنت مؤهل للأدوار المهنية. التطوع رائع، لكن فكّر أيضاً في استهداف التدريب أو الوظائف بدوام كامل.",
        ),
    },
    EdgeCaseRule {
        stage: Stage::Student,
        goal: Goal::FullTime,
        action: EdgeAction::Warn,
        message: label(
            "Full-time roles are usually for graduates. If you're close to graduating, this could work — otherwise consider an internship.",
            "الوظائف بدوام كامل عادةً للخريجين. إذا كنت قريباً من التخرج فقد يناسبك — وإلا ننصح بالتدريب التعاوني.",
        ),
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Keyword lists used by stage- and field-specific targets
// ────────────────────────────────────────────────────────────────────────────

pub static SOFT_SKILL_KEYWORDS: &[&str] = &[
    "communication", "teamwork", "team collaboration", "leadership", "time management",
    "problem solving", "adaptability", "critical thinking", "creativity", "organization",
    "customer service", "negotiation", "presentation", "تواصل", "عمل جماعي", "قيادة",
    "إدارة الوقت", "حل مشكلات", "تفكير نقدي", "تكيّف",
];

pub static VOLUNTEER_KEYWORDS: &[&str] = &[
    "volunteer", "volunteers", "volunteered", "volunteering", "club", "clubs", "community",
    "society", "تطوع", "نادي", "مجتمع",
];

pub static LEGAL_TRAINING_KEYWORDS: &[&str] = &[
    "summer training", "moot court", "legal clinic", "تدريب صيفي", "محكمة صورية", "عيادة قانونية",
];

pub static FIRST_AID_CERT_KEYWORDS: &[&str] = &[
    "bls", "basic life support", "first aid", "cpr", "إسعافات", "إنعاش",
];

// ────────────────────────────────────────────────────────────────────────────
// Template and section-order matrices
// ────────────────────────────────────────────────────────────────────────────

const fn decision(template: TemplateName, en: &'static str, ar: &'static str) -> TemplateDecision {
    TemplateDecision { template, reason: label(en, ar) }
}

pub static TEMPLATE_MATRIX: &[(Stage, Goal, TemplateDecision)] = &[
    (Stage::Freshman, Goal::Volunteering, decision(TemplateName::Starter,
        "Starter template — clean and simple, ideal for building your first resume",
        "قالب المبتدئ — نظيف وبسيط، مثالي لبناء أول سيرة ذاتية")),
    (Stage::Freshman, Goal::Internship, decision(TemplateName::Starter,
        "Starter template — focus on potential and eagerness to learn",
        "قالب المبتدئ — يركّز على الإمكانيات والشغف بالتعلم")),
    (Stage::Freshman, Goal::PartTime, decision(TemplateName::Starter,
        "Starter template — highlights skills and availability for part-time roles",
        "قالب المبتدئ — يبرز المهارات والمرونة للعمل الجزئي")),
    (Stage::Freshman, Goal::FullTime, decision(TemplateName::Starter,
        "Starter template — builds a strong foundation for your career start",
        "قالب المبتدئ — يبني أساساً قوياً لبداية مسيرتك المهنية")),
    (Stage::Student, Goal::Volunteering, decision(TemplateName::Starter,
        "Starter template — perfect for showcasing volunteer work and extracurriculars",
        "قالب المبتدئ — مثالي لعرض العمل التطوعي والأنشطة")),
    (Stage::Student, Goal::Internship, decision(TemplateName::Academic,
        "Academic template — highlights projects and technical skills for internship applications",
        "القالب الأكاديمي — يبرز المشاريع والمهارات التقنية لطلبات التدريب")),
    (Stage::Student, Goal::PartTime, decision(TemplateName::Starter,
        "Starter template — emphasizes skills and flexibility for part-time opportunities",
        "قالب المبتدئ — يبرز المهارات والمرونة للفرص الجزئية")),
    (Stage::Student, Goal::FullTime, decision(TemplateName::Academic,
        "Academic template — professional format that showcases academic excellence and projects",
        "القالب الأكاديمي — تنسيق مهني يعرض التميز الأكاديمي والمشاريع")),
    (Stage::Graduate, Goal::Volunteering, decision(TemplateName::Starter,
        "Starter template — clean format for community-focused roles",
        "قالب المبتدئ — تنسيق نظيف للأدوار المجتمعية")),
    (Stage::Graduate, Goal::Internship, decision(TemplateName::Academic,
        "Academic template — balances education and experience for competitive internships",
        "القالب الأكاديمي — يوازن بين التعليم والخبرة للتدريب التنافسي")),
    (Stage::Graduate, Goal::PartTime, decision(TemplateName::Academic,
        "Academic template — professional presentation for part-time professional roles",
        "القالب الأكاديمي — عرض مهني للأدوار الجزئية المتخصصة")),
    (Stage::Graduate, Goal::FullTime, decision(TemplateName::Professional,
        "Professional template — ATS-optimized format for full-time job applications",
        "القالب الاحترافي — تنسيق متوافق مع ATS لطلبات التوظيف")),
];

pub static SECTION_ORDER_MATRIX: &[(Stage, Goal, [SectionKey; 8])] = &[
    (Stage::Freshman, Goal::Volunteering, [Per, Sum, Edu, Ski, Pro, Cer, Lan, Exp]),
    (Stage::Freshman, Goal::Internship, [Per, Sum, Edu, Ski, Pro, Cer, Lan, Exp]),
    (Stage::Freshman, Goal::PartTime, [Per, Sum, Edu, Ski, Pro, Cer, Lan, Exp]),
    (Stage::Freshman, Goal::FullTime, [Per, Sum, Edu, Ski, Pro, Exp, Cer, Lan]),
    (Stage::Student, Goal::Volunteering, [Per, Sum, Edu, Pro, Ski, Cer, Lan, Exp]),
    (Stage::Student, Goal::Internship, [Per, Sum, Edu, Pro, Ski, Exp, Cer, Lan]),
    (Stage::Student, Goal::PartTime, [Per, Sum, Edu, Pro, Ski, Cer, Lan, Exp]),
    (Stage::Student, Goal::FullTime, [Per, Sum, Exp, Edu, Pro, Ski, Cer, Lan]),
    (Stage::Graduate, Goal::Volunteering, [Per, Sum, Edu, Pro, Ski, Cer, Lan, Exp]),
    (Stage::Graduate, Goal::Internship, [Per, Sum, Exp, Edu, Pro, Ski, Cer, Lan]),
    (Stage::Graduate, Goal::PartTime, [Per, Sum, Exp, Edu, Pro, Ski, Cer, Lan]),
    (Stage::Graduate, Goal::FullTime, [Per, Sum, Exp, Edu, Pro, Ski, Cer, Lan]),
];

// ────────────────────────────────────────────────────────────────────────────
// Lookups (never fail)
// ────────────────────────────────────────────────────────────────────────────

/// Falls back to the student entry.
pub fn persona_definition(stage: Stage) -> &'static PersonaDefinition {
    PERSONAS
        .iter()
        .find(|p| p.id == stage)
        .or_else(|| PERSONAS.iter().find(|p| p.id == Stage::Student))
        .unwrap_or(&PERSONAS[0])
}

/// Falls back to the `other` entry.
pub fn field_definition(field: Field) -> &'static FieldDefinition {
    FIELDS
        .iter()
        .find(|f| f.id == field)
        .or_else(|| FIELDS.iter().find(|f| f.id == Field::Other))
        .unwrap_or(&FIELDS[0])
}

/// Falls back to the `part-time` entry.
pub fn goal_definition(goal: Goal) -> &'static GoalDefinition {
    GOALS
        .iter()
        .find(|g| g.id == goal)
        .or_else(|| GOALS.iter().find(|g| g.id == Goal::PartTime))
        .unwrap_or(&GOALS[0])
}

pub fn edge_case_rule(stage: Stage, goal: Goal) -> Option<&'static EdgeCaseRule> {
    EDGE_CASE_RULES
        .iter()
        .find(|r| r.stage == stage && r.goal == goal)
}

/// Missing labels degrade to the raw section key.
pub fn section_label(key: SectionKey) -> Label {
    SECTION_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, l)| *l)
        .unwrap_or(Label {
            en: key.as_str(),
            ar: key.as_str(),
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Startup validation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("persona table has {count} entries for stage '{stage}' (expected 1)")]
    StageEntries { stage: Stage, count: usize },

    #[error("field table has {count} entries for field '{field}' (expected 1)")]
    FieldEntries { field: Field, count: usize },

    #[error("goal table has {count} entries for goal '{goal}' (expected 1)")]
    GoalEntries { goal: Goal, count: usize },

    #[error("field '{field}' needs {required} keyword matches but lists {available} keywords")]
    SkillKeywords {
        field: Field,
        required: usize,
        available: usize,
    },

    #[error("stage '{stage}' allows goal '{goal}' which has no goal definition")]
    UnknownAllowedGoal { stage: Stage, goal: Goal },

    #[error("edge-case rule for ({stage}, {goal}) refers to a missing stage or goal")]
    DanglingEdgeCase { stage: Stage, goal: Goal },

    #[error("duplicate edge-case rule for ({stage}, {goal})")]
    DuplicateEdgeCase { stage: Stage, goal: Goal },

    #[error("stage '{stage}' has zero base weight for section '{section}'")]
    ZeroBaseWeight { stage: Stage, section: SectionKey },

    #[error("no label for section '{0}'")]
    MissingSectionLabel(SectionKey),

    #[error("target for {section} under ({stage}, {field}, {goal}) has weight {weight}, outside 1..=5")]
    TargetWeight {
        stage: Stage,
        field: Field,
        goal: Goal,
        section: SectionKey,
        weight: u8,
    },

    #[error("no template decision for ({stage}, {goal})")]
    MissingTemplate { stage: Stage, goal: Goal },

    #[error("section order for ({stage}, {goal}) is missing or does not list every section once")]
    SectionOrder { stage: Stage, goal: Goal },
}

/// Validates the built-in tables. Called once from `main` before serving.
pub fn validate_tables() -> Result<(), TableError> {
    validate_definitions(PERSONAS, FIELDS, GOALS, EDGE_CASE_RULES)?;

    for key in SectionKey::ALL {
        if !SECTION_LABELS.iter().any(|(k, _)| *k == key) {
            return Err(TableError::MissingSectionLabel(key));
        }
    }

    for stage in Stage::ALL {
        for goal in Goal::ALL {
            if !TEMPLATE_MATRIX.iter().any(|(s, g, _)| *s == stage && *g == goal) {
                return Err(TableError::MissingTemplate { stage, goal });
            }
            let order = SECTION_ORDER_MATRIX
                .iter()
                .find(|(s, g, _)| *s == stage && *g == goal)
                .map(|(_, _, order)| order)
                .ok_or(TableError::SectionOrder { stage, goal })?;
            let distinct: HashSet<_> = order.iter().collect();
            if distinct.len() != SectionKey::ALL.len() {
                return Err(TableError::SectionOrder { stage, goal });
            }

            for field in Field::ALL {
                let persona = Persona { stage, field, goal };
                for target in compile_targets(&persona) {
                    if !(1..=5).contains(&target.weight) {
                        return Err(TableError::TargetWeight {
                            stage,
                            field,
                            goal,
                            section: target.section,
                            weight: target.weight,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

/// Cross-checks persona, field, goal and edge-case tables against each other.
pub fn validate_definitions(
    personas: &[PersonaDefinition],
    fields: &[FieldDefinition],
    goals: &[GoalDefinition],
    rules: &[EdgeCaseRule],
) -> Result<(), TableError> {
    for stage in Stage::ALL {
        let count = personas.iter().filter(|p| p.id == stage).count();
        if count != 1 {
            return Err(TableError::StageEntries { stage, count });
        }
    }
    for field in Field::ALL {
        let count = fields.iter().filter(|f| f.id == field).count();
        if count != 1 {
            return Err(TableError::FieldEntries { field, count });
        }
    }
    for goal in Goal::ALL {
        let count = goals.iter().filter(|g| g.id == goal).count();
        if count != 1 {
            return Err(TableError::GoalEntries { goal, count });
        }
    }

    for field in fields {
        if field.min_required_skill_matches > field.required_skill_keywords.len() {
            return Err(TableError::SkillKeywords {
                field: field.id,
                required: field.min_required_skill_matches,
                available: field.required_skill_keywords.len(),
            });
        }
    }

    for persona in personas {
        for &goal in persona.allowed_goals {
            if !goals.iter().any(|g| g.id == goal) {
                return Err(TableError::UnknownAllowedGoal {
                    stage: persona.id,
                    goal,
                });
            }
        }
        for section in SectionKey::ALL {
            if persona.section_weights.get(section) == 0 {
                return Err(TableError::ZeroBaseWeight {
                    stage: persona.id,
                    section,
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for rule in rules {
        let known_stage = personas.iter().any(|p| p.id == rule.stage);
        let known_goal = goals.iter().any(|g| g.id == rule.goal);
        if !known_stage || !known_goal {
            return Err(TableError::DanglingEdgeCase {
                stage: rule.stage,
                goal: rule.goal,
            });
        }
        if !seen.insert((rule.stage, rule.goal)) {
            return Err(TableError::DuplicateEdgeCase {
                stage: rule.stage,
                goal: rule.goal,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_field_without_keywords_fails_validation() {
        let mut fields: Vec<FieldDefinition> = FIELDS.to_vec();
        let tech = fields
            .iter_mut()
            .find(|f| f.id == Field::Technology)
            .unwrap();
        tech.required_skill_keywords = &[];

        let err = validate_definitions(PERSONAS, &fields, GOALS, EDGE_CASE_RULES).unwrap_err();
        assert_eq!(
            err,
            TableError::SkillKeywords {
                field: Field::Technology,
                required: 2,
                available: 0
            }
        );
    }

    #[test]
    fn test_duplicate_edge_case_fails_validation() {
        let mut rules: Vec<EdgeCaseRule> = EDGE_CASE_RULES.to_vec();
        rules.push(rules[0]);
        let err = validate_definitions(PERSONAS, FIELDS, GOALS, &rules).unwrap_err();
        assert!(matches!(err, TableError::DuplicateEdgeCase { .. }));
    }

    #[test]
    fn test_missing_goal_fails_validation() {
        let goals: Vec<GoalDefinition> = GOALS
            .iter()
            .filter(|g| g.id != Goal::Internship)
            .copied()
            .collect();
        let err = validate_definitions(PERSONAS, FIELDS, &goals, EDGE_CASE_RULES).unwrap_err();
        assert_eq!(
            err,
            TableError::GoalEntries {
                goal: Goal::Internship,
                count: 0
            }
        );
    }

    #[test]
    fn test_merge_floors_at_zero() {
        let base = persona_definition(Stage::Freshman).section_weights;
        let merged = base.merge(&[(SectionKey::Experience, -100), (SectionKey::Skills, 2)]);
        assert_eq!(merged.experience, 0);
        assert_eq!(merged.skills, 27);
        assert_eq!(merged.personal, base.personal);
    }

    #[test]
    fn test_section_label_lookup() {
        assert_eq!(section_label(SectionKey::Skills).en, "Skills");
        assert_eq!(section_label(SectionKey::Languages).ar, "اللغات");
    }

    #[test]
    fn test_lookups_return_matching_entries() {
        for stage in Stage::ALL {
            assert_eq!(persona_definition(stage).id, stage);
        }
        for field in Field::ALL {
            assert_eq!(field_definition(field).id, field);
        }
        for goal in Goal::ALL {
            assert_eq!(goal_definition(goal).id, goal);
        }
    }
}
