//! Lesson templates and prompt assembly
//!
//! Five templates, each turning the same form into a differently-framed
//! specification for the completion backend. The assembled prompt is a
//! fixed preamble, the template body, and a requirements footer.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// Trauma-informed & culturally grounded single lesson
    Basic,
    /// Community-integrated project-based learning unit
    Multiday,
    /// High-support healing-centered instruction
    Intensive,
    /// Community problem-solving STEAM integration
    Steam,
    /// Transform an existing lesson with healing-centered principles
    Adaptation,
}

pub struct TemplateInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub best_for: &'static str,
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: "basic",
        title: "Single Lesson Plan",
        description: "Trauma-informed & culturally grounded single lesson",
        duration: "45-90 minutes",
        best_for: "Daily classroom instruction",
    },
    TemplateInfo {
        id: "multiday",
        title: "Multi-Day Unit",
        description: "Community-integrated project-based learning",
        duration: "3-5 days",
        best_for: "Deep dive projects",
    },
    TemplateInfo {
        id: "intensive",
        title: "Trauma-Informed Intensive",
        description: "High-support healing-centered instruction",
        duration: "Flexible",
        best_for: "High-needs students",
    },
    TemplateInfo {
        id: "steam",
        title: "Urban STEAM",
        description: "Community problem-solving integration",
        duration: "90+ minutes",
        best_for: "STEAM integration",
    },
    TemplateInfo {
        id: "adaptation",
        title: "Quick Enhancement",
        description: "Transform existing lessons with healing-centered principles",
        duration: "Any length",
        best_for: "Existing curriculum",
    },
];

impl TemplateKind {
    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Multiday => "multiday",
            TemplateKind::Intensive => "intensive",
            TemplateKind::Steam => "steam",
            TemplateKind::Adaptation => "adaptation",
        }
    }

    pub fn info(self) -> &'static TemplateInfo {
        let id = self.id();
        TEMPLATES
            .iter()
            .find(|t| t.id == id)
            .expect("every template kind has a table entry")
    }
}

/// The classroom context a teacher fills in. Only grade level, subject,
/// and topic are required; empty optional fields simply read as blank in
/// the prompt, which the backend tolerates.
#[derive(Debug, Clone, Default)]
pub struct LessonForm {
    pub grade_level: String,
    pub subject: String,
    pub topic: String,
    pub duration: String,
    pub student_context: String,
    pub learning_objectives: String,
    pub trauma_considerations: String,
    pub cultural_assets: String,
    pub urban_integration: String,
    pub assessment_type: String,
}

const PREAMBLE: &str = "You are an expert curriculum designer specializing in trauma-informed \
pedagogy, cultural responsiveness, and healing-centered instruction.";

const REQUIREMENTS: &str = "MANDATORY REQUIREMENTS:
- Include [Teacher Note:] and [Student Note:] for every major component
- Ensure trauma-informed practices throughout
- Include cultural responsiveness strategies
- Provide MTSS scaffolding options
- Add regulation rituals and transitions
- Include assessment rubrics
- Ensure healing and learning are integrated

Format as a complete, implementable lesson plan with standards alignment, materials list, and extension activities.";

/// Assembles the full prompt for one generation attempt.
pub fn assemble_prompt(kind: TemplateKind, form: &LessonForm) -> String {
    let body = template_body(kind, form);
    format!("{PREAMBLE}\n\nCreate a comprehensive lesson plan using these specifications:\n\n{body}\n\n{REQUIREMENTS}")
}

fn template_body(kind: TemplateKind, form: &LessonForm) -> String {
    match kind {
        TemplateKind::Basic => format!(
            "Generate a comprehensive {}-minute trauma-informed lesson plan for {} {} on \"{}\".\n\n\
             Student Context: {}\n\
             Learning Objectives: {}\n\
             Cultural Assets: {}\n\
             Trauma Considerations: {}\n\
             Urban Integration: {}\n\
             Assessment Type: {}",
            form.duration,
            form.grade_level,
            form.subject,
            form.topic,
            form.student_context,
            form.learning_objectives,
            form.cultural_assets,
            form.trauma_considerations,
            form.urban_integration,
            form.assessment_type,
        ),
        TemplateKind::Multiday => format!(
            "Design a multi-day trauma-informed unit for {} {} focusing on \"{}\".\n\n\
             Student Context: {}\n\
             Essential Learning: {}\n\
             Community Assets: {}\n\
             Living Learning Lab: {}\n\
             Assessment Approach: {}",
            form.grade_level,
            form.subject,
            form.topic,
            form.student_context,
            form.learning_objectives,
            form.cultural_assets,
            form.urban_integration,
            form.assessment_type,
        ),
        TemplateKind::Intensive => format!(
            "Develop an intensive trauma-informed lesson for {} {} on \"{}\" prioritizing healing and safety.\n\n\
             Student Trauma Context: {} {}\n\
             Healing-Centered Goals: {}\n\
             Cultural Strengths: {}\n\
             Safe Environment Needs: {}\n\
             Trauma-Sensitive Assessment: {}",
            form.grade_level,
            form.subject,
            form.topic,
            form.student_context,
            form.trauma_considerations,
            form.learning_objectives,
            form.cultural_assets,
            form.urban_integration,
            form.assessment_type,
        ),
        TemplateKind::Steam => format!(
            "Create a {}-minute Urban STEAM lesson for {} addressing \"{}\".\n\n\
             STEAM Integration: {}\n\
             Learning Goals: {}\n\
             Cultural Integration: {}\n\
             Trauma-Informed Design: {}\n\
             Assessment: {}",
            form.duration,
            form.grade_level,
            form.topic,
            form.urban_integration,
            form.learning_objectives,
            form.cultural_assets,
            form.trauma_considerations,
            form.assessment_type,
        ),
        TemplateKind::Adaptation => format!(
            "Transform an existing lesson to be trauma-informed and culturally responsive for {} {} on \"{}\".\n\n\
             Current Student Needs: {}\n\
             Learning Goals: {}\n\
             Cultural Assets: {}\n\
             Trauma-Informed Adaptations: {}\n\
             Enhanced Assessment: {}\n\
             Urban Context: {}",
            form.grade_level,
            form.subject,
            form.topic,
            form.student_context,
            form.learning_objectives,
            form.cultural_assets,
            form.trauma_considerations,
            form.assessment_type,
            form.urban_integration,
        ),
    }
}
