//! Generate command — form to prompt to admission checks to plan

use std::path::PathBuf;

use anyhow::{bail, Result};
use colored::Colorize;
use plansmith_core::{GenerationRequest, UsageError};

use crate::commands::{build_engine, record_event};
use crate::config::PlansmithConfig;
use crate::paths;
use crate::progress::Step;
use crate::templates::{self, LessonForm, TemplateKind};

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Lesson template
    #[arg(long, value_enum, default_value = "basic")]
    pub template: TemplateKind,

    /// Grade level, e.g. "3rd Grade", "10th Grade", "Mixed Ages"
    #[arg(long)]
    pub grade_level: String,

    /// Subject, e.g. "Mathematics", "Science", "STEAM Integration"
    #[arg(long)]
    pub subject: String,

    /// Topic or theme, e.g. "Community Gardens", "Urban Ecology"
    #[arg(long)]
    pub topic: String,

    /// Lesson duration in minutes
    #[arg(long, default_value = "90")]
    pub duration: String,

    /// Student backgrounds, strengths, and considerations
    #[arg(long, default_value = "")]
    pub student_context: String,

    /// What students should know or be able to do by the end
    #[arg(long, default_value = "")]
    pub learning_objectives: String,

    /// Trauma considerations to design around
    #[arg(long, default_value = "")]
    pub trauma_considerations: String,

    /// Local cultural wealth, community partnerships, family strengths
    #[arg(long, default_value = "")]
    pub cultural_assets: String,

    /// Community and urban-context integration
    #[arg(long, default_value = "")]
    pub urban_integration: String,

    /// Assessment approach: formative, summative, portfolio, peer, self-reflection
    #[arg(long, default_value = "")]
    pub assessment_type: String,

    /// Write the plan to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn to_form(&self) -> LessonForm {
        LessonForm {
            grade_level: self.grade_level.clone(),
            subject: self.subject.clone(),
            topic: self.topic.clone(),
            duration: self.duration.clone(),
            student_context: self.student_context.clone(),
            learning_objectives: self.learning_objectives.clone(),
            trauma_considerations: self.trauma_considerations.clone(),
            cultural_assets: self.cultural_assets.clone(),
            urban_integration: self.urban_integration.clone(),
            assessment_type: self.assessment_type.clone(),
        }
    }
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = PlansmithConfig::load()?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    if args.grade_level.trim().is_empty()
        || args.subject.trim().is_empty()
        || args.topic.trim().is_empty()
    {
        bail!("grade level, subject, and topic are required");
    }

    let now = paths::now_epoch();
    let (engine, state_dir) = build_engine(&config, now)?;
    let session_id = paths::load_or_create_session_id(&state_dir)?;

    let form = args.to_form();
    let request = GenerationRequest {
        prompt: templates::assemble_prompt(args.template, &form),
        session_id: session_id.clone(),
        device_fingerprint: engine.fingerprint().to_string(),
        metadata: serde_json::json!({
            "template": args.template.id(),
            "gradeLevel": form.grade_level,
            "subject": form.subject,
            "topic": form.topic,
        }),
    };

    let before = engine.usage_snapshot(now)?;
    record_event(
        &state_dir,
        &session_id,
        &before,
        "generation_started",
        serde_json::json!({ "template": args.template.id() }),
    );

    eprintln!(
        "{}",
        format!(
            "  plansmith v{} — {}",
            plansmith_core::VERSION,
            args.template.info().title
        )
        .bold()
    );

    let step = Step::new("Generating lesson plan");
    match engine.attempt_generation(&request, now) {
        Ok(plan) => {
            step.finish(&format!("{} chars", plan.len()));
            let after = engine.usage_snapshot(now)?;
            record_event(
                &state_dir,
                &session_id,
                &after,
                "generation_succeeded",
                serde_json::json!({
                    "template": args.template.id(),
                    "response_length": plan.len(),
                }),
            );

            match &args.output {
                Some(path) => {
                    std::fs::write(path, &plan)?;
                    eprintln!("  Saved to {}", path.display().to_string().bold());
                }
                None => println!("{plan}"),
            }
            eprintln!(
                "  {}",
                format!(
                    "Tokens: {}/{} • Weekly: {}/{}",
                    after.tokens_remaining(),
                    after.tokens_available,
                    after.weekly_used,
                    after.weekly_limit
                )
                .dimmed()
            );
            Ok(())
        }
        Err(err) => {
            step.fail();
            let after = engine.usage_snapshot(now)?;
            let event = match &err {
                UsageError::CompletionFailed(_) => "generation_failed",
                _ => "limit_rejected",
            };
            record_event(
                &state_dir,
                &session_id,
                &after,
                event,
                serde_json::json!({ "error": err.to_string() }),
            );

            eprintln!("  {} {}", "\u{2717}".red(), err);
            if matches!(err, UsageError::CompletionFailed(_)) {
                eprintln!("  Your token has been refunded. Please try again in a few moments.");
            }
            if err.upgrade_suggested() {
                print_upgrade_pitch();
            }
            bail!("lesson plan was not generated");
        }
    }
}

fn print_upgrade_pitch() {
    eprintln!();
    eprintln!(
        "  {} — $19/month: 25 lesson plans per week (50 tokens), all templates, multi-device access",
        "Individual".cyan().bold()
    );
    eprintln!(
        "  {} — $25/month: unlimited lesson plans (999 tokens), priority support",
        "Premium".cyan().bold()
    );
    eprintln!("  Run '{}' to upgrade.", "plansmith upgrade individual".bold());
}
