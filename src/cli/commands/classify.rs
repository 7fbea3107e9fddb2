//! skm classify - Show the category of skill labels

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::taxonomy::{SkillCategory, SkillClassifier};

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Skill labels to classify (matched exactly unless normalization is on)
    #[arg(required = true)]
    pub labels: Vec<String>,
}

#[derive(Serialize)]
struct Classification<'a> {
    label: &'a str,
    category: SkillCategory,
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let classifier = ctx.classifier();
    let rows: Vec<Classification<'_>> = args
        .labels
        .iter()
        .map(|label| Classification {
            label,
            category: classifier.classify(label),
        })
        .collect();

    if ctx.robot() {
        return emit_robot(&robot_ok(rows));
    }

    let mut layout = HumanLayout::new();
    for row in &rows {
        layout.kv(row.label, row.category.label());
    }
    emit_human(layout);
    Ok(())
}
