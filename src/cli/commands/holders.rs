//! skm holders - List employees holding a skill

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::model::Employee;
use crate::taxonomy::SkillCategory;

#[derive(Args, Debug)]
pub struct HoldersArgs {
    /// Exact skill label
    pub skill: String,
}

#[derive(Serialize)]
struct HoldersReport<'a> {
    skill: &'a str,
    category: Option<SkillCategory>,
    endorsement_count: u64,
    employees: Vec<&'a Employee>,
}

pub fn run(ctx: &AppContext, args: &HoldersArgs) -> Result<()> {
    let directory = ctx.directory()?;
    let node = directory.tree().skill(&args.skill);
    let report = HoldersReport {
        skill: &args.skill,
        category: node.map(|n| n.category),
        endorsement_count: node.map_or(0, |n| n.endorsement_count),
        employees: directory.holders(&args.skill),
    };

    if ctx.robot() {
        return emit_robot(&robot_ok(report));
    }

    let mut layout = HumanLayout::new();
    layout.section(&args.skill);
    match report.category {
        Some(category) => {
            layout
                .kv("category", category.label())
                .kv("endorsements", &report.endorsement_count.to_string())
                .blank();
            for employee in &report.employees {
                if employee.title.is_empty() {
                    layout.bullet(&employee.name);
                } else {
                    layout.bullet(&format!("{} ({})", employee.name, employee.title));
                }
            }
        }
        None => {
            layout.dim("nobody lists this skill");
        }
    }
    emit_human(layout);
    Ok(())
}
