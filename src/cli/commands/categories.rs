//! skm categories - Dump the effective category table

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::taxonomy::SkillCategory;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Only list category names, not their labels
    #[arg(long)]
    pub names_only: bool,
}

#[derive(Serialize)]
struct CategoryListing<'a> {
    category: SkillCategory,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let classifier = ctx.classifier();
    let table = classifier.table();
    let listings: Vec<CategoryListing<'_>> = SkillCategory::all()
        .iter()
        .map(|&category| CategoryListing {
            category,
            name: category.label(),
            labels: (!args.names_only).then(|| table.labels(category)),
        })
        .collect();

    if ctx.robot() {
        return emit_robot(&robot_ok(serde_json::json!({
            "normalize_labels": table.normalize_labels(),
            "categories": listings,
        })));
    }

    let mut layout = HumanLayout::new();
    for listing in &listings {
        match listing.labels {
            Some(labels) if !labels.is_empty() => {
                layout.kv(listing.name, &labels.join(", "));
            }
            Some(_) => {
                layout.kv(listing.name, "(fallback)");
            }
            None => {
                layout.bullet(listing.name);
            }
        }
    }
    if table.normalize_labels() {
        layout.blank().dim("labels are matched case-insensitively after trimming");
    }
    emit_human(layout);
    Ok(())
}
