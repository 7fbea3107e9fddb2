//! skm tree - Print the skill taxonomy

use std::borrow::Cow;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::taxonomy::{CategoryNode, RootNode, SkillCategory};

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Only show one category (e.g. technology, design, other)
    #[arg(long, short)]
    pub category: Option<SkillCategory>,

    /// Hide per-skill employee ids in human output
    #[arg(long)]
    pub no_members: bool,
}

pub fn run(ctx: &AppContext, args: &TreeArgs) -> Result<()> {
    let directory = ctx.directory()?;
    let root = directory.tree();
    debug!(target: "tree", categories = root.children.len(), "taxonomy ready");

    if let Some(category) = args.category {
        let node = root
            .category(category)
            .map_or_else(|| Cow::Owned(CategoryNode::empty(category)), Cow::Borrowed);
        if ctx.robot() {
            let mut response = robot_ok(node.as_ref());
            if node.is_empty() {
                response = response
                    .with_warning(format!("no skills classified as {}", category.label()));
            }
            return emit_robot(&response);
        }
        let mut layout = HumanLayout::new();
        render_category(&mut layout, &node, 0, !args.no_members);
        emit_human(layout);
        return Ok(());
    }

    if ctx.robot() {
        let orphaned = root.orphaned_endorsements();
        let mut response = robot_ok(root);
        if orphaned > 0 {
            response = response.with_warning(format!(
                "{orphaned} endorsement(s) reference skills nobody lists"
            ));
        }
        return emit_robot(&response);
    }
    emit_human(render_tree(root, !args.no_members));
    Ok(())
}

fn render_tree(root: &RootNode, members: bool) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!(
        "{} ({} employees, {} endorsements)",
        root.name,
        root.employees.len(),
        root.endorsement_count
    ));
    if root.is_empty() {
        layout.dim("no skills listed");
        return layout;
    }
    for category in &root.children {
        render_category(&mut layout, category, 1, members);
    }
    let orphaned = root.orphaned_endorsements();
    if orphaned > 0 {
        layout.blank();
        layout.dim(&format!(
            "{orphaned} endorsement(s) for skills nobody lists are counted at the root only"
        ));
    }
    layout
}

fn render_category(layout: &mut HumanLayout, node: &CategoryNode, level: usize, members: bool) {
    layout.indented(
        level,
        &format!(
            "{} [{} employees, {} endorsements]",
            node.name,
            node.employees.len(),
            node.endorsement_count
        ),
    );
    if node.is_empty() {
        layout.indented(level + 1, "no skills");
        return;
    }
    for skill in &node.children {
        let mut line = format!(
            "{} ({} endorsements, {} holders)",
            skill.label,
            skill.endorsement_count,
            skill.employees.len()
        );
        if members {
            let ids = itertools::join(skill.employees.iter(), ", ");
            line.push_str(&format!(": {ids}"));
        }
        layout.indented(level + 1, &line);
    }
}
