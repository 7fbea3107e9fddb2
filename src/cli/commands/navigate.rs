//! skm navigate - Replay a key script through the search dropdown

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::commands::search::result_line;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::search::navigation::{
    NavKey, NavState, RecordingHandler, SearchBox, Selection, parse_key_script,
};

#[derive(Args, Debug)]
pub struct NavigateArgs {
    /// Text typed into the search box
    #[arg(long)]
    pub query: String,

    /// Comma-separated keys: down, up, enter, esc
    #[arg(long, short, default_value = "")]
    pub keys: String,

    /// Behave as if no skill-select callback were wired up
    #[arg(long)]
    pub no_skill_select: bool,
}

#[derive(Debug, Serialize)]
struct Step<'a> {
    key: NavKey,
    state: NavState,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<Selection<'a>>,
}

#[derive(Serialize)]
struct NavigateReport<'a> {
    query: &'a str,
    initial: NavState,
    steps: Vec<Step<'a>>,
    committed: Option<Selection<'a>>,
    state: NavState,
}

pub fn run(ctx: &AppContext, args: &NavigateArgs) -> Result<()> {
    let keys = parse_key_script(&args.keys)?;
    let snapshot = ctx.load_snapshot()?;
    let mut handler = RecordingHandler::new(!args.no_skill_select);
    let mut search_box = SearchBox::new(ctx.search_engine(), &snapshot.employees);

    search_box.set_query(args.query.as_str());
    let initial = search_box.state();
    let mut layout = HumanLayout::new();
    layout.section(&format!("Query \"{}\"", args.query));
    for (idx, result) in search_box.results().iter().enumerate() {
        layout.indented(0, &result_line(idx, result));
    }

    let (steps, committed) = replay(&mut search_box, &keys, &mut handler);
    debug!(keys = keys.len(), committed = committed.is_some(), "key script replayed");
    let report = NavigateReport {
        query: &args.query,
        initial,
        steps,
        committed,
        state: search_box.state(),
    };

    if ctx.robot() {
        return emit_robot(&robot_ok(report));
    }

    layout.blank();
    for step in &report.steps {
        layout.kv(&format!("{:?}", step.key).to_lowercase(), &describe_state(step.state));
    }
    layout.blank();
    match &report.committed {
        Some(selection) => layout.kv("selected", &describe_selection(selection)),
        None => layout.kv("selected", "nothing"),
    };
    layout.kv("state", &describe_state(report.state));
    emit_human(layout);
    Ok(())
}

/// Feed `keys` into the box, recording the state after each one.
/// Keys after a commit still apply to the (now closed) box.
fn replay<'a>(
    search_box: &mut SearchBox<'a>,
    keys: &[NavKey],
    handler: &mut RecordingHandler,
) -> (Vec<Step<'a>>, Option<Selection<'a>>) {
    let mut steps = Vec::with_capacity(keys.len());
    let mut committed = None;
    for &key in keys {
        let selection = search_box.handle_key(key, &mut *handler);
        if selection.is_some() {
            committed.clone_from(&selection);
        }
        steps.push(Step {
            key,
            state: search_box.state(),
            selection,
        });
    }
    (steps, committed)
}

fn describe_state(state: NavState) -> String {
    match state {
        NavState::Closed => "closed".to_string(),
        NavState::Open { selected: None } => "open, nothing highlighted".to_string(),
        NavState::Open { selected: Some(i) } => format!("open, result {} highlighted", i + 1),
    }
}

fn describe_selection(selection: &Selection<'_>) -> String {
    match selection {
        Selection::Employee(employee) => format!("employee {} (id {})", employee.name, employee.id),
        Selection::Skill(label) => format!("skill {label}"),
        Selection::AdHocSkill(label) => format!("new skill {label}"),
    }
}
