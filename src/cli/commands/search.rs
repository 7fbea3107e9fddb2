//! skm search - Rank employees and skills against a query

use clap::Args;
use clap::builder::RangedU64ValueParser;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, format_score, robot_ok};
use crate::error::Result;
use crate::search::{SearchEngine, SearchResult};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (matched against names, titles and skill labels)
    pub query: String,

    /// Maximum number of results (overrides search.max_results)
    #[arg(long, short, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    results: Vec<SearchResult<'a>>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let snapshot = ctx.load_snapshot()?;
    let mut config = ctx.config.search.clone();
    if let Some(limit) = args.limit {
        config.max_results = limit;
    }
    let engine = SearchEngine::new(config);
    let results = engine.search(&snapshot.employees, &args.query);

    if ctx.robot() {
        return emit_robot(&robot_ok(SearchReport {
            query: &args.query,
            results,
        }));
    }

    emit_human(render_results(&args.query, &results));
    Ok(())
}

pub(crate) fn render_results(query: &str, results: &[SearchResult<'_>]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.section(&format!("Results for \"{query}\""));
    if results.is_empty() {
        layout.dim("no matches");
        return layout;
    }
    for (idx, result) in results.iter().enumerate() {
        layout.indented(0, &result_line(idx, result));
    }
    layout
}

pub(crate) fn result_line(idx: usize, result: &SearchResult<'_>) -> String {
    let detail = match *result {
        SearchResult::Employee { employee, .. } if !employee.title.is_empty() => {
            format!(" - {}", employee.title)
        }
        _ => String::new(),
    };
    format!(
        "{:>2}. [{}] {}{detail} ({})",
        idx + 1,
        result.kind().as_str(),
        result.display(),
        format_score(result.score())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;
    use crate::test_utils::fixtures::sarah_chen;

    #[test]
    fn test_render_results() {
        console::set_colors_enabled(false);
        let team = vec![sarah_chen()];
        let results = search(&team, "react");
        let rendered = render_results("react", &results).build();
        assert!(rendered.contains(" 1. [skill] React (1.000)"), "{rendered}");
    }

    #[test]
    fn test_render_no_results() {
        console::set_colors_enabled(false);
        let rendered = render_results("zzz", &[]).build();
        assert!(rendered.contains("no matches"));
    }
}
