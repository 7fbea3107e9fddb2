//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod categories;
pub mod classify;
pub mod completions;
pub mod holders;
pub mod navigate;
pub mod search;
pub mod tree;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the skill taxonomy (root -> category -> skill)
    Tree(tree::TreeArgs),

    /// Rank employees and skills against a query
    Search(search::SearchArgs),

    /// Show the category of one or more skill labels
    Classify(classify::ClassifyArgs),

    /// List employees holding a skill
    Holders(holders::HoldersArgs),

    /// Replay a key script through the search dropdown
    Navigate(navigate::NavigateArgs),

    /// Dump the effective category table
    Categories(categories::CategoriesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Tree(args) => tree::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Classify(args) => classify::run(ctx, args),
        Commands::Holders(args) => holders::run(ctx, args),
        Commands::Navigate(args) => navigate::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}
