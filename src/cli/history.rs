use std::io::Write;

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use mealmate_mealplan::NewHistoryEntry;
use mealmate_recipe::MealType;

use crate::context::AppContext;

#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// Record that a recipe was eaten today
    Add {
        #[arg(long)]
        recipe: String,
        #[arg(long)]
        meal: MealType,
        #[arg(long, default_value_t = 1)]
        servings: u32,
        /// 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Meals eaten recently, newest first
    Recent {
        /// Window in days (defaults to config)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Forget all history
    Clear,
}

#[tracing::instrument(skip_all)]
pub fn run(ctx: &AppContext, args: &HistoryArgs, out: &mut impl Write) -> Result<()> {
    let mut prefs = ctx.preferences()?;

    match &args.command {
        HistoryCommand::Add {
            recipe,
            meal,
            servings,
            rating,
            notes,
        } => {
            let recipe = ctx
                .catalog
                .get(recipe)
                .ok_or_else(|| anyhow!("Recipe not found: {recipe}"))?;
            let entry = prefs.add_to_history(
                NewHistoryEntry {
                    recipe_id: recipe.id.clone(),
                    recipe_name: recipe.name.clone(),
                    meal_type: *meal,
                    date: ctx.today(),
                    rating: *rating,
                    notes: notes.clone(),
                    servings: *servings,
                },
                ctx.now,
            )?;
            writeln!(out, "Recorded {} for {}", entry.recipe_name, entry.date)?;
        }
        HistoryCommand::Recent { days } => {
            let days = days.unwrap_or(ctx.config.suggestions.recent_days);
            let ids = prefs.recent_meal_ids(days, ctx.now);
            if ids.is_empty() {
                writeln!(out, "Nothing eaten in the last {days} days")?;
            }
            for id in ids {
                let name = ctx.catalog.get(&id).map_or(id.as_str(), |r| r.name.as_str());
                writeln!(out, "- {name} ({id})")?;
            }
        }
        HistoryCommand::Clear => {
            prefs.clear_history()?;
            writeln!(out, "History cleared")?;
        }
    }
    Ok(())
}
