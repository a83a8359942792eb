use std::io::Write;

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use mealmate_mealplan::{NUTRITION_PRESETS, NutritionProgress, parse_iso_date};
use mealmate_recipe::MealType;
use time::Date;

use crate::context::AppContext;

#[derive(Debug, Clone, Args)]
pub struct NutritionArgs {
    #[command(subcommand)]
    pub command: NutritionCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum NutritionCommand {
    /// Log an eaten meal for today
    Log {
        #[arg(long)]
        recipe: String,
        #[arg(long)]
        meal: MealType,
        #[arg(long, default_value_t = 1.0)]
        servings: f64,
    },
    /// Remove a logged meal from today
    Remove { id: String },
    /// Progress against goals for a day
    Progress {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
    },
    /// Average daily intake over the last seven days
    Summary,
    /// Apply a goal preset, or list presets without an id
    Preset { id: Option<String> },
}

fn write_progress(
    out: &mut impl Write,
    label: &str,
    unit: &str,
    progress: &NutritionProgress,
) -> Result<()> {
    writeln!(
        out,
        "{label:<9} {:.0}/{:.0}{unit} ({:.0}%, {}) {:.0}{unit} left",
        progress.consumed, progress.goal, progress.percentage, progress.status, progress.remaining
    )?;
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn run(ctx: &AppContext, args: &NutritionArgs, out: &mut impl Write) -> Result<()> {
    let mut tracker = ctx.tracker()?;

    match &args.command {
        NutritionCommand::Log {
            recipe,
            meal,
            servings,
        } => {
            if servings.is_nan() || *servings <= 0.0 {
                return Err(anyhow!("Servings must be greater than 0"));
            }
            let recipe = ctx
                .catalog
                .get(recipe)
                .ok_or_else(|| anyhow!("Recipe not found: {recipe}"))?;
            let entry = tracker.log_meal(recipe, *meal, *servings, ctx.now)?;
            writeln!(
                out,
                "Logged {} ({} kcal) as {}",
                entry.recipe_name, entry.nutrition.calories, entry.id
            )?;
        }
        NutritionCommand::Remove { id } => {
            if tracker.remove_meal(ctx.today(), id)? {
                writeln!(out, "Removed {id}")?;
            } else {
                writeln!(out, "No logged meal {id} today")?;
            }
        }
        NutritionCommand::Progress { date } => {
            let progress = tracker.progress(date.unwrap_or(ctx.today()));
            writeln!(out, "Progress for {}", progress.date)?;
            write_progress(out, "Calories", " kcal", &progress.calories)?;
            write_progress(out, "Protein", "g", &progress.protein)?;
            write_progress(out, "Carbs", "g", &progress.carbs)?;
            write_progress(out, "Fat", "g", &progress.fat)?;
            if let Some(fiber) = &progress.fiber {
                write_progress(out, "Fiber", "g", fiber)?;
            }
        }
        NutritionCommand::Summary => {
            let summary = tracker.week_summary(ctx.today());
            writeln!(out, "Days logged: {}", summary.days_logged)?;
            writeln!(
                out,
                "Daily average: {} kcal | protein {}g | carbs {}g | fat {}g | fiber {}g",
                summary.averages.calories,
                summary.averages.protein,
                summary.averages.carbohydrates,
                summary.averages.fat,
                summary.averages.fiber
            )?;
        }
        NutritionCommand::Preset { id: Some(id) } => {
            tracker.set_goals_from_preset(id)?;
            let goals = tracker.goals();
            writeln!(
                out,
                "Goals set to {id}: {} kcal | protein {}g | carbs {}g | fat {}g",
                goals.daily_calories, goals.daily_protein, goals.daily_carbs, goals.daily_fat
            )?;
        }
        NutritionCommand::Preset { id: None } => {
            for preset in NUTRITION_PRESETS {
                writeln!(out, "{:<20} {} - {}", preset.id, preset.name, preset.description)?;
            }
        }
    }
    Ok(())
}
