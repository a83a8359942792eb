use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use mealmate_mealplan::{KeyValueStore, MealPlanner, MealSlot, WeeklyPlan, parse_iso_date};
use mealmate_recipe::{Catalog, MealType, NutritionInfo};
use mealmate_shopping::{ShoppingListService, group_by_category};
use time::Date;

use crate::context::AppContext;

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Any day of the week to work on (defaults to this week)
    #[arg(long, global = true, value_parser = parse_iso_date)]
    pub week: Option<Date>,

    #[command(subcommand)]
    pub command: PlanCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PlanCommand {
    /// Print the week with planned nutrition
    Show,
    /// Put a recipe in a slot (snacks append)
    Add {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
        #[arg(long)]
        meal: MealType,
        #[arg(long)]
        recipe: String,
        #[arg(long)]
        servings: Option<u32>,
    },
    /// Empty a slot
    Remove {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
        #[arg(long)]
        meal: MealType,
    },
    /// Change the servings of a slot
    Servings {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
        #[arg(long)]
        meal: MealType,
        servings: u32,
    },
    /// Lock or unlock a slot
    Lock {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
        #[arg(long)]
        meal: MealType,
    },
    /// Clear one day, or the whole week without `--date`
    Clear {
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<Date>,
    },
    /// Copy one day's meals onto another day
    CopyDay {
        #[arg(value_parser = parse_iso_date)]
        from: Date,
        #[arg(value_parser = parse_iso_date)]
        to: Date,
    },
    /// Copy last week's meals into this week
    CopyPrevious,
    /// Shopping list for the week
    Shopping,
}

fn write_slot(out: &mut impl Write, catalog: &Catalog, slot: &MealSlot) -> Result<()> {
    let name = catalog
        .get(&slot.recipe_id)
        .map_or(slot.recipe_id.as_str(), |recipe| recipe.name.as_str());
    let lock = if slot.is_locked { " [locked]" } else { "" };
    writeln!(
        out,
        "  {:<9} {name} x{}{lock}",
        slot.meal_type.to_string(),
        slot.servings
    )?;
    Ok(())
}

fn write_nutrition(out: &mut impl Write, label: &str, nutrition: &NutritionInfo) -> Result<()> {
    writeln!(
        out,
        "{label}: {} kcal | protein {}g | carbs {}g | fat {}g",
        nutrition.calories, nutrition.protein, nutrition.carbohydrates, nutrition.fat
    )?;
    Ok(())
}

fn write_week(
    out: &mut impl Write,
    ctx: &AppContext,
    planner: &MealPlanner<impl KeyValueStore>,
    plan: &WeeklyPlan,
) -> Result<()> {
    writeln!(out, "Week of {} to {}", plan.week_start, plan.week_end)?;
    for day in &plan.days {
        writeln!(out, "{} {}", day.day_of_week, day.date)?;
        if day.meals.is_empty() {
            writeln!(out, "  (nothing planned)")?;
            continue;
        }
        for slot in day.meals.slots() {
            write_slot(out, &ctx.catalog, slot)?;
        }
    }
    write_nutrition(out, "Week total", &planner.week_nutrition(&ctx.catalog))?;
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn run(ctx: &AppContext, args: &PlanArgs, out: &mut impl Write) -> Result<()> {
    let mut planner = ctx.planner()?;
    if let Some(week) = args.week {
        planner.go_to_week(week);
    }
    let today = ctx.today();
    let day = |date: Option<Date>| date.unwrap_or(today);

    match &args.command {
        PlanCommand::Show => {
            let plan = planner.current_week();
            write_week(out, ctx, &planner, &plan)?;
        }
        PlanCommand::Add {
            date,
            meal,
            recipe,
            servings,
        } => {
            let date = day(*date);
            let slot = planner.add_meal_by_id(&ctx.catalog, date, *meal, recipe, *servings)?;
            writeln!(out, "Added {} to {meal} on {date}", slot.recipe_id)?;
            write_nutrition(out, "Day total", &planner.day_nutrition(&ctx.catalog, date))?;
        }
        PlanCommand::Remove { date, meal } => {
            let date = day(*date);
            planner.remove_meal(date, *meal)?;
            writeln!(out, "Removed {meal} on {date}")?;
        }
        PlanCommand::Servings {
            date,
            meal,
            servings,
        } => {
            let date = day(*date);
            planner.update_servings(date, *meal, *servings)?;
            writeln!(out, "Set {meal} on {date} to {servings} servings")?;
        }
        PlanCommand::Lock { date, meal } => {
            let date = day(*date);
            match planner.toggle_lock(date, *meal)? {
                Some(true) => writeln!(out, "Locked {meal} on {date}")?,
                Some(false) => writeln!(out, "Unlocked {meal} on {date}")?,
                None => writeln!(out, "Nothing to lock for {meal} on {date}")?,
            }
        }
        PlanCommand::Clear { date: Some(date) } => {
            planner.clear_day(*date)?;
            writeln!(out, "Cleared {date}")?;
        }
        PlanCommand::Clear { date: None } => {
            planner.clear_week()?;
            writeln!(out, "Cleared week of {}", planner.current_week_start())?;
        }
        PlanCommand::CopyDay { from, to } => {
            planner.copy_day(*from, *to)?;
            writeln!(out, "Copied {from} to {to}")?;
        }
        PlanCommand::CopyPrevious => {
            if planner.copy_previous_week()? {
                writeln!(out, "Copied last week's plan")?;
            } else {
                writeln!(out, "No plan found for last week")?;
            }
        }
        PlanCommand::Shopping => {
            let items = ShoppingListService::generate(&planner.current_week(), &ctx.catalog);
            if items.is_empty() {
                writeln!(out, "Shopping list is empty.")?;
            }
            for (category, group) in group_by_category(&items) {
                writeln!(out, "{category}")?;
                for item in group {
                    writeln!(
                        out,
                        "  [ ] {} {} {} ({})",
                        item.name,
                        item.display_quantity(),
                        item.unit,
                        item.recipes.join(", ")
                    )?;
                }
            }
        }
    }
    Ok(())
}
