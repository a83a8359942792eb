use mealmate::cli::catalog::{self, CatalogArgs};
use mealmate::cli::nutrition::{NutritionArgs, NutritionCommand, run};
use mealmate_recipe::MealType;
use temp_dir::TempDir;

use crate::helpers::{output, test_context};

mod helpers;

fn nutrition(command: NutritionCommand) -> NutritionArgs {
    NutritionArgs { command }
}

fn log(recipe: &str, servings: f64) -> NutritionArgs {
    nutrition(NutritionCommand::Log {
        recipe: recipe.to_owned(),
        meal: MealType::Dinner,
        servings,
    })
}

#[test]
fn test_log_and_progress() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let ctx = test_context(dir.path())?;

    let logged = output(|out| run(&ctx, &log("ka-koli-saaru", 1.0), out))?;
    assert!(logged.starts_with("Logged Koli Saaru (420 kcal) as meal-"));

    let progress = output(|out| run(&ctx, &nutrition(NutritionCommand::Progress { date: None }), out))?;
    assert!(progress.starts_with("Progress for 2025-01-15\n"));
    assert!(progress.contains("Calories  420/2000 kcal (21%, under) 1580 kcal left"));
    assert!(progress.contains("Fiber"));

    let summary = output(|out| run(&ctx, &nutrition(NutritionCommand::Summary), out))?;
    assert!(summary.starts_with("Days logged: 1\nDaily average: 420 kcal"));

    Ok(())
}

#[test]
fn test_remove_logged_meal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let ctx = test_context(dir.path())?;

    run(&ctx, &log("it-pasta-pomodoro", 2.0), &mut Vec::new())?;
    let entry_id = ctx
        .tracker()?
        .log_for(ctx.today())
        .and_then(|day| day.meals.first())
        .map(|meal| meal.id.clone())
        .expect("logged meal");

    let removed = output(|out| {
        run(&ctx, &nutrition(NutritionCommand::Remove { id: entry_id.clone() }), out)
    })?;
    assert_eq!(removed, format!("Removed {entry_id}\n"));
    assert!(ctx.tracker()?.totals_for(ctx.today()).is_empty());

    Ok(())
}

#[test]
fn test_presets() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let ctx = test_context(dir.path())?;

    let listed = output(|out| run(&ctx, &nutrition(NutritionCommand::Preset { id: None }), out))?;
    assert_eq!(listed.lines().count(), 6);
    assert!(listed.contains("weight-loss"));

    let set = output(|out| {
        run(
            &ctx,
            &nutrition(NutritionCommand::Preset {
                id: Some("muscle-gain".to_owned()),
            }),
            out,
        )
    })?;
    assert!(set.starts_with("Goals set to muscle-gain: 2500 kcal | protein 150g"));

    let unknown = run(
        &ctx,
        &nutrition(NutritionCommand::Preset {
            id: Some("paleo".to_owned()),
        }),
        &mut Vec::new(),
    );
    assert!(unknown.is_err());

    Ok(())
}

#[test]
fn test_rejects_bad_log_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let ctx = test_context(dir.path())?;

    assert!(run(&ctx, &log("ka-koli-saaru", 0.0), &mut Vec::new()).is_err());
    assert!(run(&ctx, &log("unknown", 1.0), &mut Vec::new()).is_err());
    assert!(ctx.tracker()?.log_for(ctx.today()).is_none());

    Ok(())
}

#[test]
fn test_catalog_overview_and_detail() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let ctx = test_context(dir.path())?;

    let overview = output(|out| catalog::run(&ctx, &CatalogArgs::default(), out))?;
    assert_eq!(
        overview,
        "14 recipes across 11 cuisines: 8 veg, 2 egg, 4 non-veg, 5 quick\n"
    );

    let args = CatalogArgs {
        id: Some("ka-rava-idli".to_owned()),
    };
    let detail = output(|out| catalog::run(&ctx, &args, out))?;
    assert!(detail.starts_with("Rava Idli (ka-rava-idli) | karnataka | veg"));
    assert!(detail.contains("  - 8 pieces Cashews (optional)\n"));
    assert!(detail.contains("Steps:\n  1. "));

    Ok(())
}
