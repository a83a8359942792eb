use mealmate_mealplan::{MemoryStore, NutritionGoals, NutritionTracker, PlanError, ProgressStatus};
use mealmate_recipe::MealType;
use time::Duration;

use crate::helpers::{NOW, TODAY, catalog};

mod helpers;

#[test]
fn test_log_meal_scales_per_serving() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let idli = catalog.get("ka-rava-idli").expect("bundled recipe");
    let store = MemoryStore::new();
    let mut tracker = NutritionTracker::load(&store)?;

    let entry = tracker.log_meal(idli, MealType::Breakfast, 2.0, NOW)?;

    assert!(entry.id.starts_with("meal-"));
    assert_eq!(entry.nutrition.calories, 420.0);
    assert_eq!(entry.nutrition.protein, 13.0);

    let log = tracker.log_for(TODAY).expect("log for today");
    assert_eq!(log.date, TODAY);
    assert_eq!(log.meals.len(), 1);
    assert_eq!(log.totals.calories, 420.0);
    assert_eq!(log.goals, NutritionGoals::default());

    Ok(())
}

#[test]
fn test_remove_meal_updates_totals() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let store = MemoryStore::new();
    let mut tracker = NutritionTracker::load(&store)?;

    let breakfast = tracker.log_meal(
        catalog.get("ta-ven-pongal").expect("bundled recipe"),
        MealType::Breakfast,
        1.0,
        NOW,
    )?;
    tracker.log_meal(
        catalog.get("bn-macher-jhol").expect("bundled recipe"),
        MealType::Lunch,
        1.5,
        NOW,
    )?;
    assert_eq!(tracker.totals_for(TODAY).calories, 800.0);

    assert!(tracker.remove_meal(TODAY, &breakfast.id)?);
    assert!(!tracker.remove_meal(TODAY, &breakfast.id)?);
    assert_eq!(tracker.totals_for(TODAY).calories, 510.0);

    tracker.clear_day(TODAY)?;
    assert!(tracker.log_for(TODAY).is_none());
    assert!(tracker.totals_for(TODAY).is_empty());

    Ok(())
}

#[test]
fn test_progress_against_goals() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let store = MemoryStore::new();
    let mut tracker = NutritionTracker::load(&store)?;

    tracker.log_meal(
        catalog.get("mg-mutton-biryani").expect("bundled recipe"),
        MealType::Lunch,
        3.0,
        NOW,
    )?;

    let progress = tracker.progress(TODAY);
    assert_eq!(progress.calories.consumed, 1830.0);
    assert_eq!(progress.calories.status, ProgressStatus::OnTrack);
    assert_eq!(progress.calories.remaining, 170.0);
    assert_eq!(progress.protein.status, ProgressStatus::Over);
    assert_eq!(progress.protein.remaining, 0.0);
    assert!(progress.fiber.is_some());

    tracker.set_goals(NutritionGoals {
        daily_fiber: None,
        ..NutritionGoals::default()
    })?;
    assert!(tracker.progress(TODAY).fiber.is_none());

    Ok(())
}

#[test]
fn test_goal_presets() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let mut tracker = NutritionTracker::load(&store)?;

    tracker.set_goals_from_preset("weight-loss")?;
    let calories = tracker.goals().daily_calories;
    assert!(calories < 2000.0);

    let unknown = tracker.set_goals_from_preset("carnivore");
    assert!(matches!(unknown, Err(PlanError::UnknownPreset(id)) if id == "carnivore"));
    assert_eq!(tracker.goals().daily_calories, calories);

    let reloaded = NutritionTracker::load(&store)?;
    assert_eq!(reloaded.goals().daily_calories, calories);

    Ok(())
}

#[test]
fn test_week_summary_covers_last_seven_days() -> anyhow::Result<()> {
    let catalog = catalog()?;
    let pongal = catalog.get("ta-ven-pongal").expect("bundled recipe");
    let pasta = catalog.get("it-pasta-pomodoro").expect("bundled recipe");
    let store = MemoryStore::new();
    let mut tracker = NutritionTracker::load(&store)?;

    assert_eq!(tracker.week_summary(TODAY).days_logged, 0);

    tracker.log_meal(pongal, MealType::Breakfast, 1.0, NOW)?;
    tracker.log_meal(pasta, MealType::Dinner, 1.0, NOW - Duration::days(6))?;
    tracker.log_meal(pasta, MealType::Dinner, 1.0, NOW - Duration::days(7))?;

    assert_eq!(tracker.recent_logs(TODAY).len(), 2);

    let summary = tracker.week_summary(TODAY);
    assert_eq!(summary.days_logged, 2);
    assert_eq!(summary.averages.calories, 385.0);
    assert_eq!(summary.averages.fiber, 5.0);

    Ok(())
}
