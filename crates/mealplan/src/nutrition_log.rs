use std::collections::BTreeMap;

use mealmate_recipe::{MealType, NutritionInfo, Recipe};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::{Date, Duration, OffsetDateTime};
use ulid::Ulid;

use crate::dates::iso_date;
use crate::error::{PlanError, PlanResult};
use crate::storage::{KeyValueStore, NUTRITION_GOALS_KEY, NUTRITION_LOGS_KEY, load_as, save_as};

/// Daily targets. Macros in grams, sodium in mg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    pub daily_calories: f64,
    pub daily_protein: f64,
    pub daily_carbs: f64,
    pub daily_fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sugar: Option<f64>,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        NUTRITION_PRESETS[0].goals.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub goals: NutritionGoals,
}

const fn goals(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64, sodium: f64) -> NutritionGoals {
    NutritionGoals {
        daily_calories: calories,
        daily_protein: protein,
        daily_carbs: carbs,
        daily_fat: fat,
        daily_fiber: Some(fiber),
        daily_sodium: Some(sodium),
        daily_sugar: None,
    }
}

pub const NUTRITION_PRESETS: &[NutritionPreset] = &[
    NutritionPreset {
        id: "balanced",
        name: "Balanced Diet",
        description: "Standard balanced nutrition for maintaining weight",
        goals: goals(2000.0, 50.0, 250.0, 65.0, 25.0, 2300.0),
    },
    NutritionPreset {
        id: "weight-loss",
        name: "Weight Loss",
        description: "Calorie deficit for gradual weight loss",
        goals: goals(1500.0, 75.0, 150.0, 50.0, 30.0, 2000.0),
    },
    NutritionPreset {
        id: "muscle-gain",
        name: "Muscle Building",
        description: "High protein for muscle growth",
        goals: goals(2500.0, 150.0, 300.0, 70.0, 30.0, 2500.0),
    },
    NutritionPreset {
        id: "low-carb",
        name: "Low Carb",
        description: "Reduced carbohydrates for metabolic health",
        goals: goals(1800.0, 100.0, 100.0, 100.0, 25.0, 2300.0),
    },
    NutritionPreset {
        id: "high-protein",
        name: "High Protein",
        description: "Maximum protein intake for athletes",
        goals: goals(2200.0, 165.0, 200.0, 70.0, 30.0, 2500.0),
    },
    NutritionPreset {
        id: "vegetarian-balanced",
        name: "Vegetarian Balanced",
        description: "Balanced nutrition with plant-based protein focus",
        goals: goals(2000.0, 60.0, 275.0, 60.0, 35.0, 2300.0),
    },
];

pub fn find_preset(id: &str) -> Option<&'static NutritionPreset> {
    NUTRITION_PRESETS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub meal_type: MealType,
    pub servings: f64,
    pub nutrition: NutritionInfo,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionLog {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meals: Vec<MealEntry>,
    pub totals: NutritionInfo,
    pub goals: NutritionGoals,
}

impl DailyNutritionLog {
    fn recompute_totals(&mut self) {
        self.totals = NutritionInfo::sum(self.meals.iter().map(|m| &m.nutrition));
    }
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    Under,
    OnTrack,
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionProgress {
    pub consumed: f64,
    pub goal: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub status: ProgressStatus,
}

impl NutritionProgress {
    /// Below 80% is under, up to 110% inclusive is on track, above is over.
    pub fn new(consumed: f64, goal: f64) -> Self {
        let percentage = if goal > 0.0 {
            consumed / goal * 100.0
        } else {
            0.0
        };
        let status = if percentage < 80.0 {
            ProgressStatus::Under
        } else if percentage <= 110.0 {
            ProgressStatus::OnTrack
        } else {
            ProgressStatus::Over
        };

        Self {
            consumed,
            goal,
            percentage,
            remaining: (goal - consumed).max(0.0),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub calories: NutritionProgress,
    pub protein: NutritionProgress,
    pub carbs: NutritionProgress,
    pub fat: NutritionProgress,
    pub fiber: Option<NutritionProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub averages: NutritionInfo,
    pub days_logged: usize,
}

/// Goals plus per-day consumption logs.
pub struct NutritionTracker<S> {
    store: S,
    goals: NutritionGoals,
    logs: BTreeMap<String, DailyNutritionLog>,
}

impl<S: KeyValueStore> NutritionTracker<S> {
    pub fn load(store: S) -> PlanResult<Self> {
        let goals: NutritionGoals = load_as(&store, NUTRITION_GOALS_KEY)?.unwrap_or_default();
        let logs: BTreeMap<String, DailyNutritionLog> =
            load_as(&store, NUTRITION_LOGS_KEY)?.unwrap_or_default();
        tracing::debug!(days = logs.len(), "Loaded nutrition logs");

        Ok(Self { store, goals, logs })
    }

    pub fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    pub fn set_goals(&mut self, goals: NutritionGoals) -> PlanResult<()> {
        self.goals = goals;
        save_as(&self.store, NUTRITION_GOALS_KEY, &self.goals)?;
        Ok(())
    }

    pub fn set_goals_from_preset(&mut self, preset_id: &str) -> PlanResult<()> {
        let preset =
            find_preset(preset_id).ok_or_else(|| PlanError::UnknownPreset(preset_id.to_owned()))?;
        self.set_goals(preset.goals.clone())
    }

    fn save_logs(&self) -> PlanResult<()> {
        save_as(&self.store, NUTRITION_LOGS_KEY, &self.logs)?;
        Ok(())
    }

    /// Record a consumed meal on the day of `now`.
    ///
    /// Recipe nutrition is per serving, so it is scaled by `servings` directly.
    #[tracing::instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    pub fn log_meal(
        &mut self,
        recipe: &Recipe,
        meal_type: MealType,
        servings: f64,
        now: OffsetDateTime,
    ) -> PlanResult<MealEntry> {
        let entry = MealEntry {
            id: format!("meal-{}", Ulid::new()),
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            meal_type,
            servings,
            nutrition: recipe.nutrition.scale(servings),
            timestamp: now,
        };

        let today = now.date();
        let goals = self.goals.clone();
        let log = self
            .logs
            .entry(today.to_string())
            .or_insert_with(|| DailyNutritionLog {
                date: today,
                meals: Vec::new(),
                totals: NutritionInfo::default(),
                goals: goals.clone(),
            });
        log.meals.push(entry.clone());
        log.goals = goals;
        log.recompute_totals();

        self.save_logs()?;
        Ok(entry)
    }

    /// Remove a logged meal from `today`. Returns whether anything was removed.
    pub fn remove_meal(&mut self, today: Date, meal_id: &str) -> PlanResult<bool> {
        let Some(log) = self.logs.get_mut(&today.to_string()) else {
            return Ok(false);
        };
        let before = log.meals.len();
        log.meals.retain(|m| m.id != meal_id);
        let removed = log.meals.len() != before;
        log.recompute_totals();

        self.save_logs()?;
        Ok(removed)
    }

    pub fn clear_day(&mut self, today: Date) -> PlanResult<()> {
        self.logs.remove(&today.to_string());
        self.save_logs()
    }

    pub fn log_for(&self, date: Date) -> Option<&DailyNutritionLog> {
        self.logs.get(&date.to_string())
    }

    pub fn totals_for(&self, date: Date) -> NutritionInfo {
        self.log_for(date)
            .map(|log| log.totals.clone())
            .unwrap_or_default()
    }

    /// Progress of `date` against the current goals. Fiber is tracked only with a fiber goal.
    pub fn progress(&self, date: Date) -> DailyProgress {
        let totals = self.totals_for(date);
        let goals = &self.goals;

        DailyProgress {
            date,
            calories: NutritionProgress::new(totals.calories, goals.daily_calories),
            protein: NutritionProgress::new(totals.protein, goals.daily_protein),
            carbs: NutritionProgress::new(totals.carbohydrates, goals.daily_carbs),
            fat: NutritionProgress::new(totals.fat, goals.daily_fat),
            fiber: goals
                .daily_fiber
                .filter(|fiber| *fiber > 0.0)
                .map(|fiber| NutritionProgress::new(totals.fiber, fiber)),
        }
    }

    /// Logs for `today` and the six days before it, newest first.
    pub fn recent_logs(&self, today: Date) -> Vec<&DailyNutritionLog> {
        (0..7)
            .filter_map(|days_ago| self.log_for(today - Duration::days(days_ago)))
            .collect()
    }

    /// Rounded per-day averages over the logged days of the last week.
    pub fn week_summary(&self, today: Date) -> WeekSummary {
        let logs = self.recent_logs(today);
        if logs.is_empty() {
            return WeekSummary {
                averages: NutritionInfo::default(),
                days_logged: 0,
            };
        }

        let totals = NutritionInfo::sum(logs.iter().map(|log| &log.totals));
        let days = logs.len() as f64;
        let average = |value: f64| (value / days).round();

        WeekSummary {
            averages: NutritionInfo {
                calories: average(totals.calories),
                protein: average(totals.protein),
                carbohydrates: average(totals.carbohydrates),
                fat: average(totals.fat),
                fiber: average(totals.fiber),
                sugar: average(totals.sugar),
                sodium: average(totals.sodium),
                cholesterol: None,
            },
            days_logged: logs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_status_bands() {
        assert_eq!(NutritionProgress::new(1500.0, 2000.0).status, ProgressStatus::Under);
        assert_eq!(NutritionProgress::new(1600.0, 2000.0).status, ProgressStatus::OnTrack);
        assert_eq!(NutritionProgress::new(2200.0, 2000.0).status, ProgressStatus::OnTrack);
        assert_eq!(NutritionProgress::new(2201.0, 2000.0).status, ProgressStatus::Over);
    }

    #[test]
    fn test_progress_with_zero_goal() {
        let progress = NutritionProgress::new(300.0, 0.0);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.status, ProgressStatus::Under);
    }

    #[test]
    fn test_presets() {
        assert_eq!(NUTRITION_PRESETS.len(), 6);
        assert_eq!(NutritionGoals::default().daily_calories, 2000.0);
        assert_eq!(find_preset("muscle-gain").map(|p| p.goals.daily_protein), Some(150.0));
        assert!(find_preset("keto").is_none());
        assert_eq!(ProgressStatus::OnTrack.to_string(), "on-track");
    }
}
