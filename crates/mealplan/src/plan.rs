use std::collections::HashMap;

use mealmate_recipe::{Catalog, MealType, NutritionInfo, Recipe};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use ulid::Ulid;

use crate::dates::{iso_date, week_start};
use crate::error::{PlanError, PlanResult};
use crate::storage::{KeyValueStore, PLANS_KEY, load_as, save_as};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    pub id: String,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealSlot>,
    #[serde(default)]
    pub snack: Vec<MealSlot>,
}

impl DayMeals {
    /// The single-slot entry for a meal type. Snacks are a list and return `None`.
    fn slot_mut(&mut self, meal_type: MealType) -> Option<&mut Option<MealSlot>> {
        match meal_type {
            MealType::Breakfast => Some(&mut self.breakfast),
            MealType::Lunch => Some(&mut self.lunch),
            MealType::Dinner => Some(&mut self.dinner),
            MealType::Snack => None,
        }
    }

    /// Every planned slot: breakfast, lunch, dinner, then snacks.
    pub fn slots(&self) -> impl Iterator<Item = &MealSlot> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snack.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.slots().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub day_of_week: String,
    pub meals: DayMeals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: String,
    #[serde(with = "iso_date")]
    pub week_start: Date,
    #[serde(with = "iso_date")]
    pub week_end: Date,
    pub days: Vec<DayPlan>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Plan id for the week starting on `start`.
pub fn plan_id(start: Date) -> String {
    format!("week-{start}")
}

impl WeeklyPlan {
    /// Seven empty days starting on the Monday of `any_day`'s week.
    pub fn empty(any_day: Date, now: OffsetDateTime) -> Self {
        let start = week_start(any_day);
        let days = (0..7)
            .map(|offset| {
                let date = start + Duration::days(offset);
                DayPlan {
                    date,
                    day_of_week: date.weekday().to_string(),
                    meals: DayMeals::default(),
                }
            })
            .collect();

        Self {
            id: plan_id(start),
            week_start: start,
            week_end: start + Duration::days(6),
            days,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn day(&self, date: Date) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.date == date)
    }

    fn day_mut(&mut self, date: Date) -> PlanResult<&mut DayPlan> {
        let week_start = self.week_start;
        self.days
            .iter_mut()
            .find(|d| d.date == date)
            .ok_or(PlanError::DateOutsideWeek { date, week_start })
    }

    /// Number of planned slots across the week.
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.slots().count()).sum()
    }
}

/// Nutrition of one slot, scaled by planned servings over recipe servings.
pub fn slot_nutrition(slot: &MealSlot, recipe: &Recipe) -> NutritionInfo {
    let factor = f64::from(slot.servings) / f64::from(recipe.servings.max(1));
    recipe.nutrition.scale(factor)
}

/// Weekly meal plans persisted under a single key, with a current-week cursor.
pub struct MealPlanner<S> {
    store: S,
    plans: HashMap<String, WeeklyPlan>,
    current_week_start: Date,
}

impl<S: KeyValueStore> MealPlanner<S> {
    /// Load all stored plans and point the cursor at the week containing `today`.
    pub fn load(store: S, today: Date) -> PlanResult<Self> {
        let plans: HashMap<String, WeeklyPlan> = load_as(&store, PLANS_KEY)?.unwrap_or_default();
        tracing::debug!(plans = plans.len(), "Loaded meal plans");

        Ok(Self {
            store,
            plans,
            current_week_start: week_start(today),
        })
    }

    pub fn current_week_start(&self) -> Date {
        self.current_week_start
    }

    /// The plan under the cursor, or an empty one if nothing is stored yet.
    pub fn current_week(&self) -> WeeklyPlan {
        self.plans
            .get(&plan_id(self.current_week_start))
            .cloned()
            .unwrap_or_else(|| WeeklyPlan::empty(self.current_week_start, OffsetDateTime::now_utc()))
    }

    pub fn stored_plan(&self, id: &str) -> Option<&WeeklyPlan> {
        self.plans.get(id)
    }

    pub fn go_to_week(&mut self, date: Date) {
        self.current_week_start = week_start(date);
    }

    pub fn go_to_next_week(&mut self) {
        self.current_week_start += Duration::weeks(1);
    }

    pub fn go_to_previous_week(&mut self) {
        self.current_week_start -= Duration::weeks(1);
    }

    /// Apply `change` to the current week and persist every plan.
    fn update_plan<T>(
        &mut self,
        change: impl FnOnce(&mut WeeklyPlan) -> PlanResult<T>,
    ) -> PlanResult<T> {
        let mut plan = self.current_week();
        let result = change(&mut plan)?;
        plan.updated_at = OffsetDateTime::now_utc();
        self.plans.insert(plan.id.clone(), plan);
        save_as(&self.store, PLANS_KEY, &self.plans)?;
        Ok(result)
    }

    /// Put a recipe in a slot. Snacks append; other meal types replace.
    ///
    /// `servings` defaults to the recipe's own servings.
    #[tracing::instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    pub fn add_meal(
        &mut self,
        date: Date,
        meal_type: MealType,
        recipe: &Recipe,
        servings: Option<u32>,
    ) -> PlanResult<MealSlot> {
        let servings = servings.unwrap_or(recipe.servings);
        if servings == 0 {
            return Err(PlanError::InvalidServings);
        }

        let slot = MealSlot {
            id: format!("{date}-{meal_type}-{}", Ulid::new()),
            meal_type,
            recipe_id: recipe.id.clone(),
            servings,
            notes: None,
            is_locked: false,
        };

        self.update_plan(|plan| {
            let day = plan.day_mut(date)?;
            match day.meals.slot_mut(meal_type) {
                Some(entry) => *entry = Some(slot.clone()),
                None => day.meals.snack.push(slot.clone()),
            }
            Ok(())
        })?;

        Ok(slot)
    }

    /// Same as [`add_meal`](Self::add_meal) but resolves the recipe by id.
    pub fn add_meal_by_id(
        &mut self,
        catalog: &Catalog,
        date: Date,
        meal_type: MealType,
        recipe_id: &str,
        servings: Option<u32>,
    ) -> PlanResult<MealSlot> {
        let recipe = catalog
            .get(recipe_id)
            .ok_or_else(|| PlanError::RecipeNotFound(recipe_id.to_owned()))?;
        self.add_meal(date, meal_type, recipe, servings)
    }

    /// Empty a slot. For snacks every snack of the day is removed.
    pub fn remove_meal(&mut self, date: Date, meal_type: MealType) -> PlanResult<()> {
        self.update_plan(|plan| {
            let day = plan.day_mut(date)?;
            match day.meals.slot_mut(meal_type) {
                Some(entry) => *entry = None,
                None => day.meals.snack.clear(),
            }
            Ok(())
        })
    }

    /// Change servings of a filled non-snack slot. Snacks and empty slots are left alone.
    pub fn update_servings(
        &mut self,
        date: Date,
        meal_type: MealType,
        servings: u32,
    ) -> PlanResult<()> {
        if servings == 0 {
            return Err(PlanError::InvalidServings);
        }

        self.update_plan(|plan| {
            let day = plan.day_mut(date)?;
            if let Some(Some(slot)) = day.meals.slot_mut(meal_type) {
                slot.servings = servings;
            }
            Ok(())
        })
    }

    /// Flip the lock on a filled non-snack slot and return the new state.
    pub fn toggle_lock(&mut self, date: Date, meal_type: MealType) -> PlanResult<Option<bool>> {
        if meal_type == MealType::Snack {
            return Ok(None);
        }

        self.update_plan(|plan| {
            let day = plan.day_mut(date)?;
            Ok(day.meals.slot_mut(meal_type).and_then(|entry| {
                entry.as_mut().map(|slot| {
                    slot.is_locked = !slot.is_locked;
                    slot.is_locked
                })
            }))
        })
    }

    pub fn clear_day(&mut self, date: Date) -> PlanResult<()> {
        self.update_plan(|plan| {
            plan.day_mut(date)?.meals = DayMeals::default();
            Ok(())
        })
    }

    pub fn clear_week(&mut self) -> PlanResult<()> {
        self.update_plan(|plan| {
            for day in &mut plan.days {
                day.meals = DayMeals::default();
            }
            Ok(())
        })
    }

    /// Overwrite `target`'s meals with a copy of `source`'s meals.
    pub fn copy_day(&mut self, source: Date, target: Date) -> PlanResult<()> {
        self.update_plan(|plan| {
            let meals = plan
                .day(source)
                .map(|d| d.meals.clone())
                .ok_or(PlanError::DateOutsideWeek {
                    date: source,
                    week_start: plan.week_start,
                })?;
            plan.day_mut(target)?.meals = meals;
            Ok(())
        })
    }

    /// Copy last week's meals day by day. Returns `false` when there is no stored previous week.
    pub fn copy_previous_week(&mut self) -> PlanResult<bool> {
        let previous_id = plan_id(self.current_week_start - Duration::weeks(1));
        let Some(previous) = self.plans.get(&previous_id).cloned() else {
            return Ok(false);
        };

        self.update_plan(|plan| {
            for (day, previous_day) in plan.days.iter_mut().zip(&previous.days) {
                day.meals = previous_day.meals.clone();
            }
            Ok(true)
        })
    }

    /// Planned nutrition for one day of the current week.
    ///
    /// Slots whose recipe is not in the catalog are skipped.
    pub fn day_nutrition(&self, catalog: &Catalog, date: Date) -> NutritionInfo {
        let plan = self.current_week();
        let Some(day) = plan.day(date) else {
            return NutritionInfo::default();
        };

        let scaled: Vec<NutritionInfo> = day
            .meals
            .slots()
            .filter_map(|slot| {
                catalog
                    .get(&slot.recipe_id)
                    .map(|recipe| slot_nutrition(slot, recipe))
            })
            .collect();

        if scaled.is_empty() {
            return NutritionInfo::default();
        }
        NutritionInfo::sum(&scaled)
    }

    pub fn week_nutrition(&self, catalog: &Catalog) -> NutritionInfo {
        let days: Vec<NutritionInfo> = self
            .current_week()
            .days
            .iter()
            .map(|day| self.day_nutrition(catalog, day.date))
            .collect();

        if days.iter().all(NutritionInfo::is_empty) {
            return NutritionInfo::default();
        }
        NutritionInfo::sum(&days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_empty_plan_starts_monday() {
        let plan = WeeklyPlan::empty(date!(2025 - 01 - 16), datetime!(2025-01-16 9:00 UTC));

        assert_eq!(plan.id, "week-2025-01-13");
        assert_eq!(plan.week_start, date!(2025 - 01 - 13));
        assert_eq!(plan.week_end, date!(2025 - 01 - 19));
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].day_of_week, "Monday");
        assert_eq!(plan.days[6].day_of_week, "Sunday");
        assert_eq!(plan.meal_count(), 0);
    }

    #[test]
    fn test_plan_json_uses_iso_dates() {
        let plan = WeeklyPlan::empty(date!(2025 - 01 - 13), datetime!(2025-01-13 0:00 UTC));
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["weekStart"], "2025-01-13");
        assert_eq!(json["days"][2]["date"], "2025-01-15");
        assert_eq!(json["days"][2]["dayOfWeek"], "Wednesday");
        assert_eq!(json["createdAt"], "2025-01-13T00:00:00Z");

        let back: WeeklyPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
