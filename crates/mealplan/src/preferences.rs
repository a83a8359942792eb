use mealmate_recipe::{CuisineType, DietType, MealType};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use ulid::Ulid;

use crate::dates::iso_date;
use crate::error::PlanResult;
use crate::nutrition_log::NutritionGoals;
use crate::storage::{HISTORY_KEY, KeyValueStore, PANTRY_KEY, PREFERENCES_KEY, load_as, save_as};

pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Priority used for cuisines enabled without an explicit ranking.
const DEFAULT_CUISINE_PRIORITY: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisinePreference {
    pub cuisine: CuisineType,
    /// 1-5, higher is more preferred.
    pub priority: u8,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreference {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_cuisines: Vec<CuisineType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cook_time: Option<u32>,
    #[serde(default)]
    pub prefer_light: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPreferences {
    pub breakfast: MealPreference,
    pub lunch: MealPreference,
    pub dinner: MealPreference,
    pub snack: MealPreference,
}

impl MealPreferences {
    pub fn get(&self, meal_type: MealType) -> &MealPreference {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }
}

impl Default for MealPreferences {
    fn default() -> Self {
        let meal = |max_cook_time, prefer_light| MealPreference {
            enabled: true,
            preferred_cuisines: Vec::new(),
            max_cook_time: Some(max_cook_time),
            prefer_light,
        };

        Self {
            breakfast: meal(30, true),
            lunch: meal(45, false),
            dinner: meal(60, false),
            snack: meal(15, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub dietary_preference: DietType,
    pub cuisine_preferences: Vec<CuisinePreference>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub disliked_ingredients: Vec<String>,
    pub spice_tolerance_max: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cooking_time: Option<u32>,
    #[serde(default)]
    pub prefer_quick_meals: bool,
    pub nutrition_goals: NutritionGoals,
    #[serde(default)]
    pub meal_preferences: MealPreferences,
}

impl Default for UserPreferences {
    fn default() -> Self {
        let cuisine = |cuisine, priority| CuisinePreference {
            cuisine,
            priority,
            enabled: true,
        };

        Self {
            dietary_preference: DietType::NonVeg,
            cuisine_preferences: vec![
                cuisine(CuisineType::Karnataka, 5),
                cuisine(CuisineType::Tamil, 4),
                cuisine(CuisineType::Kerala, 4),
                cuisine(CuisineType::Andhra, 3),
                cuisine(CuisineType::Punjabi, 3),
                cuisine(CuisineType::IndoChinese, 4),
            ],
            allergies: Vec::new(),
            disliked_ingredients: Vec::new(),
            spice_tolerance_max: 4,
            max_cooking_time: Some(60),
            prefer_quick_meals: false,
            nutrition_goals: NutritionGoals {
                daily_calories: 2000.0,
                daily_protein: 60.0,
                daily_carbs: 250.0,
                daily_fat: 65.0,
                daily_fiber: Some(25.0),
                daily_sodium: None,
                daily_sugar: None,
            },
            meal_preferences: MealPreferences::default(),
        }
    }
}

impl UserPreferences {
    /// Enabled cuisines, highest priority first. Equal priorities keep list order.
    pub fn ranked_cuisines(&self) -> Vec<CuisineType> {
        let mut enabled: Vec<&CuisinePreference> =
            self.cuisine_preferences.iter().filter(|c| c.enabled).collect();
        enabled.sort_by(|a, b| b.priority.cmp(&a.priority));
        enabled.into_iter().map(|c| c.cuisine).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealHistoryEntry {
    pub id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub meal_type: MealType,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub servings: u32,
}

/// History entry before an id and timestamp are assigned.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub recipe_id: String,
    pub recipe_name: String,
    pub meal_type: MealType,
    pub date: Date,
    pub rating: Option<u8>,
    pub notes: Option<String>,
    pub servings: u32,
}

/// User preferences, eaten-meal history and pantry contents.
pub struct PreferenceStore<S> {
    store: S,
    preferences: UserPreferences,
    history: Vec<MealHistoryEntry>,
    pantry: Vec<String>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn load(store: S) -> PlanResult<Self> {
        let preferences: UserPreferences = load_as(&store, PREFERENCES_KEY)?.unwrap_or_default();
        let history: Vec<MealHistoryEntry> = load_as(&store, HISTORY_KEY)?.unwrap_or_default();
        let pantry: Vec<String> = load_as(&store, PANTRY_KEY)?.unwrap_or_default();

        Ok(Self {
            store,
            preferences,
            history,
            pantry,
        })
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Apply a change to the preferences and persist them.
    pub fn update(&mut self, change: impl FnOnce(&mut UserPreferences)) -> PlanResult<()> {
        change(&mut self.preferences);
        save_as(&self.store, PREFERENCES_KEY, &self.preferences)?;
        Ok(())
    }

    /// Enable or disable a cuisine, adding it at the default priority if unknown.
    pub fn toggle_cuisine(&mut self, cuisine: CuisineType, enabled: bool) -> PlanResult<()> {
        self.update(|prefs| {
            match prefs
                .cuisine_preferences
                .iter_mut()
                .find(|c| c.cuisine == cuisine)
            {
                Some(existing) => existing.enabled = enabled,
                None => prefs.cuisine_preferences.push(CuisinePreference {
                    cuisine,
                    priority: DEFAULT_CUISINE_PRIORITY,
                    enabled,
                }),
            }
        })
    }

    pub fn set_cuisine_priority(&mut self, cuisine: CuisineType, priority: u8) -> PlanResult<()> {
        self.update(|prefs| {
            for c in prefs
                .cuisine_preferences
                .iter_mut()
                .filter(|c| c.cuisine == cuisine)
            {
                c.priority = priority;
            }
        })
    }

    pub fn add_allergy(&mut self, allergy: &str) -> PlanResult<()> {
        self.update(|prefs| {
            if !prefs.allergies.iter().any(|a| a == allergy) {
                prefs.allergies.push(allergy.to_owned());
            }
        })
    }

    pub fn remove_allergy(&mut self, allergy: &str) -> PlanResult<()> {
        self.update(|prefs| prefs.allergies.retain(|a| a != allergy))
    }

    pub fn reset(&mut self) -> PlanResult<()> {
        self.history.clear();
        self.pantry.clear();
        save_as(&self.store, HISTORY_KEY, &self.history)?;
        save_as(&self.store, PANTRY_KEY, &self.pantry)?;
        self.update(|prefs| *prefs = UserPreferences::default())
    }

    pub fn history(&self) -> &[MealHistoryEntry] {
        &self.history
    }

    /// Record an eaten meal at the front of the history, keeping the newest 100.
    pub fn add_to_history(
        &mut self,
        entry: NewHistoryEntry,
        now: OffsetDateTime,
    ) -> PlanResult<MealHistoryEntry> {
        let entry = MealHistoryEntry {
            id: format!("meal-{}", Ulid::new()),
            recipe_id: entry.recipe_id,
            recipe_name: entry.recipe_name,
            meal_type: entry.meal_type,
            date: entry.date,
            timestamp: now,
            rating: entry.rating,
            notes: entry.notes,
            servings: entry.servings,
        };

        self.history.insert(0, entry.clone());
        self.history.truncate(MAX_HISTORY_ENTRIES);
        save_as(&self.store, HISTORY_KEY, &self.history)?;

        tracing::debug!(recipe_id = %entry.recipe_id, "Added meal to history");
        Ok(entry)
    }

    pub fn remove_from_history(&mut self, id: &str) -> PlanResult<()> {
        self.history.retain(|m| m.id != id);
        save_as(&self.store, HISTORY_KEY, &self.history)?;
        Ok(())
    }

    pub fn clear_history(&mut self) -> PlanResult<()> {
        self.history.clear();
        save_as(&self.store, HISTORY_KEY, &self.history)?;
        Ok(())
    }

    /// Recipe ids eaten after `now - days`, most recent first.
    pub fn recent_meal_ids(&self, days: u32, now: OffsetDateTime) -> Vec<String> {
        let cutoff = now - Duration::days(i64::from(days));
        self.history
            .iter()
            .filter(|m| m.timestamp > cutoff)
            .map(|m| m.recipe_id.clone())
            .collect()
    }

    pub fn pantry(&self) -> &[String] {
        &self.pantry
    }

    /// Add a trimmed pantry item unless it is blank or already present, ignoring case.
    /// Returns whether the pantry changed.
    pub fn add_available_ingredient(&mut self, ingredient: &str) -> PlanResult<bool> {
        let trimmed = ingredient.trim();
        let normalized = trimmed.to_lowercase();
        if normalized.is_empty() || self.pantry.iter().any(|i| i.to_lowercase() == normalized) {
            return Ok(false);
        }

        self.pantry.push(trimmed.to_owned());
        save_as(&self.store, PANTRY_KEY, &self.pantry)?;
        Ok(true)
    }

    pub fn remove_available_ingredient(&mut self, ingredient: &str) -> PlanResult<()> {
        self.pantry.retain(|i| i != ingredient);
        save_as(&self.store, PANTRY_KEY, &self.pantry)?;
        Ok(())
    }

    pub fn clear_available_ingredients(&mut self) -> PlanResult<()> {
        self.pantry.clear();
        save_as(&self.store, PANTRY_KEY, &self.pantry)?;
        Ok(())
    }
}
