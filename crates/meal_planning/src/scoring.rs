use mealmate_recipe::{CuisineType, DietType, MealType, Recipe};
use serde::{Deserialize, Serialize};

const BASE_SCORE: f64 = 100.0;
const MAX_REASONS: usize = 3;

/// Soft preferences for one recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionContext {
    pub meal_type: Option<MealType>,
    /// Most recent first.
    #[serde(default)]
    pub recent_meal_ids: Vec<String>,
    /// Earlier entries weigh more.
    #[serde(default)]
    pub preferred_cuisines: Vec<CuisineType>,
    pub diet_type: Option<DietType>,
    pub spice_level_max: Option<u8>,
    pub max_cook_time: Option<u32>,
    #[serde(default)]
    pub prefer_quick_meals: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Running score with its explanation trail.
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, points: f64) {
        self.score += points;
    }

    fn add_with_reason(&mut self, points: f64, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }
}

/// Score a recipe against soft preferences.
///
/// Factors apply in a fixed order and that order decides which reasons
/// survive the cut to three. The final score never drops below zero.
///
/// # Arguments
/// * `recipe` - Candidate recipe
/// * `context` - Preferences for the current request
///
/// # Returns
/// The recipe with its score and up to three reasons
pub fn score_recipe<'a>(recipe: &'a Recipe, context: &SuggestionContext) -> ScoredRecipe<'a> {
    let mut tally = Tally {
        score: BASE_SCORE,
        reasons: Vec::new(),
    };

    if let Some(meal_type) = context.meal_type {
        if recipe.supports(meal_type) {
            tally.add_with_reason(30.0, format!("Perfect for {meal_type}"));
        } else {
            tally.add(-50.0);
        }
    }

    if !context.recent_meal_ids.is_empty() {
        match context.recent_meal_ids.iter().position(|id| *id == recipe.id) {
            Some(index) => tally.add(-recency_penalty(index)),
            None => tally.add_with_reason(25.0, "Something different"),
        }
    }

    if let Some(index) = context
        .preferred_cuisines
        .iter()
        .position(|cuisine| *cuisine == recipe.cuisine)
    {
        let points = 20.0 - 2.0 * index as f64;
        tally.add_with_reason(points, format!("Your favorite: {}", recipe.cuisine));
    }

    if let Some(max) = context.spice_level_max {
        if recipe.spice_level <= max {
            if recipe.spice_level == max {
                tally.add_with_reason(10.0, "Just the right spice level");
            } else {
                tally.add(10.0);
            }
        } else {
            tally.add(-40.0);
        }
    }

    if let Some(max) = context.max_cook_time {
        let total = recipe.total_time();
        if total <= max {
            tally.add(15.0);
            if f64::from(total) <= f64::from(max) * 0.5 {
                tally.add_with_reason(10.0, "Quick to make");
            }
        } else {
            // max of zero gives an infinite ratio, capped below
            let ratio = f64::from(total) / f64::from(max);
            tally.add(-(15.0 * ratio).min(30.0));
        }
    }

    if context.prefer_quick_meals && recipe.is_quick_meal {
        tally.add_with_reason(15.0, "Ready in under 30 min");
    }

    if recipe.is_meal_prep {
        tally.add(5.0);
    }

    if recipe.is_one_pot {
        tally.add_with_reason(5.0, "Easy cleanup");
    }

    tally.reasons.truncate(MAX_REASONS);

    ScoredRecipe {
        recipe,
        score: tally.score.max(0.0),
        reasons: tally.reasons,
    }
}

/// Penalty for having eaten a recipe recently, `index` 0 being the latest.
///
/// Unbounded below: from index 11 on the penalty turns into a small bonus.
fn recency_penalty(index: usize) -> f64 {
    30.0 - 3.0 * index as f64
}
