use mealmate_recipe::{CuisineType, DietType, MealType, Recipe};
use serde::{Deserialize, Serialize};

/// Hard constraints for recipe browsing. `None` on any field means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCriteria {
    pub meal_type: Option<MealType>,
    pub diet_type: Option<DietType>,
    #[serde(default)]
    pub cuisines: Vec<CuisineType>,
    pub max_cook_time: Option<u32>,
    pub spice_level_max: Option<u8>,
    pub search_query: Option<String>,
}

/// Whether a diet request admits a recipe of the given diet.
///
/// The rule is asymmetric: `Egg` admits veg and egg recipes, while `NonVeg`
/// admits only non-veg recipes.
pub fn diet_admits(wanted: DietType, actual: DietType) -> bool {
    match wanted {
        DietType::Veg => actual == DietType::Veg,
        DietType::Egg => matches!(actual, DietType::Veg | DietType::Egg),
        DietType::NonVeg => actual == DietType::NonVeg,
    }
}

impl RecipeCriteria {
    /// Conjunction of every present criterion.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.meal_type.is_none_or(|meal| recipe.supports(meal))
            && self
                .diet_type
                .is_none_or(|diet| diet_admits(diet, recipe.diet_type))
            && (self.cuisines.is_empty() || self.cuisines.contains(&recipe.cuisine))
            && self
                .max_cook_time
                .filter(|max| *max > 0)
                .is_none_or(|max| recipe.total_time() <= max)
            && self
                .spice_level_max
                .filter(|max| *max > 0)
                .is_none_or(|max| recipe.spice_level <= max)
            && self.matches_search(recipe)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let query = match self.search_query.as_deref() {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        recipe.name.to_lowercase().contains(&query)
            || recipe.description.to_lowercase().contains(&query)
            || recipe
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
            || recipe.cuisine.as_ref().contains(&query)
    }
}

/// Apply every criterion, keeping catalog order.
pub fn filter_recipes_with_criteria<'a>(
    recipes: &'a [Recipe],
    criteria: &RecipeCriteria,
) -> Vec<&'a Recipe> {
    let filtered: Vec<&Recipe> = recipes.iter().filter(|r| criteria.matches(r)).collect();

    tracing::debug!(
        total = recipes.len(),
        kept = filtered.len(),
        "Applied recipe criteria"
    );

    filtered
}
