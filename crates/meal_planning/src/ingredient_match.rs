use std::collections::BTreeSet;

use mealmate_recipe::{Ingredient, Recipe};
use serde::Serialize;

use crate::synonyms::{overlaps, variants};

/// How well a pantry covers a recipe's required ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    /// Fraction of required ingredients matched, in `[0, 1]`.
    pub match_percentage: f64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}

/// Normalized pantry: each non-blank item with its resolved variants.
struct Pantry {
    items: Vec<(String, BTreeSet<String>)>,
}

impl Pantry {
    fn new<S: AsRef<str>>(available: &[S]) -> Self {
        let items = available
            .iter()
            .map(|item| item.as_ref().trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .map(|item| {
                let resolved = variants(&item);
                (item, resolved)
            })
            .collect();

        Self { items }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn covers(&self, ingredient: &Ingredient) -> bool {
        let name = ingredient.name.trim().to_lowercase();

        self.items.iter().any(|(item, resolved)| {
            overlaps(&name, item) || resolved.iter().any(|variant| overlaps(&name, variant))
        })
    }
}

/// Keep recipes that use at least one pantry item, most matches first.
///
/// Every ingredient counts here, optional ones included. Ties keep their
/// input order. An empty pantry returns the input untouched.
///
/// # Arguments
/// * `recipes` - Candidate recipes in catalog order
/// * `available` - Free-text pantry items
/// * `_threshold` - Accepted for callers that pass one; the floor is always one match
pub fn filter_by_available_ingredients<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    available: &[S],
    _threshold: f64,
) -> Vec<&'a Recipe> {
    let pantry = Pantry::new(available);
    if pantry.is_empty() {
        return recipes.iter().collect();
    }

    let mut counted: Vec<(usize, &Recipe)> = recipes
        .iter()
        .map(|recipe| {
            let count = recipe
                .ingredients
                .iter()
                .filter(|ingredient| pantry.covers(ingredient))
                .count();
            (count, recipe)
        })
        .filter(|(count, _)| *count > 0)
        .collect();

    // sort_by is stable
    counted.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(
        pantry = pantry.items.len(),
        matched = counted.len(),
        "Filtered recipes by pantry"
    );

    counted.into_iter().map(|(_, recipe)| recipe).collect()
}

/// Match detail for one recipe against a pantry, required ingredients only.
pub fn ingredient_match_score<S: AsRef<str>>(recipe: &Recipe, available: &[S]) -> IngredientMatch {
    let pantry = Pantry::new(available);

    if pantry.is_empty() {
        return IngredientMatch {
            match_percentage: 0.0,
            matched_ingredients: Vec::new(),
            missing_ingredients: recipe
                .required_ingredients()
                .map(|i| i.name.clone())
                .collect(),
        };
    }

    let (matched, missing): (Vec<&Ingredient>, Vec<&Ingredient>) = recipe
        .required_ingredients()
        .partition(|ingredient| pantry.covers(ingredient));

    let required = matched.len() + missing.len();
    let match_percentage = if required == 0 {
        0.0
    } else {
        matched.len() as f64 / required as f64
    };

    IngredientMatch {
        match_percentage,
        matched_ingredients: matched.into_iter().map(|i| i.name.clone()).collect(),
        missing_ingredients: missing.into_iter().map(|i| i.name.clone()).collect(),
    }
}
