use std::collections::HashMap;

use mealmate_mealplan::WeeklyPlan;
use mealmate_recipe::{Catalog, IngredientCategory};
use serde::Serialize;

/// One line of the shopping list, summed across every planned recipe that needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// `{lower-cased name}-{unit}`
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
    /// Names of the recipes that need this item, in plan order.
    pub recipes: Vec<String>,
    pub checked: bool,
}

impl ShoppingItem {
    /// Quantity as shown to the user: no trailing `.0`.
    pub fn display_quantity(&self) -> String {
        format!("{}", self.quantity)
    }
}

/// Shopping List Service
///
/// Stateless domain service that walks a weekly plan and sums the ingredients
/// of every planned recipe, scaled by planned servings.
///
/// Aggregation rules:
/// - "Onion 2 pcs" + "onion 1 pcs" = "Onion 3 pcs" (name compared case-insensitively)
/// - "Onion 2 pcs" + "Onion 1 cup" = 2 separate line items (units are never converted)
/// - "Salt to taste" counts as 0
pub struct ShoppingListService;

impl ShoppingListService {
    /// Build the shopping list for a plan
    ///
    /// # Arguments
    /// * `plan` - The weekly plan; slots are visited day by day, breakfast to snacks
    /// * `catalog` - Resolves slot recipe ids; slots with unknown recipes are skipped
    ///
    /// # Returns
    /// * Items grouped by category, first-seen order within a category
    #[tracing::instrument(skip_all, fields(plan_id = %plan.id))]
    pub fn generate(plan: &WeeklyPlan, catalog: &Catalog) -> Vec<ShoppingItem> {
        let mut items: Vec<ShoppingItem> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for slot in plan.days.iter().flat_map(|day| day.meals.slots()) {
            let Some(recipe) = catalog.get(&slot.recipe_id) else {
                tracing::warn!(recipe_id = %slot.recipe_id, "Planned recipe missing from catalog");
                continue;
            };

            let multiplier = f64::from(slot.servings) / f64::from(recipe.servings.max(1));

            for ingredient in &recipe.ingredients {
                let key = format!("{}-{}", ingredient.name.to_lowercase(), ingredient.unit);
                let added = Self::parse_quantity(&ingredient.quantity) * multiplier;

                match index.get(&key) {
                    Some(&position) => {
                        let item = &mut items[position];
                        item.quantity = Self::round_tenth(item.quantity + added);
                        if !item.recipes.contains(&recipe.name) {
                            item.recipes.push(recipe.name.clone());
                        }
                    }
                    None => {
                        index.insert(key.clone(), items.len());
                        items.push(ShoppingItem {
                            id: key,
                            name: ingredient.name.clone(),
                            quantity: Self::round_tenth(added),
                            unit: ingredient.unit.clone(),
                            category: ingredient.category,
                            recipes: vec![recipe.name.clone()],
                            checked: false,
                        });
                    }
                }
            }
        }

        items.sort_by(|a, b| a.category.as_ref().cmp(b.category.as_ref()));

        tracing::debug!(items = items.len(), "Generated shopping list");
        items
    }

    /// Leading decimal number of a quantity string, or 0 when there is none.
    ///
    /// "2" → 2, "1.5 cups" → 1.5, "1/2" → 1, "to taste" → 0
    pub fn parse_quantity(quantity: &str) -> f64 {
        let trimmed = quantity.trim_start();
        let mut end = 0;
        let mut seen_dot = false;

        for (i, c) in trimmed.char_indices() {
            match c {
                '+' | '-' if i == 0 => {}
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            end = i + c.len_utf8();
        }

        trimmed[..end].parse::<f64>().unwrap_or(0.0)
    }

    fn round_tenth(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }
}

/// Flip the checked state of an item. Returns the new state, or `None` for an unknown id.
pub fn toggle_item(items: &mut [ShoppingItem], id: &str) -> Option<bool> {
    items.iter_mut().find(|item| item.id == id).map(|item| {
        item.checked = !item.checked;
        item.checked
    })
}

/// Consecutive runs of items sharing a category.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<(IngredientCategory, &[ShoppingItem])> {
    items
        .chunk_by(|a, b| a.category == b.category)
        .filter_map(|chunk| chunk.first().map(|first| (first.category, chunk)))
        .collect()
}
