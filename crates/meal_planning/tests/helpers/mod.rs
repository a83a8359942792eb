#![allow(dead_code)]

use mealmate_recipe::{
    CuisineType, DietType, Difficulty, Ingredient, IngredientCategory, MealType, NutritionInfo,
    Recipe,
};

pub fn ingredient(name: &str) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        quantity: "1".to_owned(),
        unit: "cup".to_owned(),
        category: IngredientCategory::Other,
        is_optional: false,
        notes: None,
    }
}

pub fn optional(name: &str) -> Ingredient {
    Ingredient {
        is_optional: true,
        ..ingredient(name)
    }
}

/// Plain lunch recipe: karnataka, veg, 10 + 20 minutes, spice 2, no flags.
pub fn create_test_recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: format!("Recipe {id}"),
        name_local: None,
        description: String::new(),
        cuisine: CuisineType::Karnataka,
        sub_cuisine: None,
        region: None,
        meal_type: vec![MealType::Lunch],
        diet_type: DietType::Veg,
        prep_time: 10,
        cook_time: 20,
        difficulty: Difficulty::Easy,
        servings: 2,
        ingredients: vec![ingredient("rice")],
        steps: Vec::new(),
        tips: Vec::new(),
        nutrition: NutritionInfo::default(),
        tags: Vec::new(),
        spice_level: 2,
        is_quick_meal: false,
        is_meal_prep: false,
        is_one_pot: false,
        is_kid_friendly: false,
        is_party_dish: false,
        serve_with: Vec::new(),
        pairs_with: Vec::new(),
    }
}

pub fn with_diet(id: &str, diet_type: DietType) -> Recipe {
    Recipe {
        diet_type,
        ..create_test_recipe(id)
    }
}

pub fn ids(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}
