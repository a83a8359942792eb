use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::nutrition::NutritionInfo;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CuisineType {
    // South Indian
    Karnataka,
    Tamil,
    Kerala,
    Andhra,
    Telangana,
    // North Indian
    Punjabi,
    Rajasthani,
    Gujarati,
    Maharashtrian,
    Mughlai,
    Bengali,
    Kashmiri,
    Lucknowi,
    // Indo-Fusion
    IndoChinese,
    IndoFrench,
    IndoSpanish,
    IndoItalian,
    // Asian
    Thai,
    Japanese,
    Korean,
    Vietnamese,
    Chinese,
    Indonesian,
    Malaysian,
    // World
    Italian,
    Mexican,
    Mediterranean,
    American,
    MiddleEastern,
    Continental,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Diet classification of a recipe.
///
/// Acceptance between classes is asymmetric, see
/// `mealmate_meal_planning::filter::diet_admits`.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Veg,
    NonVeg,
    Egg,
}

#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IngredientCategory {
    Vegetable,
    Fruit,
    Protein,
    Grain,
    Dairy,
    Spice,
    Oil,
    Legume,
    Nut,
    Condiment,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Numeric amount kept as text ("1/2", "2", "to taste").
    pub quantity: String,
    pub unit: String,
    #[serde(default)]
    pub category: IngredientCategory,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingStep {
    pub step_number: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_local: Option<String>,
    #[serde(default)]
    pub description: String,
    pub cuisine: CuisineType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub meal_type: Vec<MealType>,
    pub diet_type: DietType,
    pub prep_time: u32,
    pub cook_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<CookingStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default)]
    pub nutrition: NutritionInfo,
    #[serde(default)]
    pub tags: Vec<String>,
    pub spice_level: u8,
    #[serde(default)]
    pub is_quick_meal: bool,
    #[serde(default)]
    pub is_meal_prep: bool,
    #[serde(default)]
    pub is_one_pot: bool,
    #[serde(default)]
    pub is_kid_friendly: bool,
    #[serde(default)]
    pub is_party_dish: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serve_with: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs_with: Vec<String>,
}

impl Recipe {
    /// Prep plus cook time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn supports(&self, meal_type: MealType) -> bool {
        self.meal_type.contains(&meal_type)
    }

    /// Ingredients that count toward pantry matching.
    pub fn required_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| !i.is_optional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cuisine_kebab_case_round_trip() {
        assert_eq!(CuisineType::IndoChinese.to_string(), "indo-chinese");
        assert_eq!(
            CuisineType::from_str("middle-eastern").unwrap(),
            CuisineType::MiddleEastern
        );
        assert_eq!(CuisineType::VARIANTS.len(), 30);
    }

    #[test]
    fn test_diet_type_strings() {
        assert_eq!(DietType::NonVeg.as_ref(), "non-veg");
        assert_eq!(DietType::from_str("egg").unwrap(), DietType::Egg);
        assert!(DietType::from_str("vegan").is_err());
    }

    #[test]
    fn test_recipe_deserializes_camel_case() {
        let json = r#"{
            "id": "k-1",
            "name": "Rava Idli",
            "description": "Steamed semolina cakes",
            "cuisine": "karnataka",
            "mealType": ["breakfast", "snack"],
            "dietType": "veg",
            "prepTime": 10,
            "cookTime": 15,
            "servings": 4,
            "ingredients": [
                {"name": "Rava", "quantity": "1", "unit": "cup", "category": "grain"},
                {"name": "Cashews", "quantity": "8", "unit": "pieces", "category": "nut", "isOptional": true}
            ],
            "spiceLevel": 1,
            "isQuickMeal": true,
            "isMealPrep": false,
            "isOnePot": false
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.total_time(), 25);
        assert!(recipe.supports(MealType::Snack));
        assert!(!recipe.supports(MealType::Dinner));
        assert_eq!(recipe.required_ingredients().count(), 1);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.nutrition, NutritionInfo::default());

        let huge = Recipe {
            prep_time: u32::MAX,
            ..recipe
        };
        assert_eq!(huge.total_time(), u32::MAX);
    }
}
