pub mod catalog;
pub mod error;
pub mod nutrition;
pub mod types;

pub use catalog::{Catalog, CatalogStats};
pub use error::{CatalogError, CatalogResult};
pub use nutrition::NutritionInfo;
pub use types::{
    CookingStep, CuisineType, DietType, Difficulty, Ingredient, IngredientCategory, MealType,
    Recipe,
};
