use std::collections::HashSet;
use std::path::Path;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CuisineType, DietType, MealType, Recipe};

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogAssets;

/// Bundled catalog files, in the order their recipes are listed.
const BUNDLED_FILES: &[&str] = &[
    "karnataka.json",
    "south-indian.json",
    "north-indian.json",
    "indo-chinese.json",
    "asian.json",
    "world-cuisines.json",
];

#[derive(Deserialize)]
struct RecipeFile {
    recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub veg: usize,
    pub non_veg: usize,
    pub egg: usize,
    pub quick_meals: usize,
    pub cuisines: usize,
}

/// Read-only recipe catalog.
///
/// Recipes keep their load order for the lifetime of the catalog; ranking
/// ties downstream fall back to this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Load the catalog embedded in the binary.
    pub fn bundled() -> CatalogResult<Self> {
        let mut recipes = Vec::new();

        for file in BUNDLED_FILES {
            let asset = CatalogAssets::get(file)
                .ok_or_else(|| CatalogError::MissingAsset(file.to_string()))?;
            let parsed: RecipeFile = serde_json::from_slice(&asset.data)?;
            tracing::debug!(file, count = parsed.recipes.len(), "Loaded catalog file");
            recipes.extend(parsed.recipes);
        }

        Self::from_recipes(recipes)
    }

    /// Parse a `{"recipes": [...]}` document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let parsed: RecipeFile = serde_json::from_str(json)?;
        Self::from_recipes(parsed.recipes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> CatalogResult<Self> {
        validate(&recipes)?;
        tracing::info!(count = recipes.len(), "Recipe catalog ready");
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn by_cuisine(&self, cuisine: CuisineType) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.cuisine == cuisine).collect()
    }

    pub fn by_meal_type(&self, meal_type: MealType) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.supports(meal_type)).collect()
    }

    pub fn by_diet_type(&self, diet_type: DietType) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.diet_type == diet_type)
            .collect()
    }

    pub fn quick_meals(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_quick_meal).collect()
    }

    pub fn meal_prep(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_meal_prep).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let count_diet = |diet: DietType| {
            self.recipes
                .iter()
                .filter(|r| r.diet_type == diet)
                .count()
        };
        let cuisines: HashSet<CuisineType> = self.recipes.iter().map(|r| r.cuisine).collect();

        CatalogStats {
            total: self.recipes.len(),
            veg: count_diet(DietType::Veg),
            non_veg: count_diet(DietType::NonVeg),
            egg: count_diet(DietType::Egg),
            quick_meals: self.recipes.iter().filter(|r| r.is_quick_meal).count(),
            cuisines: cuisines.len(),
        }
    }
}

fn validate(recipes: &[Recipe]) -> CatalogResult<()> {
    let mut seen = HashSet::new();

    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(CatalogError::DuplicateId(recipe.id.clone()));
        }
        if !(1..=5).contains(&recipe.spice_level) {
            return Err(CatalogError::InvalidSpiceLevel {
                id: recipe.id.clone(),
                level: recipe.spice_level,
            });
        }
        if recipe.servings == 0 {
            return Err(CatalogError::InvalidServings(recipe.id.clone()));
        }
    }

    Ok(())
}
