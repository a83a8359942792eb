pub mod filter;
pub mod ingredient_match;
pub mod scoring;
pub mod suggestion;
pub mod synonyms;

pub use filter::{RecipeCriteria, diet_admits, filter_recipes_with_criteria};
pub use ingredient_match::{
    IngredientMatch, filter_by_available_ingredients, ingredient_match_score,
};
pub use scoring::{ScoredRecipe, SuggestionContext, score_recipe};
pub use suggestion::{
    DEFAULT_SUGGESTION_LIMIT, RandomSource, RngSource, smart_suggestions,
    weighted_random_recipe,
};
pub use synonyms::variants;
