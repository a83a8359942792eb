use std::io::Write;

use anyhow::Result;
use clap::Args;
use mealmate_meal_planning::{
    RecipeCriteria, RngSource, ScoredRecipe, SuggestionContext, filter_by_available_ingredients,
    filter_recipes_with_criteria, ingredient_match_score, smart_suggestions,
    weighted_random_recipe,
};
use mealmate_recipe::{CuisineType, DietType, MealType};

use super::write_recipe_line;
use crate::config::SuggestionsConfig;
use crate::context::AppContext;

/// Spice tolerance at or above this level accepts anything.
const ANY_SPICE: u8 = 5;

/// Soft preferences shared by `suggest` and `spin`.
#[derive(Debug, Clone, Default, Args)]
pub struct PreferenceArgs {
    /// breakfast, lunch, dinner or snack
    #[arg(long)]
    pub meal_type: Option<MealType>,

    /// veg, egg or non-veg
    #[arg(long)]
    pub diet: Option<DietType>,

    /// Preferred cuisines, most preferred first (comma separated)
    #[arg(long = "cuisine", value_delimiter = ',')]
    pub cuisines: Vec<CuisineType>,

    /// Time budget in minutes
    #[arg(long)]
    pub max_time: Option<u32>,

    /// Spice tolerance 1-5; 5 means no limit
    #[arg(long)]
    pub spice: Option<u8>,

    /// Favor quick meals
    #[arg(long)]
    pub quick: bool,
}

impl PreferenceArgs {
    /// Build the scoring context. Without explicit cuisines the configured defaults apply.
    pub fn to_context(
        &self,
        config: &SuggestionsConfig,
        recent_meal_ids: Vec<String>,
    ) -> SuggestionContext {
        let preferred_cuisines = if self.cuisines.is_empty() {
            config.preferred_cuisines()
        } else {
            self.cuisines.clone()
        };

        SuggestionContext {
            meal_type: self.meal_type,
            recent_meal_ids,
            preferred_cuisines,
            diet_type: self.diet,
            spice_level_max: self.spice.filter(|level| *level < ANY_SPICE),
            max_cook_time: self.max_time,
            prefer_quick_meals: self.quick,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub preferences: PreferenceArgs,

    /// Number of suggestions (defaults to config)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct SpinArgs {
    #[command(flatten)]
    pub preferences: PreferenceArgs,

    /// Seed for a reproducible pick
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub meal_type: Option<MealType>,

    #[arg(long)]
    pub diet: Option<DietType>,

    /// Accepted cuisines (comma separated); empty accepts all
    #[arg(long = "cuisine", value_delimiter = ',')]
    pub cuisines: Vec<CuisineType>,

    #[arg(long)]
    pub max_time: Option<u32>,

    #[arg(long)]
    pub spice: Option<u8>,

    /// Case-insensitive text search over name, description, tags and cuisine
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> RecipeCriteria {
        RecipeCriteria {
            meal_type: self.meal_type,
            diet_type: self.diet,
            cuisines: self.cuisines.clone(),
            max_cook_time: self.max_time,
            spice_level_max: self.spice,
            search_query: self.search.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PantryArgs {
    /// Ingredients on hand; the saved pantry is used when none are given
    pub items: Vec<String>,

    /// Add the given items to the saved pantry
    #[arg(long)]
    pub save: bool,

    /// Empty the saved pantry first
    #[arg(long)]
    pub clear: bool,
}

fn write_scored(out: &mut impl Write, rank: usize, scored: &ScoredRecipe<'_>) -> Result<()> {
    write_recipe_line(out, &format!("{rank}. "), scored.recipe)?;
    writeln!(out, "   score {}", scored.score)?;
    for reason in &scored.reasons {
        writeln!(out, "   - {reason}")?;
    }
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn suggest(ctx: &AppContext, args: &SuggestArgs, out: &mut impl Write) -> Result<()> {
    let context = args
        .preferences
        .to_context(&ctx.config.suggestions, ctx.recent_meal_ids()?);
    let limit = args.limit.unwrap_or(ctx.config.suggestions.limit);

    let suggestions = smart_suggestions(ctx.catalog.recipes(), &context, limit);
    if suggestions.is_empty() {
        writeln!(out, "No recipes match your preferences.")?;
        return Ok(());
    }

    for (i, scored) in suggestions.iter().enumerate() {
        write_scored(out, i + 1, scored)?;
    }
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn spin(ctx: &AppContext, args: &SpinArgs, out: &mut impl Write) -> Result<()> {
    let context = args
        .preferences
        .to_context(&ctx.config.suggestions, ctx.recent_meal_ids()?);

    let picked = match args.seed {
        Some(seed) => weighted_random_recipe(
            ctx.catalog.recipes(),
            &context,
            &mut RngSource::seeded(seed),
        ),
        None => weighted_random_recipe(ctx.catalog.recipes(), &context, &mut RngSource::thread()),
    };

    match picked {
        Some(recipe) => write_recipe_line(out, "You should make: ", recipe)?,
        None => writeln!(out, "No recipes match your preferences.")?,
    }
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn filter(ctx: &AppContext, args: &FilterArgs, out: &mut impl Write) -> Result<()> {
    let recipes = filter_recipes_with_criteria(ctx.catalog.recipes(), &args.to_criteria());

    writeln!(out, "{} recipes", recipes.len())?;
    for recipe in recipes {
        write_recipe_line(out, "- ", recipe)?;
    }
    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn pantry(ctx: &AppContext, args: &PantryArgs, out: &mut impl Write) -> Result<()> {
    let mut prefs = ctx.preferences()?;
    if args.clear {
        prefs.clear_available_ingredients()?;
    }
    if args.save {
        for item in &args.items {
            prefs.add_available_ingredient(item)?;
        }
    }

    let available: Vec<String> = if args.items.is_empty() {
        prefs.pantry().to_vec()
    } else {
        args.items.clone()
    };

    if available.is_empty() {
        writeln!(out, "Your pantry is empty.")?;
        return Ok(());
    }

    let recipes = filter_by_available_ingredients(ctx.catalog.recipes(), &available, 0.3);
    writeln!(out, "Found {} recipes you can make!", recipes.len())?;

    for recipe in recipes {
        let matched = ingredient_match_score(recipe, &available);
        write_recipe_line(out, "- ", recipe)?;
        writeln!(
            out,
            "   {:.0}% match | have: {} | missing: {}",
            matched.match_percentage * 100.0,
            matched.matched_ingredients.join(", "),
            matched.missing_ingredients.join(", ")
        )?;
    }
    Ok(())
}
