use mealmate_recipe::Recipe;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::filter::diet_admits;
use crate::scoring::{ScoredRecipe, SuggestionContext, score_recipe};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Adapter turning any `rand::Rng` into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// Thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible picks.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

fn score_admissible<'a>(
    recipes: &'a [Recipe],
    context: &SuggestionContext,
) -> Vec<ScoredRecipe<'a>> {
    recipes
        .iter()
        .filter(|recipe| {
            context
                .diet_type
                .is_none_or(|diet| diet_admits(diet, recipe.diet_type))
        })
        .map(|recipe| score_recipe(recipe, context))
        .collect()
}

/// Top `limit` recipes by score.
///
/// Only the diet constraint eliminates candidates; everything else in the
/// context is a soft factor. Equal scores keep catalog order.
#[tracing::instrument(skip(recipes, context))]
pub fn smart_suggestions<'a>(
    recipes: &'a [Recipe],
    context: &SuggestionContext,
    limit: usize,
) -> Vec<ScoredRecipe<'a>> {
    let mut scored = score_admissible(recipes, context);

    // Stable sort keeps catalog order among ties
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);

    tracing::debug!(returned = scored.len(), "Ranked suggestions");

    scored
}

/// Pick one recipe with probability proportional to its score.
///
/// Returns `None` when no recipe passes the diet constraint. If rounding
/// leaves the draw unspent, the last candidate is returned.
#[tracing::instrument(skip_all, fields(candidates = recipes.len()))]
pub fn weighted_random_recipe<'a>(
    recipes: &'a [Recipe],
    context: &SuggestionContext,
    rng: &mut impl RandomSource,
) -> Option<&'a Recipe> {
    let scored = score_admissible(recipes, context);
    let last = scored.last()?.recipe;

    let total: f64 = scored.iter().map(|s| s.score).sum();
    let mut remainder = rng.next_f64() * total;

    for candidate in &scored {
        remainder -= candidate.score;
        if remainder <= 0.0 {
            tracing::debug!(recipe_id = %candidate.recipe.id, "Weighted pick");
            return Some(candidate.recipe);
        }
    }

    Some(last)
}
