pub mod catalog;
pub mod history;
pub mod nutrition;
pub mod plan;
pub mod prefs;
pub mod suggest;

use std::io::Write;

use anyhow::Result;
use mealmate_recipe::Recipe;

/// One-line recipe summary shared by the listing commands.
pub(crate) fn write_recipe_line(out: &mut impl Write, prefix: &str, recipe: &Recipe) -> Result<()> {
    writeln!(
        out,
        "{prefix}{} ({}) | {} | {} | {} min | spice {}",
        recipe.name,
        recipe.id,
        recipe.cuisine,
        recipe.diet_type,
        recipe.total_time(),
        recipe.spice_level
    )?;
    Ok(())
}
