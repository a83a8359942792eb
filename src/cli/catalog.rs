use std::io::Write;

use anyhow::{Result, anyhow};
use clap::Args;

use super::write_recipe_line;
use crate::context::AppContext;

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Show one recipe in full
    pub id: Option<String>,
}

#[tracing::instrument(skip_all)]
pub fn run(ctx: &AppContext, args: &CatalogArgs, out: &mut impl Write) -> Result<()> {
    let Some(id) = &args.id else {
        let stats = ctx.catalog.stats();
        writeln!(
            out,
            "{} recipes across {} cuisines: {} veg, {} egg, {} non-veg, {} quick",
            stats.total, stats.cuisines, stats.veg, stats.egg, stats.non_veg, stats.quick_meals
        )?;
        return Ok(());
    };

    let recipe = ctx
        .catalog
        .get(id)
        .ok_or_else(|| anyhow!("Recipe not found: {id}"))?;

    write_recipe_line(out, "", recipe)?;
    if !recipe.description.is_empty() {
        writeln!(out, "{}", recipe.description)?;
    }
    writeln!(out, "Serves {}", recipe.servings)?;
    writeln!(out, "Ingredients:")?;
    for ingredient in &recipe.ingredients {
        let optional = if ingredient.is_optional { " (optional)" } else { "" };
        writeln!(
            out,
            "  - {} {} {}{optional}",
            ingredient.quantity, ingredient.unit, ingredient.name
        )?;
    }
    writeln!(out, "Steps:")?;
    for step in &recipe.steps {
        writeln!(out, "  {}. {}", step.step_number, step.instruction)?;
    }
    Ok(())
}
