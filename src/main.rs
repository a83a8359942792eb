use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealmate::AppContext;
use mealmate::cli::{catalog, history, nutrition, plan, prefs, suggest};

/// mealmate - Recipe suggestions and weekly meal planning
#[derive(Parser)]
#[command(name = "mealmate")]
#[command(about = "Recipe suggestions, meal plans and nutrition tracking", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes against your preferences
    Suggest(suggest::SuggestArgs),
    /// Pick one recipe at random, weighted by score
    Spin(suggest::SpinArgs),
    /// List recipes matching hard constraints
    Filter(suggest::FilterArgs),
    /// Find recipes you can make from what you have
    Pantry(suggest::PantryArgs),
    /// Weekly meal plan
    Plan(plan::PlanArgs),
    /// Daily nutrition log
    Nutrition(nutrition::NutritionArgs),
    /// Meals eaten
    History(history::HistoryArgs),
    /// Cuisine preferences and allergies
    Prefs(prefs::PrefsArgs),
    /// Catalog overview, or one recipe by id
    Catalog(catalog::CatalogArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealmate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealmate::observability::init_observability(
        "mealmate",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let ctx = AppContext::open(config)?;
    let mut out = std::io::stdout().lock();

    match &cli.command {
        Commands::Suggest(args) => suggest::suggest(&ctx, args, &mut out)?,
        Commands::Spin(args) => suggest::spin(&ctx, args, &mut out)?,
        Commands::Filter(args) => suggest::filter(&ctx, args, &mut out)?,
        Commands::Pantry(args) => suggest::pantry(&ctx, args, &mut out)?,
        Commands::Plan(args) => plan::run(&ctx, args, &mut out)?,
        Commands::Nutrition(args) => nutrition::run(&ctx, args, &mut out)?,
        Commands::History(args) => history::run(&ctx, args, &mut out)?,
        Commands::Prefs(args) => prefs::run(&ctx, args, &mut out)?,
        Commands::Catalog(args) => catalog::run(&ctx, args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
