use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use mealmate_recipe::CuisineType;

use crate::context::AppContext;

#[derive(Debug, Clone, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PrefsCommand {
    /// Print the stored preferences
    Show,
    /// Enable a cuisine
    Enable { cuisine: CuisineType },
    /// Disable a cuisine
    Disable { cuisine: CuisineType },
    /// Rank a cuisine 1-5
    Priority {
        cuisine: CuisineType,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        priority: u8,
    },
    AddAllergy { allergy: String },
    RemoveAllergy { allergy: String },
    /// Restore defaults and forget history and pantry
    Reset,
}

#[tracing::instrument(skip_all)]
pub fn run(ctx: &AppContext, args: &PrefsArgs, out: &mut impl Write) -> Result<()> {
    let mut prefs = ctx.preferences()?;

    match &args.command {
        PrefsCommand::Show => {
            let current = prefs.preferences();
            writeln!(out, "Diet: {}", current.dietary_preference)?;
            writeln!(out, "Spice tolerance: {}", current.spice_tolerance_max)?;
            for cuisine in &current.cuisine_preferences {
                let state = if cuisine.enabled { "on" } else { "off" };
                writeln!(
                    out,
                    "  {:<14} priority {} ({state})",
                    cuisine.cuisine.to_string(),
                    cuisine.priority
                )?;
            }
            if !current.allergies.is_empty() {
                writeln!(out, "Allergies: {}", current.allergies.join(", "))?;
            }
            if !prefs.pantry().is_empty() {
                writeln!(out, "Pantry: {}", prefs.pantry().join(", "))?;
            }
        }
        PrefsCommand::Enable { cuisine } => {
            prefs.toggle_cuisine(*cuisine, true)?;
            writeln!(out, "Enabled {cuisine}")?;
        }
        PrefsCommand::Disable { cuisine } => {
            prefs.toggle_cuisine(*cuisine, false)?;
            writeln!(out, "Disabled {cuisine}")?;
        }
        PrefsCommand::Priority { cuisine, priority } => {
            prefs.set_cuisine_priority(*cuisine, *priority)?;
            writeln!(out, "{cuisine} priority set to {priority}")?;
        }
        PrefsCommand::AddAllergy { allergy } => {
            prefs.add_allergy(allergy)?;
            writeln!(out, "Added allergy {allergy}")?;
        }
        PrefsCommand::RemoveAllergy { allergy } => {
            prefs.remove_allergy(allergy)?;
            writeln!(out, "Removed allergy {allergy}")?;
        }
        PrefsCommand::Reset => {
            prefs.reset()?;
            writeln!(out, "Preferences reset")?;
        }
    }
    Ok(())
}
