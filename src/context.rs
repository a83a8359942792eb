use anyhow::{Context as _, Result};
use mealmate_mealplan::{FileStore, MealPlanner, NutritionTracker, PreferenceStore};
use mealmate_recipe::Catalog;
use time::{Date, OffsetDateTime};

use crate::config::Config;

/// Everything a command needs: configuration, the recipe catalog and the on-disk store.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub store: FileStore,
    pub now: OffsetDateTime,
}

impl AppContext {
    pub fn open(config: Config) -> Result<Self> {
        Self::open_at(config, OffsetDateTime::now_utc())
    }

    /// Open with a fixed clock.
    pub fn open_at(config: Config, now: OffsetDateTime) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => Catalog::bundled()?,
        };

        let store = FileStore::open(&config.storage.dir).with_context(|| {
            format!("Failed to open store at {}", config.storage.dir.display())
        })?;

        tracing::debug!(recipes = catalog.len(), "Application context ready");

        Ok(Self {
            config,
            catalog,
            store,
            now,
        })
    }

    pub fn today(&self) -> Date {
        self.now.date()
    }

    pub fn planner(&self) -> Result<MealPlanner<&FileStore>> {
        Ok(MealPlanner::load(&self.store, self.today())?)
    }

    pub fn tracker(&self) -> Result<NutritionTracker<&FileStore>> {
        Ok(NutritionTracker::load(&self.store)?)
    }

    pub fn preferences(&self) -> Result<PreferenceStore<&FileStore>> {
        Ok(PreferenceStore::load(&self.store)?)
    }

    /// Recipe ids eaten within the configured recent window, most recent first.
    pub fn recent_meal_ids(&self) -> Result<Vec<String>> {
        let prefs = self.preferences()?;
        Ok(prefs.recent_meal_ids(self.config.suggestions.recent_days, self.now))
    }
}
