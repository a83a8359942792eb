use thiserror::Error;
use time::Date;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored value is not valid JSON for its type: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Date {date} is outside the week starting {week_start}")]
    DateOutsideWeek { date: Date, week_start: Date },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Servings must be at least 1")]
    InvalidServings,

    #[error("Unknown nutrition preset: {0}")]
    UnknownPreset(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type PlanResult<T> = Result<T, PlanError>;
