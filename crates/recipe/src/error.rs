use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Invalid spice level {level} for recipe {id}: expected 1-5")]
    InvalidSpiceLevel { id: String, level: u8 },

    #[error("Invalid servings for recipe {0}: must be at least 1")]
    InvalidServings(String),

    #[error("Bundled catalog file missing: {0}")]
    MissingAsset(String),

    #[error("Catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Catalog I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
