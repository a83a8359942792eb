#![allow(dead_code)]

use mealmate_recipe::Catalog;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

/// A Wednesday; its week runs 2025-01-13 to 2025-01-19.
pub const TODAY: Date = date!(2025 - 01 - 15);

pub const NOW: OffsetDateTime = datetime!(2025-01-15 12:00 UTC);

pub fn catalog() -> anyhow::Result<Catalog> {
    Ok(Catalog::bundled()?)
}
