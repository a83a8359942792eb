#![allow(dead_code)]

use std::path::Path;

use mealmate::{AppContext, Config};
use time::OffsetDateTime;
use time::macros::datetime;

/// Wednesday noon; the current week runs 2025-01-13 to 2025-01-19.
pub const NOW: OffsetDateTime = datetime!(2025-01-15 12:00 UTC);

pub fn test_context(dir: &Path) -> anyhow::Result<AppContext> {
    let mut config = Config::default();
    config.storage.dir = dir.join("store");
    AppContext::open_at(config, NOW)
}

/// Run a command against `ctx` and return what it printed.
pub fn output(
    run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(&mut out)?;
    Ok(String::from_utf8(out)?)
}
