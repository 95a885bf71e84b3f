pub mod error;
pub mod localize;
pub mod model;
pub mod output;
pub mod tables;

use crate::localize::localize_all;
use crate::model::{CardRecord, OverrideTable};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "app/src/main/assets/tarot_data.json";
pub const DEFAULT_TRANSLATIONS_PATH: &str = "scripts/tarot_translations.json";

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub data_path: PathBuf,
    pub translations_path: PathBuf,
    pub check: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            translations_path: PathBuf::from(DEFAULT_TRANSLATIONS_PATH),
            check: false,
        }
    }
}

pub fn load_cards(path: &Path) -> anyhow::Result<Vec<CardRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read card data at {}", path.display()))?;
    let parsed: Vec<CardRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

pub fn load_overrides(path: &Path) -> anyhow::Result<OverrideTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read translations file at {}", path.display()))?;
    let parsed: OverrideTable = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let overrides = load_overrides(&opts.translations_path)?;
    let cards = load_cards(&opts.data_path)?;
    let localized = localize_all(cards, &overrides).with_context(|| {
        format!(
            "Failed to localize {}; file left unchanged",
            opts.data_path.display()
        )
    })?;
    if opts.check {
        let rendered = output::render_cards(&localized)?;
        println!(
            "Check passed: {} cards ({} bytes) would be written to {}",
            localized.len(),
            rendered.len(),
            opts.data_path.display()
        );
        return Ok(());
    }
    output::write_cards(&localized, &opts.data_path)?;
    println!(
        "Localized {} cards into {}",
        localized.len(),
        opts.data_path.display()
    );
    Ok(())
}
