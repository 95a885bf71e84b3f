use crate::model::LocalizedCard;
use anyhow::Context;
use std::path::Path;

/// Pretty-prints the cards with two-space indentation and a single trailing newline.
/// Hangul is written as-is, never as `\u` escapes.
pub fn render_cards(cards: &[LocalizedCard]) -> anyhow::Result<String> {
    let mut out =
        serde_json::to_string_pretty(cards).context("Failed to serialize localized cards")?;
    out.push('\n');
    Ok(out)
}

pub fn write_cards(cards: &[LocalizedCard], path: &Path) -> anyhow::Result<()> {
    let out = render_cards(cards)?;
    std::fs::write(path, out)
        .with_context(|| format!("Failed to write localized cards to {}", path.display()))?;
    Ok(())
}
