use crate::error::{LocalizeError, LocalizeResult, MappingKind};
use crate::model::{CardOverride, CardRecord, LocalizedCard, OverrideTable};
use crate::tables::{self, NAME_PLACEHOLDER};

/// Returns the suit key when `id` names a minor-arcana card.
pub fn minor_suit(id: &str) -> Option<&str> {
    let (prefix, _) = id.split_once('_')?;
    tables::is_suit(prefix).then_some(prefix)
}

pub fn infer_minor_name(id: &str) -> LocalizeResult<String> {
    let (suit_key, rank_key) = id.split_once('_').unwrap_or((id, ""));
    let suit = tables::suit_label(suit_key).ok_or_else(|| LocalizeError::MissingMapping {
        kind: MappingKind::Suit,
        key: id.to_string(),
    })?;
    let rank = tables::rank_label(rank_key).ok_or_else(|| LocalizeError::MissingMapping {
        kind: MappingKind::Rank,
        key: id.to_string(),
    })?;
    Ok(format!("{suit} {rank}"))
}

pub fn infer_minor_description(name: &str, suit_key: &str) -> LocalizeResult<String> {
    let template =
        tables::suit_description(suit_key).ok_or_else(|| LocalizeError::MissingMapping {
            kind: MappingKind::SuitDescription,
            key: suit_key.to_string(),
        })?;
    Ok(template.replacen(NAME_PLACEHOLDER, name, 1))
}

pub fn translate_keywords(keywords: &[String]) -> LocalizeResult<Vec<String>> {
    keywords
        .iter()
        .map(|word| match tables::keyword(word) {
            Some(mapped) => Ok(mapped.to_string()),
            None if !word.is_ascii() => Ok(word.clone()),
            None => Err(LocalizeError::MissingKeyword {
                keyword: word.clone(),
            }),
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_meanings(id: &str, entry: &CardOverride) -> LocalizeResult<(String, String)> {
    let upright = entry.upright_meaning.trim();
    let reversed = entry.reversed_meaning.trim();
    if upright.is_empty() || reversed.is_empty() {
        return Err(LocalizeError::IncompleteTranslation { id: id.to_string() });
    }
    Ok((upright.to_string(), reversed.to_string()))
}

pub fn localize_card(card: CardRecord, overrides: &OverrideTable) -> LocalizeResult<LocalizedCard> {
    let entry = overrides
        .get(&card.id)
        .ok_or_else(|| LocalizeError::MissingTranslation {
            id: card.id.clone(),
        })?;
    let (upright_meaning, reversed_meaning) = required_meanings(&card.id, entry)?;

    let arcana = card
        .arcana
        .map(|raw| tables::arcana_label(&raw).map(str::to_string).unwrap_or(raw));
    let name_override = non_blank(entry.name.as_deref());
    let description_override = non_blank(entry.description.as_deref());

    let (name, description) = match minor_suit(&card.id) {
        Some(suit_key) => {
            let name = match name_override {
                Some(name) => name,
                None => infer_minor_name(&card.id)?,
            };
            let description = match description_override {
                Some(description) => description,
                None => infer_minor_description(&name, suit_key)?,
            };
            (Some(name), Some(description))
        }
        None => (
            name_override.or(card.name),
            description_override.or(card.description),
        ),
    };

    let keywords = translate_keywords(card.keywords.as_deref().unwrap_or_default())?;

    Ok(LocalizedCard {
        id: card.id,
        name,
        arcana,
        upright_meaning,
        reversed_meaning,
        description,
        keywords,
        image_url: card.image_url,
    })
}

/// Localizes every card in order, stopping at the first failure.
pub fn localize_all(
    cards: Vec<CardRecord>,
    overrides: &OverrideTable,
) -> LocalizeResult<Vec<LocalizedCard>> {
    cards
        .into_iter()
        .map(|card| localize_card(card, overrides))
        .collect()
}
