use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of `tarot_data.json` as it exists before localization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arcana: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    // Source-language meanings are read but never carried over.
    #[serde(default)]
    pub upright_meaning: Option<String>,
    #[serde(default)]
    pub reversed_meaning: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOverride {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub upright_meaning: String,
    #[serde(default)]
    pub reversed_meaning: String,
}

pub type OverrideTable = HashMap<String, CardOverride>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedCard {
    pub id: String,
    pub name: Option<String>,
    pub arcana: Option<String>,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
}

impl From<LocalizedCard> for CardRecord {
    fn from(card: LocalizedCard) -> Self {
        CardRecord {
            id: card.id,
            name: card.name,
            arcana: card.arcana,
            description: card.description,
            upright_meaning: Some(card.upright_meaning),
            reversed_meaning: Some(card.reversed_meaning),
            keywords: Some(card.keywords),
            image_url: card.image_url,
            extras: HashMap::new(),
        }
    }
}
