//! Failures raised while localizing card records.
//!
//! Every variant is fatal for the whole batch: the driver never writes
//! partially localized output.

use std::fmt;

/// Which lookup table was missing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    Suit,
    Rank,
    SuitDescription,
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MappingKind::Suit => "suit",
            MappingKind::Rank => "rank",
            MappingKind::SuitDescription => "suit description",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    /// A suit, rank or suit-description lookup has no entry
    MissingMapping { kind: MappingKind, key: String },
    /// No override record exists for the card id
    MissingTranslation { id: String },
    /// The override exists but a meaning is blank after trimming
    IncompleteTranslation { id: String },
    /// An ASCII keyword has no dictionary entry
    MissingKeyword { keyword: String },
}

impl fmt::Display for LocalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizeError::MissingMapping { kind, key } => {
                write!(f, "Missing {kind} mapping for {key}")
            }
            LocalizeError::MissingTranslation { id } => {
                write!(f, "Missing translation entry for {id}")
            }
            LocalizeError::IncompleteTranslation { id } => {
                write!(f, "Card {id} lacks meaning translations")
            }
            LocalizeError::MissingKeyword { keyword } => {
                write!(f, "Missing keyword translation for '{keyword}'")
            }
        }
    }
}

impl std::error::Error for LocalizeError {}

pub type LocalizeResult<T> = Result<T, LocalizeError>;
