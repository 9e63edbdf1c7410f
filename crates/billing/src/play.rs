use std::collections::HashMap;

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use playbill_core::{BillingError, BillingResult, PlayId};

/// Play genre. Determines which tariff and credit bonus apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Stable lowercase tag, as used in play tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(BillingError::unknown_genre(other)),
        }
    }
}

/// A play, as loaded from the play table.
///
/// The genre is kept exactly as loaded. Tables may carry genres this engine does
/// not price; those only fail when a charge is actually computed for the play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    id: PlayId,
    name: String,
    genre: String,
}

impl Play {
    pub fn new(id: PlayId, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn tragedy(id: impl Into<PlayId>, name: impl Into<String>) -> Self {
        Self::new(id.into(), name, Genre::Tragedy.as_str())
    }

    pub fn comedy(id: impl Into<PlayId>, name: impl Into<String>) -> Self {
        Self::new(id.into(), name, Genre::Comedy.as_str())
    }

    pub fn id(&self) -> &PlayId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Genre tag exactly as loaded.
    pub fn genre_tag(&self) -> &str {
        &self.genre
    }

    /// Resolve the loaded tag to a supported genre.
    pub fn genre(&self) -> BillingResult<Genre> {
        self.genre.parse()
    }

    pub fn is_genre(&self, genre: Genre) -> bool {
        matches!(self.genre(), Ok(g) if g == genre)
    }
}

/// Body of a play-table entry; the id is the entry's key.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayRecord {
    pub name: String,
    #[serde(alias = "type")]
    pub genre: String,
}

/// Play lookup table, keyed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, PlayRecord>")]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_plays(plays: impl IntoIterator<Item = Play>) -> BillingResult<Self> {
        let mut catalog = Self::new();
        for play in plays {
            catalog.insert(play)?;
        }
        Ok(catalog)
    }

    /// Invariant: a play id appears at most once.
    pub fn insert(&mut self, play: Play) -> BillingResult<()> {
        if self.plays.contains_key(play.id()) {
            return Err(BillingError::validation(format!(
                "duplicate play id: {}",
                play.id()
            )));
        }
        self.plays.insert(play.id().clone(), play);
        Ok(())
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Look a play up, failing with `UnknownPlay` if it is absent.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.get(id)
            .ok_or_else(|| BillingError::unknown_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Play> {
        self.plays.values()
    }
}

impl TryFrom<HashMap<String, PlayRecord>> for PlayCatalog {
    type Error = BillingError;

    fn try_from(records: HashMap<String, PlayRecord>) -> Result<Self, Self::Error> {
        let plays = records
            .into_iter()
            .map(|(key, record)| Ok(Play::new(PlayId::new(key)?, record.name, record.genre)))
            .collect::<BillingResult<Vec<_>>>()?;
        Self::from_plays(plays)
    }
}
