use super::{CoinId, Period};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Settings — User preferences persisted across sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub currency: String,
    pub default_period: Period,
    pub notifications_enabled: bool,
    pub favorites: Vec<CoinId>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            currency: "USD".to_string(),
            default_period: Period::Weekly,
            notifications_enabled: true,
            favorites: vec![CoinId::Bitcoin, CoinId::Ethereum],
        }
    }
}

impl Settings {
    pub fn is_favorite(&self, coin: CoinId) -> bool {
        self.favorites.contains(&coin)
    }

    /// Add or remove `coin` from favorites. Returns `true` if it is now a favorite.
    pub fn toggle_favorite(&mut self, coin: CoinId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|c| *c == coin) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(coin);
            true
        }
    }
}

// ---------------------------------------------------------------------------
// ReadState — Which inbox messages have been read
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadState {
    pub read: BTreeSet<String>,
}

impl ReadState {
    pub fn is_read(&self, message_id: &str) -> bool {
        self.read.contains(message_id)
    }

    /// Returns `true` if the message was previously unread.
    pub fn mark_read(&mut self, message_id: impl Into<String>) -> bool {
        self.read.insert(message_id.into())
    }

    /// Returns `true` if the message was previously read.
    pub fn mark_unread(&mut self, message_id: &str) -> bool {
        self.read.remove(message_id)
    }

    pub fn mark_all_read<I, S>(&mut self, message_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read.extend(message_ids.into_iter().map(Into::into));
    }

    /// Count of `message_ids` not yet marked read.
    pub fn unread_count<'a, I>(&self, message_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        message_ids
            .into_iter()
            .filter(|id| !self.read.contains(*id))
            .count()
    }
}
