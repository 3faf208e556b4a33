//! Canonical coin registry.
//!
//! One table maps every [`CoinId`] to its presentation descriptor. Every page
//! that shows a coin logo or gradient reads from here, and anything the
//! table doesn't know renders as the [`CoinId::Unknown`] placeholder.

use crate::models::{CoinAsset, CoinId};
use std::collections::HashMap;

// (id, symbol, name, color, icon)
const TABLE: [(CoinId, &str, &str, &str, &str); 10] = [
    (CoinId::Bitcoin, "BTC", "Bitcoin", "#f7931a", "₿"),
    (CoinId::Ethereum, "ETH", "Ethereum", "#627eea", "Ξ"),
    (CoinId::Ripple, "XRP", "Ripple", "#23292f", "✕"),
    (CoinId::Cardano, "ADA", "Cardano", "#0033ad", "₳"),
    (CoinId::Solana, "SOL", "Solana", "#9945ff", "◎"),
    (CoinId::Polkadot, "DOT", "Polkadot", "#e6007a", "●"),
    (CoinId::Chainlink, "LINK", "Chainlink", "#2a5ada", "⬡"),
    (CoinId::Litecoin, "LTC", "Litecoin", "#345d9d", "Ł"),
    (CoinId::Dogecoin, "DOGE", "Dogecoin", "#c2a633", "Ð"),
    (CoinId::Unknown, "???", "Unknown", "#8a8f98", "?"),
];

pub struct CoinRegistry {
    assets: HashMap<CoinId, CoinAsset>,
    unknown: CoinAsset,
}

impl Default for CoinRegistry {
    fn default() -> Self {
        let mut assets: HashMap<CoinId, CoinAsset> = TABLE
            .iter()
            .map(|(id, symbol, name, color, icon)| {
                let asset = CoinAsset {
                    id: *id,
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                    color: color.to_string(),
                    gradient_id: format!("{}-gradient", id.as_str()),
                    icon: icon.to_string(),
                };
                (*id, asset)
            })
            .collect();
        let unknown = assets.remove(&CoinId::Unknown).unwrap_or_else(|| CoinAsset {
            id: CoinId::Unknown,
            symbol: "???".to_string(),
            name: "Unknown".to_string(),
            color: "#8a8f98".to_string(),
            gradient_id: "unknown-gradient".to_string(),
            icon: "?".to_string(),
        });
        Self { assets, unknown }
    }
}

impl CoinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for `id`. Ids missing from the table get the unknown placeholder.
    pub fn get(&self, id: CoinId) -> &CoinAsset {
        self.assets.get(&id).unwrap_or(&self.unknown)
    }

    /// Look up by id or ticker symbol, case-insensitively.
    pub fn lookup(&self, key: &str) -> &CoinAsset {
        match key.parse::<CoinId>() {
            Ok(id) => self.get(id),
            Err(never) => match never {},
        }
    }

    /// Known coins in canonical order, excluding the unknown placeholder.
    pub fn iter(&self) -> impl Iterator<Item = &CoinAsset> {
        CoinId::KNOWN.iter().map(move |id| self.get(*id))
    }

    /// Number of known coins.
    pub fn len(&self) -> usize {
        CoinId::KNOWN.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
