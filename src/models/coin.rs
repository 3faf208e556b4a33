use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// CoinId — Closed set of coins the dashboard knows how to render
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinId {
    Bitcoin,
    Ethereum,
    Ripple,
    Cardano,
    Solana,
    Polkadot,
    Chainlink,
    Litecoin,
    Dogecoin,
    Unknown,
}

impl CoinId {
    /// Every known coin, excluding [`CoinId::Unknown`].
    pub const KNOWN: [CoinId; 9] = [
        CoinId::Bitcoin,
        CoinId::Ethereum,
        CoinId::Ripple,
        CoinId::Cardano,
        CoinId::Solana,
        CoinId::Polkadot,
        CoinId::Chainlink,
        CoinId::Litecoin,
        CoinId::Dogecoin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoinId::Bitcoin => "bitcoin",
            CoinId::Ethereum => "ethereum",
            CoinId::Ripple => "ripple",
            CoinId::Cardano => "cardano",
            CoinId::Solana => "solana",
            CoinId::Polkadot => "polkadot",
            CoinId::Chainlink => "chainlink",
            CoinId::Litecoin => "litecoin",
            CoinId::Dogecoin => "dogecoin",
            CoinId::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != CoinId::Unknown
    }
}

impl FromStr for CoinId {
    type Err = Infallible;

    /// Never fails: anything unrecognized becomes [`CoinId::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => CoinId::Bitcoin,
            "ethereum" | "eth" => CoinId::Ethereum,
            "ripple" | "xrp" => CoinId::Ripple,
            "cardano" | "ada" => CoinId::Cardano,
            "solana" | "sol" => CoinId::Solana,
            "polkadot" | "dot" => CoinId::Polkadot,
            "chainlink" | "link" => CoinId::Chainlink,
            "litecoin" | "ltc" => CoinId::Litecoin,
            "dogecoin" | "doge" => CoinId::Dogecoin,
            _ => CoinId::Unknown,
        };
        Ok(id)
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CoinAsset — Presentation descriptor for a coin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinAsset {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Brand color as a `#rrggbb` hex string.
    pub color: String,
    /// SVG gradient id shared by every chart that fills with this coin's color.
    pub gradient_id: String,
    pub icon: String,
}
