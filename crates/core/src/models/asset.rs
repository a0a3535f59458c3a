use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The type of a tracked asset. Closed set — every rate lookup,
/// investment record and display listing is keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Gram gold ("GRA" in the rate feed)
    Gold,
    /// US dollar ("USD" in the rate feed)
    Dollar,
    /// Euro ("EUR" in the rate feed)
    Euro,
}

impl AssetType {
    /// All supported asset types, in display order.
    pub const ALL: [AssetType; 3] = [AssetType::Gold, AssetType::Dollar, AssetType::Euro];

    /// Human-readable label (e.g., "Gold").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Gold => "Gold",
            AssetType::Dollar => "Dollar",
            AssetType::Euro => "Euro",
        }
    }

    /// Unit symbol shown next to amounts ("g" for grams of gold).
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            AssetType::Gold => "g",
            AssetType::Dollar => "$",
            AssetType::Euro => "€",
        }
    }

    /// Key used by the rate feed for this asset.
    #[must_use]
    pub fn rate_code(&self) -> &'static str {
        match self {
            AssetType::Gold => "GRA",
            AssetType::Dollar => "USD",
            AssetType::Euro => "EUR",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AssetType {
    type Err = CoreError;

    /// Parse the lowercase wire/storage form ("gold", "dollar", "euro").
    /// The set is closed; anything else is a precondition violation at
    /// the input boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(AssetType::Gold),
            "dollar" => Ok(AssetType::Dollar),
            "euro" => Ok(AssetType::Euro),
            other => Err(CoreError::UnknownAsset(other.to_string())),
        }
    }
}
