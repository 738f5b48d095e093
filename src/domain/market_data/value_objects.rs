use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::number_utils::{round_to_fixed, to_fixed};

const CENT_PLACES: u32 = 2;

/// Value Object - USD price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Prices reaching the UI must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Round to cents, as charted. Same rule as [`Price::to_usd_string`].
    pub fn rounded_to_cents(&self) -> f64 {
        round_to_fixed(self.0, CENT_PLACES)
    }

    /// `$1234.50` style label.
    pub fn to_usd_string(&self) -> String {
        format!("${}", to_fixed(self.0, CENT_PLACES))
    }
}

/// Value Object - epoch milliseconds as delivered by the price API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Constructor, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Value Object - UTC calendar day in `YYYY-MM-DD` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The two assets the popup can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    #[default]
    #[strum(serialize = "bitcoin")]
    Bitcoin,
    #[strum(serialize = "ethereum")]
    Ethereum,
}

impl Asset {
    /// CoinGecko coin id.
    pub fn api_id(&self) -> &str {
        self.as_ref()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Ethereum => "Ethereum",
        }
    }

    /// The asset the visible switch button leads to.
    pub fn other(&self) -> Self {
        match self {
            Self::Bitcoin => Self::Ethereum,
            Self::Ethereum => Self::Bitcoin,
        }
    }
}
