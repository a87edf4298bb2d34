use crate::error::PayStationError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A recognized coin denomination, in cents.
///
/// Only nickels, dimes and quarters are accepted. Construction goes through
/// `TryFrom<i64>` so an unrecognized value is rejected before it can touch
/// any transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coin(u32);

impl Coin {
    pub const NICKEL: Self = Self(5);
    pub const DIME: Self = Self(10);
    pub const QUARTER: Self = Self(25);

    const ACCEPTED: [Self; 3] = [Self::NICKEL, Self::DIME, Self::QUARTER];

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Coin {
    type Error = PayStationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ACCEPTED
            .into_iter()
            .find(|coin| i64::from(coin.0) == value)
            .ok_or(PayStationError::InvalidCoin(value))
    }
}

/// Per-denomination count of the coins inserted in the current transaction.
///
/// Built incrementally by each valid insertion and discarded on every reset.
/// The only way a caller can get hold of one is `PayStation::cancel`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoinLog {
    counts: HashMap<Coin, u32>,
}

impl CoinLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more coin of the given denomination, creating the entry
    /// at 1 if absent.
    pub fn record(&mut self, coin: Coin) {
        *self.counts.entry(coin).or_insert(0) += 1;
    }

    pub fn count(&self, coin: Coin) -> u32 {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of value times count over every logged denomination.
    pub fn total(&self) -> u32 {
        self.counts
            .iter()
            .map(|(coin, count)| coin.value() * count)
            .sum()
    }

    /// Snapshot of the logged coins, sorted by denomination for
    /// deterministic rendering.
    pub fn coins(&self) -> Vec<(Coin, u32)> {
        let mut coins: Vec<_> = self
            .counts
            .iter()
            .map(|(coin, count)| (*coin, *count))
            .collect();
        coins.sort_by_key(|(coin, _)| *coin);
        coins
    }
}

impl Serialize for CoinLog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let coins = self.coins();
        let mut map = serializer.serialize_map(Some(coins.len()))?;
        for (coin, count) in coins {
            map.serialize_entry(&coin.value().to_string(), &count)?;
        }
        map.end()
    }
}
