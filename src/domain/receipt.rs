use serde::Serialize;

/// Minutes of parking time, the value shown on the station display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Self = Self(0);

    /// Parking rate: two minutes for every full five cents inserted.
    /// Fractional remainders buy no extra time.
    pub fn bought_for(cents: u32) -> Self {
        Self(cents / 5 * 2)
    }
}

/// Proof of purchase issued by `PayStation::buy`.
///
/// Carries the parking time bought by the completed transaction and has no
/// ongoing relationship to the station that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    minutes: Minutes,
}

impl Receipt {
    pub fn new(minutes: Minutes) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> Minutes {
        self.minutes
    }
}
