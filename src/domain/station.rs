use super::coin::{Coin, CoinLog};
use super::receipt::{Minutes, Receipt};
use crate::error::Result;

/// A coin-operated parking pay station.
///
/// Owns the state of the in-progress transaction (coins inserted, time
/// bought, coin log) and the cumulative earnings since the last collection.
/// A transaction accumulates via `add_payment` and terminates through
/// exactly one of `buy` (commits to earnings) or `cancel` (refunds the
/// coins). All operations are synchronous; a station shared between
/// callers must be guarded as a single mutual-exclusion region.
#[derive(Debug, Default)]
pub struct PayStation {
    inserted_so_far: u32,
    time_bought: Minutes,
    total_earnings: u32,
    coin_log: CoinLog,
}

impl PayStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a coin into the current transaction.
    ///
    /// Rejects unrecognized denominations with `InvalidCoin` before any
    /// state is touched. On success the coin is logged, the inserted total
    /// grows by its value and the display time is recomputed.
    pub fn add_payment(&mut self, coin_value: i64) -> Result<()> {
        let coin = Coin::try_from(coin_value)?;
        self.coin_log.record(coin);
        self.inserted_so_far += coin.value();
        self.time_bought = Minutes::bought_for(self.inserted_so_far);
        Ok(())
    }

    /// Parking time bought by the in-progress transaction.
    pub fn read_display(&self) -> Minutes {
        self.time_bought
    }

    /// Commits the current transaction: issues a receipt for the time
    /// bought, adds the inserted total to the earnings and resets the
    /// transaction. Legal with no coins inserted, yielding a zero-minute
    /// receipt.
    pub fn buy(&mut self) -> Receipt {
        let receipt = Receipt::new(self.time_bought);
        self.total_earnings += self.inserted_so_far;
        self.reset();
        receipt
    }

    /// Aborts the current transaction and returns the coins to refund.
    ///
    /// The returned log is an owned snapshot; it cannot alias station
    /// state. Earnings are untouched.
    pub fn cancel(&mut self) -> CoinLog {
        let refund = std::mem::take(&mut self.coin_log);
        self.reset();
        refund
    }

    /// Collects the earnings accumulated since the last call (or since
    /// creation) and resets them to zero. The in-progress transaction is
    /// untouched.
    pub fn empty(&mut self) -> u32 {
        std::mem::take(&mut self.total_earnings)
    }

    fn reset(&mut self) {
        self.inserted_so_far = 0;
        self.time_bought = Minutes::ZERO;
        self.coin_log = CoinLog::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayStationError;

    #[test]
    fn test_display_starts_at_zero() {
        let station = PayStation::new();
        assert_eq!(station.read_display(), Minutes::ZERO);
    }

    #[test]
    fn test_valid_coins_accumulate() {
        let mut station = PayStation::new();
        for coin in [5, 10, 25] {
            station.add_payment(coin).unwrap();
        }
        // 40 cents inserted, 40 / 5 * 2 = 16 minutes
        assert_eq!(station.read_display(), Minutes(16));
    }

    #[test]
    fn test_invalid_coin_leaves_state_unchanged() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();

        let result = station.add_payment(17);
        assert!(matches!(result, Err(PayStationError::InvalidCoin(17))));

        assert_eq!(station.read_display(), Minutes(10));
        let refund = station.cancel();
        assert_eq!(refund.count(Coin::QUARTER), 1);
        assert_eq!(refund.total(), 25);
    }

    #[test]
    fn test_invalid_coin_on_fresh_station() {
        let mut station = PayStation::new();
        assert!(matches!(
            station.add_payment(1),
            Err(PayStationError::InvalidCoin(1))
        ));
        assert_eq!(station.read_display(), Minutes::ZERO);
    }

    #[test]
    fn test_read_display_is_idempotent() {
        let mut station = PayStation::new();
        station.add_payment(10).unwrap();
        assert_eq!(station.read_display(), station.read_display());
    }

    #[test]
    fn test_buy_issues_receipt_and_resets() {
        let mut station = PayStation::new();
        for _ in 0..5 {
            station.add_payment(5).unwrap();
        }
        assert_eq!(station.read_display(), Minutes(10));

        let receipt = station.buy();
        assert_eq!(receipt.minutes(), Minutes(10));
        assert_eq!(station.read_display(), Minutes::ZERO);

        // The next transaction starts from an empty coin log
        station.add_payment(10).unwrap();
        let refund = station.cancel();
        assert_eq!(refund.count(Coin::NICKEL), 0);
        assert_eq!(refund.count(Coin::DIME), 1);
    }

    #[test]
    fn test_buy_with_no_coins() {
        let mut station = PayStation::new();
        let receipt = station.buy();
        assert_eq!(receipt.minutes(), Minutes::ZERO);
        assert_eq!(station.empty(), 0);
    }

    #[test]
    fn test_cancel_returns_exact_coins() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();
        station.add_payment(25).unwrap();
        station.add_payment(10).unwrap();

        let refund = station.cancel();
        assert_eq!(refund.count(Coin::QUARTER), 2);
        assert_eq!(refund.count(Coin::DIME), 1);
        assert_eq!(refund.count(Coin::NICKEL), 0);
        assert_eq!(station.read_display(), Minutes::ZERO);
    }

    #[test]
    fn test_cancel_snapshot_is_decoupled() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();
        let refund = station.cancel();

        station.add_payment(5).unwrap();
        station.add_payment(25).unwrap();

        assert_eq!(refund.count(Coin::QUARTER), 1);
        assert_eq!(refund.count(Coin::NICKEL), 0);
        assert_eq!(refund.total(), 25);
    }

    #[test]
    fn test_cancel_does_not_touch_earnings() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();
        station.buy();

        station.add_payment(10).unwrap();
        station.cancel();

        assert_eq!(station.empty(), 25);
    }

    #[test]
    fn test_earnings_conservation() {
        let mut station = PayStation::new();
        assert_eq!(station.empty(), 0);

        let sequences: [&[i64]; 3] = [&[25, 25], &[5, 10], &[25]];
        let mut expected = 0;
        for coins in sequences {
            for &coin in coins {
                station.add_payment(coin).unwrap();
                expected += coin as u32;
            }
            station.buy();
        }

        assert_eq!(station.empty(), expected);
        assert_eq!(station.empty(), 0);
    }

    #[test]
    fn test_empty_does_not_touch_transaction() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();
        station.buy();

        station.add_payment(10).unwrap();
        assert_eq!(station.empty(), 25);

        // The in-progress dime is still there
        assert_eq!(station.read_display(), Minutes(4));
        let refund = station.cancel();
        assert_eq!(refund.count(Coin::DIME), 1);
    }

    #[test]
    fn test_five_nickels_scenario() {
        let mut station = PayStation::new();
        for _ in 0..5 {
            station.add_payment(5).unwrap();
        }
        assert_eq!(station.read_display(), Minutes(10));

        let receipt = station.buy();
        assert_eq!(receipt.minutes(), Minutes(10));
        assert_eq!(station.empty(), 25);
    }

    #[test]
    fn test_single_quarter_cancel_scenario() {
        let mut station = PayStation::new();
        station.add_payment(25).unwrap();

        let refund = station.cancel();
        assert_eq!(refund.count(Coin::QUARTER), 1);
        assert_eq!(station.read_display(), Minutes::ZERO);
    }
}
