use crate::domain::coin::CoinLog;
use crate::domain::command::{Command, CommandType};
use crate::domain::receipt::{Minutes, Receipt};
use crate::domain::station::PayStation;
use crate::error::{PayStationError, Result};

/// An observable outcome of a session command.
///
/// Inserting a coin produces no event of its own; its effect shows up in
/// the next display, receipt or refund.
#[derive(Debug, PartialEq, Clone)]
pub enum SessionEvent {
    Display { minutes: Minutes },
    Receipt { receipt: Receipt },
    Refund { coins: CoinLog },
    Collected { cents: u32 },
}

/// The main entry point for the command-processing application.
///
/// `StationEngine` owns a single `PayStation` and replays a session script
/// against it, accumulating the observable outcomes in order. It plays the
/// caller role of the station's contract: it obtains coin input and is
/// responsible for surfacing receipts, refunds and collections.
#[derive(Debug, Default)]
pub struct StationEngine {
    station: PayStation,
    events: Vec<SessionEvent>,
}

impl StationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command to the station.
    ///
    /// A rejected coin surfaces as `InvalidCoin` with the station left
    /// unchanged; the session may continue with further commands.
    pub fn process_command(&mut self, cmd: Command) -> Result<()> {
        match cmd.r#type {
            CommandType::Insert => {
                let coin = cmd
                    .coin
                    .ok_or_else(|| PayStationError::CommandError("Insert missing coin".into()))?;
                self.station.add_payment(coin)?;
            }
            CommandType::Display => {
                self.events.push(SessionEvent::Display {
                    minutes: self.station.read_display(),
                });
            }
            CommandType::Buy => {
                let receipt = self.station.buy();
                self.events.push(SessionEvent::Receipt { receipt });
            }
            CommandType::Cancel => {
                let coins = self.station.cancel();
                self.events.push(SessionEvent::Refund { coins });
            }
            CommandType::Empty => {
                let cents = self.station.empty();
                self.events.push(SessionEvent::Collected { cents });
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns the session's event log.
    pub fn into_results(self) -> Vec<SessionEvent> {
        self.events
    }
}
