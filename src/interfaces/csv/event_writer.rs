use crate::application::engine::SessionEvent;
use crate::domain::coin::CoinLog;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the session report.
#[derive(Serialize)]
struct EventRecord {
    event: &'static str,
    minutes: Option<u32>,
    amount: Option<u32>,
    coins: Option<String>,
}

impl From<&SessionEvent> for EventRecord {
    fn from(event: &SessionEvent) -> Self {
        match event {
            SessionEvent::Display { minutes } => Self {
                event: "display",
                minutes: Some(minutes.0),
                amount: None,
                coins: None,
            },
            SessionEvent::Receipt { receipt } => Self {
                event: "receipt",
                minutes: Some(receipt.minutes().0),
                amount: None,
                coins: None,
            },
            SessionEvent::Refund { coins } => Self {
                event: "refund",
                minutes: None,
                amount: None,
                coins: Some(format_coins(coins)),
            },
            SessionEvent::Collected { cents } => Self {
                event: "collected",
                minutes: None,
                amount: Some(*cents),
                coins: None,
            },
        }
    }
}

/// Renders a refund as `5x1 25x2`, sorted by denomination.
fn format_coins(log: &CoinLog) -> String {
    log.coins()
        .iter()
        .map(|(coin, count)| format!("{}x{}", coin.value(), count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the session's events as a CSV report.
pub struct EventWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> EventWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_events(&mut self, events: &[SessionEvent]) -> Result<()> {
        for event in events {
            self.writer.serialize(EventRecord::from(event))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
