use crate::domain::command::Command;
use crate::error::{PayStationError, Result};
use std::io::Read;

/// Reads session commands from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Command>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    ///
    /// A malformed row yields an `Err` item without aborting the rest of
    /// the stream.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayStationError::from))
    }
}
