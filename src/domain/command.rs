use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Insert,
    Display,
    Buy,
    Cancel,
    Empty,
}

/// One row of a session script.
///
/// Only `insert` carries a coin value. The value stays a raw integer here:
/// denomination policy belongs to the station, not the parser.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub r#type: CommandType,
    pub coin: Option<i64>,
}
