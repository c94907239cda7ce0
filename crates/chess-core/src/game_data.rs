//! Documents served by the LiveChessCloud pool API.
//!
//! Every field the remote side may leave out or send as `null` is optional here,
//! so a sparse document still decodes.

use serde::{Deserialize, Serialize};

/// Final result code of a game as reported by the board feed.
/// Serializes back to the feed's own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
    #[default]
    NoResult,
}

impl From<Option<String>> for GameResult {
    fn from(code: Option<String>) -> Self {
        match code.as_deref() {
            Some("WHITEWIN") => GameResult::WhiteWin,
            Some("BLACKWIN") => GameResult::BlackWin,
            Some("DRAW") => GameResult::Draw,
            _ => GameResult::NoResult,
        }
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::WhiteWin => "WHITEWIN",
            GameResult::BlackWin => "BLACKWIN",
            GameResult::Draw => "DRAW",
            GameResult::NoResult => "*",
        }
        .to_string()
    }
}

impl GameResult {
    /// PGN result token.
    pub fn as_pgn(self) -> &'static str {
        match self {
            GameResult::WhiteWin => "1-0",
            GameResult::BlackWin => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::NoResult => "*",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub live: u32,
}

impl Round {
    pub fn has_games(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tournament {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub rules: Option<String>,
    pub chess960: Option<String>,
    pub timecontrol: Option<String>,
    pub rounds: Vec<Round>,
    pub eboards: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub fname: Option<String>,
    pub mname: Option<String>,
    pub lname: Option<String>,
    pub title: Option<String>,
    pub federation: Option<String>,
    pub gender: Option<String>,
    pub fideid: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pairing {
    pub white: Player,
    pub black: Player,
    pub result: Option<String>,
    pub live: bool,
}

/// Per-round index: the round date plus one pairing per board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundIndex {
    pub date: Option<String>,
    pub pairings: Vec<Pairing>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    pub live: bool,
    pub serial_nr: Option<String>,
    pub first_move: Option<i64>,
    pub chess960: Option<i64>,
    pub result: GameResult,
    /// Raw tokens, e.g. `"e4 5400+12"`.
    pub moves: Vec<String>,
}
