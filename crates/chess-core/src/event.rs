//! Working out which games a download covers, and mapping fetched documents
//! back to their place in the tournament.

use std::collections::{BTreeMap, HashMap};

use crate::game_data::{RoundIndex, Tournament};
use crate::urls::UrlResolver;

/// Round indices keyed by 1-based round number, iterated in ascending order.
pub type IndexByRound = BTreeMap<u32, RoundIndex>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameCoord {
    pub round: u32,
    pub game: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    pub url: String,
    pub round: u32,
    pub game: u32,
}

impl FetchTarget {
    pub fn coord(&self) -> GameCoord {
        GameCoord {
            round: self.round,
            game: self.game,
        }
    }
}

/// 1-based numbers of the rounds that have at least one game, ascending.
pub fn rounds_with_games(tournament: &Tournament) -> Vec<u32> {
    tournament
        .rounds
        .iter()
        .zip(1u32..)
        .filter(|(round, _)| round.has_games())
        .map(|(_, number)| number)
        .collect()
}

/// Pair each fetched index with the round it was requested for.
/// `indices` must be in the same order as `rounds`.
pub fn index_by_round(rounds: &[u32], indices: Vec<RoundIndex>) -> IndexByRound {
    rounds.iter().copied().zip(indices).collect()
}

/// One target per pairing slot of every indexed round, round-major then
/// game-minor. Only rounds present in `indices` are enumerated, so a round
/// whose index was never fetched cannot produce targets.
pub fn enumerate_targets(urls: &UrlResolver, id: &str, indices: &IndexByRound) -> Vec<FetchTarget> {
    indices
        .iter()
        .flat_map(|(&round, index)| {
            (1..=index.pairings.len() as u32).map(move |game| FetchTarget {
                url: urls.game_url(id, round, game),
                round,
                game,
            })
        })
        .collect()
}

/// Resource URL → (round, game) for one request batch.
#[derive(Debug, Clone, Default)]
pub struct CorrelationMap(HashMap<String, GameCoord>);

impl CorrelationMap {
    pub fn build(targets: &[FetchTarget]) -> Self {
        Self(
            targets
                .iter()
                .map(|t| (t.url.clone(), t.coord()))
                .collect(),
        )
    }

    pub fn get(&self, url: &str) -> Option<GameCoord> {
        self.0.get(url).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
