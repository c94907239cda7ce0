//! Folding a batch of game fetches into one PGN file.

use crate::error::PipelineError;
use crate::event::{CorrelationMap, FetchTarget, IndexByRound};
use crate::game_data::{Game, Tournament};
use crate::pgn::{transcribe_game, FormatFlags};

/// Result of fetching one game document. A failure only drops that game.
#[derive(Debug, Clone)]
pub enum GameOutcome {
    Fetched(Game),
    Failed(String),
}

impl GameOutcome {
    pub fn game(&self) -> Option<&Game> {
        match self {
            GameOutcome::Fetched(game) => Some(game),
            GameOutcome::Failed(_) => None,
        }
    }
}

/// Transcribe every fetched game, in request order, separated by blank lines.
///
/// `outcomes[i]` is the outcome of fetching `targets[i]`. Failed fetches are
/// skipped; if nothing is left the batch fails with [`PipelineError::EmptyResult`].
pub fn assemble_batch(
    tournament: &Tournament,
    indices: &IndexByRound,
    outcomes: &[GameOutcome],
    targets: &[FetchTarget],
    correlation: &CorrelationMap,
    flags: FormatFlags,
) -> Result<String, PipelineError> {
    let blocks: Vec<String> = outcomes
        .iter()
        .zip(targets)
        .filter_map(|(outcome, target)| {
            let game = outcome.game()?;
            let coord = correlation.get(&target.url)?;
            let index = indices.get(&coord.round)?;
            let pairing = index.pairings.get(coord.game as usize - 1)?;
            Some(transcribe_game(
                tournament,
                pairing,
                game,
                coord.round,
                index.date.as_deref(),
                flags,
            ))
        })
        .collect();

    if blocks.is_empty() {
        return Err(PipelineError::EmptyResult);
    }
    Ok(blocks.join("\n\n"))
}
