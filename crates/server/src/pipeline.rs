//! One download request: tournament → round indices → games → PGN.

use chess_core::event::{enumerate_targets, index_by_round, rounds_with_games, CorrelationMap};
use chess_core::{assemble_batch, FormatFlags, PipelineError};

use crate::clients::livechess::LiveChessClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadScope {
    /// Every round that has games.
    All,
    Round(u32),
    Game { round: u32, game: u32 },
}

impl DownloadScope {
    /// Attachment name: `{id}.pgn`, `{id}-R{round}.pgn` or `{id}-R{round}-{game}.pgn`.
    pub fn filename(&self, id: &str) -> String {
        match self {
            DownloadScope::All => format!("{id}.pgn"),
            DownloadScope::Round(round) => format!("{id}-R{round}.pgn"),
            DownloadScope::Game { round, game } => format!("{id}-R{round}-{game}.pgn"),
        }
    }
}

pub async fn download_pgn(
    client: &LiveChessClient,
    id: &str,
    scope: DownloadScope,
    flags: FormatFlags,
) -> Result<String, PipelineError> {
    let tournament = client.fetch_tournament(id).await?;

    let rounds = match scope {
        DownloadScope::All => rounds_with_games(&tournament),
        DownloadScope::Round(round) | DownloadScope::Game { round, .. } => vec![round],
    };

    let indices = index_by_round(&rounds, client.fetch_indices(id, &rounds).await?);

    let mut targets = enumerate_targets(client.urls(), id, &indices);
    if let DownloadScope::Game { game, .. } = scope {
        targets.retain(|t| t.game == game);
    }
    let correlation = CorrelationMap::build(&targets);

    let outcomes = client.fetch_games(&targets).await;
    let pgn = assemble_batch(&tournament, &indices, &outcomes, &targets, &correlation, flags)?;

    let transcribed = outcomes.iter().filter(|o| o.game().is_some()).count();
    tracing::info!(
        "Tournament {id} ({scope:?}): {transcribed}/{} games transcribed",
        targets.len()
    );

    Ok(pgn)
}
