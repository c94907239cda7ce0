use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use chess_core::validate::{check_tournament_id, parse_identifier};
use chess_core::FormatFlags;
use serde::Deserialize;

use crate::clients::livechess::LiveChessClient;
use crate::error::AppError;
use crate::pipeline::{self, DownloadScope};

/// Annotation switches. Anything left out stays on.
#[derive(Debug, Default, Deserialize)]
pub struct FlagsQuery {
    #[serde(rename = "includeEMT")]
    pub include_emt: Option<bool>,
    #[serde(rename = "includeClkAttr")]
    pub include_clk_attr: Option<bool>,
    #[serde(rename = "includeClkComment")]
    pub include_clk_comment: Option<bool>,
}

impl FlagsQuery {
    pub fn flags(&self) -> FormatFlags {
        let defaults = FormatFlags::default();
        FormatFlags {
            include_emt: self.include_emt.unwrap_or(defaults.include_emt),
            include_clk_attr: self.include_clk_attr.unwrap_or(defaults.include_clk_attr),
            include_clk_comment: self
                .include_clk_comment
                .unwrap_or(defaults.include_clk_comment),
        }
    }
}

fn resolve_flags(query: Result<Query<FlagsQuery>, QueryRejection>) -> Result<FormatFlags, AppError> {
    let Query(q) = query.map_err(|e| AppError::Query(e.body_text()))?;
    Ok(q.flags())
}

async fn serve(
    client: &LiveChessClient,
    id: &str,
    scope: DownloadScope,
    flags: FormatFlags,
) -> Result<Response, AppError> {
    tracing::info!("Download requested: {id} {scope:?} {flags:?}");
    let pgn = pipeline::download_pgn(client, id, scope, flags).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", scope.filename(id)),
        ),
    ];
    Ok((headers, pgn).into_response())
}

/// GET /download/{id}/all
pub async fn download_all(
    Extension(client): Extension<LiveChessClient>,
    Path(id): Path<String>,
    query: Result<Query<FlagsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let id = check_tournament_id(&id)?;
    let flags = resolve_flags(query)?;
    serve(&client, id, DownloadScope::All, flags).await
}

/// GET /download/{id}/{round}
pub async fn download_round(
    Extension(client): Extension<LiveChessClient>,
    Path((id, round)): Path<(String, String)>,
    query: Result<Query<FlagsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let id = check_tournament_id(&id)?;
    let round = parse_identifier(&round)?;
    let flags = resolve_flags(query)?;
    serve(&client, id, DownloadScope::Round(round), flags).await
}

/// GET /download/{id}/{round}/{game}
pub async fn download_game(
    Extension(client): Extension<LiveChessClient>,
    Path((id, round, game)): Path<(String, String, String)>,
    query: Result<Query<FlagsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let id = check_tournament_id(&id)?;
    let round = parse_identifier(&round)?;
    let game = parse_identifier(&game)?;
    let flags = resolve_flags(query)?;
    serve(&client, id, DownloadScope::Game { round, game }, flags).await
}
