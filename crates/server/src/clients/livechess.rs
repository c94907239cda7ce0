use std::time::Duration;

use chess_core::event::FetchTarget;
use chess_core::game_data::{Game, RoundIndex, Tournament};
use chess_core::urls::UrlResolver;
use chess_core::{GameOutcome, PipelineError};
use futures::future::{join_all, try_join_all};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::Config;

/// Client for the LiveChessCloud pool. Cheap to clone; clones share one
/// connection pool.
#[derive(Clone, Debug)]
pub struct LiveChessClient {
    client: Client,
    urls: UrlResolver,
}

impl LiveChessClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("LiveChessPgn/1.0")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            urls: UrlResolver::new(&config.livechess_base_url),
        })
    }

    pub fn urls(&self) -> &UrlResolver {
        &self.urls
    }

    /// GET a JSON document, bypassing any HTTP cache: live boards change
    /// between polls.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PipelineError> {
        tracing::debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| PipelineError::Network(format!("{url}: {e}")))?;

        if !resp.status().is_success() {
            return Err(PipelineError::Network(format!("{url}: HTTP {}", resp.status())));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| PipelineError::Network(format!("{url}: body read error: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| PipelineError::Decode(format!("{url}: {e}")))
    }

    pub async fn fetch_tournament(&self, id: &str) -> Result<Tournament, PipelineError> {
        self.get_json(&self.urls.tournament_url(id)).await
    }

    /// Fetch the index of every requested round concurrently. One failure
    /// fails the whole batch.
    pub async fn fetch_indices(
        &self,
        id: &str,
        rounds: &[u32],
    ) -> Result<Vec<RoundIndex>, PipelineError> {
        let urls: Vec<String> = rounds
            .iter()
            .map(|&round| self.urls.index_url(id, round))
            .collect();

        try_join_all(urls.iter().map(|url| self.get_json::<RoundIndex>(url))).await
    }

    /// Fetch every target concurrently. Outcomes line up with `targets`;
    /// a failed game never affects its siblings.
    pub async fn fetch_games(&self, targets: &[FetchTarget]) -> Vec<GameOutcome> {
        let fetches = targets.iter().map(|target| async move {
            match self.get_json::<Game>(&target.url).await {
                Ok(game) => GameOutcome::Fetched(game),
                Err(e) => {
                    tracing::warn!(
                        round = target.round,
                        game = target.game,
                        "Dropping game: {e}"
                    );
                    GameOutcome::Failed(e.to_string())
                }
            }
        });

        join_all(fetches).await
    }
}
