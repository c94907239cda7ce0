//! Resource locations on the LiveChessCloud pool.

pub const DEFAULT_BASE_URL: &str = "https://1.pool.livechesscloud.com/get";

/// Maps (tournament, round, game) to remote document URLs.
#[derive(Clone, Debug)]
pub struct UrlResolver {
    base: String,
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UrlResolver {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn tournament_url(&self, id: &str) -> String {
        format!("{}/{}/tournament.json", self.base, id)
    }

    pub fn index_url(&self, id: &str, round: u32) -> String {
        format!("{}/{}/round-{}/index.json", self.base, id, round)
    }

    /// The trailing `?poll` is what the live viewer sends; keep it.
    pub fn game_url(&self, id: &str, round: u32, game: u32) -> String {
        format!("{}/{}/round-{}/game-{}.json?poll", self.base, id, round, game)
    }
}
