use anyhow::Result;
use async_trait::async_trait;

use super::types::GameRow;

/// Trait every stats provider must implement.
///
/// Ordering contract: both queries return rows **newest first**. Callers that
/// need "the last N games" must still sort explicitly before truncating — the
/// contract documents the expectation, it does not replace the sort.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Full per-game log for one player in one season (e.g. "2023-24").
    async fn fetch_game_log(&self, player_id: u32, season: &str) -> Result<Vec<GameRow>>;

    /// Every game on record for the player, across all seasons.
    async fn fetch_all_games(&self, player_id: u32) -> Result<Vec<GameRow>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
