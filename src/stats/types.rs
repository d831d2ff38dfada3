use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One played game as reported by the stats provider.
///
/// Overlapping queries (season logs, recent window, head-to-head) can return
/// the same game more than once; duplicates are collapsed by full-row
/// equality downstream, which is why the struct derives `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRow {
    pub date: NaiveDate,
    /// Provider matchup text, e.g. "LAL vs. BOS" (home) or "LAL @ BOS" (away)
    pub matchup: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
}
