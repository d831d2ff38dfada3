use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::provider::StatsProvider;
use super::types::GameRow;

/// Stats provider backed by the public stats.nba.com API.
/// Endpoints: `playergamelog` (per-season log) and `leaguegamefinder`
/// (all-time result set), both wrapped in the resultSets/headers/rowSet
/// envelope.
pub struct NbaStats {
    http: Client,
    /// Base URL for overriding in tests
    base_url: String,
}

impl NbaStats {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self> {
        // stats.nba.com rejects requests without browser-like headers.
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            ),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(NbaStats {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_rows(&self, url: &str, what: &str) -> Result<Vec<GameRow>> {
        debug!("Fetching {} from {}", what, url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("NBA stats request failed ({})", what))?;

        if !resp.status().is_success() {
            anyhow::bail!("NBA stats API error for {}: {}", what, resp.status());
        }

        let raw: serde_json::Value = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse NBA stats response ({})", what))?;

        let rows = parse_game_rows(&raw)
            .with_context(|| format!("Malformed NBA stats payload ({})", what))?;
        if rows.is_empty() {
            anyhow::bail!("NBA stats API returned no games for {}", what);
        }
        Ok(rows)
    }
}

#[async_trait]
impl StatsProvider for NbaStats {
    fn name(&self) -> &str {
        "stats.nba.com"
    }

    async fn fetch_game_log(&self, player_id: u32, season: &str) -> Result<Vec<GameRow>> {
        let url = format!(
            "{}/playergamelog?PlayerID={}&Season={}&SeasonType=Regular%20Season",
            self.base_url, player_id, season
        );
        self.fetch_rows(&url, &format!("game log {}", season)).await
    }

    async fn fetch_all_games(&self, player_id: u32) -> Result<Vec<GameRow>> {
        let url = format!(
            "{}/leaguegamefinder?PlayerOrTeamAbbreviation=P&PlayerIDNullable={}&LeagueID=00",
            self.base_url, player_id
        );
        self.fetch_rows(&url, "all-time game finder").await
    }
}

// ── Parsing helpers ────────────────────────────────────────────────────────────

/// Extract game rows from the stats.nba.com envelope:
/// `{ "resultSets": [ { "headers": [...], "rowSet": [[...], ...] } ] }`.
/// Column positions differ between endpoints, so cells are addressed through
/// the header index. Rows missing a tracked stat are skipped.
pub fn parse_game_rows(raw: &serde_json::Value) -> Result<Vec<GameRow>> {
    let result_set = raw["resultSets"]
        .as_array()
        .and_then(|sets| sets.first())
        .context("resultSets missing from response")?;

    let headers = result_set["headers"]
        .as_array()
        .context("headers missing from result set")?;
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.as_str() == Some(name))
            .with_context(|| format!("column {} missing from result set", name))
    };

    let date_col = col("GAME_DATE")?;
    let matchup_col = col("MATCHUP")?;
    let pts_col = col("PTS")?;
    let reb_col = col("REB")?;
    let ast_col = col("AST")?;
    let stl_col = col("STL")?;
    let blk_col = col("BLK")?;

    let row_set = match result_set["rowSet"].as_array() {
        Some(a) => a,
        None => return Ok(vec![]),
    };

    let games = row_set
        .iter()
        .filter_map(|row| {
            let cells = row.as_array()?;
            Some(GameRow {
                date: parse_game_date(cells.get(date_col)?.as_str()?)?,
                matchup: cells.get(matchup_col)?.as_str()?.to_string(),
                points: cell_u32(cells.get(pts_col)?)?,
                rebounds: cell_u32(cells.get(reb_col)?)?,
                assists: cell_u32(cells.get(ast_col)?)?,
                steals: cell_u32(cells.get(stl_col)?)?,
                blocks: cell_u32(cells.get(blk_col)?)?,
            })
        })
        .collect();

    Ok(games)
}

/// The two endpoints disagree on date format: `playergamelog` returns
/// "APR 09, 2024", `leaguegamefinder` returns "2024-04-09".
fn parse_game_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%b %d, %Y"))
        .ok()
}

fn cell_u32(v: &serde_json::Value) -> Option<u32> {
    v.as_u64()
        .or_else(|| v.as_f64().map(|f| f.max(0.0) as u64))
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(headers: &[&str], rows: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "resource": "test",
            "resultSets": [{
                "name": "Games",
                "headers": headers,
                "rowSet": rows,
            }]
        })
    }

    #[test]
    fn parses_playergamelog_layout() {
        let raw = envelope(
            &[
                "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN", "PTS",
                "REB", "AST", "STL", "BLK",
            ],
            serde_json::json!([
                ["22023", 2544, "001", "APR 09, 2024", "LAL vs. GSW", "W", 36, 33, 11, 9, 2, 1],
                ["22023", 2544, "002", "APR 07, 2024", "LAL @ MIN", "L", 34, 29, 8, 7, 1, 0],
            ]),
        );
        let rows = parse_game_rows(&raw).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].points, 33);
        assert_eq!(rows[0].matchup, "LAL vs. GSW");
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
    }

    #[test]
    fn parses_gamefinder_layout_with_iso_dates() {
        let raw = envelope(
            &[
                "SEASON_ID", "PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION", "GAME_ID",
                "GAME_DATE", "MATCHUP", "WL", "PTS", "REB", "AST", "STL", "BLK",
            ],
            serde_json::json!([
                ["22023", 2544, "LeBron James", "LAL", "003", "2024-03-02", "LAL @ BOS", "W", 28, 7, 11, 1, 2],
            ]),
        );
        let rows = parse_game_rows(&raw).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(rows[0].assists, 11);
    }

    #[test]
    fn skips_rows_with_missing_stats() {
        let raw = envelope(
            &["GAME_DATE", "MATCHUP", "PTS", "REB", "AST", "STL", "BLK"],
            serde_json::json!([
                ["2024-01-01", "LAL vs. BOS", 30, 8, 9, 1, 1],
                ["2024-01-03", "LAL @ DEN", null, 8, 9, 1, 1],
            ]),
        );
        let rows = parse_game_rows(&raw).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].points, 30);
    }

    #[test]
    fn empty_row_set_yields_no_games() {
        let raw = envelope(
            &["GAME_DATE", "MATCHUP", "PTS", "REB", "AST", "STL", "BLK"],
            serde_json::json!([]),
        );
        assert!(parse_game_rows(&raw).unwrap().is_empty());
    }

    #[test]
    fn missing_result_sets_is_an_error() {
        let raw = serde_json::json!({ "resource": "test" });
        assert!(parse_game_rows(&raw).is_err());
    }

    #[test]
    fn missing_column_is_an_error() {
        let raw = envelope(
            &["GAME_DATE", "MATCHUP", "PTS", "REB", "AST"],
            serde_json::json!([]),
        );
        assert!(parse_game_rows(&raw).is_err());
    }
}
