use clap::Parser;

/// NBA player points over/under predictor
#[derive(Parser, Debug, Clone)]
#[command(name = "hoopsight", version, about)]
pub struct Config {
    /// Player full name (skips the interactive prompt when set)
    #[arg(long, env = "HOOPSIGHT_PLAYER")]
    pub player: Option<String>,

    /// Target point total the player must exceed
    #[arg(long, env = "HOOPSIGHT_TARGET")]
    pub target: Option<u32>,

    /// Opponent team 3-letter abbreviation (e.g. BOS)
    #[arg(long, env = "HOOPSIGHT_OPPONENT")]
    pub opponent: Option<String>,

    /// Venue for the upcoming game: "home" or "away"
    #[arg(long, env = "HOOPSIGHT_VENUE")]
    pub venue: Option<String>,

    /// NBA stats API base URL
    #[arg(
        long,
        env = "NBA_API_URL",
        default_value = "https://stats.nba.com/stats"
    )]
    pub nba_api_url: String,

    /// Prior seasons to include in the historical game log (comma separated)
    #[arg(
        long,
        env = "SEASONS",
        value_delimiter = ',',
        default_value = "2021-22,2022-23,2023-24"
    )]
    pub seasons: Vec<String>,

    /// Season used for the recent-form window
    #[arg(long, env = "CURRENT_SEASON", default_value = "2024-25")]
    pub current_season: String,

    /// Number of most recent games to include
    #[arg(long, env = "RECENT_GAMES", default_value = "5")]
    pub recent_games: usize,

    /// Number of most recent head-to-head matchups to include
    #[arg(long, env = "MATCHUP_GAMES", default_value = "3")]
    pub matchup_games: usize,

    /// Number of cross-validation folds
    #[arg(long, env = "CV_FOLDS", default_value = "5")]
    pub cv_folds: usize,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.seasons.is_empty() {
            anyhow::bail!("at least one prior season is required");
        }
        if self.recent_games == 0 {
            anyhow::bail!("recent_games must be at least 1");
        }
        if self.cv_folds < 2 {
            anyhow::bail!("cv_folds must be at least 2");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be positive");
        }
        if let Some(v) = &self.venue {
            if v != "home" && v != "away" {
                anyhow::bail!("venue must be 'home' or 'away', got '{}'", v);
            }
        }
        if let Some(o) = &self.opponent {
            if o.len() != 3 {
                anyhow::bail!("opponent must be a 3-letter abbreviation, got '{}'", o);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config::parse_from(["hoopsight"])
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn default_seasons_are_the_three_prior_seasons() {
        let cfg = base_config();
        assert_eq!(cfg.seasons, vec!["2021-22", "2022-23", "2023-24"]);
        assert_eq!(cfg.current_season, "2024-25");
    }

    #[test]
    fn rejects_single_fold() {
        let cfg = Config::parse_from(["hoopsight", "--cv-folds", "1"]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_venue() {
        let cfg = Config::parse_from(["hoopsight", "--venue", "neutral"]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_long_opponent() {
        let cfg = Config::parse_from(["hoopsight", "--opponent", "BOSTON"]);
        assert!(cfg.validate().is_err());
    }
}
