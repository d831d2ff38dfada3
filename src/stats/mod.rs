pub mod nba;
pub mod provider;
pub mod types;

pub use nba::NbaStats;
pub use provider::StatsProvider;
pub use types::GameRow;
