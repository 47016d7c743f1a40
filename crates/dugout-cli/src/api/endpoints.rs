//! API endpoint URL builders
//!
//! Helper functions to construct API endpoint URLs.

use dugout_common::stats::TrendMetric;

/// Which CSV import endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Roster,
    Stats,
}

pub fn players_url(base_url: &str) -> String {
    format!("{}/players", base_url)
}

pub fn player_url(base_url: &str, id: i32) -> String {
    format!("{}/players/{}", base_url, id)
}

/// Build career line URL
pub fn player_career_url(base_url: &str, id: i32) -> String {
    format!("{}/players/{}/stats", base_url, id)
}

pub fn games_url(base_url: &str) -> String {
    format!("{}/games", base_url)
}

pub fn game_url(base_url: &str, id: i32) -> String {
    format!("{}/games/{}", base_url, id)
}

pub fn stats_url(base_url: &str) -> String {
    format!("{}/stats", base_url)
}

pub fn stat_url(base_url: &str, id: i32) -> String {
    format!("{}/stats/{}", base_url, id)
}

pub fn leaderboard_url(base_url: &str) -> String {
    format!("{}/stats/leaderboard", base_url)
}

/// Build all-players trend URL for a metric
pub fn trend_url(base_url: &str, metric: TrendMetric) -> String {
    format!("{}/stats/all_players/{}", base_url, metric.path_segment())
}

/// Build single-player batting average trend URL
pub fn player_trend_url(base_url: &str, player_id: i32) -> String {
    format!("{}/stats/player/{}/games", base_url, player_id)
}

pub fn upload_url(base_url: &str, kind: UploadKind) -> String {
    match kind {
        UploadKind::Roster => format!("{}/upload-roster", base_url),
        UploadKind::Stats => format!("{}/upload-stats", base_url),
    }
}

/// Build health check URL
pub fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn test_player_urls() {
        assert_eq!(players_url(BASE), "http://localhost:3000/players");
        assert_eq!(player_url(BASE, 7), "http://localhost:3000/players/7");
        assert_eq!(player_career_url(BASE, 7), "http://localhost:3000/players/7/stats");
    }

    #[test]
    fn test_trend_urls() {
        assert_eq!(
            trend_url(BASE, TrendMetric::BattingAverage),
            "http://localhost:3000/stats/all_players/games"
        );
        assert_eq!(
            trend_url(BASE, TrendMetric::HitByPitch),
            "http://localhost:3000/stats/all_players/hbp"
        );
        assert_eq!(player_trend_url(BASE, 2), "http://localhost:3000/stats/player/2/games");
    }

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url(BASE, UploadKind::Roster), "http://localhost:3000/upload-roster");
        assert_eq!(upload_url(BASE, UploadKind::Stats), "http://localhost:3000/upload-stats");
    }

    #[test]
    fn test_health_url() {
        assert_eq!(health_url(BASE), "http://localhost:3000/health");
    }
}
