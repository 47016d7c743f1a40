//! HTTP API client for the Dugout server
//!
//! Every non-success response is turned into [`CliError::Api`] carrying the
//! server's `{"error"}` message, or the raw body when it is not JSON.

use crate::api::{endpoints, types::*, UploadKind};
use crate::config::Config;
use crate::error::{CliError, Result};
use dugout_common::stats::TrendMetric;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// API client for the Dugout server
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check server health
    pub async fn health_check(&self) -> Result<bool> {
        let url = endpoints::health_url(&self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    // ------------------------------------------------------------------------
    // Players
    // ------------------------------------------------------------------------

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        self.get_json(&endpoints::players_url(&self.base_url)).await
    }

    pub async fn get_player(&self, id: i32) -> Result<Player> {
        self.get_json(&endpoints::player_url(&self.base_url, id)).await
    }

    pub async fn player_career(&self, id: i32) -> Result<CareerLine> {
        self.get_json(&endpoints::player_career_url(&self.base_url, id)).await
    }

    pub async fn add_player(&self, player: &NewPlayer) -> Result<MessageResponse<Player>> {
        let request = self.client.post(endpoints::players_url(&self.base_url)).json(player);
        self.send(request).await
    }

    pub async fn remove_player(&self, id: i32) -> Result<MessageResponse<Player>> {
        let request = self.client.delete(endpoints::player_url(&self.base_url, id));
        self.send(request).await
    }

    // ------------------------------------------------------------------------
    // Games
    // ------------------------------------------------------------------------

    pub async fn list_games(&self) -> Result<Vec<Game>> {
        self.get_json(&endpoints::games_url(&self.base_url)).await
    }

    pub async fn add_game(&self, game: &NewGame) -> Result<MessageResponse<Game>> {
        let request = self.client.post(endpoints::games_url(&self.base_url)).json(game);
        self.send(request).await
    }

    pub async fn remove_game(&self, id: i32) -> Result<MessageResponse<Game>> {
        let request = self.client.delete(endpoints::game_url(&self.base_url, id));
        self.send(request).await
    }

    // ------------------------------------------------------------------------
    // Stats
    // ------------------------------------------------------------------------

    /// `GET /stats` with the given filters; the server returns every match
    pub async fn list_stats(&self, filters: &StatFilters) -> Result<Vec<StatListItem>> {
        let request = self.client.get(endpoints::stats_url(&self.base_url)).query(filters);
        self.send(request).await
    }

    pub async fn record_stat(&self, stat: &NewStat) -> Result<MessageResponse<Stat>> {
        let request = self.client.post(endpoints::stats_url(&self.base_url)).json(stat);
        self.send(request).await
    }

    pub async fn remove_stat(&self, id: i32) -> Result<MessageResponse<Stat>> {
        let request = self.client.delete(endpoints::stat_url(&self.base_url, id));
        self.send(request).await
    }

    // ------------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------------

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_json(&endpoints::leaderboard_url(&self.base_url)).await
    }

    pub async fn trend(&self, metric: TrendMetric) -> Result<Vec<TrendRow>> {
        self.get_json(&endpoints::trend_url(&self.base_url, metric)).await
    }

    /// Batting average per game date for one player
    pub async fn player_trend(&self, player_id: i32) -> Result<Vec<TrendRow>> {
        self.get_json(&endpoints::player_trend_url(&self.base_url, player_id)).await
    }

    // ------------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------------

    /// POST a CSV file as the multipart field `file`
    pub async fn upload<T: DeserializeOwned>(
        &self,
        kind: UploadKind,
        file_name: String,
        content: Vec<u8>,
    ) -> Result<T> {
        let part = multipart::Part::bytes(content)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let request = self.client.post(endpoints::upload_url(&self.base_url, kind)).multipart(form);
        self.send(request).await
    }

    // ------------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send(self.client.get(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "Server responded");
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }

    let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
        Ok(body) => body.error,
        Err(_) if bytes.is_empty() => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
    };

    Err(CliError::api(status.as_u16(), message))
}
