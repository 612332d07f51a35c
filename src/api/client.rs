use crate::error::ClashError;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use super::endpoints::{self, build_path};
use super::executor::execute;
use super::params::QueryParams;
use super::transport::{Transport, UreqTransport};

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Authenticated client for the Clash of Clans API. Every method returns the
/// decoded JSON body exactly as the service sent it.
pub struct Client<T: Transport = UreqTransport> {
    token: String,
    timeout: u64,
    headers: Vec<(&'static str, String)>,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_timeout(token, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(token: impl Into<String>, timeout: u64) -> Self {
        Self::with_transport(token, timeout, UreqTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(token: impl Into<String>, timeout: u64, transport: T) -> Self {
        let token = token.into();
        let headers = vec![
            ("authorization", format!("Bearer {}", token)),
            ("Accept", "application/json".to_string()),
        ];
        Client {
            token,
            timeout,
            headers,
            transport,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(
        &self,
        template: &str,
        path_params: &[&str],
        query: &QueryParams,
    ) -> Result<Value, ClashError> {
        let path = build_path(template, path_params);
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        execute(
            &self.transport,
            &headers,
            Duration::from_secs(self.timeout),
            &path,
            query,
        )
    }

    // At least one filter is required; `name` needs 3+ characters.
    pub fn clans(&self, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLANS, &[], query)
    }

    pub fn clan_information(&self, clan_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLAN, &[clan_tag], query)
    }

    pub fn clan_members(&self, clan_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLAN_MEMBERS, &[clan_tag], query)
    }

    pub fn clan_war_log(&self, clan_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLAN_WAR_LOG, &[clan_tag], query)
    }

    pub fn clan_current_war(&self, clan_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLAN_CURRENT_WAR, &[clan_tag], query)
    }

    pub fn clan_league_group(&self, clan_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::CLAN_LEAGUE_GROUP, &[clan_tag], query)
    }

    pub fn war_league(&self, war_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::WAR_LEAGUE, &[war_tag], query)
    }

    pub fn player(&self, player_tag: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::PLAYER, &[player_tag], query)
    }

    pub fn leagues(&self, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LEAGUES, &[], query)
    }

    pub fn league_information(&self, league_id: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LEAGUE, &[league_id], query)
    }

    /// Season information only exists for Legend League.
    pub fn league_seasons(&self, league_id: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LEAGUE_SEASONS, &[league_id], query)
    }

    pub fn league_season_rankings(
        &self,
        league_id: &str,
        season_id: &str,
        query: &QueryParams,
    ) -> Result<Value, ClashError> {
        self.request(endpoints::LEAGUE_SEASON_RANKINGS, &[league_id, season_id], query)
    }

    pub fn locations(&self, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATIONS, &[], query)
    }

    pub fn location_information(&self, location_id: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATION, &[location_id], query)
    }

    pub fn location_clan_rankings(&self, location_id: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATION_CLAN_RANKINGS, &[location_id], query)
    }

    pub fn location_player_rankings(&self, location_id: &str, query: &QueryParams) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATION_PLAYER_RANKINGS, &[location_id], query)
    }

    pub fn location_clan_versus_rankings(
        &self,
        location_id: &str,
        query: &QueryParams,
    ) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATION_CLAN_VERSUS_RANKINGS, &[location_id], query)
    }

    pub fn location_player_versus_rankings(
        &self,
        location_id: &str,
        query: &QueryParams,
    ) -> Result<Value, ClashError> {
        self.request(endpoints::LOCATION_PLAYER_VERSUS_RANKINGS, &[location_id], query)
    }
}

impl<T: Transport> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
