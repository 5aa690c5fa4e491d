use async_trait::async_trait;
use rift_balance::lookup::{Account, LeagueEntry, LookupError, RankedApi};
use rift_balance::player::RiotId;
use serde::de::DeserializeOwned;


// HTTP client for the Riot account-v1 and league-v4 endpoints. Accounts are
// region-wide (americas), league entries are per platform (na1).
pub struct RiotClient {
    http: reqwest::Client,
    api_key: String,
    account_host: String,
    platform_host: String,
}

impl RiotClient {
    pub const DEFAULT_ACCOUNT_HOST: &'static str = "https://americas.api.riotgames.com";
    pub const DEFAULT_PLATFORM_HOST: &'static str = "https://na1.api.riotgames.com";

    pub fn new(api_key: String) -> Self {
        RiotClient {
            http: reqwest::Client::new(),
            api_key,
            account_host: Self::DEFAULT_ACCOUNT_HOST.to_owned(),
            platform_host: Self::DEFAULT_PLATFORM_HOST.to_owned(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, LookupError> {
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await
            .map_err(|err| LookupError::Failed(err.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !response.status().is_success() {
            return Err(LookupError::Failed(format!("HTTP error! Status: {}", response.status())));
        }
        response.json::<T>().await.map_err(|err| LookupError::Failed(err.to_string()))
    }
}

#[async_trait]
impl RankedApi for RiotClient {
    async fn account_by_riot_id(&self, id: &RiotId) -> Result<Account, LookupError> {
        self.get_json(format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.account_host, id.game_name, id.tag_line
        ))
        .await
    }

    async fn entries_by_puuid(&self, puuid: &str) -> Result<Vec<LeagueEntry>, LookupError> {
        self.get_json(format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_host, puuid
        ))
        .await
    }
}
