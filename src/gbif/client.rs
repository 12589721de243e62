use crate::error::{CrateError, Result};
use crate::gbif::{BackboneMatch, NameMatcher};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("gbif-taxon-keys/", env!("CARGO_PKG_VERSION"), " reqwest/0.12");

// reqwest-backed client for the GBIF species API.
#[derive(Debug, Clone)]
pub struct GbifClient {
    client: Client,
    base_url: String,
}

impl GbifClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(CrateError::ApiRequestError)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn match_url(&self) -> String {
        format!("{}/species/match", self.base_url)
    }
}

#[async_trait]
impl NameMatcher for GbifClient {
    async fn match_name(&self, name: &str, strict: bool, rank: &str) -> Result<BackboneMatch> {
        debug!("Querying GBIF backbone for {}", name);
        let strict = if strict { "true" } else { "false" };
        let response = self
            .client
            .get(self.match_url())
            .query(&[
                ("name", name),
                ("strict", strict),
                ("rank", rank),
                ("verbose", "false"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(CrateError::ApiRequestError)?;

        if !response.status().is_success() {
            return Err(CrateError::ApiStatusError {
                status: response.status(),
                name: name.to_string(),
            });
        }

        response
            .json::<BackboneMatch>()
            .await
            .map_err(CrateError::ApiJsonDecodeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbif::{DEFAULT_GBIF_API_URL, SPECIES_RANK};
    use tokio;

    #[test]
    fn test_match_url_trims_trailing_slash() {
        let client = GbifClient::new("http://localhost:9999/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.match_url(), "http://localhost:9999/v1/species/match");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_error() {
        // Nothing listens on the local discard port.
        let client = GbifClient::new("http://127.0.0.1:9/v1", Duration::from_secs(2)).unwrap();
        let result = client.match_name("Quercus robur", true, SPECIES_RANK).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore] // Ignored by default to avoid hitting live GBIF
    async fn test_match_quercus_robur_live() {
        let client = GbifClient::new(DEFAULT_GBIF_API_URL, Duration::from_secs(30)).unwrap();
        let matched = client
            .match_name("Quercus robur", true, SPECIES_RANK)
            .await
            .unwrap();
        assert_eq!(matched.usage_key, Some(2878688));
        assert_eq!(matched.rank.as_deref(), Some("SPECIES"));
        assert_eq!(matched.family.as_deref(), Some("Fagaceae"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_match_nonsense_live() {
        let client = GbifClient::new(DEFAULT_GBIF_API_URL, Duration::from_secs(30)).unwrap();
        let matched = client
            .match_name("Xyz unknownus", true, SPECIES_RANK)
            .await
            .unwrap();
        assert!(matched.is_no_match());
    }
}
