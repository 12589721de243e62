//! GBIF backbone name matching.
pub mod client;
#[cfg(test)]
pub mod stub;

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

pub use client::GbifClient;

pub const DEFAULT_GBIF_API_URL: &str = "https://api.gbif.org/v1";
pub const SPECIES_RANK: &str = "SPECIES";
pub const NO_MATCH_TYPE: &str = "NONE";

/// Body of a `/species/match` response. GBIF omits most fields when nothing
/// matched, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackboneMatch {
    pub usage_key: Option<i64>,
    pub rank: Option<String>,
    pub match_type: Option<String>,
    pub confidence: Option<serde_json::Number>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub status: Option<String>,
}

impl BackboneMatch {
    pub fn is_no_match(&self) -> bool {
        self.match_type.as_deref() == Some(NO_MATCH_TYPE)
    }
}

/// Something that can match a free-text name against the taxonomy backbone.
#[async_trait]
pub trait NameMatcher: Send + Sync {
    async fn match_name(&self, name: &str, strict: bool, rank: &str) -> Result<BackboneMatch>;
}
