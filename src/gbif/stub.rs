//! Canned `NameMatcher` for tests.
use crate::error::{CrateError, Result};
use crate::gbif::{BackboneMatch, NameMatcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

// Responses keyed by name; unknown names fail like a 503.
#[derive(Default)]
pub struct StubMatcher {
    pub responses: HashMap<String, BackboneMatch>,
    pub calls: Mutex<Vec<(String, bool, String)>>,
}

impl StubMatcher {
    pub fn with(mut self, name: &str, response: BackboneMatch) -> Self {
        self.responses.insert(name.to_string(), response);
        self
    }
}

#[async_trait]
impl NameMatcher for StubMatcher {
    async fn match_name(&self, name: &str, strict: bool, rank: &str) -> Result<BackboneMatch> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), strict, rank.to_string()));
        self.responses
            .get(name)
            .cloned()
            .ok_or_else(|| CrateError::ApiStatusError {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                name: name.to_string(),
            })
    }
}

pub fn number(value: i64) -> Option<serde_json::Number> {
    Some(serde_json::Number::from(value))
}

pub fn quercus_robur() -> BackboneMatch {
    BackboneMatch {
        usage_key: Some(2878688),
        rank: Some("SPECIES".to_string()),
        match_type: Some("EXACT".to_string()),
        confidence: number(98),
        order: Some("Fagales".to_string()),
        family: Some("Fagaceae".to_string()),
        genus: Some("Quercus".to_string()),
        species: Some("Quercus robur".to_string()),
        status: Some("ACCEPTED".to_string()),
    }
}

pub fn no_match(confidence: i64) -> BackboneMatch {
    BackboneMatch {
        match_type: Some("NONE".to_string()),
        confidence: number(confidence),
        ..Default::default()
    }
}
