//! Maps GBIF backbone responses onto fixed-width taxon key records.
use crate::error::Result;
use crate::gbif::{BackboneMatch, NameMatcher, SPECIES_RANK};
use indicatif::ProgressBar;
use log::{info, warn};

pub const UNRESOLVED_TAXON_KEY: i64 = -1;
pub const NOT_AVAILABLE: &str = "NA";
pub use crate::gbif::NO_MATCH_TYPE;

pub const OUTPUT_HEADERS: [&str; 9] = [
    "taxon_key_gbif_id",
    "order_name",
    "family_name",
    "genus_name",
    "search_species_name",
    "gbif_species_name",
    "confidence",
    "status",
    "match_type",
];

/// One output row. Every field is always populated, unresolved ones with
/// their sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonKeyRecord {
    pub taxon_key_gbif_id: i64,
    pub order_name: String,
    pub family_name: String,
    pub genus_name: String,
    pub search_species_name: String,
    pub gbif_species_name: String,
    /// Rendered as an empty cell when absent.
    pub confidence: Option<serde_json::Number>,
    pub status: String,
    pub match_type: String,
}

impl TaxonKeyRecord {
    /// The all-sentinel record for `search_species_name`.
    pub fn unresolved(search_species_name: &str) -> Self {
        Self {
            taxon_key_gbif_id: UNRESOLVED_TAXON_KEY,
            order_name: NOT_AVAILABLE.to_string(),
            family_name: NOT_AVAILABLE.to_string(),
            genus_name: NOT_AVAILABLE.to_string(),
            search_species_name: search_species_name.to_string(),
            gbif_species_name: NOT_AVAILABLE.to_string(),
            confidence: None,
            status: NOT_AVAILABLE.to_string(),
            match_type: NO_MATCH_TYPE.to_string(),
        }
    }

    /// Cells in `OUTPUT_HEADERS` order.
    pub fn to_row(&self) -> [String; 9] {
        [
            self.taxon_key_gbif_id.to_string(),
            self.order_name.clone(),
            self.family_name.clone(),
            self.genus_name.clone(),
            self.search_species_name.clone(),
            self.gbif_species_name.clone(),
            self.confidence
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            self.status.clone(),
            self.match_type.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NoMatch,
    NoRank,
    WrongRank(String),
}

impl MatchOutcome {
    pub fn classify(response: &BackboneMatch) -> Self {
        match response.rank.as_deref() {
            None => MatchOutcome::NoRank,
            Some(rank) if rank != SPECIES_RANK => MatchOutcome::WrongRank(rank.to_string()),
            Some(_) if response.match_type.is_none() || response.is_no_match() => {
                MatchOutcome::NoMatch
            }
            Some(_) => MatchOutcome::Matched,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: TaxonKeyRecord,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub matched: usize,
    pub no_match: usize,
    pub no_rank: usize,
    pub wrong_rank: usize,
}

impl ResolutionSummary {
    fn record(&mut self, outcome: &MatchOutcome) {
        match outcome {
            MatchOutcome::Matched => self.matched += 1,
            MatchOutcome::NoMatch => self.no_match += 1,
            MatchOutcome::NoRank => self.no_rank += 1,
            MatchOutcome::WrongRank(_) => self.wrong_rank += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.no_match + self.no_rank + self.wrong_rank
    }
}

/// Builds the output record for `name` from a backbone response.
///
/// Only a species-rank `NONE` answer, or a rankless `NONE` answer (how GBIF
/// usually answers an unknown name), carries its confidence through. Any
/// other non-match is the all-sentinel record.
pub fn record_from_match(name: &str, response: &BackboneMatch, outcome: &MatchOutcome) -> TaxonKeyRecord {
    let mut record = TaxonKeyRecord::unresolved(name);

    match outcome {
        MatchOutcome::Matched => {}
        MatchOutcome::NoMatch => {
            record.confidence = response.confidence.clone();
            return record;
        }
        MatchOutcome::NoRank if response.is_no_match() => {
            record.confidence = response.confidence.clone();
            return record;
        }
        MatchOutcome::NoRank | MatchOutcome::WrongRank(_) => return record,
    }

    record.taxon_key_gbif_id = match response.usage_key {
        Some(key) => key,
        None => {
            warn!("GBIF match for {} has no usageKey", name);
            UNRESOLVED_TAXON_KEY
        }
    };
    record.order_name = field_or_sentinel(name, "order", &response.order, NOT_AVAILABLE);
    record.family_name = field_or_sentinel(name, "family", &response.family, NOT_AVAILABLE);
    record.genus_name = field_or_sentinel(name, "genus", &response.genus, NOT_AVAILABLE);
    record.gbif_species_name = field_or_sentinel(name, "species", &response.species, NOT_AVAILABLE);
    record.confidence = response.confidence.clone();
    record.status = field_or_sentinel(name, "status", &response.status, NOT_AVAILABLE);
    // Matched implies a match type is present.
    record.match_type = response
        .match_type
        .clone()
        .unwrap_or_else(|| NO_MATCH_TYPE.to_string());
    record
}

fn field_or_sentinel(name: &str, field: &str, value: &Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            warn!("GBIF match for {} has no {}", name, field);
            sentinel.to_string()
        }
    }
}

/// Runs one strict, species-rank lookup for `name` and normalizes the answer.
///
/// Rank notices are logged with the progress bar suspended so they do not
/// tear through it.
pub async fn resolve_name<M>(matcher: &M, name: &str, progress: &ProgressBar) -> Result<Resolution>
where
    M: NameMatcher + ?Sized,
{
    let response = matcher.match_name(name, true, SPECIES_RANK).await?;
    let outcome = MatchOutcome::classify(&response);

    match &outcome {
        MatchOutcome::NoRank => progress.suspend(|| info!("{} returns no rank", name)),
        MatchOutcome::WrongRank(rank) => progress.suspend(|| {
            info!("{} returns rank={} instead of {}", name, rank, SPECIES_RANK)
        }),
        _ => {}
    }

    let record = record_from_match(name, &response, &outcome);
    Ok(Resolution { record, outcome })
}

/// Resolves every name in order, one request at a time.
///
/// Record `i` always belongs to `names[i]`. The first lookup error aborts the
/// whole batch.
pub async fn resolve_names<M>(
    matcher: &M,
    names: &[String],
    progress: &ProgressBar,
) -> Result<(Vec<TaxonKeyRecord>, ResolutionSummary)>
where
    M: NameMatcher + ?Sized,
{
    let mut records = Vec::with_capacity(names.len());
    let mut summary = ResolutionSummary::default();

    for name in names {
        progress.set_message(name.clone());
        let resolution = resolve_name(matcher, name, progress).await?;
        summary.record(&resolution.outcome);
        records.push(resolution.record);
        progress.inc(1);
    }

    Ok((records, summary))
}
