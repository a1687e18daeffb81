use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ATT&CK technique as distilled from a STIX `attack-pattern` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    /// STIX object id, e.g. "attack-pattern--0042a9f5-...".
    pub id: String,
    /// ATT&CK external id, e.g. "T1566", when the bundle carries one.
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    /// Tactic (kill-chain phase) names from the mitre-attack chain.
    pub tactics: Vec<String>,
    pub revoked: bool,
    pub deprecated: bool,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// A matched technique paired with its keyword-overlap score.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub technique: Technique,
    pub score: usize,
}

/// A scored match enriched with the generated chain narrative.
#[derive(Debug, Clone)]
pub struct RankedFinding {
    pub technique: Technique,
    pub score: usize,
    pub chain: String,
}

/// The complete result of one triage run.
#[derive(Debug, Clone)]
pub struct TriageReport {
    pub scenario: String,
    pub keywords: Vec<String>,
    /// Configured cap on the number of findings (the "top N").
    pub limit: usize,
    pub findings: Vec<RankedFinding>,
}
