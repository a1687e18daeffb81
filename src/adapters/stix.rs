//! MITRE ATT&CK dataset loading from a STIX 2.0 bundle file.

use crate::domain::model::Technique;
use crate::utils::error::{Result, TriageError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Permissive view of one STIX object. Bundles carry many object types
/// (relationships, intrusion sets, courses of action); everything that is
/// not an `attack-pattern` with a name is skipped during distillation.
#[derive(Debug, Deserialize)]
struct StixObject {
    #[serde(rename = "type")]
    object_type: String,
    id: String,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    revoked: bool,
    #[serde(default, rename = "x_mitre_deprecated")]
    deprecated: bool,
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
    #[serde(default)]
    external_references: Vec<ExternalReference>,
    #[serde(default)]
    kill_chain_phases: Vec<KillChainPhase>,
}

#[derive(Debug, Deserialize)]
struct ExternalReference {
    source_name: String,
    external_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KillChainPhase {
    kill_chain_name: String,
    phase_name: String,
}

#[derive(Debug, Deserialize)]
struct StixBundle {
    objects: Vec<StixObject>,
}

/// The read-only technique knowledge base, loaded once at startup and passed
/// explicitly to whoever needs it.
#[derive(Debug)]
pub struct AttackDataset {
    techniques: Vec<Technique>,
}

impl AttackDataset {
    /// Load the bundle at `path`, keeping attack-pattern objects.
    /// `skip_deprecated` drops entries flagged revoked or deprecated.
    pub fn load(path: impl AsRef<Path>, skip_deprecated: bool) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading ATT&CK dataset from {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let bundle: StixBundle =
            serde_json::from_str(&raw).map_err(|e| TriageError::DatasetError {
                message: format!("{} is not a STIX bundle: {}", path.display(), e),
            })?;

        let techniques: Vec<Technique> = bundle
            .objects
            .into_iter()
            .filter(|obj| obj.object_type == "attack-pattern")
            .filter_map(|obj| match obj.name {
                Some(name) => Some(Technique {
                    external_id: obj
                        .external_references
                        .iter()
                        .find(|r| r.source_name == "mitre-attack")
                        .and_then(|r| r.external_id.clone()),
                    tactics: obj
                        .kill_chain_phases
                        .iter()
                        .filter(|p| p.kill_chain_name == "mitre-attack")
                        .map(|p| p.phase_name.clone())
                        .collect(),
                    id: obj.id,
                    name,
                    description: obj.description,
                    revoked: obj.revoked,
                    deprecated: obj.deprecated,
                    created: obj.created,
                    modified: obj.modified,
                }),
                None => {
                    tracing::warn!(id = %obj.id, "skipping attack-pattern without a name");
                    None
                }
            })
            .filter(|t| !skip_deprecated || (!t.deprecated && !t.revoked))
            .collect();

        if techniques.is_empty() {
            return Err(TriageError::DatasetError {
                message: format!("{} contains no usable techniques", path.display()),
            });
        }

        tracing::info!("Loaded {} techniques", techniques.len());
        Ok(Self { techniques })
    }

    /// Build a dataset directly from technique records. Used by tests and by
    /// anything that sources techniques outside a bundle file.
    pub fn from_techniques(techniques: Vec<Technique>) -> Self {
        Self { techniques }
    }

    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}
