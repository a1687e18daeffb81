//! The two fixed prompt templates sent to the completion service.

use crate::domain::model::Technique;

pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are a cybersecurity professional with more than 25 years of experience.";

pub const CHAIN_SYSTEM_PROMPT: &str =
    "You are a cybersecurity professional with expertise in MITRE ATT&CK techniques.";

/// Instruction asking the model to pull MITRE ATT&CK terms out of a free-text
/// scenario, expanding thin descriptions before extracting.
pub fn build_extraction_prompt(description: &str) -> String {
    format!(
        "Given the cybersecurity scenario description: '{}', identify and list the key terms, \
         techniques, or technologies relevant to MITRE ATT&CK. Extract TTPs from the scenario. \
         If the description is too basic, expand upon it with additional details, applicable \
         campaign, or attack types based on dataset knowledge. Then, extract the TTPs from the \
         revised description.",
        description
    )
}

/// Instruction asking the model to demonstrate one technique as an example
/// scenario with a TTP chain.
pub fn build_chain_prompt(technique: &Technique) -> String {
    format!(
        "Given the MITRE ATT&CK technique '{}' and its description '{}', generate an example \
         scenario and TTP chain demonstrating its use.",
        technique.name,
        technique.description.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technique(name: &str, description: Option<&str>) -> Technique {
        Technique {
            id: format!("attack-pattern--{}", name.to_lowercase()),
            external_id: None,
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            tactics: vec![],
            revoked: false,
            deprecated: false,
            created: None,
            modified: None,
        }
    }

    #[test]
    fn test_extraction_prompt_embeds_description() {
        let prompt = build_extraction_prompt("ransomware hit a file server");
        assert!(prompt.contains("'ransomware hit a file server'"));
        assert!(prompt.contains("identify and list the key terms"));
        assert!(prompt.contains("Extract TTPs from the scenario."));
    }

    #[test]
    fn test_chain_prompt_embeds_name_and_description() {
        let t = technique("Phishing", Some("Adversaries may send phishing messages."));
        let prompt = build_chain_prompt(&t);
        assert!(prompt.contains("'Phishing'"));
        assert!(prompt.contains("'Adversaries may send phishing messages.'"));
        assert!(prompt.contains("generate an example scenario and TTP chain"));
    }

    #[test]
    fn test_chain_prompt_without_description() {
        let t = technique("Phishing", None);
        let prompt = build_chain_prompt(&t);
        assert!(prompt.contains("its description ''"));
    }
}
