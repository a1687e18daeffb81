//! Report rendering: the console format and a Markdown variant for saving.

use crate::domain::model::TriageReport;

const SEPARATOR_WIDTH: usize = 50;

/// The console listing: a header line followed by name, summary, generated
/// chain and a dashed rule per finding. Zero findings print only the header.
pub fn render_console(report: &TriageReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Top {} matches from the MITRE ATT&CK dataset:\n",
        report.limit
    ));

    for finding in &report.findings {
        out.push_str(&format!("Name: {}\n", finding.technique.name));
        out.push_str(&format!(
            "Summary: {}\n",
            finding.technique.description.as_deref().unwrap_or_default()
        ));
        out.push_str(&format!("Example Scenario and TTP Chain: {}\n", finding.chain));
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');
    }

    out
}

/// Markdown rendering for `--output-path`.
pub fn render_markdown(report: &TriageReport) -> String {
    let mut out = String::new();

    out.push_str("# Scenario Triage Report\n\n");
    out.push_str(&format!("**Scenario:** {}\n\n", report.scenario));
    out.push_str(&format!(
        "**Extracted keywords:** {}\n\n",
        if report.keywords.is_empty() {
            "(none)".to_string()
        } else {
            report.keywords.join(", ")
        }
    ));

    for (i, finding) in report.findings.iter().enumerate() {
        let label = match finding.technique.external_id.as_deref() {
            Some(external_id) => format!("{} ({})", finding.technique.name, external_id),
            None => finding.technique.name.clone(),
        };
        out.push_str(&format!(
            "## {}. {} - score {}\n\n",
            i + 1,
            label,
            finding.score
        ));
        if !finding.technique.tactics.is_empty() {
            out.push_str(&format!(
                "**Tactics:** {}\n\n",
                finding.technique.tactics.join(", ")
            ));
        }
        if let Some(description) = finding.technique.description.as_deref() {
            out.push_str(description);
            out.push_str("\n\n");
        }
        out.push_str("### Example Scenario and TTP Chain\n\n");
        out.push_str(&finding.chain);
        out.push_str("\n\n");
    }

    if report.findings.is_empty() {
        out.push_str("No techniques matched the extracted keywords.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RankedFinding, Technique};

    fn finding(name: &str, description: Option<&str>, chain: &str) -> RankedFinding {
        RankedFinding {
            technique: Technique {
                id: format!("attack-pattern--{}", name.to_lowercase()),
                external_id: Some("T1566".to_string()),
                name: name.to_string(),
                description: description.map(|d| d.to_string()),
                tactics: vec!["initial-access".to_string()],
                revoked: false,
                deprecated: false,
                created: None,
                modified: None,
            },
            score: 2,
            chain: chain.to_string(),
        }
    }

    fn report(findings: Vec<RankedFinding>) -> TriageReport {
        TriageReport {
            scenario: "phishing scenario".to_string(),
            keywords: vec!["Phishing".to_string()],
            limit: 3,
            findings,
        }
    }

    #[test]
    fn test_console_header_only_when_no_findings() {
        let rendered = render_console(&report(vec![]));
        assert_eq!(rendered, "Top 3 matches from the MITRE ATT&CK dataset:\n");
    }

    #[test]
    fn test_console_finding_layout() {
        let rendered = render_console(&report(vec![finding(
            "Phishing",
            Some("Adversaries may send phishing messages."),
            "An attacker sends a crafted email.",
        )]));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Top 3 matches from the MITRE ATT&CK dataset:");
        assert_eq!(lines[1], "Name: Phishing");
        assert_eq!(lines[2], "Summary: Adversaries may send phishing messages.");
        assert_eq!(
            lines[3],
            "Example Scenario and TTP Chain: An attacker sends a crafted email."
        );
        assert_eq!(lines[4], "-".repeat(50));
    }

    #[test]
    fn test_console_missing_description_renders_empty_summary() {
        let rendered = render_console(&report(vec![finding("Phishing", None, "chain")]));
        assert!(rendered.contains("Summary: \n"));
    }

    #[test]
    fn test_markdown_includes_external_id_and_tactics() {
        let rendered = render_markdown(&report(vec![finding(
            "Phishing",
            Some("Adversaries may send phishing messages."),
            "chain text",
        )]));

        assert!(rendered.contains("# Scenario Triage Report"));
        assert!(rendered.contains("## 1. Phishing (T1566) - score 2"));
        assert!(rendered.contains("**Tactics:** initial-access"));
        assert!(rendered.contains("### Example Scenario and TTP Chain"));
        assert!(rendered.contains("chain text"));
    }

    #[test]
    fn test_markdown_empty_report_notes_no_matches() {
        let rendered = render_markdown(&report(vec![]));
        assert!(rendered.contains("**Extracted keywords:** Phishing"));
        assert!(rendered.contains("No techniques matched"));
    }
}
