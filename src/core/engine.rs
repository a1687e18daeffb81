use crate::domain::model::TriageReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the pipeline stages in order and assembles the report.
pub struct TriageEngine<P: Pipeline> {
    pipeline: P,
    limit: usize,
}

impl<P: Pipeline> TriageEngine<P> {
    pub fn new(pipeline: P, limit: usize) -> Self {
        Self { pipeline, limit }
    }

    pub async fn run(&self, scenario: &str) -> Result<TriageReport> {
        tracing::info!("Extracting keywords...");
        let keywords = self.pipeline.extract(scenario).await?;
        tracing::info!("Extracted {} keywords", keywords.len());

        tracing::info!("Ranking dataset matches...");
        let ranked = self.pipeline.rank(&keywords).await?;
        tracing::info!("Kept top {} of the scored matches", ranked.len());

        tracing::info!("Generating TTP chains...");
        let findings = self.pipeline.enrich(ranked).await?;

        Ok(TriageReport {
            scenario: scenario.to_string(),
            keywords,
            limit: self.limit,
            findings,
        })
    }
}
