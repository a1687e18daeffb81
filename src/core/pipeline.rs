use crate::adapters::stix::AttackDataset;
use crate::core::chain::ChainGenerator;
use crate::core::extractor::KeywordExtractor;
use crate::core::matcher::search_for_matches;
use crate::core::scorer::score_matches;
use crate::domain::model::{RankedFinding, ScoredMatch};
use crate::domain::ports::{CompletionClient, KeywordParser, Pipeline};
use crate::utils::error::Result;
use std::sync::Arc;

/// The concrete triage pipeline: extract keywords, rank dataset matches,
/// enrich the survivors with generated chain narratives.
pub struct ScenarioPipeline<C: CompletionClient> {
    dataset: Arc<AttackDataset>,
    extractor: KeywordExtractor<C>,
    generator: ChainGenerator<C>,
    top_matches: usize,
}

impl<C: CompletionClient> ScenarioPipeline<C> {
    pub fn new(
        dataset: Arc<AttackDataset>,
        client: Arc<C>,
        parser: Box<dyn KeywordParser>,
        top_matches: usize,
    ) -> Self {
        Self {
            dataset,
            extractor: KeywordExtractor::new(Arc::clone(&client), parser),
            generator: ChainGenerator::new(client),
            top_matches,
        }
    }
}

#[async_trait::async_trait]
impl<C: CompletionClient> Pipeline for ScenarioPipeline<C> {
    async fn extract(&self, scenario: &str) -> Result<Vec<String>> {
        Ok(self.extractor.extract(scenario).await)
    }

    async fn rank(&self, keywords: &[String]) -> Result<Vec<ScoredMatch>> {
        let matches = search_for_matches(self.dataset.techniques(), keywords);
        tracing::debug!(
            "Matched {} of {} techniques",
            matches.len(),
            self.dataset.techniques().len()
        );

        let mut scored = score_matches(&matches, keywords);
        // Stable sort: ties keep dataset order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.top_matches);
        Ok(scored)
    }

    async fn enrich(&self, ranked: Vec<ScoredMatch>) -> Result<Vec<RankedFinding>> {
        let mut findings = Vec::with_capacity(ranked.len());

        for scored in ranked {
            let chain = self.generator.generate(&scored.technique).await;
            findings.push(RankedFinding {
                technique: scored.technique,
                score: scored.score,
                chain,
            });
        }

        Ok(findings)
    }
}
