use crate::domain::model::{RankedFinding, ScoredMatch};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One chat-style completion round-trip. Implementations own the transport
/// and the fixed request parameters (model, max_tokens, temperature).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Turns raw model output into keyword strings. The model's answer is an
/// untrusted, loosely structured string; parsing stays behind this seam so
/// the split heuristic can be swapped without touching the pipeline.
pub trait KeywordParser: Send + Sync {
    fn parse(&self, raw: &str) -> Vec<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn model(&self) -> &str;
    fn max_tokens(&self) -> u32;
    fn temperature(&self) -> f32;
    fn top_matches(&self) -> usize;
    fn dataset_path(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn skip_deprecated(&self) -> bool;
}

pub trait ReportSink: Send + Sync {
    fn write_report(
        &self,
        filename: &str,
        contents: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Extract keywords from the scenario description. Remote failures are
    /// absorbed here: the stage logs and yields an empty list.
    async fn extract(&self, scenario: &str) -> Result<Vec<String>>;
    /// Match the dataset, score, sort descending and truncate to the top N.
    async fn rank(&self, keywords: &[String]) -> Result<Vec<ScoredMatch>>;
    /// Generate a chain narrative per surviving match.
    async fn enrich(&self, ranked: Vec<ScoredMatch>) -> Result<Vec<RankedFinding>>;
}
