pub mod chain;
pub mod engine;
pub mod extractor;
pub mod matcher;
pub mod pipeline;
pub mod prompts;
pub mod scorer;

pub use crate::domain::model::{RankedFinding, ScoredMatch, Technique, TriageReport};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, KeywordParser, Pipeline};
pub use crate::utils::error::Result;
