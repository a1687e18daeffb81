pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::openai::OpenAiClient;
pub use adapters::report::{render_console, render_markdown};
pub use adapters::stix::AttackDataset;
pub use adapters::storage::LocalStorage;
pub use config::{CliConfig, ParserKind};
pub use crate::core::{engine::TriageEngine, pipeline::ScenarioPipeline};
pub use utils::error::{Result, TriageError};
