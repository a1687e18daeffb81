pub mod file_config;

use crate::core::extractor::{CommaSeparated, ListAware};
use crate::domain::ports::{ConfigProvider, KeywordParser};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_json_path, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParserKind {
    /// Literal ", " split of the model output.
    Simple,
    /// Also splits newlines and strips bullet / numbering markers.
    ListAware,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ttp-triage")]
#[command(about = "Match a cybersecurity scenario against the MITRE ATT&CK dataset")]
pub struct CliConfig {
    /// Path to the ATT&CK STIX bundle.
    #[arg(long, default_value = "enterprise-attack.json")]
    pub dataset_path: String,

    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    #[arg(long, default_value = "gpt-3.5-turbo")]
    pub model: String,

    #[arg(long, default_value = "2048")]
    pub max_tokens: u32,

    #[arg(long, default_value = "0.7")]
    pub temperature: f32,

    /// How many ranked matches to keep and enrich.
    #[arg(long, default_value = "3")]
    pub top_matches: usize,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, value_enum, default_value = "simple")]
    pub parser: ParserKind,

    /// Scenario description; read from stdin when omitted.
    #[arg(long)]
    pub scenario: Option<String>,

    /// Directory to additionally save triage_report.md into.
    #[arg(long)]
    pub output_path: Option<String>,

    /// Drop techniques flagged deprecated or revoked.
    #[arg(long)]
    pub skip_deprecated: bool,

    /// Optional TOML file whose values override these flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn build_parser(&self) -> Box<dyn KeywordParser> {
        match self.parser {
            ParserKind::Simple => Box::new(CommaSeparated),
            ParserKind::ListAware => Box::new(ListAware::new()),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn top_matches(&self) -> usize {
        self.top_matches
    }

    fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn skip_deprecated(&self) -> bool {
        self.skip_deprecated
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_json_path("dataset_path", &self.dataset_path)?;
        validate_positive_number("top_matches", self.top_matches, 1)?;
        validate_positive_number("max_tokens", self.max_tokens as usize, 1)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs as usize, 1)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;
        Ok(())
    }
}
