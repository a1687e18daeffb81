use crate::config::CliConfig;
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Values present in the file override the
/// corresponding CLI values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub model: Option<ModelSection>,
    pub dataset: Option<DatasetSection>,
    pub report: Option<ReportSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelSection {
    pub name: Option<String>,
    pub api_base: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSection {
    pub path: Option<String>,
    pub skip_deprecated: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSection {
    pub top_matches: Option<usize>,
    pub output_path: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(model) = &self.model {
            if let Some(name) = &model.name {
                config.model = name.clone();
            }
            if let Some(api_base) = &model.api_base {
                config.api_base = api_base.clone();
            }
            if let Some(max_tokens) = model.max_tokens {
                config.max_tokens = max_tokens;
            }
            if let Some(temperature) = model.temperature {
                config.temperature = temperature;
            }
            if let Some(timeout) = model.request_timeout_secs {
                config.request_timeout_secs = timeout;
            }
        }

        if let Some(dataset) = &self.dataset {
            if let Some(path) = &dataset.path {
                config.dataset_path = path.clone();
            }
            if let Some(skip) = dataset.skip_deprecated {
                config.skip_deprecated = skip;
            }
        }

        if let Some(report) = &self.report {
            if let Some(top_matches) = report.top_matches {
                config.top_matches = top_matches;
            }
            if let Some(output_path) = &report.output_path {
                config.output_path = Some(output_path.clone());
            }
        }
    }
}
