use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use ttp_triage::config::file_config::FileConfig;
use ttp_triage::domain::ports::ReportSink;
use ttp_triage::utils::{logger, validation::Validate};
use ttp_triage::{
    render_console, render_markdown, AttackDataset, CliConfig, LocalStorage, OpenAiClient,
    ScenarioPipeline, TriageEngine, TriageError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ttp-triage");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match FileConfig::from_file(&path) {
            Ok(file) => file.apply_to(&mut config),
            Err(e) => exit_with_error(&e),
        }
    }

    if let Err(e) = config.validate() {
        exit_with_error(&e);
    }

    // The credential is read here, once, and handed to the client
    // explicitly; the client never inspects the environment itself.
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            let e = TriageError::MissingConfigError {
                field: "OPENAI_API_KEY".to_string(),
            };
            exit_with_error(&e);
        }
    };

    let dataset = match AttackDataset::load(&config.dataset_path, config.skip_deprecated) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => exit_with_error(&e),
    };

    let scenario = match config.scenario.clone() {
        Some(scenario) => scenario,
        None => read_scenario_from_stdin()?,
    };

    let client = match OpenAiClient::new(api_key, &config) {
        Ok(client) => Arc::new(client),
        Err(e) => exit_with_error(&e),
    };

    let parser = config.build_parser();
    let pipeline = ScenarioPipeline::new(dataset, client, parser, config.top_matches);
    let engine = TriageEngine::new(pipeline, config.top_matches);

    match engine.run(&scenario).await {
        Ok(report) => {
            print!("{}", render_console(&report));

            if let Some(output_path) = &config.output_path {
                let storage = LocalStorage::new(output_path.clone());
                match storage
                    .write_report("triage_report.md", &render_markdown(&report))
                    .await
                {
                    Ok(saved) => tracing::info!("Report saved to: {}", saved),
                    Err(e) => tracing::error!("Failed to save report: {}", e),
                }
            }
        }
        Err(e) => exit_with_error(&e),
    }

    Ok(())
}

fn read_scenario_from_stdin() -> std::io::Result<String> {
    print!("Enter your scenario description: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn exit_with_error(e: &TriageError) -> ! {
    tracing::error!(
        "ttp-triage failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ttp_triage::utils::error::ErrorSeverity::Low => 0,
        ttp_triage::utils::error::ErrorSeverity::Medium => 2,
        ttp_triage::utils::error::ErrorSeverity::High => 1,
        ttp_triage::utils::error::ErrorSeverity::Critical => 3,
    };

    std::process::exit(exit_code);
}
