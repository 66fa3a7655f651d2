//! Resume analyzer: resume and job description compatibility scoring tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;
mod storage;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter_for;
use processing::analyzer::ResumeAnalyzer;
use std::process;
use storage::{AnalysisStore, JsonFileStore};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            no_store,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());
            println!();

            let mut input_manager =
                InputManager::new(config.input.max_input_bytes).with_cache(config.input.enable_caching);

            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            if resume_text.trim().is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(format!(
                    "No text could be extracted from resume: {}",
                    resume.display()
                )));
            }
            if job_text.trim().is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(format!(
                    "Job description is empty: {}",
                    job.display()
                )));
            }

            let history_path = config.storage.history_path.clone();
            let color_output = config.output.color_output;

            let analyzer = ResumeAnalyzer::new(config)?;
            let result = analyzer.analyze(&resume_text, &job_text)?;

            let formatter = formatter_for(output_format, color_output);
            let rendered = formatter.format_result(&result)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                std::fs::write(&save_path, &rendered)?;
                println!("Report saved to {}", save_path.display());
            }

            if !no_store {
                let filename = resume
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| resume.display().to_string());

                let mut store = JsonFileStore::new(history_path);
                let id = store.store(&filename, &job_text, &result)?;
                info!("Stored analysis record {}", id);
                println!("Saved to history as record {}", id);
            }

            Ok(())
        }

        Commands::History { limit } => {
            let store = JsonFileStore::new(config.storage.history_path.clone());
            let limit = limit.unwrap_or(config.storage.default_list_limit);
            let records = store.list(limit)?;

            if records.is_empty() {
                println!("No stored analyses yet.");
                return Ok(());
            }

            for record in records {
                println!(
                    "#{:<4} {}  {:>6.2}%  {}",
                    record.id,
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.result.overall_score,
                    record.filename
                );
            }
            Ok(())
        }

        Commands::Show { id } => {
            let store = JsonFileStore::new(config.storage.history_path.clone());
            let record = store.get(id)?.ok_or_else(|| {
                ResumeAnalyzerError::Storage(format!("No analysis with id {}", id))
            })?;

            println!("Record #{} — {}", record.id, record.filename);
            println!("Analyzed at: {}", record.created_at.format("%Y-%m-%d %H:%M:%S"));
            println!();

            let formatter = formatter_for(config.output.format, config.output.color_output);
            println!("{}", formatter.format_result(&record.result)?);
            Ok(())
        }

        Commands::Delete { id } => {
            let mut store = JsonFileStore::new(config.storage.history_path.clone());
            if store.delete(id)? {
                println!("Deleted analysis {}", id);
            } else {
                println!("No analysis with id {}", id);
            }
            Ok(())
        }

        Commands::Stats => {
            let store = JsonFileStore::new(config.storage.history_path.clone());
            let stats = store.stats()?;

            println!("Stored analyses: {}", stats.total);
            println!("Average score:   {:.2}", stats.average_score);
            println!("Highest score:   {:.2}", stats.highest_score);
            println!("Lowest score:    {:.2}", stats.lowest_score);
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!(
                        "Failed to serialize config: {}",
                        e
                    ))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}
