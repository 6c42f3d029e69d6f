use anyhow::Context;
use clap::Parser;
use curriculum_etl::core::export::CurriculumExporter;
use curriculum_etl::utils::error::ErrorSeverity;
use curriculum_etl::utils::monitor::ExtractionMonitor;
use curriculum_etl::utils::{logger, validation::Validate};
use curriculum_etl::{build_query, CliConfig, Command, CurriculumError, CurriculumQuery, RuntimeConfig};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting curriculum-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli
        .resolve()
        .with_context(|| format!("failed to load configuration {:?}", cli.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor = ExtractionMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let query = build_query(&config)?;
    let result = run(&cli.command, &config, &query).await;
    monitor.log_stats("extraction");

    match result {
        Ok(()) => {
            monitor.log_final_stats();
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run(
    command: &Command,
    config: &RuntimeConfig,
    query: &CurriculumQuery,
) -> Result<(), CurriculumError> {
    match command {
        Command::Days => print_json(&DaysResponse {
            days: query.list_days().await?,
        }),
        Command::Day { day } => print_json(&query.get_day(*day).await?),
        Command::Stats => print_json(&query.get_statistics().await?),
        Command::Export { .. } => {
            let curriculum = query.curriculum().await?;
            let exporter = CurriculumExporter::new(config.export_format()?);
            let rows = match &config.export_output {
                Some(path) => {
                    let file = std::fs::File::create(path)?;
                    let rows = exporter.write(&curriculum, file)?;
                    tracing::info!("📁 Output saved to: {}", path);
                    rows
                }
                None => exporter.write(&curriculum, std::io::stdout().lock())?,
            };
            tracing::info!("✅ Exported {} entries", rows);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DaysResponse {
    days: Vec<curriculum_etl::DaySummary>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CurriculumError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
