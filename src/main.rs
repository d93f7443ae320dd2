use edupath_compare::config::cli::Command;
use edupath_compare::config::Config;
use edupath_compare::domain::Comparison;
use edupath_compare::error::Result;
use edupath_compare::infrastructure::{EdupathClient, FileSystemStore};
use edupath_compare::services::{report, ComparisonService, DebouncedSearch};
use std::sync::Arc;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() {
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let level = config.args.log_level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(config).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    config.ensure_directories()?;

    let catalog = Arc::new(EdupathClient::new(
        config.http_client.clone(),
        config.args.api_url.clone(),
    ));
    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let service = ComparisonService::new(
        Arc::clone(&catalog),
        store,
        config.args.history_limit.get(),
    );
    info!("Using EduPath API at {}", catalog.base_url());

    match &config.args.command {
        Command::Search { query } => {
            // Same path as an interactive search box, minus the typing.
            let mut search = DebouncedSearch::new(Arc::clone(&catalog), config.search_settings());
            search.input(0, query)?;
            if search.next_update().await.is_none() {
                info!(
                    "Query shorter than {} characters, nothing searched",
                    config.args.min_query_len
                );
            }
            print!("{}", report::render_courses(search.options(0)));
        }
        Command::Compare { ids, save, json } => {
            let comparison = service.compare(ids).await?;
            print_comparison(&comparison, *json)?;
            if *save {
                service.save(&comparison)?;
            }
        }
        Command::History => {
            print!("{}", report::render_history(&service.history()?));
        }
        Command::Again { index, json } => {
            let comparison = service.compare_again(*index).await?;
            print_comparison(&comparison, *json)?;
        }
        Command::Eligibility { course_id, points } => {
            let eligibility = service.check_eligibility(course_id, *points).await?;
            print!("{}", report::render_eligibility(&eligibility));
        }
    }

    Ok(())
}

fn print_comparison(comparison: &Comparison, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(comparison)?);
    } else {
        print!("{}", report::render_comparison(comparison));
    }
    Ok(())
}
