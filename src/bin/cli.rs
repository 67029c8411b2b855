//! CLI binary for broll.

use std::path::PathBuf;

use broll::{load_config, render_insights, render_results};
use broll_search::{Credentials, ProviderId};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// broll: ranked b-roll clips from stock catalogs, YouTube and the web.
#[derive(Parser)]
#[command(name = "broll", version, about)]
struct Cli {
    /// Free-text query, e.g. "business meeting".
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Provider to query (repeatable). Defaults to the configured set.
    #[arg(short, long = "provider", value_name = "ID")]
    providers: Vec<ProviderId>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Print keyword extraction and expansion before the results.
    #[arg(long)]
    insights: bool,

    /// Keep at most N ranked results.
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("broll=info,broll_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    let mut file_config = load_config(cli.config.as_deref())?;
    if let Some(limit) = cli.limit {
        file_config.search.max_results_total = Some(limit);
    }
    let mut config = file_config.into_search_config(&Credentials::from_env())?;
    if !cli.providers.is_empty() {
        config.providers = cli.providers;
    }

    let configured: Vec<&str> = config.credentials.names().collect();
    tracing::info!(
        providers = config.providers.len(),
        credentials = ?configured,
        "searching"
    );

    let insights = cli.insights.then(|| broll_search::insights(&query));
    let results = broll_search::search(&query, &config).await?;

    if cli.json {
        let output = match insights {
            Some(insights) => serde_json::json!({ "insights": insights, "results": results }),
            None => serde_json::to_value(&results)?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(insights) = &insights {
        println!("{}", render_insights(insights));
    }
    if results.is_empty() {
        println!("No results.");
    } else {
        print!("{}", render_results(&results));
    }
    Ok(())
}
