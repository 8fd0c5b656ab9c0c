//! Olympics Dashboard CLI
//!
//! Terminal front end for the Olympic participation dashboard:
//! - Render the dashboard or a country's detail view
//! - Open any navigation path
//! - Browse interactively (select slices, navigate, reload)
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use olympics::config::{generate_default_config, Config, LoggingConfig};
use olympics::store::{source_for, OlympicStore};
use olympics::views::{ActiveView, Route, Session, ViewState};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "olympics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Olympic Games participation dashboard")]
#[command(long_about = "Explore Olympic Games participation per country.\nMedals per country on the dashboard, medals per edition on each country's page.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset location: http(s) URL or local JSON file (overrides config)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Config file (default: ~/.config/olympics/config.toml, ./olympics.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show medals per country
    Dashboard,

    /// Show one country's details
    Country {
        /// Country id
        id: String,
    },

    /// Open a navigation path (/, country/{id}, ...)
    Open {
        /// Path to open
        path: String,
    },

    /// Browse interactively
    Browse,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(source) = &cli.source {
        config.source.location = source.clone();
    }

    init_logging(&config.logging);

    tracing::debug!("Olympics dashboard v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(OlympicStore::new(source_for(&config.source.location)));
    let mut session = Session::new(store);

    match cli.command {
        Commands::Dashboard => {
            let view = session.navigate("/").await;
            print_view(view, &cli.format)?;
        }

        Commands::Country { id } => {
            let view = session.open(Route::CountryDetail(id)).await;
            print_view(view, &cli.format)?;
        }

        Commands::Open { path } => {
            let view = session.navigate(&path).await;
            print_view(view, &cli.format)?;
        }

        Commands::Browse => {
            browse(&mut session).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    session.close();
    Ok(())
}

/// Logs go to stderr so rendered views on stdout stay clean
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("olympics={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_view(view: &ActiveView, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&view_json(view))?),
        _ => print!("{}", view.render()),
    }
    Ok(())
}

fn view_json(view: &ActiveView) -> Value {
    match view {
        ActiveView::Dashboard(dashboard) => match dashboard.state() {
            ViewState::Ready(model) => json!({
                "view": view.name(),
                "summary": model.summary(),
                "entries": model.entries(),
            }),
            state => status_json(view.name(), state),
        },
        ActiveView::CountryDetail(detail) => match detail.state() {
            ViewState::Ready(model) => json!({
                "view": view.name(),
                "country": model.country,
                "totals": model.totals,
                "chart": model.chart,
            }),
            state => status_json(view.name(), state),
        },
        ActiveView::NotFound(not_found) => json!({
            "view": view.name(),
            "path": not_found.path(),
        }),
    }
}

fn status_json<M>(name: &str, state: &ViewState<M>) -> Value {
    match state.error() {
        Some(err) => json!({ "view": name, "error": err.user_message() }),
        None => json!({ "view": name, "status": "loading" }),
    }
}

const BROWSE_HELP: &str = "\
Commands:
  <number>         open the country at that position on the dashboard
  /, country/<id>  navigate to a path
  back             return to the dashboard
  reload           fetch the data again
  quit             exit
";

async fn browse(session: &mut Session) -> anyhow::Result<()> {
    session.navigate("/").await;
    println!("{}", session.render());
    println!("Type `help` for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        match input {
            "" => {
                prompt()?;
                continue;
            }
            "q" | "quit" | "exit" => break,
            "help" => {
                print!("{}", BROWSE_HELP);
                prompt()?;
                continue;
            }
            "back" => {
                session.back().await;
            }
            "reload" => {
                session.reload().await;
            }
            _ => match input.parse::<usize>() {
                Ok(position) => {
                    let selected = match position.checked_sub(1) {
                        Some(index) => session.select(index).await.is_some(),
                        None => false,
                    };
                    if !selected {
                        println!("No country at position {} on this view.", position);
                        prompt()?;
                        continue;
                    }
                }
                Err(_) => {
                    session.navigate(input).await;
                }
            },
        }

        println!("{}", session.render());
        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
