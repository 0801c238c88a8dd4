mod app;
mod handler;
mod input;
mod logging;
mod media;
mod tui;
mod ui;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use neonectar_core::config::{self, Config, API_URL_ENV, USE_MOCK_ENV};
use neonectar_core::{ApiService, Language};
use tracing::warn;

use app::{App, Settings};
use tui::EventHandler;

#[derive(Parser, Debug)]
#[command(name = "neonectar")]
#[command(version, about = "Turn documentation into an interactive tutorial")]
struct Cli {
    /// Answer locally with canned responses instead of calling the API
    #[arg(long)]
    mock: bool,

    /// Documentation API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory holding the demo and avatar videos
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        Config::default()
    });

    let env_url = env::var(API_URL_ENV).ok();
    let env_mock = env::var(USE_MOCK_ENV).ok();
    let base_url = config::resolve_base_url(
        cli.api_url.as_deref(),
        env_url.as_deref(),
        config.api_url.as_deref(),
    );
    let use_mock = config::resolve_use_mock(cli.mock, env_mock.as_deref(), config.use_mock);

    let settings = Settings {
        assets_dir: cli
            .assets_dir
            .or(config.assets_dir)
            .unwrap_or_else(|| PathBuf::from("assets")),
        language: config
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default(),
        config_path: Config::get_config_path().ok(),
        base_url,
    };

    let api = ApiService::new(use_mock, &settings.base_url);
    let mut app = App::new(api, settings);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let result = run(&mut terminal, &mut events, &mut app).await;

    tui::restore()?;
    result
}

async fn run(terminal: &mut tui::Tui, events: &mut EventHandler, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await,
            None => break,
        }
    }
    Ok(())
}
