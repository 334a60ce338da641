use eframe::egui;
use log::{info, warn};

mod api;
mod config;
mod error;
mod gui;
mod models;
mod pages;
mod request;
mod router;
mod session;
mod validation;

use api::ApiContext;
use config::AppConfig;
use gui::VotingApp;
use router::Route;
use session::{FileStorage, SessionStore};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    info!("Using backend at {}", config.api_url);

    let store = match FileStorage::open(&config.session_file) {
        Ok(storage) => SessionStore::new(storage),
        Err(e) => {
            warn!(
                "Session file {} is unusable, keeping the session in memory: {}",
                config.session_file.display(),
                e
            );
            SessionStore::in_memory()
        }
    };
    let start = Route::initial(config.start_path.as_deref(), &store);
    let api = ApiContext::new(config.api_url.clone(), store);
    let runtime = tokio::runtime::Runtime::new()?;

    let builder = egui::ViewportBuilder::default()
        .with_title("Ballot Desk")
        .with_inner_size(egui::vec2(720.0, 560.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_native(
        "Ballot Desk",
        options,
        Box::new(move |cc| Ok(Box::new(VotingApp::new(cc, api, runtime, start)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with error: {}", e))
}
