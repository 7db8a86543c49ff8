/*****************************************************************************************
 *
 *  Item Board – server-rendered item list with client-held view state
 *
 *****************************************************************************************/

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::serve;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use itemboard::app;
use itemboard::config::AppConfig;
use itemboard::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    //
    // ────────────────────────────────────────────────────────
    //  Locate and load config.json
    // ────────────────────────────────────────────────────────
    //
    let config_path = locate_config()?;
    let cfg = AppConfig::load_from_file(&config_path)?;

    //
    // ────────────────────────────────────────────────────────
    //  Configure logging
    // ────────────────────────────────────────────────────────
    //
    let level = match cfg.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info"  => LevelFilter::INFO,
        "warn"  => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Starting Item Board…");
    tracing::info!("Loaded config.json from {}", config_path.display());
    tracing::debug!("Loaded configuration: {:?}", cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Create the store and seed it
    // ────────────────────────────────────────────────────────
    //
    let state = AppState::with_seed(cfg.seed_items.clone());

    //
    // ────────────────────────────────────────────────────────
    //  Build Axum app
    // ────────────────────────────────────────────────────────
    //
    let app = app::build_app(state);

    //
    // ────────────────────────────────────────────────────────
    //  Bind server and start listening
    // ────────────────────────────────────────────────────────
    //
    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;

    Ok(())
}

/// Look for config.json next to the executable, one level up, then in the
/// working directory.
fn locate_config() -> std::io::Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    let exe_dir = exe_path.parent().map(PathBuf::from).unwrap_or_default();

    let candidates = [
        exe_dir.join("config.json"),
        exe_dir.join("..").join("config.json"),
        PathBuf::from("config.json"),
    ];

    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "config.json not found in:\n  {}\n  {}\n  {}",
                    candidates[0].display(),
                    candidates[1].display(),
                    candidates[2].display()
                ),
            )
        })
}

//
// ─────────────────────────────────────────────────────────────
//  Graceful shutdown handler
// ─────────────────────────────────────────────────────────────
//
async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::warn!("CTRL+C received, shutting down…");
}
