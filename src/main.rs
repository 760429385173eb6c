use rs_rag_ui::app::{init_tracing, run_app};
use rs_rag_ui::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing/logging
    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting RS RAG UI...");
    info!("Configuration loaded: {:?}", config);

    // Run the TUI
    if let Err(e) = run_app(config).await {
        error!("Application error: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown complete");
}
