use reviewbot::infrastructure::bootstrap::build_poll_loop;
use reviewbot::infrastructure::config::settings::Config;
use tokio::signal;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load(Config::default_path()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.logging.init() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let mut poll_loop = build_poll_loop(&config);

    tokio::select! {
        result = poll_loop.run() => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("reviewbot stopped");
}
