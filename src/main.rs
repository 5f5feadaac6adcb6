use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::domain::SystemClock;
use crate::logging::LoggingConfig;
use crate::router::{respond, AppState};
use astra::{Request, Server};

mod catalog;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration + logging
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // No config means no logging settings yet; report with the defaults.
            LoggingConfig::default().init();
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    cfg.logging.init();

    // 2️⃣ Load the catalog once; it is read-only afterwards
    let catalog = match Catalog::load(&cfg.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(path = %cfg.catalog_path.display(), error = %e, "catalog load failed");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        tracing::warn!(path = %cfg.catalog_path.display(), "catalog is empty");
    }

    let state = AppState {
        catalog,
        clock: Box::new(SystemClock),
        recency: cfg.recency_window(),
    };

    // 3️⃣ Start the server
    tracing::info!(addr = %cfg.addr, workers = cfg.workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req: Request, _info| respond(req, &state));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
