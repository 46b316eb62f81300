use crate::config::ServerConfig;
use crate::dispatch::{Dispatcher, TracingLog};
use crate::router::{handle, App};
use crate::views::ReportView;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod context;
mod dispatch;
mod errors;
mod i18n;
mod request;
mod responses;
mod router;
mod spreadsheets;
mod views;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration
    let config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 3️⃣ A missing spreadsheet writer stops startup, not a request
    let writer = match spreadsheets::writer_for(&config.spreadsheet_backend) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Spreadsheet export unavailable: {e}");
            std::process::exit(1);
        }
    };

    // 4️⃣ View errors are reported through tracing
    let app = App {
        dispatcher: Dispatcher::new(writer, Arc::new(TracingLog)),
        reports: ReportView::sample(),
    };

    // 5️⃣ Start the server
    tracing::info!(addr = %config.addr, workers = config.max_workers, "Starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
