use axum::Router;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::HostConfig;
use crate::router::create_router;

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\">ecosync</div></body></html>";
pub const APP_JS: &str = "console.log('ecosync');";

/// A bundle directory shaped like trunk output. Dropped with the guard.
pub fn fixture_dist() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    std::fs::write(dir.path().join("frontend.js"), APP_JS).expect("Failed to write frontend.js");
    dir
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from `RUST_LOG`, defaulting to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create the host app over `dist`
pub fn setup_test_app(dist: &TempDir) -> Router {
    let _guard = init_test_tracing();

    let state = HostConfig {
        dist: dist.path().to_path_buf(),
        bind: "127.0.0.1:0".to_string(),
        request_timeout_secs: 5,
    }
    .into_state()
    .expect("Fixture bundle should be servable");

    create_router(state)
}
