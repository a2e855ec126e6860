use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::HostConfig;
use crate::router::create_router;

pub async fn serve(config: HostConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("EcoSync console host starting up");
    debug!("Bundle directory: {}", config.dist.display());
    debug!("Bind address: {}", config.bind);

    let state = match config.into_state() {
        Ok(state) => state,
        Err(e) => {
            error!("Refusing to serve: {}", e);
            return Err(e.into());
        }
    };
    let bind = state.bind.clone();

    trace!("Creating application router");
    let app = create_router(state);

    trace!("Attempting to bind TCP listener to {}", bind);
    let listener = match TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind, e);
            return Err(e.into());
        }
    };

    info!("EcoSync console running on http://{}", bind);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
