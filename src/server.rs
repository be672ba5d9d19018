use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Config, error, info, management::SavedTrackStore};

pub async fn start_web_server(config: Arc<Config>, store: Arc<SavedTrackStore>) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/recommend", post(api::recommend))
        .route("/save", post(api::save_track))
        .route("/saved", get(api::list_saved))
        .route("/delete", post(api::delete_saved))
        .route("/health", get(api::health))
        .layer(Extension(Arc::clone(&config)))
        .layer(Extension(store));

    let addr = match SocketAddr::from_str(&config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped unexpectedly: {}", e);
    }
}
