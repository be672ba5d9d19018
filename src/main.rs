use std::sync::Arc;

use genrec::{config::Config, error, management::SavedTrackStore, server, success};

#[tokio::main]
async fn main() {
    // Pick up a local .env before reading the environment. Running without
    // one is fine as long as the variables are set some other way.
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let store_path = config.data_dir.join("saved-tracks.json");
    let store = match SavedTrackStore::open(&store_path).await {
        Ok(store) => Arc::new(store),
        Err(e) => error!(
            "Cannot open saved-track store at {}. Err: {}",
            store_path.display(),
            e
        ),
    };
    success!("Saved-track store ready at {}", store_path.display());

    server::start_web_server(Arc::new(config), store).await;
}
