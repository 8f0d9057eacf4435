//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::CommandError;
use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, COLLECTION_USERS};
use crate::infra::{Database, UserStore};
use crate::server::Server;
use crate::services::UserManager;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> Result<(), CommandError> {
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    tracing::info!(
        app = %config.app_name,
        version = %config.app_version,
        "Starting server..."
    );

    let db = Database::connect(&config.database).await?;

    let store = UserStore::new(db.collection(COLLECTION_USERS));
    let user_service = Arc::new(UserManager::new(Arc::new(store)));
    let state = AppState::new(user_service, Arc::new(db)).with_version(config.app_version.clone());

    let router = create_router(state, config.http.request_timeout);

    Server::new(config.http.addr(), router)
        .run(&CancellationToken::new())
        .await?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}
