pub mod download;
pub mod health;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::livechess::LiveChessClient;

pub fn router(client: LiveChessClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // static `all` takes priority over the round parameter
        .route("/download/{id}/all", get(download::download_all))
        .route("/download/{id}/{round}", get(download::download_round))
        .route("/download/{id}/{round}/{game}", get(download::download_game))
        .layer(Extension(client))
        .layer(cors)
}
