use super::*;
use crate::store::Kv;
use crate::store::Redis;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    /// Serves the HTTP API over the given store until shutdown.
    ///
    /// Every route is open to any origin, method, and header; the store
    /// handle is shared across workers behind [`web::Data`].
    pub async fn serve(store: Arc<dyn Kv>) -> Result<(), std::io::Error> {
        const BIND_ADDR: &str = "0.0.0.0:8080";
        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from(BIND_ADDR));
        let state = web::Data::from(store);
        log::info!("starting backend server on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/", web::get().to(greet))
                .route("/store-username", web::post().to(store_username))
                .route("/get-all-usernames", web::get().to(get_all_usernames))
                .route("/updatePlayerStats/{id}", web::post().to(update_player_stats))
                .route("/get-random-cards", web::get().to(get_random_cards))
        })
        .workers(4)
        .bind(addr)?
        .run()
        .await
    }
}

/// Connects to Redis and serves until shutdown.
pub async fn run() -> Result<(), std::io::Error> {
    let store = Redis::new().await;
    Server::serve(Arc::new(store)).await
}
