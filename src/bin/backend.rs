//! Backend Binary
//!
//! Serves the player registry, leaderboard, and card draw API.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:8080) against REDIS_URL.

#[tokio::main]
async fn main() {
    kittenboard::log();
    kittenboard::kys();
    kittenboard::server::run().await.unwrap();
}
