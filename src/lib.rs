//! Player registry, win/loss leaderboard, and random card draws for an
//! exploding-kittens-style game.
//!
//! Everything persistent lives in Redis: each player is a hash keyed by id,
//! each display name points at its id through a secondary index key. The
//! HTTP boundary is a thin actix-web layer over two repository traits
//! ([`players::Registry`] and [`players::Ledger`]) that are implemented for
//! any [`store::Kv`] backend.
//!
//! ## Modules
//!
//! - [`cards`] — the four-label card vocabulary and the 5-card random draw
//! - [`store`] — the key-value contract plus the Redis and in-memory backends
//! - [`players`] — player records, registration, and the standings listing
//! - [`server`] — actix-web routes, handlers, and wire types

pub mod cards;
pub mod players;
pub mod server;
pub mod store;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes Debug level to file, Info to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register a Ctrl+C handler for immediate termination.
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
