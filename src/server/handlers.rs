use super::*;
use crate::cards::Draw;
use crate::players::Ledger;
use crate::players::Registry;
use crate::store::Kv;
use actix_web::HttpResponse;
use actix_web::web;

/// `GET /` — plain-text liveness greeting.
pub async fn greet() -> HttpResponse {
    HttpResponse::Ok().body("Hello, this is the kittenboard backend server!")
}

/// `POST /store-username` — registers a display name, minting an id.
/// Registering a name that already exists returns its id with 200.
pub async fn store_username(
    store: web::Data<dyn Kv>,
    req: web::Json<StoreUsernameRequest>,
) -> HttpResponse {
    if req.player.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: String::from("player is required"),
        });
    }
    match store.register(&req.player).await {
        Ok(outcome) => {
            let message = if outcome.created {
                "Player stored successfully"
            } else {
                "Player name already exists"
            };
            HttpResponse::Ok().json(StoredResponse {
                message: String::from(message),
                id: outcome.id,
            })
        }
        Err(e) => {
            log::error!("registration failed for {}: {}", req.player, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// `GET /get-all-usernames` — every player with its derived total.
pub async fn get_all_usernames(store: web::Data<dyn Kv>) -> HttpResponse {
    match store.standings().await {
        Ok(records) => HttpResponse::Ok().json(PlayersResponse {
            players: records.into_iter().map(PlayerView::from).collect(),
        }),
        Err(e) => {
            log::error!("listing players failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// `POST /updatePlayerStats/{id}` — applies win/loss deltas to a player.
/// The id is taken as-is; unknown ids accumulate from zero (see
/// [`Ledger::tally`]).
pub async fn update_player_stats(
    store: web::Data<dyn Kv>,
    path: web::Path<String>,
    req: web::Json<UpdateStatsRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    match store.tally(&id, req.win, req.loss).await {
        Ok(()) => HttpResponse::Ok().json(UpdatedResponse {
            message: String::from("Player stats updated successfully"),
        }),
        Err(e) => {
            log::error!("stats update failed for {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// `GET /get-random-cards` — deals a fresh 5-card hand.
pub async fn get_random_cards() -> HttpResponse {
    HttpResponse::Ok().json(CardsResponse::from(Draw::deal()))
}
