//! CTF Router

use crate::application::config::CtfConfig;
use crate::infra::store::RecordStore;
use crate::presentation::handlers::{self, CtfAppState, CtfRepository};
use crate::presentation::middleware::require_admin;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the CTF router over the configured record store
pub fn ctf_router(store: RecordStore, config: CtfConfig) -> Router {
    ctf_router_generic(store, config)
}

/// Create a generic CTF router for any repository implementation
pub fn ctf_router_generic<R>(repo: R, config: CtfConfig) -> Router
where
    R: CtfRepository,
{
    let config = Arc::new(config);
    let state = CtfAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let admin = Router::new()
        .route(
            "/admin/players",
            get(handlers::admin_list_players::<R>)
                .post(handlers::admin_upsert_player::<R>)
                .delete(handlers::admin_delete_player::<R>),
        )
        .route_layer(middleware::from_fn_with_state(config, require_admin));

    Router::new()
        .route("/puzzle-catalog", get(handlers::puzzle_catalog::<R>))
        .route("/check", post(handlers::check_answer::<R>))
        .route("/puzzle/{id}", get(handlers::caesar_prompt::<R>))
        .route("/puzzle/{id}/cipher", get(handlers::cipher_prompt::<R>))
        .route(
            "/player",
            get(handlers::get_player::<R>)
                .post(handlers::set_player_name::<R>)
                .patch(handlers::advance_player::<R>),
        )
        .route("/player/attempt", post(handlers::attempt_level::<R>))
        .route("/player/level/{id}", get(handlers::level_access::<R>))
        .route("/players", get(handlers::leaderboard::<R>))
        .merge(admin)
        .with_state(state)
}
