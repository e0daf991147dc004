use crate::server::page::render_index;
use crate::server::AppContext;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use davshelf_core::{DisplayItem, PlayerRegistry};
use serde::{Deserialize, Serialize};

pub fn library_routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(index))
        .route("/api/items", get(list_items))
        .route("/api/players", get(list_players))
}

#[derive(Deserialize)]
struct PlayerQuery {
    player: Option<String>,
}

/// A query string that fails to parse counts as no selection.
fn requested_player(params: &Option<Query<PlayerQuery>>) -> Option<&str> {
    params.as_ref().and_then(|Query(p)| p.player.as_deref())
}

async fn index(
    State(ctx): State<AppContext>,
    params: Option<Query<PlayerQuery>>,
) -> impl IntoResponse {
    let player = ctx.resolve_player(requested_player(&params));
    let items = ctx.catalog.items(player).await;
    Html(render_index(&items, PlayerRegistry::standard(), player))
}

#[derive(Serialize)]
struct ItemsResponse {
    player: &'static str,
    items: Vec<DisplayItem>,
}

async fn list_items(
    State(ctx): State<AppContext>,
    params: Option<Query<PlayerQuery>>,
) -> impl IntoResponse {
    let player = ctx.resolve_player(requested_player(&params));
    let items = ctx.catalog.items(player).await;
    Json(ItemsResponse {
        player: player.id,
        items,
    })
}

#[derive(Serialize)]
struct PlayersResponse {
    players: Vec<&'static str>,
    default: &'static str,
}

async fn list_players(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(PlayersResponse {
        players: PlayerRegistry::standard().ids().collect(),
        default: ctx.resolve_player(None).id,
    })
}
