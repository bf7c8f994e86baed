use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    response::Html,
};
use bank::payloads::{RankingEntry, VoteRequest, VoteResponse};
use tracing::{debug, warn};

use crate::{
    error::AppError,
    listing::{Filters, ListingQuery, build_listing},
    ranking::{RankingQuery, ranking_page as ranking_data},
    state::State as AppState,
    utils::real_ip,
};

pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let filters = Filters::from(query);
    let counts = state.store.counts().await?;
    let listing = build_listing(&state.catalog, &counts, &filters);

    let token = state.csrf.issue();

    Ok(Html(state.pages.index(&state.catalog, &filters, &listing, &token)?))
}

pub async fn about_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.about()?))
}

pub async fn ranking_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.ranking()?))
}

pub async fn ranking_data_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<RankingEntry>>, AppError> {
    let counts = state.store.counts().await?;

    Ok(Json(ranking_data(&state.catalog, &counts, query.offset())))
}

pub async fn vote_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<VoteResponse>, AppError> {
    state.csrf.verify(&headers)?;

    // requests without a valid token never count against the limit
    let ip = real_ip(&headers, peer);

    if !state.limiter.check(&ip) {
        debug!("Vote rate limit hit for {ip}");
        return Err(AppError::RateLimited);
    }

    let payload: VoteRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::MalformedPayload)?;

    let weapon_id = payload.weapon_id.ok_or(AppError::MissingWeaponId)?;

    let kit = u32::try_from(weapon_id)
        .ok()
        .and_then(|id| state.catalog.kit(id))
        .ok_or(AppError::UnknownWeapon(weapon_id))?;

    let new_vote_count = state.store.increment(kit.id).await.map_err(|e| {
        warn!("Failed to record vote for {}: {e}", kit.id);
        AppError::from(e)
    })?;

    debug!("Vote for kit {} from {ip}, now {new_vote_count}", kit.id);

    Ok(Json(VoteResponse::counted(new_vote_count)))
}
