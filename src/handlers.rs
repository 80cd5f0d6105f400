//! REST API endpoint handlers
//!
//! All handlers go through the shared [`AppState`] file store. The
//! simulation endpoint is the only one that does real work: it
//! validates the request, seeds and runs the engine, persists the
//! outcome, and serializes the ranked result.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/competitors` | List the registry |
//! | `POST` | `/competitors` | Add a competitor (`?name=`) |
//! | `PUT` | `/competitors/{id}` | Rename a competitor |
//! | `DELETE` | `/competitors/{id}` | Remove a competitor |
//! | `POST` | `/simulate` | Run a race (`?count=&distance=`) |
//! | `GET` | `/race` | Last race summary |
//! | `GET` | `/history` | Last race history |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::engine::{run_race, seed_entrants, Competitor, RaceConfig, Snapshot};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::RaceSummary;

/// Query parameters for competitor create/rename
#[derive(Debug, serde::Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Query parameters for `POST /simulate`
#[derive(Debug, serde::Deserialize)]
pub struct SimulateQuery {
    /// How many registry entries race, taken in registry order
    pub count: Option<usize>,
    /// Total race distance
    pub distance: Option<f64>,
}

/// List the competitor registry
pub async fn list_competitors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Competitor>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.load_competitors()?))
}

/// Append a new competitor; ids grow from the last record
pub async fn add_competitor(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NameQuery>,
) -> Result<(StatusCode, Json<Competitor>), ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::InvalidQuery(String::from("competitor name is required")))?;

    let store = state.store.lock().await;
    let mut competitors = store.load_competitors()?;
    let id = competitors.last().map_or(1, |c| c.id + 1);
    let competitor = Competitor { id, name };
    competitors.push(competitor.clone());
    store.save_competitors(&competitors)?;

    info!(id, name = %competitor.name, "competitor added");
    Ok((StatusCode::CREATED, Json(competitor)))
}

/// Rename a competitor. The name parameter is optional; a bare PUT
/// re-saves the record unchanged.
pub async fn rename_competitor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Competitor>, ApiError> {
    let store = state.store.lock().await;
    let mut competitors = store.load_competitors()?;
    let record = competitors
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("competitor {id}")))?;
    if let Some(name) = params.name {
        record.name = name;
    }
    let updated = record.clone();
    store.save_competitors(&competitors)?;

    info!(id, "competitor renamed");
    Ok(Json(updated))
}

/// Remove a competitor. Deleting an unknown id is a no-op.
pub async fn delete_competitor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.lock().await;
    let mut competitors = store.load_competitors()?;
    competitors.retain(|c| c.id != id);
    store.save_competitors(&competitors)?;

    info!(id, "competitor deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Run a race over the first `count` registry entries.
///
/// Persists the summary and history after the engine returns, then
/// responds with the ranked result.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SimulateQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = params
        .count
        .ok_or_else(|| ApiError::InvalidQuery(String::from("competitor count is required")))?;
    let distance = params
        .distance
        .ok_or_else(|| ApiError::InvalidQuery(String::from("race distance is required")))?;
    if count == 0 {
        return Err(ApiError::InvalidQuery(String::from(
            "competitor count must be positive",
        )));
    }
    if !distance.is_finite() || distance <= 0.0 {
        return Err(ApiError::InvalidQuery(format!(
            "race distance must be positive, got {distance}"
        )));
    }

    let store = state.store.lock().await;
    let competitors = store.load_competitors()?;
    if count > competitors.len() {
        return Err(ApiError::InvalidQuery(format!(
            "count {count} exceeds registry size {}",
            competitors.len()
        )));
    }

    let field: Vec<Competitor> = competitors.into_iter().take(count).collect();
    let mut rng = rand::thread_rng();
    let entrants = seed_entrants(&field, &mut rng);

    let config = RaceConfig {
        distance,
        ..RaceConfig::default()
    };
    let result = run_race(entrants, &config)?;

    store.save_summary(&RaceSummary {
        total_distance: distance,
        hours: result.hours,
        winner: result.winner.clone(),
    })?;
    store.save_history(&result.history)?;

    info!(
        count,
        distance,
        hours = result.hours,
        winner = %result.winner.name,
        "race simulated"
    );

    Ok(Json(serde_json::json!({
        "hours": result.hours,
        "positions": result.standings,
        "winner": result.winner,
    })))
}

/// Last persisted race history; empty before the first run
pub async fn race_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Snapshot>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.load_history()?))
}

/// Last persisted race summary
pub async fn latest_race(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RaceSummary>, ApiError> {
    let store = state.store.lock().await;
    store
        .load_summary()?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(String::from("no race has been run")))
}
