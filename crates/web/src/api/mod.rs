use axum::Router;
use deliveries::database::Database;
use tower_http::trace::TraceLayer;

use crate::{common::route_not_found, WebState};

pub mod children;
pub mod planning;
pub mod locations;

pub fn routes<D: Database>(state: WebState<D>) -> Router {
    Router::new()
        .merge(children::routes())
        .merge(locations::routes())
        .merge(planning::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
