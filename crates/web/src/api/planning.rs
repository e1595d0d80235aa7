use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json, Router,
};
use deliveries::database::Database;
use model::delivery::DeliveryStop;

use crate::{
    common::{get_only, RouteErrorResponse, RouteResult},
    WebState,
};

pub(crate) fn routes<D: Database>() -> Router<WebState<D>> {
    Router::new()
        .route("/entregas", get_only(get_deliveries::<D>))
        .route("/ruta", get_only(get_route_distance::<D>))
}

/// Locations ordered by how many good children live there.
async fn get_deliveries<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { delivery_client }): State<WebState<D>>,
) -> RouteResult<Json<Vec<DeliveryStop>>> {
    delivery_client
        .get_deliveries()
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

/// Total km travelled visiting the locations in the order of `/entregas`.
async fn get_route_distance<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { delivery_client }): State<WebState<D>>,
) -> RouteResult<Json<f64>> {
    delivery_client
        .get_route_distance()
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}
