use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    routing::post,
    Json, Router,
};
use deliveries::database::Database;
use model::{
    location::{Coordinates, Location},
    WithId,
};
use serde::Deserialize;

use crate::{
    common::{route_not_found, RouteErrorResponse, RouteResult},
    WebState,
};

pub(crate) fn routes<D: Database>() -> Router<WebState<D>> {
    Router::new().route(
        "/ubicacion",
        post(create_location::<D>).fallback(route_not_found),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoordinatesPayload {
    #[serde(rename = "Latitud", alias = "latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitud", alias = "longitude")]
    longitude: Option<f64>,
}

/// Request body of `POST /ubicacion`.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationPayload {
    #[serde(rename = "nombre", alias = "name")]
    name: Option<String>,
    #[serde(rename = "coordenadas", alias = "coordinates")]
    coordinates: Option<CoordinatesPayload>,
    #[serde(rename = "NumBuenos", alias = "count")]
    good_count: Option<f64>,
}

impl TryFrom<LocationPayload> for Location {
    type Error = RouteErrorResponse;

    fn try_from(payload: LocationPayload) -> Result<Self, Self::Error> {
        let missing = || {
            RouteErrorResponse::bad_request(
                "Expected the fields 'nombre', 'coordenadas' (with 'Latitud' and \
                 'Longitud') and 'NumBuenos'.",
            )
        };

        let name = payload
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(missing)?;
        let coordinates = payload.coordinates.ok_or_else(missing)?;
        let latitude = coordinates.latitude.ok_or_else(missing)?;
        let longitude = coordinates.longitude.ok_or_else(missing)?;
        let good_count = payload.good_count.ok_or_else(missing)?;

        Ok(Location {
            name,
            coordinates: Coordinates::new(latitude, longitude),
            good_count,
        })
    }
}

async fn create_location<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { delivery_client }): State<WebState<D>>,
    body: Bytes,
) -> RouteResult<(StatusCode, Json<WithId<Location>>)> {
    let with_request = |response: RouteErrorResponse| {
        response
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    };

    // The body is JSON whatever the `Content-Type` header says.
    let Json(payload) =
        Json::<LocationPayload>::from_bytes(&body).map_err(|why| with_request(why.into()))?;
    let location = Location::try_from(payload).map_err(with_request)?;

    delivery_client
        .push_location(location)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| with_request(why.into()))
}
