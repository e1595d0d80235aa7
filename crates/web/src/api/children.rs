use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    routing::post,
    Json, Router,
};
use deliveries::database::Database;
use model::{
    child::{Behavior, ChildView, NewChild},
    WithId,
};
use serde::Deserialize;

use crate::{
    common::{get_only, route_not_found, RouteErrorResponse, RouteResult},
    WebState,
};

pub(crate) fn routes<D: Database>() -> Router<WebState<D>> {
    Router::new()
        .route("/ninos", post(create_child::<D>).fallback(route_not_found))
        .route("/ninos/buenos", get_only(good_children::<D>))
        .route("/ninos/malos", get_only(bad_children::<D>))
}

async fn good_children<D: Database>(
    original_uri: OriginalUri,
    state: State<WebState<D>>,
) -> RouteResult<Json<Vec<WithId<ChildView>>>> {
    children_by_behavior(original_uri, state, Behavior::Good).await
}

async fn bad_children<D: Database>(
    original_uri: OriginalUri,
    state: State<WebState<D>>,
) -> RouteResult<Json<Vec<WithId<ChildView>>>> {
    children_by_behavior(original_uri, state, Behavior::Bad).await
}

async fn children_by_behavior<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { delivery_client }): State<WebState<D>>,
    behavior: Behavior,
) -> RouteResult<Json<Vec<WithId<ChildView>>>> {
    delivery_client
        .get_children_by_behavior(behavior)
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

/// Request body of `POST /ninos`. Every field is optional here so that
/// missing fields can be answered with a bad request.
#[derive(Debug, Deserialize)]
pub(crate) struct ChildPayload {
    #[serde(rename = "nombre", alias = "name")]
    name: Option<String>,
    #[serde(rename = "comportamiento", alias = "behavior")]
    behavior: Option<String>,
    #[serde(rename = "ubicacion", alias = "location")]
    location_name: Option<String>,
}

impl TryFrom<ChildPayload> for NewChild {
    type Error = RouteErrorResponse;

    fn try_from(payload: ChildPayload) -> Result<Self, Self::Error> {
        let non_empty = |field: Option<String>| field.filter(|value| !value.is_empty());
        let (Some(name), Some(behavior), Some(location_name)) = (
            non_empty(payload.name),
            non_empty(payload.behavior),
            non_empty(payload.location_name),
        ) else {
            return Err(RouteErrorResponse::bad_request(
                "Expected the fields 'nombre', 'comportamiento' and 'ubicacion'.",
            ));
        };

        let behavior = behavior.parse::<Behavior>().map_err(|why| {
            RouteErrorResponse::bad_request(format!(
                "Invalid behavior: {}. Expected 'Bueno' or 'Malo'.",
                why
            ))
        })?;

        Ok(NewChild {
            name,
            behavior,
            location_name,
        })
    }
}

async fn create_child<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { delivery_client }): State<WebState<D>>,
    body: Bytes,
) -> RouteResult<(StatusCode, Json<WithId<NewChild>>)> {
    let with_request = |response: RouteErrorResponse| {
        response
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    };

    // The body is JSON whatever the `Content-Type` header says.
    let Json(payload) =
        Json::<ChildPayload>::from_bytes(&body).map_err(|why| with_request(why.into()))?;
    let child = NewChild::try_from(payload).map_err(with_request)?;

    delivery_client
        .push_child(child)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| with_request(why.into()))
}
