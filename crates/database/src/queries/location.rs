use deliveries::database::Result;
use model::{location::Location, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{location::LocationRow, with_id, with_ids};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Location>) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, good_count
        FROM locations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, good_count
        FROM locations
        ORDER BY position;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|locations: Vec<LocationRow>| Ok(with_ids(locations)))
}

pub async fn insert<'c, E>(executor: E, location: Location) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO locations(
            name,
            latitude,
            longitude,
            good_count
        )
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, latitude, longitude, good_count;
        ",
    )
    .bind(&location.name)
    .bind(location.coordinates.latitude)
    .bind(location.coordinates.longitude)
    .bind(location.good_count)
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_by_name<'c, E, S>(
    executor: E,
    name: S,
) -> Result<Option<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(
        "
        SELECT id, name, latitude, longitude, good_count
        FROM locations
        WHERE name = $1
        ORDER BY position
        LIMIT 1;
        ",
    )
    .bind(name.into())
    .fetch_optional(executor)
    .await
    .map(|row: Option<LocationRow>| row.map(with_id))
    .map_err(convert_error)
}
