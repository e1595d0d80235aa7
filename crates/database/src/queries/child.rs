use deliveries::database::Result;
use model::{child::Child, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{
    child::{BehaviorColumn, ChildRow},
    with_id, with_ids,
};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Child>) -> Result<WithId<Child>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, behavior, location
        FROM children
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ChildRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Child>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name, behavior, location
        FROM children
        ORDER BY position;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|children: Vec<ChildRow>| Ok(with_ids(children)))
}

/// Fails with a conflict if a child with the same name exists.
pub async fn insert<'c, E>(executor: E, child: Child) -> Result<WithId<Child>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO children(
            name,
            behavior,
            location
        )
        VALUES ($1, $2, $3)
        RETURNING id, name, behavior, location;
        ",
    )
    .bind(&child.name)
    .bind(BehaviorColumn::from(child.behavior))
    .bind(child.location.raw())
    .fetch_one(executor)
    .await
    .map(|row: ChildRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_by_name<'c, E, S>(executor: E, name: S) -> Result<Option<WithId<Child>>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(
        "
        SELECT id, name, behavior, location
        FROM children
        WHERE name = $1;
        ",
    )
    .bind(name.into())
    .fetch_optional(executor)
    .await
    .map(|row: Option<ChildRow>| row.map(with_id))
    .map_err(convert_error)
}
