use async_trait::async_trait;
use deliveries::database::{LocationRepo, Repo, Result};
use model::{
    location::{Coordinates, Location},
    WithId,
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::location::{get, get_all, get_by_name, insert};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

/// Table: `locations`
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub good_count: f64,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Location {
            name: self.name,
            coordinates: Coordinates::new(self.latitude, self.longitude),
            good_count: self.good_count,
        }
    }
}

#[async_trait]
impl Repo<Location> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Location>) -> Result<WithId<Location>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Location>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Location) -> Result<WithId<Location>> {
        insert(&self.pool, element).await
    }
}

#[async_trait]
impl LocationRepo for PgDatabaseAutocommit {
    async fn location_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Location>>> {
        get_by_name(&self.pool, name).await
    }
}
