use async_trait::async_trait;
use deliveries::database::{ChildRepo, Repo, Result};
use model::{
    child::{Behavior, Child},
    WithId,
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::child::{get, get_all, get_by_name, insert};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

/// Postgres type: `behavior`
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "behavior")]
pub enum BehaviorColumn {
    Bueno,
    Malo,
}

impl From<Behavior> for BehaviorColumn {
    fn from(value: Behavior) -> Self {
        match value {
            Behavior::Good => Self::Bueno,
            Behavior::Bad => Self::Malo,
        }
    }
}

impl From<BehaviorColumn> for Behavior {
    fn from(value: BehaviorColumn) -> Self {
        match value {
            BehaviorColumn::Bueno => Self::Good,
            BehaviorColumn::Malo => Self::Bad,
        }
    }
}

/// Table: `children`
#[derive(Debug, Clone, FromRow)]
pub struct ChildRow {
    pub id: String,
    pub name: String,
    pub behavior: BehaviorColumn,
    pub location: String,
}

impl DatabaseRow for ChildRow {
    type Model = Child;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Child {
            name: self.name,
            behavior: self.behavior.into(),
            location: Id::new(self.location),
        }
    }
}

#[async_trait]
impl Repo<Child> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Child>) -> Result<WithId<Child>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Child>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Child) -> Result<WithId<Child>> {
        insert(&self.pool, element).await
    }
}

#[async_trait]
impl ChildRepo for PgDatabaseAutocommit {
    async fn child_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Child>>> {
        get_by_name(&self.pool, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_survives_the_column() {
        for behavior in [Behavior::Good, Behavior::Bad] {
            assert_eq!(Behavior::from(BehaviorColumn::from(behavior)), behavior);
        }
        assert_eq!(BehaviorColumn::from(Behavior::Good), BehaviorColumn::Bueno);
    }

    #[test]
    fn row_becomes_child_with_reference() {
        let row = ChildRow {
            id: "c1".to_owned(),
            name: "Ana".to_owned(),
            behavior: BehaviorColumn::Malo,
            location: "l1".to_owned(),
        };
        let child = crate::data_model::with_id(row);
        assert_eq!(child.id.raw(), "c1");
        assert_eq!(child.content.behavior, Behavior::Bad);
        assert_eq!(child.content.location.raw(), "l1");
    }
}
