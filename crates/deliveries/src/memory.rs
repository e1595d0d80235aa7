//! A store that lives in process memory. Behaves like the PostgreSQL store
//! as far as the service can tell: ids are assigned on insert, records come
//! back in insertion order and child names are unique.

use std::sync::Arc;

use async_trait::async_trait;
use model::{child::Child, location::Location, WithId};
use tokio::sync::Mutex;
use utility::id::Id;

use crate::database::{ChildRepo, Database, DatabaseError, LocationRepo, Repo, Result};

#[derive(Debug, Default)]
struct Tables {
    next_id: u64,
    locations: Vec<WithId<Location>>,
    children: Vec<WithId<Child>>,
}

impl Tables {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:024x}", self.next_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for MemoryDatabase {
    type Autocommit = MemoryDatabase;

    fn auto(&self) -> Self::Autocommit {
        self.clone()
    }
}

#[async_trait]
impl Repo<Location> for MemoryDatabase {
    async fn get(&mut self, id: Id<Location>) -> Result<WithId<Location>> {
        self.tables
            .lock()
            .await
            .locations
            .iter()
            .find(|location| location.id == id)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Location>>> {
        Ok(self.tables.lock().await.locations.clone())
    }

    async fn insert(&mut self, element: Location) -> Result<WithId<Location>> {
        let mut tables = self.tables.lock().await;
        let location = WithId::new(Id::new(tables.next_id()), element);
        tables.locations.push(location.clone());
        Ok(location)
    }
}

#[async_trait]
impl LocationRepo for MemoryDatabase {
    async fn location_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Location>>> {
        let name = name.into();
        Ok(self
            .tables
            .lock()
            .await
            .locations
            .iter()
            .find(|location| location.content.name == name)
            .cloned())
    }
}

#[async_trait]
impl Repo<Child> for MemoryDatabase {
    async fn get(&mut self, id: Id<Child>) -> Result<WithId<Child>> {
        self.tables
            .lock()
            .await
            .children
            .iter()
            .find(|child| child.id == id)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Child>>> {
        Ok(self.tables.lock().await.children.clone())
    }

    async fn insert(&mut self, element: Child) -> Result<WithId<Child>> {
        let mut tables = self.tables.lock().await;
        if tables
            .children
            .iter()
            .any(|child| child.content.name == element.name)
        {
            return Err(DatabaseError::Conflict);
        }
        let child = WithId::new(Id::new(tables.next_id()), element);
        tables.children.push(child.clone());
        Ok(child)
    }
}

#[async_trait]
impl ChildRepo for MemoryDatabase {
    async fn child_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Child>>> {
        let name = name.into();
        Ok(self
            .tables
            .lock()
            .await
            .children
            .iter()
            .find(|child| child.content.name == name)
            .cloned())
    }
}
