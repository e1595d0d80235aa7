use std::{error, fmt, fmt::Debug, result};

use async_trait::async_trait;
use model::{child::Child, location::Location, WithId};
use serde::Serialize;
use utility::id::{HasId, Id};

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    /// A uniqueness constraint rejected the write.
    Conflict,
    Other(Box<dyn error::Error + Send + Sync>),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Conflict => f.write_str("conflict"),
            Self::Other(why) => write!(f, "{}", why),
        }
    }
}

impl error::Error for DatabaseError {}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Basic document operations every stored record supports.
#[async_trait]
pub trait Repo<T>
where
    T: Serialize + HasId + Send,
    <T as HasId>::IdType: Debug + Clone + Serialize,
{
    /// Fails with [`DatabaseError::NotFound`] if there is no such record.
    async fn get(&mut self, id: Id<T>) -> Result<WithId<T>>;

    /// All records in store order.
    async fn get_all(&mut self) -> Result<Vec<WithId<T>>>;

    /// Inserts a record and returns it with its newly assigned id.
    async fn insert(&mut self, element: T) -> Result<WithId<T>>;
}

#[async_trait]
pub trait LocationRepo: Repo<Location> {
    /// The first location with exactly this name, if any.
    async fn location_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Location>>>;
}

#[async_trait]
pub trait ChildRepo: Repo<Child> {
    async fn child_by_name<S: Into<String> + Send>(
        &mut self,
        name: S,
    ) -> Result<Option<WithId<Child>>>;
}

/// A handle to the store, shared by all requests.
pub trait Database: Clone + Send + Sync + Sized + 'static {
    type Autocommit: LocationRepo + ChildRepo + Send;

    /// A connection on which every operation is committed immediately.
    fn auto(&self) -> Self::Autocommit;
}
