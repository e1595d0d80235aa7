use std::fmt::Debug;

use serde::Serialize;
use utility::id::{HasId, Id};

pub mod child;
pub mod delivery;
pub mod location;

/// A record together with the identifier the store assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }

    /// Keeps the id but swaps the content for a different representation of
    /// the same record.
    pub fn map<U, F>(self, f: F) -> WithId<U>
    where
        U: HasId<IdType = V::IdType>,
        F: FnOnce(V) -> U,
    {
        WithId::new(Id::new(self.id.raw()), f(self.content))
    }
}
