use std::{fmt, hash, marker::PhantomData};

use serde::{Deserialize, Serialize};

/// Types that can be turned into the string form used to compare and index
/// identifiers, independent of how they are represented in memory.
pub trait Key {
    fn string_key(&self) -> String;
}

pub trait HasId {
    type IdType;
}

/// An identifier of a `T`. The phantom type keeps ids of different records
/// from being mixed up, even though they share a representation.
pub struct Id<T: HasId>(T::IdType, PhantomData<T>);

impl<T: HasId> Id<T> {
    pub fn new(inner: T::IdType) -> Self {
        Self(inner, PhantomData)
    }
}

impl<T: HasId> Key for Id<T>
where
    T::IdType: fmt::Display,
{
    fn string_key(&self) -> String {
        self.0.to_string().trim().to_owned()
    }
}

impl<T: HasId> Id<T>
where
    T::IdType: Clone,
{
    pub fn raw(&self) -> T::IdType {
        self.0.clone()
    }
}

impl<T: HasId> fmt::Debug for Id<T>
where
    T::IdType: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.0).finish()
    }
}

impl<T: HasId> fmt::Display for Id<T>
where
    T::IdType: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: HasId> Clone for Id<T>
where
    T::IdType: Clone,
{
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: HasId> hash::Hash for Id<T>
where
    T::IdType: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: HasId> PartialEq for Id<T>
where
    T::IdType: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T: HasId> Eq for Id<T> where T::IdType: Eq {}

impl<'de, T: HasId> Deserialize<'de> for Id<T>
where
    T::IdType: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::IdType::deserialize(deserializer).map(Id::new)
    }
}

impl<T: HasId> Serialize for Id<T>
where
    T::IdType: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stop;

    impl HasId for Stop {
        type IdType = String;
    }

    struct Numbered;

    impl HasId for Numbered {
        type IdType = u64;
    }

    #[test]
    fn keys_do_not_depend_on_representation() {
        let a: Id<Stop> = Id::new("42".to_owned());
        let b: Id<Numbered> = Id::new(42);
        assert_eq!(a.string_key(), b.string_key());
    }

    #[test]
    fn string_key_ignores_surrounding_whitespace() {
        let id: Id<Stop> = Id::new(" abc ".to_owned());
        assert_eq!(id.string_key(), "abc");
    }

    #[test]
    fn serializes_as_inner_value() {
        let id: Id<Stop> = Id::new("abc".to_owned());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: Id<Stop> = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
