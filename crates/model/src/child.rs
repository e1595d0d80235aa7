use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{location::Location, WithId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    #[serde(rename = "Bueno", alias = "Good")]
    Good,
    #[serde(rename = "Malo", alias = "Bad")]
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBehavior(pub String);

impl fmt::Display for UnknownBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown behavior '{}'", self.0)
    }
}

impl std::error::Error for UnknownBehavior {}

impl FromStr for Behavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bueno" | "Good" => Ok(Self::Good),
            "Malo" | "Bad" => Ok(Self::Bad),
            other => Err(UnknownBehavior(other.to_owned())),
        }
    }
}

/// A child as it is stored: the location is only referenced by id and has to
/// be resolved separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Child {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comportamiento")]
    pub behavior: Behavior,
    #[serde(rename = "ubicacion")]
    pub location: Id<Location>,
}

impl HasId for Child {
    type IdType = String;
}

/// What a client submits to register a child. The location is given by
/// name and only turned into a reference once it has been looked up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChild {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comportamiento")]
    pub behavior: Behavior,
    #[serde(rename = "ubicacion")]
    pub location_name: String,
}

impl HasId for NewChild {
    type IdType = String;
}

/// A child with its location embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ChildView {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "comportamiento")]
    pub behavior: Behavior,
    #[serde(rename = "ubicacion")]
    pub location: WithId<Location>,
}

impl HasId for ChildView {
    type IdType = String;
}

impl ChildView {
    pub fn new(child: Child, location: WithId<Location>) -> Self {
        Self {
            name: child.name,
            behavior: child.behavior,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;
    use serde_json::json;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("Bueno".parse(), Ok(Behavior::Good));
        assert_eq!("Good".parse(), Ok(Behavior::Good));
        assert_eq!("Malo".parse(), Ok(Behavior::Bad));
        assert_eq!("Bad".parse(), Ok(Behavior::Bad));
        assert_eq!(
            "Unknown".parse::<Behavior>(),
            Err(UnknownBehavior("Unknown".to_owned()))
        );
    }

    #[test]
    fn view_embeds_location() {
        let child = WithId::new(
            Id::new("c1".to_owned()),
            Child {
                name: "Ana".to_owned(),
                behavior: Behavior::Good,
                location: Id::new("l1".to_owned()),
            },
        );
        let location = WithId::new(
            Id::new("l1".to_owned()),
            Location {
                name: "Kiel".to_owned(),
                coordinates: Coordinates::new(0.0, 0.0),
                good_count: 0.0,
            },
        );
        let view = child.map(|child| ChildView::new(child, location));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "id": "c1",
                "nombre": "Ana",
                "comportamiento": "Bueno",
                "ubicacion": {
                    "id": "l1",
                    "nombre": "Kiel",
                    "coordenadas": { "Latitud": 0.0, "Longitud": 0.0 },
                    "NumBuenos": 0.0,
                },
            })
        );
    }
}
