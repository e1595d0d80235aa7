use std::{error::Error, fmt};

pub mod aggregate;
pub mod classify;
pub mod client;
pub mod database;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod route;

#[derive(Debug)]
pub enum RequestError {
    /// Something the request refers to does not exist.
    NotFound(String),
    /// The request itself is malformed.
    Invalid(String),
    /// The request would duplicate an existing record.
    Conflict(String),
    /// Stored data contradicts itself, e.g. a child referencing a location
    /// that is gone.
    Inconsistent(String),
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(message)
            | Self::Invalid(message)
            | Self::Conflict(message)
            | Self::Inconsistent(message) => f.write_str(message),
            Self::Other(why) => write!(f, "{}", why),
        }
    }
}

impl Error for RequestError {}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => {
                Self::NotFound("The requested item does not exist.".to_owned())
            }
            database::DatabaseError::Conflict => {
                Self::Conflict("The item already exists.".to_owned())
            }
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
