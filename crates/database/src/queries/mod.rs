use deliveries::database::DatabaseError;

pub mod child;
pub mod location;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        sqlx::Error::Database(ref error) if error.is_unique_violation() => {
            DatabaseError::Conflict
        }
        _ => DatabaseError::Other(Box::new(why)),
    }
}
