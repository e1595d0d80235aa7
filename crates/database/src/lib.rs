use std::{env, error::Error};

use deliveries::database::Database;

pub mod data_model;
pub mod queries;

pub struct DatabaseConnectionInfo {
    pub url: String,
}

impl DatabaseConnectionInfo {
    pub const URL_VARIABLE: &'static str = "DATABASE_URL";

    pub fn from_env() -> Option<Self> {
        let url = env::var(Self::URL_VARIABLE).ok()?;
        if url.trim().is_empty() {
            return None;
        }
        Some(Self { url })
    }
}

#[derive(Debug, Clone)]
pub struct PgDatabase {
    connection: sqlx::PgPool,
}

#[derive(Debug)]
pub struct PgDatabaseAutocommit {
    pool: sqlx::PgPool,
}

impl PgDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self, Box<dyn Error>> {
        let pool = sqlx::postgres::PgPool::connect(&database_connection_info.url).await?;

        log::info!("running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { connection: pool })
    }
}

impl Database for PgDatabase {
    type Autocommit = PgDatabaseAutocommit;

    fn auto(&self) -> Self::Autocommit {
        PgDatabaseAutocommit {
            pool: self.connection.clone(),
        }
    }
}
