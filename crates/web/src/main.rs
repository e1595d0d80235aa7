use std::{env, process};

use database::{DatabaseConnectionInfo, PgDatabase};
use deliveries::client::Client;
use web::{start_web_server, WebState, DEFAULT_LISTEN_ADDRESS};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    // database
    let Some(database_connection_info) = DatabaseConnectionInfo::from_env() else {
        log::error!("{} is not set", DatabaseConnectionInfo::URL_VARIABLE);
        process::exit(1);
    };
    let database = match PgDatabase::connect(database_connection_info).await {
        Ok(database) => database,
        Err(why) => {
            log::error!("could not connect to database: {}", why);
            process::exit(1);
        }
    };
    log::info!("connected to database");

    // web server
    let address =
        env::var("LISTEN_ADDRESS").unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_owned());
    let state = WebState::new(Client::new(database));
    if let Err(why) = start_web_server(state, &address).await {
        log::error!("web server stopped: {}", why);
        process::exit(1);
    }
}
