pub use crate::common::RouteResult;

use deliveries::{client::Client, database::Database};
use tokio::net::TcpListener;

pub mod api;
pub mod common;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:6768";

#[derive(Debug, Clone)]
pub struct WebState<D>
where
    D: Database,
{
    pub delivery_client: Client<D>,
}

impl<D> WebState<D>
where
    D: Database,
{
    pub fn new(delivery_client: Client<D>) -> Self {
        Self { delivery_client }
    }
}

pub async fn start_web_server<D: Database>(
    state: WebState<D>,
    address: &str,
) -> std::io::Result<()> {
    let routes = api::routes(state);

    let listener = TcpListener::bind(address).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
