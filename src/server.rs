use std::{net::SocketAddr, sync::Arc};

use anyhow::{anyhow, Result};
use axum::{extract::State, routing::get, Router};
use tracing::info;

use crate::{
    pages::authors::{show_all_authors, AuthorListing},
    traits::AuthorStore,
};

pub const AUTHORS_ROUTE: &str = "/catalog/authors";

pub struct TheStateOfAffairs<S> {
    pub store: S,
}

pub fn router<S: AuthorStore>(store: S) -> Router {
    let state = Arc::new(TheStateOfAffairs { store });
    Router::new()
        .route(AUTHORS_ROUTE, get(authors::<S>))
        .with_state(state)
}

pub async fn start<S: AuthorStore>(store: S, address: &str) -> Result<()> {
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid listen address {address}: {e}"))?;
    info!("Listening on {addr}.");
    axum::Server::bind(&addr)
        .serve(router(store).into_make_service())
        .await?;
    Ok(())
}

async fn authors<S: AuthorStore>(
    State(state): State<Arc<TheStateOfAffairs<S>>>,
) -> AuthorListing {
    info!("Received author list request.");
    show_all_authors(&state.store).await
}
