use anyhow::Result;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::traits::{AuthorField, AuthorStore, Sort};

pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Order of the author list.
pub const AUTHOR_LIST_SORT: [Sort; 1] = [Sort::ascending(AuthorField::FamilyName)];

/// Fetch every author ordered by family name and format them for display.
pub async fn try_author_list<S: AuthorStore>(store: &S) -> Result<Vec<String>> {
    let authors = store.find(&AUTHOR_LIST_SORT).await?;
    Ok(authors.iter().map(|author| author.to_string()).collect())
}

/// Like [try_author_list], but a failed fetch yields an empty list.
pub async fn get_author_list<S: AuthorStore>(store: &S) -> Vec<String> {
    match try_author_list(store).await {
        Ok(authors) => authors,
        Err(e) => {
            error!("Fetching authors failed: {e:#}");
            Vec::new()
        }
    }
}

/// What gets sent back for an author list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorListing {
    Authors(Vec<String>),
    NoneFound,
}

impl AuthorListing {
    pub fn body(&self) -> String {
        match self {
            AuthorListing::Authors(authors) => authors.join("\n"),
            AuthorListing::NoneFound => NO_AUTHORS_FOUND.to_string(),
        }
    }
}

impl From<Vec<String>> for AuthorListing {
    fn from(authors: Vec<String>) -> Self {
        if authors.is_empty() {
            AuthorListing::NoneFound
        } else {
            AuthorListing::Authors(authors)
        }
    }
}

impl From<Result<Vec<String>>> for AuthorListing {
    fn from(authors: Result<Vec<String>>) -> Self {
        match authors {
            Ok(authors) => authors.into(),
            Err(_) => AuthorListing::NoneFound,
        }
    }
}

impl IntoResponse for AuthorListing {
    fn into_response(self) -> Response {
        match self {
            AuthorListing::Authors(authors) => Json(authors).into_response(),
            AuthorListing::NoneFound => NO_AUTHORS_FOUND.into_response(),
        }
    }
}

pub async fn show_all_authors<S: AuthorStore>(store: &S) -> AuthorListing {
    let listing = AuthorListing::from(get_author_list(store).await);
    if let AuthorListing::Authors(authors) = &listing {
        info!("Sending {} authors.", authors.len());
    } else {
        info!("{NO_AUTHORS_FOUND}.");
    }
    listing
}
