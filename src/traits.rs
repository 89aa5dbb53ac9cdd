use std::future::Future;

use anyhow::Result;
use sqlx::sqlite::SqliteQueryResult;

use crate::types::author::Author;

pub trait DbTable {
    const TABLE_NAME: &'static str;
}

#[allow(async_fn_in_trait)]
pub trait CreateTable {
    async fn create_table(conn: &sqlx::SqlitePool) -> Result<()>;
}

#[allow(async_fn_in_trait)]
pub trait Insertable {
    async fn insert(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult>
    where
        Self: Sized;
}

/// Author columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    FirstName,
    FamilyName,
    DateOfBirth,
    DateOfDeath,
}

impl AuthorField {
    pub fn column(&self) -> &'static str {
        match self {
            AuthorField::FirstName => "first_name",
            AuthorField::FamilyName => "family_name",
            AuthorField::DateOfBirth => "date_of_birth",
            AuthorField::DateOfDeath => "date_of_death",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: AuthorField,
    pub order: SortOrder,
}

impl Sort {
    pub const fn ascending(field: AuthorField) -> Self {
        Self {
            field,
            order: SortOrder::Ascending,
        }
    }
}

/// Where author records come from.
pub trait AuthorStore: Send + Sync + 'static {
    /// All authors that haven't been deleted, ordered by `sort` (first key first).
    fn find(&self, sort: &[Sort]) -> impl Future<Output = Result<Vec<Author>>> + Send;
}
