use std::path::PathBuf;

use anyhow::Result;
use dotenvy::{dotenv, var as envar};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Pool, SqlitePool,
};
use tracing::info;

use crate::{config::Config, traits::CreateTable, types::author::Author};

/// `DATABASE_URL` (from the environment or a `.env` file) wins over the configured location.
pub fn database_location(config: &Config) -> PathBuf {
    dotenv().ok();
    match envar("DATABASE_URL").ok() {
        Some(db_url) => PathBuf::from(db_url),
        None => config.database_location.clone(),
    }
}

pub async fn connect_to_db(db_location: PathBuf) -> Result<SqlitePool> {
    info!("Opening database at {}.", db_location.display());
    Ok(Pool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_location)
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true),
    )
    .await?)
}

pub async fn create_tables(conn: &SqlitePool) -> Result<()> {
    Author::create_table(conn).await
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn database_url_overrides_config() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "catalog.db");
            assert_eq!(
                database_location(&Config::default()),
                PathBuf::from("catalog.db")
            );
            Ok(())
        });
    }
}
