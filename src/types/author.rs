use std::fmt::Display;

use anyhow::Result;
use sqlx::{sqlite::SqliteQueryResult, FromRow};
use tracing::debug;

use crate::{
    traits::{AuthorStore, CreateTable, DbTable, Insertable, Sort},
    types::{timestamp::OptionalTimestamp, uuid::Uuid},
};

#[derive(Default, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    pub id:            Uuid,
    pub first_name:    Option<String>,
    pub family_name:   Option<String>,
    pub date_of_birth: OptionalTimestamp,
    pub date_of_death: OptionalTimestamp,
    pub deleted:       bool,
}

impl Author {
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        date_of_birth: OptionalTimestamp,
        date_of_death: OptionalTimestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: Some(first_name.into()).filter(|x: &String| !x.is_empty()),
            family_name: Some(family_name.into()).filter(|x: &String| !x.is_empty()),
            date_of_birth,
            date_of_death,
            deleted: false,
        }
    }

    /// `"{family_name}, {first_name}"`, or an empty string unless both names are known.
    pub fn name(&self) -> String {
        let first_name = self.first_name.as_deref().unwrap_or_default();
        let family_name = self.family_name.as_deref().unwrap_or_default();
        if first_name.is_empty() || family_name.is_empty() {
            return String::new();
        }
        format!("{family_name}, {first_name}")
    }

    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            self.date_of_birth.year_string(),
            self.date_of_death.year_string()
        )
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// The line shown in the author list.
impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name(), self.lifespan())
    }
}

impl DbTable for Author {
    const TABLE_NAME: &'static str = "authors";
}

impl CreateTable for Author {
    async fn create_table(conn: &sqlx::SqlitePool) -> Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                first_name TEXT,
                family_name TEXT,
                date_of_birth INTEGER,
                date_of_death INTEGER,
                deleted BOOL DEFAULT FALSE
            );"#,
            Self::TABLE_NAME
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for Author {
    async fn insert(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult> {
        Ok(sqlx::query(&format!(
            r#"
            INSERT INTO {} ( id, first_name, family_name, date_of_birth, date_of_death, deleted )
            VALUES ( ?1, ?2, ?3, ?4, ?5, ?6 )
            "#,
            Self::TABLE_NAME
        ))
        .bind(&self.id)
        .bind(&self.first_name)
        .bind(&self.family_name)
        .bind(&self.date_of_birth)
        .bind(&self.date_of_death)
        .bind(self.deleted)
        .execute(conn)
        .await?)
    }
}

impl AuthorStore for sqlx::SqlitePool {
    async fn find(&self, sort: &[Sort]) -> Result<Vec<Author>> {
        let mut query = format!("SELECT * FROM {} WHERE deleted = FALSE", Author::TABLE_NAME);
        if !sort.is_empty() {
            let order_by = sort
                .iter()
                .map(|x| format!("{} {}", x.field.column(), x.order.keyword()))
                .collect::<Vec<_>>()
                .join(", ");
            query.push_str(&format!(" ORDER BY {order_by}"));
        }
        debug!("{query}");
        Ok(sqlx::query_as::<_, Author>(&query).fetch_all(self).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn author(first_name: &str, family_name: &str, born: (i32, u32, u32), died: (i32, u32, u32)) -> Author {
        Author::new(
            first_name,
            family_name,
            OptionalTimestamp::from_date(NaiveDate::from_ymd_opt(born.0, born.1, born.2).unwrap()),
            OptionalTimestamp::from_date(NaiveDate::from_ymd_opt(died.0, died.1, died.2).unwrap()),
        )
    }

    #[test]
    fn formats_full_name_and_lifespan() {
        let austen = author("Jane", "Austen", (1775, 12, 16), (1817, 7, 18));
        assert_eq!(austen.name(), "Austen, Jane");
        assert_eq!(austen.lifespan(), "1775 - 1817");
        assert_eq!(austen.to_string(), "Austen, Jane : 1775 - 1817");
    }

    #[test]
    fn missing_first_name_drops_whole_name() {
        let austen = author("", "Austen", (1775, 12, 16), (1817, 7, 18));
        assert_eq!(austen.to_string(), " : 1775 - 1817");
    }

    #[test]
    fn missing_family_name_drops_whole_name() {
        let jane = author("Jane", "", (1775, 12, 16), (1817, 7, 18));
        assert_eq!(jane.to_string(), " : 1775 - 1817");
    }

    #[test]
    fn missing_both_names() {
        let nobody = author("", "", (1775, 12, 16), (1817, 7, 18));
        assert_eq!(nobody.to_string(), " : 1775 - 1817");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut austen = author("Jane", "Austen", (1775, 12, 16), (1817, 7, 18));
        austen.first_name = Some(String::new());
        assert_eq!(austen.name(), "");
    }

    #[test]
    fn unknown_death_leaves_year_blank() {
        let mut ghosh = author("Amitav", "Ghosh", (1956, 7, 11), (1956, 7, 11));
        ghosh.date_of_death = OptionalTimestamp(None);
        assert_eq!(ghosh.to_string(), "Ghosh, Amitav : 1956 - ");
    }

    #[test]
    fn url_contains_id() {
        let austen = author("Jane", "Austen", (1775, 12, 16), (1817, 7, 18));
        assert_eq!(austen.url(), format!("/catalog/author/{}", austen.id.0));
    }
}
