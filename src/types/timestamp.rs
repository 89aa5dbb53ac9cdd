use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

/// A point in time that may be unknown. Stored as milliseconds since the epoch, NULL when
/// unknown.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OptionalTimestamp(pub Option<DateTime<Utc>>);

impl OptionalTimestamp {
    /// Midnight UTC on the given day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))))
    }

    pub fn year(&self) -> Option<i32> {
        self.0.map(|ts| ts.year())
    }

    /// The year as shown in listings, empty when the date is unknown.
    pub fn year_string(&self) -> String {
        match self.year() {
            Some(year) => year.to_string(),
            None => String::new(),
        }
    }
}

impl From<Option<NaiveDate>> for OptionalTimestamp {
    fn from(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self::from_date(date),
            None => Self(None),
        }
    }
}

impl sqlx::Type<sqlx::Sqlite> for OptionalTimestamp {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for OptionalTimestamp {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> sqlx::encode::IsNull {
        match self.0 {
            Some(ts) => {
                args.push(sqlx::sqlite::SqliteArgumentValue::Int64(ts.timestamp_millis()));
                sqlx::encode::IsNull::No
            }
            None => sqlx::encode::IsNull::Yes,
        }
    }
}

impl<'r, DB: sqlx::Database> sqlx::Decode<'r, DB> for OptionalTimestamp
where
    Option<i64>: sqlx::Decode<'r, DB>,
{
    fn decode(
        value: <DB as sqlx::database::HasValueRef<'r>>::ValueRef,
    ) -> Result<Self, Box<dyn std::error::Error + 'static + Send + Sync>> {
        let value = <Option<i64> as sqlx::Decode<DB>>::decode(value)?;
        Ok(Self(value.and_then(|x| Utc.timestamp_millis_opt(x).single())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn year_of_known_date() {
        let ts = OptionalTimestamp::from_date(NaiveDate::from_ymd_opt(1775, 12, 16).unwrap());
        assert_eq!(ts.year(), Some(1775));
        assert_eq!(ts.year_string(), "1775");
    }

    #[test]
    fn epoch_is_a_known_date() {
        let ts = OptionalTimestamp::from_date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(ts.0.map(|x| x.timestamp_millis()), Some(0));
        assert_eq!(ts.year_string(), "1970");
    }

    #[test]
    fn unknown_date_has_empty_year() {
        let ts = OptionalTimestamp::from(None);
        assert_eq!(ts.year(), None);
        assert_eq!(ts.year_string(), "");
    }
}
