use sqlx::sqlite::SqliteQueryResult;
use sqlx::Result;
use tracing::Level;

use super::db::DB;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct AdEntity {
    pub id: i64,
    /// 广告正文
    pub ad: String,
}

impl AdEntity {
    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn create(ad: &str) -> Result<SqliteQueryResult> {
        sqlx::query("INSERT INTO ads (ad) VALUES (?)").bind(ad).execute(&*DB).await
    }

    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn all() -> Result<Vec<AdEntity>> {
        sqlx::query_as("SELECT id, ad FROM ads ORDER BY id").fetch_all(&*DB).await
    }
}
