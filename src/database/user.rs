use chrono::{NaiveDateTime, Utc};
use sqlx::sqlite::SqliteQueryResult;
use sqlx::Result;
use tracing::Level;

use super::db::DB;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct UserEntity {
    /// 会话 ID
    pub chat_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// 注册时间
    pub registered_at: NaiveDateTime,
}

impl UserEntity {
    /// 注册用户，如果已经注册过则不做任何事
    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn create(
        chat_id: i64,
        first_name: &str,
        last_name: Option<&str>,
        username: Option<&str>,
    ) -> Result<SqliteQueryResult> {
        let now = Utc::now().naive_utc();
        sqlx::query(
            "INSERT OR IGNORE INTO users (chat_id, first_name, last_name, username, registered_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(chat_id)
        .bind(first_name)
        .bind(last_name)
        .bind(username)
        .bind(now)
        .execute(&*DB)
        .await
    }

    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn get(chat_id: i64) -> Result<Option<UserEntity>> {
        sqlx::query_as(
            "SELECT chat_id, first_name, last_name, username, registered_at
             FROM users WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(&*DB)
        .await
    }

    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn delete(chat_id: i64) -> Result<SqliteQueryResult> {
        sqlx::query("DELETE FROM users WHERE chat_id = ?").bind(chat_id).execute(&*DB).await
    }

    #[tracing::instrument(level = Level::DEBUG)]
    pub async fn all() -> Result<Vec<UserEntity>> {
        sqlx::query_as(
            "SELECT chat_id, first_name, last_name, username, registered_at
             FROM users ORDER BY registered_at",
        )
        .fetch_all(&*DB)
        .await
    }
}
