use std::env;

use futures::executor::block_on;
use once_cell::sync::Lazy;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

pub static DB: Lazy<SqlitePool> = Lazy::new(|| {
    let url = env::var("DATABASE_URL").expect("数据库连接字符串未设置");
    block_on(init_pool(&url))
});

async fn init_pool(url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(url)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await.expect("数据库连接失败");
    sqlx::migrate!("./migrations").run(&pool).await.expect("数据库迁移失败");
    pool
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_init_pool() {
        let path = std::env::temp_dir().join("adcast-test-init.db");
        let pool = init_pool(path.to_str().unwrap()).await;
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'ads') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names = tables.iter().map(|(n,)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["ads", "users"]);
    }
}
