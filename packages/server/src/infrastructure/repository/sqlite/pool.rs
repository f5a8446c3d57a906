//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time, so writes go through a
//! single-connection pool while reads use a multi-connection pool.

use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Maximum number of concurrent read connections.
const MAX_READ_CONNECTIONS: u32 = 8;

/// Split read/write pool for SQLite with WAL mode.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open (creating if missing) the database at `database_url` and run migrations.
    ///
    /// Both pools use WAL journal mode, foreign key enforcement, and a
    /// 5-second busy timeout.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(base_opts)
            .await?;

        // Schema must exist before read-only connections open the file
        sqlx::migrate!("./migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(MAX_READ_CONNECTIONS)
            .connect_with(read_opts)
            .await?;

        tracing::info!("Connected to SQLite database at {}", database_url);
        Ok(Self { reader, writer })
    }

    /// Close both pools, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.reader.close().await;
        self.writer.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_pool(dir: &tempfile::TempDir) -> DatabasePool {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        DatabasePool::connect(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_pool_creates_tables() {
        // テスト項目: 接続時にマイグレーションが実行されテーブルが作成される
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();

        // when (操作):
        let pool = temp_pool(&dir).await;

        // then (期待する結果):
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(names, vec!["chat", "message"]);
    }

    #[tokio::test]
    async fn test_pool_foreign_keys_enforced() {
        // テスト項目: 外部キー制約が有効になっている
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir).await;

        // when (操作):
        let result: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        // テスト項目: WAL モードで接続される
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir).await;

        // when (操作):
        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.0.to_lowercase(), "wal");
    }
}
