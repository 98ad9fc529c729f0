use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{Todo, TodoPayload};

/// Storage for todo rows. Every method issues exactly one statement.
///
/// Ids arrive as the raw path segment and are bound unconverted.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error>;

    /// Zero or one rows whose id equals `id`.
    async fn find_by_id(&self, id: &str) -> Result<Vec<Todo>, sqlx::Error>;

    /// Returns the id assigned by the database.
    async fn insert(&self, payload: &TodoPayload) -> Result<i64, sqlx::Error>;

    /// Returns the number of rows changed. Zero is not an error.
    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<u64, sqlx::Error>;

    /// Returns the number of rows removed. Zero is not an error.
    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct SqliteTodoRepository {
    db: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, content, status FROM todo")
            .fetch_all(&self.db)
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, content, status FROM todo WHERE id = ?1")
            .bind(id)
            .fetch_all(&self.db)
            .await
    }

    async fn insert(&self, payload: &TodoPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO todo (content, status) VALUES (?1, ?2)")
            .bind(&payload.content)
            .bind(payload.status)
            .execute(&self.db)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todo
            SET content = ?1,
                status = ?2
            WHERE id = ?3
            "#,
        )
        .bind(&payload.content)
        .bind(payload.status)
        .bind(id)
        .execute(&self.db)
        .await?
        .rows_affected();

        Ok(result)
    }

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();

        Ok(result)
    }
}
