//! SQLite persistence for the `todos` table.
//!
//! No pool and no long-lived handle: every operation opens its own connection, and the
//! connection is dropped (closed) when the operation returns, on success or error. Writes run
//! inside a transaction that is committed before the operation returns.

use crate::error::AppError;
use crate::model::Todo;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};

const CREATE_TODOS: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        completed INTEGER NOT NULL DEFAULT 0
    )
"#;

#[derive(Clone, Debug)]
pub struct TodoStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl TodoStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection, AppError> {
        Ok(self.options.connect().await?)
    }

    /// Create the parent directory and the `todos` table if absent. Safe to call on every start.
    pub async fn initialize(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut conn = self.connect().await?;
        tracing::debug!(sql = %CREATE_TODOS, "query");
        sqlx::query(CREATE_TODOS).execute(&mut conn).await?;
        tracing::info!(path = %self.path.display(), "todos table ready");
        Ok(())
    }

    /// All todos, most recently inserted first.
    pub async fn list_all(&self) -> Result<Vec<Todo>, AppError> {
        let sql = "SELECT id, title, completed FROM todos ORDER BY rowid DESC";
        let mut conn = self.connect().await?;
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Todo>(sql).fetch_all(&mut conn).await?;
        Ok(rows)
    }

    /// Insert a new todo with a fresh v4 UUID and `completed = false`.
    pub async fn create(&self, title: &str) -> Result<Todo, AppError> {
        let todo = Todo {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
        };
        let sql = "INSERT INTO todos (id, title, completed) VALUES (?, ?, ?)";
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;
        tracing::debug!(sql = %sql, id = %todo.id, "query (tx)");
        sqlx::query(sql)
            .bind(&todo.id)
            .bind(&todo.title)
            .bind(todo.completed)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(todo)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Todo>, AppError> {
        let sql = "SELECT id, title, completed FROM todos WHERE id = ?";
        let mut conn = self.connect().await?;
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Todo>(sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        Ok(row)
    }

    /// Overwrite the supplied fields; `None` keeps the stored value. Returns the resulting row,
    /// or `None` when no todo has this id (nothing is written in that case).
    pub async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Option<Todo>, AppError> {
        let sql = "UPDATE todos SET title = COALESCE(?, title), completed = COALESCE(?, completed) \
                   WHERE id = ? RETURNING id, title, completed";
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;
        tracing::debug!(sql = %sql, id = %id, "query (tx)");
        let row = sqlx::query_as::<_, Todo>(sql)
            .bind(title)
            .bind(completed)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if row.is_some() {
            tx.commit().await?;
        }
        Ok(row)
    }

    /// Hard delete. Returns the removed todo, or `None` when no todo has this id.
    pub async fn delete(&self, id: &str) -> Result<Option<Todo>, AppError> {
        let sql = "DELETE FROM todos WHERE id = ? RETURNING id, title, completed";
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;
        tracing::debug!(sql = %sql, id = %id, "query (tx)");
        let row = sqlx::query_as::<_, Todo>(sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if row.is_some() {
            tx.commit().await?;
        }
        Ok(row)
    }

    /// Round-trip to the database file, for readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        Ok(())
    }
}
