use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool, Transaction,
};
use time::PrimitiveDateTime;

use crate::include_res;

/// One guestbook entry as stored in the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub created_at: PrimitiveDateTime,
}

/// Handle to the guestbook database.
///
/// Cloning is cheap; every clone shares the same pool. Reads check out a
/// pooled connection for the duration of the query, writes go through a
/// [`StoreTx`]. Nothing here validates input.
#[derive(Clone)]
pub struct MessageStore {
    db_pool: SqlitePool,
}

impl MessageStore {
    pub async fn connect(url: &str, max_connections: u32) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let db_pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::from_pool(db_pool))
    }

    pub fn from_pool(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Creates the `messages` table if it is not there yet.
    pub async fn init_schema(&self) -> sqlx::Result<()> {
        sqlx::query(include_res!(str, "/schema.sql"))
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    /// Starts a write. The insert is only visible once [`StoreTx::commit`]
    /// returns; dropping the handle rolls it back.
    pub async fn begin(&self) -> sqlx::Result<StoreTx> {
        Ok(StoreTx {
            tx: self.db_pool.begin().await?,
        })
    }

    /// Every message, newest first.
    pub async fn list_all(&self) -> sqlx::Result<Vec<Message>> {
        let mut conn = self.db_pool.acquire().await?;
        sqlx::query_as::<_, Message>(
            "SELECT id,name,message,created_at FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut *conn)
        .await
    }

    pub async fn count(&self) -> sqlx::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.db_pool)
            .await?;
        Ok(count)
    }
}

pub struct StoreTx {
    tx: Transaction<'static, Sqlite>,
}

impl StoreTx {
    /// Appends a message stamped with the current time and returns its id.
    pub async fn insert(&mut self, name: &str, message: &str) -> sqlx::Result<i64> {
        let result = sqlx::query("INSERT INTO messages (name,message) VALUES (?,?)")
            .bind(name)
            .bind(message)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn commit(self) -> sqlx::Result<()> {
        self.tx.commit().await
    }
}
