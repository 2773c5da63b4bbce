/**
 * Database Operations for Message Threads
 *
 * Threads live in `message_threads`; their entries in `thread_messages`,
 * ordered by a serial id so insertion order survives equal timestamps.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Row, Transaction};

use super::store::ThreadStore;
use crate::backend::error::StoreError;
use crate::shared::messaging::{AppendOutcome, MessageThread, ThreadEntry};

/// Thread store backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct PgThreadStore {
    pool: PgPool,
}

impl PgThreadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert the thread row, returning whether it was new
async fn insert_thread(
    tx: &mut Transaction<'_, Postgres>,
    content_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO message_threads (content_id, created_at)
        VALUES ($1, NOW())
        ON CONFLICT (content_id) DO NOTHING
        "#,
    )
    .bind(content_id)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected() == 1)
}

async fn insert_entry(
    tx: &mut Transaction<'_, Postgres>,
    content_id: &str,
    entry: &ThreadEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO thread_messages (content_id, author_id, body, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(content_id)
    .bind(&entry.author_id)
    .bind(&entry.text)
    .bind(entry.timestamp)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[async_trait]
impl ThreadStore for PgThreadStore {
    async fn append(&self, content_id: &str, entry: ThreadEntry) -> Result<AppendOutcome, StoreError> {
        let mut tx = self.pool.begin().await?;
        let created = insert_thread(&mut tx, content_id).await?;
        insert_entry(&mut tx, content_id, &entry).await?;
        tx.commit().await?;

        Ok(if created {
            AppendOutcome::Created
        } else {
            AppendOutcome::Appended
        })
    }

    async fn fetch(&self, content_id: &str) -> Result<Option<MessageThread>, StoreError> {
        let exists = sqlx::query(
            r#"
            SELECT content_id FROM message_threads WHERE content_id = $1
            "#,
        )
        .bind(content_id)
        .fetch_optional(&self.pool)
        .await?;

        if exists.is_none() {
            return Ok(None);
        }

        let rows = sqlx::query(
            r#"
            SELECT author_id, body, created_at
            FROM thread_messages
            WHERE content_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(content_id)
        .fetch_all(&self.pool)
        .await?;

        let messages = rows
            .into_iter()
            .map(|row| ThreadEntry {
                author_id: row.get("author_id"),
                text: row.get("body"),
                timestamp: row.get::<DateTime<Utc>, _>("created_at"),
            })
            .collect();

        Ok(Some(MessageThread {
            content_id: content_id.to_string(),
            messages,
        }))
    }

    async fn create(&self, content_id: &str, seed: Vec<ThreadEntry>) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        if !insert_thread(&mut tx, content_id).await? {
            tx.rollback().await?;
            return Ok(false);
        }
        for entry in &seed {
            insert_entry(&mut tx, content_id, entry).await?;
        }
        tx.commit().await?;
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
