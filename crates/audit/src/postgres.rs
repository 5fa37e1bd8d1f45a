use async_trait::async_trait;
use common::SessionId;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Result,
    entry::{AuditEntry, NewAuditEntry, join_tools, split_tools},
    sink::AuditSink,
};

/// PostgreSQL-backed audit sink appending to the `conversations` table.
#[derive(Clone)]
pub struct PostgresAuditSink {
    pool: PgPool,
}

impl PostgresAuditSink {
    /// Creates a new PostgreSQL audit sink.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_entry(row: PgRow) -> Result<AuditEntry> {
        Ok(AuditEntry {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            user_message: row.try_get("user_message")?,
            reasoning: row.try_get("agent_reasoning")?,
            response: row.try_get("agent_response")?,
            tools_used: split_tools(row.try_get("tools_used")?),
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl AuditSink for PostgresAuditSink {
    async fn log(&self, entry: NewAuditEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO conversations
            (session_id, user_message, agent_reasoning, agent_response, tools_used)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.session_id.to_string())
        .bind(&entry.user_message)
        .bind(&entry.reasoning)
        .bind(&entry.response)
        .bind(join_tools(&entry.tools_used))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AuditEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_message, agent_reasoning, agent_response,
                   tools_used, created_at
            FROM conversations
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_entry).collect()
    }

    async fn for_session(&self, session_id: &SessionId, limit: i64) -> Result<Vec<AuditEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_message, agent_reasoning, agent_response,
                   tools_used, created_at
            FROM conversations
            WHERE session_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(session_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_entry).collect()
    }
}
