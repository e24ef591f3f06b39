//! PostgreSQL Document Store
//!
//! All kinds share one `documents` table keyed by a `BIGSERIAL` id, with
//! the record body in a `JSONB` column and the kind as a plain tag.

use crate::domain::entities::{Record, Stored};
use crate::domain::repository::DocumentStore;
use crate::error::{MarinaError, MarinaResult};
use kernel::id::Id;
use sqlx::PgPool;
use sqlx::types::Json;

/// PostgreSQL-backed document store
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for PgDocumentStore {
    async fn insert<R: Record>(&self, record: &R) -> MarinaResult<Id<R>> {
        let raw = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO documents (kind, body)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(R::KIND)
        .bind(Json(record))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(kind = R::KIND, id = raw, "Document inserted");

        Id::new(raw).ok_or_else(|| MarinaError::Internal(format!("invalid {} id {raw}", R::KIND)))
    }

    async fn get<R: Record>(&self, id: Id<R>) -> MarinaResult<Option<Stored<R>>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE kind = $1 AND id = $2",
        )
        .bind(R::KIND)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentRow::into_stored::<R>).transpose()
    }

    async fn list<R: Record>(&self) -> MarinaResult<Vec<Stored<R>>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE kind = $1 ORDER BY id",
        )
        .bind(R::KIND)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(DocumentRow::into_stored::<R>)
            .collect()
    }

    async fn update<R: Record>(&self, id: Id<R>, record: &R) -> MarinaResult<bool> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE documents
            SET body = $3, updated_at = NOW()
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(R::KIND)
        .bind(id.get())
        .bind(Json(record))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn delete<R: Record>(&self, id: Id<R>) -> MarinaResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM documents WHERE kind = $1 AND id = $2")
            .bind(R::KIND)
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

// Row type for sqlx
#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: i64,
    body: Json<serde_json::Value>,
}

impl DocumentRow {
    fn into_stored<R: Record>(self) -> MarinaResult<Stored<R>> {
        let id = Id::new(self.id)
            .ok_or_else(|| MarinaError::Internal(format!("invalid {} id {}", R::KIND, self.id)))?;
        let record = serde_json::from_value(self.body.0)?;
        Ok(Stored::new(id, record))
    }
}
