//! Source repository - `Fuentes`
//!
//! Small reference table, listed without pagination.

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::Source;

#[derive(Debug, Clone, FromRow)]
pub struct SourceRow {
    pub id_fuente: i32,
    pub nombre: String,
}

impl From<SourceRow> for Source {
    fn from(row: SourceRow) -> Self {
        Self {
            id_fuente: row.id_fuente,
            nombre: row.nombre,
        }
    }
}

/// Source repository
pub struct SourceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SourceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every source ordered by `IdFuente`.
    pub async fn list_all(&self) -> Result<Vec<Source>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<SourceRow> = sqlx::query_as(
            r#"
            SELECT IdFuente AS id_fuente, Nombre AS nombre
            FROM Fuentes
            ORDER BY IdFuente
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed sources");
        Ok(rows.into_iter().map(Source::from).collect())
    }
}
