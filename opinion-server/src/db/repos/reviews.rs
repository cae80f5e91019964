//! Web review repository - `WebReviews`

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::{Customer, Pagination, ProductRef, WebReview};

#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id_review: String,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub rating: Option<i32>,
    pub sentimiento_score: Option<f64>,
    pub cliente_id: Option<i32>,
    pub cliente_nombre: Option<String>,
    pub cliente_email: Option<String>,
    pub producto_id: Option<i32>,
    pub producto_nombre: Option<String>,
}

impl From<ReviewRow> for WebReview {
    fn from(row: ReviewRow) -> Self {
        Self {
            id_review: row.id_review,
            fecha: row.fecha,
            comentario: row.comentario,
            rating: row.rating,
            sentimiento_score: row.sentimiento_score,
            cliente: Customer::from_join(row.cliente_id, row.cliente_nombre, row.cliente_email),
            producto: ProductRef::from_join(row.producto_id, row.producto_nombre),
        }
    }
}

/// Web review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews ordered by `IdReview`, then `Fecha`.
    pub async fn list(&self, page: Pagination) -> Result<Vec<WebReview>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT
                r.IdReview         AS id_review,
                r.Fecha            AS fecha,
                r.Comentario       AS comentario,
                r.Rating           AS rating,
                r.SentimientoScore AS sentimiento_score,
                cl.IdCliente       AS cliente_id,
                cl.Nombre          AS cliente_nombre,
                cl.Email           AS cliente_email,
                p.IdProducto       AS producto_id,
                p.Nombre           AS producto_nombre
            FROM WebReviews r
            LEFT JOIN Clientes cl ON cl.IdCliente = r.IdCliente
            LEFT JOIN Productos p ON p.IdProducto = r.IdProducto
            ORDER BY r.IdReview, r.Fecha
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed web reviews");
        Ok(rows.into_iter().map(WebReview::from).collect())
    }
}
