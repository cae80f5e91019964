//! Social comment repository - `Comentarios`
//!
//! Customer, product and source are resolved in the same query. Reference
//! columns come from the joined tables, so a dangling or NULL foreign key
//! surfaces as NULL and the nested object maps to `None`.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::{Comment, Customer, Pagination, ProductRef, Source};

/// Flat join row for a comment
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id_comment: String,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub sentimiento_score: Option<f64>,
    pub cliente_id: Option<i32>,
    pub cliente_nombre: Option<String>,
    pub cliente_email: Option<String>,
    pub producto_id: Option<i32>,
    pub producto_nombre: Option<String>,
    pub fuente_id: Option<i32>,
    pub fuente_nombre: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id_comment: row.id_comment,
            fecha: row.fecha,
            comentario: row.comentario,
            sentimiento_score: row.sentimiento_score,
            cliente: Customer::from_join(row.cliente_id, row.cliente_nombre, row.cliente_email),
            producto: ProductRef::from_join(row.producto_id, row.producto_nombre),
            fuente: Source::from_join(row.fuente_id, row.fuente_nombre),
        }
    }
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List comments ordered by `IdComment`, then `Fecha`.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Comment>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT
                c.IdComment        AS id_comment,
                c.Fecha            AS fecha,
                c.Comentario       AS comentario,
                c.SentimientoScore AS sentimiento_score,
                cl.IdCliente       AS cliente_id,
                cl.Nombre          AS cliente_nombre,
                cl.Email           AS cliente_email,
                p.IdProducto       AS producto_id,
                p.Nombre           AS producto_nombre,
                f.IdFuente         AS fuente_id,
                f.Nombre           AS fuente_nombre
            FROM Comentarios c
            LEFT JOIN Clientes cl ON cl.IdCliente = c.IdCliente
            LEFT JOIN Productos p ON p.IdProducto = c.IdProducto
            LEFT JOIN Fuentes f ON f.IdFuente = c.IdFuente
            ORDER BY c.IdComment, c.Fecha
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed comments");
        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row() -> CommentRow {
        CommentRow {
            id_comment: "C-001".into(),
            fecha: NaiveDate::from_ymd_opt(2024, 5, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            comentario: Some("Muy bueno".into()),
            sentimiento_score: Some(0.9),
            cliente_id: Some(1),
            cliente_nombre: Some("Ana".into()),
            cliente_email: None,
            producto_id: Some(2),
            producto_nombre: Some("Laptop".into()),
            fuente_id: Some(3),
            fuente_nombre: Some("Twitter".into()),
        }
    }

    #[test]
    fn resolves_all_references() {
        let comment = Comment::from(row());
        assert_eq!(comment.cliente.map(|c| c.id_cliente), Some(1));
        assert_eq!(comment.producto.map(|p| p.nombre), Some("Laptop".to_string()));
        assert_eq!(comment.fuente.map(|f| f.id_fuente), Some(3));
    }

    #[test]
    fn dangling_source_becomes_none() {
        let comment = Comment::from(CommentRow {
            fuente_id: None,
            fuente_nombre: None,
            ..row()
        });
        assert!(comment.fuente.is_none());
        assert!(comment.cliente.is_some());
        assert_eq!(comment.id_comment, "C-001");
    }
}
