//! Product repository - `Productos` joined with `Categorias`

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::{Pagination, Product};

/// Product with its category name
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id_producto: i32,
    pub nombre: String,
    pub id_categoria: Option<i32>,
    pub categoria: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id_producto: row.id_producto,
            nombre: row.nombre,
            id_categoria: row.id_categoria,
            categoria: row.categoria,
        }
    }
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products ordered by `IdProducto`.
    ///
    /// LEFT JOIN keeps products whose category is NULL or unknown.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Product>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT
                p.IdProducto  AS id_producto,
                p.Nombre      AS nombre,
                p.IdCategoria AS id_categoria,
                cat.Nombre    AS categoria
            FROM Productos p
            LEFT JOIN Categorias cat ON cat.IdCategoria = p.IdCategoria
            ORDER BY p.IdProducto
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_keeps_id() {
        let product = Product::from(ProductRow {
            id_producto: 4,
            nombre: "Tablet".into(),
            id_categoria: Some(99),
            categoria: None,
        });
        assert_eq!(product.id_categoria, Some(99));
        assert!(product.categoria.is_none());
    }
}
