//! Customer repository - `Clientes`

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::{Customer, Pagination};

/// Customer record from database
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub id_cliente: i32,
    pub nombre: String,
    pub email: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id_cliente: row.id_cliente,
            nombre: row.nombre,
            email: row.email,
        }
    }
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List customers ordered by `IdCliente`.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Customer>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT
                IdCliente AS id_cliente,
                Nombre    AS nombre,
                Email     AS email
            FROM Clientes
            ORDER BY IdCliente
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed customers");
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_field_for_field() {
        let row = CustomerRow {
            id_cliente: 3,
            nombre: "Luis".into(),
            email: Some("luis@example.com".into()),
        };
        let customer = Customer::from(row);
        assert_eq!(customer.id_cliente, 3);
        assert_eq!(customer.nombre, "Luis");
        assert_eq!(customer.email.as_deref(), Some("luis@example.com"));
    }
}
