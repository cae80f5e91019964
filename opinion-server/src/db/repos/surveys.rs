//! Survey repository - `Encuestas`

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::pool::begin_read_only;
use crate::models::{Classification, Customer, Pagination, ProductRef, Survey};

/// Flat join row for a survey response
#[derive(Debug, Clone, FromRow)]
pub struct SurveyRow {
    pub id_opinion: i32,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub puntaje_satisfaccion: Option<i32>,
    pub sentimiento_score: Option<f64>,
    pub cliente_id: Option<i32>,
    pub cliente_nombre: Option<String>,
    pub cliente_email: Option<String>,
    pub producto_id: Option<i32>,
    pub producto_nombre: Option<String>,
    pub clasificacion_id: Option<i32>,
    pub clasificacion_nombre: Option<String>,
}

impl From<SurveyRow> for Survey {
    fn from(row: SurveyRow) -> Self {
        Self {
            id_opinion: row.id_opinion,
            fecha: row.fecha,
            comentario: row.comentario,
            puntaje_satisfaccion: row.puntaje_satisfaccion,
            sentimiento_score: row.sentimiento_score,
            cliente: Customer::from_join(row.cliente_id, row.cliente_nombre, row.cliente_email),
            producto: ProductRef::from_join(row.producto_id, row.producto_nombre),
            clasificacion: Classification::from_join(
                row.clasificacion_id,
                row.clasificacion_nombre,
            ),
        }
    }
}

/// Survey repository
pub struct SurveyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SurveyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List survey responses ordered by `IdOpinion`, then `Fecha`.
    ///
    /// Classification is optional on a survey; unclassified rows are kept.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Survey>, DbError> {
        let mut tx = begin_read_only(self.pool).await?;
        let rows: Vec<SurveyRow> = sqlx::query_as(
            r#"
            SELECT
                e.IdOpinion           AS id_opinion,
                e.Fecha               AS fecha,
                e.Comentario          AS comentario,
                e.PuntajeSatisfaccion AS puntaje_satisfaccion,
                e.SentimientoScore    AS sentimiento_score,
                cl.IdCliente          AS cliente_id,
                cl.Nombre             AS cliente_nombre,
                cl.Email              AS cliente_email,
                p.IdProducto          AS producto_id,
                p.Nombre              AS producto_nombre,
                cs.IdClasificacion    AS clasificacion_id,
                cs.Nombre             AS clasificacion_nombre
            FROM Encuestas e
            LEFT JOIN Clientes cl ON cl.IdCliente = e.IdCliente
            LEFT JOIN Productos p ON p.IdProducto = e.IdProducto
            LEFT JOIN Clasificaciones cs ON cs.IdClasificacion = e.IdClasificacion
            ORDER BY e.IdOpinion, e.Fecha
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "listed surveys");
        Ok(rows.into_iter().map(Survey::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn unclassified_survey_is_kept() {
        let survey = Survey::from(SurveyRow {
            id_opinion: 12,
            fecha: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            comentario: None,
            puntaje_satisfaccion: Some(5),
            sentimiento_score: None,
            cliente_id: Some(2),
            cliente_nombre: Some("Marta".into()),
            cliente_email: Some("marta@example.com".into()),
            producto_id: Some(1),
            producto_nombre: Some("Monitor".into()),
            clasificacion_id: None,
            clasificacion_nombre: None,
        });
        assert_eq!(survey.id_opinion, 12);
        assert_eq!(survey.puntaje_satisfaccion, Some(5));
        assert!(survey.clasificacion.is_none());
        assert_eq!(
            survey.cliente.and_then(|c| c.email).as_deref(),
            Some("marta@example.com")
        );
    }
}
