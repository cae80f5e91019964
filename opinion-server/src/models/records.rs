//! Response records
//!
//! Each record is the fixed field set one endpoint returns. Field names
//! match the wire format consumed by the ETL worker: PascalCase scalars,
//! lowercase nested objects. Optional values serialize as `null`, never
//! omitted.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Row of `/clientes`, also nested as `cliente` in opinion records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub id_cliente: i32,
    pub nombre: String,
    pub email: Option<String>,
}

impl Customer {
    /// Build from LEFT JOIN columns; `None` when the referent is missing.
    pub fn from_join(
        id_cliente: Option<i32>,
        nombre: Option<String>,
        email: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            id_cliente: id_cliente?,
            nombre: nombre?,
            email,
        })
    }
}

/// Row of `/productos`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id_producto: i32,
    pub nombre: String,
    pub id_categoria: Option<i32>,
    /// Category name, `null` when the product has no (or an unknown) category
    pub categoria: Option<String>,
}

/// Product as nested in opinion records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRef {
    pub id_producto: i32,
    pub nombre: String,
}

impl ProductRef {
    pub fn from_join(id_producto: Option<i32>, nombre: Option<String>) -> Option<Self> {
        Some(Self {
            id_producto: id_producto?,
            nombre: nombre?,
        })
    }
}

/// Row of `/fuentes`, also nested as `fuente` in comments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Source {
    pub id_fuente: i32,
    pub nombre: String,
}

impl Source {
    pub fn from_join(id_fuente: Option<i32>, nombre: Option<String>) -> Option<Self> {
        Some(Self {
            id_fuente: id_fuente?,
            nombre: nombre?,
        })
    }
}

/// Survey classification, nested as `clasificacion`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Classification {
    pub id_clasificacion: i32,
    pub nombre: String,
}

impl Classification {
    pub fn from_join(id_clasificacion: Option<i32>, nombre: Option<String>) -> Option<Self> {
        Some(Self {
            id_clasificacion: id_clasificacion?,
            nombre: nombre?,
        })
    }
}

/// Row of `/comentarios`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Comment {
    pub id_comment: String,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub sentimiento_score: Option<f64>,
    #[serde(rename = "cliente")]
    pub cliente: Option<Customer>,
    #[serde(rename = "producto")]
    pub producto: Option<ProductRef>,
    #[serde(rename = "fuente")]
    pub fuente: Option<Source>,
}

/// Row of `/encuestas`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Survey {
    pub id_opinion: i32,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub puntaje_satisfaccion: Option<i32>,
    pub sentimiento_score: Option<f64>,
    #[serde(rename = "cliente")]
    pub cliente: Option<Customer>,
    #[serde(rename = "producto")]
    pub producto: Option<ProductRef>,
    #[serde(rename = "clasificacion")]
    pub clasificacion: Option<Classification>,
}

/// Row of `/reviews`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebReview {
    pub id_review: String,
    pub fecha: NaiveDateTime,
    pub comentario: Option<String>,
    pub rating: Option<i32>,
    pub sentimiento_score: Option<f64>,
    #[serde(rename = "cliente")]
    pub cliente: Option<Customer>,
    #[serde(rename = "producto")]
    pub producto: Option<ProductRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn fecha() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn customer_wire_names() {
        let c = Customer {
            id_cliente: 7,
            nombre: "Ana".into(),
            email: None,
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            json!({"IdCliente": 7, "Nombre": "Ana", "Email": null})
        );
    }

    #[test]
    fn join_helpers_need_id_and_name() {
        assert!(Customer::from_join(None, None, None).is_none());
        assert!(ProductRef::from_join(Some(1), None).is_none());
        assert_eq!(
            Source::from_join(Some(2), Some("Twitter".into())),
            Some(Source {
                id_fuente: 2,
                nombre: "Twitter".into()
            })
        );
    }

    #[test]
    fn missing_references_serialize_as_null() {
        let s = Survey {
            id_opinion: 10,
            fecha: fecha(),
            comentario: None,
            puntaje_satisfaccion: Some(4),
            sentimiento_score: None,
            cliente: None,
            producto: ProductRef::from_join(Some(3), Some("Laptop".into())),
            clasificacion: None,
        };
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "IdOpinion": 10,
                "Fecha": "2024-03-01T10:15:00",
                "Comentario": null,
                "PuntajeSatisfaccion": 4,
                "SentimientoScore": null,
                "cliente": null,
                "producto": {"IdProducto": 3, "Nombre": "Laptop"},
                "clasificacion": null
            })
        );
    }

    #[test]
    fn comment_nests_lowercase_objects() {
        let c = Comment {
            id_comment: "C001".into(),
            fecha: fecha(),
            comentario: Some("great".into()),
            sentimiento_score: Some(0.75),
            cliente: Customer::from_join(Some(1), Some("Ana".into()), Some("ana@x.com".into())),
            producto: None,
            fuente: Source::from_join(Some(2), Some("Twitter".into())),
        };
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["IdComment"], "C001");
        assert_eq!(value["SentimientoScore"], 0.75);
        assert_eq!(value["cliente"]["Email"], "ana@x.com");
        assert_eq!(value["producto"], serde_json::Value::Null);
        assert_eq!(value["fuente"]["Nombre"], "Twitter");
    }
}
