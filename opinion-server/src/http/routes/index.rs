//! Root endpoint - static description of the data routes
//!
//! Never touches the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// One data route exposed by the API
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub description: &'static str,
    pub paginated: bool,
}

/// The six data routes, in the order they are documented
pub const ENDPOINTS: [Endpoint; 6] = [
    Endpoint {
        path: "/clientes",
        description: "Customers ordered by IdCliente",
        paginated: true,
    },
    Endpoint {
        path: "/productos",
        description: "Products with their category, ordered by IdProducto",
        paginated: true,
    },
    Endpoint {
        path: "/fuentes",
        description: "All comment sources",
        paginated: false,
    },
    Endpoint {
        path: "/comentarios",
        description: "Social media comments with customer, product and source",
        paginated: true,
    },
    Endpoint {
        path: "/encuestas",
        description: "Survey responses with customer, product and classification",
        paginated: true,
    },
    Endpoint {
        path: "/reviews",
        description: "Web reviews with customer and product",
        paginated: true,
    },
];

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ApiIndex {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [Endpoint],
}

impl ApiIndex {
    pub fn current() -> Self {
        Self {
            name: "Opinion API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: &ENDPOINTS,
        }
    }
}

/// GET /
async fn index() -> Json<ApiIndex> {
    Json(ApiIndex::current())
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_six_data_routes() {
        let Json(body) = index().await;
        let paths: Vec<_> = body.endpoints.iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            [
                "/clientes",
                "/productos",
                "/fuentes",
                "/comentarios",
                "/encuestas",
                "/reviews"
            ]
        );
    }

    #[test]
    fn only_sources_are_unpaginated() {
        let unpaginated: Vec<_> = ENDPOINTS
            .iter()
            .filter(|e| !e.paginated)
            .map(|e| e.path)
            .collect();
        assert_eq!(unpaginated, ["/fuentes"]);
    }
}
