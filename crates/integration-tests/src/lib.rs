//! Integration tests for Shelf.
//!
//! The fixture here is an in-process HTTP server implementing the
//! product collection resource the store client talks to:
//!
//! - `GET /products` - full list, insertion order
//! - `GET /products/{id}` - single product or 404
//! - `POST /products` - create, assigns the next ID
//! - `PUT /products/{id}` - replace an existing product or 404
//! - `DELETE /products/{id}` - remove or 404
//!
//! Tests in `tests/` run the real [`shelf_client`] against it over
//! loopback.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::Mutex;
use url::Url;

use shelf_core::{Product, ProductId};

/// Backing store behind the fixture endpoints.
#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

type Shared = Arc<Mutex<Catalog>>;

/// An in-process product store listening on loopback.
///
/// The server task is aborted when the fixture is dropped.
#[derive(Debug)]
pub struct FixtureStore {
    addr: SocketAddr,
    catalog: Shared,
    server: tokio::task::JoinHandle<()>,
}

impl FixtureStore {
    /// Bind an ephemeral port and serve `initial` as the catalog.
    ///
    /// # Panics
    ///
    /// Panics if the loopback listener cannot be bound.
    pub async fn spawn(initial: Vec<Product>) -> Self {
        let next_id = initial
            .iter()
            .filter_map(|p| p.id.map(i64::from))
            .max()
            .unwrap_or(0)
            + 1;
        let catalog: Shared = Arc::new(Mutex::new(Catalog {
            products: initial,
            next_id,
        }));

        let app = Router::new()
            .route("/products", get(list).post(create))
            .route(
                "/products/{id}",
                get(get_one).put(update).delete(remove),
            )
            .with_state(Arc::clone(&catalog));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            catalog,
            server,
        }
    }

    /// Collection URL for pointing a store client at this fixture.
    ///
    /// # Panics
    ///
    /// Panics if the loopback address does not form a valid URL.
    #[must_use]
    pub fn collection_url(&self) -> Url {
        Url::parse(&format!("http://{}/products", self.addr)).expect("loopback URL")
    }

    /// Snapshot of the server-side catalog, in insertion order.
    pub async fn products(&self) -> Vec<Product> {
        self.catalog.lock().await.products.clone()
    }
}

impl Drop for FixtureStore {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn list(State(catalog): State<Shared>) -> Json<Vec<Product>> {
    Json(catalog.lock().await.products.clone())
}

async fn get_one(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    let id = ProductId::new(id);
    catalog
        .lock()
        .await
        .products
        .iter()
        .find(|p| p.id == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(State(catalog): State<Shared>, Json(mut product): Json<Product>) -> Json<Product> {
    let mut catalog = catalog.lock().await;
    product.id = Some(ProductId::new(catalog.next_id));
    catalog.next_id += 1;
    catalog.products.push(product.clone());
    Json(product)
}

async fn update(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
    Json(mut product): Json<Product>,
) -> Result<Json<Product>, StatusCode> {
    let id = ProductId::new(id);
    product.id = Some(id);

    let mut catalog = catalog.lock().await;
    let Some(slot) = catalog.products.iter_mut().find(|p| p.id == Some(id)) else {
        return Err(StatusCode::NOT_FOUND);
    };
    *slot = product.clone();
    Ok(Json(product))
}

async fn remove(State(catalog): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let id = ProductId::new(id);
    let mut catalog = catalog.lock().await;
    let before = catalog.products.len();
    catalog.products.retain(|p| p.id != Some(id));

    if catalog.products.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}
