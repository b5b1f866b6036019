//! End-to-end tests for the store client against the fixture server.

use rust_decimal::Decimal;

use shelf_client::{ProductStoreClient, StoreConfig, StoreError};
use shelf_core::{Product, ProductDraft, ProductId};
use shelf_integration_tests::FixtureStore;

fn product(id: i64, name: &str, price: i64, description: &str) -> Product {
    Product {
        id: Some(ProductId::new(id)),
        name: name.to_string(),
        price: Decimal::from(price),
        description: description.to_string(),
    }
}

fn draft(name: &str, price: &str, description: &str) -> ProductDraft {
    ProductDraft::from_input(name, price, description).expect("valid draft input")
}

async fn client_for(fixture: &FixtureStore) -> ProductStoreClient {
    ProductStoreClient::new(&StoreConfig::new(fixture.collection_url()))
        .expect("build store client")
}

#[tokio::test]
async fn list_all_returns_server_order() {
    let fixture = FixtureStore::spawn(vec![
        product(1, "Apple", 2, "fruit"),
        product(2, "Bread", 3, "bakery item"),
    ])
    .await;
    let client = client_for(&fixture).await;

    let products = client.list_all().await.expect("list products");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Apple");
    assert_eq!(products[1].name, "Bread");
}

#[tokio::test]
async fn get_by_id_fetches_single_product() {
    let fixture = FixtureStore::spawn(vec![product(1, "Apple", 2, "fruit")]).await;
    let client = client_for(&fixture).await;

    let fetched = client.get_by_id(ProductId::new(1)).await.expect("get product");
    assert_eq!(fetched.name, "Apple");
    assert_eq!(fetched.price, Decimal::from(2));
}

#[tokio::test]
async fn get_by_id_missing_yields_not_found() {
    let fixture = FixtureStore::spawn(vec![]).await;
    let client = client_for(&fixture).await;

    let err = client.get_by_id(ProductId::new(999)).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == ProductId::new(999)));
}

#[tokio::test]
async fn create_assigns_backend_id() {
    let fixture = FixtureStore::spawn(vec![product(1, "Apple", 2, "fruit")]).await;
    let client = client_for(&fixture).await;

    let created = client
        .create(&draft("Cheese", "5.25", "dairy"))
        .await
        .expect("create product");

    assert_eq!(created.id, Some(ProductId::new(2)));
    assert_eq!(created.price, Decimal::new(525, 2));

    let server_side = fixture.products().await;
    assert_eq!(server_side.len(), 2);
    assert_eq!(server_side[1].name, "Cheese");
}

#[tokio::test]
async fn create_with_invalid_draft_never_reaches_server() {
    let fixture = FixtureStore::spawn(vec![]).await;
    let client = client_for(&fixture).await;

    let bad = ProductDraft {
        name: "X".to_string(),
        price: Decimal::from(-1),
        description: "d".to_string(),
    };
    let err = client.create(&bad).await.unwrap_err();

    assert!(matches!(err, StoreError::Invalid(_)));
    assert!(fixture.products().await.is_empty());
}

#[tokio::test]
async fn update_replaces_existing_record() {
    let fixture = FixtureStore::spawn(vec![product(1, "Apple", 2, "fruit")]).await;
    let client = client_for(&fixture).await;

    let updated = client
        .update(ProductId::new(1), &draft("Apple", "2.50", "crisp fruit"))
        .await
        .expect("update product");

    assert_eq!(updated.id, Some(ProductId::new(1)));
    assert_eq!(updated.description, "crisp fruit");

    let server_side = fixture.products().await;
    assert_eq!(server_side.len(), 1);
    assert_eq!(server_side[0].price, Decimal::new(250, 2));
}

#[tokio::test]
async fn update_missing_record_is_a_status_error() {
    let fixture = FixtureStore::spawn(vec![]).await;
    let client = client_for(&fixture).await;

    let err = client
        .update(ProductId::new(7), &draft("Ghost", "1", "gone"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 404, .. }));
}

#[tokio::test]
async fn upsert_routes_on_id_presence() {
    let fixture = FixtureStore::spawn(vec![product(1, "Apple", 2, "fruit")]).await;
    let client = client_for(&fixture).await;

    // No id: create.
    let created = client
        .upsert(Product {
            id: None,
            name: "Bread".to_string(),
            price: Decimal::from(3),
            description: "bakery item".to_string(),
        })
        .await
        .expect("upsert create");
    assert_eq!(created.id, Some(ProductId::new(2)));

    // With id: update in place, no new record.
    let updated = client
        .upsert(product(1, "Apple", 4, "fruit"))
        .await
        .expect("upsert update");
    assert_eq!(updated.price, Decimal::from(4));
    assert_eq!(fixture.products().await.len(), 2);
}

#[tokio::test]
async fn delete_removes_record() {
    let fixture = FixtureStore::spawn(vec![
        product(1, "Apple", 2, "fruit"),
        product(2, "Bread", 3, "bakery item"),
    ])
    .await;
    let client = client_for(&fixture).await;

    client
        .delete_by_id(ProductId::new(1))
        .await
        .expect("delete product");

    let remaining = fixture.products().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, Some(ProductId::new(2)));
}

#[tokio::test]
async fn delete_missing_record_propagates_status() {
    let fixture = FixtureStore::spawn(vec![]).await;
    let client = client_for(&fixture).await;

    let err = client.delete_by_id(ProductId::new(42)).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 404, .. }));
}

#[tokio::test]
async fn network_failure_surfaces_as_http_error() {
    // Reserve an ephemeral port, then release it so nothing listens.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        listener.local_addr().expect("listener address")
    };
    let url = url::Url::parse(&format!("http://{addr}/products")).expect("loopback URL");
    let client = ProductStoreClient::new(&StoreConfig::new(url)).expect("build store client");

    let err = client.list_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Http(_)));
}
