//! Catalog client tests against a local mock catalog server.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use maison_commerce::catalog::ProductId;
use maison_data::{CatalogClient, FetchError};

/// Bind an ephemeral port, serve the router in the background, and
/// return the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock catalog");
    });
    format!("http://{addr}")
}

fn product_json(id: u64, title: &str, category: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title} description"),
        "category": category,
        "image": format!("https://catalog.example/img/{id}.png"),
        "rating": { "rate": 4.2, "count": 87 }
    })
}

#[tokio::test]
async fn fetches_and_decodes_products() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            Json(serde_json::json!([
                product_json(1, "Gold Signet Ring", "jewelery", 109.95),
                product_json(2, "USB Hub", "electronics", 22.30),
            ]))
        }),
    );
    let client = CatalogClient::with_base_url(serve(app).await);

    let products = client.products().await.expect("fetch products");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[0].price.cents(), 10995);
    assert_eq!(products[1].category, "electronics");
}

#[tokio::test]
async fn fetches_categories_verbatim() {
    let app = Router::new().route(
        "/products/categories",
        get(|| async { Json(serde_json::json!(["electronics", "jewelery", "jewelery"])) }),
    );
    let client = CatalogClient::with_base_url(serve(app).await);

    let categories = client.categories().await.expect("fetch categories");
    assert_eq!(categories, ["electronics", "jewelery", "jewelery"]);
}

#[tokio::test]
async fn fetches_single_product() {
    let app = Router::new().route(
        "/products/7",
        get(|| async { Json(product_json(7, "Desk Lamp", "home", 18.00)) }),
    );
    let client = CatalogClient::with_base_url(serve(app).await);

    let product = client.product(ProductId::new(7)).await.expect("fetch product");
    assert_eq!(product.id, ProductId::new(7));
    assert_eq!(product.title, "Desk Lamp");
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let app = Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = CatalogClient::with_base_url(serve(app).await);

    match client.products().await {
        Err(FetchError::Http { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/products"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_route_maps_to_http_404() {
    let client = CatalogClient::with_base_url(serve(Router::new()).await);

    match client.categories().await {
        Err(FetchError::Http { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_deserialization_error() {
    let app = Router::new().route("/products", get(|| async { "not json" }));
    let client = CatalogClient::with_base_url(serve(app).await);

    match client.products().await {
        Err(FetchError::Deserialization(message)) => assert!(!message.is_empty()),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_connection_error() {
    // Nothing listens on port 1.
    let client = CatalogClient::with_base_url("http://127.0.0.1:1");

    match client.products().await {
        Err(FetchError::Connection(message)) => assert!(!message.is_empty()),
        Err(FetchError::Request(_)) => {} // some platforms report refusal this way
        other => panic!("expected transport error, got {other:?}"),
    }
}
