use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::types::{NewReview, ProductQuery, ReviewPatch, ReviewQuery};

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, 10, None).expect("client construction should not fail")
}

#[test]
fn build_url_appends_path_and_params() {
    let client = test_client("http://127.0.0.1:8000/api");
    let url = client
        .build_url("/products", &[("limit", "4".to_string())], "test")
        .unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/products?limit=4");
}

#[test]
fn build_url_strips_trailing_slash_from_base() {
    let client = test_client("http://127.0.0.1:8000/api/");
    let url = client.build_url("/products", &[], "test").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/products");
}

#[tokio::test]
async fn list_products_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "A", "price": "10"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client
        .list_products(&ProductQuery::default())
        .await
        .expect("list should succeed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "1");
    assert_eq!(products[0].name, "A");
    assert_eq!(products[0].price, Decimal::from(10));
}

#[tokio::test]
async fn list_products_accepts_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "p1", "title": "Bare"}])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client
        .list_products(&ProductQuery::default())
        .await
        .expect("list should succeed");
    assert_eq!(products[0].name, "Bare");
}

#[tokio::test]
async fn list_products_rejects_unknown_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"payload": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedResponseShape { .. }));
}

#[tokio::test]
async fn list_products_forwards_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("category", "drones"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = ProductQuery {
        category: Some("drones".to_string()),
        limit: Some(4),
        ..ProductQuery::default()
    };
    let products = client.list_products(&query).await.expect("should succeed");
    assert!(products.is_empty());
}

#[tokio::test]
async fn get_product_unwraps_data_and_bare_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "p1", "name": "Wrapped"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/p2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "p2", "name": "Bare"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(client.get_product("p1").await.unwrap().name, "Wrapped");
    assert_eq!(client.get_product("p2").await.unwrap().name, "Bare");
}

#[tokio::test]
async fn get_product_empty_id_fails_validation_without_request() {
    let client = test_client("http://127.0.0.1:1");
    let err = client.get_product("  ").await.unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
}

#[tokio::test]
async fn non_success_status_is_typed_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnexpectedStatus { status: 500, .. }
    ));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn bearer_token_is_attached_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 10, Some("secret-token"))
        .expect("client construction should not fail");
    client
        .list_products(&ProductQuery::default())
        .await
        .expect("authorized request should succeed");
}

#[tokio::test]
async fn list_reviews_maps_filters_and_normalizes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reviews"))
        .and(query_param("limit", "10"))
        .and(query_param("verified", "true"))
        .and(query_param("rating", "4"))
        .and(query_param("sort", "-createdAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "r1", "customerName": "Samantha D.", "isVerified": true, "comment": "Love it"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reviews = client
        .list_reviews(&ReviewQuery::storefront_default())
        .await
        .expect("list should succeed");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Samantha D.");
    assert!(reviews[0].verified);
}

#[tokio::test]
async fn list_product_reviews_hits_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/p1/reviews"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "r1", "text": "ok"}])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reviews = client
        .list_product_reviews("p1", &ReviewQuery::default())
        .await
        .expect("list should succeed");
    assert_eq!(reviews[0].body, "ok");
}

#[tokio::test]
async fn create_review_posts_body_and_parses_echo() {
    let server = MockServer::start().await;
    let expected = json!({
        "productId": "p1",
        "name": "Alex M.",
        "rating": 5.0,
        "comment": "Top notch."
    });
    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "r9", "name": "Alex M.", "comment": "Top notch."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let review = client
        .create_review(&NewReview {
            product_id: Some("p1".to_string()),
            name: "Alex M.".to_string(),
            rating: 5.0,
            comment: "Top notch.".to_string(),
        })
        .await
        .expect("create should succeed");
    assert_eq!(review.id, "r9");
    assert_eq!(review.body, "Top notch.");
}

#[tokio::test]
async fn update_review_puts_patch_and_parses_echo() {
    let server = MockServer::start().await;
    let expected = json!({"rating": 4.0, "comment": "Holding up well."});
    Mock::given(method("PUT"))
        .and(path("/reviews/r1"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "r1", "rating": 4.0, "comment": "Holding up well."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let review = client
        .update_review(
            "r1",
            &ReviewPatch {
                rating: Some(4.0),
                comment: Some("Holding up well.".to_string()),
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(review.id, "r1");
    assert_eq!(review.rating, 4.0);
    assert_eq!(review.body, "Holding up well.");
}

#[tokio::test]
async fn update_review_empty_id_fails_validation_without_request() {
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .update_review("", &ReviewPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
}

#[tokio::test]
async fn delete_review_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reviews/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .delete_review("r1")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn fetch_cart_normalizes_lines_and_drops_orphans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Swift 2", "price": "260", "quantity": 2},
            {"name": "no product reference"}
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let lines = client.fetch_cart().await.expect("fetch should succeed");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, "p1");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].price, Decimal::from(260));
}
