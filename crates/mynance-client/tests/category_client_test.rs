//! Contract tests for CategoryClient.

use mynance_client::categories::{CreateCategoryRequest, UpdateCategoryRequest};
use mynance_client::types::CategoryId;
use mynance_client::{ApiConfig, MynanceClient};
use mynance_core::HexColor;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> MynanceClient {
    MynanceClient::new(ApiConfig::new(mock_server.uri().parse().unwrap())).unwrap()
}

#[tokio::test]
async fn list_all_parses_categories_with_timestamps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "userId": 7,
                "name": "Groceries",
                "color": "#4caf50",
                "createdAt": "2026-01-15T12:00:00Z",
                "active": true
            },
            {
                "id": 2,
                "userId": 7,
                "name": "Streaming",
                "color": "#9c27b0",
                "active": false
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let categories = client.categories().list_all().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Groceries");
    assert_eq!(categories[0].color.as_str(), "#4caf50");
    assert!(categories[0].created_at.is_some());
    assert!(categories[1].created_at.is_none());
    assert!(!categories[1].active);
}

#[tokio::test]
async fn create_sends_name_and_color() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_json(serde_json::json!({
            "name": "Groceries",
            "color": "#4caf50"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 11,
            "name": "Groceries"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateCategoryRequest {
        name: "Groceries".into(),
        color: HexColor::new("#4caf50").unwrap(),
    };

    let id = client.categories().create(&req).await.unwrap();
    assert_eq!(id, CategoryId::from_raw(11));
}

#[tokio::test]
async fn update_sends_id_name_and_color() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/categories"))
        .and(body_json(serde_json::json!({
            "id": 11,
            "name": "Food",
            "color": "#ff9800"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Category updated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = UpdateCategoryRequest {
        id: CategoryId::from_raw(11),
        name: "Food".into(),
        color: HexColor::new("#ff9800").unwrap(),
    };

    client.categories().update(&req).await.unwrap();
}

#[tokio::test]
async fn deactivate_and_reactivate_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/categories"))
        .and(body_json(serde_json::json!({"id": 11})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Category deactivated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/categories/activate"))
        .and(body_json(serde_json::json!({"id": 11})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Category activated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .categories()
        .deactivate(CategoryId::from_raw(11))
        .await
        .unwrap();
    client
        .categories()
        .reactivate(CategoryId::from_raw(11))
        .await
        .unwrap();
}

#[tokio::test]
async fn get_returns_none_when_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Category not found"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let category = client
        .categories()
        .get(CategoryId::from_raw(99))
        .await
        .unwrap();
    assert!(category.is_none());
}
