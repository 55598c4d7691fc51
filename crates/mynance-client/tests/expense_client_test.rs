//! Contract tests for ExpenseClient.

use chrono::{TimeZone, Utc};
use mynance_client::expenses::{CreateExpenseRequest, UpdateExpenseRequest};
use mynance_client::types::{CategoryId, ExpenseId};
use mynance_client::{ApiConfig, MynanceClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> MynanceClient {
    MynanceClient::new(ApiConfig::new(mock_server.uri().parse().unwrap())).unwrap()
}

#[tokio::test]
async fn list_parses_expenses_with_and_without_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "userId": 7,
                "description": "Rent",
                "amount": 1800.0,
                "dueDate": "2026-09-05T00:00:00Z",
                "paid": false,
                "createdAt": "2026-08-01T09:30:00Z",
                "deleted": false
            },
            {
                "id": 2,
                "userId": 7,
                "description": "Groceries",
                "amount": 412.37,
                "dueDate": "2026-08-20T00:00:00Z",
                "paid": true,
                "categoryId": 11,
                "createdAt": "2026-08-02T10:00:00Z",
                "deleted": false
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let expenses = client.expenses().list().await.unwrap();

    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].description, "Rent");
    assert!(expenses[0].category_id.is_none());
    assert!(!expenses[0].paid);
    assert_eq!(expenses[1].category_id, Some(CategoryId::from_raw(11)));
    assert_eq!(expenses[1].amount, 412.37);
    assert!(expenses[1].paid);
}

#[tokio::test]
async fn create_omits_category_field_when_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/expenses"))
        .and(body_json(serde_json::json!({
            "description": "Rent",
            "amount": 1800.0,
            "dueDate": "2026-09-05T00:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 31,
            "description": "Rent"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateExpenseRequest {
        description: "Rent".into(),
        amount: 1800.0,
        due_date: Utc.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap(),
        category_id: None,
    };

    let id = client.expenses().create(&req).await.unwrap();
    assert_eq!(id, ExpenseId::from_raw(31));
}

#[tokio::test]
async fn create_includes_category_when_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/expenses"))
        .and(body_json(serde_json::json!({
            "description": "Groceries",
            "amount": 412.37,
            "dueDate": "2026-08-20T00:00:00Z",
            "categoryId": 11
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 32,
            "description": "Groceries"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateExpenseRequest {
        description: "Groceries".into(),
        amount: 412.37,
        due_date: Utc.with_ymd_and_hms(2026, 8, 20, 0, 0, 0).unwrap(),
        category_id: Some(CategoryId::from_raw(11)),
    };

    client.expenses().create(&req).await.unwrap();
}

#[tokio::test]
async fn update_carries_paid_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/expenses"))
        .and(body_json(serde_json::json!({
            "id": 31,
            "description": "Rent",
            "amount": 1800.0,
            "dueDate": "2026-09-05T00:00:00Z",
            "paid": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Expense updated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = UpdateExpenseRequest {
        id: ExpenseId::from_raw(31),
        description: "Rent".into(),
        amount: 1800.0,
        due_date: Utc.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap(),
        paid: true,
        category_id: None,
    };

    client.expenses().update(&req).await.unwrap();
}

#[tokio::test]
async fn deactivate_and_reactivate_send_bare_id_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/expenses"))
        .and(body_json(serde_json::json!({"id": 31})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Expense deleted successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/expenses/activate"))
        .and(body_json(serde_json::json!({"id": 31})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Expense recovered successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .expenses()
        .deactivate(ExpenseId::from_raw(31))
        .await
        .unwrap();
    client
        .expenses()
        .reactivate(ExpenseId::from_raw(31))
        .await
        .unwrap();
}

#[tokio::test]
async fn get_returns_none_when_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/expenses/id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Expense not found"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let expense = client.expenses().get(ExpenseId::from_raw(99)).await.unwrap();
    assert!(expense.is_none());
}
