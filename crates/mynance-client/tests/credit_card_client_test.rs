//! Contract tests for CreditCardClient.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/credit-cards/all` | `list_all_*` |
//! | GET    | `/credit-cards/id` | `get_*` |
//! | POST   | `/credit-cards` | `create_*` |
//! | PUT    | `/credit-cards` | `update_*` |
//! | DELETE | `/credit-cards` | `deactivate_*` |
//! | POST   | `/credit-cards/activate` | `reactivate_*` |

use mynance_client::credit_cards::{CreateCreditCardRequest, UpdateCreditCardRequest};
use mynance_client::types::CardId;
use mynance_client::{ApiConfig, MynanceClient};
use mynance_core::DueDay;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> MynanceClient {
    MynanceClient::new(ApiConfig::new(mock_server.uri().parse().unwrap())).unwrap()
}

// ── GET /credit-cards/all ────────────────────────────────────────────

#[tokio::test]
async fn list_all_returns_active_and_inactive_cards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credit-cards/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "userId": 7,
                "name": "Platinum",
                "bank": "Nubank",
                "limitAmount": 5000.0,
                "dueDay": 10,
                "active": true
            },
            {
                "id": 2,
                "userId": 7,
                "name": "Old card",
                "bank": "Itau",
                "limitAmount": 1200.50,
                "dueDay": 5,
                "active": false
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let cards = client.credit_cards().list_all().await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Platinum");
    assert_eq!(cards[0].due_day.as_u8(), 10);
    assert!(cards[0].active);
    assert_eq!(cards[1].bank, "Itau");
    assert_eq!(cards[1].limit_amount, 1200.50);
    assert!(!cards[1].active);
}

// ── GET /credit-cards/id ─────────────────────────────────────────────

#[tokio::test]
async fn get_sends_id_in_body_and_returns_card_when_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credit-cards/id"))
        .and(body_json(serde_json::json!({"id": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3,
            "userId": 7,
            "name": "Gold",
            "bank": "Bradesco",
            "limitAmount": 3000.0,
            "dueDay": 20,
            "active": true
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let card = client
        .credit_cards()
        .get(CardId::from_raw(3))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(card.id, CardId::from_raw(3));
    assert_eq!(card.bank, "Bradesco");
}

#[tokio::test]
async fn get_returns_none_when_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credit-cards/id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Credit card not found"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let card = client.credit_cards().get(CardId::from_raw(99)).await.unwrap();
    assert!(card.is_none());
}

// ── POST /credit-cards ───────────────────────────────────────────────

#[tokio::test]
async fn create_sends_camel_case_body_and_returns_new_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/credit-cards"))
        .and(body_json(serde_json::json!({
            "name": "Platinum",
            "bank": "Nubank",
            "limitAmount": 5000.0,
            "dueDay": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 42,
            "name": "Platinum"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateCreditCardRequest {
        name: "Platinum".into(),
        bank: "Nubank".into(),
        limit_amount: 5000.0,
        due_day: DueDay::new(10).unwrap(),
    };

    let id = client.credit_cards().create(&req).await.unwrap();
    assert_eq!(id, CardId::from_raw(42));
}

#[tokio::test]
async fn create_surfaces_validation_error_from_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/credit-cards"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Invalid request, unexpected fields"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateCreditCardRequest {
        name: "".into(),
        bank: "Nubank".into(),
        limit_amount: 0.0,
        due_day: DueDay::new(1).unwrap(),
    };

    let err = client.credit_cards().create(&req).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), Some("Invalid request, unexpected fields"));
}

// ── PUT /credit-cards ────────────────────────────────────────────────

#[tokio::test]
async fn update_sends_id_alongside_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/credit-cards"))
        .and(body_json(serde_json::json!({
            "id": 3,
            "name": "Gold",
            "bank": "Bradesco",
            "limitAmount": 3500.0,
            "dueDay": 15
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Credit card updated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = UpdateCreditCardRequest {
        id: CardId::from_raw(3),
        name: "Gold".into(),
        bank: "Bradesco".into(),
        limit_amount: 3500.0,
        due_day: DueDay::new(15).unwrap(),
    };

    client.credit_cards().update(&req).await.unwrap();
}

// ── DELETE /credit-cards + POST /credit-cards/activate ───────────────

#[tokio::test]
async fn deactivate_and_reactivate_send_bare_id_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/credit-cards"))
        .and(body_json(serde_json::json!({"id": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Credit card deactivated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/credit-cards/activate"))
        .and(body_json(serde_json::json!({"id": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Credit card activated successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .credit_cards()
        .deactivate(CardId::from_raw(5))
        .await
        .unwrap();
    client
        .credit_cards()
        .reactivate(CardId::from_raw(5))
        .await
        .unwrap();
}
