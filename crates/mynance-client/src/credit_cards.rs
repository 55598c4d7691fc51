//! Typed client for the credit-card endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/credit-cards` | List active cards |
//! | GET    | `/credit-cards/inactive` | List deactivated cards |
//! | GET    | `/credit-cards/all` | List all cards |
//! | GET    | `/credit-cards/id` | Get one card (id in JSON body) |
//! | POST   | `/credit-cards` | Create card |
//! | PUT    | `/credit-cards` | Update card |
//! | DELETE | `/credit-cards` | Deactivate card (soft-delete) |
//! | POST   | `/credit-cards/activate` | Reactivate card |
//!
//! Record ids travel in JSON bodies rather than path segments; it is the
//! backend's convention for every collection, lookups included.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use mynance_core::DueDay;

use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CardId, UserId};

// -- Types matching backend schemas -------------------------------------------

/// Credit card record.
///
/// Fields use `#[serde(default)]` where the backend omits them in some
/// responses; `serde(deny_unknown_fields)` is intentionally NOT used so
/// the client survives schema additions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: CardId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub bank: String,
    pub limit_amount: f64,
    pub due_day: DueDay,
    pub active: bool,
}

/// Request to create a credit card.
///
/// Matches `POST /credit-cards`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditCardRequest {
    pub name: String,
    pub bank: String,
    pub limit_amount: f64,
    pub due_day: DueDay,
}

/// Request to update a credit card.
///
/// Matches `PUT /credit-cards`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCreditCardRequest {
    pub id: CardId,
    pub name: String,
    pub bank: String,
    pub limit_amount: f64,
    pub due_day: DueDay,
}

#[derive(Serialize)]
struct IdBody {
    id: CardId,
}

#[derive(Deserialize)]
struct Created {
    id: CardId,
}

// -- Client -------------------------------------------------------------------

/// Client for the credit-card endpoints.
#[derive(Debug, Clone)]
pub struct CreditCardClient {
    transport: Transport,
}

impl CreditCardClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List active credit cards.
    ///
    /// Calls `GET {base_url}/credit-cards`.
    pub async fn list_active(&self) -> Result<Vec<CreditCard>, ApiError> {
        self.transport.get("credit-cards").await
    }

    /// List deactivated credit cards.
    ///
    /// Calls `GET {base_url}/credit-cards/inactive`.
    pub async fn list_inactive(&self) -> Result<Vec<CreditCard>, ApiError> {
        self.transport.get("credit-cards/inactive").await
    }

    /// List all credit cards, active and deactivated.
    ///
    /// Calls `GET {base_url}/credit-cards/all`.
    pub async fn list_all(&self) -> Result<Vec<CreditCard>, ApiError> {
        self.transport.get("credit-cards/all").await
    }

    /// Get a single credit card by id.
    ///
    /// Calls `GET {base_url}/credit-cards/id`. Returns `None` when the
    /// backend answers 404.
    pub async fn get(&self, id: CardId) -> Result<Option<CreditCard>, ApiError> {
        self.transport
            .request_opt(Method::GET, "credit-cards/id", Some(&IdBody { id }))
            .await
    }

    /// Create a credit card and return its new id.
    ///
    /// Calls `POST {base_url}/credit-cards`.
    pub async fn create(&self, req: &CreateCreditCardRequest) -> Result<CardId, ApiError> {
        let created: Created = self.transport.post("credit-cards", req).await?;
        Ok(created.id)
    }

    /// Update an existing credit card.
    ///
    /// Calls `PUT {base_url}/credit-cards`.
    pub async fn update(&self, req: &UpdateCreditCardRequest) -> Result<(), ApiError> {
        self.transport.put_unit("credit-cards", req).await
    }

    /// Deactivate a credit card (soft-delete).
    ///
    /// Calls `DELETE {base_url}/credit-cards`.
    pub async fn deactivate(&self, id: CardId) -> Result<(), ApiError> {
        self.transport
            .delete_unit("credit-cards", &IdBody { id })
            .await
    }

    /// Reactivate a previously deactivated credit card.
    ///
    /// Calls `POST {base_url}/credit-cards/activate`.
    pub async fn reactivate(&self, id: CardId) -> Result<(), ApiError> {
        self.transport
            .post_unit("credit-cards/activate", &IdBody { id })
            .await
    }
}
