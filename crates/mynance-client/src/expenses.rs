//! Typed client for the expense endpoints.
//!
//! Expenses use a `deleted` soft-delete flag (inverted sense relative to
//! the `active` flag on cards and categories) and an optional category
//! link that may be cleared on update.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CategoryId, ExpenseId, UserId};

// -- Types matching backend schemas -------------------------------------------

/// Expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub description: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub paid: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
}

/// Request to create an expense.
///
/// Matches `POST /expenses`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

/// Request to update an expense.
///
/// Matches `PUT /expenses`. Serializing `category_id: None` as an absent
/// field clears the category link on the backend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

#[derive(Serialize)]
struct IdBody {
    id: ExpenseId,
}

#[derive(Deserialize)]
struct Created {
    id: ExpenseId,
}

// -- Client -------------------------------------------------------------------

/// Client for the expense endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    transport: Transport,
}

impl ExpenseClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List expenses for the logged-in user.
    ///
    /// Calls `GET {base_url}/expenses`.
    pub async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        self.transport.get("expenses").await
    }

    /// Get a single expense by id.
    ///
    /// Calls `GET {base_url}/expenses/id`. Returns `None` when the
    /// backend answers 404.
    pub async fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ApiError> {
        self.transport
            .request_opt(Method::GET, "expenses/id", Some(&IdBody { id }))
            .await
    }

    /// Create an expense and return its new id.
    ///
    /// Calls `POST {base_url}/expenses`.
    pub async fn create(&self, req: &CreateExpenseRequest) -> Result<ExpenseId, ApiError> {
        let created: Created = self.transport.post("expenses", req).await?;
        Ok(created.id)
    }

    /// Update an existing expense.
    ///
    /// Calls `PUT {base_url}/expenses`.
    pub async fn update(&self, req: &UpdateExpenseRequest) -> Result<(), ApiError> {
        self.transport.put_unit("expenses", req).await
    }

    /// Soft-delete an expense.
    ///
    /// Calls `DELETE {base_url}/expenses`.
    pub async fn deactivate(&self, id: ExpenseId) -> Result<(), ApiError> {
        self.transport.delete_unit("expenses", &IdBody { id }).await
    }

    /// Restore a soft-deleted expense.
    ///
    /// Calls `POST {base_url}/expenses/activate`.
    pub async fn reactivate(&self, id: ExpenseId) -> Result<(), ApiError> {
        self.transport
            .post_unit("expenses/activate", &IdBody { id })
            .await
    }
}
