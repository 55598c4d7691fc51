//! Typed client for the spending-category endpoints.
//!
//! Same operation set as the other collections: list variants, body-id
//! lookup, create/update, soft-delete, reactivate.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};
use mynance_core::HexColor;

use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CategoryId, UserId};

// -- Types matching backend schemas -------------------------------------------

/// Spending category record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub color: HexColor,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub active: bool,
}

/// Request to create a category.
///
/// Matches `POST /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub color: HexColor,
}

/// Request to update a category.
///
/// Matches `PUT /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCategoryRequest {
    pub id: CategoryId,
    pub name: String,
    pub color: HexColor,
}

#[derive(Serialize)]
struct IdBody {
    id: CategoryId,
}

#[derive(Deserialize)]
struct Created {
    id: CategoryId,
}

// -- Client -------------------------------------------------------------------

/// Client for the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryClient {
    transport: Transport,
}

impl CategoryClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List active categories.
    ///
    /// Calls `GET {base_url}/categories`.
    pub async fn list_active(&self) -> Result<Vec<Category>, ApiError> {
        self.transport.get("categories").await
    }

    /// List deactivated categories.
    ///
    /// Calls `GET {base_url}/categories/inactive`.
    pub async fn list_inactive(&self) -> Result<Vec<Category>, ApiError> {
        self.transport.get("categories/inactive").await
    }

    /// List all categories, active and deactivated.
    ///
    /// Calls `GET {base_url}/categories/all`.
    pub async fn list_all(&self) -> Result<Vec<Category>, ApiError> {
        self.transport.get("categories/all").await
    }

    /// Get a single category by id.
    ///
    /// Calls `GET {base_url}/categories/id`. Returns `None` when the
    /// backend answers 404.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, ApiError> {
        self.transport
            .request_opt(Method::GET, "categories/id", Some(&IdBody { id }))
            .await
    }

    /// Create a category and return its new id.
    ///
    /// Calls `POST {base_url}/categories`.
    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<CategoryId, ApiError> {
        let created: Created = self.transport.post("categories", req).await?;
        Ok(created.id)
    }

    /// Update an existing category.
    ///
    /// Calls `PUT {base_url}/categories`.
    pub async fn update(&self, req: &UpdateCategoryRequest) -> Result<(), ApiError> {
        self.transport.put_unit("categories", req).await
    }

    /// Deactivate a category (soft-delete).
    ///
    /// Calls `DELETE {base_url}/categories`.
    pub async fn deactivate(&self, id: CategoryId) -> Result<(), ApiError> {
        self.transport.delete_unit("categories", &IdBody { id }).await
    }

    /// Reactivate a previously deactivated category.
    ///
    /// Calls `POST {base_url}/categories/activate`.
    pub async fn reactivate(&self, id: CategoryId) -> Result<(), ApiError> {
        self.transport
            .post_unit("categories/activate", &IdBody { id })
            .await
    }
}
