//! Typed client for the user-profile endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/user/me` | Profile of the logged-in user |
//! | POST   | `/user/name` | Change display name |
//! | POST   | `/user/password` | Change password |
//! | DELETE | `/user` | Deactivate account (soft-delete) |
//! | POST   | `/user/activate` | Reactivate account |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::ApiError;
use crate::session::serialize_secret;
use crate::transport::Transport;
use crate::types::UserId;

/// User profile as returned by `GET /user/me`.
///
/// The backend never includes the password hash in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub active: bool,
}

#[derive(Serialize)]
struct UpdateNameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct UpdatePasswordBody {
    #[serde(serialize_with = "serialize_secret")]
    password: Zeroizing<String>,
}

// -- Client -------------------------------------------------------------------

/// Client for the user-profile endpoints.
#[derive(Debug, Clone)]
pub struct UserClient {
    transport: Transport,
}

impl UserClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the profile of the logged-in user.
    ///
    /// Calls `GET {base_url}/user/me`.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        self.transport.get("user/me").await
    }

    /// Change the display name of the logged-in user.
    ///
    /// Calls `POST {base_url}/user/name`.
    pub async fn update_name(&self, name: &str) -> Result<(), ApiError> {
        self.transport
            .post_unit("user/name", &UpdateNameBody { name })
            .await
    }

    /// Change the password of the logged-in user.
    ///
    /// Calls `POST {base_url}/user/password`. The backend enforces its own
    /// password-strength policy and answers 400 with an `error` message
    /// when the new password is too weak.
    pub async fn update_password(&self, password: impl Into<String>) -> Result<(), ApiError> {
        self.transport
            .post_unit(
                "user/password",
                &UpdatePasswordBody {
                    password: Zeroizing::new(password.into()),
                },
            )
            .await
    }

    /// Deactivate the logged-in user's account (soft-delete).
    ///
    /// Calls `DELETE {base_url}/user`.
    pub async fn deactivate(&self) -> Result<(), ApiError> {
        self.transport
            .request_unit::<()>(reqwest::Method::DELETE, "user", None)
            .await
    }

    /// Reactivate the logged-in user's account.
    ///
    /// Calls `POST {base_url}/user/activate`.
    pub async fn reactivate(&self) -> Result<(), ApiError> {
        self.transport
            .request_unit::<()>(reqwest::Method::POST, "user/activate", None)
            .await
    }
}
