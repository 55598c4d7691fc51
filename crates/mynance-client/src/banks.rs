//! Typed client for the bank-catalog endpoint.
//!
//! The backend ships a fixed catalog of supported banks; credit cards
//! reference one by display name.

use crate::error::ApiError;
use crate::transport::Transport;

/// Client for the bank-catalog endpoint.
#[derive(Debug, Clone)]
pub struct BankClient {
    transport: Transport,
}

impl BankClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the supported bank names.
    ///
    /// Calls `GET {base_url}/banks`.
    pub async fn list(&self) -> Result<Vec<String>, ApiError> {
        self.transport.get("banks").await
    }
}
