//! Shared response envelope for the advanced API.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// `{success, data?, message?}` envelope used by every advanced endpoint.
///
/// The service spells the message field `mensaje`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, surfacing `success: false` as [`ClientError::Unsuccessful`].
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(ClientError::Unsuccessful(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ClientError::InvalidResponse("response is missing `data`".to_string()))
    }
}
