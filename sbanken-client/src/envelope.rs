//! Response envelopes shared by every resource endpoint.

use serde::Deserialize;
use tracing::warn;

use crate::error::{ClientError, Result};

/// Error fields the API attaches to every response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorInformation {
    pub is_error: bool,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub trace_id: Option<String>,
}

impl ErrorInformation {
    pub fn check(&self) -> Result<()> {
        if !self.is_error {
            return Ok(());
        }
        warn!(
            error_type = ?self.error_type,
            trace_id = ?self.trace_id,
            "api reported an error"
        );
        Err(ClientError::Api {
            error_type: self.error_type.clone().unwrap_or_default(),
            message: self.error_message.clone().unwrap_or_default(),
            trace_id: self.trace_id.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub available_items: i64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(flatten)]
    pub error: ErrorInformation,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse<T> {
    pub item: Option<T>,
    #[serde(flatten)]
    pub error: ErrorInformation,
}
