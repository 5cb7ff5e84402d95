use serde::{Deserialize, Serialize};

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

/// A scheduled or pending outgoing payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub payment_id: String,
    pub recipient_account_number: String,
    pub amount: f64,
    pub due_date: String,
    pub kid: Option<String>,
    pub text: Option<String>,
    pub is_active: bool,
    pub status: String,
    pub allowed_new_status_types: Vec<String>,
    pub status_details: Option<String>,
    pub product_type: String,
    pub payment_type: String,
    pub payment_number: i64,
    pub beneficiary_name: Option<String>,
}

impl<T: Transport> ApiConnection<T> {
    pub async fn get_payments(&self, account_id: &str) -> Result<Vec<Payment>> {
        self.fetch_list(ApiRequest::get(format!("Payments/{account_id}")))
            .await
    }

    pub async fn get_payment(&self, account_id: &str, payment_id: &str) -> Result<Payment> {
        self.fetch_item(ApiRequest::get(format!("Payments/{account_id}/{payment_id}")))
            .await
    }
}
