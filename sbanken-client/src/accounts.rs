use serde::{Deserialize, Serialize};

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

/// A bank account owned by the authenticated customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub account_id: String,
    pub account_number: String,
    pub owner_customer_id: String,
    pub name: String,
    pub account_type: String,
    pub available: f64,
    pub balance: f64,
    pub credit_limit: f64,
}

impl<T: Transport> ApiConnection<T> {
    /// All accounts of the authenticated customer.
    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.fetch_list(ApiRequest::get("Accounts")).await
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Account> {
        self.fetch_item(ApiRequest::get(format!("Accounts/{account_id}")))
            .await
    }
}
