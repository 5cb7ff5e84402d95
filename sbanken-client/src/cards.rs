use serde::{Deserialize, Serialize};

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub card_id: String,
    pub card_number: String,
    pub card_version_number: String,
    pub account_number: String,
    pub customer_id: String,
    pub expiry_date: String,
    pub account_owner: String,
    pub status: String,
    pub card_type: String,
    pub product_code: String,
}

impl<T: Transport> ApiConnection<T> {
    pub async fn get_cards(&self) -> Result<Vec<Card>> {
        self.fetch_list(ApiRequest::get("Cards")).await
    }

    pub async fn get_card(&self, card_id: &str) -> Result<Card> {
        self.fetch_item(ApiRequest::get(format!("Cards/{card_id}"))).await
    }
}
