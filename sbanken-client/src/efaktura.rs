//! eFaktura: electronic invoices delivered straight to the bank.

use serde::{Deserialize, Serialize};

use crate::connection::ApiConnection;
use crate::envelope::ErrorInformation;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, Transport};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EFaktura {
    pub e_faktura_id: String,
    pub issuer_id: String,
    pub e_faktura_reference: String,
    pub document_type: String,
    pub status: String,
    pub kid: Option<String>,
    pub original_due_date: String,
    pub original_amount: f64,
    pub minimum_amount: f64,
    pub notification_date: String,
    pub issuer_name: String,
    pub updated_due_date: Option<String>,
    pub updated_amount: Option<f64>,
    pub credit_account_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EFakturaPayRequest {
    pub e_faktura_id: String,
    pub account_id: String,
    pub pay_only_minimum_amount: bool,
}

impl<T: Transport> ApiConnection<T> {
    pub async fn get_efakturas(&self) -> Result<Vec<EFaktura>> {
        self.fetch_list(ApiRequest::get("EFakturas")).await
    }

    pub async fn get_efaktura(&self, e_faktura_id: &str) -> Result<EFaktura> {
        self.fetch_item(ApiRequest::get(format!("EFakturas/{e_faktura_id}")))
            .await
    }

    /// Pay an eFaktura from the given account.
    pub async fn pay_efaktura(&self, pay: &EFakturaPayRequest) -> Result<()> {
        let body = serde_json::to_value(pay)
            .map_err(|e| ClientError::InvalidRequest(format!("encoding pay request: {e}")))?;
        let res: ErrorInformation = self.request(ApiRequest::post("EFakturas", body)).await?;
        res.check()
    }
}
