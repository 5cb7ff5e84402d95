//! Transactions as returned by the API, and their bridge into the
//! normalization engine.

use chrono::{Duration, NaiveDate};
use sbanken_core::{CalendarDate, TransactionRecord};
use serde::{Deserialize, Serialize};

use crate::connection::ApiConnection;
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

/// Furthest back the API serves transactions
pub const MAX_WINDOW_DAYS: i64 = 366;
/// Fixed page size; results beyond this are not fetched
pub const WINDOW_LENGTH: u32 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub transaction_id: Option<String>,
    pub accounting_date: String,
    pub interest_date: String,
    pub other_account_number: Option<String>,
    pub transaction_type: Option<String>,
    pub transaction_type_code: i64,
    pub transaction_type_text: Option<String>,
    pub is_reservation: bool,
    pub card_details_specified: bool,
    pub amount: f64,
    pub text: String,
    pub source: Option<String>,
    pub card_details: Option<CardDetails>,
}

/// Card-network detail attached to card purchases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDetails {
    pub card_number: Option<String>,
    pub currency_amount: f64,
    pub currency_rate: f64,
    pub merchant_category_code: Option<String>,
    pub merchant_category_description: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_name: Option<String>,
    pub original_currency_code: Option<String>,
    pub purchase_date: Option<String>,
    pub transaction_id: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_ref().filter(|s| !s.is_empty()).cloned()
}

impl Transaction {
    /// The fields normalization reads, with empty card strings treated as absent.
    pub fn record(&self) -> TransactionRecord {
        let card = self.card_details.as_ref();
        TransactionRecord {
            accounting_date: self.accounting_date.clone(),
            interest_date: self.interest_date.clone(),
            purchase_date: card.and_then(|c| non_empty(&c.purchase_date)),
            description: self.text.clone(),
            merchant_name: card.and_then(|c| non_empty(&c.merchant_name)),
            merchant_city: card.and_then(|c| non_empty(&c.merchant_city)),
        }
    }

    pub fn accounting_date(&self) -> CalendarDate {
        self.record().accounting_date()
    }

    pub fn interest_date(&self) -> CalendarDate {
        self.record().interest_date()
    }

    /// Best estimate of the day the transaction happened. Stable across the
    /// reservation and the booked transaction.
    pub fn transaction_date(&self) -> CalendarDate {
        sbanken_core::resolve(&self.record())
    }

    /// Memo text without the date and amount boilerplate of card transactions.
    pub fn label(&self) -> String {
        sbanken_core::clean(&self.record())
    }
}

/// Request for transactions since `start`, clamped to the API window ending at `today`.
pub fn transactions_since_request(account_id: &str, start: NaiveDate, today: NaiveDate) -> ApiRequest {
    let earliest = today - Duration::days(MAX_WINDOW_DAYS);
    let start = start.max(earliest);

    ApiRequest::get(format!("Transactions/{account_id}"))
        .param("startDate", start.format("%Y-%m-%d").to_string())
        .param("length", WINDOW_LENGTH.to_string())
}

impl<T: Transport> ApiConnection<T> {
    /// Latest transactions on an account using the bank's default limits.
    pub async fn get_transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.fetch_list(ApiRequest::get(format!("Transactions/{account_id}")))
            .await
    }

    /// Transactions on an account since `start`. The period is limited to
    /// 366 days and at most 1000 transactions are returned.
    pub async fn get_transactions_since(
        &self,
        account_id: &str,
        start: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let today = chrono::Local::now().date_naive();
        self.fetch_list(transactions_since_request(account_id, start, today))
            .await
    }
}
