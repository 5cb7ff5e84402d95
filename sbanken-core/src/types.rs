use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, parse_date_or_zero};

/// The fields of one bank transaction that normalization reads.
///
/// Built once per API response item and never mutated afterwards. Dates are
/// kept as the raw text the bank sent; parsing happens on access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub accounting_date: String,
    pub interest_date: String,
    /// Only present when card-payment detail is attached
    pub purchase_date: Option<String>,
    /// Legacy statement memo, may be empty
    pub description: String,
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
}

impl TransactionRecord {
    pub fn new(
        accounting_date: impl Into<String>,
        interest_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            accounting_date: accounting_date.into(),
            interest_date: interest_date.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_purchase_date(mut self, purchase_date: impl Into<String>) -> Self {
        self.purchase_date = Some(purchase_date.into());
        self
    }

    pub fn with_merchant(mut self, name: impl Into<String>, city: impl Into<String>) -> Self {
        self.merchant_name = Some(name.into());
        self.merchant_city = Some(city.into());
        self
    }

    /// Ledger posting date; the zero date if the text is malformed.
    pub fn accounting_date(&self) -> CalendarDate {
        parse_date_or_zero(&self.accounting_date)
    }

    /// Interest date; the zero date if the text is malformed.
    pub fn interest_date(&self) -> CalendarDate {
        parse_date_or_zero(&self.interest_date)
    }

    pub(crate) fn merchant_name(&self) -> Option<&str> {
        self.merchant_name.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_dates_fall_back_to_zero() {
        let rec = TransactionRecord::new("not a date", "", "");
        assert_eq!(rec.accounting_date(), CalendarDate::default());
        assert_eq!(rec.interest_date(), CalendarDate::default());
    }

    #[test]
    fn test_interest_date_differs_from_accounting_date() {
        let rec = TransactionRecord::new("2019-03-06T00:00:00", "2019-03-08T00:00:00", "");
        assert_eq!(rec.accounting_date(), CalendarDate::from_ymd_opt(2019, 3, 6).unwrap());
        assert_eq!(rec.interest_date(), CalendarDate::from_ymd_opt(2019, 3, 8).unwrap());
    }

    #[test]
    fn test_empty_merchant_name_is_absent() {
        let rec = TransactionRecord::new("", "", "").with_merchant("", "BERGEN");
        assert_eq!(rec.merchant_name(), None);
    }
}
