//! sbanken-core: transaction records and the normalization engine that turns
//! legacy statement fields into a canonical date and a readable label.

pub mod cleaner;
pub mod date;
pub mod resolver;
pub mod types;

pub use cleaner::{CleanRule, clean};
pub use date::{CalendarDate, parse_date, parse_date_or_zero};
pub use resolver::{DateRule, resolve};
pub use types::TransactionRecord;

use serde::Serialize;

/// Canonical view of one transaction: when it happened and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub date: CalendarDate,
    pub label: String,
}

/// Run both the date resolver and the description cleaner on a record.
pub fn normalize(record: &TransactionRecord) -> Normalized {
    Normalized {
        date: resolve(record),
        label: clean(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_card_without_merchant_detail() {
        let rec = TransactionRecord::new(
            "2021-03-23T00:00:00",
            "2021-03-23T00:00:00",
            "*1234 22.03 NOK 49.30 EXTRA NESTTUN 837625 KURS: 1.0000",
        );

        let n = normalize(&rec);
        assert_eq!(n.date, CalendarDate::from_ymd_opt(2021, 3, 22).unwrap());
        assert_eq!(n.label, "EXTRA NESTTUN 837625");
    }

    #[test]
    fn test_normalize_serializes_iso_date() {
        let rec = TransactionRecord::new(
            "2020-01-01T00:00:00",
            "2020-01-01T00:00:00",
            "31.12 KIWI MINDE",
        );

        let json = serde_json::to_value(normalize(&rec)).unwrap();
        assert_eq!(json["date"], "2019-12-31");
        assert_eq!(json["label"], "KIWI MINDE");
    }
}
