//! Date resolver: best estimate of the day a transaction actually happened.
//!
//! The ledger's accounting date lags card purchases by a few days, so the
//! resolver prefers the card network's purchase date and then any day/month
//! embedded in the legacy memo, falling back to the accounting date.
//!
//! Memo formats handled:
//!   22.03 REMA 1000 NESTTUN
//!   *1234 22.03 NOK 49.30 EXTRA NESTTUN 837625 KURS: 1.0000

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::date::{CalendarDate, parse_date_or_zero};
use crate::types::TransactionRecord;

static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<day>[0-9]{2})\.(?P<month>[0-9]{2})$").unwrap());

static MASKED_CARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*[0-9]{4} (?P<day>[0-9]{2})\.(?P<month>[0-9]{2})").unwrap()
});

/// Date rules in priority order. The first one that yields a date wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Card-network purchase timestamp; the zero date when present but malformed
    PurchaseDate,
    /// `DD.MM` in the first five characters of the memo
    LeadingDayMonth,
    /// `*NNNN DD.MM` masked card number followed by day/month
    MaskedCardDayMonth,
}

impl DateRule {
    pub const ALL: [DateRule; 3] = [
        DateRule::PurchaseDate,
        DateRule::LeadingDayMonth,
        DateRule::MaskedCardDayMonth,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PurchaseDate => "purchase-date",
            Self::LeadingDayMonth => "leading-day-month",
            Self::MaskedCardDayMonth => "masked-card-day-month",
        }
    }

    /// Try this rule alone. `None` means the rule does not apply.
    pub fn apply(self, record: &TransactionRecord) -> Option<CalendarDate> {
        match self {
            Self::PurchaseDate => record.purchase_date.as_deref().map(parse_date_or_zero),
            Self::LeadingDayMonth => {
                let head = record.description.get(..5)?;
                let caps = DAY_MONTH_RE.captures(head)?;
                day_month_before(&caps["day"], &caps["month"], record.accounting_date())
            }
            Self::MaskedCardDayMonth => {
                if record.description.len() < 11 {
                    return None;
                }
                let caps = MASKED_CARD_RE.captures(&record.description)?;
                day_month_before(&caps["day"], &caps["month"], record.accounting_date())
            }
        }
    }

    /// The rule that decides the date for this record, if any.
    pub fn matching(record: &TransactionRecord) -> Option<DateRule> {
        Self::ALL.into_iter().find(|rule| rule.apply(record).is_some())
    }
}

/// Resolve the calendar date a transaction occurred. Never fails; falls back
/// to the accounting date (or the zero date if that is malformed too).
pub fn resolve(record: &TransactionRecord) -> CalendarDate {
    DateRule::ALL
        .into_iter()
        .find_map(|rule| rule.apply(record))
        .unwrap_or_else(|| record.accounting_date())
}

/// Place a memo day/month in the accounting year, or the year before when
/// that would put it after the posting.
fn day_month_before(day: &str, month: &str, accounting: CalendarDate) -> Option<CalendarDate> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year = accounting.year();

    let candidate = day_month_in(year, month, day)?;
    if candidate <= accounting {
        return Some(candidate);
    }
    day_month_in(year - 1, month, day)
}

/// 29.02 in a year without a leap day lands on 1 March.
fn day_month_in(year: i32, month: u32, day: u32) -> Option<CalendarDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if (month, day) == (2, 29) {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn memo(accounting: &str, description: &str) -> TransactionRecord {
        TransactionRecord::new(accounting, accounting, description)
    }

    #[test]
    fn test_purchase_date_wins_over_memo() {
        let rec = memo("2020-01-01T00:00:00", "31.12 KIWI MINDE")
            .with_purchase_date("2019-12-28T00:00:00");
        assert_eq!(resolve(&rec), ymd(2019, 12, 28));
        assert_eq!(DateRule::matching(&rec), Some(DateRule::PurchaseDate));
    }

    #[test]
    fn test_purchase_date_with_fraction_and_zone() {
        let rec = memo("2019-03-14T00:00:00", "*1234 01.01 NOK 1.00 X KURS: 1.0000")
            .with_purchase_date("2019-03-12T20:15:12.477Z");
        assert_eq!(resolve(&rec), ymd(2019, 3, 12));
    }

    #[test]
    fn test_malformed_purchase_date_is_zero_date() {
        let rec = memo("2021-03-23T00:00:00", "22.03 REMA 1000").with_purchase_date("garbage");
        assert_eq!(resolve(&rec), CalendarDate::default());
        assert_eq!(DateRule::matching(&rec), Some(DateRule::PurchaseDate));
    }

    #[test]
    fn test_absent_purchase_date_uses_memo() {
        let rec = memo("2021-03-23T00:00:00", "22.03 REMA 1000");
        assert_eq!(resolve(&rec), ymd(2021, 3, 22));
        assert_eq!(DateRule::matching(&rec), Some(DateRule::LeadingDayMonth));
    }

    #[test]
    fn test_no_embedded_date_uses_accounting_date() {
        for desc in ["", "1234", "Overføring", "VARER 1.2", "Nettgiro til: X Betalt: 01.02.21"] {
            let rec = memo("2021-06-15T00:00:00", desc);
            assert_eq!(resolve(&rec), ymd(2021, 6, 15), "desc: {desc:?}");
            assert_eq!(DateRule::matching(&rec), None);
        }
    }

    #[test]
    fn test_year_rollover() {
        let rec = memo("2020-01-01T00:00:00", "31.12 KIWI MINDE");
        assert_eq!(resolve(&rec), ymd(2019, 12, 31));
    }

    #[test]
    fn test_same_day_is_not_rolled_over() {
        let rec = memo("2020-01-01T00:00:00", "01.01 KIWI MINDE");
        assert_eq!(resolve(&rec), ymd(2020, 1, 1));
    }

    #[test]
    fn test_same_day_with_time_of_day() {
        let rec = memo("2020-01-01T13:45:00", "01.01 KIWI MINDE");
        assert_eq!(resolve(&rec), ymd(2020, 1, 1));
    }

    #[test]
    fn test_masked_card_memo() {
        let rec = memo(
            "2021-03-23T00:00:00",
            "*1234 22.03 NOK 49.30 EXTRA NESTTUN 837625 KURS: 1.0000",
        );
        assert_eq!(resolve(&rec), ymd(2021, 3, 22));
        assert_eq!(DateRule::matching(&rec), Some(DateRule::MaskedCardDayMonth));
    }

    #[test]
    fn test_masked_card_rollover() {
        let rec = memo("2021-01-04T00:00:00", "*9876 30.12 SEK 120.00 ICA KURS: 0.9800");
        assert_eq!(resolve(&rec), ymd(2020, 12, 30));
    }

    #[test]
    fn test_masked_card_requires_leading_asterisk() {
        let rec = memo("2021-03-23T00:00:00", "#1234 22.03 NOK 49.30 EXTRA KURS: 1.0000");
        assert_eq!(resolve(&rec), ymd(2021, 3, 23));
    }

    #[test]
    fn test_short_masked_card_memo_is_ignored() {
        let rec = memo("2021-03-23T00:00:00", "*1234 22.0");
        assert_eq!(resolve(&rec), ymd(2021, 3, 23));
    }

    #[test]
    fn test_invalid_day_month_falls_back() {
        for desc in ["32.01 X", "00.05 X", "15.13 X", "*1234 45.02 NOK"] {
            let rec = memo("2021-06-15T00:00:00", desc);
            assert_eq!(resolve(&rec), ymd(2021, 6, 15), "desc: {desc:?}");
        }
    }

    #[test]
    fn test_leap_day_in_prior_year() {
        let rec = memo("2025-01-03T00:00:00", "29.02 X");
        assert_eq!(resolve(&rec), ymd(2024, 2, 29));
    }

    #[test]
    fn test_leap_day_in_non_leap_year_is_first_of_march() {
        let rec = memo("2025-03-15T00:00:00", "29.02 X");
        assert_eq!(resolve(&rec), ymd(2025, 3, 1));

        // rolled back into a year without a leap day
        let rec = memo("2024-01-05T00:00:00", "29.02 X");
        assert_eq!(resolve(&rec), ymd(2023, 3, 1));
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        let rec = memo("2024-03-10T00:00:00", "29.02 X");
        assert_eq!(resolve(&rec), ymd(2024, 2, 29));
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        let rec = memo("2021-06-15T00:00:00", "ØØØ.01 X");
        assert_eq!(resolve(&rec), ymd(2021, 6, 15));
    }

    #[test]
    fn test_malformed_accounting_date_degrades() {
        let rec = memo("bogus", "Overføring");
        assert_eq!(resolve(&rec), CalendarDate::default());

        // Embedded day/month still resolves against the zero date's year
        let rec = memo("bogus", "31.12 X");
        assert_eq!(resolve(&rec), ymd(1969, 12, 31));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let rec = memo("2020-01-01T00:00:00", "31.12 KIWI MINDE");
        assert_eq!(resolve(&rec), resolve(&rec));
    }

    #[test]
    fn test_resolved_embedded_date_never_after_accounting() {
        let accounting = "2021-07-10T00:00:00";
        for month in 1..=12u32 {
            for day in [1u32, 10, 11, 28] {
                let rec = memo(accounting, &format!("{day:02}.{month:02} X"));
                assert!(resolve(&rec) <= ymd(2021, 7, 10));
            }
        }
    }
}
