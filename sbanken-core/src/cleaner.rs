//! Description cleaner: strips dates, amounts and boilerplate from legacy
//! statement memos so only the merchant or payee is left.
//!
//! Examples:
//!   01.01 REMA KALMARHUSE JON SMØRSGT  BERGEN      -> REMA KALMARHUSE JON SMØRSGT  BERGEN
//!   Til: BONNIER PUBLICA Betalt: 17.03.21          -> BONNIER PUBLICA
//!   *1234 22.03 NOK 49.30 EXTRA NESTTUN 837625 KURS: 1.0000 -> EXTRA NESTTUN 837625

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::TransactionRecord;

static DATE_PREFIXED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2} (?P<rest>.*)$").unwrap());

static PAYMENT_CONFIRMATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Nettgiro til|Til): (?P<payee>.*) Betalt: [0-9]{2}\.[0-9]{2}\.[0-9]{2}$")
        .unwrap()
});

static FOREIGN_CARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\*[0-9]{4} [0-9]{2}\.[0-9]{2} ",
        r"[A-Z]{3} [0-9.]+ ",
        r"(?P<merchant>.*) ",
        r"(?:KURS|Kurs): [0-9.]+$"
    ))
    .unwrap()
});

/// Label rules in priority order. The first one that yields a label wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanRule {
    /// Card detail with merchant name and city
    MerchantDetail,
    /// `DD.DD <memo>`
    DatePrefixedMemo,
    /// `Til: <payee> Betalt: DD.DD.DD` (also `Nettgiro til:`)
    PaymentConfirmation,
    /// `*NNNN DD.MM CCC <amount> <merchant> KURS: <rate>`
    ForeignCardPurchase,
}

impl CleanRule {
    pub const ALL: [CleanRule; 4] = [
        CleanRule::MerchantDetail,
        CleanRule::DatePrefixedMemo,
        CleanRule::PaymentConfirmation,
        CleanRule::ForeignCardPurchase,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MerchantDetail => "merchant-detail",
            Self::DatePrefixedMemo => "date-prefixed-memo",
            Self::PaymentConfirmation => "payment-confirmation",
            Self::ForeignCardPurchase => "foreign-card-purchase",
        }
    }

    /// Try this rule alone. `None` means the rule does not apply.
    pub fn apply(self, record: &TransactionRecord) -> Option<String> {
        let text = record.description.as_str();
        match self {
            Self::MerchantDetail => {
                let name = record.merchant_name()?;
                let city = record.merchant_city.as_deref().unwrap_or("");
                Some(format!("{name}, {city}"))
            }
            Self::DatePrefixedMemo => {
                let caps = DATE_PREFIXED_RE.captures(text)?;
                Some(caps["rest"].to_string())
            }
            Self::PaymentConfirmation => {
                let caps = PAYMENT_CONFIRMATION_RE.captures(text)?;
                Some(caps["payee"].trim().to_string())
            }
            Self::ForeignCardPurchase => {
                let caps = FOREIGN_CARD_RE.captures(text)?;
                Some(caps["merchant"].trim().to_string())
            }
        }
    }

    /// The rule that decides the label for this record, if any.
    pub fn matching(record: &TransactionRecord) -> Option<CleanRule> {
        Self::ALL.into_iter().find(|rule| rule.apply(record).is_some())
    }
}

/// Produce a display label for a transaction. Never fails; unrecognized memos
/// are returned unchanged.
pub fn clean(record: &TransactionRecord) -> String {
    CleanRule::ALL
        .into_iter()
        .find_map(|rule| rule.apply(record))
        .unwrap_or_else(|| record.description.clone())
}
