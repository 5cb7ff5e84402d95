//! Plain-text rendering for the terminal.

use sbanken_client::{Account, Card, EFaktura, Payment, Transaction};
use sbanken_core::{CleanRule, DateRule};

pub fn account_overview(accounts: &[Account]) -> String {
    let mut out = String::new();
    out.push_str("╔══ Account overview ══════════════════════════════════════════════╗\n");
    out.push_str(&format!(
        "║ {:<25}{:>11}    {:>10}    {:>10} ║\n",
        "Name", "Number", "Balance", "Available"
    ));
    for acc in accounts {
        out.push_str(&format!(
            "║ {:<25}{:>11} kr {:>10.2} kr {:>10.2} ║\n",
            truncate(&acc.name, 25),
            acc.account_number,
            acc.balance,
            acc.available
        ));
    }
    out.push_str("╚══════════════════════════════════════════════════════════════════╝");
    out
}

/// One line per transaction: resolved date, amount, cleaned label.
pub fn transaction_line(txn: &Transaction, explain: bool) -> String {
    let date = txn.transaction_date();
    let reserved = if txn.is_reservation { "*" } else { " " };
    let mut line = format!(
        "{} {}{:>12.2}  {}",
        date.format("%Y-%m-%d"),
        reserved,
        txn.amount,
        txn.label()
    );

    if explain {
        let record = txn.record();
        let date_rule = DateRule::matching(&record).map_or("accounting-date", DateRule::as_str);
        let clean_rule = CleanRule::matching(&record).map_or("raw", CleanRule::as_str);
        line.push_str(&format!("  [date: {date_rule}, label: {clean_rule}]"));
    }
    line
}

pub fn card_line(card: &Card) -> String {
    format!(
        "{:<20} {:<10} {:<10} expires {}",
        card.card_number, card.card_type, card.status, card.expiry_date
    )
}

pub fn payment_line(p: &Payment) -> String {
    format!(
        "{} {:>12.2}  {} -> {}",
        p.due_date.get(..10).unwrap_or(&p.due_date),
        p.amount,
        p.beneficiary_name.as_deref().unwrap_or("-"),
        p.recipient_account_number
    )
}

pub fn efaktura_line(ef: &EFaktura) -> String {
    format!(
        "{} {:>12.2}  {} ({})",
        ef.original_due_date.get(..10).unwrap_or(&ef.original_due_date),
        ef.updated_amount.unwrap_or(ef.original_amount),
        ef.issuer_name,
        ef.status
    )
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
