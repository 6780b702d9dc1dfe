//! Display helpers for saldo values and punch cells.

use colored::Colorize;

use ponto_domain::{format_minutes, Balance};

/// `A HAVER 1:30` / `A DEVER -2:15` / `ZERADO 0:00`, colored by sign.
pub fn saldo_pill(saldo: i64) -> String {
    let hhmm = format_minutes(saldo);
    if saldo > 0 {
        format!("A HAVER {hhmm}").green().to_string()
    } else if saldo < 0 {
        format!("A DEVER {hhmm}").red().to_string()
    } else {
        format!("ZERADO {hhmm}")
    }
}

/// One-line summary of a period balance.
pub fn balance_line(balance: &Balance) -> String {
    format!(
        "Previsto {} | Trabalhado {} | {} | Folgas/ajustes: {}",
        format_minutes(balance.expected),
        format_minutes(balance.worked),
        saldo_pill(balance.saldo),
        balance.days_off
    )
}

/// A punch cell for tables: the raw text, or `-` when absent.
pub fn punch_cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
