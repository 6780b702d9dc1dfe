//! ponto-domain
//!
//! Pure domain models for the Ponto time clock (employees, weekly schedules,
//! day records, adjustments, balances). No I/O, no CLI, no storage.

pub mod adjustment;
pub mod balance;
pub mod common;
pub mod employee;
pub mod period;
pub mod record;
pub mod roster;
pub mod schedule;
pub mod time;

pub use adjustment::*;
pub use balance::*;
pub use common::*;
pub use employee::*;
pub use period::*;
pub use record::*;
pub use roster::*;
pub use schedule::*;
pub use time::{format_minutes, interval_minutes, parse_hhmm};
