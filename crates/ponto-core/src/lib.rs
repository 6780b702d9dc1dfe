//! ponto-core
//!
//! Business logic and services for Ponto: the balance engine, the punch state
//! machine, roster mutations, and CSV export. Depends on ponto-domain. No
//! CLI, no terminal I/O, no direct storage interactions.

pub mod adjustment_service;
pub mod balance_service;
pub mod error;
pub mod export_service;
pub mod punch_service;
pub mod record_service;
pub mod roster_service;
pub mod storage;
pub mod time;

pub use adjustment_service::AdjustmentService;
pub use balance_service::BalanceService;
pub use error::CoreError;
pub use export_service::{ExportService, ExportScope};
pub use punch_service::{PunchOutcome, PunchService};
pub use record_service::RecordService;
pub use roster_service::RosterService;
pub use time::Clock;
