use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current wall-clock so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current time of day as `HH:MM`, the format punches are stored in.
    fn time_hhmm(&self) -> String {
        self.now().format("%H:%M").to_string()
    }
}
