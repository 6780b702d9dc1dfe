//! Weekly schedule: expected minutes per weekday, with an active flag.

use serde::{Deserialize, Serialize};

use crate::common::Weekday;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Expected workload for a single weekday.
pub struct DaySchedule {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub minutes: u32,
}

impl DaySchedule {
    pub fn working(minutes: u32) -> Self {
        Self {
            active: true,
            minutes,
        }
    }

    pub fn off() -> Self {
        Self {
            active: false,
            minutes: 0,
        }
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::off()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One [`DaySchedule`] per weekday. Missing days deserialize as off.
pub struct WeeklySchedule {
    #[serde(default)]
    pub sun: DaySchedule,
    #[serde(default)]
    pub mon: DaySchedule,
    #[serde(default)]
    pub tue: DaySchedule,
    #[serde(default)]
    pub wed: DaySchedule,
    #[serde(default)]
    pub thu: DaySchedule,
    #[serde(default)]
    pub fri: DaySchedule,
    #[serde(default)]
    pub sat: DaySchedule,
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Sun => &self.sun,
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DaySchedule {
        match weekday {
            Weekday::Sun => &mut self.sun,
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
        }
    }

    /// Expected minutes for a weekday; inactive days report 0.
    pub fn expected_minutes(&self, weekday: Weekday) -> i64 {
        let day = self.day(weekday);
        if day.active {
            i64::from(day.minutes)
        } else {
            0
        }
    }
}

impl Default for WeeklySchedule {
    /// Mon–Fri 8h, Sat 4h, Sun off.
    fn default() -> Self {
        Self {
            sun: DaySchedule::off(),
            mon: DaySchedule::working(8 * 60),
            tue: DaySchedule::working(8 * 60),
            wed: DaySchedule::working(8 * 60),
            thu: DaySchedule::working(8 * 60),
            fri: DaySchedule::working(8 * 60),
            sat: DaySchedule::working(4 * 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_matches_the_seeded_pattern() {
        let schedule = WeeklySchedule::default();
        assert_eq!(schedule.expected_minutes(Weekday::Mon), 480);
        assert_eq!(schedule.expected_minutes(Weekday::Fri), 480);
        assert_eq!(schedule.expected_minutes(Weekday::Sat), 240);
        assert_eq!(schedule.expected_minutes(Weekday::Sun), 0);
    }

    #[test]
    fn inactive_day_reports_zero_even_with_minutes_set() {
        let mut schedule = WeeklySchedule::default();
        let day = schedule.day_mut(Weekday::Wed);
        day.active = false;
        day.minutes = 480;
        assert_eq!(schedule.expected_minutes(Weekday::Wed), 0);
    }

    #[test]
    fn partial_document_merges_with_defaults() {
        let schedule: WeeklySchedule =
            serde_json::from_str(r#"{"mon":{"active":true,"minutes":360}}"#).unwrap();
        assert_eq!(schedule.expected_minutes(Weekday::Mon), 360);
        assert_eq!(schedule.expected_minutes(Weekday::Tue), 0);
    }
}
