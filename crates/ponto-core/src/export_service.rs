//! CSV export of resolved timesheets.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use ponto_domain::{format_minutes, DayBalance, Employee, Period, Roster};

use crate::balance_service::BalanceService;
use crate::error::CoreError;

/// Column order of the exported file.
pub const CSV_HEADERS: [&str; 15] = [
    "funcionario",
    "cargo",
    "data",
    "dia_semana",
    "tipo_folga",
    "folga_obs",
    "entrada1",
    "saida1",
    "entrada2",
    "saida2",
    "ponto_obs",
    "previsto_min",
    "trabalhado_min",
    "saldo_min",
    "saldo_hhmm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which employees an export covers.
pub enum ExportScope {
    Employee(Uuid),
    All,
}

/// Renders one row per (employee, day) over a period, RFC4180-quoted.
pub struct ExportService;

impl ExportService {
    /// The full CSV document, header included.
    pub fn csv_string(
        roster: &Roster,
        scope: ExportScope,
        period: Period,
    ) -> Result<String, CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for employee in Self::employees_in_scope(roster, scope)? {
            for row in BalanceService::day_rows(roster, employee.id, period)? {
                writer.write_record(&Self::csv_row(employee, &row))?;
            }
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| CoreError::Serde(err.to_string()))
    }

    /// Writes the export into `dir` and returns the file's path.
    pub fn write_csv(
        roster: &Roster,
        scope: ExportScope,
        period: Period,
        dir: &Path,
    ) -> Result<PathBuf, CoreError> {
        let data = Self::csv_string(roster, scope, period)?;
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::file_name(roster, scope, period));
        fs::write(&path, data)?;
        Ok(path)
    }

    /// `<slug>_<from>_a_<to>.csv`, slugged from the employee name or, for a
    /// whole-roster export, the roster name.
    pub fn file_name(roster: &Roster, scope: ExportScope, period: Period) -> String {
        let slug = match scope {
            ExportScope::Employee(id) => roster
                .employee(id)
                .map(|employee| slug(&employee.name))
                .unwrap_or_else(|| "funcionario".into()),
            ExportScope::All => slug(&roster.name),
        };
        format!("{}_{}_a_{}.csv", slug, period.from, period.to)
    }

    fn employees_in_scope(
        roster: &Roster,
        scope: ExportScope,
    ) -> Result<Vec<&Employee>, CoreError> {
        match scope {
            ExportScope::Employee(id) => {
                let employee = roster
                    .employee(id)
                    .ok_or_else(|| CoreError::EmployeeNotFound(id.to_string()))?;
                Ok(vec![employee])
            }
            ExportScope::All => Ok(roster.employees.iter().collect()),
        }
    }

    fn csv_row(employee: &Employee, row: &DayBalance) -> Vec<String> {
        let adjustment = row.adjustment.as_ref();
        let record = row.record.as_ref();
        let text = |value: Option<&str>| value.unwrap_or("").to_string();
        vec![
            employee.name.clone(),
            text(employee.role.as_deref()),
            row.date.to_string(),
            row.weekday.label().to_string(),
            text(adjustment.map(|a| a.kind.tag())),
            text(adjustment.and_then(|a| a.note.as_deref())),
            text(record.and_then(|r| r.in1.as_deref())),
            text(record.and_then(|r| r.out1.as_deref())),
            text(record.and_then(|r| r.in2.as_deref())),
            text(record.and_then(|r| r.out2.as_deref())),
            text(record.and_then(|r| r.note.as_deref())),
            row.expected.to_string(),
            row.worked.to_string(),
            row.saldo.to_string(),
            format_minutes(row.saldo),
        ]
    }
}

fn slug(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ponto".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ponto_domain::{AdjustmentKind, DayAdjustment};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster_with_employee() -> (Roster, Uuid) {
        let mut roster = Roster::new("Rancho");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);
        (roster, id)
    }

    #[test]
    fn two_day_range_yields_header_plus_two_rows() {
        let (mut roster, id) = roster_with_employee();
        let record = roster.record_mut(id, date(2024, 6, 3));
        record.in1 = Some("08:00".into());
        record.out1 = Some("12:00".into());

        let period = Period::new(date(2024, 6, 3), date(2024, 6, 4));
        let csv = ExportService::csv_string(&roster, ExportScope::Employee(id), period).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        // Monday, 480 expected, 240 worked.
        assert!(lines[1].starts_with("Maria,,2024-06-03,Seg,"));
        assert!(lines[1].ends_with("480,240,-240,-4:00"));
    }

    #[test]
    fn saldo_hhmm_matches_format_minutes() {
        let (mut roster, id) = roster_with_employee();
        // Sunday work with no schedule: saldo = worked.
        let record = roster.record_mut(id, date(2024, 6, 2));
        record.in1 = Some("08:00".into());
        record.out1 = Some("09:30".into());

        let period = Period::new(date(2024, 6, 2), date(2024, 6, 2));
        let csv = ExportService::csv_string(&roster, ExportScope::Employee(id), period).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(&format!("0,90,90,{}", format_minutes(90))));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);
        roster.record_mut(id, day).note = Some("saiu cedo, voltou depois".into());
        roster.upsert_adjustment(
            id,
            day,
            DayAdjustment::new(AdjustmentKind::Folga).with_note("troca, combinada"),
        );

        let period = Period::new(day, day);
        let csv = ExportService::csv_string(&roster, ExportScope::Employee(id), period).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"saiu cedo, voltou depois\""));
        assert!(row.contains("\"troca, combinada\""));
    }

    #[test]
    fn all_scope_covers_every_employee_in_roster_order() {
        let (mut roster, _) = roster_with_employee();
        roster.add_employee(Employee::new("José").with_role("Caseiro"));

        let day = date(2024, 6, 3);
        let csv =
            ExportService::csv_string(&roster, ExportScope::All, Period::new(day, day)).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Maria,"));
        assert!(lines[2].starts_with("José,Caseiro,"));
    }

    #[test]
    fn file_name_embeds_slug_and_range() {
        let (roster, id) = roster_with_employee();
        let period = Period::new(date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(
            ExportService::file_name(&roster, ExportScope::Employee(id), period),
            "maria_2024-06-01_a_2024-06-30.csv"
        );
        assert_eq!(
            ExportService::file_name(&roster, ExportScope::All, period),
            "rancho_2024-06-01_a_2024-06-30.csv"
        );
    }

    #[test]
    fn empty_period_exports_only_the_header() {
        let (roster, id) = roster_with_employee();
        let period = Period::new(date(2024, 6, 30), date(2024, 6, 1));
        let csv = ExportService::csv_string(&roster, ExportScope::Employee(id), period).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
