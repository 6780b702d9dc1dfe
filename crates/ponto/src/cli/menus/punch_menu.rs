//! Employee-facing punch flow: pick a name, type the PIN, stamp the time.

use uuid::Uuid;

use ponto_core::{CoreError, PunchService};
use ponto_domain::format_minutes;

use crate::cli::ui::{format::punch_cell, table::{Table, TableColumn}};
use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(employee_id) = super::select_employee(context, true)? else {
        return Ok(());
    };

    let pin = io::prompt_pin("PIN")?;
    let employee = context
        .roster
        .employee(employee_id)
        .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))?;
    if PunchService::verify_pin(employee, &pin).is_err() {
        io::print_error("PIN incorreto.");
        return Ok(());
    }

    let today = context.clock.today();
    let time = context.clock.time_hhmm();
    match PunchService::punch(
        &mut context.roster,
        employee_id,
        today,
        &time,
        context.config.punch_policy,
    ) {
        Ok(outcome) => {
            context.save_roster()?;
            io::print_success(format!("{} registrada às {}.", outcome.slot, outcome.time));
        }
        Err(CoreError::DayComplete) => {
            io::print_warning("Dia completo: as quatro batidas já foram registradas.");
        }
        Err(err) => return Err(err.into()),
    }

    show_today(context, employee_id);
    Ok(())
}

fn show_today(context: &ShellContext, employee_id: Uuid) {
    let today = context.clock.today();
    let record = context
        .roster
        .record(employee_id, today)
        .cloned()
        .unwrap_or_default();

    let mut table = Table::new(
        Some(format!("Hoje, {today}")),
        vec![
            TableColumn::new("Entrada 1", 10),
            TableColumn::new("Saída 1", 10),
            TableColumn::new("Entrada 2", 10),
            TableColumn::new("Saída 2", 10),
            TableColumn::new("Trabalhado", 10),
        ],
    );
    table.add_row(vec![
        punch_cell(record.in1.as_deref()),
        punch_cell(record.out1.as_deref()),
        punch_cell(record.in2.as_deref()),
        punch_cell(record.out2.as_deref()),
        format_minutes(record.worked_minutes()),
    ]);
    table.render();
}
