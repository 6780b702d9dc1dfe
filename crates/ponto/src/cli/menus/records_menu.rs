//! Admin corrections to punch records over the active period.

use uuid::Uuid;

use ponto_core::{BalanceService, RecordService};
use ponto_domain::{format_minutes, PunchSlot, PUNCH_SLOTS};

use crate::cli::ui::{
    format::{balance_line, punch_cell},
    table::{Table, TableColumn},
};
use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    if !super::require_admin(context)? {
        return Ok(());
    }
    let Some(employee_id) = super::select_employee(context, false)? else {
        return Ok(());
    };

    loop {
        render_period(context, employee_id)?;
        let items: Vec<String> = [
            "Editar batida",
            "Editar observação",
            "Excluir registro",
            "Voltar",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        match io::select("Lançar ponto", &items)? {
            Some(0) => edit_slot(context, employee_id)?,
            Some(1) => edit_note(context, employee_id)?,
            Some(2) => delete_record(context, employee_id)?,
            _ => break,
        }
    }
    Ok(())
}

fn render_period(context: &ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let rows = BalanceService::day_rows(&context.roster, employee_id, context.period)?;
    let mut table = Table::new(
        Some(format!("Período {}", context.period)),
        vec![
            TableColumn::new("Data", 10),
            TableColumn::new("Dia", 3),
            TableColumn::new("E1", 6),
            TableColumn::new("S1", 6),
            TableColumn::new("E2", 6),
            TableColumn::new("S2", 6),
            TableColumn::new("Prev", 6),
            TableColumn::new("Trab", 6),
            TableColumn::new("Saldo", 7),
            TableColumn::new("Obs", 24),
        ],
    );
    for row in &rows {
        let record = row.record.as_ref();
        let note = match (&row.adjustment, record.and_then(|r| r.note.as_deref())) {
            (Some(adjustment), _) => adjustment.kind.label().to_string(),
            (None, Some(note)) => note.to_string(),
            (None, None) => String::new(),
        };
        table.add_row(vec![
            row.date.to_string(),
            row.weekday.label().to_string(),
            punch_cell(record.and_then(|r| r.in1.as_deref())),
            punch_cell(record.and_then(|r| r.out1.as_deref())),
            punch_cell(record.and_then(|r| r.in2.as_deref())),
            punch_cell(record.and_then(|r| r.out2.as_deref())),
            format_minutes(row.expected),
            format_minutes(row.worked),
            format_minutes(row.saldo),
            note,
        ]);
    }
    table.render();

    let balance = BalanceService::range_balance(&context.roster, employee_id, context.period)?;
    io::print_info(balance_line(&balance));
    Ok(())
}

fn edit_slot(context: &mut ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let date = io::prompt_date("Data", context.clock.today())?;
    let labels: Vec<String> = PUNCH_SLOTS.iter().map(|slot| slot.to_string()).collect();
    let Some(index) = io::select("Batida", &labels)? else {
        return Ok(());
    };
    let slot: PunchSlot = PUNCH_SLOTS[index];
    let current = context
        .roster
        .record(employee_id, date)
        .and_then(|record| record.slot(slot))
        .unwrap_or("")
        .to_string();
    let text = io::prompt_with_default("Horário (HH:MM, vazio limpa)", current)?;
    RecordService::set_time(&mut context.roster, employee_id, date, slot, &text)?;
    context.save_roster()?;
    io::print_success("Batida atualizada.");
    Ok(())
}

fn edit_note(context: &mut ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let date = io::prompt_date("Data", context.clock.today())?;
    let current = context
        .roster
        .record(employee_id, date)
        .and_then(|record| record.note.clone())
        .unwrap_or_default();
    let text = io::prompt_with_default("Observação (vazio remove)", current)?;
    RecordService::set_note(&mut context.roster, employee_id, date, &text)?;
    context.save_roster()?;
    io::print_success("Observação atualizada.");
    Ok(())
}

fn delete_record(context: &mut ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let date = io::prompt_date("Data", context.clock.today())?;
    if !io::confirm(&format!("Excluir o registro de {date}?"), false)? {
        return Ok(());
    }
    RecordService::remove_record(&mut context.roster, employee_id, date)?;
    context.save_roster()?;
    io::print_success("Registro excluído.");
    Ok(())
}
