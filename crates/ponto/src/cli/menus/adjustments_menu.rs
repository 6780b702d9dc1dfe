//! Day-off, leave, and compensation entries.

use uuid::Uuid;

use ponto_core::AdjustmentService;
use ponto_domain::{AdjustmentKind, DayAdjustment, ADJUSTMENT_CATEGORIES};

use crate::cli::ui::table::{Table, TableColumn};
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
        render_list(context, employee_id)?;
        let items: Vec<String> = ["Aplicar ajuste", "Remover ajuste", "Voltar"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        match io::select("Folgas & compensação", &items)? {
            Some(0) => apply(context, employee_id)?,
            Some(1) => remove(context, employee_id)?,
            _ => break,
        }
    }
    Ok(())
}

fn render_list(context: &ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let entries = AdjustmentService::list_in_period(&context.roster, employee_id, context.period)?;
    if entries.is_empty() {
        io::print_info("Nenhum ajuste no período.");
        return Ok(());
    }
    let mut table = Table::new(
        Some("Ajustes no período"),
        vec![
            TableColumn::new("Data", 10),
            TableColumn::new("Tipo", 20),
            TableColumn::new("Previsto", 8),
            TableColumn::new("Obs", 30),
        ],
    );
    for (date, adjustment) in &entries {
        table.add_row(vec![
            date.to_string(),
            adjustment.kind.label().to_string(),
            adjustment.expected_minutes().to_string(),
            adjustment.note.clone().unwrap_or_default(),
        ]);
    }
    table.render();
    Ok(())
}

fn apply(context: &mut ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let date = io::prompt_date("Data", context.clock.today())?;

    let mut labels: Vec<String> = ADJUSTMENT_CATEGORIES
        .iter()
        .map(|kind| kind.label().to_string())
        .collect();
    labels.push("Ajuste de previsto (minutos)".into());
    let Some(index) = io::select("Tipo", &labels)? else {
        return Ok(());
    };
    let kind = if index < ADJUSTMENT_CATEGORIES.len() {
        ADJUSTMENT_CATEGORIES[index].clone()
    } else {
        let minutes = prompt_minutes()?;
        AdjustmentKind::Ajuste { minutes }
    };

    let note = io::prompt_text("Observação (opcional)")?;
    let adjustment = DayAdjustment::new(kind).with_note(note);
    AdjustmentService::apply(&mut context.roster, employee_id, date, adjustment)?;
    context.save_roster()?;
    io::print_success(format!("Ajuste aplicado em {date}."));
    Ok(())
}

fn remove(context: &mut ShellContext, employee_id: Uuid) -> Result<(), CliError> {
    let date = io::prompt_date("Data", context.clock.today())?;
    AdjustmentService::remove(&mut context.roster, employee_id, date)?;
    context.save_roster()?;
    io::print_success(format!("Ajuste removido de {date}."));
    Ok(())
}

fn prompt_minutes() -> Result<u32, CliError> {
    let text = io::prompt_text("Minutos previstos")?;
    text.trim()
        .parse::<u32>()
        .map_err(|_| CliError::Input(format!("`{}` não é um número de minutos", text.trim())))
}
