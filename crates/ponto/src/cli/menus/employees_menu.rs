//! Employee registry and weekly schedule administration.

use uuid::Uuid;

use ponto_core::{BalanceService, RosterService};
use ponto_domain::{format_minutes, Weekday, WEEKDAYS};

use crate::cli::ui::{
    format::saldo_pill,
    table::{Table, TableColumn},
};
use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    if !super::require_admin(context)? {
        return Ok(());
    }

    loop {
        render_registry(context);
        let items: Vec<String> = [
            "Adicionar funcionário",
            "Editar funcionário",
            "Escala semanal",
            "Ativar/desativar",
            "Remover funcionário",
            "Alterar PIN do administrador",
            "Voltar",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        match io::select("Funcionários & escala", &items)? {
            Some(0) => add(context)?,
            Some(1) => edit(context)?,
            Some(2) => edit_schedule(context)?,
            Some(3) => toggle_active(context)?,
            Some(4) => remove(context)?,
            Some(5) => change_admin_pin(context)?,
            _ => break,
        }
    }
    Ok(())
}

fn render_registry(context: &ShellContext) {
    let mut table = Table::new(
        Some("Funcionários"),
        vec![
            TableColumn::new("Nome", 24),
            TableColumn::new("Cargo", 16),
            TableColumn::new("Ativo", 5),
            TableColumn::new("Saldo do período", 24),
        ],
    );
    for (id, balance) in BalanceService::roster_balances(&context.roster, context.period) {
        if let Some(employee) = context.roster.employee(id) {
            table.add_row(vec![
                employee.name.clone(),
                employee.role.clone().unwrap_or_default(),
                if employee.active { "sim" } else { "não" }.to_string(),
                saldo_pill(balance.saldo),
            ]);
        }
    }
    table.render();
}

fn add(context: &mut ShellContext) -> Result<(), CliError> {
    let name = io::prompt_text("Nome")?;
    let role = io::prompt_text("Cargo (opcional)")?;
    let role = (!role.trim().is_empty()).then_some(role);
    let id = RosterService::add_employee(&mut context.roster, &name, role.as_deref())?;

    let pin = io::prompt_pin("PIN do funcionário (4 dígitos, vazio mantém 1234)")?;
    if !pin.trim().is_empty() {
        RosterService::set_pin(&mut context.roster, id, &pin)?;
    }
    context.save_roster()?;
    io::print_success("Funcionário cadastrado.");
    Ok(())
}

fn edit(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(id) = super::select_employee(context, false)? else {
        return Ok(());
    };
    let (current_name, current_role) = {
        let employee = context
            .roster
            .employee(id)
            .ok_or_else(|| CliError::Input("funcionário não encontrado".into()))?;
        (employee.name.clone(), employee.role.clone())
    };

    let name = io::prompt_with_default("Nome", current_name)?;
    RosterService::rename(&mut context.roster, id, &name)?;

    let role = io::prompt_with_default("Cargo (vazio remove)", current_role.unwrap_or_default())?;
    RosterService::set_role(&mut context.roster, id, Some(&role))?;

    let pin = io::prompt_pin("Novo PIN (vazio mantém)")?;
    if !pin.trim().is_empty() {
        RosterService::set_pin(&mut context.roster, id, &pin)?;
    }

    context.save_roster()?;
    io::print_success("Funcionário atualizado.");
    Ok(())
}

fn edit_schedule(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(id) = super::select_employee(context, false)? else {
        return Ok(());
    };

    for weekday in WEEKDAYS {
        let day = {
            let employee = context
                .roster
                .employee(id)
                .ok_or_else(|| CliError::Input("funcionário não encontrado".into()))?;
            *employee.schedule.day(weekday)
        };
        let active = io::confirm(&format!("{weekday}: dia de trabalho?"), day.active)?;
        let minutes = if active {
            prompt_schedule_minutes(weekday, day.minutes)?
        } else {
            0
        };
        RosterService::set_schedule_day(&mut context.roster, id, weekday, active, minutes)?;
    }

    context.save_roster()?;
    io::print_success("Escala atualizada.");
    Ok(())
}

fn prompt_schedule_minutes(weekday: Weekday, current: u32) -> Result<u32, CliError> {
    let text = io::prompt_with_default(
        &format!("{weekday}: minutos previstos ({} hoje)", format_minutes(i64::from(current))),
        current.to_string(),
    )?;
    text.trim()
        .parse::<u32>()
        .map_err(|_| CliError::Input(format!("`{}` não é um número de minutos", text.trim())))
}

fn toggle_active(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(id) = super::select_employee(context, false)? else {
        return Ok(());
    };
    let active = context
        .roster
        .employee(id)
        .map(|employee| employee.active)
        .unwrap_or(false);
    RosterService::set_active(&mut context.roster, id, !active)?;
    context.save_roster()?;
    io::print_success(if active {
        "Funcionário desativado (histórico preservado)."
    } else {
        "Funcionário reativado."
    });
    Ok(())
}

fn remove(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(id) = super::select_employee(context, false)? else {
        return Ok(());
    };
    let name = context
        .roster
        .employee(id)
        .map(|employee| employee.name.clone())
        .unwrap_or_default();
    // Destructive cascade: records and adjustments go with the employee.
    let prompt = format!("Remover {name} e TODOS os seus registros e ajustes?");
    if !io::confirm(&prompt, false)? {
        return Ok(());
    }
    RosterService::remove_employee(&mut context.roster, id)?;
    context.save_roster()?;
    io::print_success("Funcionário removido.");
    Ok(())
}

fn change_admin_pin(context: &mut ShellContext) -> Result<(), CliError> {
    let pin = io::prompt_pin("Novo PIN do administrador (4 dígitos)")?;
    RosterService::set_admin_pin(&mut context.roster, &pin)?;
    context.save_roster()?;
    io::print_success("PIN do administrador alterado.");
    Ok(())
}
