pub mod adjustments_menu;
pub mod employees_menu;
pub mod export_menu;
pub mod period_menu;
pub mod preferences_menu;
pub mod punch_menu;
pub mod records_menu;

use uuid::Uuid;

use ponto_core::PunchService;
use ponto_domain::Employee;

use crate::errors::CliError;

use super::{io, shell_context::ShellContext};

/// Selects an employee by name; `active_only` hides deactivated entries.
/// Returns `None` when there is nobody to pick or the user backs out.
pub(crate) fn select_employee(
    context: &ShellContext,
    active_only: bool,
) -> Result<Option<Uuid>, CliError> {
    let employees: Vec<&Employee> = context
        .roster
        .employees
        .iter()
        .filter(|employee| !active_only || employee.active)
        .collect();
    if employees.is_empty() {
        io::print_warning("Nenhum funcionário cadastrado.");
        return Ok(None);
    }
    let labels: Vec<String> = employees
        .iter()
        .map(|employee| {
            let mut label = employee.name.clone();
            if let Some(role) = &employee.role {
                label.push_str(&format!(" — {role}"));
            }
            if !employee.active {
                label.push_str(" (inativo)");
            }
            label
        })
        .collect();
    Ok(io::select("Funcionário", &labels)?.map(|index| employees[index].id))
}

/// Admin PIN gate; unlocks once per session.
pub(crate) fn require_admin(context: &mut ShellContext) -> Result<bool, CliError> {
    if context.admin_unlocked {
        return Ok(true);
    }
    let pin = io::prompt_pin("PIN do administrador")?;
    match PunchService::verify_admin_pin(&context.roster, &pin) {
        Ok(()) => {
            context.admin_unlocked = true;
            Ok(true)
        }
        Err(_) => {
            io::print_error("PIN incorreto.");
            Ok(false)
        }
    }
}
