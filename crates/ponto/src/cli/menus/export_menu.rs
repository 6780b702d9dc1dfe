//! CSV export of the active period.

use ponto_core::{ExportScope, ExportService};

use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    let items: Vec<String> = ["Um funcionário", "Todos os funcionários", "Voltar"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let scope = match io::select("Exportar CSV", &items)? {
        Some(0) => match super::select_employee(context, false)? {
            Some(id) => ExportScope::Employee(id),
            None => return Ok(()),
        },
        Some(1) => ExportScope::All,
        _ => return Ok(()),
    };

    let dir = context.config.resolve_default_roster_root().join("exports");
    let path = ExportService::write_csv(&context.roster, scope, context.period, &dir)?;
    tracing::info!(path = %path.display(), "csv exported");
    io::print_success(format!("Exportado para {}", path.display()));
    Ok(())
}
