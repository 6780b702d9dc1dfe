//! Active date range for balances and exports.

use ponto_domain::Period;

use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    io::print_info(format!("Período atual: {}", context.period));
    let items: Vec<String> = [
        "Editar datas",
        "Voltar ao padrão (últimos dias até hoje)",
        "Voltar",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    match io::select("Período", &items)? {
        Some(0) => {
            let from = io::prompt_date("De", context.period.from)?;
            let to = io::prompt_date("Até", context.period.to)?;
            let period = Period::new(from, to);
            if period.is_empty() {
                io::print_warning("Data final antes da inicial: o período não contém dias.");
            }
            context.period = period;
            io::print_success(format!("Período ajustado: {}", context.period));
        }
        Some(1) => {
            context.period =
                Period::ending_at(context.clock.today(), context.config.period_days);
            io::print_success(format!("Período ajustado: {}", context.period));
        }
        _ => {}
    }
    Ok(())
}
