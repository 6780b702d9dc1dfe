//! Persisted user preferences.

use ponto_domain::PunchPolicy;

use crate::cli::{io, shell_context::ShellContext};
use crate::errors::CliError;

pub fn show(context: &mut ShellContext) -> Result<(), CliError> {
    loop {
        io::print_info(format!(
            "5ª batida: {} | período padrão: {} dias | cores: {}",
            context.config.punch_policy.label(),
            context.config.period_days,
            if context.config.ui_color_enabled { "sim" } else { "não" },
        ));
        let items: Vec<String> = [
            "Política da 5ª batida",
            "Dias do período padrão",
            "Cores no terminal",
            "Voltar",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        match io::select("Preferências", &items)? {
            Some(0) => edit_punch_policy(context)?,
            Some(1) => edit_period_days(context)?,
            Some(2) => toggle_colors(context)?,
            _ => break,
        }
    }
    Ok(())
}

fn edit_punch_policy(context: &mut ShellContext) -> Result<(), CliError> {
    let policies = [PunchPolicy::Reject, PunchPolicy::Overwrite];
    let labels: Vec<String> = policies.iter().map(|policy| policy.label().to_string()).collect();
    if let Some(index) = io::select("Com o dia completo, a 5ª batida deve", &labels)? {
        context.config.punch_policy = policies[index];
        context.save_config()?;
        io::print_success("Preferência salva.");
    }
    Ok(())
}

fn edit_period_days(context: &mut ShellContext) -> Result<(), CliError> {
    let text = io::prompt_with_default(
        "Dias do período padrão",
        context.config.period_days.to_string(),
    )?;
    let days = text
        .trim()
        .parse::<u32>()
        .map_err(|_| CliError::Input(format!("`{}` não é um número de dias", text.trim())))?;
    if days == 0 {
        return Err(CliError::Input("o período precisa de ao menos 1 dia".into()));
    }
    context.config.period_days = days;
    context.save_config()?;
    io::print_success("Preferência salva.");
    Ok(())
}

fn toggle_colors(context: &mut ShellContext) -> Result<(), CliError> {
    let enabled = io::confirm("Usar cores no terminal?", context.config.ui_color_enabled)?;
    context.config.ui_color_enabled = enabled;
    if !enabled {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
    context.save_config()?;
    io::print_success("Preferência salva.");
    Ok(())
}
