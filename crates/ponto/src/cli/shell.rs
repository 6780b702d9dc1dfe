//! Top-level interactive loop.

use colored::Colorize;

use crate::errors::CliError;

use super::{io, menus, shell_context::ShellContext};

pub fn run_cli() -> Result<(), CliError> {
    let mut context = ShellContext::bootstrap()?;
    if !context.config.ui_color_enabled {
        colored::control::set_override(false);
    }
    tracing::info!(roster = %context.roster_name, "ponto started");

    loop {
        banner(&context);
        let items: Vec<String> = MAIN_MENU.iter().map(|(label, _)| label.to_string()).collect();
        let choice = match io::select("Menu principal", &items)? {
            Some(index) => MAIN_MENU[index].1,
            None => MainAction::Exit,
        };
        if choice == MainAction::Exit {
            break;
        }
        // Errors are local and non-fatal: report and return to the menu.
        if let Err(err) = dispatch(choice, &mut context) {
            io::print_error(&err);
        }
    }
    io::print_info("Até logo!");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    Punch,
    Records,
    Adjustments,
    Employees,
    Period,
    Export,
    Preferences,
    Exit,
}

const MAIN_MENU: [(&str, MainAction); 8] = [
    ("Bater ponto", MainAction::Punch),
    ("Lançar ponto (admin)", MainAction::Records),
    ("Folgas & compensação (admin)", MainAction::Adjustments),
    ("Funcionários & escala (admin)", MainAction::Employees),
    ("Período", MainAction::Period),
    ("Exportar CSV", MainAction::Export),
    ("Preferências", MainAction::Preferences),
    ("Sair", MainAction::Exit),
];

fn dispatch(action: MainAction, context: &mut ShellContext) -> Result<(), CliError> {
    match action {
        MainAction::Punch => menus::punch_menu::show(context),
        MainAction::Records => menus::records_menu::show(context),
        MainAction::Adjustments => menus::adjustments_menu::show(context),
        MainAction::Employees => menus::employees_menu::show(context),
        MainAction::Period => menus::period_menu::show(context),
        MainAction::Export => menus::export_menu::show(context),
        MainAction::Preferences => menus::preferences_menu::show(context),
        MainAction::Exit => Ok(()),
    }
}

fn banner(context: &ShellContext) {
    println!();
    println!(
        "{}  —  período {}",
        context.roster.name.as_str().bold(),
        context.period
    );
}
