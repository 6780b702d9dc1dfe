//! Prompt and output helpers over dialoguer, sharing one colorful theme.

use std::fmt;

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use once_cell::sync::Lazy;

use crate::errors::CliError;

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

pub fn theme() -> &'static ColorfulTheme {
    &THEME
}

/// Arrow-key selection; `None` when the user backs out with ESC.
pub fn select(prompt: &str, items: &[String]) -> Result<Option<usize>, CliError> {
    Select::with_theme(theme())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CliError::from)
}

/// Free-form text input; empty input is allowed and returned as-is.
pub fn prompt_text(prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Text input pre-filled with a default value.
pub fn prompt_with_default(prompt: &str, default: String) -> Result<String, CliError> {
    Input::<String>::with_theme(theme())
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(CliError::from)
}

/// `YYYY-MM-DD` date input, validated before it is accepted.
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate, CliError> {
    let text = Input::<String>::with_theme(theme())
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "use o formato YYYY-MM-DD")
        })
        .interact_text()?;
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::Input(format!("invalid date `{}`", text.trim())))
}

/// Masked PIN entry.
pub fn prompt_pin(prompt: &str) -> Result<String, CliError> {
    Password::with_theme(theme())
        .with_prompt(prompt)
        .interact()
        .map_err(CliError::from)
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(theme())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

pub fn print_info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn print_success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn print_warning(message: impl fmt::Display) {
    println!("{}", message.to_string().yellow());
}

pub fn print_error(message: impl fmt::Display) {
    eprintln!("{}", format!("Erro: {message}").red());
}
