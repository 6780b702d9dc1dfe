//! Padded-column tables for read-only overviews.

use colored::Colorize;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple table model rendered with space-padded columns.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    pub fn render(&self) {
        if let Some(title) = &self.title {
            println!("{}", title.as_str().bold());
        }
        if self.columns.is_empty() {
            return;
        }

        let total_width = self
            .columns
            .iter()
            .map(|col| col.width + 1)
            .sum::<usize>()
            .max(1);
        println!("{}", "─".repeat(total_width));
        let header: String = self
            .columns
            .iter()
            .map(|col| format!("{:width$} ", col.header, width = col.width))
            .collect();
        println!("{}", header.trim_end().bold());
        println!("{}", "─".repeat(total_width));

        for row in &self.rows {
            let mut line = String::new();
            for (idx, column) in self.columns.iter().enumerate() {
                if idx > 0 {
                    line.push(' ');
                }
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{:width$}", cell, width = column.width));
            }
            println!("{}", line.trim_end());
        }
    }
}
