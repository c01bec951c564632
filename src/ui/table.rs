use std::io::Write;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;

/// One table cell: display text plus an optional color.
///
/// Width calculations use the uncolored text so ANSI escapes never skew
/// column alignment.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Cell {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: Color) -> Self {
        Cell {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }

    fn render(&self) -> String {
        match self.color {
            Some(color) => self.text.as_str().color(color).bold().to_string(),
            None => self.text.clone(),
        }
    }
}

/// A titled, column-aligned plain-text table.
#[derive(Debug)]
pub struct Table {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(title: S, columns: &[&str]) -> Self {
        Table {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table, title first, then the header and rows.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let widths = self.column_widths();

        writeln!(out)?;
        writeln!(out, "{}", self.title.as_str().bold().bright_cyan())?;

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(name, width)| pad(name, *width))
            .collect();
        writeln!(out, "{}", header.join("  ").as_str().bold())?;

        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(out, "{}", "-".repeat(rule_width))?;

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(&cell.render());
                let padding = widths[i].saturating_sub(cell.width());
                line.push_str(&" ".repeat(padding));
            }
            writeln!(out, "{}", line.trim_end())?;
        }

        Ok(())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|name| UnicodeWidthStr::width(name.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.width() > widths[i] {
                    widths[i] = cell.width();
                }
            }
        }

        widths
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}
