//! Plain bordered text tables for query results.

use std::fmt;

const NULL_CELL: &str = "NULL";

/// Anything that can be laid out as one table row.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Option<String>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_rows<T: Tabular>(rows: &[T]) -> Self {
        let mut table = Self::new(T::headers());
        for row in rows {
            table.push(row.cells());
        }
        table
    }

    pub fn push(&mut self, mut cells: Vec<Option<String>>) {
        cells.resize(self.headers.len(), None);
        self.rows.push(cells);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in row `index`; `None` for NULL or a missing cell.
    pub fn cell(&self, index: usize, column: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows.get(index)?.get(col)?.as_deref()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .map(|row| cell_text(&row[idx]).chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn cell_text(cell: &Option<String>) -> &str {
    cell.as_deref().unwrap_or(NULL_CELL)
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (text, width) in cells.zip(widths) {
        let pad = width - text.chars().count();
        write!(f, "| {}{} ", text, " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_rule(f, &widths)?;
        write_line(f, &widths, self.headers.iter().map(String::as_str))?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_line(f, &widths, row.iter().map(cell_text))?;
        }
        if !self.rows.is_empty() {
            write_rule(f, &widths)?;
        }
        match self.rows.len() {
            1 => write!(f, "(1 row)"),
            n => write!(f, "({n} rows)"),
        }
    }
}
