//! Chronological record of compiled statistics.

use std::fmt::Write as _;

/// One generation's worth of compiled statistics.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Generation the record was taken at.
    pub generation: usize,
    /// Evaluations consumed by that generation.
    pub evaluations: usize,
    /// Compiled statistics entries, in compilation order.
    pub entries: Vec<(String, Vec<f64>)>,
}

impl Record {
    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Append-only history of [`Record`]s with column-wise retrieval and a
/// plain-text rendering.
///
/// # Examples
///
/// ```
/// use evokit::stats::{Logbook, Record};
///
/// let mut logbook = Logbook::new();
/// logbook.record(Record {
///     generation: 0,
///     evaluations: 20,
///     entries: vec![("min".to_string(), vec![4.0])],
/// });
/// logbook.record(Record {
///     generation: 1,
///     evaluations: 20,
///     entries: vec![("min".to_string(), vec![1.5])],
/// });
///
/// assert_eq!(logbook.select("min"), vec![vec![4.0], vec![1.5]]);
/// assert_eq!(logbook.select("gen"), vec![vec![0.0], vec![1.0]]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logbook {
    records: Vec<Record>,
}

impl Logbook {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Removes and returns the oldest record, for streaming consumption.
    pub fn pop_front(&mut self) -> Option<Record> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.records.remove(0))
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// One entry per record for the named column.
    ///
    /// `"gen"` and `"nevals"` select the generation and evaluation counters;
    /// any other name selects the matching statistics entry. A record
    /// missing the entry contributes an empty row, keeping the result
    /// aligned with the records.
    pub fn select(&self, name: &str) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|record| match name {
                "gen" => vec![record.generation as f64],
                "nevals" => vec![record.evaluations as f64],
                _ => record.get(name).map(<[f64]>::to_vec).unwrap_or_default(),
            })
            .collect()
    }

    /// Renders the history as an aligned text table.
    ///
    /// Columns are `gen`, `nevals`, then the entries of the first record in
    /// their compiled order. Scalar entries print bare; multi-objective
    /// entries print as a bracketed list.
    pub fn to_text(&self) -> String {
        let mut headers = vec!["gen".to_string(), "nevals".to_string()];
        if let Some(first) = self.records.first() {
            headers.extend(first.entries.iter().map(|(name, _)| name.clone()));
        }

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let mut row = vec![record.generation.to_string(), record.evaluations.to_string()];
            for name in &headers[2..] {
                let cell = record.get(name).map_or_else(String::new, format_values);
                row.push(cell);
            }
            rows.push(row);
        }

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                rows.iter()
                    .map(|row| row[column].len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut text = String::new();
        render_row(&mut text, &headers, &widths);
        for row in &rows {
            text.push('\n');
            render_row(&mut text, row, &widths);
        }
        text
    }
}

impl<'a> IntoIterator for &'a Logbook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn format_values(values: &[f64]) -> String {
    match values {
        [single] => format!("{single}"),
        _ => {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{joined}]")
        }
    }
}

fn render_row(text: &mut String, cells: &[String], widths: &[usize]) {
    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if column > 0 {
            text.push(' ');
        }
        let _ = write!(text, "{cell:>width$}");
    }
}
