//! # ASCII Table Formatter
//!
//! Renders coin listings as ASCII tables:
//!
//! ```text
//! +----------+-----------+----------+---------+----------+----------+
//! | Name     | Algorithm | Supply   | Founded | Price    | Founder  |
//! +----------+-----------+----------+---------+----------+----------+
//! | Bitcoin  | SHA256    | 21000000 |    2009 | 60000.50 | Satoshi  |
//! | Litecoin | Scrypt    | 84000000 |    2011 |    80.10 | Lee      |
//! +----------+-----------+----------+---------+----------+----------+
//! ```
//!
//! Column widths are the maximum of the header and the widest value, capped
//! at [`MAX_COLUMN_WIDTH`] (overlong values are truncated with `...`). Text
//! columns are left-aligned, numeric columns right-aligned. Two passes: one
//! to measure, one to render.

use std::fmt::Write;

use crate::record::Coin;

const MAX_COLUMN_WIDTH: usize = 40;

const HEADERS: [&str; 6] = ["Name", "Algorithm", "Supply", "Founded", "Price", "Founder"];

/// Right-aligned columns (supply, founded, price).
const NUMERIC: [bool; 6] = [false, false, true, true, true, false];

pub struct TableFormatter {
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn from_coins<'a, I>(coins: I) -> Self
    where
        I: IntoIterator<Item = &'a Coin>,
    {
        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
        let rows: Vec<Vec<String>> = coins
            .into_iter()
            .map(|coin| {
                let row = vec![
                    coin.name.clone(),
                    coin.algorithm.clone(),
                    coin.supply.to_string(),
                    coin.founded.to_string(),
                    format!("{:.2}", coin.price),
                    coin.founder.clone(),
                ];
                for (i, value) in row.iter().enumerate() {
                    widths[i] = widths[i].max(value.len()).min(MAX_COLUMN_WIDTH);
                }
                row
            })
            .collect();

        Self { widths, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        self.write_header_row(&mut output);
        self.write_separator(&mut output);
        for row in &self.rows {
            self.write_data_row(&mut output, row);
        }
        self.write_separator(&mut output);

        output
    }

    fn write_separator(&self, output: &mut String) {
        output.push('+');
        for width in &self.widths {
            for _ in 0..(*width + 2) {
                output.push('-');
            }
            output.push('+');
        }
        output.push('\n');
    }

    fn write_header_row(&self, output: &mut String) {
        output.push('|');
        for (i, header) in HEADERS.iter().enumerate() {
            let width = self.widths[i];
            let _ = write!(output, " {:<width$} |", truncate(header, width));
        }
        output.push('\n');
    }

    fn write_data_row(&self, output: &mut String, row: &[String]) {
        output.push('|');
        for (i, value) in row.iter().enumerate() {
            let width = self.widths[i];
            let truncated = truncate(value, width);
            if NUMERIC[i] {
                let _ = write!(output, " {truncated:>width$} |");
            } else {
                let _ = write!(output, " {truncated:<width$} |");
            }
        }
        output.push('\n');
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.len() <= width {
        value.to_string()
    } else if width > 3 {
        format!("{}...", &value[..floor_char_boundary(value, width - 3)])
    } else {
        value[..floor_char_boundary(value, width)].to_string()
    }
}

/// Largest char boundary at or below `max`, so the cut never lands inside a
/// multi-byte character.
fn floor_char_boundary(value: &str, max: usize) -> usize {
    if max >= value.len() {
        return value.len();
    }
    let mut cut = max;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}
