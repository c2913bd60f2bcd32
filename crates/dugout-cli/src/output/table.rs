//! Plain-text table layout.

use unicode_width::UnicodeWidthStr;

/// An aligned table built row by row and rendered in one pass.
///
/// Columns are sized to the widest cell by display width, so wide glyphs
/// (CJK names in particular) keep the column rule straight.
#[derive(Debug)]
pub(super) struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(super) fn new<I>(headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub(super) fn push_row<I>(&mut self, row: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let cells: Vec<String> = row.into_iter().map(Into::into).collect();
        debug_assert_eq!(cells.len(), self.headers.len(), "row arity mismatch");
        self.rows.push(cells);
    }

    /// Renders the header row, a rule, then one line per row.
    pub(super) fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();
        write_row(&mut output, &self.headers, &widths);
        write_rule(&mut output, &widths);
        for row in &self.rows {
            write_row(&mut output, row, &widths);
        }
        output
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|header| header.width()).collect();
        for row in &self.rows {
            for (cell, width) in row.iter().zip(widths.iter_mut()) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

fn write_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if index > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        for _ in cell.width()..*width {
            line.push(' ');
        }
    }
    output.push_str(line.trim_end());
    output.push('\n');
}

fn write_rule(output: &mut String, widths: &[usize]) {
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            output.push_str("-+-");
        }
        for _ in 0..*width {
            output.push('-');
        }
    }
    output.push('\n');
}
