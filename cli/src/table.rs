// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// One column of a rendered table.
pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table with per-cell coloring.
///
/// Cells are padded to the widest entry of their column before the color
/// codes are applied, so escape sequences never skew the layout.
pub struct Table<'a, T, C: Column<T>> {
    pub columns: Vec<C>,
    pub separator: String,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_widths(&self.columns, &cells);

        for (row, data) in cells.into_iter().zip(self.data) {
            for (j, cell) in row.into_iter().enumerate() {
                let col = &self.columns[j];
                let cell = pad(cell, widths[j], col.padding_direction());
                let cell = match col.color(data) {
                    Some(color) => cell.color(color).to_string(),
                    None => cell,
                };
                write!(w, "{cell}")?;

                if j < self.columns.len() - 1 {
                    write!(w, "{}", self.separator)?;
                } else {
                    writeln!(w)?;
                }
            }
        }

        Ok(())
    }
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

fn column_widths<T, C: Column<T>>(columns: &[C], cells: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![0; columns.len()];
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    // The last column does not need trailing padding when left-aligned.
    if let Some((last, width)) = columns.last().zip(widths.last_mut())
        && last.padding_direction() == PaddingDirection::Left
    {
        *width = 0;
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    enum PairColumn {
        First,
        Second,
    }

    impl Column<Pair> for PairColumn {
        fn format(&self, data: &Pair) -> String {
            match self {
                Self::First => data.0.to_string(),
                Self::Second => data.1.to_string(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                Self::First => PaddingDirection::Right,
                Self::Second => PaddingDirection::Left,
            }
        }

        fn color(&self, _data: &Pair) -> Option<Color> {
            None
        }
    }

    #[test]
    fn pads_columns_to_the_widest_cell() {
        let data = [Pair("9", "short"), Pair("1234", "a longer cell")];
        let table = Table {
            columns: vec![PairColumn::First, PairColumn::Second],
            separator: "  ".to_string(),
            data: &data,
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "   9  short\n1234  a longer cell\n");
    }

    #[test]
    fn empty_data_writes_nothing() {
        let data: [Pair; 0] = [];
        let table = Table {
            columns: vec![PairColumn::First, PairColumn::Second],
            separator: "  ".to_string(),
            data: &data,
        };

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
