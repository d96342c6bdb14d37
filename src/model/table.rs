//! Table model structures.

use super::{Color, TextStyle};
use crate::units::Emu;
use serde::{Deserialize, Serialize};

/// A cell in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text
    pub text: String,

    /// Solid background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,

    /// Text styling for the cell's run
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: TextStyle,
}

fn is_default_style(style: &TextStyle) -> bool {
    *style == TextStyle::default()
}

impl Cell {
    /// Create a cell with text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a header cell: given fill, bold white text.
    pub fn header(text: impl Into<String>, fill: Color) -> Self {
        Self {
            text: text.into(),
            fill: Some(fill),
            style: TextStyle::bold_colored(Color::WHITE),
        }
    }

    /// Check if this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cells in this row
    #[serde(default)]
    pub cells: Vec<Cell>,

    /// Whether this is a header row
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_header: bool,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data row from plain cell texts.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(Cell::with_text).collect(),
            is_header: false,
        }
    }

    /// Create a header row with the given fill applied to every cell.
    pub fn header<I, S>(texts: I, fill: Color) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(|t| Cell::header(t, fill)).collect(),
            is_header: true,
        }
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A table placed on a slide as a fixed grid of rows and columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Offset from the left edge of the slide
    pub left: Emu,

    /// Offset from the top edge of the slide
    pub top: Emu,

    /// Overall frame width
    pub width: Emu,

    /// Overall frame height
    pub height: Emu,

    /// Per-column widths; the grid's column count
    pub column_widths: Vec<Emu>,

    /// Rows in this table
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table frame with the given geometry and columns.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu, column_widths: Vec<Emu>) -> Self {
        Self {
            left,
            top,
            width,
            height,
            column_widths,
            rows: Vec::new(),
        }
    }

    /// Add a row to this table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Get the header rows.
    pub fn header_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.is_header).collect()
    }

    /// Get the data rows (non-header).
    pub fn data_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|r| !r.is_header).collect()
    }

    /// Get plain text representation, cells tab-separated.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            let cells: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
            text.push_str(&cells.join("\t"));
            text.push('\n');
        }
        text
    }
}
