//! Column-based table placement with row-atomic pagination.
//!
//! The table holds layout only (column widths, padding); the caller
//! feeds it one [`Row`] at a time. A row either fits in the space the
//! cursor has left or it is not drawn at all — the caller turns the
//! page and retries, so no row is ever split across a page boundary.

use crate::content::Content;
use crate::fonts::Font;
use crate::wrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One cell: text plus the style the template needs (font, size,
/// horizontal alignment). Text wraps to the column width.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub font: Font,
    pub size: f64,
    pub align: Align,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            font: Font::Helvetica,
            size: 10.0,
            align: Align::Left,
        }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Cell {
            align: Align::Right,
            ..Cell::new(text)
        }
    }

    pub fn bold(mut self) -> Self {
        self.font = Font::HelveticaBold;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// Result of trying to place a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFit {
    /// The row was drawn and the cursor advanced.
    Placed,
    /// Nothing was drawn; the remaining space is too short. Turn the
    /// page, reset the cursor, and retry.
    PageFull,
}

/// Table layout: column widths in points, cell padding, and the gray
/// level for the header band.
pub struct Table {
    pub columns: Vec<f64>,
    pub padding: f64,
    pub header_fill: f64,
}

impl Table {
    pub fn new(columns: Vec<f64>) -> Self {
        Table {
            columns,
            padding: 5.0,
            header_fill: 0.85,
        }
    }

    pub fn width(&self) -> f64 {
        self.columns.iter().sum()
    }

    /// Height the row needs: the tallest cell after wrapping, plus
    /// padding top and bottom.
    pub fn row_height(&self, row: &Row) -> f64 {
        let mut max_lines_height = Font::line_height(10.0);
        for (index, &column) in self.columns.iter().enumerate() {
            if let Some(cell) = row.cells.get(index) {
                let avail = (column - 2.0 * self.padding).max(0.0);
                let lines = wrap(&cell.text, avail, cell.font, cell.size).len();
                let height = lines as f64 * Font::line_height(cell.size);
                max_lines_height = max_lines_height.max(height);
            }
        }
        max_lines_height + 2.0 * self.padding
    }

    /// Draw the header band and its row, unconditionally. The caller
    /// places it at the top of each page before any data row, so the
    /// space is known to be there.
    pub fn place_header(&self, row: &Row, cursor: &mut TableCursor, content: &mut Content) {
        let height = self.row_height(row);
        content.save_state();
        content.set_fill_gray(self.header_fill);
        content.fill_rect(cursor.x, cursor.y - height, self.width(), height);
        content.restore_state();
        self.draw_cells(row, cursor, content);
        cursor.y -= height;
    }

    /// Place a data row if it fits in the cursor's remaining space.
    ///
    /// On a fresh page a row that does not fit is placed anyway —
    /// turning the page again could not give it more room, and the
    /// alternative is looping forever.
    pub fn fit_row(&self, row: &Row, cursor: &mut TableCursor, content: &mut Content) -> RowFit {
        let height = self.row_height(row);
        if cursor.y - height < cursor.bottom && !cursor.fresh {
            return RowFit::PageFull;
        }
        self.draw_cells(row, cursor, content);
        cursor.y -= height;
        cursor.fresh = false;
        RowFit::Placed
    }

    fn draw_cells(&self, row: &Row, cursor: &TableCursor, content: &mut Content) {
        let mut column_x = cursor.x;
        for (index, &column) in self.columns.iter().enumerate() {
            if let Some(cell) = row.cells.get(index) {
                let avail = (column - 2.0 * self.padding).max(0.0);
                let lines = wrap(&cell.text, avail, cell.font, cell.size);
                let leading = Font::line_height(cell.size);
                // Baseline of the first line: top padding plus an
                // ascent approximated by the font size.
                let mut y = cursor.y - self.padding - cell.size;
                for line in &lines {
                    match cell.align {
                        Align::Left => {
                            content.text(cell.font, cell.size, column_x + self.padding, y, line);
                        }
                        Align::Right => {
                            content.text_right(
                                cell.font,
                                cell.size,
                                column_x + column - self.padding,
                                y,
                                line,
                            );
                        }
                    }
                    y -= leading;
                }
            }
            column_x += column;
        }
    }
}

/// Tracks where the next row lands on the current page.
pub struct TableCursor {
    x: f64,
    y: f64,
    bottom: f64,
    /// True while the cursor sits on a full fresh page with no data
    /// row placed yet. A first page shared with other blocks starts
    /// false: a row refused there still gains room from a page turn.
    fresh: bool,
}

impl TableCursor {
    /// Cursor at `top`, refusing rows that would cross `bottom`.
    pub fn new(x: f64, top: f64, bottom: f64) -> Self {
        TableCursor {
            x,
            y: top,
            bottom,
            fresh: false,
        }
    }

    /// Move to the top of a fresh page.
    pub fn reset(&mut self, top: f64) {
        self.y = top;
        self.fresh = true;
    }

    /// Top of the next row — after the last row, the bottom edge of
    /// the table. Content that follows (totals) positions itself here.
    pub fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column() -> Table {
        Table::new(vec![120.0, 120.0])
    }

    fn row(a: &str, b: &str) -> Row {
        Row::new(vec![Cell::new(a), Cell::right(b)])
    }

    #[test]
    fn single_line_row_height() {
        let table = two_column();
        // One 10pt line plus 5pt padding each side.
        assert!((table.row_height(&row("Abono", "20,00")) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn wrapped_text_grows_the_row() {
        let table = two_column();
        let long = row(
            "Trabajos de recolección de aceituna en finca La Loma durante toda la campaña",
            "20,00",
        );
        assert!(table.row_height(&long) > table.row_height(&row("Abono", "20,00")));
    }

    #[test]
    fn rows_advance_the_cursor() {
        let table = two_column();
        let mut cursor = TableCursor::new(0.0, 700.0, 50.0);
        let mut content = Content::new();
        assert_eq!(table.fit_row(&row("a", "b"), &mut cursor, &mut content), RowFit::Placed);
        assert!((cursor.y() - 678.0).abs() < 1e-9);
    }

    #[test]
    fn full_page_refuses_row_without_drawing() {
        let table = two_column();
        let mut content = Content::new();
        // 22pt row into 10pt of remaining space on a shared page.
        let mut cursor = TableCursor::new(0.0, 70.0, 60.0);
        let before = content.bytes().len();
        let fit = table.fit_row(&row("c", "d"), &mut cursor, &mut content);
        assert_eq!(fit, RowFit::PageFull);
        // Atomic: a refused row leaves no partial content behind.
        assert_eq!(content.bytes().len(), before);
        assert!((cursor.y() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn fresh_page_places_oversized_row_anyway() {
        let table = two_column();
        // Row needs 22pt, the whole fresh page offers 10pt; another
        // page turn cannot help, so the row goes down with overflow.
        let mut cursor = TableCursor::new(0.0, 700.0, 50.0);
        cursor.reset(70.0);
        cursor.bottom = 60.0;
        let mut content = Content::new();
        assert_eq!(table.fit_row(&row("a", "b"), &mut cursor, &mut content), RowFit::Placed);
    }

    #[test]
    fn header_does_not_spend_the_fresh_page() {
        let table = two_column();
        let mut cursor = TableCursor::new(0.0, 700.0, 60.0);
        cursor.reset(80.0);
        let mut content = Content::new();
        table.place_header(&row("A", "B"), &mut cursor, &mut content);
        // 22pt row into <2pt of space, but the page holds only the
        // header: the row goes down rather than looping forever.
        assert_eq!(table.fit_row(&row("a", "b"), &mut cursor, &mut content), RowFit::Placed);
    }

    #[test]
    fn reset_restores_top_and_freshness() {
        let table = two_column();
        let mut cursor = TableCursor::new(0.0, 700.0, 50.0);
        let mut content = Content::new();
        table.fit_row(&row("a", "b"), &mut cursor, &mut content);
        cursor.reset(650.0);
        assert!((cursor.y() - 650.0).abs() < 1e-9);
        assert!(cursor.fresh);
    }
}
