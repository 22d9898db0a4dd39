//! Page content-stream builder: the handful of text and graphics
//! operators the invoice template needs.

use crate::file::{escape_text, format_coord};
use crate::fonts::Font;

#[derive(Debug, Default)]
pub struct Content {
    ops: Vec<u8>,
}

impl Content {
    pub fn new() -> Self {
        Content { ops: Vec::new() }
    }

    fn push(&mut self, op: String) {
        self.ops.extend_from_slice(op.as_bytes());
    }

    /// Show `text` with its baseline starting at (x, y).
    /// Coordinates use PDF's bottom-left origin.
    pub fn text(&mut self, font: Font, size: f64, x: f64, y: f64, text: &str) {
        self.push(format!(
            "BT\n/{} {} Tf\n{} {} Td\n({}) Tj\nET\n",
            font.pdf_name(),
            format_coord(size),
            format_coord(x),
            format_coord(y),
            escape_text(text),
        ));
    }

    /// Show `text` ending at x = `right`, the metric equivalent of
    /// reportlab's drawRightString.
    pub fn text_right(&mut self, font: Font, size: f64, right: f64, y: f64, text: &str) {
        let x = right - font.measure(text, size);
        self.text(font, size, x, y, text);
    }

    pub fn save_state(&mut self) {
        self.ops.extend_from_slice(b"q\n");
    }

    pub fn restore_state(&mut self) {
        self.ops.extend_from_slice(b"Q\n");
    }

    /// Set the fill gray level: 0.0 black, 1.0 white.
    pub fn set_fill_gray(&mut self, level: f64) {
        self.push(format!("{} g\n", format_coord(level)));
    }

    pub fn set_stroke_gray(&mut self, level: f64) {
        self.push(format!("{} G\n", format_coord(level)));
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.push(format!("{} w\n", format_coord(width)));
    }

    /// Fill the rectangle with corner (x, y) using the current fill.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(format!(
            "{} {} {} {} re\nf\n",
            format_coord(x),
            format_coord(y),
            format_coord(width),
            format_coord(height),
        ));
    }

    /// Stroke a straight line between two points.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(format!(
            "{} {} m\n{} {} l\nS\n",
            format_coord(x1),
            format_coord(y1),
            format_coord(x2),
            format_coord(y2),
        ));
    }

    pub fn bytes(&self) -> &[u8] {
        &self.ops
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops
    }
}
