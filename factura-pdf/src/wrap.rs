//! Greedy word wrapping against a width budget in points.
//!
//! Description cells are unbounded free text, so two guarantees
//! matter: every character of the input survives into the output
//! lines, and a single word wider than the budget is broken at
//! character granularity instead of overflowing the column.

use crate::fonts::Font;

/// Wrap `text` into lines no wider than `width` points. Explicit
/// newlines force a break; runs of whitespace collapse to one space.
/// Always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: f64, font: Font, size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, font, size, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(text: &str, width: f64, font: Font, size: f64, out: &mut Vec<String>) {
    let text = text.trim();
    if text.is_empty() {
        out.push(String::new());
        return;
    }
    let space = font.measure(" ", size);
    let mut current = String::new();
    let mut current_width = 0.0_f64;

    for word in text.split_whitespace() {
        let word_width = font.measure(word, size);

        if word_width > width {
            // Oversized word: flush the current line, then emit the
            // word in column-wide pieces, keeping the last piece open
            // so following words can share its line.
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            let pieces = break_word(word, width, font, size);
            let last = pieces.len() - 1;
            for (i, piece) in pieces.into_iter().enumerate() {
                if i < last {
                    out.push(piece);
                } else {
                    current_width = font.measure(&piece, size);
                    current = piece;
                }
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space + word_width
        };
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = word_width;
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Split a single word into pieces that each fit `width`. Every piece
/// keeps at least one character so progress is guaranteed.
fn break_word(word: &str, width: f64, font: Font, size: f64) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0.0_f64;
    for ch in word.chars() {
        let ch_width = font.char_width(ch) as f64 * size / 1000.0;
        if piece_width + ch_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0.0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
