/// The fonts the invoice template uses: the Helvetica family, part of
/// the 14 standard PDF fonts, available in every viewer without
/// embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    /// Resource name used in content streams.
    pub fn pdf_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// BaseFont name for the font dictionary.
    pub fn base_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Width of one character in 1/1000 em units.
    pub fn char_width(self, ch: char) -> u16 {
        let code = ch as u32;
        if (32..=126).contains(&code) {
            let index = (code - 32) as usize;
            match self {
                // Oblique shares the regular metrics.
                Font::Helvetica | Font::HelveticaOblique => HELVETICA_WIDTHS[index],
                Font::HelveticaBold => HELVETICA_BOLD_WIDTHS[index],
            }
        } else if ch == '€' {
            EURO_WIDTH
        } else {
            // Accented Latin-1 letters mostly track their base glyph;
            // a full-width estimate keeps wrapping conservative.
            LATIN1_WIDTH
        }
    }

    /// Width of a string in points at the given size.
    pub fn measure(self, text: &str, size: f64) -> f64 {
        let total: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        total as f64 * size / 1000.0
    }

    /// Baseline-to-baseline distance at the given size.
    pub fn line_height(size: f64) -> f64 {
        size * 1.2
    }
}

const EURO_WIDTH: u16 = 556;
const LATIN1_WIDTH: u16 = 556;

/// Character widths for Helvetica (ASCII 32..=126) in 1/1000 em.
/// Source: Adobe Helvetica AFM data.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // 32..41
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // 42..51
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // 52..61
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // 62..71
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 72..81
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 82..91
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // 92..101
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 102..111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 112..121
    500, 334, 260, 334, 584, // 122..126
];

/// Character widths for Helvetica-Bold (ASCII 32..=126) in 1/1000 em.
/// Source: Adobe Helvetica-Bold AFM data.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, // 32..41
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // 42..51
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, // 52..61
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // 62..71
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // 72..81
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // 82..91
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // 92..101
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 102..111
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // 112..121
    500, 389, 280, 389, 584, // 122..126
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_width() {
        assert_eq!(Font::Helvetica.char_width(' '), 278);
        assert_eq!(Font::HelveticaBold.char_width(' '), 278);
    }

    #[test]
    fn digits_share_a_width() {
        for ch in '0'..='9' {
            assert_eq!(Font::Helvetica.char_width(ch), 556);
        }
    }

    #[test]
    fn oblique_shares_regular_metrics() {
        for ch in ' '..='~' {
            assert_eq!(
                Font::Helvetica.char_width(ch),
                Font::HelveticaOblique.char_width(ch)
            );
        }
    }

    #[test]
    fn measure_scales_with_size() {
        // "Hello" = 722 + 556 + 222 + 222 + 556 = 2278 units.
        let at_ten = Font::Helvetica.measure("Hello", 10.0);
        assert!((at_ten - 22.78).abs() < 1e-9);
        let at_twenty = Font::Helvetica.measure("Hello", 20.0);
        assert!((at_twenty - 45.56).abs() < 1e-9);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        assert!(
            Font::HelveticaBold.measure("Importe", 10.0)
                > Font::Helvetica.measure("Importe", 10.0)
        );
    }

    #[test]
    fn line_height_multiplier() {
        assert!((Font::line_height(10.0) - 12.0).abs() < 1e-9);
    }
}
