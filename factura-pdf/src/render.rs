//! The fixed corporate invoice template.
//!
//! One render pass walks the invoice top to bottom: header block,
//! client block, line-item table (turning pages as rows demand),
//! totals block, footer notes. All amounts come from
//! [`Invoice::totals`] at render time — nothing here is cached.

use std::io::Write;
use std::path::Path;

use factura_core::{format, CompanyProfile, Invoice, Totals};
use rust_decimal::Decimal;
use tracing::debug;

use crate::content::Content;
use crate::document::{Document, A4_HEIGHT, A4_WIDTH};
use crate::error::Result;
use crate::fonts::Font;
use crate::table::{Cell, Row, RowFit, Table, TableCursor};

/// 20 mm in PostScript points.
const MARGIN: f64 = 56.69;
/// Leading for the address and client blocks.
const LEADING: f64 = 12.0;
/// Vertical space the totals block needs below the last table row.
const TOTALS_BLOCK: f64 = 68.0;

/// Renders invoices against a fixed A4 layout. The company identity
/// is injected here rather than baked into the drawing code, so one
/// binary can serve several letterheads.
pub struct Renderer {
    company: CompanyProfile,
    compress: bool,
}

impl Renderer {
    pub fn new(company: CompanyProfile) -> Self {
        Renderer {
            company,
            compress: true,
        }
    }

    /// Toggle content-stream compression (on by default).
    pub fn with_compression(mut self, on: bool) -> Self {
        self.compress = on;
        self
    }

    /// Render `invoice` into `writer` and hand the writer back.
    pub fn render<W: Write>(&self, invoice: &Invoice, writer: W) -> Result<W> {
        let mut doc = Document::new(writer)?;
        doc.set_compression(self.compress);
        doc.set_info("Title", &format!("Factura {}", invoice.header.number));
        doc.set_info("Creator", &self.company.name);

        doc.begin_page(A4_WIDTH, A4_HEIGHT)?;
        let table_top = self.draw_letterhead(invoice, doc.content());

        let table = items_table();
        let header = header_row();
        let mut cursor = TableCursor::new(MARGIN, table_top, MARGIN);
        table.place_header(&header, &mut cursor, doc.content());

        for item in invoice.lines() {
            let row = Row::new(vec![
                Cell::right(format::quantity(item.quantity)),
                Cell::new(&item.description),
                Cell::right(eur(item.unit_price)),
                Cell::right(eur(item.total())),
            ]);
            loop {
                match table.fit_row(&row, &mut cursor, doc.content()) {
                    RowFit::Placed => break,
                    RowFit::PageFull => {
                        doc.end_page()?;
                        doc.begin_page(A4_WIDTH, A4_HEIGHT)?;
                        cursor.reset(A4_HEIGHT - MARGIN);
                        table.place_header(&header, &mut cursor, doc.content());
                    }
                }
            }
        }

        // Totals are atomic too: a fresh page rather than a block
        // straddling the boundary.
        let mut totals_top = cursor.y() - 10.0;
        if totals_top - TOTALS_BLOCK < MARGIN {
            doc.end_page()?;
            doc.begin_page(A4_WIDTH, A4_HEIGHT)?;
            totals_top = A4_HEIGHT - MARGIN - 40.0;
        }
        let after_totals =
            self.draw_totals(&invoice.totals(), invoice.rates().vat, invoice.rates().withholding, &table, doc.content(), totals_top);

        self.draw_notes(invoice, &mut doc, after_totals)?;

        let pages = doc.page_count();
        let writer = doc.finish()?;
        debug!(
            number = %invoice.header.number,
            lines = invoice.lines().len(),
            pages,
            "invoice rendered"
        );
        Ok(writer)
    }

    /// Render to a file path. The document is built in memory first,
    /// so a failed render leaves no partial file behind.
    pub fn render_to_file(&self, invoice: &Invoice, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(invoice, Vec::new())?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Title, company identity, invoice metadata, and client block.
    /// Returns the y where the item table starts.
    fn draw_letterhead(&self, invoice: &Invoice, content: &mut Content) -> f64 {
        let top = A4_HEIGHT - MARGIN;
        content.text(Font::HelveticaBold, 16.0, MARGIN, top, "FACTURA");

        // Company identity, left column.
        let mut y = top - 20.0;
        content.text(Font::Helvetica, 10.0, MARGIN, y, &self.company.name);
        y -= LEADING;
        for line in self.company.letterhead_lines() {
            content.text(Font::Helvetica, 10.0, MARGIN, y, &line);
            y -= LEADING;
        }

        // Invoice metadata, right column.
        let meta_x = A4_WIDTH - MARGIN - 200.0;
        let meta_y = top - 20.0;
        content.text(
            Font::HelveticaBold,
            10.0,
            meta_x,
            meta_y,
            &format!("Nº de factura: {}", invoice.header.number),
        );
        content.text(
            Font::HelveticaBold,
            10.0,
            meta_x,
            meta_y - 14.0,
            &format!("Fecha: {}", invoice.header.issue_date.format("%d/%m/%Y")),
        );
        if !invoice.header.campaign.is_empty() {
            content.text(
                Font::HelveticaBold,
                10.0,
                meta_x,
                meta_y - 28.0,
                &format!("Concepto: {}", invoice.header.campaign),
            );
        }

        // Client block.
        let client = &invoice.client;
        let mut y = y - 10.0;
        content.text(Font::HelveticaBold, 10.0, MARGIN, y, "Cliente");
        y -= 14.0;
        if !client.name.is_empty() {
            content.text(Font::Helvetica, 10.0, MARGIN, y, &client.name);
            y -= LEADING;
        }
        if !client.tax_id.is_empty() {
            content.text(
                Font::Helvetica,
                10.0,
                MARGIN,
                y,
                &format!("NIF/CIF: {}", client.tax_id),
            );
            y -= LEADING;
        }
        if !client.address.is_empty() {
            content.text(Font::Helvetica, 10.0, MARGIN, y, &client.address);
            y -= LEADING;
        }
        let city_line: Vec<&str> = [client.postal_code.as_str(), client.city.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if !city_line.is_empty() {
            content.text(Font::Helvetica, 10.0, MARGIN, y, &city_line.join(", "));
            y -= LEADING;
        }

        y - 20.0
    }

    /// Labelled totals, amounts right-aligned with the Importe column.
    /// Returns the y below the block.
    fn draw_totals(
        &self,
        totals: &Totals,
        vat_rate: Decimal,
        withholding_rate: Decimal,
        table: &Table,
        content: &mut Content,
        top: f64,
    ) -> f64 {
        let labels_x = MARGIN + table.columns[0] + table.columns[1];
        let amounts_right = MARGIN + table.width() - table.padding;
        let mut y = top;

        let rows = [
            ("Base imponible:".to_string(), totals.taxable_base),
            (format!("IVA {}:", format::rate(vat_rate)), totals.vat_amount),
            (
                format!("Retención {}:", format::rate(withholding_rate)),
                totals.withholding_amount,
            ),
        ];
        for (label, amount) in rows {
            content.text(Font::Helvetica, 10.0, labels_x, y, &label);
            content.text_right(Font::Helvetica, 10.0, amounts_right, y, &eur(amount));
            y -= 14.0;
        }

        content.text(Font::HelveticaBold, 11.0, labels_x, y, "Total factura:");
        content.text_right(Font::HelveticaBold, 11.0, amounts_right, y, &eur(totals.total));
        y
    }

    /// Footer notes, wrapped across the full text width. Long notes
    /// keep flowing onto fresh pages.
    fn draw_notes<W: Write>(
        &self,
        invoice: &Invoice,
        doc: &mut Document<W>,
        totals_bottom: f64,
    ) -> Result<()> {
        if invoice.notes.is_empty() {
            return Ok(());
        }
        let width = A4_WIDTH - 2.0 * MARGIN;
        let mut y = totals_bottom - 30.0;
        for line in crate::wrap::wrap(&invoice.notes, width, Font::HelveticaOblique, 9.0) {
            if y < MARGIN {
                doc.end_page()?;
                doc.begin_page(A4_WIDTH, A4_HEIGHT)?;
                y = A4_HEIGHT - MARGIN;
            }
            doc.content().text(Font::HelveticaOblique, 9.0, MARGIN, y, &line);
            y -= LEADING;
        }
        Ok(())
    }
}

/// Cantidad | Descripción | Precio | Importe, proportioned over the
/// full text width.
fn items_table() -> Table {
    let width = A4_WIDTH - 2.0 * MARGIN;
    Table::new(vec![width * 0.18, width * 0.48, width * 0.17, width * 0.17])
}

fn header_row() -> Row {
    Row::new(vec![
        Cell::new("Cantidad").bold(),
        Cell::new("Descripción").bold(),
        Cell::right("Precio").bold(),
        Cell::right("Importe").bold(),
    ])
}

/// Amount with the fixed currency convention: decimal comma plus €.
fn eur(value: Decimal) -> String {
    format!("{} €", format::money(value))
}
