//! Sample invoice — the whole pipeline end to end: raw form strings
//! through the parse layer, model mutations, totals, PDF export.
//!
//! Run with:
//!   cargo run -p factura-demos --bin generate_factura
//!
//! Writes: demos/output/factura_2025-014.pdf

use factura_core::{format, parse, CompanyProfile, Invoice};
use factura_pdf::Renderer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut invoice = Invoice::new();
    invoice.header.number = "2025-014".to_string();
    invoice.header.issue_date = parse::parse_date("05/03/2025").expect("fecha");
    invoice.header.campaign = "Campaña de aceituna 2024/2025".to_string();

    invoice.client.name = "Cooperativa Olivarera del Sur S.L.".to_string();
    invoice.client.tax_id = "F41000000".to_string();
    invoice.client.address = "Carretera de Utrera km 3".to_string();
    invoice.client.city = "Sevilla".to_string();
    invoice.client.postal_code = "41089".to_string();
    invoice.notes =
        "Pago por transferencia bancaria en un plazo de 30 días. IBAN ES00 0000 0000 0000 0000 0000."
            .to_string();

    // Line values exactly as a form would supply them: decimal commas.
    let lines = [
        ("1250", "Recolección de aceituna en finca La Loma", "0,32"),
        ("12,5", "Transporte a almazara", "18"),
        ("1", "Abono de fondo", "240,00"),
    ];
    for (quantity, description, unit_price) in lines {
        invoice
            .add_line(
                parse::parse_decimal(quantity).expect("cantidad"),
                description,
                parse::parse_decimal(unit_price).expect("precio"),
            )
            .expect("línea válida");
    }
    invoice
        .set_tax_rates(parse::parse_rate_or_zero("21"), parse::parse_rate_or_zero("2"))
        .expect("tipos válidos");

    std::fs::create_dir_all("demos/output").expect("output dir");
    let path = format!("demos/output/factura_{}.pdf", invoice.header.number);
    Renderer::new(CompanyProfile::default())
        .render_to_file(&invoice, &path)
        .expect("render PDF");

    let totals = invoice.totals();
    println!("Factura {}", invoice.header.number);
    println!("  Base imponible: {} €", format::money(totals.taxable_base));
    println!("  IVA:            {} €", format::money(totals.vat_amount));
    println!("  Retención:      {} €", format::money(totals.withholding_amount));
    println!("  Total:          {} €", format::money(totals.total));
    println!("  Guardada en {path}");
}
