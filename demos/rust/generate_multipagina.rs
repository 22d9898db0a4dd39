//! Layout stress demo: enough rows to overflow several pages, plus a
//! description long enough to wrap many times. Rows stay whole across
//! page breaks and the table header repeats on every page.
//!
//! Run with:
//!   cargo run -p factura-demos --bin generate_multipagina
//!
//! Writes: demos/output/factura_2025-015.pdf

use factura_core::{CompanyProfile, Invoice};
use factura_pdf::Renderer;
use rust_decimal::Decimal;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut invoice = Invoice::new();
    invoice.header.number = "2025-015".to_string();
    invoice.header.campaign = "Campaña completa 2024/2025".to_string();
    invoice.client.name = "Explotaciones Agrarias del Guadalquivir S.A.".to_string();
    invoice.client.tax_id = "A41999999".to_string();

    for week in 1..=70 {
        invoice
            .add_line(
                Decimal::from(4),
                format!("Jornada de poda y limpieza de olivos, semana {week}"),
                Decimal::new(1250, 2),
            )
            .expect("línea válida");
    }

    // One row whose description wraps across many lines.
    invoice
        .add_line(
            Decimal::ONE,
            "Servicio integral de mantenimiento de la finca incluyendo desbroce de calles, \
             reparación de la red de riego por goteo en los sectores tres y cuatro, \
             sustitución de goteros defectuosos, revisión del cabezal de filtrado y \
             abonado foliar de los olivos jóvenes plantados durante la campaña anterior",
            Decimal::from(1800),
        )
        .expect("línea válida");

    std::fs::create_dir_all("demos/output").expect("output dir");
    let path = format!("demos/output/factura_{}.pdf", invoice.header.number);
    Renderer::new(CompanyProfile::default())
        .render_to_file(&invoice, &path)
        .expect("render PDF");

    println!(
        "Factura {} con {} líneas guardada en {path}",
        invoice.header.number,
        invoice.lines().len()
    );
}
