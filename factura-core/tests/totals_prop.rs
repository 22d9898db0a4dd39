use factura_core::Invoice;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn build_invoice(lines: &[(i64, i64)], vat_cents: i64, wh_cents: i64) -> Invoice {
    let mut inv = Invoice::new();
    for &(qty_millis, price_cents) in lines {
        inv.add_line(Decimal::new(qty_millis, 3), "Concepto", cents(price_cents))
            .unwrap();
    }
    inv.set_tax_rates(cents(vat_cents), cents(wh_cents)).unwrap();
    inv
}

proptest! {
    #[test]
    fn taxable_base_is_sum_of_line_totals(
        lines in prop::collection::vec((1i64..50_000, 0i64..5_000_000), 0..25),
        vat in 0i64..30_000,
        wh in 0i64..30_000,
    ) {
        let inv = build_invoice(&lines, vat, wh);
        let expected_base: Decimal = inv.lines().iter().map(|l| l.total()).sum();
        prop_assert_eq!(inv.totals().taxable_base, expected_base);
    }

    #[test]
    fn total_follows_the_formula(
        lines in prop::collection::vec((1i64..50_000, 0i64..5_000_000), 0..25),
        vat in 0i64..30_000,
        wh in 0i64..30_000,
    ) {
        let inv = build_invoice(&lines, vat, wh);
        let totals = inv.totals();
        let base = totals.taxable_base;
        let expected_vat = round2(base * cents(vat) / Decimal::ONE_HUNDRED);
        let expected_wh = round2(base * cents(wh) / Decimal::ONE_HUNDRED);
        prop_assert_eq!(totals.vat_amount, expected_vat);
        prop_assert_eq!(totals.withholding_amount, expected_wh);
        prop_assert_eq!(totals.total, base + expected_vat - expected_wh);
    }

    #[test]
    fn zero_rates_leave_total_equal_to_base(
        lines in prop::collection::vec((1i64..50_000, 0i64..5_000_000), 0..25),
    ) {
        let inv = build_invoice(&lines, 0, 0);
        let totals = inv.totals();
        prop_assert_eq!(totals.total, totals.taxable_base);
        prop_assert_eq!(totals.vat_amount, Decimal::ZERO);
    }

    #[test]
    fn remove_then_readd_is_totals_neutral(
        lines in prop::collection::vec((1i64..50_000, 0i64..5_000_000), 1..25),
        vat in 0i64..30_000,
        wh in 0i64..30_000,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut inv = build_invoice(&lines, vat, wh);
        let before = inv.totals();
        let index = pick.index(inv.lines().len());
        let removed = inv.remove_line(index).unwrap();
        inv.add_line(removed.quantity, removed.description, removed.unit_price).unwrap();
        prop_assert_eq!(inv.totals(), before);
    }
}
