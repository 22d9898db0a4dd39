use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Round a monetary amount to cents, midpoint away from zero.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Invoice identification block: number, issue date, and the
/// campaign/concept label printed next to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub number: String,
    pub issue_date: NaiveDate,
    pub campaign: String,
}

/// Recipient of the invoice. Only `name` matters for rendering;
/// the remaining fields are stored as entered and skipped when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// One invoice row. Quantity and unit price are validated on entry
/// (see [`Invoice::add_line`]); the row total is always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: Decimal,
    pub description: String,
    pub unit_price: Decimal,
}

impl LineItem {
    /// quantity × unit price, rounded to cents.
    pub fn total(&self) -> Decimal {
        round_money(self.quantity * self.unit_price)
    }
}

/// Invoice-wide tax percentages. Both apply to the taxable base,
/// never per line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    pub vat: Decimal,
    pub withholding: Decimal,
}

impl Default for TaxRates {
    fn default() -> Self {
        TaxRates {
            vat: Decimal::from(21),
            withholding: Decimal::from(2),
        }
    }
}

/// Derived amounts. Never stored on the invoice; recomputed from the
/// lines and rates on every [`Invoice::totals`] call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub taxable_base: Decimal,
    pub vat_amount: Decimal,
    pub withholding_amount: Decimal,
    pub total: Decimal,
}

/// A session's invoice under construction. Header, client, and notes
/// are free-form; lines and rates only change through the validating
/// methods so the totals invariant cannot be broken.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub header: InvoiceHeader,
    pub client: Client,
    /// Free text printed at the foot of the document; empty = omitted.
    pub notes: String,
    lines: Vec<LineItem>,
    rates: TaxRates,
}

impl Invoice {
    /// Empty invoice: number "1", today's date, default rates, no lines.
    pub fn new() -> Self {
        Invoice {
            header: InvoiceHeader {
                number: "1".to_string(),
                issue_date: Local::now().date_naive(),
                campaign: String::new(),
            },
            client: Client::default(),
            notes: String::new(),
            lines: Vec::new(),
            rates: TaxRates::default(),
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn rates(&self) -> TaxRates {
        self.rates
    }

    /// Append a line. Validation failures leave the invoice untouched.
    pub fn add_line(
        &mut self,
        quantity: Decimal,
        description: impl Into<String>,
        unit_price: Decimal,
    ) -> Result<&LineItem> {
        if quantity <= Decimal::ZERO {
            return Err(Error::QuantityNotPositive(quantity));
        }
        if unit_price < Decimal::ZERO {
            return Err(Error::NegativeUnitPrice(unit_price));
        }
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }
        self.lines.push(LineItem {
            quantity,
            description,
            unit_price,
        });
        Ok(self.lines.last().expect("line just pushed"))
    }

    /// Remove the line at `index`; subsequent indices shift down.
    pub fn remove_line(&mut self, index: usize) -> Result<LineItem> {
        if index >= self.lines.len() {
            return Err(Error::LineIndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Set both percentages. Rates above 100 are accepted; negative
    /// rates are not.
    pub fn set_tax_rates(&mut self, vat: Decimal, withholding: Decimal) -> Result<()> {
        if vat < Decimal::ZERO {
            return Err(Error::NegativeRate(vat));
        }
        if withholding < Decimal::ZERO {
            return Err(Error::NegativeRate(withholding));
        }
        self.rates = TaxRates { vat, withholding };
        Ok(())
    }

    /// Compute the derived totals from the current lines and rates.
    ///
    /// Pure with respect to the invoice: calling this never mutates
    /// state, and an empty line list yields all-zero totals.
    pub fn totals(&self) -> Totals {
        let taxable_base: Decimal = self.lines.iter().map(LineItem::total).sum();
        let vat_amount = round_money(taxable_base * self.rates.vat / Decimal::ONE_HUNDRED);
        let withholding_amount =
            round_money(taxable_base * self.rates.withholding / Decimal::ONE_HUNDRED);
        Totals {
            taxable_base,
            vat_amount,
            withholding_amount,
            total: taxable_base + vat_amount - withholding_amount,
        }
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}
