//! Price derivation and formatting.

/// `unit_price * quantity`. Not validated; negative prices pass through.
pub fn total_price(unit_price: f64, quantity: u32) -> f64 {
    unit_price * f64::from(quantity)
}

/// Format an amount with exactly two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Amount prefixed with a currency symbol, e.g. "R$ 75.00".
pub fn price_label(currency_symbol: &str, amount: f64) -> String {
    let amount = format_amount(amount);
    if currency_symbol.is_empty() {
        amount
    } else {
        format!("{} {}", currency_symbol, amount)
    }
}
