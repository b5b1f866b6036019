//! CLI subcommand implementations.

pub mod browse;
pub mod catalog;
pub mod modify;

use rust_decimal::Decimal;

use shelf_core::Product;

/// Render one product as a table row.
fn format_row(product: &Product) -> String {
    let id = product
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    format!(
        "{id:>6}  {name:<24}  {price:>10}  {description}",
        name = truncate(&product.name, 24),
        price = format_price(product.price),
        description = truncate(&product.description, 40),
    )
}

/// Table header matching [`format_row`].
fn table_header() -> String {
    format!(
        "{:>6}  {:<24}  {:>10}  {}",
        "ID", "NAME", "PRICE", "DESCRIPTION"
    )
}

fn format_price(price: Decimal) -> String {
    format!("${price:.2}")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}
