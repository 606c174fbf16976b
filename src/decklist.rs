//! Decklist codec.
//!
//! Serializes a sealed product to the plain-text list format (one
//! `<count> <name>` line per entry) and parses such text back against a
//! card pool. Parsing aborts on the first unresolvable name: a sealed
//! product must be fully resolved before anything downstream touches it.

use crate::catalog::CardPool;
use crate::colors::BasicLand;
use crate::error::DecklistError;
use crate::product::SealedProduct;

/// Render a product as decklist text.
///
/// Card selections come first, one line per copy, then one line per
/// basic-land name with its count.
#[must_use]
pub fn to_decklist(product: &SealedProduct, pool: &CardPool) -> String {
    let mut out = String::new();
    for &id in product.selections() {
        out.push_str("1 ");
        out.push_str(pool.get(id).name());
        out.push('\n');
    }
    for (land, count) in product.basics() {
        out.push_str(&format!("{count} {land}\n"));
    }
    out
}

/// Parse decklist text into a product.
///
/// Blank lines and `#` comments are skipped. Each remaining line is an
/// optional leading quantity (default 1) followed by a name, matched
/// case-insensitively: basic-land names accumulate into the land map,
/// anything else must resolve to a canonical card.
pub fn from_decklist(text: &str, pool: &CardPool) -> Result<SealedProduct, DecklistError> {
    let mut product = SealedProduct::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (quantity, name) = split_quantity(line);
        let name = name.to_lowercase();

        if let Some(land) = BasicLand::from_name(&name) {
            product.add_basics(land, quantity);
        } else if let Some(id) = pool.find_by_name(&name) {
            for _ in 0..quantity {
                product.push_card(id);
            }
        } else {
            return Err(DecklistError::CardNotFound(name));
        }
    }

    Ok(product)
}

/// Split an optional leading integer quantity off a line.
fn split_quantity(line: &str) -> (u32, &str) {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return (1, line);
    }
    match line[..digits].parse() {
        Ok(quantity) => (quantity, line[digits..].trim_start()),
        Err(_) => (1, line),
    }
}
