//! Sealed products: the shared result shape of every generator.
//!
//! A product is an ordered list of canonical-card selections (the same
//! card may appear more than once) plus a count per basic-land name.
//! Generators and the decklist parser build one and hand it to the
//! caller fully formed; exporters only ever read it.

use std::ops::Range;

use rustc_hash::FxHashMap;

use crate::catalog::CardId;
use crate::colors::BasicLand;
use crate::error::TooManyCardsError;

/// One generated or parsed unit: card selections plus basic lands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SealedProduct {
    selections: Vec<CardId>,
    basics: FxHashMap<BasicLand, u32>,
}

impl SealedProduct {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one card selection.
    pub fn push_card(&mut self, id: CardId) {
        self.selections.push(id);
    }

    /// Add to one basic land's count.
    pub fn add_basics(&mut self, land: BasicLand, count: u32) {
        *self.basics.entry(land).or_default() += count;
    }

    /// Card selections, in generation order. Duplicates allowed.
    #[must_use]
    pub fn selections(&self) -> &[CardId] {
        &self.selections
    }

    /// Basic-land counts by name.
    #[must_use]
    pub fn basics(&self) -> &FxHashMap<BasicLand, u32> {
        &self.basics
    }

    /// Total cards: selections plus every basic land.
    #[must_use]
    pub fn size(&self) -> usize {
        self.selections.len() + self.basics.values().map(|&n| n as usize).sum::<usize>()
    }

    /// Selection counts by card, for order-insensitive comparison.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<CardId, u32> {
        let mut counts = FxHashMap::default();
        for &id in &self.selections {
            *counts.entry(id).or_default() += 1;
        }
        counts
    }
}

/// A bundle of basic lands only: `count_per_color` of each of the five
/// standard colored basics.
#[must_use]
pub fn basic_land_bundle(count_per_color: u32) -> SealedProduct {
    let mut product = SealedProduct::new();
    for land in BasicLand::COLORED {
        product.add_basics(land, count_per_color);
    }
    product
}

/// Order-quantity steps of the print-on-demand service, ascending.
///
/// An order is priced at the smallest step that fits it; nothing above
/// the last step can be submitted in one order.
pub const PRINT_CAPACITY_BRACKETS: [usize; 16] = [
    18, 36, 55, 72, 90, 108, 126, 144, 162, 180, 198, 216, 234, 396, 504, 612,
];

/// The smallest capacity step that fits `quantity` cards.
pub fn capacity_bracket(quantity: usize) -> Result<usize, TooManyCardsError> {
    PRINT_CAPACITY_BRACKETS
        .iter()
        .copied()
        .find(|&step| step >= quantity)
        .ok_or(TooManyCardsError {
            got: quantity,
            maximum: PRINT_CAPACITY_BRACKETS[PRINT_CAPACITY_BRACKETS.len() - 1],
        })
}

/// Chunk products into contiguous runs whose sizes fit `chunk_size`.
///
/// Products are never split across chunks; a single product bigger than
/// the chunk fails instead. Downstream packing collaborators turn each
/// run into one order.
pub fn split_products(
    products: &[SealedProduct],
    chunk_size: usize,
) -> Result<Vec<Range<usize>>, TooManyCardsError> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut size = 0;

    for (i, product) in products.iter().enumerate() {
        let product_size = product.size();
        if product_size > chunk_size {
            return Err(TooManyCardsError {
                got: product_size,
                maximum: chunk_size,
            });
        }
        if i > start && size + product_size > chunk_size {
            chunks.push(start..i);
            start = i;
            size = 0;
        }
        size += product_size;
    }
    if start < products.len() {
        chunks.push(start..products.len());
    }
    Ok(chunks)
}
