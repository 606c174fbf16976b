//! The card pool: process-wide lookup state, built once.
//!
//! The loader is the pool's only writer. After classification stamps the
//! brackets the pool is immutable, so generators can share it freely by
//! reference (parallel callers included, each with its own RNG).

use rustc_hash::FxHashMap;

use super::card::{CanonicalCard, CardId};
use super::printing::Printing;
use crate::colors::BasicLand;
use crate::rng::SamplerRng;

/// All canonical cards plus the basic-land table.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<CanonicalCard>,
    by_oracle: FxHashMap<String, CardId>,
    basics: BasicLandTable,
}

impl CardPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Merge one filtered printing into its canonical card, creating the
    /// card on first sight of the oracle identity.
    pub(crate) fn merge_printing(&mut self, oracle_id: &str, printing: Printing, prices: &[f64]) {
        let id = match self.by_oracle.get(oracle_id) {
            Some(&id) => id,
            None => {
                let id = CardId::new(self.cards.len() as u32);
                self.cards.push(CanonicalCard::new());
                self.by_oracle.insert(oracle_id.to_string(), id);
                id
            }
        };
        self.cards[id.index()].add_printing(printing, prices);
    }

    pub(crate) fn stamp_bracket(&mut self, id: CardId, bracket: super::rarity::Bracket) {
        self.cards[id.index()].set_bracket(bracket);
    }

    pub(crate) fn basics_mut(&mut self) -> &mut BasicLandTable {
        &mut self.basics
    }

    /// Look up a card by id.
    ///
    /// Ids are minted by this pool; passing an id from another pool is a
    /// logic error and panics.
    #[must_use]
    pub fn get(&self, id: CardId) -> &CanonicalCard {
        &self.cards[id.index()]
    }

    /// Number of canonical cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card id, in load order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u32).map(CardId::new)
    }

    /// Iterate cards with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CanonicalCard)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardId::new(i as u32), card))
    }

    /// Resolve a display name, case-insensitively.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<CardId> {
        self.iter()
            .find(|(_, card)| card.name().eq_ignore_ascii_case(name))
            .map(|(id, _)| id)
    }

    /// The basic-land art-variant table.
    #[must_use]
    pub fn basics(&self) -> &BasicLandTable {
        &self.basics
    }
}

/// Available printings per basic-land name.
///
/// Basic lands never become canonical cards; their printings are held as
/// interchangeable art variants for render-time selection.
#[derive(Clone, Debug, Default)]
pub struct BasicLandTable {
    printings: FxHashMap<BasicLand, Vec<Printing>>,
}

impl BasicLandTable {
    pub(crate) fn add(&mut self, land: BasicLand, printing: Printing) {
        self.printings.entry(land).or_default().push(printing);
    }

    /// Art variants for one land. Empty when the catalog had none.
    #[must_use]
    pub fn printings(&self, land: BasicLand) -> &[Printing] {
        self.printings.get(&land).map_or(&[], Vec::as_slice)
    }

    /// Pick a random art variant for one land.
    #[must_use]
    pub fn random_printing(&self, land: BasicLand, rng: &mut SamplerRng) -> Option<&Printing> {
        rng.choose(self.printings(land))
    }

    /// Lands that have at least one variant.
    pub fn lands(&self) -> impl Iterator<Item = BasicLand> + '_ {
        self.printings.keys().copied()
    }
}
