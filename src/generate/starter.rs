//! Starter deck generation.
//!
//! A deck is a two-color identity (the two picks may coincide), 35
//! spells sampled under combined rarity/type constraints, and a basic
//! land base computed from the spells: 25 lands, minus reservations for
//! snow and colorless requirements, with the rest split between the two
//! colors in proportion to their mono-colored card counts.
//!
//! The colored split rounds color1 up and color2 down, which biases one
//! extra land toward the first-chosen color when the ratio is fractional.
//! That asymmetry is deliberate and kept.

use std::fmt;

use tracing::debug;

use crate::catalog::{Bracket, CanonicalCard, CardId, CardPool};
use crate::colors::{Color, ColorIdentity};
use crate::error::SamplingError;
use crate::product::SealedProduct;
use crate::rng::SamplerRng;

/// Total cards in a starter deck.
pub const DECK_SIZE: usize = 60;

/// Sampled spell slots per deck.
pub const DECK_SPELLS: usize = 35;

/// Basic lands per deck, before the colored split.
pub const DECK_BASICS: u32 = 25;

/// Which candidate pool a deck slot samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolSelector {
    /// Any eligible card.
    Any,
    /// Cards with Creature on the type line.
    Creature,
    /// Everything else.
    NonCreature,
}

impl fmt::Display for PoolSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PoolSelector::Any => "eligible",
            PoolSelector::Creature => "creature",
            PoolSelector::NonCreature => "non-creature",
        })
    }
}

/// One slot of the deck template: a required bracket and a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckSlot {
    pub bracket: Bracket,
    pub selector: PoolSelector,
}

/// The fixed 35-slot template.
///
/// Brackets: 20 common, 12 uncommon, 3 rare, no mythic. Pools: 14
/// creature, 6 non-creature, 8 creature, 4 non-creature, 3 unconstrained,
/// matching the conventional deck-building curve.
#[must_use]
pub fn deck_template() -> Vec<DeckSlot> {
    let brackets = std::iter::repeat(Bracket::Common)
        .take(20)
        .chain(std::iter::repeat(Bracket::Uncommon).take(12))
        .chain(std::iter::repeat(Bracket::Rare).take(3));
    let selectors = std::iter::repeat(PoolSelector::Creature)
        .take(14)
        .chain(std::iter::repeat(PoolSelector::NonCreature).take(6))
        .chain(std::iter::repeat(PoolSelector::Creature).take(8))
        .chain(std::iter::repeat(PoolSelector::NonCreature).take(4))
        .chain(std::iter::repeat(PoolSelector::Any).take(3));

    brackets
        .zip(selectors)
        .map(|(bracket, selector)| DeckSlot { bracket, selector })
        .collect()
}

/// Generate one starter deck.
///
/// Fails when a slot's combined constraints match no card; small or
/// skewed catalogs surface here rather than producing short decks.
pub fn generate_starter_deck(
    pool: &CardPool,
    rng: &mut SamplerRng,
) -> Result<SealedProduct, SamplingError> {
    let color1 = Color::ALL[rng.gen_range_usize(0..Color::ALL.len())];
    let color2 = Color::ALL[rng.gen_range_usize(0..Color::ALL.len())];
    let identity: ColorIdentity = [color1, color2].into_iter().collect();
    debug!(%identity, "rolling starter deck");

    let eligible: Vec<CardId> = pool
        .iter()
        .filter(|(_, card)| {
            !card.has_supertype("Land")
                && !card.has_supertype("Conspiracy")
                && card.color_identity().is_subset_of(&identity)
        })
        .map(|(id, _)| id)
        .collect();
    let creatures: Vec<CardId> = eligible
        .iter()
        .copied()
        .filter(|&id| pool.get(id).has_supertype("Creature"))
        .collect();
    let non_creatures: Vec<CardId> = eligible
        .iter()
        .copied()
        .filter(|&id| !pool.get(id).has_supertype("Creature"))
        .collect();

    let mut product = SealedProduct::new();
    for (index, slot) in deck_template().into_iter().enumerate() {
        let candidates = match slot.selector {
            PoolSelector::Any => &eligible,
            PoolSelector::Creature => &creatures,
            PoolSelector::NonCreature => &non_creatures,
        };
        let matching: Vec<CardId> = candidates
            .iter()
            .copied()
            .filter(|&id| pool.get(id).bracket() == Some(slot.bracket))
            .collect();
        let id = rng.choose(&matching).ok_or(SamplingError::EmptySlot {
            slot: index,
            bracket: slot.bracket,
            pool: slot.selector,
        })?;
        product.push_card(*id);
    }

    add_land_base(pool, &mut product, color1, color2);
    Ok(product)
}

/// Compute and add the deck's basic lands.
fn add_land_base(pool: &CardPool, product: &mut SealedProduct, color1: Color, color2: Color) {
    let selected: Vec<&CanonicalCard> = product
        .selections()
        .iter()
        .map(|&id| pool.get(id))
        .collect();

    let mut remaining = DECK_BASICS;

    // Snow requirement reserves one snow basic per chosen color: two
    // increments of the same land when the colors coincide.
    if selected.iter().any(|card| card.needs_snow()) {
        remaining -= 2;
        product.add_basics(color1.snow_basic_land(), 1);
        product.add_basics(color2.snow_basic_land(), 1);
    }

    // Colorless requirement reserves two colorless basics, independent of
    // the snow reservation.
    if selected.iter().any(|card| card.needs_colorless()) {
        remaining -= 2;
        product.add_basics(crate::colors::BasicLand::Wastes, 2);
    }

    // A card counts toward a color only when its identity is exactly that
    // single color; dual-colored cards count toward neither bucket.
    let pips1 = mono_color_pips(&selected, color1);
    let pips2 = mono_color_pips(&selected, color2);
    let (lands1, lands2) = split_lands(remaining, pips1, pips2);

    product.add_basics(color1.basic_land(), lands1);
    product.add_basics(color2.basic_land(), lands2);
}

/// Pip count for one chosen color over the selected spells.
fn mono_color_pips(selected: &[&CanonicalCard], color: Color) -> u32 {
    selected
        .iter()
        .filter(|card| card.color_identity().is_exactly(color))
        .map(|card| card.color_identity().iter().filter(|&c| c == color).count() as u32)
        .sum()
}

/// Split the remaining land budget proportionally between the colors.
///
/// Color1 takes the ceiling, color2 the floor; the halves always
/// reconcile to the full budget. Decks with no mono-colored cards in
/// either color fall back to an even split (same rounding bias) rather
/// than dividing by zero.
fn split_lands(budget: u32, pips1: u32, pips2: u32) -> (u32, u32) {
    let total = pips1 + pips2;
    if total == 0 {
        return (budget.div_ceil(2), budget / 2);
    }
    let lands1 = (budget * pips1).div_ceil(total);
    let lands2 = (budget * pips2) / total;
    (lands1, lands2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::printing::PriceSheet;
    use crate::catalog::{build_pool, BracketPools, Printing, RarityThresholds};
    use rustc_hash::FxHashMap;

    fn card(name: &str, oracle_id: &str, type_line: &str, pips: &[&str], usd: &str) -> Printing {
        let mut legalities = FxHashMap::default();
        legalities.insert("legacy".to_string(), "legal".to_string());
        Printing {
            oracle_id: Some(oracle_id.to_string()),
            name: name.to_string(),
            lang: "en".to_string(),
            type_line: type_line.to_string(),
            color_identity: pips.iter().map(|p| p.to_string()).collect(),
            legalities,
            set: "m21".to_string(),
            set_type: "core".to_string(),
            prices: Some(PriceSheet {
                usd: Some(usd.to_string()),
                ..PriceSheet::default()
            }),
            ..Printing::default()
        }
    }

    /// A pool with colorless creatures and spells at every needed bracket,
    /// so any color pair can fill the template.
    fn workable_pool() -> CardPool {
        let mut printings = Vec::new();
        for i in 0..6 {
            printings.push(card(
                &format!("Gray Beast {i}"),
                &format!("gb{i}"),
                "Artifact Creature — Golem",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Gray Trinket {i}"),
                &format!("gt{i}"),
                "Artifact",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Silver Beast {i}"),
                &format!("sb{i}"),
                "Artifact Creature — Golem",
                &[],
                "1.00",
            ));
            printings.push(card(
                &format!("Silver Trinket {i}"),
                &format!("st{i}"),
                "Artifact",
                &[],
                "1.00",
            ));
            printings.push(card(
                &format!("Gold Relic {i}"),
                &format!("gr{i}"),
                "Artifact Creature — Golem",
                &[],
                "10.00",
            ));
        }
        let mut pool = build_pool(printings).unwrap();
        let _ = BracketPools::classify(&mut pool, &RarityThresholds::default());
        pool
    }

    #[test]
    fn test_template_shape() {
        let template = deck_template();
        assert_eq!(template.len(), DECK_SPELLS);
        assert_eq!(
            template
                .iter()
                .filter(|s| s.bracket == Bracket::Common)
                .count(),
            20
        );
        assert_eq!(
            template
                .iter()
                .filter(|s| s.bracket == Bracket::Uncommon)
                .count(),
            12
        );
        assert_eq!(
            template
                .iter()
                .filter(|s| s.bracket == Bracket::Rare)
                .count(),
            3
        );
        assert_eq!(
            template
                .iter()
                .filter(|s| s.selector == PoolSelector::Creature)
                .count(),
            22
        );
        assert_eq!(
            template
                .iter()
                .filter(|s| s.selector == PoolSelector::NonCreature)
                .count(),
            10
        );
    }

    #[test]
    fn test_deck_is_sixty_cards() {
        let pool = workable_pool();
        let mut rng = SamplerRng::new(5);

        for _ in 0..20 {
            let deck = generate_starter_deck(&pool, &mut rng).unwrap();
            assert_eq!(deck.selections().len(), DECK_SPELLS);
            assert_eq!(deck.size(), DECK_SIZE);
            assert_eq!(deck.basics().values().sum::<u32>(), DECK_BASICS);
        }
    }

    #[test]
    fn test_deck_respects_color_and_type_constraints() {
        let mut printings = Vec::new();
        // Enough colorless filler plus off-color and forbidden cards that
        // must never be drawn.
        for i in 0..6 {
            printings.push(card(
                &format!("Filler Beast {i}"),
                &format!("fb{i}"),
                "Artifact Creature — Golem",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Filler Trinket {i}"),
                &format!("ft{i}"),
                "Artifact",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Filler Silver Beast {i}"),
                &format!("fsb{i}"),
                "Artifact Creature — Golem",
                &[],
                "1.00",
            ));
            printings.push(card(
                &format!("Filler Silver Trinket {i}"),
                &format!("fst{i}"),
                "Artifact",
                &[],
                "1.00",
            ));
            printings.push(card(
                &format!("Filler Relic {i}"),
                &format!("fr{i}"),
                "Artifact Creature — Golem",
                &[],
                "10.00",
            ));
        }
        printings.push(card(
            "Utter Sideboard",
            "land0",
            "Land — Gate",
            &[],
            "0.10",
        ));
        printings.push(card(
            "Backroom Deal",
            "consp0",
            "Conspiracy",
            &[],
            "0.10",
        ));

        let mut pool = build_pool(printings).unwrap();
        let _ = BracketPools::classify(&mut pool, &RarityThresholds::default());
        let mut rng = SamplerRng::new(21);

        for _ in 0..20 {
            let deck = generate_starter_deck(&pool, &mut rng).unwrap();
            // The deck's colors are unknown here, but five-color identity
            // still excludes lands and conspiracies.
            for &id in deck.selections() {
                let selected = pool.get(id);
                assert!(!selected.has_supertype("Land"));
                assert!(!selected.has_supertype("Conspiracy"));
            }
        }
    }

    #[test]
    fn test_unsatisfiable_slot_reports_error() {
        // Commons only: the uncommon slots can never be filled.
        let mut printings = Vec::new();
        for i in 0..6 {
            printings.push(card(
                &format!("Gray Beast {i}"),
                &format!("gb{i}"),
                "Artifact Creature — Golem",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Gray Trinket {i}"),
                &format!("gt{i}"),
                "Artifact",
                &[],
                "0.10",
            ));
        }
        let mut pool = build_pool(printings).unwrap();
        let _ = BracketPools::classify(&mut pool, &RarityThresholds::default());
        let mut rng = SamplerRng::new(2);

        let err = generate_starter_deck(&pool, &mut rng).unwrap_err();
        match err {
            SamplingError::EmptySlot { slot, bracket, .. } => {
                assert_eq!(slot, 20); // first uncommon slot
                assert_eq!(bracket, Bracket::Uncommon);
            }
            other => panic!("expected empty slot, got {other:?}"),
        }
    }

    #[test]
    fn test_split_lands_reconciles() {
        // Representative pip ratios: the halves always sum to the budget.
        for (budget, pips1, pips2) in [
            (25, 3, 1),
            (25, 1, 1),
            (25, 7, 2),
            (23, 5, 3),
            (21, 1, 6),
            (25, 4, 0),
            (25, 0, 9),
        ] {
            let (lands1, lands2) = split_lands(budget, pips1, pips2);
            assert_eq!(
                lands1 + lands2,
                budget,
                "budget {budget} with pips {pips1}:{pips2} lost lands"
            );
        }
    }

    #[test]
    fn test_split_lands_bias_favors_color1() {
        let (lands1, lands2) = split_lands(25, 1, 1);
        assert_eq!((lands1, lands2), (13, 12));
    }

    #[test]
    fn test_split_lands_zero_pips_even_split() {
        assert_eq!(split_lands(25, 0, 0), (13, 12));
        assert_eq!(split_lands(24, 0, 0), (12, 12));
    }

    proptest::proptest! {
        #[test]
        fn prop_split_lands_never_loses_lands(
            budget in 0u32..=25,
            pips1 in 0u32..=35,
            pips2 in 0u32..=35,
        ) {
            let (lands1, lands2) = split_lands(budget, pips1, pips2);
            proptest::prop_assert_eq!(lands1 + lands2, budget);
        }
    }

    #[test]
    fn test_snow_and_colorless_reservations() {
        // Colorless creature/spell filler plus a snow and a colorless
        // requirement guaranteed to be drawn (they fill whole brackets).
        let mut printings = Vec::new();
        for i in 0..4 {
            printings.push(card(
                &format!("Gray Beast {i}"),
                &format!("gb{i}"),
                "Artifact Creature — Golem",
                &[],
                "0.10",
            ));
            printings.push(card(
                &format!("Gray Trinket {i}"),
                &format!("gt{i}"),
                "Artifact",
                &[],
                "0.10",
            ));
        }
        let mut snowy = card(
            "Rimewind Engine",
            "snow0",
            "Artifact Creature — Golem",
            &[],
            "1.00",
        );
        snowy.mana_cost = Some("{S}{S}".to_string());
        printings.push(snowy);
        let mut wastrel = card("Void Trinket", "void0", "Artifact", &[], "1.00");
        wastrel.mana_cost = Some("{C}{1}".to_string());
        printings.push(wastrel);
        let mut relic = card(
            "Gold Relic",
            "gr0",
            "Artifact Creature — Golem",
            &[],
            "10.00",
        );
        relic.mana_cost = Some("{3}".to_string());
        printings.push(relic);

        let mut pool = build_pool(printings).unwrap();
        let _ = BracketPools::classify(&mut pool, &RarityThresholds::default());
        let mut rng = SamplerRng::new(8);

        let deck = generate_starter_deck(&pool, &mut rng).unwrap();
        // Both triggers fire: every uncommon slot drew the snow or the
        // colorless card.
        let wastes = deck
            .basics()
            .get(&crate::colors::BasicLand::Wastes)
            .copied()
            .unwrap_or(0);
        assert_eq!(wastes, 2);

        let snow_total: u32 = deck
            .basics()
            .iter()
            .filter(|&(land, _)| {
                crate::colors::BasicLand::SPECIAL.contains(land)
                    && *land != crate::colors::BasicLand::Wastes
            })
            .map(|(_, n)| n)
            .sum();
        assert_eq!(snow_total, 2);

        assert_eq!(deck.size(), DECK_SIZE);
        assert_eq!(deck.basics().values().sum::<u32>(), DECK_BASICS);
    }
}
