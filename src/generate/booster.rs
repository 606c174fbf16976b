//! Booster pack generation.
//!
//! A pack is a fixed slot template sampled independently per slot: ten
//! commons, three uncommons, one rare that upgrades to mythic at 1-in-8,
//! and one basic land that upgrades to a special basic (snow-covered or
//! colorless) at the same rate. Sampling is uniform with replacement, so
//! a card can appear twice in one pack. Zero-skill packs, by template.

use crate::catalog::{Bracket, BracketPools};
use crate::colors::BasicLand;
use crate::error::SamplingError;
use crate::product::SealedProduct;
use crate::rng::SamplerRng;

/// Total cards in a booster pack: 14 spell slots plus one basic land.
pub const PACK_SIZE: usize = 15;

/// Odds that the rare slot holds a mythic, and that the land slot holds
/// a special basic.
const UPGRADE_RATE: f64 = 1.0 / 8.0;

/// Fixed spell slots: the variable rare/mythic slot is appended at
/// generation time.
const FIXED_SLOTS: [Bracket; 13] = [
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Common,
    Bracket::Uncommon,
    Bracket::Uncommon,
    Bracket::Uncommon,
];

/// Generate one booster pack.
///
/// Fails when a slot's bracket pool is empty; an empty bracket means the
/// catalog or thresholds are wrong, so nothing is substituted.
pub fn generate_booster(
    pools: &BracketPools,
    rng: &mut SamplerRng,
) -> Result<SealedProduct, SamplingError> {
    let rare_slot = if rng.gen_bool(UPGRADE_RATE) {
        Bracket::Mythic
    } else {
        Bracket::Rare
    };

    let mut product = SealedProduct::new();
    for bracket in FIXED_SLOTS.into_iter().chain([rare_slot]) {
        let id = rng
            .choose(pools.bracket(bracket))
            .ok_or(SamplingError::EmptyBracket { bracket })?;
        product.push_card(*id);
    }

    let land = if rng.gen_bool(UPGRADE_RATE) {
        BasicLand::SPECIAL[rng.gen_range_usize(0..BasicLand::SPECIAL.len())]
    } else {
        BasicLand::COLORED[rng.gen_range_usize(0..BasicLand::COLORED.len())]
    };
    product.add_basics(land, 1);

    Ok(product)
}
