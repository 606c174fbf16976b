//! Price-derived rarity brackets.
//!
//! Cards are classified by their minimum observed market price into four
//! ordered brackets that replace printed rarity for sampling purposes.
//! The default thresholds size the brackets at roughly 71% / 21% / 6% /
//! 0.8% of the catalog, approximating commercial booster proportions.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::info;

use super::card::CardId;
use super::pool::CardPool;

/// A price-derived rarity tier.
///
/// Ordered: `Common < Uncommon < Rare < Mythic`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bracket {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Bracket {
    /// All brackets, ascending.
    pub const ALL: [Bracket; 4] = [
        Bracket::Common,
        Bracket::Uncommon,
        Bracket::Rare,
        Bracket::Mythic,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Bracket::Common => "common",
            Bracket::Uncommon => "uncommon",
            Bracket::Rare => "rare",
            Bracket::Mythic => "mythic",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ascending price bounds for the four brackets.
///
/// A card belongs to the first bracket whose upper bound its minimum
/// price does not exceed; a price exactly on a bound belongs to the
/// lower bracket. The last bound is always +infinity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityThresholds {
    bounds: [f64; 4],
}

impl RarityThresholds {
    /// Thresholds from the three finite upper bounds, ascending.
    #[must_use]
    pub fn new(common: f64, uncommon: f64, rare: f64) -> Self {
        debug_assert!(common < uncommon && uncommon < rare);
        Self {
            bounds: [common, uncommon, rare, f64::INFINITY],
        }
    }

    /// Upper bound of one bracket.
    #[must_use]
    pub fn bound(&self, bracket: Bracket) -> f64 {
        self.bounds[bracket.index()]
    }

    /// The bracket a minimum price falls into.
    #[must_use]
    pub fn bracket_for(&self, min_price: f64) -> Bracket {
        for bracket in Bracket::ALL {
            if min_price <= self.bounds[bracket.index()] {
                return bracket;
            }
        }
        Bracket::Mythic
    }
}

impl Default for RarityThresholds {
    /// The booster-proportion thresholds: 0.25 / 4.00 / 40.00 / ∞.
    fn default() -> Self {
        Self::new(0.25, 4.00, 40.00)
    }
}

/// The four per-bracket sampling pools over a classified card pool.
///
/// Brackets partition the pool: every card appears in exactly the pool
/// matching its stamped bracket.
#[derive(Clone, Debug, Default)]
pub struct BracketPools {
    pools: [Vec<CardId>; 4],
}

impl BracketPools {
    /// Classify every card in the pool and build the bracket pools.
    ///
    /// Stamps each card's bracket exactly once; run after loading, before
    /// any generation. The pool is immutable from then on.
    #[must_use]
    pub fn classify(pool: &mut CardPool, thresholds: &RarityThresholds) -> Self {
        let mut pools = Self::default();
        for id in pool.card_ids() {
            let bracket = thresholds.bracket_for(pool.get(id).min_price());
            pool.stamp_bracket(id, bracket);
            pools.pools[bracket.index()].push(id);
        }

        info!(
            common = pools.pools[0].len(),
            uncommon = pools.pools[1].len(),
            rare = pools.pools[2].len(),
            mythic = pools.pools[3].len(),
            "classified card pool"
        );
        pools
    }

    /// Cards in one bracket's pool.
    #[must_use]
    pub fn bracket(&self, bracket: Bracket) -> &[CardId] {
        &self.pools[bracket.index()]
    }

    /// Total cards across all brackets (equals the pool size).
    #[must_use]
    pub fn total(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Per-bracket counts and shares, for diagnostics.
    #[must_use]
    pub fn summary(&self) -> BracketSummary {
        BracketSummary {
            counts: [
                self.pools[0].len(),
                self.pools[1].len(),
                self.pools[2].len(),
                self.pools[3].len(),
            ],
            total: self.total(),
        }
    }

    /// Cross-tabulate printed rarity against price bracket.
    ///
    /// A card contributes one count per distinct printed rarity it has
    /// appeared at, under its stamped bracket.
    #[must_use]
    pub fn printed_rarity_breakdown(&self, pool: &CardPool) -> FxHashMap<String, [usize; 4]> {
        let mut breakdown: FxHashMap<String, [usize; 4]> = FxHashMap::default();
        for bracket in Bracket::ALL {
            for &id in self.bracket(bracket) {
                for printed in pool.get(id).printed_rarities() {
                    breakdown.entry(printed.to_string()).or_default()[bracket.index()] += 1;
                }
            }
        }
        breakdown
    }
}

/// Bracket sizes over a classified pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketSummary {
    pub counts: [usize; 4],
    pub total: usize,
}

impl BracketSummary {
    /// Share of the pool in one bracket, in [0, 1].
    #[must_use]
    pub fn share(&self, bracket: Bracket) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts[bracket.index()] as f64 / self.total as f64
    }
}
