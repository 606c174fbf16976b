//! Canonical cards: one rules identity merged across printings.
//!
//! The loader groups filtered printings by oracle identity into
//! `CanonicalCard`s. Name, types, and color identity are derived from the
//! printings on demand rather than stored; the aggregated price list and
//! the price-derived rarity bracket are the only state a card carries of
//! its own.

use smallvec::SmallVec;

use super::printing::Printing;
use super::rarity::Bracket;
use crate::colors::ColorIdentity;
use crate::rng::SamplerRng;

/// Index of a canonical card within its [`CardPool`].
///
/// Sealed products and bracket pools reference cards by id; the pool is
/// the single owner of the card data.
///
/// [`CardPool`]: crate::catalog::CardPool
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One logical face, normalized out of the layout-specific wire shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub name: String,
    pub type_line: String,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
}

impl Face {
    fn of_printing(printing: &Printing) -> Self {
        Self {
            name: printing.name.clone(),
            type_line: printing.type_line.clone(),
            mana_cost: printing.mana_cost.clone(),
            oracle_text: printing.oracle_text.clone(),
        }
    }
}

/// Face structure of a card, resolved once at load time.
///
/// Downstream consumers (renderers, exporters) iterate faces without
/// branching on the printing's layout tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FaceLayout {
    /// The printing itself is the only face.
    #[default]
    Single,
    /// Front and back faces from the printing's face sub-records.
    TwoFace { front: Face, back: Face },
    /// A meld half: its own face plus the id of the linked meld result.
    MeldPart {
        front: Face,
        meld_result_id: String,
    },
}

impl FaceLayout {
    /// Resolve the face structure of one printing.
    #[must_use]
    pub fn resolve(printing: &Printing) -> Self {
        if printing.layout == "meld" {
            if let Some(part) = printing
                .all_parts
                .iter()
                .find(|p| p.component == "meld_result")
            {
                return FaceLayout::MeldPart {
                    front: Face::of_printing(printing),
                    meld_result_id: part.id.clone(),
                };
            }
            return FaceLayout::Single;
        }

        match printing.card_faces.as_slice() {
            [front, back, ..] => FaceLayout::TwoFace {
                front: Face {
                    name: front.name.clone(),
                    type_line: front.type_line.clone(),
                    mana_cost: front.mana_cost.clone(),
                    oracle_text: front.oracle_text.clone(),
                },
                back: Face {
                    name: back.name.clone(),
                    type_line: back.type_line.clone(),
                    mana_cost: back.mana_cost.clone(),
                    oracle_text: back.oracle_text.clone(),
                },
            },
            _ => FaceLayout::Single,
        }
    }
}

/// One card's rules identity, merged across all its printings.
///
/// Invariants: the price list is non-empty (priceless cards never enter
/// the pool) and the bracket is stamped exactly once, after loading,
/// from the minimum aggregated price.
#[derive(Clone, Debug)]
pub struct CanonicalCard {
    printings: Vec<Printing>,
    prices: SmallVec<[f64; 6]>,
    bracket: Option<Bracket>,
    faces: FaceLayout,
}

impl CanonicalCard {
    pub(crate) fn new() -> Self {
        Self {
            printings: Vec::new(),
            prices: SmallVec::new(),
            bracket: None,
            faces: FaceLayout::Single,
        }
    }

    /// Append a printing and its usable prices. Insertion order is load
    /// order; the first multi-face printing fixes the face layout.
    pub(crate) fn add_printing(&mut self, printing: Printing, prices: &[f64]) {
        if matches!(self.faces, FaceLayout::Single) && printing.is_multi_face() {
            self.faces = FaceLayout::resolve(&printing);
        }
        self.prices.extend_from_slice(prices);
        self.printings.push(printing);
    }

    pub(crate) fn set_bracket(&mut self, bracket: Bracket) {
        debug_assert!(self.bracket.is_none(), "bracket stamped twice");
        self.bracket = Some(bracket);
    }

    /// Display name (from the first-loaded printing).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.printings[0].name
    }

    #[must_use]
    pub fn type_line(&self) -> &str {
        &self.printings[0].type_line
    }

    /// Deck-building color identity.
    #[must_use]
    pub fn color_identity(&self) -> ColorIdentity {
        ColorIdentity::from_pips(self.printings[0].color_identity.iter().map(String::as_str))
    }

    /// Type-line words before the dash (card types and supertypes).
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        let line = self.type_line();
        line.split_whitespace().take_while(|word| *word != "—")
    }

    /// Type-line words after the dash.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        let line = self.type_line();
        line.split_whitespace()
            .skip_while(|word| *word != "—")
            .skip(1)
    }

    #[must_use]
    pub fn has_supertype(&self, word: &str) -> bool {
        self.supertypes().any(|t| t == word)
    }

    /// All printings, in load order.
    #[must_use]
    pub fn printings(&self) -> &[Printing] {
        &self.printings
    }

    /// Aggregated dollar prices across every printing and finish.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Minimum aggregated price, the classification input.
    #[must_use]
    pub fn min_price(&self) -> f64 {
        self.prices.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Price-derived rarity bracket. `None` until classification runs.
    #[must_use]
    pub fn bracket(&self) -> Option<Bracket> {
        self.bracket
    }

    /// Resolved face structure.
    #[must_use]
    pub fn faces(&self) -> &FaceLayout {
        &self.faces
    }

    /// True when any printing has more than one logical face.
    #[must_use]
    pub fn is_double_faced(&self) -> bool {
        !matches!(self.faces, FaceLayout::Single)
    }

    /// True when any printing's cost or rules text asks for snow mana.
    #[must_use]
    pub fn needs_snow(&self) -> bool {
        self.printings.iter().any(|p| {
            p.mana_cost.as_deref().is_some_and(|c| c.contains("{S}"))
                || p.oracle_text.as_deref().is_some_and(|t| t.contains("{S}"))
        })
    }

    /// True when any printing's cost asks for colorless mana explicitly.
    #[must_use]
    pub fn needs_colorless(&self) -> bool {
        self.printings
            .iter()
            .any(|p| p.mana_cost.as_deref().is_some_and(|c| c.contains("{C}")))
    }

    /// Every printed rarity this card has appeared at.
    pub fn printed_rarities(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = self
            .printings
            .iter()
            .filter_map(|p| p.rarity.as_deref())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.into_iter()
    }

    /// Pick a random canonical-language printing (art selection hook for
    /// renderers). `None` when the card has no such printing.
    #[must_use]
    pub fn random_printing<'a>(&'a self, lang: &str, rng: &mut SamplerRng) -> Option<&'a Printing> {
        let candidates: Vec<&Printing> =
            self.printings.iter().filter(|p| p.lang == lang).collect();
        rng.choose(&candidates).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::printing::{CardFace, RelatedPart};

    fn printing(name: &str, type_line: &str) -> Printing {
        Printing {
            name: name.to_string(),
            type_line: type_line.to_string(),
            lang: "en".to_string(),
            ..Printing::default()
        }
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{id}"), "Card(42)");
    }

    #[test]
    fn test_derived_types() {
        let mut card = CanonicalCard::new();
        card.add_printing(
            printing("Llanowar Elves", "Creature — Elf Druid"),
            &[0.10],
        );

        assert_eq!(card.name(), "Llanowar Elves");
        let supers: Vec<_> = card.supertypes().collect();
        assert_eq!(supers, ["Creature"]);
        let subs: Vec<_> = card.subtypes().collect();
        assert_eq!(subs, ["Elf", "Druid"]);
        assert!(card.has_supertype("Creature"));
        assert!(!card.has_supertype("Land"));
    }

    #[test]
    fn test_type_line_without_dash() {
        let mut card = CanonicalCard::new();
        card.add_printing(printing("Opt", "Instant"), &[0.05]);

        assert_eq!(card.supertypes().collect::<Vec<_>>(), ["Instant"]);
        assert_eq!(card.subtypes().count(), 0);
    }

    #[test]
    fn test_min_price_across_printings() {
        let mut card = CanonicalCard::new();
        card.add_printing(printing("A", "Instant"), &[3.0, 1.5]);
        card.add_printing(printing("A", "Instant"), &[0.75]);

        assert_eq!(card.prices().len(), 3);
        assert_eq!(card.min_price(), 0.75);
    }

    #[test]
    fn test_snow_and_colorless_flags() {
        let mut plain = CanonicalCard::new();
        plain.add_printing(
            Printing {
                mana_cost: Some("{1}{G}".to_string()),
                ..printing("A", "Creature — Bear")
            },
            &[0.1],
        );
        assert!(!plain.needs_snow());
        assert!(!plain.needs_colorless());

        let mut snow = CanonicalCard::new();
        snow.add_printing(
            Printing {
                oracle_text: Some("{S}: Do a snow thing.".to_string()),
                ..printing("B", "Creature — Yeti")
            },
            &[0.1],
        );
        assert!(snow.needs_snow());

        let mut colorless = CanonicalCard::new();
        colorless.add_printing(
            Printing {
                mana_cost: Some("{C}{C}".to_string()),
                ..printing("C", "Creature — Eldrazi")
            },
            &[0.1],
        );
        assert!(colorless.needs_colorless());
    }

    #[test]
    fn test_face_resolution_two_face() {
        let raw = Printing {
            card_faces: vec![
                CardFace {
                    name: "Front".to_string(),
                    type_line: "Creature — Human".to_string(),
                    mana_cost: Some("{1}{R}".to_string()),
                    oracle_text: None,
                },
                CardFace {
                    name: "Back".to_string(),
                    type_line: "Creature — Werewolf".to_string(),
                    mana_cost: None,
                    oracle_text: None,
                },
            ],
            layout: "transform".to_string(),
            ..printing("Front // Back", "Creature — Human // Creature — Werewolf")
        };

        let mut card = CanonicalCard::new();
        card.add_printing(raw, &[0.2]);

        assert!(card.is_double_faced());
        match card.faces() {
            FaceLayout::TwoFace { front, back } => {
                assert_eq!(front.name, "Front");
                assert_eq!(back.name, "Back");
            }
            other => panic!("expected two faces, got {other:?}"),
        }
    }

    #[test]
    fn test_face_resolution_meld() {
        let raw = Printing {
            layout: "meld".to_string(),
            all_parts: vec![
                RelatedPart {
                    id: "self-id".to_string(),
                    component: "meld_part".to_string(),
                    name: "Half".to_string(),
                },
                RelatedPart {
                    id: "result-id".to_string(),
                    component: "meld_result".to_string(),
                    name: "Whole".to_string(),
                },
            ],
            ..printing("Half", "Creature — Construct")
        };

        let mut card = CanonicalCard::new();
        card.add_printing(raw, &[0.3]);

        match card.faces() {
            FaceLayout::MeldPart {
                front,
                meld_result_id,
            } => {
                assert_eq!(front.name, "Half");
                assert_eq!(meld_result_id, "result-id");
            }
            other => panic!("expected meld part, got {other:?}"),
        }
    }

    #[test]
    fn test_random_printing_filters_language() {
        let mut card = CanonicalCard::new();
        card.add_printing(
            Printing {
                lang: "ja".to_string(),
                ..printing("A", "Instant")
            },
            &[0.1],
        );
        card.add_printing(printing("A", "Instant"), &[0.1]);

        let mut rng = SamplerRng::new(1);
        for _ in 0..20 {
            let chosen = card.random_printing("en", &mut rng).unwrap();
            assert_eq!(chosen.lang, "en");
        }
        assert!(card.random_printing("de", &mut rng).is_none());
    }
}
