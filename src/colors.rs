//! Color and basic-land vocabulary.
//!
//! The five pip colors, color-identity sets, and the eleven recognized
//! basic-land names (five colors in normal and snow-covered variants,
//! plus the colorless basic). Generators and the decklist codec share
//! these mappings; keeping them as enums means downstream code matches
//! exhaustively instead of consulting string tables.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five pip colors.
///
/// Declaration order is pip order (WUBRG); `ColorIdentity` sorts by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All five colors in pip order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// The single-letter pip symbol.
    #[must_use]
    pub const fn pip(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Parse a pip symbol.
    #[must_use]
    pub fn from_pip(pip: char) -> Option<Self> {
        match pip.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// The normal basic land that produces this color.
    #[must_use]
    pub const fn basic_land(self) -> BasicLand {
        match self {
            Color::White => BasicLand::Plains,
            Color::Blue => BasicLand::Island,
            Color::Black => BasicLand::Swamp,
            Color::Red => BasicLand::Mountain,
            Color::Green => BasicLand::Forest,
        }
    }

    /// The snow-covered basic land that produces this color.
    #[must_use]
    pub const fn snow_basic_land(self) -> BasicLand {
        match self {
            Color::White => BasicLand::SnowCoveredPlains,
            Color::Blue => BasicLand::SnowCoveredIsland,
            Color::Black => BasicLand::SnowCoveredSwamp,
            Color::Red => BasicLand::SnowCoveredMountain,
            Color::Green => BasicLand::SnowCoveredForest,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pip())
    }
}

/// A sorted, deduplicated set of colors.
///
/// Built from catalog `color_identity` arrays or from chosen deck colors.
/// At most five entries, so it lives inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorIdentity(SmallVec<[Color; 5]>);

impl ColorIdentity {
    /// The empty (colorless) identity.
    #[must_use]
    pub fn colorless() -> Self {
        Self::default()
    }

    /// Build from pip symbols, ignoring anything unrecognized.
    #[must_use]
    pub fn from_pips<'a, I: IntoIterator<Item = &'a str>>(pips: I) -> Self {
        pips.into_iter()
            .filter_map(|s| s.chars().next().and_then(Color::from_pip))
            .collect()
    }

    /// Number of colors in the identity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for colorless cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// True when every color here also appears in `other`.
    ///
    /// Colorless is a subset of everything.
    #[must_use]
    pub fn is_subset_of(&self, other: &ColorIdentity) -> bool {
        self.0.iter().all(|c| other.contains(*c))
    }

    /// True when the identity is exactly the given single color.
    #[must_use]
    pub fn is_exactly(&self, color: Color) -> bool {
        self.0.len() == 1 && self.0[0] == color
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorIdentity {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut colors: SmallVec<[Color; 5]> = iter.into_iter().collect();
        colors.sort_unstable();
        colors.dedup();
        Self(colors)
    }
}

impl fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.pip())?;
        }
        Ok(())
    }
}

/// One of the eleven recognized basic-land names.
///
/// Basic lands are never merged into canonical cards; they are tracked
/// separately as interchangeable art variants and counted per name in
/// sealed products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicLand {
    Plains,
    Island,
    Swamp,
    Mountain,
    Forest,
    SnowCoveredPlains,
    SnowCoveredIsland,
    SnowCoveredSwamp,
    SnowCoveredMountain,
    SnowCoveredForest,
    Wastes,
}

impl BasicLand {
    /// All eleven basic lands.
    pub const ALL: [BasicLand; 11] = [
        BasicLand::Plains,
        BasicLand::Island,
        BasicLand::Swamp,
        BasicLand::Mountain,
        BasicLand::Forest,
        BasicLand::SnowCoveredPlains,
        BasicLand::SnowCoveredIsland,
        BasicLand::SnowCoveredSwamp,
        BasicLand::SnowCoveredMountain,
        BasicLand::SnowCoveredForest,
        BasicLand::Wastes,
    ];

    /// The five standard colored basics.
    pub const COLORED: [BasicLand; 5] = [
        BasicLand::Plains,
        BasicLand::Island,
        BasicLand::Swamp,
        BasicLand::Mountain,
        BasicLand::Forest,
    ];

    /// The six special basics: the snow-covered set plus the colorless one.
    pub const SPECIAL: [BasicLand; 6] = [
        BasicLand::SnowCoveredPlains,
        BasicLand::SnowCoveredIsland,
        BasicLand::SnowCoveredSwamp,
        BasicLand::SnowCoveredMountain,
        BasicLand::SnowCoveredForest,
        BasicLand::Wastes,
    ];

    /// The display name, as it appears in the catalog and in decklists.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BasicLand::Plains => "Plains",
            BasicLand::Island => "Island",
            BasicLand::Swamp => "Swamp",
            BasicLand::Mountain => "Mountain",
            BasicLand::Forest => "Forest",
            BasicLand::SnowCoveredPlains => "Snow-Covered Plains",
            BasicLand::SnowCoveredIsland => "Snow-Covered Island",
            BasicLand::SnowCoveredSwamp => "Snow-Covered Swamp",
            BasicLand::SnowCoveredMountain => "Snow-Covered Mountain",
            BasicLand::SnowCoveredForest => "Snow-Covered Forest",
            BasicLand::Wastes => "Wastes",
        }
    }

    /// Resolve a basic-land name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BasicLand::ALL
            .iter()
            .copied()
            .find(|land| land.name().eq_ignore_ascii_case(name))
    }

    /// The color this land produces. `None` for the colorless basic.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            BasicLand::Plains | BasicLand::SnowCoveredPlains => Some(Color::White),
            BasicLand::Island | BasicLand::SnowCoveredIsland => Some(Color::Blue),
            BasicLand::Swamp | BasicLand::SnowCoveredSwamp => Some(Color::Black),
            BasicLand::Mountain | BasicLand::SnowCoveredMountain => Some(Color::Red),
            BasicLand::Forest | BasicLand::SnowCoveredForest => Some(Color::Green),
            BasicLand::Wastes => None,
        }
    }
}

impl fmt::Display for BasicLand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_pip(color.pip()), Some(color));
        }
        assert_eq!(Color::from_pip('X'), None);
    }

    #[test]
    fn test_identity_sorts_and_dedups() {
        let id: ColorIdentity = [Color::Green, Color::White, Color::Green]
            .into_iter()
            .collect();
        assert_eq!(id.len(), 2);
        assert_eq!(id.to_string(), "WG");
    }

    #[test]
    fn test_identity_from_pips() {
        let id = ColorIdentity::from_pips(["U", "R"]);
        assert!(id.contains(Color::Blue));
        assert!(id.contains(Color::Red));
        assert_eq!(id.len(), 2);
    }

    #[test]
    fn test_subset() {
        let deck: ColorIdentity = [Color::White, Color::Blue].into_iter().collect();
        let mono: ColorIdentity = [Color::Blue].into_iter().collect();
        let off: ColorIdentity = [Color::Blue, Color::Green].into_iter().collect();

        assert!(mono.is_subset_of(&deck));
        assert!(ColorIdentity::colorless().is_subset_of(&deck));
        assert!(!off.is_subset_of(&deck));
    }

    #[test]
    fn test_is_exactly() {
        let mono: ColorIdentity = [Color::Red].into_iter().collect();
        let pair: ColorIdentity = [Color::Red, Color::Green].into_iter().collect();

        assert!(mono.is_exactly(Color::Red));
        assert!(!mono.is_exactly(Color::Green));
        assert!(!pair.is_exactly(Color::Red));
        assert!(!ColorIdentity::colorless().is_exactly(Color::Red));
    }

    #[test]
    fn test_basic_land_names_resolve() {
        for land in BasicLand::ALL {
            assert_eq!(BasicLand::from_name(land.name()), Some(land));
            assert_eq!(
                BasicLand::from_name(&land.name().to_lowercase()),
                Some(land)
            );
        }
        assert_eq!(BasicLand::from_name("Not A Land"), None);
    }

    #[test]
    fn test_land_color_mappings() {
        for color in Color::ALL {
            assert_eq!(color.basic_land().color(), Some(color));
            assert_eq!(color.snow_basic_land().color(), Some(color));
        }
        assert_eq!(BasicLand::Wastes.color(), None);
    }

    #[test]
    fn test_land_partitions() {
        assert_eq!(BasicLand::COLORED.len() + BasicLand::SPECIAL.len(), 11);
        for land in BasicLand::COLORED {
            assert!(!BasicLand::SPECIAL.contains(&land));
        }
    }
}
