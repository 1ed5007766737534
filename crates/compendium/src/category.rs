// crate modules
use crate::error::{Error, Result};

// external crates
use serde::Serialize;

/// Broad grouping of compendium materials
///
/// Categories are inferred from keywords in the material name, see
/// [Category::from_name()].
///
/// The `FromStr` trait is implemented using the display names, ignoring case.
///
/// ```rust
/// # use matcard_compendium::Category;
/// # use std::str::FromStr;
/// assert_eq!(Category::from_str("soil & rock").unwrap(), Category::SoilAndRock);
/// assert_eq!(Category::SoilAndRock.name(), "Soil & Rock");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Gases,
    Water,
    Concrete,
    Metals,
    Steel,
    Shielding,
    Detectors,
    Biological,
    Plastics,
    Explosives,
    Fuels,
    Glass,
    SoilAndRock,
    Other,
}

impl Category {
    /// Every category, in the order rules are checked
    pub const ALL: [Category; 14] = [
        Category::Gases,
        Category::Water,
        Category::Concrete,
        Category::Metals,
        Category::Steel,
        Category::Shielding,
        Category::Detectors,
        Category::Biological,
        Category::Plastics,
        Category::Explosives,
        Category::Fuels,
        Category::Glass,
        Category::SoilAndRock,
        Category::Other,
    ];

    /// Display name for the category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Gases => "Gases",
            Category::Water => "Water",
            Category::Concrete => "Concrete",
            Category::Metals => "Metals",
            Category::Steel => "Steel",
            Category::Shielding => "Shielding",
            Category::Detectors => "Detectors",
            Category::Biological => "Biological",
            Category::Plastics => "Plastics",
            Category::Explosives => "Explosives",
            Category::Fuels => "Fuels",
            Category::Glass => "Glass",
            Category::SoilAndRock => "Soil & Rock",
            Category::Other => "Other",
        }
    }

    /// Infer a category from a material name
    ///
    /// Categories are checked in the order of [Category::ALL] and the first
    /// one with a matching keyword wins. Anything unmatched is
    /// [Category::Other].
    ///
    /// ```rust
    /// # use matcard_compendium::Category;
    /// assert_eq!(Category::from_name("Air (Dry, Near Sea Level)"), Category::Gases);
    /// assert_eq!(Category::from_name("Steel, Stainless 304"), Category::Steel);
    /// assert_eq!(Category::from_name("Polyethylene, Borated"), Category::Shielding);
    /// assert_eq!(Category::from_name("Lead Tungstate"), Category::Metals);
    /// assert_eq!(Category::from_name("Unobtainium Alloy"), Category::Other);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.rules().iter().any(|rule| rule.matches(&name)))
            .unwrap_or(Category::Other)
    }

    /// Keyword rules for the category
    fn rules(&self) -> &'static [Rule] {
        use Rule::*;
        match self {
            Category::Gases => &[
                Word("air"),
                Word("gas"),
                Word("argon"),
                Word("helium"),
                Word("neon"),
                Word("xenon"),
                Word("krypton"),
                Contains("co2"),
                Word("methane"),
                Word("ethane"),
                Word("propane"),
            ],
            Category::Water => &[
                Word("water"),
                Word("h2o"),
                Word("ice"),
                Word("seawater"),
                Word("heavy water"),
                Word("d2o"),
            ],
            Category::Concrete => &[Word("concrete")],
            Category::Metals => &[
                Word("aluminum"),
                Word("iron"),
                Word("copper"),
                Word("lead"),
                Word("tungsten"),
                Word("gold"),
                Word("silver"),
                Word("nickel"),
                Word("titanium"),
                Word("uranium"),
                Word("plutonium"),
                Word("zirconium"),
                Word("cadmium"),
                Word("zinc"),
                Word("manganese"),
                Word("beryllium"),
                Word("molybdenum"),
                Word("tantalum"),
                Word("bismuth"),
            ],
            Category::Steel => &[Word("steel"), Word("stainless")],
            Category::Shielding => &[
                Word("polyethylene"),
                Word("paraffin"),
                Word("boron"),
                Word("shield"),
                Word("graphite"),
                Word("carbide"),
            ],
            Category::Detectors => &[
                Prefix("scintill"),
                Word("detector"),
                Word("nai"),
                Word("csi"),
                Word("bgo"),
                Word("lso"),
                Word("lyso"),
                Word("germanium"),
                Word("czt"),
                Word("he3"),
                Word("he-3"),
                Word("bf3"),
            ],
            Category::Biological => &[
                Word("tissue"),
                Word("bone"),
                Word("muscle"),
                Word("blood"),
                Word("brain"),
                Word("lung"),
                Word("adipose"),
                Word("skin"),
                Word("cartilage"),
                Word("liver"),
                Word("kidney"),
                Word("heart"),
                Word("phantom"),
                Word("icru"),
                Word("icrp"),
            ],
            Category::Plastics => &[
                Word("plastic"),
                Word("polymer"),
                Word("pmma"),
                Word("pvc"),
                Word("teflon"),
                Word("nylon"),
                Word("polystyrene"),
                Word("polypropylene"),
                Word("epoxy"),
                Word("kapton"),
                Prefix("plexi"),
                Word("lucite"),
                Word("mylar"),
                Word("lexan"),
            ],
            Category::Explosives => &[
                Word("tnt"),
                Word("rdx"),
                Word("petn"),
                Word("hmx"),
                Word("explosive"),
                Word("propellant"),
            ],
            Category::Fuels => &[
                Word("fuel"),
                Word("gasoline"),
                Word("diesel"),
                Word("jet"),
                Word("oil"),
                Word("petroleum"),
            ],
            Category::Glass => &[Word("glass"), Word("pyrex"), Word("silica")],
            Category::SoilAndRock => &[Word("soil"), Word("rock"), Word("earth"), Suffix("ite")],
            Category::Other => &[],
        }
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hint = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(hint))
            .ok_or_else(|| Error::CouldNotInferCategory {
                hint: s.to_string(),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Keyword match against a lowercase material name
///
/// Word boundaries sit between a word character (`[a-z0-9_]`) and anything
/// else, or the ends of the name.
#[derive(Debug)]
enum Rule {
    /// Whole word or phrase
    Word(&'static str),
    /// Word starting with the text
    Prefix(&'static str),
    /// Word ending with the text
    Suffix(&'static str),
    /// Anywhere in the name
    Contains(&'static str),
}

impl Rule {
    fn matches(&self, name: &str) -> bool {
        let (pattern, start, end) = match self {
            Rule::Word(p) => (p, true, true),
            Rule::Prefix(p) => (p, true, false),
            Rule::Suffix(p) => (p, false, true),
            Rule::Contains(p) => (p, false, false),
        };

        name.match_indices(pattern).any(|(idx, _)| {
            (!start || is_boundary(name[..idx].chars().next_back()))
                && (!end || is_boundary(name[idx + pattern.len()..].chars().next()))
        })
    }
}

/// True if the neighbouring character is not part of the same word
fn is_boundary(neighbour: Option<char>) -> bool {
    !neighbour.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_words_only() {
        assert!(Rule::Word("ice").matches("ice, crystalline"));
        assert!(!Rule::Word("ice").matches("rice husk"));
        assert!(!Rule::Word("lead").matches("leaded glass"));
        assert!(Rule::Word("heavy water").matches("water, heavy water (d2o)"));
    }

    #[test]
    fn prefix_and_suffix() {
        assert!(Rule::Prefix("scintill").matches("plastic scintillator"));
        assert!(!Rule::Prefix("scintill").matches("xscintillator"));
        assert!(Rule::Suffix("ite").matches("hematite"));
        assert!(!Rule::Suffix("ite").matches("iter"));
    }

    #[test]
    fn first_matching_category_wins() {
        // "air" comes before anything tissue related
        assert_eq!(Category::from_name("Air, Tissue Equivalent"), Category::Gases);
        assert_eq!(Category::from_name("Water, Liquid"), Category::Water);
        assert_eq!(Category::from_name("Concrete, Portland"), Category::Concrete);
        assert_eq!(Category::from_name("He-3 Proportional Counter"), Category::Detectors);
        assert_eq!(Category::from_name("Tissue, Soft (ICRP)"), Category::Biological);
        assert_eq!(Category::from_name("Kapton Polyimide Film"), Category::Plastics);
        assert_eq!(Category::from_name("TNT"), Category::Explosives);
        assert_eq!(Category::from_name("Fuel Oil"), Category::Fuels);
        assert_eq!(Category::from_name("Glass, Borosilicate"), Category::Glass);
        assert_eq!(Category::from_name("Hematite"), Category::SoilAndRock);
        assert_eq!(Category::from_name("CO2 Laser Medium"), Category::Gases);
    }

    #[test]
    fn parse_category_names() {
        use std::str::FromStr;
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.name()).unwrap(), category);
        }
        assert!(Category::from_str("Cheese").is_err());
    }
}
