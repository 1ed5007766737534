// crate modules
use crate::category::Category;
use crate::error::{Error, Result};

// matcard modules
use matcard_abundance::{atomic_number_of, lookup_element};
use matcard_card::{
    expand, format_document, ConversionOptions, ConversionStats, Document, Item, MaterialBlock,
    MaterialEntry,
};
use matcard_format::{f, fraction};

// external crates
use serde::Serialize;

/// One ZAID and atom fraction of a compendium material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Elemental or isotopic ZAID
    pub zaid: u32,
    /// Atom fraction
    pub fraction: f64,
    /// Element or isotope label from the source data, e.g. `H` or `H1`
    pub label: String,
}

/// A material from the compendium
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    /// Unique key derived from the name, see [material_id()]
    pub id: String,
    /// Full material name
    pub name: String,
    /// Category inferred from the name
    pub category: Category,
    /// Density in g/cm3
    pub density: Option<f64>,
    /// Atom fractions in source order
    pub composition: Vec<Component>,
    /// First listed acronym
    pub acronym: Option<String>,
    /// Material number in the compendium
    pub mat_num: Option<String>,
    /// Where the composition came from
    pub source: Option<String>,
    /// Literature references for the composition
    pub references: Vec<String>,
    /// Notes on the material, e.g. where the density came from
    pub comments: Vec<String>,
}

impl Material {
    /// New material, with the id and category derived from `name`
    pub fn new(name: impl Into<String>, density: Option<f64>, composition: Vec<Component>) -> Self {
        let name = name.into();
        Self {
            id: material_id(&name),
            category: Category::from_name(&name),
            name,
            density,
            composition,
            acronym: None,
            mat_num: None,
            source: None,
            references: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Density for display, `unknown` if missing
    pub fn density_text(&self) -> String {
        match self.density {
            Some(density) => density.to_string(),
            None => "unknown".to_string(),
        }
    }

    /// Card for the material as a [Document]
    ///
    /// The document is a descriptive comment followed by a single `M<number>`
    /// card. Each component gets a `$ <Symbol>` comment when the element is in
    /// the abundance table.
    pub fn to_document(&self, number: u32, options: &CardOptions) -> Result<Document> {
        if self.composition.is_empty() {
            return Err(Error::EmptyComposition {
                id: self.id.clone(),
            });
        }

        let mut block = MaterialBlock::new(number.to_string());
        block.entries = self
            .composition
            .iter()
            .map(|component| {
                let comment = match lookup_element(atomic_number_of(component.zaid)) {
                    Some(element) => f!("$ {}", element.symbol),
                    None => String::new(),
                };
                MaterialEntry::new(
                    component.zaid,
                    options.library_suffix.clone(),
                    component.fraction,
                    fraction(component.fraction),
                    comment,
                )
            })
            .collect();

        Ok(Document {
            items: vec![
                Item::Comment(f!(
                    "c {} (density: {} g/cm3)",
                    self.name,
                    self.density_text()
                )),
                Item::Material(block),
            ],
        })
    }

    /// Material card text exactly as listed in the compendium
    ///
    /// ```rust
    /// # use matcard_compendium::{CardOptions, Component, Material};
    /// let water = Material::new(
    ///     "Water, Liquid",
    ///     Some(0.998207),
    ///     vec![
    ///         Component { zaid: 1000, fraction: 0.666657, label: "H".into() },
    ///         Component { zaid: 8000, fraction: 0.333343, label: "O".into() },
    ///     ],
    /// );
    ///
    /// let card = water.material_card(4, &CardOptions::with_library("80c")).unwrap();
    ///
    /// let lines: Vec<&str> = card.lines().collect();
    /// assert_eq!(lines[0], "c Water, Liquid (density: 0.998207 g/cm3)");
    /// assert_eq!(lines[1], "M4    1000.80c         0.666657    $ H");
    /// assert_eq!(lines[2], "      8000.80c         0.333343    $ O");
    /// ```
    pub fn material_card(&self, number: u32, options: &CardOptions) -> Result<String> {
        Ok(format_document(&self.to_document(number, options)?))
    }

    /// Material card with every elemental component expanded to isotopes
    ///
    /// Library suffixes follow the override in `options`, since compendium
    /// entries have no suffix of their own to preserve.
    pub fn isotopic_card(
        &self,
        number: u32,
        options: &ConversionOptions,
    ) -> Result<(String, ConversionStats)> {
        let document = self.to_document(number, &CardOptions::from(options))?;
        let (expanded, stats) = expand(&document, options);
        Ok((format_document(&expanded), stats))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {} g/cm3, {} components",
            self.name,
            self.category,
            self.density_text(),
            self.composition.len()
        )
    }
}

/// Options for writing compendium material cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Library suffix appended to every ZAID, without the leading `.`
    pub library_suffix: Option<String>,
}

impl CardOptions {
    /// Options with a library suffix, with or without the leading `.`
    ///
    /// ```rust
    /// # use matcard_compendium::CardOptions;
    /// assert_eq!(CardOptions::with_library(".80c").library_suffix.as_deref(), Some("80c"));
    /// assert_eq!(CardOptions::with_library("  ").library_suffix, None);
    /// ```
    pub fn with_library(suffix: &str) -> Self {
        Self::from(&ConversionOptions {
            override_library_suffix: true,
            new_library_suffix: suffix.to_string(),
            ..Default::default()
        })
    }
}

impl From<&ConversionOptions> for CardOptions {
    fn from(options: &ConversionOptions) -> Self {
        Self {
            library_suffix: options.library_for(None),
        }
    }
}

/// Unique key for a material name
///
/// Lowercase, with every run of characters outside `[a-z0-9]` collapsed to a
/// single `-` and no leading or trailing `-`.
///
/// ```rust
/// # use matcard_compendium::material_id;
/// assert_eq!(material_id("Air (Dry, Near Sea Level)"), "air-dry-near-sea-level");
/// assert_eq!(material_id("  Steel, Stainless 304  "), "steel-stainless-304");
/// ```
pub fn material_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            id.push(c);
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(zaid: u32, fraction: f64) -> Component {
        Component {
            zaid,
            fraction,
            label: String::new(),
        }
    }

    #[test]
    fn unknown_elements_have_no_comment() {
        let material = Material::new("Mystery", None, vec![component(94239, 1.0)]);
        let document = material.to_document(2, &CardOptions::default()).unwrap();
        let block = document.materials().next().unwrap();

        assert_eq!(block.number, "2");
        assert_eq!(block.entries[0].comment(), "");
        assert_eq!(
            document.comments().next(),
            Some("c Mystery (density: unknown g/cm3)")
        );
    }

    #[test]
    fn empty_composition_is_an_error() {
        let material = Material::new("Vacuum", Some(0.0), Vec::new());
        assert!(matches!(
            material.material_card(1, &CardOptions::default()),
            Err(Error::EmptyComposition { .. })
        ));
    }

    #[test]
    fn id_edge_cases() {
        assert_eq!(material_id("---"), "");
        assert_eq!(material_id("B4C"), "b4c");
        assert_eq!(
            material_id("Gadolinium Oxyorthosilicate (GSO)"),
            "gadolinium-oxyorthosilicate-gso"
        );
    }

    #[test]
    fn isotopic_card_follows_override() {
        let material = Material::new("Boron", Some(2.37), vec![component(5000, 1.0)]);
        let options = ConversionOptions {
            round_fractions: true,
            override_library_suffix: true,
            new_library_suffix: "80c".into(),
            ..Default::default()
        };

        let (card, stats) = material.isotopic_card(9, &options).unwrap();
        let lines: Vec<&str> = card.lines().collect();

        assert_eq!(stats.elements_converted, 1);
        assert_eq!(stats.isotopes_generated, 2);
        assert_eq!(lines[0], "c Boron (density: 2.37 g/cm3)");
        assert_eq!(lines[1], "M9    5010.80c         0.199000");
        assert_eq!(lines[2], "      5011.80c         0.801000");
    }
}
