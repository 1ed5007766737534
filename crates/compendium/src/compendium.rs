// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::category::Category;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::source::RawCompendium;

// external crates
use log::{debug, info};

/// Collection of materials keyed by id
///
/// Build once from the compendium JSON export and pass around by reference.
///
/// ```rust
/// # use matcard_compendium::{Category, Compendium};
/// let json = r#"{"data": [
///     {"Name": "Air (Dry, Near Sea Level)", "Density": 0.001205,
///      "Elements": [{"Element": "N", "ZAID": "7000", "AtomFraction_whole": 0.784}]},
///     {"Name": "Water, Liquid", "Density": 0.998207, "Acronym": ["H2O"],
///      "Elements": [{"Element": "O", "ZAID": 8000, "AtomFraction": 0.333}]}
/// ]}"#;
///
/// let compendium = Compendium::from_json_str(json).unwrap();
///
/// assert_eq!(compendium.len(), 2);
/// assert_eq!(compendium.search("h2o", None)[0].id, "water-liquid");
/// assert_eq!(compendium.categories(), vec![Category::Gases, Category::Water]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compendium {
    materials: BTreeMap<String, Material>,
}

impl Compendium {
    /// Parse the compendium from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCompendium = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse the compendium from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawCompendium = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Read the compendium JSON export from a file
    ///
    /// The `path` takes anything that can be turned into a `Path` reference, such
    /// as a [&str], [String], [Path], etc...
    ///
    /// ```rust, no_run
    /// # use matcard_compendium::Compendium;
    /// let compendium = Compendium::read_json("path/to/compendium.json").unwrap();
    /// ```
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: &Path = Path::new(path.as_ref());
        let reader = BufReader::new(File::open(path)?);
        let compendium = Self::from_reader(reader)?;
        info!(
            "Loaded {} materials from {}",
            compendium.len(),
            path.display()
        );
        Ok(compendium)
    }

    /// Collect materials directly
    ///
    /// Materials sharing an id replace earlier ones.
    pub fn from_materials<I: IntoIterator<Item = Material>>(materials: I) -> Self {
        let mut compendium = Self::default();
        for material in materials {
            if let Some(previous) = compendium.materials.insert(material.id.clone(), material) {
                debug!("Replaced duplicate material \"{}\"", previous.id);
            }
        }
        compendium
    }

    fn from_raw(raw: RawCompendium) -> Self {
        Self::from_materials(raw.data.into_iter().map(Material::from))
    }

    /// Material for an id, if any
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Material for an id, or [Error::MaterialNotFound]
    pub fn material(&self, id: &str) -> Result<&Material> {
        self.get(id).ok_or_else(|| Error::MaterialNotFound { id: id.to_string() })
    }

    /// Materials with `query` in the name or acronym, sorted by name
    ///
    /// Matching ignores case, and an empty query matches everything. Results
    /// are optionally restricted to a single [Category].
    pub fn search(&self, query: &str, category: Option<Category>) -> Vec<&Material> {
        let query = query.to_lowercase();

        let mut results: Vec<&Material> = self
            .materials
            .values()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .filter(|m| {
                m.name.to_lowercase().contains(&query)
                    || m.acronym
                        .as_ref()
                        .is_some_and(|a| a.to_lowercase().contains(&query))
            })
            .collect();

        results.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        results
    }

    /// Every category with at least one material, sorted by display name
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.materials.values().map(|m| m.category).collect();
        categories.sort_by_key(|c| c.name());
        categories.dedup();
        categories
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over materials in id order
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Component;

    fn material(name: &str) -> Material {
        Material::new(
            name,
            Some(1.0),
            vec![Component {
                zaid: 1000,
                fraction: 1.0,
                label: "H".into(),
            }],
        )
    }

    #[test]
    fn duplicates_replace_earlier() {
        let mut second = material("Lead");
        second.density = Some(11.35);
        let compendium = Compendium::from_materials([material("Lead"), second]);

        assert_eq!(compendium.len(), 1);
        assert_eq!(compendium.get("lead").unwrap().density, Some(11.35));
    }

    #[test]
    fn missing_material() {
        let compendium = Compendium::from_materials([material("Lead")]);
        assert!(matches!(
            compendium.material("gold"),
            Err(Error::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn categories_sorted_by_name() {
        let compendium = Compendium::from_materials(
            ["Water, Liquid", "Bone, Cortical", "Lead", "Soil", "Steel"].map(material),
        );

        assert_eq!(
            compendium.categories(),
            vec![
                Category::Biological,
                Category::Metals,
                Category::SoilAndRock,
                Category::Steel,
                Category::Water,
            ]
        );
    }
}
