//! Deserialisation of the PNNL-15870 compendium JSON export
//!
//! The export is loosely typed. ZAIDs can be strings or integers, and the
//! reference and comment fields can be a single string or a list. Anything
//! awkward is kept as a `serde_json::Value` and tidied up when converting to
//! a [Material].

// crate modules
use crate::material::{Component, Material};

// external crates
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// Top level of the export, `{"data": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct RawCompendium {
    #[serde(default)]
    pub data: Vec<RawMaterial>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawMaterial {
    pub name: String,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub acronym: Value,
    #[serde(default)]
    pub mat_num: Value,
    #[serde(default)]
    pub source: Value,
    #[serde(default)]
    pub references: Value,
    #[serde(default)]
    pub comment: Value,
    #[serde(default)]
    pub elements: Option<Vec<RawElement>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawElement {
    #[serde(rename = "Element", default)]
    pub element: Option<String>,
    #[serde(rename = "ZAID", default)]
    pub zaid: Value,
    #[serde(rename = "AtomFraction_whole", default)]
    pub atom_fraction_whole: Option<f64>,
    #[serde(rename = "AtomFraction", default)]
    pub atom_fraction: Option<f64>,
    #[serde(rename = "Isotopes", default)]
    pub isotopes: Option<Vec<RawIsotope>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIsotope {
    #[serde(rename = "Isotope", default)]
    pub isotope: Option<String>,
    #[serde(rename = "ZAID", default)]
    pub zaid: Value,
    #[serde(rename = "AtomFraction_whole", default)]
    pub atom_fraction_whole: Option<f64>,
    #[serde(rename = "AtomFraction", default)]
    pub atom_fraction: Option<f64>,
}

impl From<RawMaterial> for Material {
    fn from(raw: RawMaterial) -> Self {
        let mut composition = Vec::new();

        for element in raw.elements.unwrap_or_default() {
            match element.isotopes {
                Some(isotopes) if !isotopes.is_empty() => {
                    for isotope in isotopes {
                        let fraction =
                            atom_fraction(isotope.atom_fraction_whole, isotope.atom_fraction);
                        push_component(
                            &mut composition,
                            &raw.name,
                            &isotope.zaid,
                            fraction,
                            isotope.isotope,
                        );
                    }
                }
                _ => {
                    let fraction =
                        atom_fraction(element.atom_fraction_whole, element.atom_fraction);
                    push_component(
                        &mut composition,
                        &raw.name,
                        &element.zaid,
                        fraction,
                        element.element,
                    );
                }
            }
        }

        let mut material = Material::new(raw.name, raw.density, composition);
        material.acronym = strings(&raw.acronym).into_iter().next();
        material.mat_num = strings(&raw.mat_num).into_iter().next();
        material.source = strings(&raw.source).into_iter().next();
        material.references = strings(&raw.references);
        material.comments = strings(&raw.comment);
        material
    }
}

fn push_component(
    composition: &mut Vec<Component>,
    material: &str,
    zaid: &Value,
    fraction: f64,
    label: Option<String>,
) {
    match parse_zaid(zaid) {
        Some(zaid) => composition.push(Component {
            zaid,
            fraction,
            label: label.unwrap_or_default(),
        }),
        None => warn!("{material}: skipping component with unreadable ZAID {zaid}"),
    }
}

/// The whole-material fraction is preferred unless missing or zero
fn atom_fraction(whole: Option<f64>, partial: Option<f64>) -> f64 {
    match whole {
        Some(value) if value != 0.0 => value,
        _ => partial.unwrap_or(0.0),
    }
}

/// Read a ZAID from either an integer or the leading digits of a string
fn parse_zaid(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim();
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            s[..end].parse().ok()
        }
        _ => None,
    }
}

/// Flatten a string, number, or list of either into owned strings
fn strings(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => vec![s.trim().to_string()],
        Value::Array(values) => values.iter().flat_map(strings).collect(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zaid_from_string_or_number() {
        assert_eq!(parse_zaid(&json!(1001)), Some(1001));
        assert_eq!(parse_zaid(&json!("6000")), Some(6000));
        assert_eq!(parse_zaid(&json!(" 8016.80c")), Some(8016));
        assert_eq!(parse_zaid(&json!("abc")), None);
        assert_eq!(parse_zaid(&json!(-1)), None);
        assert_eq!(parse_zaid(&Value::Null), None);
    }

    #[test]
    fn whole_fraction_preferred() {
        assert_eq!(atom_fraction(Some(0.25), Some(0.5)), 0.25);
        assert_eq!(atom_fraction(Some(0.0), Some(0.5)), 0.5);
        assert_eq!(atom_fraction(None, Some(0.5)), 0.5);
        assert_eq!(atom_fraction(None, None), 0.0);
    }

    #[test]
    fn flatten_loose_strings() {
        assert!(strings(&Value::Null).is_empty());
        assert_eq!(strings(&json!("a")), vec!["a"]);
        assert_eq!(strings(&json!(["a", "b"])), vec!["a", "b"]);
        assert_eq!(strings(&json!(204)), vec!["204"]);
    }

    #[test]
    fn isotopes_replace_element() {
        let raw: RawMaterial = serde_json::from_value(json!({
            "Name": "Water, Liquid",
            "Density": 1.0,
            "Acronym": ["H2O"],
            "MatNum": 354,
            "Elements": [
                {
                    "Element": "H",
                    "ZAID": "1000",
                    "AtomFraction_whole": 0.666657,
                    "Isotopes": [
                        {"Isotope": "H1", "ZAID": "1001", "AtomFraction_whole": 0.666583},
                        {"Isotope": "H2", "ZAID": "1002", "AtomFraction_whole": 0.000074}
                    ]
                },
                {"Element": "O", "ZAID": 8000, "AtomFraction": 0.333343}
            ]
        }))
        .unwrap();

        let material = Material::from(raw);
        let zaids: Vec<u32> = material.composition.iter().map(|c| c.zaid).collect();

        assert_eq!(zaids, vec![1001, 1002, 8000]);
        assert_eq!(material.composition[0].label, "H1");
        assert_eq!(material.composition[2].fraction, 0.333343);
        assert_eq!(material.acronym.as_deref(), Some("H2O"));
        assert_eq!(material.mat_num.as_deref(), Some("354"));
        assert!(material.references.is_empty());
    }
}
