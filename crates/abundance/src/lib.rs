//! Natural isotopic abundances for MCNP material cards
//!
//! This crate is a compiled-in table of every element with naturally
//! occurring isotopes, keyed by atomic number.
//!
//! It exists to answer one question during the expansion of a material card:
//! given an elemental ZAID such as `26000`, which isotopes make up the natural
//! element and in what proportion?
//!
//! ```rust
//! # use matcard_abundance::{atomic_number_of, is_elemental, lookup_element};
//! let zaid = 26000;
//! assert!(is_elemental(zaid));
//!
//! let iron = lookup_element(atomic_number_of(zaid)).unwrap();
//! for isotope in iron.isotopes {
//!     println!("{} {:.6}", isotope.zaid, isotope.abundance);
//! }
//! ```
//!
//! Lookups never fail loudly. A missing element is simply `None`, since some
//! ZAIDs legitimately have no natural composition (e.g. technetium or the
//! transuranics).
//!
//! The table covers H through Bi, plus Th, Pa, and U.

// Modules
mod data;
mod element;
mod zaid;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use element::{Element, Isotope};

#[doc(inline)]
pub use zaid::{atomic_number_of, is_elemental, mass_number_of, zaid_of};

use data::ELEMENTS;

/// Find an element by atomic number
///
/// Returns `None` for anything not in the table, which includes elements with
/// no stable isotopes.
///
/// ```rust
/// # use matcard_abundance::lookup_element;
/// assert_eq!(lookup_element(1).unwrap().name, "Hydrogen");
/// assert!(lookup_element(43).is_none()); // technetium
/// assert!(lookup_element(94).is_none()); // plutonium
/// ```
pub fn lookup_element(z: u32) -> Option<&'static Element> {
    ELEMENTS
        .binary_search_by_key(&z, |element| element.z)
        .ok()
        .map(|idx| &ELEMENTS[idx])
}

/// Find an element by symbol, ignoring case
///
/// ```rust
/// # use matcard_abundance::element_by_symbol;
/// assert_eq!(element_by_symbol("fe").unwrap().z, 26);
/// assert_eq!(element_by_symbol("FE").unwrap().z, 26);
/// assert!(element_by_symbol("Xx").is_none());
/// ```
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS
        .iter()
        .find(|element| element.symbol.eq_ignore_ascii_case(symbol.trim()))
}

/// Iterate over every element in order of atomic number
pub fn elements() -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter()
}

/// Filter the table by name, symbol, or atomic number
///
/// Names and symbols are matched case-insensitively as substrings, and the
/// atomic number as a substring of its decimal form. An empty filter returns
/// everything.
///
/// ```rust
/// # use matcard_abundance::search_elements;
/// let found = search_elements("iron");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].symbol, "Fe");
///
/// // "92" only matches uranium
/// assert_eq!(search_elements("92")[0].symbol, "U");
/// ```
pub fn search_elements(filter: &str) -> Vec<&'static Element> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return ELEMENTS.iter().collect();
    }

    ELEMENTS
        .iter()
        .filter(|element| {
            element.name.to_lowercase().contains(&filter)
                || element.symbol.to_lowercase().contains(&filter)
                || element.z.to_string().contains(&filter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_z() {
        assert!(ELEMENTS.windows(2).all(|w| w[0].z < w[1].z));
    }

    #[test]
    fn zaids_are_consistent() {
        for element in elements() {
            for isotope in element.isotopes {
                assert_eq!(isotope.zaid, zaid_of(element.z, isotope.mass_number as u32));
                assert_eq!(atomic_number_of(isotope.zaid), element.z);
                assert!(!is_elemental(isotope.zaid));
            }
        }
    }

    #[test]
    fn isotopes_ascend_in_mass() {
        for element in elements() {
            assert!(
                element
                    .isotopes
                    .windows(2)
                    .all(|w| w[0].mass_number < w[1].mass_number),
                "{} isotopes out of order",
                element.symbol
            );
        }
    }

    #[test]
    fn abundances_sum_to_one() {
        for element in elements() {
            let total = element.total_abundance();
            assert!(
                (total - 1.0).abs() < 1e-3,
                "{} abundances sum to {total}",
                element.symbol
            );
        }
    }

    #[test]
    fn table_coverage() {
        assert_eq!(ELEMENTS.len(), 84);
        assert_eq!(ELEMENTS.first().unwrap().symbol, "H");
        assert_eq!(ELEMENTS.last().unwrap().symbol, "U");
        assert_eq!(lookup_element(83).unwrap().symbol, "Bi");
        assert_eq!(lookup_element(90).unwrap().symbol, "Th");
        assert_eq!(lookup_element(91).unwrap().symbol, "Pa");
    }

    #[test]
    fn missing_elements() {
        for z in [0, 43, 61, 84, 89, 93, 118] {
            assert!(lookup_element(z).is_none(), "Z={z} should not exist");
        }
    }

    #[test]
    fn empty_search_returns_all() {
        assert_eq!(search_elements("").len(), ELEMENTS.len());
        assert_eq!(search_elements("   ").len(), ELEMENTS.len());
    }
}
