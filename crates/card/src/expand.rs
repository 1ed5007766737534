//! Expansion of natural elements into their isotopes

// crate modules
use crate::document::{Document, Item, MaterialBlock};
use crate::entry::{IsotopeOrigin, MaterialEntry};
use crate::options::ConversionOptions;

// matcard modules
use matcard_abundance::{atomic_number_of, lookup_element, Element};
use matcard_format::f;

// external crates
use log::{debug, warn};
use serde::Serialize;

/// Isotope fractions below this magnitude are not written
pub const NEGLIGIBLE_FRACTION: f64 = 1e-12;

/// Running totals for a conversion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Elemental entries found in the abundance table
    pub elements_converted: usize,
    /// Isotope entries written in their place
    pub isotopes_generated: usize,
}

impl std::ops::AddAssign for ConversionStats {
    fn add_assign(&mut self, other: Self) {
        self.elements_converted += other.elements_converted;
        self.isotopes_generated += other.isotopes_generated;
    }
}

impl std::fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} element{} converted into {} isotope{}",
            self.elements_converted,
            if self.elements_converted == 1 { "" } else { "s" },
            self.isotopes_generated,
            if self.isotopes_generated == 1 { "" } else { "s" },
        )
    }
}

/// Replace every elemental entry with its natural isotopes
///
/// A new [Document] is returned and the original is left untouched.
///
/// - Isotopic entries are passed through as they are
/// - Elements missing from the abundance table are passed through with a
///   warning attached
/// - Known elements become one entry per natural isotope, with the fraction
///   scaled by abundance, in ascending mass order
///
/// Isotopes with a scaled fraction smaller than [NEGLIGIBLE_FRACTION] in
/// magnitude are dropped, but the element still counts as converted.
///
/// ```rust
/// # use matcard_card::{expand, parse_cards, ConversionOptions};
/// let parsed = parse_cards("M1    8000.70c  -0.5");
/// let (document, stats) = expand(&parsed.document, &ConversionOptions::default());
///
/// let zaids: Vec<u32> = document.materials().next().unwrap()
///     .entries.iter().map(|e| e.zaid()).collect();
///
/// assert_eq!(zaids, vec![8016, 8017, 8018]);
/// assert_eq!(stats.elements_converted, 1);
/// assert_eq!(stats.isotopes_generated, 3);
/// ```
pub fn expand(document: &Document, options: &ConversionOptions) -> (Document, ConversionStats) {
    let mut stats = ConversionStats::default();

    let items = document
        .items
        .iter()
        .map(|item| match item {
            Item::Comment(comment) => Item::Comment(comment.clone()),
            Item::Material(block) => Item::Material(expand_block(block, options, &mut stats)),
        })
        .collect();

    debug!("Expansion complete: {stats}");
    (Document { items }, stats)
}

/// Expand every entry on a single card
pub fn expand_block(
    block: &MaterialBlock,
    options: &ConversionOptions,
    stats: &mut ConversionStats,
) -> MaterialBlock {
    let mut entries = Vec::with_capacity(block.entries.len());

    for entry in &block.entries {
        if !entry.is_elemental() {
            entries.push(entry.untagged());
            continue;
        }

        let z = atomic_number_of(entry.zaid());
        let Some(element) = lookup_element(z) else {
            warn!("M{}: Element Z={z} not found, keeping {}", block.number, entry.zaid());
            entries.push(entry.untagged().with_warning(f!("Element Z={z} not found")));
            continue;
        };

        stats.elements_converted += 1;
        let isotopes = isotopes_of(entry, element, options);
        stats.isotopes_generated += isotopes.len();
        entries.extend(isotopes);
    }

    block.with_entries(entries)
}

/// Natural isotope entries for a single elemental entry
fn isotopes_of(
    entry: &MaterialEntry,
    element: &'static Element,
    options: &ConversionOptions,
) -> Vec<MaterialEntry> {
    element
        .isotopes
        .iter()
        .filter_map(|isotope| {
            let fraction = entry.fraction() * isotope.abundance;
            if fraction.abs() < NEGLIGIBLE_FRACTION {
                return None;
            }

            Some(MaterialEntry::isotope(
                isotope,
                options.library_for(entry.library()),
                fraction,
                options.fraction_text(fraction),
                options.isotope_comment(element.symbol, isotope.mass_number),
                IsotopeOrigin {
                    element: element.symbol,
                    source_zaid: entry.zaid(),
                    original_fraction: entry.fraction(),
                    abundance: isotope.abundance,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_cards;

    fn first_block(document: &Document) -> &MaterialBlock {
        document.materials().next().unwrap()
    }

    #[test]
    fn isotopes_pass_through() {
        let parsed = parse_cards("M1 1001.70c 0.1 $ H-1");
        let (document, stats) = expand(&parsed.document, &ConversionOptions::default());

        assert_eq!(document, parsed.document);
        assert_eq!(stats, ConversionStats::default());
    }

    #[test]
    fn unknown_element_is_kept_with_warning() {
        let parsed = parse_cards("M1 43000.70c 0.1");
        let (document, stats) = expand(&parsed.document, &ConversionOptions::default());

        let entry = &first_block(&document).entries[0];
        assert_eq!(entry.zaid(), 43000);
        assert_eq!(entry.fraction_text(), "0.1");
        assert_eq!(entry.warning(), Some("Element Z=43 not found"));
        assert_eq!(stats, ConversionStats::default());
    }

    #[test]
    fn negligible_isotopes_are_dropped() {
        // He-3 is 1.34e-6 of natural helium, which is below the threshold
        let parsed = parse_cards("M1 2000 1e-7");
        let (document, stats) = expand(&parsed.document, &ConversionOptions::default());

        let entries = &first_block(&document).entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].zaid(), 2004);
        assert_eq!(stats.elements_converted, 1);
        assert_eq!(stats.isotopes_generated, 1);
    }

    #[test]
    fn zero_fraction_still_counts_as_converted() {
        let parsed = parse_cards("M1 8000 0.0");
        let (document, stats) = expand(&parsed.document, &ConversionOptions::default());

        assert!(first_block(&document).entries.is_empty());
        assert_eq!(stats.elements_converted, 1);
        assert_eq!(stats.isotopes_generated, 0);
    }

    #[test]
    fn origin_is_recorded() {
        let parsed = parse_cards("M1 3000.70c -0.25");
        let (document, _) = expand(&parsed.document, &ConversionOptions::default());

        let li6 = &first_block(&document).entries[0];
        let origin = li6.origin().unwrap();
        assert_eq!(origin.element, "Li");
        assert_eq!(origin.source_zaid, 3000);
        assert_eq!(origin.original_fraction, -0.25);
        assert_eq!(origin.abundance, 0.0759);
        assert_eq!(li6.fraction(), -0.25 * 0.0759);
    }

    #[test]
    fn source_document_is_unchanged() {
        let parsed = parse_cards("M1 6000 1");
        let before = parsed.document.clone();
        let _ = expand(&parsed.document, &ConversionOptions::default());
        assert_eq!(parsed.document, before);
    }

    #[test]
    fn stats_summary() {
        let mut stats = ConversionStats {
            elements_converted: 1,
            isotopes_generated: 1,
        };
        assert_eq!(stats.to_string(), "1 element converted into 1 isotope");

        stats += ConversionStats {
            elements_converted: 1,
            isotopes_generated: 2,
        };
        assert_eq!(stats.to_string(), "2 elements converted into 3 isotopes");
    }
}
