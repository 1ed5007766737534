// standard library
use std::path::Path;

// crate modules
use crate::diagnostic::Diagnostic;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::expand::{expand, ConversionStats};
use crate::options::ConversionOptions;
use crate::reader::{parse_cards, Parsed};
use crate::writer::format_document;

// external crates
use log::info;

/// Everything produced by a single conversion
#[derive(Debug)]
pub struct Conversion {
    /// Isotopic material card text
    pub output: String,
    /// Counts of elements converted and isotopes generated
    pub stats: ConversionStats,
    /// Non-fatal problems from reading and expansion
    pub diagnostics: Vec<Diagnostic>,
    /// Expanded document the output was written from
    pub document: Document,
}

impl Conversion {
    /// Number of lines in the output text
    pub fn line_count(&self) -> usize {
        self.output.lines().count()
    }
}

/// Convert elemental entries in material cards to isotopic entries
///
/// Runs the full read, expand, and write pipeline. Only an empty input or an
/// input with no `M<n>` cards is an error. Everything else is converted as far
/// as possible with problems listed in [Conversion::diagnostics].
///
/// ```rust
/// # use matcard_card::{convert, ConversionOptions};
/// let options = ConversionOptions {
///     round_fractions: true,
///     add_isotope_comments: true,
///     ..Default::default()
/// };
///
/// let conversion = convert("M1  5000.70c  1.0", &options).unwrap();
///
/// assert_eq!(
///     conversion.output,
///     "M1    5010             0.199000    $ B-10\n      5011             0.801000    $ B-11"
/// );
/// assert_eq!(conversion.stats.isotopes_generated, 2);
/// ```
pub fn convert(input: &str, options: &ConversionOptions) -> Result<Conversion> {
    if input.trim().is_empty() {
        return Err(Error::NoInput);
    }

    let Parsed {
        document,
        mut diagnostics,
    } = parse_cards(input);

    if document.materials().next().is_none() {
        return Err(Error::NoMaterialCards);
    }

    let (document, stats) = expand(&document, options);
    diagnostics.extend(document.warnings());

    let output = format_document(&document);
    info!("Conversion successful, {stats}");

    Ok(Conversion {
        output,
        stats,
        diagnostics,
        document,
    })
}

/// Convert the material cards in a text file
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConversionOptions) -> Result<Conversion> {
    info!("Reading {}", path.as_ref().display());
    let input = std::fs::read_to_string(path.as_ref())?;
    convert(&input, options)
}
