//! Elemental to isotopic conversion of MCNP material cards
//!
//! Many cross section libraries no longer provide natural element data, so
//! an entry such as `26000.80c` has to be written out as its natural
//! isotopes before a material card is usable.
//!
//! This crate does that in three steps:
//!
//! | Step      | Function             | Description                                   |
//! | --------- | -------------------- | --------------------------------------------- |
//! | Read      | [parse_cards()]      | text to a structured [Document]               |
//! | Expand    | [expand()]           | elemental entries to natural isotopes         |
//! | Write     | [format_document()]  | [Document] back to fixed width card text      |
//!
//! The [convert()] function runs the whole pipeline.
//!
//! # Quickstart example
//!
//! Suppose there is a material for dry air:
//!
//! ```text
//! c Air at sea level (dry)
//! M1    6000.70c  -0.000124    $ Carbon
//!       7000.70c  -0.755268    $ Nitrogen
//!       8000.70c  -0.231781    $ Oxygen
//!       18000.70c -0.012827    $ Argon
//! ```
//!
//! ```rust
//! # use matcard_card::{convert, ConversionOptions};
//! # let text = "c Air\nM1 6000.70c -0.000124 $ Carbon\n  7000.70c -0.755268\n  8000.70c -0.231781\n  18000.70c -0.012827";
//! let options = ConversionOptions {
//!     preserve_library_suffix: true,
//!     ..Default::default()
//! };
//!
//! let conversion = convert(text, &options).unwrap();
//!
//! assert_eq!(conversion.stats.elements_converted, 4);
//! assert_eq!(conversion.stats.isotopes_generated, 10);
//! println!("{}", conversion.output);
//! ```
//!
//! # Permissive reading
//!
//! Reading never fails on bad tokens. Unreadable pairs are skipped, stray
//! lines are ignored, and unknown elements are passed through unchanged.
//! Each of these is recorded as a [Diagnostic] and logged with the `log`
//! crate at `warn` level.

// Split into subfiles for development, but anything important is re-exported
mod convert;
mod diagnostic;
mod document;
mod entry;
mod error;
mod expand;
mod options;
mod parsers;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use convert::{convert, convert_file, Conversion};

#[doc(inline)]
pub use diagnostic::Diagnostic;

#[doc(inline)]
pub use document::{Document, Item, MaterialBlock};

#[doc(inline)]
pub use entry::{IsotopeOrigin, MaterialEntry};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use expand::{expand, expand_block, ConversionStats, NEGLIGIBLE_FRACTION};

#[doc(inline)]
pub use options::ConversionOptions;

#[doc(inline)]
pub use reader::{parse_cards, Parsed};

#[doc(inline)]
pub use writer::{format_document, FIELD_WIDTH};
