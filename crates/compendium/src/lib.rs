//! Material compendium lookup and card generation
//!
//! Reads the PNNL-15870 Rev.2 compendium of materials for radiation transport
//! modelling, as exported to JSON by PyNE, and writes MCNP material cards
//! for any entry.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use matcard_compendium::{CardOptions, Category, Compendium};
//! // Load the full compendium
//! let compendium = Compendium::read_json("path/to/compendium.json").unwrap();
//!
//! // Find stainless steels
//! for material in compendium.search("stainless", Some(Category::Steel)) {
//!     println!("{} : {material}", material.id);
//! }
//!
//! // Write one out as M10 with a library suffix
//! let steel = compendium.material("steel-stainless-304").unwrap();
//! println!("{}", steel.material_card(10, &CardOptions::with_library("80c")).unwrap());
//! ```
//!
//! Materials may list elemental ZAIDs. Use [Material::isotopic_card()] to
//! expand these to natural isotopes in the same step.

mod category;
mod compendium;
mod error;
mod material;
mod source;

#[doc(inline)]
pub use category::Category;

#[doc(inline)]
pub use compendium::Compendium;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use material::{material_id, CardOptions, Component, Material};
