//! `matcard` converts elemental MCNP material cards to natural isotopes and
//! writes cards for standard reference materials
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of matcard crates.
#[doc(inline)]
pub use matcard_format as format;

#[cfg(feature = "abundance")]
#[cfg_attr(docsrs, doc(cfg(feature = "abundance")))]
#[doc(inline)]
pub use matcard_abundance as abundance;

#[cfg(feature = "card")]
#[cfg_attr(docsrs, doc(cfg(feature = "card")))]
#[doc(inline)]
pub use matcard_card as card;

#[cfg(feature = "compendium")]
#[cfg_attr(docsrs, doc(cfg(feature = "compendium")))]
#[doc(inline)]
pub use matcard_compendium as compendium;
