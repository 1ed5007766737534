//! Helpers for ZZZAAA identifiers
//!
//! A ZAID is `Z*1000 + A`. Natural elements are written with `A = 0`, so any
//! ZAID that is an exact multiple of 1000 refers to the whole element.

/// Check for an elemental ZAID, i.e. one ending in `000`
///
/// ```rust
/// # use matcard_abundance::is_elemental;
/// assert!(is_elemental(26000));
/// assert!(!is_elemental(26056));
/// ```
pub fn is_elemental(zaid: u32) -> bool {
    zaid % 1000 == 0
}

/// Atomic number from the leading digits of a ZAID
///
/// ```rust
/// # use matcard_abundance::atomic_number_of;
/// assert_eq!(atomic_number_of(92235), 92);
/// assert_eq!(atomic_number_of(1001), 1);
/// ```
pub fn atomic_number_of(zaid: u32) -> u32 {
    zaid / 1000
}

/// Mass number from the last three digits of a ZAID
///
/// ```rust
/// # use matcard_abundance::mass_number_of;
/// assert_eq!(mass_number_of(92235), 235);
/// assert_eq!(mass_number_of(6000), 0);
/// ```
pub fn mass_number_of(zaid: u32) -> u32 {
    zaid % 1000
}

/// Build a ZAID from the atomic and mass numbers
pub fn zaid_of(z: u32, mass_number: u32) -> u32 {
    z * 1000 + mass_number
}
