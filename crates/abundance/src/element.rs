// matcard modules
use matcard_format::f;

/// Naturally occurring isotope of an [Element]
///
/// The `zaid` is always `Z*1000 + mass_number`, kept alongside the mass number
/// because that is what gets written to the material card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isotope {
    /// Atomic mass number (Z+N, total nucleons)
    pub mass_number: u16,
    /// Natural abundance as an atom fraction in `[0, 1]`
    pub abundance: f64,
    /// ZZZAAA identifier
    pub zaid: u32,
}

impl Isotope {
    /// Abundance as a percentage
    pub fn percent(&self) -> f64 {
        self.abundance * 100.0
    }
}

/// Element data and its natural isotopic composition
///
/// Isotopes are ordered by ascending mass number, and the abundances of an
/// element sum to 1.0 to within the precision of the reference data.
///
/// ```rust
/// # use matcard_abundance::lookup_element;
/// let oxygen = lookup_element(8).unwrap();
///
/// assert_eq!(oxygen.symbol, "O");
/// assert_eq!(oxygen.isotopes.len(), 3);
/// assert_eq!(oxygen.isotopes[0].zaid, 8016);
/// ```
#[derive(Debug, PartialEq)]
pub struct Element {
    /// Atomic number
    pub z: u32,
    /// Element symbol e.g. 'He', 'Co'
    pub symbol: &'static str,
    /// Full element name
    pub name: &'static str,
    /// Natural isotopes in ascending mass order
    pub isotopes: &'static [Isotope],
}

impl Element {
    /// Elemental ZAID, i.e. `Z*1000`
    pub fn zaid(&self) -> u32 {
        self.z * 1000
    }

    /// Find a natural isotope by mass number
    ///
    /// ```rust
    /// # use matcard_abundance::lookup_element;
    /// let lithium = lookup_element(3).unwrap();
    /// assert_eq!(lithium.isotope(6).unwrap().zaid, 3006);
    /// assert!(lithium.isotope(8).is_none());
    /// ```
    pub fn isotope(&self, mass_number: u16) -> Option<&'static Isotope> {
        self.isotopes
            .iter()
            .find(|isotope| isotope.mass_number == mass_number)
    }

    /// Sum of all isotope abundances, should be ~1.0
    pub fn total_abundance(&self) -> f64 {
        self.isotopes.iter().map(|isotope| isotope.abundance).sum()
    }

    /// Single line summary of the element
    pub fn summary(&self) -> String {
        let n = self.isotopes.len();
        f!(
            "{} {} (Z = {}, {} isotope{})",
            self.symbol,
            self.name,
            self.z,
            n,
            if n == 1 { "" } else { "s" }
        )
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{}\n", self.summary());
        s += &f!("  {:>5} {:>8} {:>10}\n", "Mass", "ZAID", "Abundance");
        for isotope in self.isotopes {
            s += &f!(
                "  {:>5} {:>8} {:>9.4}%\n",
                isotope.mass_number,
                isotope.zaid,
                isotope.percent()
            );
        }
        write!(f, "{}", s.trim_end())
    }
}
