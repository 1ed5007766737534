//! Integration tests against a small extract of the compendium export

use matcard_card::ConversionOptions;
use matcard_compendium::{CardOptions, Category, Compendium, Error};
use rstest::{fixture, rstest};

#[fixture]
fn sample() -> Compendium {
    Compendium::read_json("./data/sample.json").unwrap()
}

#[rstest]
fn load_sample(sample: Compendium) {
    assert_eq!(sample.len(), 6);
    assert!(!sample.is_empty());

    // iteration is in id order
    let ids: Vec<&str> = sample.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "air-dry-near-sea-level",
            "concrete-ordinary-nbs-03",
            "polyethylene-non-borated",
            "steel-stainless-304",
            "unobtainium-test-sample",
            "water-liquid",
        ]
    );
}

#[rstest]
fn metadata_is_kept(sample: Compendium) {
    let air = sample.get("air-dry-near-sea-level").unwrap();
    assert_eq!(air.density, Some(0.001205));
    assert_eq!(air.mat_num.as_deref(), Some("4"));
    assert_eq!(air.source.as_deref(), Some("NIST"));
    assert_eq!(air.references, vec!["PNNL-15870 Rev.2"]);
    assert_eq!(air.comments, vec!["Density from CRC Handbook"]);

    let steel = sample.get("steel-stainless-304").unwrap();
    assert_eq!(steel.references, vec!["ASM Handbook"]);
    assert!(steel.acronym.is_none());
}

#[rstest]
#[case("water", None, vec!["water-liquid"])]
#[case("PE", None, vec!["polyethylene-non-borated"])]
#[case("AIR", None, vec!["air-dry-near-sea-level"])]
#[case("", Some(Category::Steel), vec!["steel-stainless-304"])]
#[case("water", Some(Category::Gases), vec![])]
#[case("s", None, vec![
    "air-dry-near-sea-level",
    "concrete-ordinary-nbs-03",
    "steel-stainless-304",
    "unobtainium-test-sample",
])]
fn search(
    sample: Compendium,
    #[case] query: &str,
    #[case] category: Option<Category>,
    #[case] expected: Vec<&str>,
) {
    let found: Vec<&str> = sample
        .search(query, category)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(found, expected);
}

#[rstest]
fn categories(sample: Compendium) {
    assert_eq!(
        sample.categories(),
        vec![
            Category::Concrete,
            Category::Gases,
            Category::Other,
            Category::Shielding,
            Category::Steel,
            Category::Water,
        ]
    );
}

#[rstest]
fn isotopic_breakdown_used(sample: Compendium) {
    let water = sample.material("water-liquid").unwrap();
    let zaids: Vec<u32> = water.composition.iter().map(|c| c.zaid).collect();
    assert_eq!(zaids, vec![1001, 1002, 8000]);
}

#[rstest]
fn unreadable_components_are_skipped(sample: Compendium) {
    let sample = sample.material("unobtainium-test-sample").unwrap();
    assert_eq!(sample.composition.len(), 1);
    assert_eq!(sample.composition[0].zaid, 94000);
}

#[rstest]
fn air_card(sample: Compendium) {
    let air = sample.material("air-dry-near-sea-level").unwrap();
    let card = air.material_card(1, &CardOptions::default()).unwrap();
    let lines: Vec<&str> = card.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "c Air (Dry, Near Sea Level) (density: 0.001205 g/cm3)");
    assert_eq!(lines[1], "M1    6000             0.000150    $ C");
    assert!(lines[4].starts_with("      18000"));
    assert!(lines[4].ends_with("$ Ar"));
}

#[rstest]
fn steel_isotopic_card(sample: Compendium) {
    let steel = sample.material("steel-stainless-304").unwrap();
    let options = ConversionOptions {
        round_fractions: true,
        add_isotope_comments: true,
        ..Default::default()
    };

    let (card, stats) = steel.isotopic_card(2, &options).unwrap();

    assert_eq!(stats.elements_converted, 6);
    assert_eq!(stats.isotopes_generated, 19);
    assert_eq!(card.lines().count(), 20);
    assert!(card.lines().nth(1).unwrap().starts_with("M2    6012"));
    assert!(card.lines().last().unwrap().ends_with("$ Ni-64"));
}

#[rstest]
fn unknown_element_passes_through(sample: Compendium) {
    let sample = sample.material("unobtainium-test-sample").unwrap();

    let (card, stats) = sample
        .isotopic_card(3, &ConversionOptions::default())
        .unwrap();

    assert_eq!(stats.elements_converted, 1);
    assert_eq!(stats.isotopes_generated, 0);
    assert_eq!(card.lines().nth(1), Some("M3    94000            1.000000"));
}

#[rstest]
fn missing_file_is_io_error() {
    assert!(matches!(
        Compendium::read_json("./data/missing.json"),
        Err(Error::Io(_))
    ));
}

#[rstest]
fn malformed_json_is_json_error() {
    assert!(matches!(
        Compendium::from_json_str(r#"{"data": [{"Density": 1.0}]}"#),
        Err(Error::Json(_))
    ));
}
