// crate modules
use crate::cli::MaterialArgs;
use crate::error::Result;

// matcard modules
use matcard_compendium::{CardOptions, Compendium};

// external crates
use log::{info, warn};

pub fn run_material(args: MaterialArgs) -> Result<()> {
    let compendium = Compendium::read_json(&args.compendium)?;

    if let Some(query) = &args.search {
        let results = compendium.search(query, args.category);
        if results.is_empty() {
            warn!("No materials match \"{query}\"");
        }
        for material in results {
            println!("{:<40} {material}", material.id);
        }
        return Ok(());
    }

    let Some(id) = &args.id else {
        return Ok(());
    };

    let material = compendium.material(id)?;
    let options = args.options.conversion_options(false)?;

    let card = if args.isotopic {
        let (card, stats) = material.isotopic_card(args.number, &options)?;
        info!("Expanded {}: {stats}", material.id);
        card
    } else {
        material.material_card(args.number, &CardOptions::from(&options))?
    };

    println!("{card}");
    Ok(())
}
