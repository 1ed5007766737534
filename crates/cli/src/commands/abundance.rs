// crate modules
use crate::cli::AbundanceArgs;
use crate::error::Result;

// matcard modules
use matcard_abundance::search_elements;

// external crates
use log::warn;

pub fn run_abundance(args: AbundanceArgs) -> Result<()> {
    let filter = args.filter.as_deref().unwrap_or_default();
    let elements = search_elements(filter);

    if elements.is_empty() {
        warn!("No elements match \"{filter}\"");
        return Ok(());
    }

    let listing: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
    println!("{}", listing.join("\n\n"));
    Ok(())
}
