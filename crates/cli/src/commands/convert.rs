// standard library
use std::io::{self, Read};

// crate modules
use crate::cli::ConvertArgs;
use crate::error::Result;

// matcard modules
use matcard_card::{convert, convert_file};

// external crates
use log::{debug, info};

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let options = args.options.conversion_options(args.preserve_library)?;
    debug!("{options:?}");

    let conversion = match &args.input {
        Some(path) => convert_file(path, &options)?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            convert(&input, &options)?
        }
    };

    info!(
        "Writing {} lines, {} diagnostics",
        conversion.line_count(),
        conversion.diagnostics.len()
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, conversion.output + "\n")?;
            info!("Written to {}", path.display());
        }
        None => println!("{}", conversion.output),
    }

    Ok(())
}
