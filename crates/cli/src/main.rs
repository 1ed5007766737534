//! Command line interface to the matcard crates
//!
//! ```text
//! matcard convert cards.txt --round --comments -o isotopic.txt
//! matcard abundance Fe
//! matcard material -c compendium.json --search steel
//! matcard material -c compendium.json --id steel-stainless-304 -n 10 --isotopic
//! ```

use std::error::Error as _;
use std::process::ExitCode;

mod cli;
mod commands;
mod error;

use log::error;

fn main() -> ExitCode {
    let cli = cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Warnings and above by default, more with each `-v`
fn init_logging(verbose: u8, quiet: bool) -> error::Result<()> {
    stderrlog::new()
        .modules([
            module_path!(),
            "matcard_abundance",
            "matcard_card",
            "matcard_compendium",
        ])
        .quiet(quiet)
        .verbosity(usize::from(verbose) + 1)
        .show_module_names(false)
        .init()?;
    Ok(())
}
