mod abundance;
mod convert;
mod material;

use abundance::run_abundance;
use convert::run_convert;
use material::run_material;

use crate::cli::Command;
use crate::error::Result;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => run_convert(args),
        Command::Abundance(args) => run_abundance(args),
        Command::Material(args) => run_material(args),
    }
}
