// standard library
use std::path::PathBuf;

// crate modules
use crate::error::Result;

// matcard modules
use matcard_card::ConversionOptions;
use matcard_compendium::Category;

// external crates
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "matcard",
    about = "Convert elemental MCNP material cards to natural isotopes",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Expand elemental ZAIDs in material cards to natural isotopes
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List natural isotopic abundances
    #[command(visible_alias = "a")]
    Abundance(AbundanceArgs),

    /// Search the material compendium or write a card for a material
    #[command(visible_alias = "m")]
    Material(MaterialArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// File of material cards (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Preserve the library suffix of each elemental entry
    #[arg(long, conflicts_with = "library", help_heading = "Conversion Options")]
    pub preserve_library: bool,
}

/// Conversion options shared by every command that writes cards
#[derive(Args)]
#[command(next_help_heading = "Conversion Options")]
pub struct OptionArgs {
    /// Write fixed notation for fractions of a reasonable magnitude
    #[arg(long)]
    pub round: bool,

    /// Add `$ <Symbol>-<A>` comments to expanded isotopes
    #[arg(long)]
    pub comments: bool,

    /// Replace every library suffix, e.g. 80c
    #[arg(long, value_name = "SUFFIX")]
    pub library: Option<String>,

    /// Load base options from a JSON file
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,
}

impl OptionArgs {
    /// Options from the JSON file, if any, with flags applied on top
    pub fn conversion_options(&self, preserve_library: bool) -> Result<ConversionOptions> {
        let mut options = match &self.options_file {
            Some(path) => ConversionOptions::read_json(path)?,
            None => ConversionOptions::default(),
        };

        options.round_fractions |= self.round;
        options.add_isotope_comments |= self.comments;

        if let Some(suffix) = &self.library {
            options.override_library_suffix = true;
            options.preserve_library_suffix = false;
            options.new_library_suffix = suffix.clone();
        } else if preserve_library {
            options.preserve_library_suffix = true;
            options.override_library_suffix = false;
        }

        Ok(options)
    }
}

#[derive(Args)]
pub struct AbundanceArgs {
    /// Filter by name, symbol, or atomic number
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct MaterialArgs {
    /// Compendium JSON export
    #[arg(short, long, value_name = "FILE")]
    pub compendium: PathBuf,

    /// Search names and acronyms
    #[arg(
        short,
        long,
        value_name = "QUERY",
        required_unless_present = "id",
        conflicts_with = "id"
    )]
    pub search: Option<String>,

    /// Restrict search results to a category
    #[arg(long, value_name = "CATEGORY", requires = "search")]
    pub category: Option<Category>,

    /// Write the card for a material id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Material number for the card
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub number: u32,

    /// Expand elemental entries to natural isotopes
    #[arg(long, requires = "id")]
    pub isotopic: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

pub fn parse() -> Cli {
    Cli::parse()
}
