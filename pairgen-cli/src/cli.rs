//! CLI definition for the pairgen command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pairgen - render label/value field pairs for a record.
///
/// Reads a record and a list of field specs (JSON or YAML, chosen by file
/// extension) and prints one `<dt>`/`<dd>` pair per field.
#[derive(Parser, Debug)]
#[command(name = "pairgen")]
#[command(version)]
#[command(about = "Render label/value field pairs from object and field spec files")]
#[command(long_about = "Renders one <dt>/<dd> pair per field spec.\n\n\
    Environment variables:\n  \
    PAIRGEN_HELP_CLASS         Class of the inline help span\n  \
    PAIRGEN_DATEPICKER_CLASS   Class added to date inputs\n  \
    PAIRGEN_RADIO_LIST_CLASS   Class of the radio <ol>\n  \
    PAIRGEN_RADIO_LABEL_CLASS  Class of each radio <label>")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every field spec against a record
    Render {
        /// Record file (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        object: PathBuf,
        /// Field spec list (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        fields: PathBuf,
        /// Generator configuration (.toml, .yaml, .yml or .json)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Prefix applied to input fields that do not set one
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Parse a field spec list and report how many specs it holds
    Check {
        /// Field spec list (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        fields: PathBuf,
    },
}
