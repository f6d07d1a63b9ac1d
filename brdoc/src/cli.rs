use clap::{Parser, Subcommand};
use shared::models::IdentifierKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about = "Validate and format Brazilian documents (CPF, CNPJ, PIS/PASEP)")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Settings file (JSON)")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one or more identifiers; exits with 1 unless all of them are valid
    Validate {
        #[arg(value_parser = parse_kind)]
        kind: IdentifierKind,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Apply the display mask of the identifier kind
    Format {
        #[arg(value_parser = parse_kind)]
        kind: IdentifierKind,
        value: String,
    },
    /// Normalize a phone number to DDD + number and mask it
    Phone {
        value: String,
        #[arg(long, default_value_t = false)]
        no_area_code: bool,
    },
    /// Mask a CEP postal code
    Cep { value: String },
    /// Check every identifier listed in a delimited file
    Check { file: PathBuf },
}

fn parse_kind(raw: &str) -> Result<IdentifierKind, String> {
    raw.parse()
}
