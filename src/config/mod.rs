use crate::core::ConfigProvider;
use crate::domain::model::Separator;
use crate::utils::validation::{
    validate_file_exists, validate_file_extension, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert a CSV file into a JSON array of records")]
pub struct CliConfig {
    /// Path to the CSV file to convert
    pub input: PathBuf,

    /// Column separator used by the input file
    #[arg(long, value_enum, default_value_t = Separator::Comma)]
    pub separator: Separator,

    #[arg(long, help = "Generate pretty JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    // The output file is a sibling of the input with the extension swapped.
    fn output_path(&self) -> PathBuf {
        self.input.with_extension("json")
    }

    fn separator(&self) -> Separator {
        self.separator
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input.to_string_lossy())?;
        validate_file_exists("input", &self.input)?;
        validate_file_extension("input", &self.input, &["csv"])?;
        Ok(())
    }
}
