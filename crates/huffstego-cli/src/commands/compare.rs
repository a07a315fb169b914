use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Measures how much an image differs from its original
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// The original carrier image
    #[arg(value_name = "original image")]
    pub original: PathBuf,

    /// The image that contains a secret
    #[arg(value_name = "modified image")]
    pub modified: PathBuf,
}

impl CompareArgs {
    pub fn run(self) -> CliResult<()> {
        let metrics = huffstego_core::commands::compare(&self.original, &self.modified)?;
        println!("{metrics}");

        Ok(())
    }
}
