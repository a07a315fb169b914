use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message key written when the message was hidden
    #[arg(short = 'k', long = "key", value_name = "key file", required = true)]
    pub key_file: PathBuf,

    /// The message is stored in this file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let print = self.output_file.is_none();
        let text = huffstego_core::commands::unveil(&self.media, &self.key_file, self.output_file)?;
        if print {
            println!("{text}");
        }

        Ok(())
    }
}
