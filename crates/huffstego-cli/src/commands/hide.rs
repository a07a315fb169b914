use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a Huffman compressed text message in an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The message key will be stored in this file, it is needed for unveiling
    #[arg(short = 'k', long = "key", value_name = "key file", required = true)]
    pub key_file: PathBuf,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file",
        conflicts_with = "data_file"
    )]
    pub message: Option<String>,

    /// A text file whose content will be hidden
    #[arg(short = 'd', long = "data", value_name = "text file")]
    pub data_file: Option<PathBuf>,

    /// Refuse to write the image if it differs more than this percentage from the carrier
    #[arg(long = "max-difference", value_name = "percent")]
    pub max_difference: Option<f64>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let report = huffstego_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.key_file,
            self.message,
            self.data_file,
            self.max_difference,
        )?;
        println!("{report}");

        Ok(())
    }
}
