use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbImage;
use log::{error, info};

use super::image::LsbCodec;
use super::Persist;
use crate::error::HuffstegoError;
use crate::result::Result;
use crate::Bitstream;

/// a carrier image, decoded into 3 channels with one byte each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// loads a `png` or `jpeg` image, any alpha channel is dropped
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(HuffstegoError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => {
                let image = image::open(f)
                    .map_err(|e| {
                        error!("Error opening image {f:?}: {e}");
                        HuffstegoError::InvalidImageMedia
                    })?
                    .to_rgb8();
                info!(
                    "loaded carrier {f:?} with {}x{} pixel",
                    image.width(),
                    image.height()
                );

                Ok(Self { image })
            }
            _ => Err(HuffstegoError::UnsupportedMedia),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn capacity(&self) -> usize {
        LsbCodec::capacity(&self.image)
    }

    pub fn hide_bits(&mut self, bits: &Bitstream) -> Result<&mut Self> {
        LsbCodec::embed(&mut self.image, bits)?;

        Ok(self)
    }

    pub fn unveil_bits(&self, bit_count: usize) -> Bitstream {
        LsbCodec::extract(&self.image, bit_count)
    }

    /// always writes PNG, a lossy format would destroy the hidden bits
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                HuffstegoError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            HuffstegoError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}
