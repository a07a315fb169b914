use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::media::{Media, Persist};
use crate::{DistortionMetrics, EncodedMessage, HuffstegoError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum MessageSource {
    Text(String),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<MessageSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    key_output: Option<PathBuf>,
    max_percent_difference: Option<f64>,
}

/// Outcome of a successful hide
#[derive(Debug, Clone, PartialEq)]
pub struct HideReport {
    pub bit_count: usize,
    pub symbol_count: u64,
    pub capacity: usize,
    pub metrics: DistortionMetrics,
}

impl fmt::Display for HideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hidden {} symbols as {} bits, capacity of the carrier is {} bits",
            self.symbol_count, self.bit_count, self.capacity
        )?;
        write!(f, "{}", self.metrics)
    }
}

impl HideApi {
    /// The text to hide, replaces a previously set message file
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(MessageSource::Text(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        if let Some(message) = message {
            self.message = Some(MessageSource::Text(message.as_ref().to_string()));
        }
        self
    }

    /// A file whose content is hidden as text, replaces a previously set message
    pub fn with_message_file<A: AsRef<Path>>(mut self, message_file: A) -> Self {
        self.message = Some(MessageSource::File(message_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_message_file(mut self, message_file: Option<PathBuf>) -> Self {
        if let Some(message_file) = message_file {
            self.message = Some(MessageSource::File(message_file));
        }
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image with the hidden message, always written as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Where the message key is written to, it is needed to unveil the message
    pub fn with_key_output<A: AsRef<Path>>(mut self, key_output: A) -> Self {
        self.key_output = Some(key_output.as_ref().to_path_buf());
        self
    }

    /// Rejects the result if the percent difference between carrier and
    /// output is above `max`
    pub fn with_max_percent_difference(mut self, max: f64) -> Self {
        self.max_percent_difference = Some(max);
        self
    }

    pub fn use_max_percent_difference(mut self, max: Option<f64>) -> Self {
        self.max_percent_difference = max;
        self
    }

    pub fn execute(self) -> Result<HideReport> {
        let text = match self.message {
            Some(MessageSource::Text(text)) => text,
            Some(MessageSource::File(file)) => fs::read_to_string(&file)
                .map_err(|source| HuffstegoError::ReadError { source })?,
            None => return Err(HuffstegoError::MissingMessage),
        };
        let Some(image) = self.image else {
            return Err(HuffstegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(HuffstegoError::TargetNotSet);
        };
        let Some(key_output) = self.key_output else {
            return Err(HuffstegoError::KeyNotSet);
        };

        let mut media = Media::from_file(&image)?;
        let carrier = media.image().clone();
        let message = EncodedMessage::from_text(&text)?;
        media.hide_bits(message.bits())?;

        let metrics = DistortionMetrics::measure(&carrier, media.image())?;
        if let Some(allowed) = self.max_percent_difference {
            if metrics.percent_difference > allowed {
                warn!("not saving {output:?}, the carrier changed too much");
                return Err(HuffstegoError::DistortionExceeded {
                    actual: metrics.percent_difference,
                    allowed,
                });
            }
        }

        media.save_as(&output)?;
        message.key().save_as(&key_output)?;
        info!(
            "hid {} bits in {output:?}, key written to {key_output:?}",
            message.bits().len()
        );

        Ok(HideReport {
            bit_count: message.bits().len(),
            symbol_count: message.symbol_count(),
            capacity: media.capacity(),
            metrics,
        })
    }
}
