use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::Media;
use crate::{HuffstegoError, MessageKey, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    key: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the key that was written when the message was hidden
    pub fn with_key(mut self, key: impl AsRef<Path>) -> Self {
        self.key = Some(key.as_ref().to_path_buf());
        self
    }

    /// Optional, the unveiled text is written to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Execute the unveil process, returns the unveiled text
    pub fn execute(self) -> Result<String> {
        let Some(secret_media) = self.secret_media else {
            return Err(HuffstegoError::CarrierNotSet);
        };
        let Some(key) = self.key else {
            return Err(HuffstegoError::KeyNotSet);
        };

        let key = MessageKey::from_file(&key)?;
        let media = Media::from_file(&secret_media)?;
        let bits = media.unveil_bits(key.bit_count());
        let text = key.decode(&bits)?;
        info!(
            "unveiled {} symbols from {secret_media:?}",
            key.symbol_count()
        );

        if let Some(output_file) = self.output_file {
            fs::write(&output_file, text.as_bytes())
                .map_err(|source| HuffstegoError::WriteError { source })?;
        }

        Ok(text)
    }
}
