use std::path::{Path, PathBuf};

use log::info;

use crate::media::Media;
use crate::{DistortionMetrics, HuffstegoError, Result};

pub fn prepare() -> CompareApi {
    CompareApi::default()
}

#[derive(Default, Debug)]
pub struct CompareApi {
    original: Option<PathBuf>,
    modified: Option<PathBuf>,
}

impl CompareApi {
    pub fn with_original(mut self, original: impl AsRef<Path>) -> Self {
        self.original = Some(original.as_ref().to_path_buf());
        self
    }

    pub fn with_modified(mut self, modified: impl AsRef<Path>) -> Self {
        self.modified = Some(modified.as_ref().to_path_buf());
        self
    }

    /// Loads both images and measures the distortion between them
    pub fn execute(self) -> Result<DistortionMetrics> {
        let Some(original) = self.original else {
            return Err(HuffstegoError::CarrierNotSet);
        };
        let Some(modified) = self.modified else {
            return Err(HuffstegoError::TargetNotSet);
        };

        let original = Media::from_file(&original)?;
        let modified = Media::from_file(&modified)?;
        let metrics = DistortionMetrics::measure(original.image(), modified.image())?;
        info!("{metrics}");

        Ok(metrics)
    }
}
