use std::path::{Path, PathBuf};

use crate::api::HideReport;
use crate::{DistortionMetrics, Result};

/// hides `message`, or the content of `message_file`, in `carrier`
pub fn hide(
    carrier: &Path,
    output: &Path,
    key: &Path,
    message: Option<String>,
    message_file: Option<PathBuf>,
    max_percent_difference: Option<f64>,
) -> Result<HideReport> {
    crate::api::hide::prepare()
        .use_message(message)
        .use_message_file(message_file)
        .with_image(carrier)
        .with_output(output)
        .with_key_output(key)
        .use_max_percent_difference(max_percent_difference)
        .execute()
}

/// unveils the text hidden in `secret_media`, optionally writes it to `output`
pub fn unveil(secret_media: &Path, key: &Path, output: Option<PathBuf>) -> Result<String> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .with_key(key)
        .use_output_file(output)
        .execute()
}

/// measures the distortion between `original` and `modified`
pub fn compare(original: &Path, modified: &Path) -> Result<DistortionMetrics> {
    crate::api::compare::prepare()
        .with_original(original)
        .with_modified(modified)
        .execute()
}
