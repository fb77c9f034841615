//! Output packaging.
//! JSON responses with base64-encoded PNGs, and the optional on-disk copy of
//! each image as `goboard_<region>.png`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize, Serializer};

use crate::service::RegionImage;

pub const SUCCESS_MESSAGE: &str = "Image generated successfully";

/// Response for a single-region request.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

impl ImageResponse {
    pub fn success(image: &RegionImage) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            image_base64: Some(general_purpose::STANDARD.encode(&image.png)),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            image_base64: None,
        }
    }
}

/// Region name to base64 PNG, serialized as a JSON object in catalog order.
pub struct RegionImages<'a>(pub &'a [RegionImage]);

impl Serialize for RegionImages<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|image| (image.name, general_purpose::STANDARD.encode(&image.png))),
        )
    }
}

pub fn image_file_name(region_name: &str) -> String {
    format!("goboard_{}.png", region_name)
}

/// Writes each image into `dir`, creating it if needed. Returns the written paths.
pub fn save_region_images(dir: &Path, images: &[RegionImage]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    images
        .iter()
        .map(|image| {
            let path = dir.join(image_file_name(image.name));
            fs::write(&path, &image.png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
