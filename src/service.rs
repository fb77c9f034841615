//! Service facade: prepared SGF text in, region images out.
//! Each call extracts its own stone set and passes it down by value, so
//! concurrent calls never see each other's stones.

use std::sync::Arc;

use crate::error::SgfError;
use crate::region::{BoardRegion, REGIONS, find_region};
use crate::render::render_region;
use crate::sgf::{Stone, extract_stones};

/// PNG bytes for one named region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionImage {
    pub name: &'static str,
    pub png: Vec<u8>,
}

/// Renders a single region. The region name is resolved before any drawing.
pub fn region_image(sgf: &str, region_name: &str) -> Result<RegionImage, SgfError> {
    let region = find_region(region_name)?;
    let stones = extract_stones(sgf);
    Ok(RegionImage {
        name: region.name,
        png: render_region(&stones, region)?,
    })
}

/// Renders every catalog region from one extraction, in catalog order.
///
/// Regions are drawn concurrently on blocking worker tasks that share the
/// same read-only stone set. Any failing region fails the whole call.
pub async fn all_region_images(sgf: &str) -> Result<Vec<RegionImage>, SgfError> {
    let stones: Arc<[Stone]> = extract_stones(sgf).into();

    let tasks: Vec<_> = REGIONS
        .iter()
        .map(|region: &'static BoardRegion| {
            let stones = Arc::clone(&stones);
            let task = tokio::task::spawn_blocking(move || render_region(&stones, region));
            (region, task)
        })
        .collect();

    let mut images = Vec::with_capacity(tasks.len());
    for (region, task) in tasks {
        let png = task
            .await
            .map_err(|e| SgfError::render_failure(region.name, e))??;
        images.push(RegionImage {
            name: region.name,
            png,
        });
    }
    Ok(images)
}
