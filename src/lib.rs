//! Renders quadrants of a 19x19 Go board position, read from the setup
//! stones (`AB`/`AW`) of an SGF record, into PNG images.
//!
//! Pipeline: [`sgf::prepare_sgf`] → [`sgf::extract_stones`] → [`render::render_region`],
//! wrapped by the [`service`] facade.

pub mod canvas;
pub mod config;
pub mod error;
pub mod output;
pub mod region;
pub mod render;
pub mod service;
pub mod sgf;

pub use config::RenderConfig;
pub use error::SgfError;
pub use region::{BoardRegion, REGIONS, find_region};
pub use render::render_region;
pub use service::{RegionImage, all_region_images, region_image};
pub use sgf::{Color, Stone, extract_stones, prepare_sgf};
