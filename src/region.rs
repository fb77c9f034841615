//! Board region catalog.
//! Four fixed quadrants of the 19x19 board. Adjacent quadrants share the
//! middle line (x = 9 or y = 9), so stones on it appear in both images.

use crate::error::SgfError;
use crate::sgf::Stone;

/// Rectangular sub-area of the board, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardRegion {
    pub name: &'static str,
    pub start_x: usize,
    pub end_x: usize,
    pub start_y: usize,
    pub end_y: usize,
}

impl BoardRegion {
    /// Number of grid intervals spanned horizontally.
    pub fn width_span(&self) -> usize {
        self.end_x - self.start_x
    }

    /// Number of grid intervals spanned vertically.
    pub fn height_span(&self) -> usize {
        self.end_y - self.start_y
    }

    pub fn contains(&self, stone: &Stone) -> bool {
        (self.start_x..=self.end_x).contains(&stone.x)
            && (self.start_y..=self.end_y).contains(&stone.y)
    }
}

/// Catalog in output order.
pub static REGIONS: [BoardRegion; 4] = [
    BoardRegion { name: "region1", start_x: 9, end_x: 18, start_y: 0, end_y: 9 },
    BoardRegion { name: "region2", start_x: 9, end_x: 18, start_y: 9, end_y: 18 },
    BoardRegion { name: "region3", start_x: 0, end_x: 9, start_y: 0, end_y: 9 },
    BoardRegion { name: "region4", start_x: 0, end_x: 9, start_y: 9, end_y: 18 },
];

/// Looks up a region by name, ignoring ASCII case.
pub fn find_region(name: &str) -> Result<&'static BoardRegion, SgfError> {
    REGIONS
        .iter()
        .find(|region| region.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| SgfError::UnknownRegion(name.to_string()))
}
