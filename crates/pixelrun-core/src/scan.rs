//! Scan orders that linearize a 2-D image into a symbol stream.

use serde::{Deserialize, Serialize};

/// Traversal order over the pixels of an image.
///
/// Both orders are expressed as an outer loop over "lines" and an inner loop
/// along each line. Progress is reported per completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanOrder {
    /// Rows top to bottom, each row left to right.
    #[default]
    RowMajor,
    /// Transposed: columns left to right, each column top to bottom.
    ///
    /// Matches printers that paint vertical strokes.
    Vertical,
}

impl ScanOrder {
    /// Select an order from a "vertical print" flag.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            ScanOrder::Vertical
        } else {
            ScanOrder::RowMajor
        }
    }

    /// Number of lines (outer iterations) for an image of this size.
    #[inline]
    pub fn line_count(self, width: u32, height: u32) -> u32 {
        match self {
            ScanOrder::RowMajor => height,
            ScanOrder::Vertical => width,
        }
    }

    /// Number of pixels per line (inner iterations).
    #[inline]
    pub fn line_length(self, width: u32, height: u32) -> u32 {
        match self {
            ScanOrder::RowMajor => width,
            ScanOrder::Vertical => height,
        }
    }

    /// Image coordinates `(x, y)` of the `step`-th pixel of line `line`.
    #[inline]
    pub fn position(self, line: u32, step: u32) -> (u32, u32) {
        match self {
            ScanOrder::RowMajor => (step, line),
            ScanOrder::Vertical => (line, step),
        }
    }

    /// All image coordinates in scan order.
    pub fn positions(self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let lines = self.line_count(width, height);
        let length = self.line_length(width, height);
        (0..lines).flat_map(move |line| (0..length).map(move |step| self.position(line, step)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_positions() {
        let positions: Vec<_> = ScanOrder::RowMajor.positions(3, 2).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_vertical_positions() {
        let positions: Vec<_> = ScanOrder::Vertical.positions(3, 2).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_vertical_on_square_is_transpose() {
        let row: Vec<_> = ScanOrder::RowMajor.positions(4, 4).collect();
        let col: Vec<_> = ScanOrder::Vertical.positions(4, 4).collect();
        for (a, b) in row.iter().zip(&col) {
            assert_eq!((a.1, a.0), *b);
        }
    }

    #[test]
    fn test_line_extents() {
        assert_eq!(ScanOrder::RowMajor.line_count(5, 3), 3);
        assert_eq!(ScanOrder::RowMajor.line_length(5, 3), 5);
        assert_eq!(ScanOrder::Vertical.line_count(5, 3), 5);
        assert_eq!(ScanOrder::Vertical.line_length(5, 3), 3);
    }

    #[test]
    fn test_positions_cover_every_pixel_once() {
        for order in [ScanOrder::RowMajor, ScanOrder::Vertical] {
            let mut seen: Vec<_> = order.positions(7, 3).collect();
            assert_eq!(seen.len(), 21);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 21);
        }
    }

    #[test]
    fn test_from_vertical() {
        assert_eq!(ScanOrder::from_vertical(true), ScanOrder::Vertical);
        assert_eq!(ScanOrder::from_vertical(false), ScanOrder::RowMajor);
        assert_eq!(ScanOrder::default(), ScanOrder::RowMajor);
    }
}
