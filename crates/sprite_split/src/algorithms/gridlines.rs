use tracing::{debug, info};

use crate::{
    algorithms::filter::{NoiseFilter, SizeFilter},
    classifier::GutterClassifier,
    config::SplitConfig,
    error::Result,
    pixels::PixelGrid,
    traits::Segmenter,
    types::{Detection, LineRange, Rect, Segmentation},
};

/// Scan direction for separator lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rows, producing horizontal separators
    Horizontal,
    /// Columns, producing vertical separators
    Vertical,
}

/// Indices of every row (or column) where strictly more than half the pixels are gutter
pub fn find_separator_lines(grid: &PixelGrid, classifier: &GutterClassifier, axis: Axis) -> Vec<u32> {
    let (width, height) = grid.dimensions();
    let (count, span) = match axis {
        Axis::Horizontal => (height, width),
        Axis::Vertical => (width, height),
    };

    (0..count)
        .filter(|&index| {
            let gutter = (0..span)
                .filter(|&offset| match axis {
                    Axis::Horizontal => classifier.is_gutter_at(grid, offset, index),
                    Axis::Vertical => classifier.is_gutter_at(grid, index, offset),
                })
                .count() as u64;
            gutter * 2 > span as u64
        })
        .collect()
}

/// Greedily merge sorted indices into bands; a gap above `max_gap` starts a new band.
///
/// An index lower than the current band end counts as a zero gap and joins the band.
pub fn merge_consecutive(indices: &[u32], max_gap: u32) -> Vec<LineRange> {
    let Some((&first, rest)) = indices.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut current = LineRange::new(first, first);
    for &index in rest {
        if index.saturating_sub(current.end) <= max_gap {
            current.end = index;
        } else {
            ranges.push(current);
            current = LineRange::new(index, index);
        }
    }
    ranges.push(current);
    ranges
}

/// Floored midpoint of every band
pub fn cut_positions(ranges: &[LineRange]) -> Vec<u32> {
    ranges.iter().map(LineRange::midpoint).collect()
}

/// Band boundaries along one axis: 0, every cut position, then the axis length
pub fn axis_splits(ranges: &[LineRange], axis_len: u32) -> Vec<u32> {
    let mut splits = Vec::with_capacity(ranges.len() + 2);
    splits.push(0);
    splits.extend(cut_positions(ranges));
    splits.push(axis_len);
    splits
}

/// Cuts the sheet along majority-gutter rows and columns and keeps the
/// resulting cells that hold enough visible, non-gutter content.
#[derive(Debug, Clone)]
pub struct GridSegmenter {
    pub classifier: GutterClassifier,
    pub max_gap: u32,
    pub size_filter: SizeFilter,
    pub noise_filter: NoiseFilter,
}

impl Default for GridSegmenter {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl GridSegmenter {
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            classifier: config.classifier,
            max_gap: config.max_gap,
            size_filter: SizeFilter::from_config(config),
            noise_filter: NoiseFilter::from_config(config),
        }
    }

    fn accepts(&self, grid: &PixelGrid, rect: &Rect) -> bool {
        if !self.size_filter.accepts_rect(rect) {
            debug!(?rect, "grid cell below minimum size");
            return false;
        }
        if !self.noise_filter.accepts(grid, rect) {
            debug!(?rect, "grid cell is mostly empty or gutter");
            return false;
        }
        true
    }
}

impl Segmenter for GridSegmenter {
    fn segment(&self, grid: &PixelGrid) -> Result<Segmentation> {
        let (width, height) = grid.dimensions();

        let h_lines = find_separator_lines(grid, &self.classifier, Axis::Horizontal);
        let v_lines = find_separator_lines(grid, &self.classifier, Axis::Vertical);
        info!("Detected {} horizontal and {} vertical separator lines", h_lines.len(), v_lines.len());

        let h_bands = merge_consecutive(&h_lines, self.max_gap);
        let v_bands = merge_consecutive(&v_lines, self.max_gap);
        info!("Merged into {} horizontal and {} vertical bands", h_bands.len(), v_bands.len());

        let h_splits = axis_splits(&h_bands, height);
        let v_splits = axis_splits(&v_bands, width);
        let rows = h_splits.len() - 1;
        let columns = v_splits.len() - 1;
        info!("Splitting into {} rows x {} columns", rows, columns);

        let rects: Vec<Rect> = h_splits
            .windows(2)
            .flat_map(|row| {
                v_splits
                    .windows(2)
                    .map(move |col| Rect::new(col[0], row[0], col[1], row[1]))
            })
            .filter(|rect| self.accepts(grid, rect))
            .collect();

        Ok(Segmentation {
            rects,
            candidates: rows * columns,
            detection: Detection::Grid {
                horizontal_lines: h_lines.len(),
                vertical_lines: v_lines.len(),
                horizontal_bands: h_bands,
                vertical_bands: v_bands,
                rows,
                columns,
            },
        })
    }

    fn name(&self) -> &'static str {
        "grid"
    }
}
