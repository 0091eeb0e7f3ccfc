use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Mark every function module of `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns + separators (8x8 areas, clipped to bounds)
        Self::mark_finder_area(&mut mask, 0, 0);
        Self::mark_finder_area(&mut mask, size - 7, 0);
        Self::mark_finder_area(&mut mask, 0, size - 7);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        // Alignment patterns
        for (cx, cy) in alignment_pattern_centers(version) {
            mask.fill_rect(cx - 2, cy - 2, 5, 5, true);
        }

        // Format info areas
        for i in 0..9 {
            if i != 6 {
                mask.set(8, i, true);
                mask.set(i, 8, true);
            }
        }
        for i in 0..8 {
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }

        // Dark module
        mask.set(8, size - 8, true);

        // Version info (v7+)
        if version.number() >= 7 {
            mask.fill_rect(size - 11, 0, 3, 6, true);
            mask.fill_rect(0, size - 11, 6, 3, true);
        }

        Self { mask, version }
    }

    /// Symbol width in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Version this mask was built for
    pub fn version(&self) -> Version {
        self.version
    }

    /// True if module (x, y) is reserved for a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Modules left for codewords and remainder bits
    #[cfg(test)]
    pub(crate) fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }

    /// Grid holding the finder, separator, timing and alignment modules.
    ///
    /// Format and version areas are left light; they are written per mask trial.
    pub fn draw_patterns(&self) -> BitMatrix {
        let size = self.size();
        let mut grid = BitMatrix::square(size);

        for i in 0..size {
            grid.set(6, i, i % 2 == 0);
            grid.set(i, 6, i % 2 == 0);
        }

        for (cx, cy) in [(3, 3), (size - 4, 3), (3, size - 4)] {
            Self::draw_finder(&mut grid, cx, cy);
        }

        for (cx, cy) in alignment_pattern_centers(self.version) {
            for dy in 0..5usize {
                for dx in 0..5usize {
                    let ring = dx.abs_diff(2).max(dy.abs_diff(2));
                    grid.set(cx + dx - 2, cy + dy - 2, ring != 1);
                }
            }
        }

        grid
    }

    /// 7x7 finder plus its light separator ring, clipped to the grid
    fn draw_finder(grid: &mut BitMatrix, cx: usize, cy: usize) {
        for dy in -4i32..=4 {
            for dx in -4i32..=4 {
                let (x, y) = (cx as i32 + dx, cy as i32 + dy);
                if x < 0 || y < 0 {
                    continue;
                }
                let ring = dx.abs().max(dy.abs());
                grid.set(x as usize, y as usize, ring != 2 && ring != 4);
            }
        }
    }

    fn mark_finder_area(mask: &mut BitMatrix, x: usize, y: usize) {
        let size = mask.width();
        let start_x = x.saturating_sub(1);
        let start_y = y.saturating_sub(1);
        let end_x = (x + 7 + 1).min(size);
        let end_y = (y + 7 + 1).min(size);
        mask.fill_rect(start_x, start_y, end_x - start_x, end_y - start_y, true);
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = version.size() - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}

/// Every (x, y) alignment center that does not collide with a finder pattern
fn alignment_pattern_centers(version: Version) -> Vec<(usize, usize)> {
    let positions = alignment_pattern_positions(version);
    let last = positions.len().saturating_sub(1);
    let mut centers = Vec::new();
    for (i, &cx) in positions.iter().enumerate() {
        for (j, &cy) in positions.iter().enumerate() {
            // Skip the three finder corners
            if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                continue;
            }
            centers.push((cx, cy));
        }
    }
    centers
}
