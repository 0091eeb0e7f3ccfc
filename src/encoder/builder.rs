/// Matrix builder - wires placement, masking and mask selection together
use rayon::prelude::*;

use crate::encoder::config;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::mask::apply_mask;
use crate::encoder::penalty::penalty_score;
use crate::encoder::placement::DataPlacer;
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

/// Unmasked symbol: function patterns plus placed codewords
pub struct MatrixBuilder {
    func: FunctionMask,
    ec_level: ECLevel,
    data_grid: BitMatrix,
}

impl MatrixBuilder {
    /// Draw the function patterns and place the final codeword sequence
    pub fn new(version: Version, ec_level: ECLevel, codewords: &[u8]) -> Self {
        let func = FunctionMask::new(version);
        let mut data_grid = func.draw_patterns();
        DataPlacer::place(&mut data_grid, &func, codewords);
        Self {
            func,
            ec_level,
            data_grid,
        }
    }

    /// Version of the symbol being built
    pub fn version(&self) -> Version {
        self.func.version()
    }

    /// Grid before masking; format and version areas are still blank
    #[cfg(test)]
    fn data_grid(&self) -> &BitMatrix {
        &self.data_grid
    }

    /// Finished grid for one mask: masked data plus format and version information
    pub fn trial(&self, mask: MaskPattern) -> BitMatrix {
        let mut grid = self.data_grid.clone();
        apply_mask(&mut grid, mask, &self.func);
        FormatInfo::new(self.ec_level, mask).place(&mut grid);
        VersionInfo::place(&mut grid, self.version());
        grid
    }

    /// Penalty of every mask trial, in ascending mask order
    pub fn mask_penalties(&self) -> Vec<(MaskPattern, i32)> {
        let score = |&mask: &MaskPattern| (mask, penalty_score(&self.trial(mask)));
        if config::parallel_masks() && self.version().number() >= config::parallel_min_version() {
            MaskPattern::ALL.par_iter().map(score).collect()
        } else {
            MaskPattern::ALL.iter().map(score).collect()
        }
    }

    /// Mask with the lowest penalty; ties go to the lowest mask id
    pub fn select_mask(&self) -> MaskPattern {
        let mut best = (MaskPattern::Pattern0, i32::MAX);
        for (mask, penalty) in self.mask_penalties() {
            log::trace!("mask {}: penalty {}", mask.value(), penalty);
            if penalty < best.1 {
                best = (mask, penalty);
            }
        }
        log::debug!(
            "version {}: selected mask {} (penalty {})",
            self.version().number(),
            best.0.value(),
            best.1
        );
        best.0
    }

    /// Fix the given mask, or the best-scoring one, into the final symbol
    pub fn build(self, mask: Option<MaskPattern>) -> QRCode {
        let mask = mask.unwrap_or_else(|| self.select_mask());
        let modules = self.trial(mask);
        QRCode::new(self.version(), self.ec_level, mask, modules)
    }
}
