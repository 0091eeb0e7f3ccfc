/// Codeword placement into the QR matrix
use crate::encoder::function_mask::FunctionMask;
use crate::models::BitMatrix;

/// Place codeword bits along the zigzag data path
pub struct DataPlacer;

impl DataPlacer {
    /// Write `codewords` (most significant bit first) into the data modules of `matrix`.
    ///
    /// Column pairs are walked right to left, alternating upward and downward,
    /// skipping the vertical timing column. Remainder modules past the last
    /// codeword bit are left untouched.
    ///
    /// # Panics
    /// Panics if the data path is too short for `codewords`.
    pub fn place(matrix: &mut BitMatrix, func: &FunctionMask, codewords: &[u8]) {
        let dimension = func.size();
        debug_assert_eq!(matrix.width(), dimension);
        let total_bits = codewords.len() * 8;
        let mut i = 0;

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for c in [col as usize, col as usize - 1] {
                    if i < total_bits && !func.is_function(c, row) {
                        let bit = (codewords[i >> 3] >> (7 - (i & 7))) & 1 == 1;
                        matrix.set(c, row, bit);
                        i += 1;
                    }
                }
            }

            upward = !upward;
            col -= 2;
        }

        assert_eq!(i, total_bits, "data path shorter than codeword stream");
    }

    /// Number of data modules left over after `num_codewords` full codewords
    #[cfg(test)]
    fn remainder_bits(func: &FunctionMask, num_codewords: usize) -> usize {
        func.data_modules_count() - num_codewords * 8
    }
}
