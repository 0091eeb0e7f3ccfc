/// Mask application
use crate::encoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// XOR the mask pattern onto every data module; function modules are untouched.
///
/// Applying the same mask twice restores the original grid.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}
