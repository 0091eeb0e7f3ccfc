/// Mask penalty scoring
use crate::models::BitMatrix;

/// Runs of five or more same-colored modules in a row or column
pub const PENALTY_N1: i32 = 3;
/// Each 2x2 block of one color
pub const PENALTY_N2: i32 = 3;
/// Each 1:1:3:1:1 finder-like pattern with four light modules on one side
pub const PENALTY_N3: i32 = 40;
/// Each 5% step of dark-module deviation from 50%
pub const PENALTY_N4: i32 = 10;

/// Total penalty of a finished (masked, format-stamped) symbol grid. Lower is better.
pub fn penalty_score(matrix: &BitMatrix) -> i32 {
    let size = matrix.width();
    debug_assert_eq!(size, matrix.height());
    let mut result = 0;

    for y in 0..size {
        result += line_penalty((0..size).map(|x| matrix.get(x, y)), size);
    }
    for x in 0..size {
        result += line_penalty((0..size).map(|y| matrix.get(x, y)), size);
    }

    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    result + balance_penalty(matrix.count_ones(), size * size)
}

/// Run and finder-like penalties of one row or column
fn line_penalty(modules: impl Iterator<Item = bool>, size: usize) -> i32 {
    let mut result = 0;
    let mut history = FinderPenalty::new(size);
    let mut run_color = false;
    let mut run = 0;

    for color in modules {
        if color == run_color {
            run += 1;
            if run == 5 {
                result += PENALTY_N1;
            } else if run > 5 {
                result += 1;
            }
        } else {
            history.add_history(run);
            if !run_color {
                result += history.count_patterns() * PENALTY_N3;
            }
            run_color = color;
            run = 1;
        }
    }
    result + history.terminate_and_count(run_color, run) * PENALTY_N3
}

/// k * N4 for the smallest k with the dark share inside 50% +- 5(k+1)%
fn balance_penalty(dark: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    let (dark, total) = (dark as i32, total as i32);
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    k * PENALTY_N4
}

/// Last seven run lengths of a line, newest first; the light border counts
/// as part of the first and last runs
struct FinderPenalty {
    size: i32,
    run_history: [i32; 7],
}

impl FinderPenalty {
    fn new(size: usize) -> Self {
        Self {
            size: size as i32,
            run_history: [0; 7],
        }
    }

    /// Finder-like patterns ending at the most recent light run (0, 1 or 2)
    fn count_patterns(&self) -> i32 {
        let rh = &self.run_history;
        let n = rh[1];
        let core = n > 0 && rh[2] == n && rh[3] == n * 3 && rh[4] == n && rh[5] == n;
        i32::from(core && rh[0] >= n * 4 && rh[6] >= n)
            + i32::from(core && rh[6] >= n * 4 && rh[0] >= n)
    }

    /// Close the line, padding it with a light border
    fn terminate_and_count(mut self, run_color: bool, mut run: i32) -> i32 {
        if run_color {
            self.add_history(run);
            run = 0;
        }
        run += self.size;
        self.add_history(run);
        self.count_patterns()
    }

    fn add_history(&mut self, mut run: i32) {
        if self.run_history[0] == 0 {
            run += self.size;
        }
        self.run_history.copy_within(0..6, 1);
        self.run_history[0] = run;
    }
}
