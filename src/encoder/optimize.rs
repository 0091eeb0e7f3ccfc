//! Cheapest mode sequence for a piece of text
//!
//! Each character can be carried in byte mode, and in alphanumeric or numeric
//! mode when it belongs to those sets. A dynamic program over the characters
//! tracks, for every mode, the cheapest encoding of the prefix that ends in
//! that mode, charging a fresh segment header whenever the mode changes.
use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::segment::SegmentMode;
use crate::models::Version;

/// Candidate modes, indexed by DP state
const MODES: [SegmentMode; 3] = [
    SegmentMode::Byte,
    SegmentMode::Alphanumeric,
    SegmentMode::Numeric,
];

fn state_of(mode: SegmentMode) -> usize {
    match mode {
        SegmentMode::Numeric => 2,
        SegmentMode::Alphanumeric => 1,
        SegmentMode::Byte | SegmentMode::Kanji | SegmentMode::Eci => 0,
    }
}

/// Cost of one character in sixths of a bit, or `None` if `mode` cannot hold it
fn char_cost(mode: SegmentMode, c: char) -> Option<usize> {
    match mode {
        SegmentMode::Numeric => c.is_ascii_digit().then_some(20),
        SegmentMode::Alphanumeric => AlphanumericEncoder::is_char_encodable(c).then_some(33),
        _ => Some(c.len_utf8() * 8 * 6),
    }
}

/// Mode of each character in the cheapest segmentation at `version`
///
/// Ties between equally cheap final modes go to byte, then alphanumeric.
pub fn optimal_modes(chars: &[char], version: Version) -> Vec<SegmentMode> {
    let head_costs: [usize; 3] =
        MODES.map(|mode| (4 + usize::from(mode.num_char_count_bits(version))) * 6);

    let mut prev_costs = head_costs;
    let mut char_modes: Vec<[SegmentMode; 3]> = Vec::with_capacity(chars.len());

    for &c in chars {
        let mut cur_costs = [0usize; 3];
        let mut row: [Option<SegmentMode>; 3] = [None; 3];
        for (i, &mode) in MODES.iter().enumerate() {
            if let Some(cost) = char_cost(mode, c) {
                cur_costs[i] = prev_costs[i] + cost;
                row[i] = Some(mode);
            }
        }

        // A switch closes the open segment on a whole bit
        for j in 0..MODES.len() {
            for k in 0..MODES.len() {
                if row[k].is_none() {
                    continue;
                }
                let switched = cur_costs[k].div_ceil(6) * 6 + head_costs[j];
                if row[j].is_none() || switched < cur_costs[j] {
                    cur_costs[j] = switched;
                    row[j] = Some(MODES[k]);
                }
            }
        }

        // Byte mode holds every character, so every state is reachable
        char_modes.push(row.map(|mode| mode.unwrap_or(SegmentMode::Byte)));
        prev_costs = cur_costs;
    }

    let mut state = (0..MODES.len())
        .min_by_key(|&i| prev_costs[i])
        .unwrap_or(0);
    let mut modes = vec![SegmentMode::Byte; chars.len()];
    for (i, row) in char_modes.iter().enumerate().rev() {
        modes[i] = row[state];
        state = state_of(row[state]);
    }
    modes
}
